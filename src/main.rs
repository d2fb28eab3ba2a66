use bevy::prelude::*;

use bevy::log::LogPlugin;
use bevy::window::WindowResolution;

use transform2d::scene::TransformDemoPlugin;

use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_PREFIX: &str = "transform2d";
const LOGS_TO_KEEP: usize = 25;

fn setup_file_logging() -> std::io::Result<String> {
    // Create logs directory if it doesn't exist
    let log_dir = PathBuf::from("logs");
    fs::create_dir_all(&log_dir)?;

    // Keep only the most recent runs
    cleanup_old_logs(&log_dir, LOGS_TO_KEEP);

    // Timestamped filename, one per run
    let now = chrono::Local::now();
    let log_filename = format!("{}_{}.log", LOG_PREFIX, now.format("%Y%m%d_%H%M%S"));
    let log_path_str = log_dir.join(&log_filename).to_string_lossy().to_string();

    // Don't rotate during a single run
    let file_appender = RollingFileAppender::new(Rotation::NEVER, &log_dir, &log_filename);

    // No ANSI colors in the file
    let file_layer = fmt::layer().with_writer(file_appender).with_ansi(false);

    // Contract violations show up here as well as in the file
    let stdout_layer = fmt::layer().with_writer(std::io::stdout).with_target(false);

    // RUST_LOG wins; otherwise keep Bevy's render noise down
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("wgpu=error,bevy_render=info,bevy_ecs=info,transform2d=info")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    Ok(log_path_str)
}

fn cleanup_old_logs(log_dir: &Path, keep_count: usize) {
    let Ok(entries) = fs::read_dir(log_dir) else { return };

    let mut log_files: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.file_name()
                .to_str()
                .map(|s| s.starts_with(LOG_PREFIX) && s.ends_with(".log"))
                .unwrap_or(false)
        })
        .collect();

    // Oldest first
    log_files.sort_by_key(|e| e.metadata().ok().and_then(|m| m.modified().ok()));

    // Delete oldest files if we exceed keep_count
    if log_files.len() > keep_count {
        for file in log_files.iter().take(log_files.len() - keep_count) {
            let _ = fs::remove_file(file.path());
        }
    }
}

fn main() {
    // The subscriber has to exist before Bevy starts logging
    match setup_file_logging() {
        Ok(log_file) => println!("transform2d: logging to {}", log_file),
        Err(e) => eprintln!("transform2d: file logging unavailable ({}), continuing", e),
    }

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "transform2d".into(),
                        resolution: WindowResolution::new(1280, 720),
                        resizable: true,
                        ..default()
                    }),
                    ..default()
                })
                .build()
                .disable::<LogPlugin>(), // Our own subscriber is installed above
        )
        .add_plugins(TransformDemoPlugin)
        .run();
}
