use bevy::prelude::*;
use bevy_common_assets::ron::RonAssetPlugin;
use serde::{Deserialize, Serialize};

use crate::contract::ContractMode;

use super::motion::TransformMath;

/// Static configuration loaded once at startup.
#[derive(Resource, Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct InitialConfig {
    /// Whether contract checks run. Fixed for the lifetime of the process.
    pub contract_mode: ContractMode,

    // Starting pose of the model
    pub start_position: [f32; 2],
    pub start_angle: f32,
    pub start_scale: [f32; 2],

    // Sprite
    pub sprite_size: f32,
    pub sprite_color: [f32; 3],
}

#[derive(Deserialize, Serialize, Clone, Copy, Debug, PartialEq)]
pub struct KeyBindings {
    pub left: KeyCode,
    pub right: KeyCode,
    pub up: KeyCode,
    pub down: KeyCode,
}

/// Runtime configuration that can be hot-reloaded while the demo runs.
#[derive(Resource, Deserialize, Serialize, Asset, TypePath, Clone, Debug, PartialEq)]
pub struct MotionConfig {
    pub keys: KeyBindings,
    /// World units per second along the heading.
    pub move_speed: f32,
    /// Radians per second.
    pub turn_speed: f32,
}

#[derive(Resource)]
pub struct MotionConfigHandle(pub Handle<MotionConfig>);

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(RonAssetPlugin::<MotionConfig>::new(&["motion_config.ron"]))
            .init_resource::<MotionConfig>()
            .add_systems(PreStartup, (load_initial_config, setup_runtime_config).chain())
            .add_systems(Update, sync_motion_config.before(super::FrameSet::Input));
    }
}

pub fn parse_initial_config(contents: &str) -> Result<InitialConfig, ron::error::SpannedError> {
    ron::from_str::<InitialConfig>(contents)
}

const INITIAL_CONFIG_PATH: &str = "assets/initial_config.ron";

/// Read and parse the static configuration, falling back to defaults.
pub fn read_initial_config(path: &str) -> InitialConfig {
    match std::fs::read_to_string(path) {
        Ok(contents) => match parse_initial_config(&contents) {
            Ok(config) => {
                info!("Loaded initial config from {}", path);
                config
            }
            Err(e) => {
                error!("Failed to parse initial config: {}", e);
                error!("Using default InitialConfig");
                InitialConfig::default()
            }
        },
        Err(e) => {
            error!("Failed to read {}: {}", path, e);
            error!("Using default InitialConfig");
            InitialConfig::default()
        }
    }
}

/// Load static configuration synchronously and set up the contract mode.
/// This must run before anything that builds transforms.
fn load_initial_config(mut commands: Commands) {
    let config = read_initial_config(INITIAL_CONFIG_PATH);
    let math = TransformMath::from_config(&config);

    info!("Contract checks: {:?}", math.mode());
    commands.insert_resource(math);
    commands.insert_resource(config);
}

fn setup_runtime_config(mut commands: Commands, asset_server: Res<AssetServer>) {
    let handle = asset_server.load("motion_config.ron");
    commands.insert_resource(MotionConfigHandle(handle));
}

fn sync_motion_config(
    config_handle: Res<MotionConfigHandle>,
    motion_configs: Res<Assets<MotionConfig>>,
    mut events: MessageReader<AssetEvent<MotionConfig>>,
    mut settings: ResMut<MotionConfig>,
) {
    for event in events.read() {
        if event.is_modified(config_handle.0.id())
            || event.is_loaded_with_dependencies(config_handle.0.id())
        {
            if let Some(config) = motion_configs.get(&config_handle.0) {
                *settings = config.clone();
                info!(
                    "Updated motion config: move_speed={}, turn_speed={}",
                    config.move_speed, config.turn_speed
                );
            }
        }
    }
}

impl Default for InitialConfig {
    fn default() -> Self {
        Self {
            contract_mode: ContractMode::default(),
            start_position: [0.0, 0.0],
            start_angle: 0.0,
            start_scale: [1.0, 1.0],
            sprite_size: 64.0,
            sprite_color: [0.9, 0.6, 0.2],
        }
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left: KeyCode::ArrowLeft,
            right: KeyCode::ArrowRight,
            up: KeyCode::ArrowUp,
            down: KeyCode::ArrowDown,
        }
    }
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            keys: KeyBindings::default(),
            move_speed: 200.0,
            turn_speed: 3.0,
        }
    }
}
