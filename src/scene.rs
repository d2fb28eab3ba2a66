use bevy::prelude::*;

pub mod config;
pub mod input;
pub mod motion;

use config::{ConfigPlugin, InitialConfig, MotionConfig};
use input::{read_arrow_keys, ArrowInput};
use motion::{
    advance_motion, apply_model_matrix, compose_model_matrix, init_motion_state, ModelMatrix,
    ModelSprite, TransformMath,
};

/// Ordering of the per-frame work: read input, update the model, render it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Input,
    Update,
    Render,
}

/// Everything needed to run the demo in a window.
pub struct TransformDemoPlugin;

impl Plugin for TransformDemoPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((ConfigPlugin, FramePlugin, ScenePlugin));
    }
}

/// The per-frame update/render loop, without any windowing or assets.
pub struct FramePlugin;

impl Plugin for FramePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (FrameSet::Input, FrameSet::Update, FrameSet::Render).chain(),
        )
        .init_resource::<ArrowInput>()
        .init_resource::<MotionConfig>()
        .init_resource::<ModelMatrix>()
        .init_resource::<TransformMath>()
        .add_systems(Startup, init_motion_state)
        .add_systems(
            Update,
            (
                read_arrow_keys.in_set(FrameSet::Input),
                (advance_motion, compose_model_matrix)
                    .chain()
                    .in_set(FrameSet::Update),
                apply_model_matrix.in_set(FrameSet::Render),
            ),
        );
    }
}

pub struct ScenePlugin;

impl Plugin for ScenePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_scene);
    }
}

fn setup_scene(mut commands: Commands, config: Option<Res<InitialConfig>>) {
    info!("Scene setup started");
    let config = config.map(|c| c.clone()).unwrap_or_default();
    let [r, g, b] = config.sprite_color;

    commands.spawn(Camera2d::default());

    commands.spawn((
        Sprite::from_color(Color::srgb(r, g, b), Vec2::splat(config.sprite_size)),
        Transform::default(),
        ModelSprite,
    ));
}
