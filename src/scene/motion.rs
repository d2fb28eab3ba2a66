use bevy::math::Affine2;
use bevy::prelude::*;

use crate::contract::Contracts;
use crate::math::{Mat3, Result, Transforms, Vec3H};

use super::config::{InitialConfig, MotionConfig};
use super::input::ArrowInput;

/// The validated transform surface, configured from [`InitialConfig`].
#[derive(Resource, Clone, Debug, Default, Deref)]
pub struct TransformMath(pub Transforms);

impl TransformMath {
    pub fn from_config(config: &InitialConfig) -> Self {
        Self(Transforms::new(Contracts::new(config.contract_mode)))
    }
}

/// Pose of the model in the world.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct MotionState {
    pub position: [f32; 2],
    pub angle: f32,
    pub scale: [f32; 2],
}

impl MotionState {
    pub fn from_config(config: &InitialConfig) -> Self {
        Self {
            position: config.start_position,
            angle: config.start_angle,
            scale: config.start_scale,
        }
    }

    /// Turn, then move along the new heading. The heading is the local up
    /// direction `(0, 1)` rotated by the current angle.
    pub fn advance(
        &mut self,
        input: &ArrowInput,
        settings: &MotionConfig,
        dt: f32,
        math: &Transforms,
    ) -> Result<()> {
        let angle = self.angle + input.turn_axis() * settings.turn_speed * dt;
        let heading = math
            .rotation(angle)?
            .multiply_vector(Vec3H::direction(0.0, 1.0));
        let step = input.thrust_axis() * settings.move_speed * dt;
        let moved = math
            .translation(heading.x() * step, heading.y() * step)?
            .multiply_vector(Vec3H::point(self.position[0], self.position[1]));

        self.angle = angle;
        self.position = [moved.x(), moved.y()];
        Ok(())
    }

    pub fn model_matrix(&self, math: &Transforms) -> Result<Mat3> {
        math.compose(self.position, self.angle, self.scale)
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::from_config(&InitialConfig::default())
    }
}

/// The combined transform handed to rendering each frame.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Deref)]
pub struct ModelMatrix(pub Mat3);

/// Marks entities whose [`Transform`] follows the [`ModelMatrix`].
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct ModelSprite;

pub fn init_motion_state(mut commands: Commands, config: Option<Res<InitialConfig>>) {
    let state = config
        .map(|config| MotionState::from_config(&config))
        .unwrap_or_default();
    debug!("Initial motion state: {:?}", state);
    commands.insert_resource(state);
}

pub fn advance_motion(
    time: Res<Time>,
    input: Res<ArrowInput>,
    settings: Res<MotionConfig>,
    math: Res<TransformMath>,
    mut state: ResMut<MotionState>,
) {
    let mut next = *state;
    match next.advance(&input, &settings, time.delta_secs(), &math) {
        Ok(()) => {
            if next != *state {
                *state = next;
            }
        }
        Err(e) => warn!("Motion step rejected: {}", e),
    }
}

pub fn compose_model_matrix(
    state: Res<MotionState>,
    math: Res<TransformMath>,
    mut model: ResMut<ModelMatrix>,
) {
    if !state.is_changed() {
        return;
    }
    match state.model_matrix(&math) {
        Ok(matrix) => model.0 = matrix,
        Err(e) => warn!("Rejected model transform, keeping previous: {}", e),
    }
}

pub fn apply_model_matrix(
    model: Res<ModelMatrix>,
    mut query: Query<&mut Transform, With<ModelSprite>>,
) {
    let target = model_to_transform(&model.0);
    for mut transform in query.iter_mut() {
        let z = transform.translation.z;
        *transform = target;
        transform.translation.z = z;
    }
}

/// Split an affine translate-rotate-scale matrix into a Bevy [`Transform`].
///
/// A reflection (negative determinant) ends up as a negative x scale. Shear
/// is not representable and is dropped.
pub fn model_to_transform(m: &Mat3) -> Transform {
    let (scale, angle, translation) =
        Affine2::from_mat3(m.to_bevy()).to_scale_angle_translation();

    Transform::from_translation(translation.extend(0.0))
        .with_rotation(Quat::from_rotation_z(angle))
        .with_scale(scale.extend(1.0))
}
