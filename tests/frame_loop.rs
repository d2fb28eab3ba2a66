use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use transform2d::math::{Mat3, Vec3H};
use transform2d::scene::config::InitialConfig;
use transform2d::scene::input::ArrowInput;
use transform2d::scene::motion::{ModelMatrix, ModelSprite, MotionState};
use transform2d::scene::FramePlugin;

fn frame_app(config: InitialConfig) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.init_resource::<ButtonInput<KeyCode>>();
    app.insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)));
    app.insert_resource(config);
    app.add_plugins(FramePlugin);
    app
}

fn press(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
}

fn release(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().release(key);
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
}

#[test]
fn test_first_frame_composes_initial_pose() {
    let config = InitialConfig {
        start_position: [10.0, 5.0],
        start_scale: [2.0, 3.0],
        ..default()
    };
    let mut app = frame_app(config);

    app.update();

    let model = app.world().resource::<ModelMatrix>().0;
    let expected = Mat3::translation(10.0, 5.0) * Mat3::rotation(0.0) * Mat3::scale(2.0, 3.0);
    assert!(model.approx_eq(&expected, 1e-6), "got {:?}", model);
    assert_eq!(model * Vec3H::point(1.0, 1.0), Vec3H::point(12.0, 8.0));
}

#[test]
fn test_sprite_follows_model_matrix() {
    let config = InitialConfig {
        start_position: [-4.0, 7.0],
        ..default()
    };
    let mut app = frame_app(config);
    let sprite = app
        .world_mut()
        .spawn((Transform::from_xyz(0.0, 0.0, 2.0), ModelSprite))
        .id();
    let bystander = app.world_mut().spawn(Transform::default()).id();

    app.update();

    let transform = app.world().get::<Transform>(sprite).unwrap();
    assert_eq!(transform.translation, Vec3::new(-4.0, 7.0, 2.0), "z is kept");
    let other = app.world().get::<Transform>(bystander).unwrap();
    assert_eq!(other.translation, Vec3::ZERO, "Untagged entities are left alone");
}

#[test]
fn test_arrow_keys_set_and_clear_input_flags() {
    let mut app = frame_app(InitialConfig::default());
    app.update();

    press(&mut app, KeyCode::ArrowLeft);
    press(&mut app, KeyCode::ArrowDown);
    let input = *app.world().resource::<ArrowInput>();
    assert!(input.left_pressed);
    assert!(input.down_pressed);
    assert!(!input.right_pressed && !input.up_pressed);

    release(&mut app, KeyCode::ArrowLeft);
    let input = *app.world().resource::<ArrowInput>();
    assert!(!input.left_pressed);
    assert!(input.down_pressed);
}

#[test]
fn test_holding_up_moves_model_forward() {
    let mut app = frame_app(InitialConfig::default());
    app.update();

    press(&mut app, KeyCode::ArrowUp);
    for _ in 0..5 {
        app.update();
    }

    let state = *app.world().resource::<MotionState>();
    assert!(state.position[1] > 0.0, "Should move along +y, got {:?}", state.position);
    assert!(state.position[0].abs() < 1e-3);

    let model = app.world().resource::<ModelMatrix>().0;
    assert_eq!(model.column(2).y(), state.position[1]);
}

#[test]
fn test_idle_frames_keep_state() {
    let mut app = frame_app(InitialConfig::default());
    app.update();
    let before = *app.world().resource::<MotionState>();

    for _ in 0..3 {
        app.update();
    }

    assert_eq!(*app.world().resource::<MotionState>(), before);
}
