use bevy::prelude::*;

use super::config::{KeyBindings, MotionConfig};

/// Which arrow keys are currently held.
#[derive(Resource, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ArrowInput {
    pub left_pressed: bool,
    pub right_pressed: bool,
    pub up_pressed: bool,
    pub down_pressed: bool,
}

impl ArrowInput {
    pub fn on_key_down(&mut self, key: KeyCode, keys: &KeyBindings) {
        self.set(key, keys, true);
    }

    pub fn on_key_up(&mut self, key: KeyCode, keys: &KeyBindings) {
        self.set(key, keys, false);
    }

    /// +1 for left (counter-clockwise), -1 for right.
    pub fn turn_axis(&self) -> f32 {
        axis(self.left_pressed, self.right_pressed)
    }

    /// +1 for forward, -1 for backward.
    pub fn thrust_axis(&self) -> f32 {
        axis(self.up_pressed, self.down_pressed)
    }

    fn set(&mut self, key: KeyCode, keys: &KeyBindings, pressed: bool) {
        if key == keys.left {
            self.left_pressed = pressed;
        } else if key == keys.right {
            self.right_pressed = pressed;
        } else if key == keys.down {
            self.down_pressed = pressed;
        } else if key == keys.up {
            self.up_pressed = pressed;
        }
    }
}

fn axis(positive: bool, negative: bool) -> f32 {
    positive as i8 as f32 - negative as i8 as f32
}

pub fn read_arrow_keys(
    keys: Res<ButtonInput<KeyCode>>,
    settings: Res<MotionConfig>,
    mut input: ResMut<ArrowInput>,
) {
    for key in keys.get_just_pressed() {
        input.on_key_down(*key, &settings.keys);
    }
    for key in keys.get_just_released() {
        input.on_key_up(*key, &settings.keys);
    }
}
