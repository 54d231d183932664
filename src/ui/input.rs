//! Input handling systems

use bevy::prelude::*;

use super::components::PendingInput;
use crate::simulation::{Action, InputEvent};

/// Keys bound to each logical action
const BINDINGS: [(KeyCode, Action); 9] = [
    (KeyCode::KeyW, Action::Accelerate),
    (KeyCode::ArrowUp, Action::Accelerate),
    (KeyCode::KeyS, Action::Decelerate),
    (KeyCode::ArrowDown, Action::Decelerate),
    (KeyCode::KeyA, Action::TurnLeft),
    (KeyCode::ArrowLeft, Action::TurnLeft),
    (KeyCode::KeyD, Action::TurnRight),
    (KeyCode::ArrowRight, Action::TurnRight),
    (KeyCode::KeyR, Action::Restart),
];

/// Queue key presses and releases for the next simulation tick
pub fn handle_game_keys(keyboard: Res<ButtonInput<KeyCode>>, mut pending: ResMut<PendingInput>) {
    for (key, action) in BINDINGS {
        if keyboard.just_pressed(key) {
            pending.0.push(InputEvent::Pressed(action));
        }
        if keyboard.just_released(key) {
            pending.0.push(InputEvent::Released(action));
        }
    }
}

/// Exit on Escape
pub fn handle_exit(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.just_pressed(KeyCode::Escape) {
        exit.write(AppExit::Success);
    }
}
