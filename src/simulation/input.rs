//! Logical input events delivered by the front end
//!
//! The simulation never sees raw key codes, only these actions.

/// One of the five logical signals the player can send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Accelerate,
    Decelerate,
    TurnLeft,
    TurnRight,
    /// Start a fresh session after losing
    Restart,
}

/// A key-state change for a logical action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(Action),
    Released(Action),
}

impl InputEvent {
    pub fn action(&self) -> Action {
        match self {
            InputEvent::Pressed(action) | InputEvent::Released(action) => *action,
        }
    }

    pub fn is_pressed(&self) -> bool {
        matches!(self, InputEvent::Pressed(_))
    }
}
