//! Scripted input for headless runs
//!
//! Produces a reproducible stream of key presses and releases so the game
//! can be exercised from the console without a keyboard.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::Rng;
use rand::SeedableRng;

use super::input::{Action, InputEvent};

const DIRECTIONS: [Action; 4] = [
    Action::Accelerate,
    Action::Decelerate,
    Action::TurnLeft,
    Action::TurnRight,
];

/// A random driver that occasionally toggles one directional key
pub struct RandomDriver {
    rng: StdRng,
    held: Vec<Action>,
    /// Chance per frame of toggling a key
    toggle_chance: f64,
}

impl RandomDriver {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            held: Vec::new(),
            toggle_chance: 0.05,
        }
    }

    pub fn with_toggle_chance(mut self, chance: f64) -> Self {
        self.toggle_chance = chance.clamp(0.0, 1.0);
        self
    }

    pub fn held(&self) -> &[Action] {
        &self.held
    }

    /// Events for the next frame
    ///
    /// After a loss the driver lets go of everything and presses restart.
    pub fn next_events(&mut self, game_over: bool) -> Vec<InputEvent> {
        if game_over {
            let mut events: Vec<InputEvent> =
                self.held.drain(..).map(InputEvent::Released).collect();
            events.push(InputEvent::Pressed(Action::Restart));
            return events;
        }

        if !self.rng.random_bool(self.toggle_chance) {
            return Vec::new();
        }

        let Some(&action) = DIRECTIONS.choose(&mut self.rng) else {
            return Vec::new();
        };

        if let Some(index) = self.held.iter().position(|a| *a == action) {
            self.held.remove(index);
            vec![InputEvent::Released(action)]
        } else {
            self.held.push(action);
            vec![InputEvent::Pressed(action)]
        }
    }
}
