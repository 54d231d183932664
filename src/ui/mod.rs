//! UI module that visualizes the game using Bevy
//!
//! This module is purely a render sink and input source - all game logic is
//! in the `simulation` module. The UI collects key presses, hands them to
//! `SimEngine::tick` on a fixed timestep, and draws the returned frame.

mod components;
mod input;
mod sync;
mod world;

use bevy::prelude::*;

pub use components::{EngineResource, LastFrame, PendingInput};

use input::{handle_exit, handle_game_keys};
use sync::{
    draw_light, draw_vehicle_markers, sync_vehicle_bodies, tick_simulation, update_game_over_text,
    update_hud_text,
};
use world::{setup_hud, setup_vehicles, setup_world};

/// Frames per second of the game logic
pub const TICK_RATE_HZ: f64 = 60.0;

/// Plugin to register all UI systems
///
/// Expects an `EngineResource` to be inserted before the app runs.
pub struct TrafficFlowUIPlugin;

impl Plugin for TrafficFlowUIPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingInput>()
            .init_resource::<LastFrame>()
            .insert_resource(Time::<Fixed>::from_hz(TICK_RATE_HZ))
            .insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, (setup_world, setup_vehicles, setup_hud))
            .add_systems(FixedUpdate, tick_simulation)
            .add_systems(
                Update,
                (
                    handle_game_keys,
                    handle_exit,
                    sync_vehicle_bodies,
                    draw_vehicle_markers,
                    draw_light,
                    update_hud_text,
                    update_game_over_text,
                ),
            );
    }
}
