//! Standalone traffic game simulation
//!
//! This module contains all the core game logic that can run independently
//! of the Bevy game engine. It can be tested via console without needing to
//! boot up a window.

mod collision;
mod driver;
mod engine;
mod frame;
mod input;
mod polygon;
mod session;
mod traffic_light;
mod types;
mod vehicle;

// Re-export public types for external use
pub use collision::{colliding_pairs, collides, outlines_overlap};
pub use driver::RandomDriver;
pub use engine::SimEngine;
pub use frame::{
    vehicle_color, FrameResult, GameOverOverlay, LampDraw, LightDraw, Marker, Rgb, VehicleDraw,
    GAME_OVER_TITLE, HUD_CONTROLS, HUD_OBJECTIVE, RESTART_PROMPT,
};
pub use input::{Action, InputEvent};
pub use polygon::{contains_point, Polygon};
pub use session::{Layout, LossReason, SimulationSession, Spawn};
pub use traffic_light::{LightState, TrafficLight};
pub use types::{
    is_on_road, wrap_with_margin, Position, Rect, GLOBAL_SPEED_SCALE, H_ROAD_H, H_ROAD_Y,
    LIGHT_PHASE_TICKS, LIGHT_POSITION, PLAYER_SPEED_SCALE, STOP_ZONE, VIEWPORT_HEIGHT,
    VIEWPORT_WIDTH, VIOLATION_ZONE, V_ROAD_W, V_ROAD_X, WRAP_MARGIN,
};
pub use vehicle::{normalize_degrees, PlayerControls, Vehicle, VehicleId, VehicleKind};
