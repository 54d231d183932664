//! UI components and resources linking Bevy to the game engine

use bevy::prelude::*;

use crate::simulation::{
    FrameResult, InputEvent, Position, Rgb, SimEngine, VIEWPORT_HEIGHT, VIEWPORT_WIDTH,
};

/// Resource wrapper for the game engine
#[derive(Resource)]
pub struct EngineResource(pub SimEngine);

/// Input events gathered since the last fixed tick
#[derive(Resource, Default)]
pub struct PendingInput(pub Vec<InputEvent>);

/// The most recent frame returned by the engine
#[derive(Resource, Default)]
pub struct LastFrame(pub Option<FrameResult>);

/// Marker component for the main camera
#[derive(Component)]
pub struct MainCamera;

/// Marker for the road surface sprites
#[derive(Component)]
pub struct RoadSurface;

/// Filled mesh for the vehicle at this session index
#[derive(Component, Clone, Copy)]
pub struct VehicleBody(pub usize);

/// Which HUD line a text entity shows
#[derive(Component, Clone, Copy)]
pub struct HudLine(pub usize);

/// Marker for the game-over overlay root
#[derive(Component)]
pub struct GameOverOverlayRoot;

/// Text parts of the game-over overlay
#[derive(Component, Clone, Copy)]
pub enum GameOverText {
    Title,
    Reason,
    Prompt,
}

pub fn color(rgb: Rgb) -> Color {
    Color::srgb_u8(rgb.0, rgb.1, rgb.2)
}

/// Convert a screen-space game position (y down, origin top-left) to a
/// Bevy world point (y up, origin at the window centre)
pub fn to_world(position: Position) -> Vec2 {
    Vec2::new(
        (position.x - VIEWPORT_WIDTH / 2.0) as f32,
        (VIEWPORT_HEIGHT / 2.0 - position.y) as f32,
    )
}

/// Rotation of a vehicle mesh for a screen-space heading in degrees
///
/// Flipping y reverses the turning direction, hence the negation.
pub fn vehicle_rotation(degrees: f64) -> Quat {
    Quat::from_rotation_z(-degrees.to_radians() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_window_edges() {
        assert_eq!(to_world(Position::new(0.0, 0.0)), Vec2::new(-400.0, 300.0));
        assert_eq!(to_world(Position::new(800.0, 600.0)), Vec2::new(400.0, -300.0));
        assert_eq!(to_world(Position::new(400.0, 300.0)), Vec2::ZERO);
    }

    #[test]
    fn screen_heading_maps_to_clockwise_turn() {
        // 90 degrees on screen points down, which is -y in the world
        let forward = vehicle_rotation(90.0) * Vec3::X;
        assert!((forward - Vec3::NEG_Y).length() < 1e-6);
    }
}
