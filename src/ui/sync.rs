//! Systems for ticking the engine and drawing its frames

use bevy::math::Isometry2d;
use bevy::prelude::*;

use super::components::{
    color, to_world, vehicle_rotation, EngineResource, GameOverOverlayRoot, GameOverText, HudLine,
    LastFrame, PendingInput, VehicleBody,
};
use crate::simulation::{Marker, Position};

/// System to run one game frame with the queued input
pub fn tick_simulation(
    mut engine: ResMut<EngineResource>,
    mut pending: ResMut<PendingInput>,
    mut last_frame: ResMut<LastFrame>,
) {
    let events = std::mem::take(&mut pending.0);
    last_frame.0 = Some(engine.0.tick(&events));
}

/// System to place each vehicle mesh, player on top
pub fn sync_vehicle_bodies(
    last_frame: Res<LastFrame>,
    mut bodies: Query<(&VehicleBody, &mut Transform)>,
) {
    let Some(frame) = &last_frame.0 else {
        return;
    };

    for (body, mut transform) in bodies.iter_mut() {
        let Some(vehicle) = frame.vehicles.get(body.0) else {
            continue;
        };
        let depth = if vehicle.is_player { 2.0 } else { 1.0 };
        transform.translation = to_world(vehicle.center).extend(depth);
        transform.rotation = vehicle_rotation(vehicle.rotation);
    }
}

/// System to draw the ambulance cross over its body
pub fn draw_vehicle_markers(last_frame: Res<LastFrame>, mut gizmos: Gizmos) {
    let Some(frame) = &last_frame.0 else {
        return;
    };

    for vehicle in &frame.vehicles {
        if let Some(Marker::Cross { half_length, color: cross }) = vehicle.marker {
            let c = vehicle.center;
            gizmos.line_2d(
                to_world(Position::new(c.x, c.y - half_length)),
                to_world(Position::new(c.x, c.y + half_length)),
                color(cross),
            );
            gizmos.line_2d(
                to_world(Position::new(c.x - half_length, c.y)),
                to_world(Position::new(c.x + half_length, c.y)),
                color(cross),
            );
        }
    }
}

/// System to draw the light housing and its lamps
pub fn draw_light(last_frame: Res<LastFrame>, mut gizmos: Gizmos) {
    let Some(frame) = &last_frame.0 else {
        return;
    };
    let light = &frame.light;

    let (w, h) = light.housing_size;
    gizmos.rect_2d(
        Isometry2d::from_translation(to_world(light.center)),
        Vec2::new(w as f32, h as f32),
        color(light.housing_color),
    );

    for lamp in &light.lamps {
        gizmos.circle_2d(
            Isometry2d::from_translation(to_world(lamp.center)),
            lamp.radius as f32,
            color(lamp.color),
        );
    }
}

/// System to refresh the HUD lines from the last frame
pub fn update_hud_text(last_frame: Res<LastFrame>, mut text_query: Query<(&HudLine, &mut Text)>) {
    let Some(frame) = &last_frame.0 else {
        return;
    };

    for (line, mut text) in text_query.iter_mut() {
        if let Some(hud) = frame.hud.get(line.0) {
            if **text != *hud {
                **text = hud.clone();
            }
        }
    }
}

/// System to show or hide the game-over overlay
pub fn update_game_over_text(
    last_frame: Res<LastFrame>,
    mut root_query: Query<&mut Visibility, With<GameOverOverlayRoot>>,
    mut text_query: Query<(&GameOverText, &mut Text)>,
) {
    let overlay = last_frame.0.as_ref().and_then(|f| f.game_over.as_ref());

    for mut visibility in root_query.iter_mut() {
        *visibility = if overlay.is_some() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }

    let Some(overlay) = overlay else {
        return;
    };

    for (part, mut text) in text_query.iter_mut() {
        **text = match part {
            GameOverText::Title => overlay.title.clone(),
            GameOverText::Reason => overlay.reason.clone(),
            GameOverText::Prompt => overlay.prompt.clone(),
        };
    }
}
