//! World setup systems for camera, road surface and HUD

use bevy::mesh::{Indices, PrimitiveTopology};
use bevy::prelude::*;

use super::components::{
    color, to_world, EngineResource, GameOverOverlayRoot, GameOverText, HudLine, MainCamera,
    RoadSurface, VehicleBody,
};
use crate::simulation::{
    vehicle_color, Position, H_ROAD_H, H_ROAD_Y, HUD_CONTROLS, HUD_OBJECTIVE, VIEWPORT_HEIGHT,
    VIEWPORT_WIDTH, V_ROAD_W, V_ROAD_X,
};

const ROAD_COLOR: Color = Color::srgb(120.0 / 255.0, 120.0 / 255.0, 120.0 / 255.0);
const SIDEWALK_COLOR: Color = Color::srgb(80.0 / 255.0, 80.0 / 255.0, 80.0 / 255.0);
const SIDEWALK_WIDTH: f64 = 12.0;

/// System to setup the camera and the two road bands
pub fn setup_world(mut commands: Commands) {
    commands.spawn((MainCamera, Camera2d));

    let h_y = f64::from(H_ROAD_Y);
    let h_h = f64::from(H_ROAD_H);
    let v_x = f64::from(V_ROAD_X);
    let v_w = f64::from(V_ROAD_W);

    // (left, top, width, height, colour, depth) in screen space
    let bands = [
        (
            0.0,
            h_y - SIDEWALK_WIDTH,
            VIEWPORT_WIDTH,
            h_h + 2.0 * SIDEWALK_WIDTH,
            SIDEWALK_COLOR,
            0.0,
        ),
        (
            v_x - SIDEWALK_WIDTH,
            0.0,
            v_w + 2.0 * SIDEWALK_WIDTH,
            VIEWPORT_HEIGHT,
            SIDEWALK_COLOR,
            0.0,
        ),
        (0.0, h_y, VIEWPORT_WIDTH, h_h, ROAD_COLOR, 0.1),
        (v_x, 0.0, v_w, VIEWPORT_HEIGHT, ROAD_COLOR, 0.1),
    ];

    for (left, top, width, height, color, depth) in bands {
        let center = to_world(Position::new(left + width / 2.0, top + height / 2.0));
        commands.spawn((
            RoadSurface,
            Sprite::from_color(color, Vec2::new(width as f32, height as f32)),
            Transform::from_translation(center.extend(depth)),
        ));
    }
}

/// System to spawn one filled mesh per vehicle in the session
///
/// Meshes are built from the local outline once; `sync_vehicle_bodies`
/// places them every frame. Restarts reuse them since the layout is fixed.
pub fn setup_vehicles(
    mut commands: Commands,
    engine: Res<EngineResource>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    for (index, vehicle) in engine.0.session().vehicles().iter().enumerate() {
        let (positions, indices) = fan_geometry(vehicle.shape().local_points());
        let mesh = Mesh::new(PrimitiveTopology::TriangleList, default())
            .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
            .with_inserted_indices(Indices::U32(indices));

        commands.spawn((
            VehicleBody(index),
            Mesh2d(meshes.add(mesh)),
            MeshMaterial2d(materials.add(color(vehicle_color(vehicle.kind)))),
            Transform::from_translation(to_world(vehicle.position).extend(1.0)),
        ));
    }
}

/// Triangle fan over a local outline, y flipped into Bevy's y-up frame
///
/// Stock outlines are convex, so a fan from the first vertex fills them.
fn fan_geometry(points: &[Position]) -> (Vec<[f32; 3]>, Vec<u32>) {
    let positions = points
        .iter()
        .map(|p| [p.x as f32, -p.y as f32, 0.0])
        .collect();
    let indices = (1..points.len().saturating_sub(1) as u32)
        .flat_map(|i| [0, i, i + 1])
        .collect();
    (positions, indices)
}

/// System to setup the HUD lines and the hidden game-over overlay
pub fn setup_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            top: Val::Px(5.0),
            left: Val::Px(10.0),
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(3.0),
            ..default()
        })
        .with_children(|parent| {
            for (index, line) in [HUD_OBJECTIVE, HUD_CONTROLS].into_iter().enumerate() {
                parent.spawn((
                    Text::new(line),
                    TextFont {
                        font_size: 12.0,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    HudLine(index),
                ));
            }
        });

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(10.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
            Visibility::Hidden,
            GameOverOverlayRoot,
        ))
        .with_children(|parent| {
            let parts = [
                (GameOverText::Title, 42.0, Color::srgb(1.0, 0.0, 0.0)),
                (GameOverText::Reason, 22.0, Color::WHITE),
                (GameOverText::Prompt, 22.0, Color::WHITE),
            ];
            for (part, size, color) in parts {
                parent.spawn((
                    Text::new(""),
                    TextFont {
                        font_size: size,
                        ..default()
                    },
                    TextColor(color),
                    part,
                ));
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_covers_quad_with_two_triangles() {
        let quad = [
            Position::new(-5.0, 5.0),
            Position::new(15.0, 5.0),
            Position::new(15.0, -5.0),
            Position::new(-5.0, -5.0),
        ];
        let (positions, indices) = fan_geometry(&quad);
        assert_eq!(positions[0], [-5.0, -5.0, 0.0]);
        assert_eq!(positions.len(), 4);
        assert_eq!(indices, vec![0, 1, 2, 0, 2, 3]);
    }
}
