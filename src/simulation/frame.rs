//! Drawable description of one simulated frame
//!
//! The front end (Bevy UI or the console map) reads these after `tick`
//! returns; nothing here touches the live session.

use super::traffic_light::{LightState, TrafficLight};
use super::types::Position;
use super::vehicle::{Vehicle, VehicleId, VehicleKind};

/// An sRGB colour in 8-bit channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLUE: Rgb = Rgb(0, 0, 255);
    pub const BROWN: Rgb = Rgb(139, 69, 19);
    pub const RED: Rgb = Rgb(255, 0, 0);
    pub const YELLOW: Rgb = Rgb(255, 255, 0);
    pub const GREEN: Rgb = Rgb(0, 255, 0);
    pub const GRAY: Rgb = Rgb(128, 128, 128);
    pub const DARK_GRAY: Rgb = Rgb(64, 64, 64);
    pub const WHITE: Rgb = Rgb(255, 255, 255);
}

/// Fill colour for a vehicle kind
pub fn vehicle_color(kind: VehicleKind) -> Rgb {
    match kind {
        VehicleKind::Car => Rgb::BLUE,
        VehicleKind::Truck => Rgb::BROWN,
        VehicleKind::Ambulance => Rgb::RED,
    }
}

/// Extra decoration drawn on top of a vehicle outline
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Marker {
    /// White plus sign centred on the vehicle, arms of the given half length
    Cross { half_length: f64, color: Rgb },
}

/// One filled vehicle outline
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleDraw {
    pub id: VehicleId,
    pub kind: VehicleKind,
    pub outline: Vec<Position>,
    pub center: Position,
    /// Heading in degrees, as on the vehicle
    pub rotation: f64,
    pub fill: Rgb,
    pub marker: Option<Marker>,
    pub is_player: bool,
    /// Held at the stop line this frame
    pub held: bool,
}

impl VehicleDraw {
    pub fn from_vehicle(vehicle: &Vehicle, is_player: bool, held: bool) -> Self {
        let marker = match vehicle.kind {
            VehicleKind::Ambulance => Some(Marker::Cross {
                half_length: 5.0,
                color: Rgb::WHITE,
            }),
            VehicleKind::Car | VehicleKind::Truck => None,
        };
        Self {
            id: vehicle.id,
            kind: vehicle.kind,
            outline: vehicle.points(),
            center: vehicle.position,
            rotation: vehicle.rotation(),
            fill: vehicle_color(vehicle.kind),
            marker,
            is_player,
            held,
        }
    }
}

/// One lamp of the light
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LampDraw {
    pub center: Position,
    pub radius: f64,
    pub color: Rgb,
    pub lit: bool,
}

/// The light housing and its three lamps, top to bottom
#[derive(Debug, Clone, PartialEq)]
pub struct LightDraw {
    pub state: LightState,
    pub center: Position,
    pub housing_size: (f64, f64),
    pub housing_color: Rgb,
    pub lamps: [LampDraw; 3],
}

const LAMP_RADIUS: f64 = 5.0;
const LAMP_SPACING: f64 = 20.0;

impl LightDraw {
    pub fn from_light(light: &TrafficLight) -> Self {
        let state = light.state();
        let center = light.position;
        let lamp = |dy: f64, lit_state: LightState, on: Rgb| {
            let lit = state == lit_state;
            LampDraw {
                center: Position::new(center.x, center.y + dy),
                radius: LAMP_RADIUS,
                color: if lit { on } else { Rgb::GRAY },
                lit,
            }
        };

        Self {
            state,
            center,
            housing_size: (30.0, 90.0),
            housing_color: Rgb::DARK_GRAY,
            lamps: [
                lamp(-LAMP_SPACING, LightState::Red, Rgb::RED),
                lamp(0.0, LightState::Yellow, Rgb::YELLOW),
                lamp(LAMP_SPACING, LightState::Green, Rgb::GREEN),
            ],
        }
    }

    /// The lamp that is currently on
    pub fn lit_lamp(&self) -> Option<&LampDraw> {
        self.lamps.iter().find(|l| l.lit)
    }
}

/// Overlay shown once the session is lost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverOverlay {
    pub title: String,
    pub reason: String,
    pub prompt: String,
}

pub const HUD_OBJECTIVE: &str = "Obey the lights. Avoid crashes! Don't leave the road.";
pub const HUD_CONTROLS: &str = "W/S: Move | A/D: Turn | Press R to Restart after losing";
pub const GAME_OVER_TITLE: &str = "YOU LOST!";
pub const RESTART_PROMPT: &str = "Press R to Restart";

impl GameOverOverlay {
    pub fn new(reason: &str) -> Self {
        Self {
            title: GAME_OVER_TITLE.to_string(),
            reason: reason.to_string(),
            prompt: RESTART_PROMPT.to_string(),
        }
    }
}

/// Everything the render sink needs for one frame
///
/// Vehicles are in session order, so the player comes last and is drawn on
/// top.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameResult {
    pub frame: u64,
    pub vehicles: Vec<VehicleDraw>,
    pub light: LightDraw,
    pub hud: Vec<String>,
    pub game_over: Option<GameOverOverlay>,
}

impl FrameResult {
    pub fn is_game_over(&self) -> bool {
        self.game_over.is_some()
    }

    pub fn player(&self) -> Option<&VehicleDraw> {
        self.vehicles.iter().find(|v| v.is_player)
    }
}
