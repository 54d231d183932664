//! Session state for one round of the game
//!
//! A session owns every vehicle, the light, the player's controls and the
//! loss latch. Restarting throws the whole session away and builds a new one
//! from the same layout.

use anyhow::{bail, Result};
use std::fmt;

use super::polygon::Polygon;
use super::traffic_light::{LightState, TrafficLight};
use super::types::{
    Position, GLOBAL_SPEED_SCALE, H_ROAD_H, H_ROAD_Y, LIGHT_POSITION, PLAYER_SPEED_SCALE,
    VIEWPORT_HEIGHT, VIEWPORT_WIDTH, V_ROAD_X,
};
use super::vehicle::{PlayerControls, Vehicle, VehicleId, VehicleKind};

/// Why a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LossReason {
    Collision,
    RedLightViolation,
    OffRoad,
}

impl LossReason {
    pub fn message(self) -> &'static str {
        match self {
            LossReason::Collision => "Collision!",
            LossReason::RedLightViolation => "Red Light Violation!",
            LossReason::OffRoad => "Off road!",
        }
    }
}

impl fmt::Display for LossReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Where and how one vehicle starts
#[derive(Debug, Clone)]
pub struct Spawn {
    pub kind: VehicleKind,
    pub shape: Polygon,
    pub position: Position,
    pub rotation: f64,
}

impl Spawn {
    /// A spawn using the stock outline for `kind`
    pub fn new(kind: VehicleKind, position: Position, rotation: f64) -> Result<Self> {
        Ok(Self::with_shape(kind, kind.default_shape()?, position, rotation))
    }

    pub fn with_shape(kind: VehicleKind, shape: Polygon, position: Position, rotation: f64) -> Self {
        Self {
            kind,
            shape,
            position,
            rotation,
        }
    }
}

/// The starting arrangement of a session
///
/// NPCs are listed in draw order; the player always comes last.
#[derive(Debug, Clone)]
pub struct Layout {
    npcs: Vec<Spawn>,
    player: Spawn,
}

impl Layout {
    /// A layout with only the player. The player must be a car.
    pub fn new(player: Spawn) -> Result<Self> {
        if player.kind != VehicleKind::Car {
            bail!("Player vehicle must be a car, got {}", player.kind.label());
        }
        Ok(Self {
            npcs: Vec::new(),
            player,
        })
    }

    pub fn with_npc(mut self, spawn: Spawn) -> Self {
        self.npcs.push(spawn);
        self
    }

    /// The fixed two-road crossing: two trucks, an ambulance, a parked car
    /// and the player on the horizontal road
    pub fn standard() -> Result<Self> {
        let car = VehicleKind::Car.default_shape()?;
        let truck = VehicleKind::Truck.default_shape()?;
        let ambulance = VehicleKind::Ambulance.default_shape()?;

        let h_road_y = f64::from(H_ROAD_Y);
        let v_road_x = f64::from(V_ROAD_X);

        let player = Spawn::with_shape(
            VehicleKind::Car,
            car.clone(),
            Position::new(100.0, h_road_y + f64::from(H_ROAD_H / 2) + 10.0),
            90.0,
        );

        Ok(Self::new(player)?
            // eastbound
            .with_npc(Spawn::with_shape(
                VehicleKind::Truck,
                truck.clone(),
                Position::new(-40.0, h_road_y + 40.0),
                0.0,
            ))
            // westbound
            .with_npc(Spawn::with_shape(
                VehicleKind::Ambulance,
                ambulance,
                Position::new(VIEWPORT_WIDTH + 40.0, h_road_y + 60.0),
                180.0,
            ))
            // southbound
            .with_npc(Spawn::with_shape(
                VehicleKind::Truck,
                truck,
                Position::new(v_road_x + 60.0, -40.0),
                90.0,
            ))
            // parked, facing north
            .with_npc(Spawn::with_shape(
                VehicleKind::Car,
                car,
                Position::new(v_road_x + 40.0, VIEWPORT_HEIGHT + 40.0),
                270.0,
            )))
    }
}

/// All mutable state of one round
#[derive(Debug, Clone)]
pub struct SimulationSession {
    /// Vehicles in draw order; the player is the last entry
    vehicles: Vec<Vehicle>,
    pub light: TrafficLight,
    /// Directional flags for the player vehicle only
    pub controls: PlayerControls,
    player_index: usize,
    loss: Option<LossReason>,
    frame_count: u64,
}

impl SimulationSession {
    /// Build a fresh session: speeds scaled, light green, counters zeroed
    pub fn from_layout(layout: &Layout) -> Self {
        let mut vehicles: Vec<Vehicle> = layout
            .npcs
            .iter()
            .chain(std::iter::once(&layout.player))
            .enumerate()
            .map(|(index, spawn)| {
                Vehicle::new(
                    VehicleId(index),
                    spawn.kind,
                    spawn.shape.clone(),
                    spawn.position,
                    spawn.rotation,
                )
            })
            .collect();

        for vehicle in &mut vehicles {
            vehicle.scale_speed(GLOBAL_SPEED_SCALE);
        }
        let player_index = vehicles.len() - 1;
        vehicles[player_index].scale_speed(PLAYER_SPEED_SCALE);

        Self {
            vehicles,
            light: TrafficLight::new(LIGHT_POSITION, LightState::Green),
            controls: PlayerControls::default(),
            player_index,
            loss: None,
            frame_count: 0,
        }
    }

    /// Vehicles in draw order; the player is the last entry
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn vehicle_mut(&mut self, index: usize) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(index)
    }

    pub(crate) fn vehicles_mut(&mut self) -> &mut [Vehicle] {
        &mut self.vehicles
    }

    pub fn player_index(&self) -> usize {
        self.player_index
    }

    pub fn player(&self) -> &Vehicle {
        &self.vehicles[self.player_index]
    }

    pub fn player_mut(&mut self) -> &mut Vehicle {
        &mut self.vehicles[self.player_index]
    }

    pub fn is_player(&self, index: usize) -> bool {
        index == self.player_index
    }

    pub fn is_game_over(&self) -> bool {
        self.loss.is_some()
    }

    pub fn loss(&self) -> Option<LossReason> {
        self.loss
    }

    /// The loss message, or an empty string while still playing
    pub fn lose_reason(&self) -> &'static str {
        self.loss.map(LossReason::message).unwrap_or("")
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub(crate) fn count_frame(&mut self) {
        self.frame_count += 1;
    }

    /// Latch a loss. Only the first call in a session has any effect.
    ///
    /// Returns true when this call ended the session.
    pub fn trigger_loss(&mut self, reason: LossReason) -> bool {
        if self.loss.is_some() {
            return false;
        }
        self.loss = Some(reason);
        self.controls.clear();
        true
    }
}
