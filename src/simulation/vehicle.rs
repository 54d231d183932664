//! Vehicle movement logic for the traffic simulation
//!
//! Standalone implementation that doesn't depend on Bevy.

use anyhow::{Context, Result};

use super::input::Action;
use super::polygon::Polygon;
use super::types::{Position, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};

/// A unique identifier for a vehicle within one session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleId(pub usize);

/// Type of vehicle in the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VehicleKind {
    /// Flag-driven car; the player drives one, an NPC car just sits
    Car,
    /// Slow autonomous vehicle
    Truck,
    /// Fast autonomous vehicle
    Ambulance,
}

const CAR_SHAPE: [(f64, f64); 4] = [(-5.0, 5.0), (15.0, 5.0), (15.0, -5.0), (-5.0, -5.0)];
const TRUCK_SHAPE: [(f64, f64); 4] = [(-10.0, 8.0), (20.0, 8.0), (20.0, -8.0), (-10.0, -8.0)];
const AMBULANCE_SHAPE: [(f64, f64); 4] = [(-8.0, 5.0), (18.0, 5.0), (18.0, -5.0), (-8.0, -5.0)];

impl VehicleKind {
    /// Distance covered per frame before any setup scaling
    pub fn base_step_size(self) -> f64 {
        match self {
            VehicleKind::Car => 4.0,
            VehicleKind::Truck => 1.0,
            VehicleKind::Ambulance => 5.0,
        }
    }

    /// Degrees turned per frame while a turn flag is held
    pub fn rotation_rate(self) -> f64 {
        match self {
            VehicleKind::Truck => 2.0,
            VehicleKind::Car | VehicleKind::Ambulance => 5.0,
        }
    }

    /// Autonomous vehicles drive straight every frame and ignore controls
    pub fn is_autonomous(self) -> bool {
        !matches!(self, VehicleKind::Car)
    }

    /// The stock outline for this kind
    pub fn default_shape(self) -> Result<Polygon> {
        let pairs: &[(f64, f64)] = match self {
            VehicleKind::Car => &CAR_SHAPE,
            VehicleKind::Truck => &TRUCK_SHAPE,
            VehicleKind::Ambulance => &AMBULANCE_SHAPE,
        };
        Polygon::from_pairs(pairs).with_context(|| format!("Invalid stock shape for {:?}", self))
    }

    pub fn label(self) -> &'static str {
        match self {
            VehicleKind::Car => "Car",
            VehicleKind::Truck => "Truck",
            VehicleKind::Ambulance => "Ambulance",
        }
    }
}

/// Directional controls held by the player
///
/// Only the designated player vehicle has one of these; autonomous vehicles
/// carry no input state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerControls {
    pub forward: bool,
    pub backward: bool,
    pub left: bool,
    pub right: bool,
}

impl PlayerControls {
    /// Set or clear the flag behind a directional action
    ///
    /// Returns false for actions that are not directional (restart).
    pub fn set(&mut self, action: Action, held: bool) -> bool {
        match action {
            Action::Accelerate => self.forward = held,
            Action::Decelerate => self.backward = held,
            Action::TurnLeft => self.left = held,
            Action::TurnRight => self.right = held,
            Action::Restart => return false,
        }
        true
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }
}

/// A vehicle in the traffic simulation
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: VehicleId,
    pub kind: VehicleKind,
    shape: Polygon,
    pub position: Position,
    /// Heading in degrees, always in [0, 360)
    rotation: f64,
    pub step_size: f64,
    pub rotation_rate: f64,
}

impl Vehicle {
    pub fn new(
        id: VehicleId,
        kind: VehicleKind,
        shape: Polygon,
        position: Position,
        rotation: f64,
    ) -> Self {
        Self {
            id,
            kind,
            shape,
            position,
            rotation: normalize_degrees(rotation),
            step_size: kind.base_step_size(),
            rotation_rate: kind.rotation_rate(),
        }
    }

    /// Create a vehicle with the stock outline for its kind
    pub fn with_default_shape(
        id: VehicleId,
        kind: VehicleKind,
        position: Position,
        rotation: f64,
    ) -> Result<Self> {
        Ok(Self::new(id, kind, kind.default_shape()?, position, rotation))
    }

    pub fn shape(&self) -> &Polygon {
        &self.shape
    }

    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = normalize_degrees(degrees);
    }

    pub fn scale_speed(&mut self, factor: f64) {
        self.step_size *= factor;
    }

    /// World-space outline
    pub fn points(&self) -> Vec<Position> {
        self.shape.transformed_points(self.position, self.rotation)
    }

    pub fn contains(&self, point: Position) -> bool {
        self.shape.contains(self.position, self.rotation, point)
    }

    /// Advance one frame according to this vehicle's movement rule
    ///
    /// Cars without controls (NPC cars) stand still. Cars also wrap tightly
    /// to the viewport after moving.
    pub fn advance(&mut self, controls: Option<&PlayerControls>) {
        if self.kind.is_autonomous() {
            self.cruise();
        } else {
            let controls = controls.copied().unwrap_or_default();
            self.drive(&controls);
            self.wrap_to_viewport();
        }
    }

    /// Flag-driven motion: forward beats backward, left beats right
    fn drive(&mut self, controls: &PlayerControls) {
        if controls.forward {
            self.step_along_heading(self.step_size);
        } else if controls.backward {
            self.step_along_heading(-self.step_size);
        }

        if controls.left {
            self.set_rotation(self.rotation - self.rotation_rate);
        } else if controls.right {
            self.set_rotation(self.rotation + self.rotation_rate);
        }
    }

    /// Autonomous motion: straight ahead, heading never changes
    fn cruise(&mut self) {
        self.step_along_heading(self.step_size);
    }

    fn step_along_heading(&mut self, distance: f64) {
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        self.position.x += distance * cos;
        self.position.y += distance * sin;
    }

    fn wrap_to_viewport(&mut self) {
        if self.position.x > VIEWPORT_WIDTH {
            self.position.x = 0.0;
        }
        if self.position.x < 0.0 {
            self.position.x = VIEWPORT_WIDTH;
        }
        if self.position.y > VIEWPORT_HEIGHT {
            self.position.y = 0.0;
        }
        if self.position.y < 0.0 {
            self.position.y = VIEWPORT_HEIGHT;
        }
    }
}

/// Bring an angle in degrees into [0, 360)
pub fn normalize_degrees(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
