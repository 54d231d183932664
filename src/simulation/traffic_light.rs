//! Traffic light logic for the intersection
//!
//! Standalone implementation that doesn't depend on Bevy.

use log::debug;

use super::types::{Position, LIGHT_PHASE_TICKS};

/// Phase of the traffic light
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightState {
    Green,
    Yellow,
    Red,
}

impl LightState {
    /// The phase that follows this one
    pub fn next(self) -> LightState {
        match self {
            LightState::Green => LightState::Yellow,
            LightState::Yellow => LightState::Red,
            LightState::Red => LightState::Green,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LightState::Green => "GREEN",
            LightState::Yellow => "YELLOW",
            LightState::Red => "RED",
        }
    }
}

/// The single timed light at the crossing
#[derive(Debug, Clone)]
pub struct TrafficLight {
    pub position: Position,
    state: LightState,
    /// Frames seen since the light was created
    timer: u32,
}

impl TrafficLight {
    pub fn new(position: Position, initial: LightState) -> Self {
        Self {
            position,
            state: initial,
            timer: 0,
        }
    }

    pub fn state(&self) -> LightState {
        self.state
    }

    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn is_red(&self) -> bool {
        self.state == LightState::Red
    }

    /// Frames left until the next phase change
    pub fn ticks_until_change(&self) -> u32 {
        LIGHT_PHASE_TICKS - self.timer % LIGHT_PHASE_TICKS
    }

    /// Count one frame, switching phase on every `LIGHT_PHASE_TICKS`th
    pub fn update(&mut self) {
        self.timer = self.timer.wrapping_add(1);
        if self.timer % LIGHT_PHASE_TICKS == 0 {
            let next = self.state.next();
            debug!(
                "Light {} -> {} at tick {}",
                self.state.label(),
                next.label(),
                self.timer
            );
            self.state = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(light: &mut TrafficLight, ticks: u32) {
        for _ in 0..ticks {
            light.update();
        }
    }

    #[test]
    fn full_cycle() {
        let mut light = TrafficLight::new(Position::default(), LightState::Green);
        run(&mut light, 119);
        assert_eq!(light.state(), LightState::Green);
        run(&mut light, 1);
        assert_eq!(light.state(), LightState::Yellow);
        run(&mut light, 120);
        assert_eq!(light.state(), LightState::Red);
        run(&mut light, 120);
        assert_eq!(light.state(), LightState::Green);
        assert_eq!(light.timer(), 360);
    }

    #[test]
    fn countdown_resets_each_phase() {
        let mut light = TrafficLight::new(Position::default(), LightState::Green);
        assert_eq!(light.ticks_until_change(), 120);
        run(&mut light, 119);
        assert_eq!(light.ticks_until_change(), 1);
        run(&mut light, 1);
        assert_eq!(light.ticks_until_change(), 120);
    }
}
