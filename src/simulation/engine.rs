//! Per-frame orchestration of the game
//!
//! This is the entry point for running the traffic game without any Bevy
//! dependencies. The front end calls `tick` once per frame with the input
//! events gathered since the previous call.

use anyhow::Result;
use log::{debug, info, warn};

use super::collision::colliding_pairs;
use super::frame::{
    FrameResult, GameOverOverlay, LightDraw, VehicleDraw, HUD_CONTROLS, HUD_OBJECTIVE,
};
use super::input::{Action, InputEvent};
use super::session::{Layout, LossReason, SimulationSession};
use super::traffic_light::LightState;
use super::types::{
    is_on_road, wrap_with_margin, Position, H_ROAD_H, H_ROAD_Y, STOP_ZONE, VIEWPORT_HEIGHT,
    VIEWPORT_WIDTH, VIOLATION_ZONE, V_ROAD_W, V_ROAD_X,
};
use super::vehicle::VehicleKind;

/// The game engine: one session plus the layout used to rebuild it
pub struct SimEngine {
    layout: Layout,
    session: SimulationSession,
    /// Sessions started, including the first
    sessions_started: u32,
}

impl SimEngine {
    /// Engine on the standard crossing layout
    pub fn new() -> Result<Self> {
        Ok(Self::with_layout(Layout::standard()?))
    }

    pub fn with_layout(layout: Layout) -> Self {
        let session = SimulationSession::from_layout(&layout);
        info!("Traffic light initialized with automatic cycling logic.");
        Self {
            layout,
            session,
            sessions_started: 1,
        }
    }

    pub fn session(&self) -> &SimulationSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut SimulationSession {
        &mut self.session
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn sessions_started(&self) -> u32 {
        self.sessions_started
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    /// Throw the session away and start again from the layout
    pub fn reset(&mut self) {
        self.session = SimulationSession::from_layout(&self.layout);
        self.sessions_started += 1;
        info!("Session {} started", self.sessions_started);
    }

    /// Advance one frame
    ///
    /// While the session is lost nothing moves; only a restart press gets
    /// through. Events queued after the restart press apply to the fresh
    /// session, and the frame returned is that session un-advanced.
    pub fn tick(&mut self, events: &[InputEvent]) -> FrameResult {
        if self.session.is_game_over() {
            let restart = events.iter().position(|e| *e == InputEvent::Pressed(Action::Restart));
            match restart {
                Some(at) => {
                    self.reset();
                    self.apply_input(&events[at + 1..]);
                }
                None if !events.is_empty() => {
                    warn!("Ignoring {} input event(s) while game over", events.len());
                }
                None => {}
            }
            return self.snapshot(&[]);
        }

        self.apply_input(events);
        self.session.light.update();

        let held = self.move_vehicles();
        self.check_losses();
        self.session.count_frame();

        self.snapshot(&held)
    }

    fn apply_input(&mut self, events: &[InputEvent]) {
        for event in events {
            let action = event.action();
            if !self.session.controls.set(action, event.is_pressed()) {
                warn!("Ignoring {:?} while playing", event);
            }
        }
    }

    /// Move every vehicle that is not held at the stop line
    ///
    /// Returns the indices of held vehicles.
    fn move_vehicles(&mut self) -> Vec<usize> {
        let red = self.session.light.is_red();
        let controls = self.session.controls;
        let player_index = self.session.player_index();
        let mut held = Vec::new();

        for (index, vehicle) in self.session.vehicles_mut().iter_mut().enumerate() {
            let is_player = index == player_index;
            if !is_player && red && STOP_ZONE.contains_position(&vehicle.position) {
                held.push(index);
                continue;
            }

            vehicle.advance(if is_player { Some(&controls) } else { None });
            wrap_with_margin(&mut vehicle.position);
        }

        held
    }

    /// Collision, then red light, then off road; the first one wins
    fn check_losses(&mut self) {
        if let Some(&(i, j)) = colliding_pairs(self.session.vehicles()).first() {
            let a = &self.session.vehicles()[i];
            let b = &self.session.vehicles()[j];
            debug!(
                "{} #{} hit {} #{} at ({:.1}, {:.1})",
                a.kind.label(),
                a.id.0,
                b.kind.label(),
                b.id.0,
                b.position.x,
                b.position.y
            );
            self.trigger_loss(LossReason::Collision);
        }

        let player_position = self.session.player().position;

        if self.session.light.is_red() && VIOLATION_ZONE.contains_position(&player_position) {
            self.trigger_loss(LossReason::RedLightViolation);
        }

        if !is_on_road(&player_position) {
            self.trigger_loss(LossReason::OffRoad);
        }
    }

    fn trigger_loss(&mut self, reason: LossReason) {
        if self.session.trigger_loss(reason) {
            info!("YOU LOST: {}", reason);
        }
    }

    /// Describe the current state for the render sink
    pub fn snapshot(&self, held: &[usize]) -> FrameResult {
        let session = &self.session;
        let vehicles = session
            .vehicles()
            .iter()
            .enumerate()
            .map(|(index, vehicle)| {
                VehicleDraw::from_vehicle(vehicle, session.is_player(index), held.contains(&index))
            })
            .collect();

        FrameResult {
            frame: session.frame_count(),
            vehicles,
            light: LightDraw::from_light(&session.light),
            hud: vec![HUD_OBJECTIVE.to_string(), HUD_CONTROLS.to_string()],
            game_over: session.loss().map(|reason| GameOverOverlay::new(reason.message())),
        }
    }

    /// Print a summary of the session state
    pub fn print_summary(&self) {
        let session = &self.session;
        println!("=== Traffic Flow Summary ===");
        println!(
            "Session: {}, Frame: {}",
            self.sessions_started,
            session.frame_count()
        );
        println!(
            "Light: {} ({} frames to change)",
            session.light.state().label(),
            session.light.ticks_until_change()
        );
        println!(
            "Status: {}",
            match session.loss() {
                Some(reason) => format!("LOST - {}", reason),
                None => "driving".to_string(),
            }
        );

        println!("--- Vehicles ---");
        for (index, vehicle) in session.vehicles().iter().enumerate() {
            println!(
                "  {} #{}{}: position=({:.1}, {:.1}), heading={:.1}, step={:.2}",
                vehicle.kind.label(),
                vehicle.id.0,
                if session.is_player(index) { " (player)" } else { "" },
                vehicle.position.x,
                vehicle.position.y,
                vehicle.rotation(),
                vehicle.step_size
            );
        }
    }

    /// Render the viewport as text, one character per `cell` pixels
    pub fn render_map(&self, cell: f64) -> String {
        let cols = (VIEWPORT_WIDTH / cell).ceil() as usize;
        let rows = (VIEWPORT_HEIGHT / cell).ceil() as usize;
        let mut grid = vec![vec![' '; cols]; rows];

        let to_grid = |p: &Position| -> Option<(usize, usize)> {
            if p.x < 0.0 || p.y < 0.0 || p.x >= VIEWPORT_WIDTH || p.y >= VIEWPORT_HEIGHT {
                return None;
            }
            Some(((p.y / cell) as usize, (p.x / cell) as usize))
        };

        // Roads
        for (row, line) in grid.iter_mut().enumerate() {
            for (col, ch) in line.iter_mut().enumerate() {
                let center = Position::new((col as f64 + 0.5) * cell, (row as f64 + 0.5) * cell);
                let (x, y) = center.pixel();
                let on_h = y >= H_ROAD_Y && y <= H_ROAD_Y + H_ROAD_H;
                let on_v = x >= V_ROAD_X && x <= V_ROAD_X + V_ROAD_W;
                *ch = match (on_h, on_v) {
                    (true, true) => if STOP_ZONE.contains(x, y) { '#' } else { '+' },
                    (true, false) => '-',
                    (false, true) => '|',
                    (false, false) => ' ',
                };
            }
        }

        // Light
        if let Some((row, col)) = to_grid(&self.session.light.position) {
            grid[row][col] = match self.session.light.state() {
                LightState::Green => 'G',
                LightState::Yellow => 'Y',
                LightState::Red => 'R',
            };
        }

        // Vehicles, player last so it stays visible
        for (index, vehicle) in self.session.vehicles().iter().enumerate() {
            if let Some((row, col)) = to_grid(&vehicle.position) {
                grid[row][col] = if self.session.is_player(index) {
                    'P'
                } else {
                    match vehicle.kind {
                        VehicleKind::Car => 'c',
                        VehicleKind::Truck => 't',
                        VehicleKind::Ambulance => 'a',
                    }
                };
            }
        }

        let mut out = String::with_capacity(rows * (cols + 1));
        for line in &grid {
            out.extend(line.iter());
            out.push('\n');
        }
        out
    }

    /// Draw the viewport in the terminal
    pub fn draw_map(&self) {
        println!("\n=== Crossing Map ===");
        println!("Legend: P=Player, t=Truck, a=Ambulance, c=Car, G/Y/R=Light, #=Stop zone");
        println!();
        print!("{}", self.render_map(20.0));
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_marks_player_light_and_roads() {
        let engine = SimEngine::new().unwrap();
        let map = engine.render_map(20.0);
        let rows: Vec<&str> = map.lines().collect();

        assert_eq!(rows.len(), 30);
        assert!(rows.iter().all(|r| r.chars().count() == 40));
        // Player at (100, 310), light at (400, 300)
        assert_eq!(rows[15].chars().nth(5), Some('P'));
        assert_eq!(rows[15].chars().nth(20), Some('G'));
        assert_eq!(rows[0].chars().nth(0), Some(' '));
        assert_eq!(rows[13].chars().nth(0), Some('-'));
        assert_eq!(rows[0].chars().nth(19), Some('|'));
    }

    #[test]
    fn snapshot_marks_held_vehicles() {
        let engine = SimEngine::new().unwrap();
        let frame = engine.snapshot(&[1]);
        assert!(frame.vehicles[1].held);
        assert!(!frame.vehicles[0].held);
        assert_eq!(frame.frame, 0);
    }
}
