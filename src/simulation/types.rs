//! Core types for the traffic simulation
//!
//! These are standalone types that don't depend on Bevy.

/// A 2D position in screen space (x grows right, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate this offset around the origin by `degrees`
    pub fn rotated(&self, degrees: f64) -> Position {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Position {
            x: self.x * cos - self.y * sin,
            y: self.x * sin + self.y * cos,
        }
    }

    /// Integer pixel coordinates, truncated toward zero
    pub fn pixel(&self) -> (i32, i32) {
        (self.x as i32, self.y as i32)
    }
}

/// An axis-aligned rectangle on the integer pixel grid
///
/// Containment is half-open: the left and top edges are inside, the right
/// and bottom edges are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && py >= self.y && px < self.x + self.width && py < self.y + self.height
    }

    /// Whether the truncated pixel of `position` lies inside the rectangle
    pub fn contains_position(&self, position: &Position) -> bool {
        let (px, py) = position.pixel();
        self.contains(px, py)
    }

    pub fn encloses(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.x + other.width <= self.x + self.width
            && other.y + other.height <= self.y + self.height
    }
}

/// Logical viewport size
pub const VIEWPORT_WIDTH: f64 = 800.0;
pub const VIEWPORT_HEIGHT: f64 = 600.0;

/// Horizontal road band (top edge and height)
pub const H_ROAD_Y: i32 = 250;
pub const H_ROAD_H: i32 = 100;

/// Vertical road band (left edge and width)
pub const V_ROAD_X: i32 = 350;
pub const V_ROAD_W: i32 = 100;

/// NPC vehicles inside this rectangle hold still while the light is red
pub const STOP_ZONE: Rect = Rect::new(340, 240, 120, 120);

/// Player presence here while the light is red is a red-light violation
pub const VIOLATION_ZONE: Rect = Rect::new(320, 220, 160, 160);

/// How far past the viewport a vehicle may drift before it wraps
pub const WRAP_MARGIN: f64 = 40.0;

/// Light frames per phase
pub const LIGHT_PHASE_TICKS: u32 = 120;

/// Where the traffic light sits
pub const LIGHT_POSITION: Position = Position::new(400.0, 300.0);

/// Speed multiplier applied to every vehicle at setup
pub const GLOBAL_SPEED_SCALE: f64 = 1.5;

/// Extra speed multiplier for the player car on top of the global one
pub const PLAYER_SPEED_SCALE: f64 = 1.3;

/// Whether a point (truncated to pixels) is on either road band
///
/// Both bands include their far edge.
pub fn is_on_road(position: &Position) -> bool {
    let (x, y) = position.pixel();
    let on_horizontal = y >= H_ROAD_Y && y <= H_ROAD_Y + H_ROAD_H;
    let on_vertical = x >= V_ROAD_X && x <= V_ROAD_X + V_ROAD_W;
    on_horizontal || on_vertical
}

/// Wrap a position that drifted more than `WRAP_MARGIN` off screen
pub fn wrap_with_margin(position: &mut Position) {
    if position.x > VIEWPORT_WIDTH + WRAP_MARGIN {
        position.x = -WRAP_MARGIN;
    }
    if position.x < -WRAP_MARGIN {
        position.x = VIEWPORT_WIDTH + WRAP_MARGIN;
    }
    if position.y > VIEWPORT_HEIGHT + WRAP_MARGIN {
        position.y = -WRAP_MARGIN;
    }
    if position.y < -WRAP_MARGIN {
        position.y = VIEWPORT_HEIGHT + WRAP_MARGIN;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_zone_encloses_stop_zone() {
        assert!(VIOLATION_ZONE.encloses(&STOP_ZONE));
        assert!(!STOP_ZONE.encloses(&VIOLATION_ZONE));
    }

    #[test]
    fn rect_is_half_open() {
        let rect = Rect::new(10, 10, 5, 5);
        assert!(rect.contains(10, 10));
        assert!(rect.contains(14, 14));
        assert!(!rect.contains(15, 12));
        assert!(!rect.contains(12, 15));
    }

    #[test]
    fn road_bands_include_both_edges() {
        assert!(is_on_road(&Position::new(10.0, 250.0)));
        assert!(is_on_road(&Position::new(10.0, 350.9)));
        assert!(!is_on_road(&Position::new(10.0, 351.0)));
        assert!(is_on_road(&Position::new(450.5, 10.0)));
        assert!(!is_on_road(&Position::new(349.9, 10.0)));
    }

    #[test]
    fn wrap_moves_to_opposite_edge() {
        let mut p = Position::new(841.0, 300.0);
        wrap_with_margin(&mut p);
        assert_eq!(p.x, -40.0);

        let mut p = Position::new(100.0, -41.0);
        wrap_with_margin(&mut p);
        assert_eq!(p.y, 640.0);

        let mut p = Position::new(840.0, 640.0);
        wrap_with_margin(&mut p);
        assert_eq!(p, Position::new(840.0, 640.0));
    }
}
