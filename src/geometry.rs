// src/geometry.rs
//
// Scene-space coordinates shared by the layout engine and the renderer.
//
// All positions produced by the layout engine are sums of multiples of
// 0.5, so they stay exact in f64 no matter how many shifts are applied.

/// A point in scene space (z is always 0 for these demos).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Return a copy moved by `(dx, dy)`.
    #[inline]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move this position by `distance` along `axis`.
    #[inline]
    pub fn shift(&mut self, axis: Axis, distance: f64) {
        match axis {
            Axis::X => self.x += distance,
            Axis::Y => self.y += distance,
        }
    }
}

/// Axis a structure grows along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Which way an arrow points when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Right,
    Up,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_along_axis() {
        let mut p = Position::new(-65.0, 0.0);
        p.shift(Axis::X, 6.5);
        assert_eq!(p, Position::new(-58.5, 0.0));

        p.shift(Axis::Y, -7.0);
        assert_eq!(p, Position::new(-58.5, -7.0));
    }

    #[test]
    fn test_offset_is_copy() {
        let p = Position::new(1.0, 2.0);
        let q = p.offset(0.5, -0.5);
        assert_eq!(p, Position::new(1.0, 2.0));
        assert_eq!(q, Position::new(1.5, 1.5));
    }
}
