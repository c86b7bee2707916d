use crate::foundation::error::{UvPathError, UvPathResult};

pub use kurbo::Point;

/// Output canvas size in device units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> UvPathResult<Self> {
        let canvas = Self { width, height };
        canvas.validate()?;
        Ok(canvas)
    }

    pub fn validate(self) -> UvPathResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(UvPathError::validation("canvas width/height must be > 0"));
        }
        Ok(())
    }

    /// Map a unit-square sample into device space.
    pub fn to_device(self, u: f64, v: f64, flip_vertical: bool) -> Point {
        let y = if flip_vertical { 1.0 - v } else { v };
        Point::new(u * f64::from(self.width), y * f64::from(self.height))
    }

    pub fn contains(self, p: Point) -> bool {
        (0.0..=f64::from(self.width)).contains(&p.x)
            && (0.0..=f64::from(self.height)).contains(&p.y)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1000,
            height: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_sized_canvas() {
        assert!(Canvas::new(0, 10).is_err());
        assert!(Canvas::new(10, 0).is_err());
        assert!(Canvas::new(1, 1).is_ok());
    }

    #[test]
    fn to_device_scales_and_flips() {
        let c = Canvas::new(1000, 1000).unwrap();
        let p = c.to_device(0.5, 0.2, false);
        assert!((p.x - 500.0).abs() < 1e-9);
        assert!((p.y - 200.0).abs() < 1e-9);

        let p = c.to_device(0.5, 0.2, true);
        assert!((p.y - 800.0).abs() < 1e-9);
    }

    #[test]
    fn corners_stay_inside() {
        let c = Canvas::new(640, 480).unwrap();
        for (u, v) in [(0.0, 0.0), (1.0, 1.0), (0.0, 1.0), (1.0, 0.0)] {
            assert!(c.contains(c.to_device(u, v, false)));
            assert!(c.contains(c.to_device(u, v, true)));
        }
    }
}
