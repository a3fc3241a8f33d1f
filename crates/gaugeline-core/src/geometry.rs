use crate::math::DVec2;

/// Pixel dimensions of the drawing surface a chart renders into.
///
/// Percentage-based sizes and positions resolve against this area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Area {
    pub width: f64,
    pub height: f64,
}

impl Area {
    pub fn new(width: f64, height: f64) -> Self {
        Area { width, height }
    }

    /// Extent along one axis (`0` = width, anything else = height).
    pub fn axis(&self, index: usize) -> f64 {
        if index == 0 { self.width } else { self.height }
    }

    /// The shorter side.
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    pub fn center(&self) -> DVec2 {
        DVec2::new(self.width / 2.0, self.height / 2.0)
    }
}

impl From<[f64; 2]> for Area {
    fn from([width, height]: [f64; 2]) -> Self {
        Area { width, height }
    }
}

impl From<(f64, f64)> for Area {
    fn from((width, height): (f64, f64)) -> Self {
        Area { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_side_and_axis() {
        let area = Area::new(800.0, 600.0);
        assert_eq!(area.min_side(), 600.0);
        assert_eq!(area.axis(0), 800.0);
        assert_eq!(area.axis(1), 600.0);
        assert_eq!(area.center(), DVec2::new(400.0, 300.0));
    }
}
