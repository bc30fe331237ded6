use nalgebra::Point3;

/// A circular guide ring around the star. Only used for drawing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Orbit {
    pub distance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: &'static str,
    pub distance: f64,
    // radians, accumulated without wrapping
    pub angle: f64,
    // radians per tick
    pub speed: f64,
    pub radius: f64,
    pub color: Point3<f32>,
}

impl Planet {
    /// Position in the star system's frame (before the system-wide rotation),
    /// in the horizontal XZ plane.
    pub fn position(&self) -> Point3<f64> {
        Point3::new(
            self.distance * self.angle.cos(),
            0.0,
            self.distance * self.angle.sin(),
        )
    }

    pub fn advance(&mut self) {
        self.angle += self.speed;
    }
}
