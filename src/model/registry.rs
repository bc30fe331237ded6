use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4, FRAC_PI_6, FRAC_PI_8, PI};

use nalgebra::Point3;

use super::body::{Orbit, Planet};

/// One row of the body table. Each row yields both the guide ring and the
/// planet riding on it, so their distances can't disagree.
#[derive(Debug, Clone, Copy)]
pub struct BodyRecord {
    pub name: &'static str,
    pub distance: f64,
    pub initial_angle: f64,
    pub speed: f64,
    pub radius: f64,
    pub color: [f32; 3],
}

impl BodyRecord {
    pub fn orbit(&self) -> Orbit {
        Orbit {
            distance: self.distance,
        }
    }

    pub fn planet(&self) -> Planet {
        let [r, g, b] = self.color;
        Planet {
            name: self.name,
            distance: self.distance,
            angle: self.initial_angle,
            speed: self.speed,
            radius: self.radius,
            color: Point3::new(r, g, b),
        }
    }
}

// Speeds are hand-picked, not Keplerian
pub const SOLAR_SYSTEM: [BodyRecord; 8] = [
    BodyRecord {
        name: "Mercury",
        distance: 2.0,
        initial_angle: 0.0,
        speed: 2.0,
        radius: 0.1,
        color: [0.7, 0.7, 0.7],
    },
    BodyRecord {
        name: "Venus",
        distance: 4.0,
        initial_angle: FRAC_PI_4,
        speed: 1.0,
        radius: 0.15,
        color: [1.0, 0.5, 0.0],
    },
    BodyRecord {
        name: "Earth",
        distance: 6.0,
        initial_angle: FRAC_PI_2,
        speed: 0.67,
        radius: 0.2,
        color: [0.0, 0.0, 1.0],
    },
    BodyRecord {
        name: "Mars",
        distance: 8.0,
        initial_angle: FRAC_PI_3,
        speed: 0.5,
        radius: 0.18,
        color: [1.0, 0.0, 0.0],
    },
    BodyRecord {
        name: "Jupiter",
        distance: 10.0,
        initial_angle: FRAC_PI_6,
        speed: 0.25,
        radius: 0.4,
        color: [0.8, 0.6, 0.4],
    },
    BodyRecord {
        name: "Saturn",
        distance: 12.0,
        initial_angle: FRAC_PI_8,
        speed: 0.2,
        radius: 0.35,
        color: [0.9, 0.9, 0.5],
    },
    BodyRecord {
        name: "Uranus",
        distance: 14.0,
        initial_angle: PI / 10.0,
        speed: 0.15,
        radius: 0.3,
        color: [0.5, 0.8, 0.8],
    },
    BodyRecord {
        name: "Neptune",
        distance: 16.0,
        initial_angle: PI / 12.0,
        speed: 0.125,
        radius: 0.25,
        color: [0.0, 0.0, 0.5],
    },
];
