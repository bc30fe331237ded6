mod body;
pub mod registry;

pub use body::{Orbit, Planet};
pub use registry::{BodyRecord, SOLAR_SYSTEM};

use crate::consts::SYSTEM_ROTATION_SPEED;

/// The whole simulated state: guide rings, planets, and the slow spin of the
/// entire system. Rings and planets are parallel lists; index i of one belongs
/// to index i of the other.
#[derive(Debug, Clone)]
pub struct StarSystem {
    orbits: Vec<Orbit>,
    planets: Vec<Planet>,
    // degrees
    rotation_angle: f64,
    rotation_speed: f64,
    ticks: u64,
}

impl StarSystem {
    pub fn new(orbits: Vec<Orbit>, planets: Vec<Planet>) -> Self {
        StarSystem {
            orbits,
            planets,
            rotation_angle: 0.0,
            rotation_speed: SYSTEM_ROTATION_SPEED,
            ticks: 0,
        }
    }

    pub fn from_registry(records: &[BodyRecord]) -> Self {
        let orbits = records.iter().map(BodyRecord::orbit).collect();
        let planets = records.iter().map(BodyRecord::planet).collect();
        Self::new(orbits, planets)
    }

    /// The eight-planet layout everything is drawn from by default.
    pub fn solar() -> Self {
        Self::from_registry(&SOLAR_SYSTEM)
    }

    /// Advances the simulation by one discrete step. Steps aren't scaled by
    /// elapsed time; a faster frame rate means a faster animation.
    pub fn tick(&mut self) {
        self.rotation_angle += self.rotation_speed;
        for planet in self.planets.iter_mut() {
            planet.advance();
        }
        self.ticks += 1;
    }

    pub fn tick_n(&mut self, n: u64) {
        for _ in 0..n {
            self.tick();
        }
    }

    pub fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }

    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn orbit_planet_pairs(&self) -> impl Iterator<Item = (&Orbit, &Planet)> {
        self.orbits.iter().zip(self.planets.iter())
    }

    pub fn planet_by_name(&self, name: &str) -> Option<&Planet> {
        self.planets
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }

    pub fn rotation_angle(&self) -> f64 {
        self.rotation_angle
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solar_system_is_parallel() {
        let system = StarSystem::solar();
        assert_eq!(system.orbits().len(), 8);
        assert_eq!(system.planets().len(), 8);
        for (orbit, planet) in system.orbit_planet_pairs() {
            assert_eq!(orbit.distance, planet.distance);
        }
    }

    #[test]
    fn test_tick_advances_everything() {
        let mut system = StarSystem::solar();
        let before: Vec<f64> = system.planets().iter().map(|p| p.angle).collect();

        system.tick();

        assert_eq!(system.ticks(), 1);
        approx::assert_relative_eq!(system.rotation_angle(), 0.05);
        for (planet, angle) in system.planets().iter().zip(before) {
            approx::assert_relative_eq!(planet.angle, angle + planet.speed);
        }
    }

    #[test]
    fn test_tick_leaves_orbits_alone() {
        let mut system = StarSystem::solar();
        let orbits = system.orbits().to_vec();
        system.tick_n(50);
        assert_eq!(system.orbits(), &orbits[..]);
        for (orbit, planet) in system.orbit_planet_pairs() {
            assert_eq!(orbit.distance, planet.distance);
        }
    }

    #[test]
    fn test_planet_lookup() {
        let system = StarSystem::solar();
        assert_eq!(system.planet_by_name("mars").map(|p| p.distance), Some(8.0));
        assert!(system.planet_by_name("Pluto").is_none());
    }

    #[test]
    fn test_empty_system_ticks() {
        let mut system = StarSystem::new(vec![], vec![]);
        system.tick_n(3);
        assert_eq!(system.ticks(), 3);
        approx::assert_relative_eq!(system.rotation_angle(), 0.15, max_relative = 1e-12);
    }
}
