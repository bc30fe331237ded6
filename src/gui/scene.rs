use nalgebra::{Isometry3, Point3, Translation3, UnitQuaternion, Vector3};

use super::renderers::path_iter_parametric;
use crate::consts::{ORBIT_COLOR, ORBIT_SEGMENTS, STAR_COLOR, STAR_RADIUS};
use crate::model::{Planet, StarSystem};

/// How the extra per-planet rotation is stacked onto its translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanetSpin {
    /// Translate to the orbital position, then spin in place. Planets travel
    /// along their rings.
    Orbital,
    /// Rotate by the orbital angle, then translate by the position computed
    /// from that same angle. The two cancel out, so every planet sits on the
    /// system's +X axis and only spins. Kept for parity with the old renderer.
    Legacy,
}

impl Default for PlanetSpin {
    fn default() -> Self {
        PlanetSpin::Orbital
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SphereInstance {
    pub transform: Isometry3<f32>,
    pub radius: f32,
    pub color: Point3<f32>,
}

impl SphereInstance {
    pub fn center(&self) -> Point3<f32> {
        self.transform * Point3::origin()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrbitRing {
    pub radius: f32,
    // Closed path: the last point coincides with the first
    pub points: Vec<Point3<f32>>,
    pub color: Point3<f32>,
}

/// Everything needed to draw one frame, in world coordinates. Building one
/// only reads the star system.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneFrame {
    pub world: Isometry3<f32>,
    pub rings: Vec<OrbitRing>,
    pub star: SphereInstance,
    pub planets: Vec<SphereInstance>,
}

impl SceneFrame {
    pub fn compose(system: &StarSystem, spin: PlanetSpin) -> Self {
        let world = system_transform(system);
        let world_f32: Isometry3<f32> = nalgebra::convert(world);

        let rings = system
            .orbits()
            .iter()
            .map(|orbit| {
                let radius = orbit.distance as f32;
                let points = circle_points(radius, ORBIT_SEGMENTS)
                    .map(|p| world_f32 * p)
                    .collect();
                OrbitRing {
                    radius,
                    points,
                    color: color_from(ORBIT_COLOR),
                }
            })
            .collect();

        let star = SphereInstance {
            transform: world_f32,
            radius: STAR_RADIUS,
            color: color_from(STAR_COLOR),
        };

        let planets = system
            .planets()
            .iter()
            .map(|planet| SphereInstance {
                transform: nalgebra::convert(world * planet_transform(planet, spin)),
                radius: planet.radius as f32,
                color: planet.color,
            })
            .collect();

        SceneFrame {
            world: world_f32,
            rings,
            star,
            planets,
        }
    }
}

/// Spin of the whole system about +Y. The stored angle is in degrees.
pub fn system_transform(system: &StarSystem) -> Isometry3<f64> {
    Isometry3::rotation(Vector3::y() * system.rotation_angle().to_radians())
}

/// Placement of a planet relative to the (already rotated) system.
pub fn planet_transform(planet: &Planet, spin: PlanetSpin) -> Isometry3<f64> {
    let position = planet.position();
    let rotation = UnitQuaternion::from_axis_angle(&Vector3::y_axis(), planet.angle);
    match spin {
        PlanetSpin::Orbital => Isometry3::from_parts(Translation3::from(position.coords), rotation),
        PlanetSpin::Legacy => {
            Isometry3::from_parts(Translation3::identity(), rotation)
                * Isometry3::translation(position.x, position.y, position.z)
        }
    }
}

/// Points on a horizontal circle around the origin, starting on +X.
pub fn circle_points(radius: f32, num_segments: usize) -> impl Iterator<Item = Point3<f32>> {
    let f = move |theta: f32| Point3::new(radius * theta.cos(), 0.0, radius * theta.sin());
    path_iter_parametric(f, 0.0, std::f32::consts::TAU, num_segments)
}

fn color_from([r, g, b]: [f32; 3]) -> Point3<f32> {
    Point3::new(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_rings_match_orbits() {
        let system = StarSystem::solar();
        let frame = SceneFrame::compose(&system, PlanetSpin::Orbital);

        assert_eq!(frame.rings.len(), 8);
        for (ring, orbit) in frame.rings.iter().zip(system.orbits()) {
            approx::assert_relative_eq!(ring.radius, orbit.distance as f32);
            assert_eq!(ring.points.len(), ORBIT_SEGMENTS + 1);
            approx::assert_abs_diff_eq!(
                ring.points[0],
                *ring.points.last().unwrap(),
                epsilon = 1e-4
            );
            for p in ring.points.iter() {
                approx::assert_relative_eq!(p.coords.norm(), ring.radius, max_relative = 1e-5);
                approx::assert_abs_diff_eq!(p.y, 0.0, epsilon = 1e-5);
            }
            assert_eq!(ring.color, Point3::new(0.5, 0.5, 0.5));
        }
    }

    #[test]
    fn test_star_sits_at_origin() {
        let mut system = StarSystem::solar();
        system.tick_n(10);
        let frame = SceneFrame::compose(&system, PlanetSpin::Orbital);

        approx::assert_abs_diff_eq!(frame.star.center(), Point3::origin(), epsilon = 1e-6);
        approx::assert_relative_eq!(frame.star.radius, 1.0);
        assert_eq!(frame.star.color, Point3::new(1.0, 0.8392, 0.6118));
    }

    #[test]
    fn test_orbital_spin_follows_ring() {
        let system = StarSystem::solar();
        let frame = SceneFrame::compose(&system, PlanetSpin::Orbital);

        // Earth starts a quarter turn in, on +Z
        let earth = &frame.planets[2];
        approx::assert_abs_diff_eq!(earth.center(), Point3::new(0.0, 0.0, 6.0), epsilon = 1e-5);
        approx::assert_relative_eq!(earth.radius, 0.2);
        assert_eq!(earth.color, Point3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_legacy_spin_cancels_orbit() {
        let mut system = StarSystem::solar();
        for _ in 0..5 {
            let frame = SceneFrame::compose(&system, PlanetSpin::Legacy);
            let world_inverse = frame.world.inverse();
            for (instance, planet) in frame.planets.iter().zip(system.planets()) {
                approx::assert_abs_diff_eq!(
                    world_inverse * instance.center(),
                    Point3::new(planet.distance as f32, 0.0, 0.0),
                    epsilon = 1e-4
                );
            }
            system.tick();
        }
    }

    #[test]
    fn test_planet_transform_modes_share_orientation() {
        let planet = StarSystem::solar().planets()[2].clone();
        let orbital = planet_transform(&planet, PlanetSpin::Orbital);
        let legacy = planet_transform(&planet, PlanetSpin::Legacy);
        approx::assert_relative_eq!(orbital.rotation, legacy.rotation);
        approx::assert_relative_eq!(orbital.rotation.angle(), FRAC_PI_2);
    }

    #[test]
    fn test_world_rotation_is_in_degrees() {
        let mut system = StarSystem::solar();
        // 0.05 degrees per tick, so 1800 ticks is a quarter turn
        system.tick_n(1800);
        let world = system_transform(&system);
        approx::assert_abs_diff_eq!(
            world * Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 0.0, -1.0),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_compose_has_no_side_effects() {
        let mut system = StarSystem::solar();
        system.tick_n(7);
        let first = SceneFrame::compose(&system, PlanetSpin::Orbital);
        let second = SceneFrame::compose(&system, PlanetSpin::Orbital);
        assert_eq!(first, second);
        assert_eq!(system.ticks(), 7);
    }
}
