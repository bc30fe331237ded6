use kiss3d::renderer::LineRenderer;

use nalgebra::Point3;

pub fn path_iter_parametric<F, S>(
    f: F,
    t_start: S,
    t_end: S,
    num_segments: usize,
) -> impl Iterator<Item = Point3<f32>>
where
    F: Fn(S) -> Point3<f32>,
    S: nalgebra::RealField + simba::scalar::SupersetOf<usize> + Copy,
{
    assert!(
        num_segments >= 1,
        "Must have at least one segment, num_segments was {}",
        num_segments
    );
    let convert = nalgebra::convert::<usize, S>;
    (0..=num_segments)
        .map(move |i| convert(i) / convert(num_segments))
        // u ranges from 0 to 1 (inclusive)
        .map(move |u| t_start + u * (t_end - t_start))
        .map(f)
}

pub fn draw_path<I: Iterator<Item = Point3<f32>>>(
    line_renderer: &mut LineRenderer,
    points: I,
    color: &Point3<f32>,
) {
    let mut prev_pt = None;
    for pt in points {
        if let Some(prev_pt) = prev_pt {
            line_renderer.draw_line(prev_pt, pt, *color);
        }
        prev_pt = Some(pt);
    }
}

/// Triangle list for a unit-radius UV sphere, three points per triangle.
/// Each of the `slices * stacks` patches is split into two triangles; the ones
/// touching a pole are degenerate, which is harmless.
pub fn sphere_triangles(slices: usize, stacks: usize) -> Vec<Point3<f32>> {
    use std::f32::consts::{PI, TAU};

    assert!(slices >= 3 && stacks >= 2, "Sphere is too coarse");

    let vertex = |i: usize, j: usize| {
        let theta = TAU * (i as f32) / (slices as f32);
        let phi = PI * (j as f32) / (stacks as f32);
        Point3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin())
    };

    let mut points = Vec::with_capacity(6 * slices * stacks);
    for j in 0..stacks {
        for i in 0..slices {
            let (a, b) = (vertex(i, j), vertex(i + 1, j));
            let (c, d) = (vertex(i, j + 1), vertex(i + 1, j + 1));
            points.extend_from_slice(&[a, c, b, b, c, d]);
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_includes_both_ends() {
        let pts: Vec<_> =
            path_iter_parametric(|t: f32| Point3::new(t, 0.0, 0.0), 2.0, 4.0, 4).collect();
        assert_eq!(pts.len(), 5);
        approx::assert_relative_eq!(pts[0].x, 2.0);
        approx::assert_relative_eq!(pts[2].x, 3.0);
        approx::assert_relative_eq!(pts[4].x, 4.0);
    }

    #[test]
    #[should_panic]
    fn test_path_needs_a_segment() {
        let _ = path_iter_parametric(|t: f32| Point3::new(t, 0.0, 0.0), 0.0, 1.0, 0);
    }

    #[test]
    fn test_sphere_triangles_on_unit_sphere() {
        let points = sphere_triangles(12, 8);
        assert_eq!(points.len(), 6 * 12 * 8);
        for p in points.iter() {
            approx::assert_relative_eq!(p.coords.norm(), 1.0, max_relative = 1e-5);
        }

        // Both poles are reached
        assert!(points.iter().any(|p| (p.y - 1.0).abs() < 1e-6));
        assert!(points.iter().any(|p| (p.y + 1.0).abs() < 1e-6));
    }
}
