/// The per-frame pipeline: rotate, cull, shade, project
use nalgebra::{Point3, Vector3};

use crate::geometry::Cube;
use crate::projection::Projection;
use crate::shading::{facing_camera, shade, surface_normal, Rgb};
use crate::transform::{rotate_point, RotationAngles};

/// Distance the cube is pushed along +z before projection.
const VIEW_DEPTH: f32 = 3.0;

/// Camera position, light direction and projection shared by every frame.
#[derive(Debug, Clone, Copy)]
pub struct View {
    pub camera: Point3<f32>,
    pub light: Vector3<f32>,
    pub projection: Projection,
}

impl View {
    pub fn new(camera: Point3<f32>, light: Vector3<f32>, projection: Projection) -> Self {
        Self {
            camera,
            light,
            projection,
        }
    }
}

/// A screen-space triangle ready to be filled.
#[derive(Debug, Clone, Copy)]
pub struct ShadedTriangle {
    pub points: [[f32; 2]; 3],
    pub color: Rgb,
}

/// Render one frame of the cube at the given rotation angles.
///
/// Every triangle is rotated, pushed back by [`VIEW_DEPTH`], culled against
/// the camera position and, if it faces the camera, shaded against the light
/// and projected onto the screen. The returned triangles keep model order,
/// which doubles as draw order.
pub fn render(cube: &Cube, angles: &RotationAngles, view: &View) -> Vec<ShadedTriangle> {
    let light_direction = view.light.normalize();
    let mut frame = Vec::with_capacity(cube.triangles.len());

    for triangle in &cube.triangles {
        let [v0, v1, v2] = triangle.vertices.map(|vertex| {
            let mut rotated = rotate_point(&vertex, angles);
            rotated.z += VIEW_DEPTH;
            rotated
        });

        let normal = surface_normal(&(v1 - v0), &(v2 - v0));
        if !facing_camera(&normal, &v0, &view.camera) {
            continue;
        }

        let points = [v0, v1, v2].map(|vertex| {
            let screen = cube.screen_position(&view.projection.project(&vertex));
            [screen.x, screen.y]
        });
        frame.push(ShadedTriangle {
            points,
            color: shade(cube.color, normal.dot(&light_direction)),
        });
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Spin;

    fn test_view() -> View {
        View::new(
            Point3::origin(),
            Vector3::new(-2.0, 0.0, -1.0),
            Projection::new(1.0, 90.0, 0.1, 100.0),
        )
    }

    fn test_cube() -> Cube {
        Cube::new(
            Point3::new(300.0, 300.0, 100.0),
            2.0,
            Rgb::new(255.0, 102.0, 176.0),
        )
    }

    #[test]
    fn test_unrotated_cube_shows_only_the_back_face() {
        let frame = render(&test_cube(), &RotationAngles::new(0.0, 0.0, 0.0), &test_view());
        // Only the face turned toward the camera survives culling; with no
        // rotation that is the back (-z) face and its two triangles.
        assert_eq!(frame.len(), 2);
        for triangle in &frame {
            assert!((triangle.color.r - 140.9605).abs() < 1e-2);
            assert!((triangle.color.g - 56.3842).abs() < 1e-2);
            assert!((triangle.color.b - 97.2904).abs() < 1e-2);
        }
    }

    #[test]
    fn test_unrotated_corner_lands_mirrored_on_screen() {
        let frame = render(&test_cube(), &RotationAngles::new(0.0, 0.0, 0.0), &test_view());
        // First corner of the first visible triangle sits at model (-1, 1);
        // the negative-w divide mirrors it across the screen center.
        let [x, y] = frame[0].points[0];
        assert!((x - 425.273).abs() < 1e-2);
        assert!((y - 174.727).abs() < 1e-2);
    }

    #[test]
    fn test_tilted_cube_shows_two_faces() {
        let frame = render(&test_cube(), &RotationAngles::new(30.0, 0.0, 0.0), &test_view());
        // A 30 degree tilt brings the bottom face around as well.
        assert_eq!(frame.len(), 4);
    }

    #[test]
    fn test_full_spin_keeps_whole_faces_visible() {
        let cube = test_cube();
        let view = test_view();
        let mut spin = Spin::new();
        for _ in 0..362 {
            spin.advance();
            let frame = render(&cube, &spin.angles(), &view);
            // Both triangles of a face share its plane, so faces appear and
            // disappear as pairs; one to three faces show at any angle.
            assert_eq!(frame.len() % 2, 0);
            assert!((2..=6).contains(&frame.len()));
            for triangle in &frame {
                for [x, y] in triangle.points {
                    assert!((0.0..600.0).contains(&x));
                    assert!((0.0..600.0).contains(&y));
                }
            }
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let cube = test_cube();
        let view = test_view();
        let angles = RotationAngles::new(30.0, -47.0, 12.5);
        let first = render(&cube, &angles, &view);
        let second = render(&cube, &angles, &view);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            for (pa, pb) in a.points.iter().zip(&b.points) {
                assert_eq!(pa[0].to_bits(), pb[0].to_bits());
                assert_eq!(pa[1].to_bits(), pb[1].to_bits());
            }
            assert_eq!(a.color.r.to_bits(), b.color.r.to_bits());
            assert_eq!(a.color.g.to_bits(), b.color.g.to_bits());
            assert_eq!(a.color.b.to_bits(), b.color.b.to_bits());
        }
    }
}
