/// Cube model: shared corners, triangle faces and the screen mapping
use nalgebra::Point3;

use crate::shading::Rgb;

/// Corner positions of the unit cube, front (+z) face first.
const CORNERS: [[f32; 3]; 8] = [
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
];

/// Corner indices for the two triangles covering each face.
///
/// Every triple is wound counter-clockwise seen from outside the cube, so
/// `(v1 - v0) x (v2 - v0)` points away from the cube's interior.
const TRIANGLES: [[usize; 3]; 12] = [
    // Front face (+z)
    [0, 1, 3],
    [3, 1, 2],
    // Back face (-z)
    [7, 5, 4],
    [6, 5, 7],
    // Bottom face (-y)
    [4, 1, 0],
    [5, 1, 4],
    // Top face (+y)
    [3, 2, 7],
    [7, 2, 6],
    // Right face (+x)
    [2, 1, 6],
    [6, 1, 5],
    // Left face (-x)
    [0, 3, 4],
    [4, 3, 7],
];

/// A triangle face stored as three corner positions
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [Point3<f32>; 3],
}

impl Triangle {
    pub fn new(v0: Point3<f32>, v1: Point3<f32>, v2: Point3<f32>) -> Self {
        Self {
            vertices: [v0, v1, v2],
        }
    }
}

/// A cube model with its screen placement and base color.
///
/// The triangle vertices live in model space (corners at +-1); `center` and
/// `scale` only describe where the projected image lands on screen.
#[derive(Debug, Clone)]
pub struct Cube {
    pub center: Point3<f32>,
    pub scale: f32,
    pub color: Rgb,
    pub triangles: [Triangle; 12],
}

impl Cube {
    pub fn new(center: Point3<f32>, scale: f32, color: Rgb) -> Self {
        let corner = |index: usize| {
            let [x, y, z] = CORNERS[index];
            Point3::new(x, y, z)
        };
        let triangles = TRIANGLES.map(|[a, b, c]| Triangle::new(corner(a), corner(b), corner(c)));
        Self {
            center,
            scale,
            color,
            triangles,
        }
    }

    /// Map a projected point onto the screen plane of this cube.
    ///
    /// The projected x and y are spread by `scale` around the center; z
    /// passes through untouched (the center's own z plays no part).
    pub fn screen_position(&self, point: &Point3<f32>) -> Point3<f32> {
        Point3::new(
            point.x * self.scale + self.center.x,
            point.y * self.scale + self.center.y,
            point.z,
        )
    }
}
