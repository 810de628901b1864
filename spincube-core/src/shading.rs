/// Flat shading: surface normals, back-face culling and light attenuation
use nalgebra::{Point3, Vector3};

/// An RGB color with f32 channels.
///
/// Channels usually sit in 0..=255 but may leave that range: shading
/// against a strong light can push a channel negative, and the value is
/// kept as-is until the canvas converts to bytes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

/// Unit normal of the surface spanned by two edge vectors.
///
/// Degenerate spans (zero or parallel edges) yield the zero vector rather
/// than a NaN-filled one; a zero normal never survives the culling test.
pub fn surface_normal(edge1: &Vector3<f32>, edge2: &Vector3<f32>) -> Vector3<f32> {
    let cross = edge1.cross(edge2);
    let length = cross.norm();
    if length == 0.0 {
        Vector3::zeros()
    } else {
        cross / length
    }
}

/// Whether a surface at `point` with the given outward normal faces the
/// camera. The test is strict: a surface seen exactly edge-on is culled.
pub fn facing_camera(normal: &Vector3<f32>, point: &Point3<f32>, camera: &Point3<f32>) -> bool {
    normal.dot(&(point - camera)) < 0.0
}

/// Attenuate a base color by a light factor.
///
/// `factor` is the dot of the surface normal with the normalized light
/// direction; every channel scales by `1 - factor` and is capped at 255.
/// There is no cap from below, so a factor above one leaves negative
/// channels behind.
pub fn shade(base: Rgb, factor: f32) -> Rgb {
    Rgb::new(
        (base.r * (1.0 - factor)).min(255.0),
        (base.g * (1.0 - factor)).min(255.0),
        (base.b * (1.0 - factor)).min(255.0),
    )
}
