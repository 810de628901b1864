/// CPU canvas: an RGBA pixel buffer with triangle fill
use spincube_core::Rgb;

/// Off-screen pixel buffer the frame is rasterized into.
///
/// Pixels are RGBA8, row-major from the top-left corner, ready to upload
/// into a GPU texture of the same size.
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width: width as usize,
            height: height as usize,
            pixels: vec![0; size * 4],
        }
    }

    /// Raw RGBA8 bytes, row-major from the top-left corner.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn clear(&mut self, color: Rgb) {
        let packed = pack(color);
        for pixel in self.pixels.chunks_exact_mut(4) {
            pixel.copy_from_slice(&packed);
        }
    }

    /// Fill a triangle given in screen coordinates.
    ///
    /// Scans the triangle's bounding box clipped to the canvas and colors
    /// every pixel whose center lies inside, edges included.
    pub fn fill_triangle(&mut self, points: &[[f32; 2]; 3], color: Rgb) {
        let [v0, v1, v2] = *points;

        // Bounding box, clipped to the canvas
        let min_x = (v0[0].min(v1[0]).min(v2[0]).floor() as i32).max(0);
        let max_x = (v0[0].max(v1[0]).max(v2[0]).ceil() as i32).min(self.width as i32 - 1);
        let min_y = (v0[1].min(v1[1]).min(v2[1]).floor() as i32).max(0);
        let max_y = (v0[1].max(v1[1]).max(v2[1]).ceil() as i32).min(self.height as i32 - 1);

        let packed = pack(color);
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let center = [x as f32 + 0.5, y as f32 + 0.5];
                if let Some((w0, w1, w2)) = barycentric(v0, v1, v2, center) {
                    if w0 >= 0.0 && w1 >= 0.0 && w2 >= 0.0 {
                        let index = (y as usize * self.width + x as usize) * 4;
                        self.pixels[index..index + 4].copy_from_slice(&packed);
                    }
                }
            }
        }
    }
}

/// Convert a color to RGBA8. The `as` casts saturate, which is where
/// out-of-range channels (negative from shading, above 255) get clamped.
fn pack(color: Rgb) -> [u8; 4] {
    [color.r as u8, color.g as u8, color.b as u8, 0xff]
}

/// Calculate barycentric coordinates for a point in a triangle.
///
/// Returns None for degenerate (zero-area) triangles.
fn barycentric(v0: [f32; 2], v1: [f32; 2], v2: [f32; 2], p: [f32; 2]) -> Option<(f32, f32, f32)> {
    let denom = (v1[1] - v2[1]) * (v0[0] - v2[0]) + (v2[0] - v1[0]) * (v0[1] - v2[1]);

    if denom.abs() < 1e-6 {
        return None;
    }

    let w0 = ((v1[1] - v2[1]) * (p[0] - v2[0]) + (v2[0] - v1[0]) * (p[1] - v2[1])) / denom;
    let w1 = ((v2[1] - v0[1]) * (p[0] - v2[0]) + (v0[0] - v2[0]) * (p[1] - v2[1])) / denom;

    Some((w0, w1, 1.0 - w0 - w1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(canvas: &Canvas, x: usize, y: usize) -> [u8; 4] {
        let index = (y * canvas.width + x) * 4;
        let mut out = [0; 4];
        out.copy_from_slice(&canvas.pixels()[index..index + 4]);
        out
    }

    #[test]
    fn test_clear_fills_every_pixel() {
        let mut canvas = Canvas::new(4, 3);
        canvas.clear(Rgb::new(20.0, 20.0, 20.0));
        for pixel in canvas.pixels().chunks_exact(4) {
            assert_eq!(pixel, [20, 20, 20, 0xff]);
        }
    }

    #[test]
    fn test_fill_covers_inside_but_not_outside() {
        let mut canvas = Canvas::new(16, 16);
        canvas.clear(Rgb::new(0.0, 0.0, 0.0));
        canvas.fill_triangle(&[[2.0, 2.0], [14.0, 2.0], [8.0, 14.0]], Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(pixel(&canvas, 8, 6), [255, 0, 0, 0xff]);
        assert_eq!(pixel(&canvas, 0, 0), [0, 0, 0, 0xff]);
        assert_eq!(pixel(&canvas, 15, 15), [0, 0, 0, 0xff]);
    }

    #[test]
    fn test_fill_clips_to_the_canvas() {
        let mut canvas = Canvas::new(16, 16);
        canvas.clear(Rgb::new(0.0, 0.0, 0.0));
        // Bounding box far outside the canvas on every side.
        canvas.fill_triangle(
            &[[-10.0, -10.0], [30.0, -10.0], [8.0, 30.0]],
            Rgb::new(0.0, 255.0, 0.0),
        );
        assert_eq!(pixel(&canvas, 8, 8), [0, 255, 0, 0xff]);
    }

    #[test]
    fn test_degenerate_triangle_draws_nothing() {
        let mut canvas = Canvas::new(16, 16);
        canvas.clear(Rgb::new(0.0, 0.0, 0.0));
        canvas.fill_triangle(&[[2.0, 2.0], [8.0, 8.0], [14.0, 14.0]], Rgb::new(255.0, 0.0, 0.0));
        for pixel in canvas.pixels().chunks_exact(4) {
            assert_eq!(pixel, [0, 0, 0, 0xff]);
        }
    }

    #[test]
    fn test_byte_conversion_saturates() {
        let mut canvas = Canvas::new(4, 4);
        canvas.fill_triangle(
            &[[0.0, 0.0], [4.0, 0.0], [0.0, 4.0]],
            Rgb::new(-20.0, 300.0, 100.5),
        );
        assert_eq!(pixel(&canvas, 1, 1), [0, 255, 100, 0xff]);
    }
}
