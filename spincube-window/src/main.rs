/// Spincube - a rotating, flat-shaded cube in a window
///
/// Renders the cube entirely in software through spincube-core and only
/// uses the GPU to put the finished pixels on screen. ESC or closing the
/// window quits.
use anyhow::Result;
use nalgebra::{Point3, Vector3};
use winit::event_loop::EventLoop;

use spincube_core::{Cube, Projection, Rgb, View};
use spincube_window::{App, HEIGHT, TITLE, WIDTH};

/// Field of view of the perspective projection (degrees).
const FOV_DEGREES: f32 = 90.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

/// How far the projected cube spreads out from its screen center.
const CUBE_SCALE: f32 = 2.0;
const CUBE_COLOR: Rgb = Rgb::new(255.0, 102.0, 176.0);

fn main() -> Result<()> {
    env_logger::init();

    let projection = Projection::new(
        WIDTH as f32 / HEIGHT as f32,
        FOV_DEGREES,
        NEAR_PLANE,
        FAR_PLANE,
    );
    let view = View::new(Point3::origin(), Vector3::new(-2.0, 0.0, -1.0), projection);
    let cube = Cube::new(
        Point3::new(WIDTH as f32 / 2.0, HEIGHT as f32 / 2.0, 100.0),
        CUBE_SCALE,
        CUBE_COLOR,
    );

    log::info!("starting {TITLE}");

    let event_loop = EventLoop::new()?;
    let app = App::new(&event_loop, cube, view)?;
    app.run(event_loop)
}
