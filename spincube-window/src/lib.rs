/// Windowed frontend: event loop, frame pacing and presentation
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowBuilder};

use spincube_core::{render, Cube, Rgb, Spin, View};

pub mod canvas;
pub mod display;

pub use canvas::Canvas;
pub use display::Display;

pub const WIDTH: u32 = 600;
pub const HEIGHT: u32 = 600;
pub const TITLE: &str = "3D Cube";
pub const TARGET_FPS: u32 = 30;
pub const BACKGROUND: Rgb = Rgb::new(20.0, 20.0, 20.0);

/// Main application struct for the windowed cube renderer
pub struct App {
    window: Arc<Window>,
    display: Display,
    canvas: Canvas,
    cube: Cube,
    view: View,
    spin: Spin,
    period: Duration,
    next_frame: Instant,
    frame_count: u32,
    last_stats: Instant,
}

impl App {
    pub fn new(event_loop: &EventLoop<()>, cube: Cube, view: View) -> Result<Self> {
        let window = Arc::new(
            WindowBuilder::new()
                .with_title(TITLE)
                .with_inner_size(PhysicalSize::new(WIDTH, HEIGHT))
                .with_resizable(false)
                .build(event_loop)?,
        );
        let display = pollster::block_on(Display::new(window.clone(), WIDTH, HEIGHT))?;

        Ok(Self {
            window,
            display,
            canvas: Canvas::new(WIDTH, HEIGHT),
            cube,
            view,
            spin: Spin::new(),
            period: Duration::from_millis(1000 / TARGET_FPS as u64),
            next_frame: Instant::now(),
            frame_count: 0,
            last_stats: Instant::now(),
        })
    }

    pub fn run(mut self, event_loop: EventLoop<()>) -> Result<()> {
        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent { window_id, event } if window_id == self.window.id() => {
                self.handle_window_event(event, elwt);
            }
            Event::AboutToWait => {
                if Instant::now() >= self.next_frame {
                    self.window.request_redraw();
                }
                elwt.set_control_flow(ControlFlow::WaitUntil(self.next_frame));
            }
            _ => {}
        })?;
        Ok(())
    }

    fn handle_window_event(&mut self, event: WindowEvent, elwt: &EventLoopWindowTarget<()>) {
        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(KeyCode::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => elwt.exit(),
            WindowEvent::Resized(size) => self.display.resize(size.width, size.height),
            WindowEvent::RedrawRequested => self.redraw(elwt),
            _ => {}
        }
    }

    /// Draw one frame: clear, advance the spin, render, present.
    fn redraw(&mut self, elwt: &EventLoopWindowTarget<()>) {
        let frame_start = Instant::now();
        self.next_frame = frame_start + self.period;

        self.canvas.clear(BACKGROUND);
        self.spin.advance();
        for triangle in render(&self.cube, &self.spin.angles(), &self.view) {
            self.canvas.fill_triangle(&triangle.points, triangle.color);
        }

        match self.display.present(self.canvas.pixels()) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                self.display.reconfigure();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                log::error!("out of graphics memory, shutting down");
                elwt.exit();
            }
            Err(error) => log::warn!("skipping frame: {error}"),
        }

        // Update FPS counter
        self.frame_count += 1;
        let now = Instant::now();
        if (now - self.last_stats).as_secs() >= 1 {
            let fps = self.frame_count as f32 / (now - self.last_stats).as_secs_f32();
            log::debug!("fps: {fps:.1}");
            self.frame_count = 0;
            self.last_stats = now;
        }
    }
}
