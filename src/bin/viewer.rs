use std::error::Error;
use std::sync::Arc;

use glam::UVec2;
use pixels::{Pixels, SurfaceTexture};
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowAttributes};

use grid_tracer::loaders::config::{TracerConfig, load_config};
use grid_tracer::visualization::{pixel_to_grid, render_scene};
use grid_tracer::{GridExtent, GridTracer, TraceError, Vector2};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args();
    let _binary = args.next();
    let config = match args.next() {
        Some(path) => load_config(&path)?,
        None => TracerConfig::default(),
    };
    info!(?config, "starting viewer");

    let event_loop = EventLoop::new()?;
    let mut app = ViewerApp::new(&config)?;
    event_loop.run_app(&mut app)?;

    Ok(())
}

struct ViewerApp {
    tracer: GridTracer,
    origin: Vector2,
    canvas: UVec2,
    aim: Option<Vector2>,
    frame: Vec<u8>,
    window: Option<Arc<Window>>,
    pixels: Option<Pixels<'static>>,
}

impl ViewerApp {
    fn new(config: &TracerConfig) -> Result<Self, TraceError> {
        let mut app = Self {
            tracer: config.tracer()?,
            origin: config.origin,
            canvas: config.canvas_size(),
            aim: None,
            frame: Vec::new(),
            window: None,
            pixels: None,
        };
        app.rebuild_frame();
        Ok(app)
    }

    fn extent(&self) -> GridExtent {
        *self.tracer.extent()
    }

    fn rebuild_frame(&mut self) {
        let trace = self.aim.and_then(|aim| match self.tracer.trace(self.origin, aim) {
            Ok(trace) => Some(trace),
            Err(TraceError::DegenerateRay { .. }) => None,
            Err(err) => {
                error!("trace failed: {err}");
                None
            }
        });
        self.frame =
            render_scene(&self.extent(), self.origin, trace.as_ref(), self.canvas).into_raw();
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let window = match event_loop.create_window(
            WindowAttributes::default()
                .with_title("Grid Tracer")
                .with_inner_size(PhysicalSize::new(self.canvas.x, self.canvas.y)),
        ) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                error!("failed to create window: {err}");
                event_loop.exit();
                return;
            }
        };

        let window_size = window.inner_size();
        let surface_texture =
            SurfaceTexture::new(window_size.width, window_size.height, window.clone());
        let pixels = match Pixels::new(self.canvas.x, self.canvas.y, surface_texture) {
            Ok(pixels) => pixels,
            Err(err) => {
                error!("failed to create pixels surface: {err}");
                event_loop.exit();
                return;
            }
        };

        window.request_redraw();
        self.window = Some(window);
        self.pixels = Some(pixels);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::Resized(size) => {
                if let Some(pixels) = self.pixels.as_mut() {
                    if pixels.resize_surface(size.width, size.height).is_err() {
                        event_loop.exit();
                    }
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                let Some(window) = self.window.clone() else {
                    return;
                };
                let size = window.inner_size();
                if size.width == 0 || size.height == 0 {
                    return;
                }
                let aim = pixel_to_grid(
                    Vector2::new(position.x, position.y),
                    UVec2::new(size.width, size.height),
                    &self.extent(),
                );
                debug!(?aim, "cursor moved");
                self.aim = Some(aim);
                self.rebuild_frame();
                window.request_redraw();
            }
            WindowEvent::RedrawRequested => {
                if let Some(pixels) = self.pixels.as_mut() {
                    let frame = pixels.frame_mut();
                    if frame.len() == self.frame.len() {
                        frame.copy_from_slice(&self.frame);
                    }
                    if let Err(err) = pixels.render() {
                        error!("render failed: {err}");
                        event_loop.exit();
                    }
                }
            }
            _ => {}
        }
    }
}
