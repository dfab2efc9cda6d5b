//! Windowed runner.
//!
//! Owns the winit event loop and translates window events into engine calls:
//! mouse wheel becomes scroll offset, redraw becomes `tick` plus `render`.
//! The countdown is sampled once a second and logged, standing in for the
//! page's countdown boxes.

use std::sync::Arc;
use std::time::SystemTime;

use winit::{
    application::ApplicationHandler,
    event::{MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    window::{Window, WindowId},
};

use crate::countdown::Countdown;
use crate::engine::Engine;
use crate::error::EngineError;
use crate::gpu::GpuState;
use crate::time::Time;

/// Scroll distance per mouse wheel line, in page pixels.
const LINE_SCROLL_PX: f32 = 120.0;

struct App {
    engine: Engine,
    countdown: Countdown,
    time: Time,
    window: Option<Arc<Window>>,
    gpu: Option<GpuState>,
    init_error: Option<EngineError>,
    last_countdown_log: Option<u64>,
}

impl App {
    fn new(engine: Engine, countdown: Countdown) -> Self {
        Self {
            engine,
            countdown,
            time: Time::new(),
            window: None,
            gpu: None,
            init_error: None,
            last_countdown_log: None,
        }
    }

    fn log_countdown(&mut self, elapsed: f32) {
        let second = elapsed as u64;
        if self.last_countdown_log == Some(second) {
            return;
        }
        self.last_countdown_log = Some(second);

        let now_ms = SystemTime::now()
            .duration_since(SystemTime::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        log::info!("countdown: {}", self.countdown.display(now_ms));
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title("ringlet")
                .with_inner_size(winit::dpi::LogicalSize::new(1280, 720));

            let window = match event_loop.create_window(window_attrs) {
                Ok(window) => Arc::new(window),
                Err(e) => {
                    self.init_error = Some(EngineError::Window(e));
                    event_loop.exit();
                    return;
                }
            };
            self.window = Some(window.clone());

            let size = window.inner_size();
            self.engine
                .camera_mut()
                .set_aspect(size.width.max(1) as f32 / size.height.max(1) as f32);

            match pollster::block_on(GpuState::new(window, &self.engine)) {
                Ok(gpu) => self.gpu = Some(gpu),
                Err(e) => {
                    log::error!("GPU initialization failed: {}", e);
                    self.init_error = Some(EngineError::Gpu(e));
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(physical_size) => {
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(physical_size);
                }
                if physical_size.width > 0 && physical_size.height > 0 {
                    self.engine
                        .camera_mut()
                        .set_aspect(physical_size.width as f32 / physical_size.height as f32);
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // Wheel up means scroll toward the top of the page.
                let scroll_px = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y * LINE_SCROLL_PX,
                    MouseScrollDelta::PixelDelta(pos) => -pos.y as f32,
                };
                self.engine.scroll_by(scroll_px);
            }
            WindowEvent::RedrawRequested => {
                let (elapsed, _delta) = self.time.update();
                self.engine.tick(elapsed);
                self.log_countdown(elapsed);

                if let Some(gpu) = &mut self.gpu {
                    match gpu.render(&self.engine, elapsed) {
                        Ok(_) => {}
                        Err(wgpu::SurfaceError::Lost) => gpu.resize(winit::dpi::PhysicalSize {
                            width: gpu.config.width,
                            height: gpu.config.height,
                        }),
                        Err(wgpu::SurfaceError::OutOfMemory) => event_loop.exit(),
                        Err(e) => eprintln!("Render error: {:?}", e),
                    }
                }
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}

/// Run the scene in a window until it is closed.
///
/// Blocks on the event loop; returns an error if the event loop, the window
/// or the GPU cannot be brought up.
pub fn run(engine: Engine, countdown: Countdown) -> Result<(), EngineError> {
    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(engine, countdown);
    event_loop.run_app(&mut app)?;

    match app.init_error {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
