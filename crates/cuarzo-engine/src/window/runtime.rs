use std::time::Instant;

use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{Engine, LoopState};

use super::WinitHost;

/// Window configuration.
///
/// The window's inner size follows the engine viewport bound by `init`.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Close the window once the loop has been stopped.
    pub exit_on_stop: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "cuarzo".to_string(),
            exit_on_stop: true,
        }
    }
}

/// Entry point for the native runtime.
pub struct Runtime;

impl Runtime {
    /// Runs `engine` until its window is closed.
    ///
    /// Call `Engine::init` (and usually `mount`) before handing it over.
    pub fn run(config: RuntimeConfig, engine: Engine<WinitHost>) -> Result<()> {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, engine);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        Ok(())
    }
}

struct AppState {
    config: RuntimeConfig,
    engine: Engine<WinitHost>,
    window: Option<Window>,
    epoch: Instant,
}

impl AppState {
    fn new(config: RuntimeConfig, engine: Engine<WinitHost>) -> Self {
        Self {
            config,
            engine,
            window: None,
            epoch: Instant::now(),
        }
    }

    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let viewport = self.engine.viewport();
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(LogicalSize::new(viewport.width as f64, viewport.height as f64))
            .with_resizable(false);

        let window = event_loop
            .create_window(attrs)
            .context("failed to create window")?;

        self.window = Some(window);
        Ok(())
    }

    /// Host timestamp in milliseconds since the runtime started.
    fn timestamp(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.epoch).as_secs_f64() * 1000.0
    }

    fn deliver_frame(&mut self) {
        let now = Instant::now();
        let ts = self.timestamp(now);
        if let Some(handle) = self.engine.host_mut().take_frame(now) {
            self.engine.on_animation_frame(handle, ts);
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.create_window(event_loop) {
            log::error!("failed to create window: {e:#}");
            event_loop.exit();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if self.engine.host_mut().take_due_media(now) {
            self.engine.on_media_complete();
        }

        if self.config.exit_on_stop && self.engine.loop_state() == LoopState::Stopped {
            event_loop.exit();
            return;
        }

        let host = self.engine.host();
        if host.frame_due(now) {
            if let Some(window) = &self.window {
                window.request_redraw();
            }
        }

        event_loop.set_control_flow(match host.next_wakeup() {
            Some(at) if at > now => ControlFlow::WaitUntil(at),
            // Due frames were handed to `request_redraw`, which wakes the loop.
            _ => ControlFlow::Wait,
        });
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                self.engine.stop();
                event_loop.exit();
            }
            WindowEvent::Resized(size) => {
                // The canvas keeps the size given to `init`.
                log::debug!("window resized to {}x{}", size.width, size.height);
            }
            WindowEvent::RedrawRequested => self.deliver_frame(),
            _ => {}
        }
    }
}
