use anyhow::{Context, Result};

use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{App, AppControl, FrameCtx, FrameGate};
use crate::device::{GlDevice, GlInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputState, Key};

/// Window/runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Requested window size in physical pixels.
    pub initial_size: PhysicalSize<u32>,
    pub resizable: bool,
    /// Key that closes the window while held. `None` leaves only the window
    /// system's close request.
    pub exit_key: Option<Key>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".to_string(),
            initial_size: PhysicalSize::new(1920, 1080),
            resizable: true,
            exit_key: Some(Key::Escape),
        }
    }
}

/// Entry point for the runtime.
pub struct Runtime;

impl Runtime {
    /// Opens the window, drives `app` until the close condition is observed,
    /// then tears everything down.
    ///
    /// Returns an error if the window, the GL context or the app's GPU setup
    /// could not be created, or if presenting a frame failed.
    pub fn run<A>(config: RuntimeConfig, gl_init: GlInit, app: A) -> Result<()>
    where
        A: 'static + App,
    {
        let event_loop = EventLoop::new().context("failed to create winit EventLoop")?;
        let mut state = AppState::new(config, gl_init, app);

        event_loop
            .run_app(&mut state)
            .context("winit event loop terminated with error")?;

        match state.fatal.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

struct WindowEntry {
    input: InputState,
    gate: FrameGate,
    device: GlDevice,
}

struct AppState<A>
where
    A: App + 'static,
{
    config: RuntimeConfig,
    gl_init: GlInit,
    app: A,

    window: Option<WindowEntry>,
    fatal: Option<anyhow::Error>,
    exit_requested: bool,
}

impl<A> AppState<A>
where
    A: App + 'static,
{
    fn new(config: RuntimeConfig, gl_init: GlInit, app: A) -> Self {
        Self {
            config,
            gl_init,
            app,
            window: None,
            fatal: None,
            exit_requested: false,
        }
    }

    fn create_window_entry(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title(self.config.title.clone())
            .with_inner_size(self.config.initial_size)
            .with_resizable(self.config.resizable);

        let device = GlDevice::new(event_loop, attrs, self.gl_init.clone())?;
        self.app
            .on_init(device.gl())
            .context("failed to set up GPU resources")?;

        device.window().request_redraw();
        self.window = Some(WindowEntry {
            input: InputState::default(),
            gate: FrameGate::new(self.config.exit_key),
            device,
        });
        Ok(())
    }

    /// Releases app GPU objects while the context is still alive, then drops
    /// the surface, context and window.
    fn teardown(&mut self) {
        if let Some(entry) = self.window.take() {
            self.app.on_exit(entry.device.gl());
            log::debug!("rendered {} frames", entry.gate.frames());
        }
    }

    fn shutdown(&mut self, event_loop: &ActiveEventLoop) {
        self.teardown();
        self.exit_requested = true;
        event_loop.exit();
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        self.shutdown(event_loop);
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let (app, window) = (&mut self.app, &mut self.window);
        let Some(entry) = window.as_mut() else { return };

        // Loop check.
        if !entry.gate.begin_frame() {
            self.shutdown(event_loop);
            return;
        }

        entry.gate.process_input(&entry.input);

        let control = {
            let mut ctx = FrameCtx {
                gl: entry.device.gl(),
                input: &entry.input,
            };
            app.on_frame(&mut ctx)
        };

        if let Err(e) = entry.device.swap_buffers() {
            self.fail(event_loop, e);
            return;
        }

        if control == AppControl::Exit {
            entry.gate.request_close();
        }

        if entry.gate.should_close() {
            self.shutdown(event_loop);
        }
    }
}

impl<A> ApplicationHandler for AppState<A>
where
    A: App + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.exit_requested {
            return;
        }

        if let Err(e) = self.create_window_entry(event_loop) {
            self.fail(event_loop, e);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        // Continuous redraw, one frame per loop iteration.
        event_loop.set_control_flow(ControlFlow::Poll);
        if let Some(entry) = &self.window {
            entry.device.window().request_redraw();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if self.exit_requested {
            event_loop.exit();
            return;
        }

        let Some(entry) = self.window.as_mut() else {
            return;
        };

        if let Some(ev) = translate_window_event(&event) {
            entry.input.apply_event(&ev);
        }

        if self.app.on_window_event(&event) == AppControl::Exit {
            entry.gate.request_close();
        }

        match &event {
            WindowEvent::CloseRequested => {
                entry.gate.request_close();
            }

            WindowEvent::Resized(new_size) => {
                entry.device.resize(*new_size);
                entry.device.window().request_redraw();
            }

            WindowEvent::ScaleFactorChanged { .. } => {
                let new_size = entry.device.window().inner_size();
                entry.device.resize(new_size);
                entry.device.window().request_redraw();
            }

            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                return;
            }

            _ => {}
        }

        if entry.gate.should_close() {
            self.shutdown(event_loop);
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.teardown();
    }
}
