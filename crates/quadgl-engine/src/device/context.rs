use std::num::NonZeroU32;

use anyhow::{anyhow, bail, Context, Result};
use glutin::config::{Config, ConfigTemplateBuilder, GlConfig};
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow};
use raw_window_handle::HasWindowHandle;
use winit::dpi::PhysicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes};

use super::GlInit;
use crate::gl::Gl;
use crate::render;

/// Owns the window, its GL surface and the current GL context.
///
/// Fields drop in declaration order: GL function table, surface, context, and
/// the window last.
pub struct GlDevice {
    gl: Gl,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl GlDevice {
    /// Creates the window described by `attrs` together with a GL context and
    /// makes the context current on this thread.
    ///
    /// Errors here are fatal for the application: either no window/context
    /// could be created or GL entry points could not be loaded.
    pub fn new(event_loop: &ActiveEventLoop, attrs: WindowAttributes, init: GlInit) -> Result<Self> {
        let GlInit {
            version,
            core_profile,
            vsync,
            transparent,
        } = init;

        let template = ConfigTemplateBuilder::new()
            .with_alpha_size(8)
            .with_transparency(transparent);

        let (window, config) = DisplayBuilder::new()
            .with_window_attributes(Some(attrs.with_transparent(transparent)))
            .build(event_loop, template, |configs| pick_config(configs, transparent))
            .map_err(|e| anyhow!("failed to create window: {e}"))?;
        let window = window.context("display builder returned no window")?;

        let raw_handle = window
            .window_handle()
            .context("window has no native handle")?
            .as_raw();
        let display = config.display();

        let profile = if core_profile { GlProfile::Core } else { GlProfile::Compatibility };
        let context_attrs = ContextAttributesBuilder::new()
            .with_profile(profile)
            .with_context_api(ContextApi::OpenGl(Some(Version::new(version.0, version.1))))
            .build(Some(raw_handle));

        let not_current = unsafe { display.create_context(&config, &context_attrs) }
            .with_context(|| format!("failed to create OpenGL {}.{} context", version.0, version.1))?;

        let surface_attrs = window
            .build_surface_attributes(Default::default())
            .context("failed to describe window surface")?;
        let surface = unsafe { display.create_window_surface(&config, &surface_attrs) }
            .context("failed to create window surface")?;

        let context = not_current
            .make_current(&surface)
            .context("failed to make GL context current")?;

        if display.get_proc_address(c"glClear").is_null() {
            bail!("failed to load OpenGL function pointers");
        }
        // SAFETY: the context was made current on this thread above and is owned
        // by the returned device together with the function table.
        let gl = unsafe { Gl::from_loader(|name| display.get_proc_address(name)) };

        if vsync {
            if let Err(e) = surface.set_swap_interval(&context, SwapInterval::Wait(NonZeroU32::MIN)) {
                log::warn!("vsync unavailable: {e}");
            }
        }

        let info = gl.info();
        log::info!("OpenGL {} ({}, {})", info.version, info.renderer, info.vendor);

        render::fit_viewport(&gl, window.inner_size());

        Ok(Self {
            gl,
            surface,
            context,
            window,
        })
    }

    #[inline]
    pub fn gl(&self) -> &Gl {
        &self.gl
    }

    #[inline]
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Resizes the surface and resets the viewport to cover it.
    ///
    /// A zero-sized surface cannot be configured (minimized windows); nothing
    /// changes in that case.
    pub fn resize(&self, new_size: PhysicalSize<u32>) {
        let (Some(w), Some(h)) = (NonZeroU32::new(new_size.width), NonZeroU32::new(new_size.height))
        else {
            return;
        };

        self.surface.resize(&self.context, w, h);
        render::fit_viewport(&self.gl, new_size);
        log::debug!("framebuffer resized to {}x{}", new_size.width, new_size.height);
    }

    /// Presents the back buffer.
    pub fn swap_buffers(&self) -> Result<()> {
        self.window.pre_present_notify();
        self.surface
            .swap_buffers(&self.context)
            .context("failed to swap buffers")
    }
}

/// Prefers a transparent config when asked for one, then the most samples.
fn pick_config(configs: Box<dyn Iterator<Item = Config> + '_>, transparent: bool) -> Config {
    configs
        .reduce(|best, candidate| {
            let best_alpha = transparent && best.supports_transparency().unwrap_or(false);
            let cand_alpha = transparent && candidate.supports_transparency().unwrap_or(false);

            if cand_alpha != best_alpha {
                return if cand_alpha { candidate } else { best };
            }
            if candidate.num_samples() > best.num_samples() {
                candidate
            } else {
                best
            }
        })
        // `DisplayBuilder` gives the picker no error channel. A failed config
        // query is reported by `build` itself.
        .expect("display offered no GL configs")
}
