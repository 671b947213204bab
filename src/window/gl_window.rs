use std::ffi::CString;
use std::num::NonZeroU32;

use glutin::{
    config::ConfigTemplateBuilder,
    context::{ContextApi, ContextAttributesBuilder, GlProfile, PossiblyCurrentContext, Version},
    display::{GetGlDisplay, GlDisplay},
    prelude::*,
    surface::{Surface, SwapInterval, WindowSurface},
};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use log::{info, warn};
use raw_window_handle::HasRawWindowHandle;
use winit::{
    dpi::LogicalSize,
    event_loop::EventLoop,
    window::{Window, WindowBuilder},
};

use crate::config::WindowConfig;
use crate::render;
use crate::utils::error::AppError;

/// A winit window with a current OpenGL context and loaded function pointers.
pub struct GlWindow {
    // Drop order: surface and context go before the window they render to.
    gl_surface: Surface<WindowSurface>,
    gl_context: PossiblyCurrentContext,
    window: Window,
}

impl GlWindow {
    pub fn new(event_loop: &EventLoop<()>, config: &WindowConfig) -> Result<Self, AppError> {
        let window_builder = WindowBuilder::new()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(config.width, config.height));

        let template = ConfigTemplateBuilder::new().with_alpha_size(8);
        let display_builder = DisplayBuilder::new().with_window_builder(Some(window_builder));

        let (window, gl_config) = display_builder
            .build(event_loop, template, |configs| {
                configs
                    .reduce(|accum, config| {
                        if config.num_samples() > accum.num_samples() {
                            config
                        } else {
                            accum
                        }
                    })
                    .expect("glutin yields at least one config")
            })
            .map_err(|err| AppError::WindowCreation(err.to_string()))?;

        let window = window
            .ok_or_else(|| AppError::WindowCreation("display builder returned no window".into()))?;
        let raw_window_handle = window.raw_window_handle();

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(
                config.gl_major,
                config.gl_minor,
            ))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));

        let gl_display = gl_config.display();
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes)? };

        let attrs = window.build_surface_attributes(<_>::default());
        let gl_surface = unsafe { gl_display.create_window_surface(&gl_config, &attrs)? };
        let gl_context = not_current.make_current(&gl_surface)?;

        gl::load_with(|symbol| match CString::new(symbol) {
            Ok(symbol) => gl_display.get_proc_address(symbol.as_c_str()) as *const _,
            Err(_) => std::ptr::null(),
        });

        info!(
            "Created {}x{} window '{}' with OpenGL {}.{} core context",
            config.width, config.height, config.title, config.gl_major, config.gl_minor
        );

        if config.vsync {
            let interval = SwapInterval::Wait(NonZeroU32::MIN);
            if let Err(err) = gl_surface.set_swap_interval(&gl_context, interval) {
                warn!("Could not enable vsync: {}", err);
            }
        }

        let size = window.inner_size();
        render::set_viewport(size.width, size.height);

        Ok(Self {
            gl_surface,
            gl_context,
            window,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }

    /// Matches the surface and viewport to a new framebuffer size.
    pub fn resize(&self, width: u32, height: u32) {
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return;
        };

        info!("Window resized.");
        self.gl_surface.resize(&self.gl_context, w, h);
        render::set_viewport(width, height);
    }

    pub fn swap_buffers(&self) -> Result<(), AppError> {
        self.gl_surface.swap_buffers(&self.gl_context)?;
        Ok(())
    }
}
