//! Window and OpenGL context bootstrap.
//!
//! Builds a winit window with a glutin OpenGL 3.3 core-profile context and
//! loads the glow function pointers through it. One GlContext per window;
//! the demos create it on the event loop's `resumed` callback.

use glutin::config::ConfigTemplateBuilder;
use glutin::context::{
    ContextApi, ContextAttributesBuilder, GlProfile, NotCurrentGlContext, PossiblyCurrentContext,
    Version,
};
use glutin::display::{GetGlDisplay, GlDisplay};
use glutin::surface::{GlSurface, Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::{DisplayBuilder, GlWindow as _};
use nova_render::{nova_info, nova_warn, Error, Result};
use raw_window_handle::HasWindowHandle;
use std::num::NonZeroU32;
use std::rc::Rc;
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::Window;

use glow::HasContext;

const SOURCE: &str = "nova::opengl::GlContext";

/// Window properties consumed by [`GlContext::create`].
#[derive(Debug, Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
    /// Swap interval 1 when true (block on the display's refresh).
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Nova Render".to_string(),
            width: 800,
            height: 600,
            resizable: false,
            vsync: true,
        }
    }
}

/// A window with a current OpenGL context and the loaded function pointers.
pub struct GlContext {
    window: Window,
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    gl: Rc<glow::Context>,
}

impl GlContext {
    /// Create the window, the GL 3.3 core context, and the glow loader.
    ///
    /// Must be called on the event loop thread (winit hands one out in
    /// `ApplicationHandler::resumed`).
    pub fn create(event_loop: &ActiveEventLoop, config: &WindowConfig) -> Result<Self> {
        let window_attributes = Window::default_attributes()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(config.width, config.height))
            .with_resizable(config.resizable);

        // 24-bit depth so the cube demos can depth-test.
        let template = ConfigTemplateBuilder::new().with_depth_size(24);

        let display_builder =
            DisplayBuilder::new().with_window_attributes(Some(window_attributes));
        let (window, gl_config) = display_builder
            .build(event_loop, template, |mut configs| {
                configs.next().expect("no available GL configs")
            })
            .map_err(|err| Error::WindowCreation(err.to_string()))?;
        let window = window
            .ok_or_else(|| Error::WindowCreation("display builder returned no window".to_string()))?;

        let raw_window_handle = window
            .window_handle()
            .map_err(|err| Error::WindowCreation(err.to_string()))?
            .as_raw();
        let gl_display = gl_config.display();

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::OpenGl(Some(Version::new(3, 3))))
            .with_profile(GlProfile::Core)
            .build(Some(raw_window_handle));
        let not_current = unsafe { gl_display.create_context(&gl_config, &context_attributes) }
            .map_err(|err| Error::WindowCreation(err.to_string()))?;

        let surface_attributes = window
            .build_surface_attributes(SurfaceAttributesBuilder::<WindowSurface>::default())
            .map_err(|err| Error::WindowCreation(err.to_string()))?;
        let surface = unsafe { gl_display.create_window_surface(&gl_config, &surface_attributes) }
            .map_err(|err| Error::WindowCreation(err.to_string()))?;

        let context = not_current
            .make_current(&surface)
            .map_err(|err| Error::WindowCreation(err.to_string()))?;

        let swap_interval = if config.vsync {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(err) = surface.set_swap_interval(&context, swap_interval) {
            // Not fatal; the demo just runs without vsync pacing.
            nova_warn!(SOURCE, "cannot set swap interval: {}", err);
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| gl_display.get_proc_address(name))
        };

        #[cfg(feature = "gl-debug")]
        install_debug_callback(&gl);

        nova_info!(
            SOURCE,
            "created {}x{} GL 3.3 core context (vsync: {})",
            config.width,
            config.height,
            config.vsync
        );

        Ok(Self {
            window,
            surface,
            context,
            gl: Rc::new(gl),
        })
    }

    /// Shared handle to the loaded GL functions.
    pub fn gl(&self) -> &Rc<glow::Context> {
        &self.gl
    }

    /// The underlying winit window.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Present the back buffer.
    pub fn swap_buffers(&self) -> Result<()> {
        self.surface
            .swap_buffers(&self.context)
            .map_err(|err| Error::BackendError(err.to_string()))
    }

    /// Resize the surface and the viewport. Zero-sized events (window
    /// minimized) are ignored.
    pub fn resize(&self, width: u32, height: u32) {
        if let (Some(width_nz), Some(height_nz)) = (NonZeroU32::new(width), NonZeroU32::new(height))
        {
            self.surface.resize(&self.context, width_nz, height_nz);
            unsafe {
                self.gl.viewport(0, 0, width as i32, height as i32);
            }
        }
    }

    /// Ask winit for another frame.
    pub fn request_redraw(&self) {
        self.window.request_redraw();
    }
}

/// Wire GL debug output into the log layer (KHR_debug, where available).
#[cfg(feature = "gl-debug")]
fn install_debug_callback(gl: &glow::Context) {
    use nova_render::{nova_debug, nova_error, nova_trace};

    if !gl.supported_extensions().contains("GL_KHR_debug") {
        nova_debug!(SOURCE, "GL_KHR_debug not available, debug output disabled");
        return;
    }
    unsafe {
        gl.enable(glow::DEBUG_OUTPUT);
        gl.debug_message_callback(|_source, _kind, id, severity, message| match severity {
            glow::DEBUG_SEVERITY_HIGH => nova_error!(SOURCE, "[{}] {}", id, message),
            glow::DEBUG_SEVERITY_MEDIUM | glow::DEBUG_SEVERITY_LOW => {
                nova_warn!(SOURCE, "[{}] {}", id, message)
            }
            _ => nova_trace!(SOURCE, "[{}] {}", id, message),
        });
    }
}
