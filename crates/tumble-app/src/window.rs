//! Window creation and event handling via winit.
//!
//! [`AppState`] implements winit's [`ApplicationHandler`]; [`run`]
//! starts the event loop and blocks until the window closes.

use std::sync::Arc;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowAttributes, WindowId};

use tumble_config::{Config, DieConfig};
use tumble_die::{DieModel, DieStyle, initial_orientation};
use tumble_input::{PointerState, pick_die};
use tumble_nav::Section;
use tumble_render::{
    Camera, DepthBuffer, DieRenderer, SurfaceError, Viewport, init_render_context_blocking,
};

use crate::controller::DieController;
use crate::panels::PanelSet;

/// Returns [`WindowAttributes`] based on the given configuration.
pub fn window_attributes_from_config(config: &Config) -> WindowAttributes {
    WindowAttributes::default()
        .with_title(config.window.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            config.window.width as f64,
            config.window.height as f64,
        ))
}

/// Translates the persisted die settings into the model's style.
fn die_style_from_config(die: &DieConfig) -> DieStyle {
    DieStyle {
        half_extent: die.size * 0.5,
        bevel_radius: die.bevel_radius,
        shell_half_extent: die.shell_size * 0.5,
        shell_bevel_radius: die.shell_bevel_radius,
        pip_radius: die.pip_radius,
        pip_spread: die.pip_spread,
        segments: die.segments,
        body_color: die.body_color,
        shell_color: die.shell_color,
        pip_black: die.pip_black,
        pip_red: die.pip_red,
    }
}

/// The section bound to a number key, if any.
fn section_for_key(code: KeyCode) -> Option<Section> {
    let index = match code {
        KeyCode::Digit1 => 0,
        KeyCode::Digit2 => 1,
        KeyCode::Digit3 => 2,
        KeyCode::Digit4 => 3,
        KeyCode::Digit5 => 4,
        KeyCode::Digit6 => 5,
        _ => return None,
    };
    Some(Section::ALL[index])
}

/// Application state: window, GPU context, and the die controller.
pub struct AppState {
    window: Option<Arc<Window>>,
    gpu: Option<tumble_render::RenderContext>,
    renderer: Option<DieRenderer>,
    depth: Option<DepthBuffer>,
    viewport: Viewport,
    camera: Camera,
    pointer: PointerState,
    panels: PanelSet,
    controller: DieController<ChaCha8Rng>,
    model: DieModel,
    config: Config,
    start_time: Instant,
}

impl AppState {
    /// Builds the die and wires the controller to the panels. GPU
    /// resources wait for [`ApplicationHandler::resumed`].
    pub fn new(config: Config, start_section: Option<Section>) -> Self {
        let model = DieModel::build(&die_style_from_config(&config.die));

        let mut panels = PanelSet::new();
        let mut controller = DieController::new(
            &mut panels,
            ChaCha8Rng::from_os_rng(),
            initial_orientation(),
        )
        .expect("PanelSet always carries the default panel");
        if let Some(section) = start_section
            && section != Section::DEFAULT
        {
            controller.jump_to(&mut panels, section);
        }

        let mut camera = Camera::default();
        camera.set_aspect_ratio(config.window.width as f32, config.window.height as f32);

        Self {
            window: None,
            gpu: None,
            renderer: None,
            depth: None,
            viewport: Viewport::new(config.window.width, config.window.height, 1.0),
            camera,
            pointer: PointerState::new(),
            panels,
            controller,
            model,
            config,
            start_time: Instant::now(),
        }
    }

    /// Seconds since startup, the clock every animation runs on.
    fn now(&self) -> f64 {
        self.start_time.elapsed().as_secs_f64()
    }

    fn apply_resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect_ratio(width as f32, height as f32);
        if let Some(gpu) = &mut self.gpu {
            gpu.resize(width, height);
            if let Some(depth) = &mut self.depth {
                depth.resize(&gpu.device, width, height);
            }
        }
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, code: KeyCode) {
        let now = self.now();
        match code {
            KeyCode::Escape => {
                event_loop.exit();
            }
            KeyCode::KeyR | KeyCode::Space => {
                self.controller.roll_random(now);
            }
            _ => {
                if let Some(section) = section_for_key(code) {
                    self.controller.roll_to(now, section);
                }
            }
        }
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let now = self.now();

        if self.pointer.just_clicked() {
            let ndc = self
                .pointer
                .ndc(self.viewport.width(), self.viewport.height());
            if pick_die(&self.camera, ndc, self.model.bounding_radius()) {
                self.controller.roll_any(now);
            }
        }

        if let Some(landed) = self.controller.tick(now, &mut self.panels)
            && let Some(window) = &self.window
        {
            window.set_title(&format!("{} - {}", self.config.window.title, landed.title()));
        }

        let failure = {
            let (Some(gpu), Some(renderer), Some(depth)) =
                (&self.gpu, &self.renderer, &self.depth)
            else {
                return;
            };

            renderer.update_camera(&gpu.queue, &self.camera);
            renderer.update_orientation(&gpu.queue, self.controller.orientation());

            match gpu.get_current_texture() {
                Ok(frame) => {
                    let view = frame
                        .texture
                        .create_view(&wgpu::TextureViewDescriptor::default());
                    let mut encoder =
                        gpu.device
                            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                                label: Some("frame-encoder"),
                            });
                    renderer.render_frame(&mut encoder, &view, depth);
                    gpu.queue.submit([encoder.finish()]);
                    frame.present();
                    None
                }
                Err(e) => Some(e),
            }
        };

        match failure {
            Some(SurfaceError::Lost) => {
                let (width, height) = (self.viewport.width(), self.viewport.height());
                if let Some(gpu) = &mut self.gpu {
                    gpu.resize(width, height);
                }
            }
            Some(SurfaceError::OutOfMemory) => {
                error!("GPU out of memory");
                event_loop.exit();
            }
            Some(SurfaceError::Timeout) => {
                warn!("Surface timeout, skipping frame");
            }
            None => {}
        }

        self.pointer.clear_transients();
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = window_attributes_from_config(&self.config);
        let window = Arc::new(
            event_loop
                .create_window(attrs)
                .expect("Failed to create window"),
        );

        let inner_size = window.inner_size();
        self.viewport = Viewport::new(inner_size.width, inner_size.height, window.scale_factor());
        self.camera
            .set_aspect_ratio(self.viewport.width() as f32, self.viewport.height() as f32);

        match init_render_context_blocking(window.clone(), self.config.window.vsync) {
            Ok(gpu) => {
                self.depth = Some(DepthBuffer::new(
                    &gpu.device,
                    self.viewport.width(),
                    self.viewport.height(),
                ));
                self.renderer = Some(DieRenderer::new(
                    &gpu.device,
                    gpu.surface_format,
                    &self.model,
                ));
                self.gpu = Some(gpu);
                info!(
                    width = self.viewport.width(),
                    height = self.viewport.height(),
                    "renderer initialized"
                );
            }
            Err(e) => {
                error!("GPU initialization failed: {e}");
                event_loop.exit();
                return;
            }
        }

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, shutting down");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some((width, height)) =
                    self.viewport.handle_resize(new_size.width, new_size.height)
                {
                    self.apply_resize(width, height);
                }
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(window) = &self.window {
                    let inner = window.inner_size();
                    if let Some((width, height)) = self.viewport.handle_scale_factor_changed(
                        scale_factor,
                        inner.width,
                        inner.height,
                    ) {
                        self.apply_resize(width, height);
                    }
                }
            }
            WindowEvent::KeyboardInput { event, .. } => {
                if event.state.is_pressed()
                    && !event.repeat
                    && let PhysicalKey::Code(code) = event.physical_key
                {
                    self.handle_key(event_loop, code);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.on_cursor_moved(position.x, position.y);
            }
            WindowEvent::CursorLeft { .. } => {
                self.pointer.on_cursor_left();
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.pointer.on_button(button, state);
            }
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
            }
            _ => {}
        }
    }
}

/// Creates an event loop and runs the widget until the window closes.
pub fn run(config: Config, start_section: Option<Section>) {
    let event_loop = EventLoop::new().expect("Failed to create event loop");
    let mut app = AppState::new(config, start_section);
    event_loop.run_app(&mut app).expect("Event loop failed");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_die_style_halves_the_configured_sizes() {
        let config = DieConfig::default();
        let style = die_style_from_config(&config);
        assert!((style.half_extent - 0.475).abs() < 1e-6);
        assert!((style.shell_half_extent - 0.51).abs() < 1e-6);
        assert_eq!(style.segments, config.segments);
        assert_eq!(style.shell_color, config.shell_color);
    }

    #[test]
    fn test_number_keys_map_to_sections_in_order() {
        assert_eq!(section_for_key(KeyCode::Digit1), Some(Section::Introduction));
        assert_eq!(section_for_key(KeyCode::Digit4), Some(Section::Achievement));
        assert_eq!(section_for_key(KeyCode::Digit6), Some(Section::Connect));
        assert_eq!(section_for_key(KeyCode::Digit7), None);
        assert_eq!(section_for_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_app_state_starts_on_requested_section() {
        let app = AppState::new(Config::default(), Some(Section::Skills));
        assert_eq!(app.controller.current(), Section::Skills);
        assert_eq!(app.panels.active_title(), "Skills");
    }

    #[test]
    fn test_app_state_defaults_to_introduction() {
        let app = AppState::new(Config::default(), None);
        assert_eq!(app.controller.current(), Section::Introduction);
        assert_eq!(app.controller.orientation(), initial_orientation());
    }
}
