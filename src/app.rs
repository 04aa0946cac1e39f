use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::Key,
    window::{Window, WindowAttributes},
};

use crate::{
    error::SceneError,
    gfx::{camera::CameraController, context::RenderContext},
    input::{self, HostCommand},
    registry::{standard_camera, SceneRegistry},
};

/// Builds the registry once the window (the render surface) exists
pub type RegistryFactory<C> =
    Box<dyn FnOnce(Arc<Window>) -> Result<SceneRegistry<C>, SceneError>>;

/// Called after every frame's uniforms are refreshed, to draw the active scene
pub type FrameCallback<C> = Box<dyn FnMut(&mut SceneRegistry<C>)>;

/// Window host driving a [`SceneRegistry`] from winit events
///
/// Keys map through [`input::host_command`]; anything that isn't a host key
/// goes to [`SceneRegistry::handle_key`]. The mouse steers the active scene's
/// camera through a [`CameraController`].
pub struct SceneApp<C: RenderContext> {
    event_loop: Option<EventLoop<()>>,
    app_state: AppState<C>,
}

struct AppState<C: RenderContext> {
    window: Option<Arc<Window>>,
    registry: Option<SceneRegistry<C>>,
    camera_controller: CameraController,
    factory: Option<RegistryFactory<C>>,
    on_frame: Option<FrameCallback<C>>,
    error: Option<SceneError>,
}

impl<C: RenderContext + 'static> SceneApp<C> {
    pub fn new<F>(factory: F) -> anyhow::Result<Self>
    where
        F: FnOnce(Arc<Window>) -> Result<SceneRegistry<C>, SceneError> + 'static,
    {
        let event_loop = EventLoop::new()?;

        Ok(Self {
            event_loop: Some(event_loop),
            app_state: AppState {
                window: None,
                registry: None,
                camera_controller: CameraController::new(standard_camera()),
                factory: Some(Box::new(factory)),
                on_frame: None,
                error: None,
            },
        })
    }

    /// Set per-frame draw callback
    pub fn on_frame<F>(mut self, callback: F) -> Self
    where
        F: FnMut(&mut SceneRegistry<C>) + 'static,
    {
        self.app_state.on_frame = Some(Box::new(callback));
        self
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) -> anyhow::Result<()> {
        let event_loop = self
            .event_loop
            .take()
            .ok_or_else(|| anyhow::anyhow!("event loop already consumed"))?;
        event_loop.set_control_flow(ControlFlow::Poll);
        event_loop.run_app(&mut self.app_state)?;

        match self.app_state.error.take() {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }
}

impl<C: RenderContext> AppState<C> {
    fn handle_key(&mut self, event_loop: &ActiveEventLoop, key: &Key, state: ElementState) {
        if let Some(registry) = self.registry.as_mut() {
            let mut camera = *registry.active_camera();
            if self.camera_controller.process_key(key, state, &mut camera) {
                registry.set_active_camera(camera);
                return;
            }
        }

        if state != ElementState::Pressed {
            return;
        }

        match input::host_command(key) {
            HostCommand::Quit => event_loop.exit(),
            command => {
                if let Some(registry) = self.registry.as_mut() {
                    if let Err(err) = run_command(registry, command, key) {
                        log::warn!("Ignoring key {:?}: {}", key, err);
                    }
                }
            }
        }
    }
}

/// Applies one host command to the registry
fn run_command<C: RenderContext>(
    registry: &mut SceneRegistry<C>,
    command: HostCommand,
    key: &Key,
) -> Result<(), SceneError> {
    match command {
        HostCommand::Quit => {}
        HostCommand::SelectScene(index) => registry.set_active_scene(index)?,
        HostCommand::NextLight => {
            registry.cycle_active_light();
        }
        HostCommand::Shading(name) => registry.set_shading_algorithm(name)?,
        HostCommand::AdjustHeight(step) => {
            registry.set_height_scale(registry.height_scale() + step);
        }
        HostCommand::Scene => {
            registry.handle_key(key);
        }
    }
    Ok(())
}

impl<C: RenderContext> ApplicationHandler for AppState<C> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = WindowAttributes::default()
            .with_title("haggis scenes")
            .with_inner_size(winit::dpi::LogicalSize::new(1200, 800));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                log::error!("Failed to create window: {}", err);
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        if let Some(factory) = self.factory.take() {
            match factory(window) {
                Ok(registry) => self.registry = Some(registry),
                Err(err) => {
                    log::error!("Failed to build scenes: {}", err);
                    self.error = Some(err);
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: winit::window::WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state,
                        ..
                    },
                ..
            } => {
                self.handle_key(event_loop, &logical_key, state);
            }
            WindowEvent::Resized(size) => {
                if let Some(registry) = self.registry.as_mut() {
                    registry.resize(size.width, size.height);
                }
            }
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                if let Some(registry) = self.registry.as_mut() {
                    registry.before_render();
                    if let Some(on_frame) = self.on_frame.as_mut() {
                        on_frame(registry);
                    }
                }
            }
            _ => (),
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        let Some(registry) = self.registry.as_mut() else {
            return;
        };

        let mut camera = *registry.active_camera();
        if self.camera_controller.process_events(&event, &mut camera) {
            registry.set_active_camera(camera);
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
