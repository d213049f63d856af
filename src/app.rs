//! Windowed and headless drivers for the solar scene.
//!
//! The windowed driver owns the event loop: one animation tick per redraw,
//! pointer and wheel events routed through [`PointerState`], and a clean
//! exit on Escape or window close. The headless driver runs the same tick
//! loop without a GPU, for machines without a display and for the CLI
//! tests.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Result};
use glam::Vec2;
use log::{debug, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use crate::animation::{apply_scroll, Animator};
use crate::assets::TextureCatalog;
use crate::camera::CameraPose;
use crate::input::{PointerState, LINE_HEIGHT_PX};
use crate::model::SceneModel;
use crate::orbit::OrbitControls;
use crate::render::Renderer;
use crate::scene::{Light, Scene, MOON};

/// Settings shared by the windowed and headless drivers.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory the texture files are resolved against.
    pub assets: PathBuf,
    /// Scroll offset applied once at startup, in pixels.
    pub scroll: f32,
    /// Stop after this many ticks; `None` runs until the window closes.
    pub ticks: Option<u64>,
    /// Seed for the starfield scatter.
    pub star_seed: u64,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            assets: PathBuf::from("assets"),
            scroll: 0.0,
            ticks: None,
            star_seed: 0,
        }
    }
}

/// Runs the scene without a window or GPU: startup scroll, then the
/// requested number of ticks, then a final-state report on stdout.
pub fn run_headless(options: &RunOptions) -> Result<()> {
    let scene = Scene::solar(options.star_seed);
    let model = SceneModel::from_objects(scene.objects);
    let mut camera = CameraPose::startup();
    let mut animator = Animator::new();

    apply_scroll(options.scroll, &model, &mut camera);

    let ticks = options.ticks.unwrap_or(0);
    debug!("running {ticks} headless ticks");
    for _ in 0..ticks {
        animator.tick(&model);
    }
    print_final_state(&model, &animator, &camera);
    Ok(())
}

/// Opens a window and runs the event loop until close or Escape. Falls
/// back to the headless driver when no event loop can be created.
pub fn run_windowed(options: &RunOptions) -> Result<()> {
    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(err) => {
            warn!("no display available ({err}), falling back to headless mode");
            return run_headless(options);
        }
    };

    let mut app = App::new(options.clone());
    event_loop.run_app(&mut app)?;
    if app.fallback {
        return run_headless(options);
    }
    if let Some(err) = app.error.take() {
        return Err(err);
    }
    print_final_state(&app.model, &app.animator, &app.camera);
    Ok(())
}

fn print_final_state(model: &SceneModel, animator: &Animator, camera: &CameraPose) {
    println!("ticks: {}", animator.ticks());
    println!("t: {:.2}", animator.time());
    if let Some(moon) = model.get(MOON) {
        println!(
            "moon position: ({:.2}, {:.2}, {:.2})",
            moon.position.x, moon.position.y, moon.position.z
        );
    }
    println!(
        "camera position: ({:.2}, {:.2}, {:.2})",
        camera.position.x, camera.position.y, camera.position.z
    );
}

/// Windowed application state.
struct App {
    options: RunOptions,
    model: SceneModel,
    light: Light,
    camera: CameraPose,
    animator: Animator,
    pointer: PointerState,
    orbit: OrbitControls,
    renderer: Option<Renderer>,
    error: Option<anyhow::Error>,
    /// Set when no window or GPU could be set up; the caller reruns the
    /// scene headless instead of reporting a failure.
    fallback: bool,
}

impl App {
    fn new(options: RunOptions) -> Self {
        let scene = Scene::solar(options.star_seed);
        let light = scene.light;
        let model = SceneModel::from_objects(scene.objects);
        Self {
            options,
            model,
            light,
            camera: CameraPose::startup(),
            animator: Animator::new(),
            pointer: PointerState::new(),
            orbit: OrbitControls::new(),
            renderer: None,
            error: None,
            fallback: false,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        self.error = Some(err);
        event_loop.exit();
    }

    fn fall_back(&mut self, event_loop: &ActiveEventLoop, reason: &str) {
        warn!("{reason}, falling back to headless mode");
        self.fallback = true;
        event_loop.exit();
    }

    /// One frame: tick the scene, reconcile pending drag input, upload the
    /// camera and draw.
    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        self.animator.tick(&self.model);
        self.orbit.update(&self.pointer);

        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let view_proj =
            self.camera
                .view_projection(renderer.aspect(), self.orbit.yaw(), self.orbit.pitch());
        renderer.update_globals(view_proj, self.camera.position, &self.light);

        let objects = self.model.all_objects();
        match renderer.render(&objects) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                renderer.recover_surface();
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                self.fail(event_loop, anyhow!("GPU out of memory"));
            }
            Err(err) => {
                info!("skipping frame: {err}");
            }
        }

        // The limit check runs after the draw so the final tick's frame is
        // still presented.
        if let Some(limit) = self.options.ticks {
            if self.animator.ticks() >= limit {
                event_loop.exit();
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }
        let attributes = Window::default_attributes()
            .with_title("orrery")
            .with_inner_size(LogicalSize::new(1280.0, 720.0));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.fall_back(event_loop, &format!("unable to create window ({err})"));
                return;
            }
        };

        let catalog = TextureCatalog::new(self.options.assets.clone());
        let scene = Scene::solar(self.options.star_seed);
        match pollster::block_on(Renderer::new(window, &scene, &catalog)) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(err) => {
                self.fall_back(event_loop, &format!("unable to set up the GPU ({err:#})"));
                return;
            }
        }

        // The scroll mapping runs once at startup so the camera starts
        // from the page-top pose rather than the raw construction pose.
        let offset = self.pointer.add_scroll(self.options.scroll);
        apply_scroll(offset, &self.model, &mut self.camera);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if self
            .renderer
            .as_ref()
            .is_some_and(|renderer| renderer.window_id() != window_id)
        {
            return;
        }
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => event_loop.exit(),
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer
                    .move_to(Vec2::new(position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                self.pointer.set_dragging(state == ElementState::Pressed);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let delta_px = match delta {
                    MouseScrollDelta::LineDelta(_, lines) => lines * LINE_HEIGHT_PX,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32,
                };
                let offset = self.pointer.add_scroll(delta_px);
                apply_scroll(offset, &self.model, &mut self.camera);
            }
            WindowEvent::RedrawRequested => self.redraw(event_loop),
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(renderer) = self.renderer.as_ref() {
            renderer.window().request_redraw();
        }
    }
}
