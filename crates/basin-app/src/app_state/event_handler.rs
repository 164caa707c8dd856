//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use basin_scene::FrameTick;

use super::core::BasinApp;
use crate::input::wheel_units;

impl ApplicationHandler for BasinApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            self.init_error = Some(e);
            event_loop.exit();
            return;
        }

        self.request_assets();
        event_loop.set_control_flow(ControlFlow::Wait);
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                tracing::info!("Escape pressed, exiting");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    self.scene.resize(size.width, size.height);
                    if let Some(ref mut rs) = self.render_state {
                        rs.resize(size.width, size.height);
                    }
                }
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let units = wheel_units(delta, self.config.animation.wheel_line_delta);
                if self.driver.on_wheel(&mut self.scene, units) {
                    tracing::trace!(units, "Wheel advanced scene");
                }
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.poll_assets();
        // Continuous animation: every refresh is a frame tick.
        self.request_redraw();
    }
}

impl BasinApp {
    /// Tick the frame driver and render when the tick advanced the scene.
    fn render_frame(&mut self) {
        let FrameTick::Advanced { bloom_strength } = self.driver.tick(&mut self.scene, &mut self.rng)
        else {
            return;
        };
        let Some(ref mut rs) = self.render_state else {
            return;
        };
        if let Err(e) = rs.render(&self.scene, bloom_strength) {
            tracing::error!("Render failed: {e}");
        }
    }

    /// Release GPU resources before the window goes away.
    fn shutdown(&mut self) {
        tracing::info!(
            frames = self.driver.frames(),
            advanced = self.driver.advanced_frames(),
            "Shutting down"
        );
        self.should_exit = true;
        self.render_state = None;
        self.window = None;
    }
}
