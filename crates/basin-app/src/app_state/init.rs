//! Window creation, renderer initialization, and asset requests.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Fullscreen, WindowAttributes};

use basin_common::BasinError;
use basin_config::schema::StartupMode;
use basin_renderer::RenderState;

use super::core::BasinApp;

impl BasinApp {
    /// Create the window and initialize the GPU renderer.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> Result<(), BasinError> {
        let window_config = &self.config.window;
        let mut attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_inner_size(LogicalSize::new(
                window_config.width as f64,
                window_config.height as f64,
            ));
        attrs = match window_config.startup_mode {
            StartupMode::Windowed => attrs,
            StartupMode::Maximized => attrs.with_maximized(true),
            StartupMode::Fullscreen => attrs.with_fullscreen(Some(Fullscreen::Borderless(None))),
        };

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| BasinError::Window(e.to_string()))?;

        let size = window.inner_size();
        self.scene.resize(size.width, size.height);

        let render_state =
            pollster::block_on(RenderState::new(window.clone(), &self.config, &self.scene))?;
        self.render_state = Some(render_state);
        self.window = Some(window);
        tracing::info!("Window created and renderer initialized");
        Ok(())
    }

    /// Start a background load for every model index and the water normals.
    pub(super) fn request_assets(&mut self) {
        for index in 0..self.scene.model_count() {
            let path = self.asset_paths.model_path(index);
            self.loader.request_model(index, path);
        }
        if self.scene.water.enabled {
            let path = self.asset_paths.water_normals_path().to_path_buf();
            self.loader.request_normal_map(path);
        }
        tracing::info!(pending = self.loader.pending(), "Asset loads requested");
    }
}
