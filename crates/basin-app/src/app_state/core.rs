//! BasinApp struct definition and constructor.

use std::sync::Arc;

use rand::rngs::ThreadRng;
use winit::window::Window;

use basin_common::BasinError;
use basin_config::schema::BasinConfig;
use basin_renderer::RenderState;
use basin_scene::assets::{AssetLoader, AssetPaths};
use basin_scene::{FrameDriver, Scene};

pub struct BasinApp {
    pub(super) config: BasinConfig,
    pub(super) scene: Scene,
    pub(super) driver: FrameDriver,
    pub(super) rng: ThreadRng,

    // Assets
    pub(super) asset_paths: AssetPaths,
    pub(super) loader: AssetLoader,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) render_state: Option<RenderState>,

    pub(super) should_exit: bool,
    // Why the window or renderer could not be created.
    pub(super) init_error: Option<BasinError>,
}

impl BasinApp {
    pub fn new(config: BasinConfig, scene: Scene, asset_paths: AssetPaths) -> Self {
        let driver = FrameDriver::new(&config.animation, &config.bloom);
        Self {
            config,
            scene,
            driver,
            rng: rand::thread_rng(),
            asset_paths,
            loader: AssetLoader::new(),
            window: None,
            render_state: None,
            should_exit: false,
            init_error: None,
        }
    }

    /// Display refreshes seen, skipped ones included.
    pub fn frames(&self) -> u64 {
        self.driver.frames()
    }

    /// The startup failure that ended the event loop, if any.
    pub fn take_error(&mut self) -> Option<BasinError> {
        self.init_error.take()
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
