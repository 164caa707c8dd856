//! Configuration schema types for Basin.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the stock scene values.

mod animation;
mod assets;
mod bloom;
mod camera;
mod layout;
mod lighting;
mod rings;
mod system;
mod water;
mod window;

pub use animation::*;
pub use assets::*;
pub use bloom::*;
pub use camera::*;
pub use layout::*;
pub use lighting::*;
pub use rings::*;
pub use system::*;
pub use water::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Basin.
///
/// All options have defaults reproducing the stock scene.
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BasinConfig {
    pub window: WindowConfig,
    pub camera: CameraConfig,
    pub fog: FogConfig,
    pub lighting: LightingConfig,
    pub water: WaterConfig,
    pub layout: LayoutConfig,
    pub items: ItemsConfig,
    pub palette: PaletteConfig,
    pub rings: Vec<RingConfig>,
    pub bloom: BloomConfig,
    pub animation: AnimationConfig,
    pub assets: AssetsConfig,
    pub renderer: RendererConfig,
    pub logging: LoggingConfig,
}

impl Default for BasinConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            camera: CameraConfig::default(),
            fog: FogConfig::default(),
            lighting: LightingConfig::default(),
            water: WaterConfig::default(),
            layout: LayoutConfig::default(),
            items: ItemsConfig::default(),
            palette: PaletteConfig::default(),
            rings: default_rings(),
            bloom: BloomConfig::default(),
            animation: AnimationConfig::default(),
            assets: AssetsConfig::default(),
            renderer: RendererConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
