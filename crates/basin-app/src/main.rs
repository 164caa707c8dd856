mod app_state;
mod cli;
mod input;
mod logging;

use std::process::ExitCode;

use basin_common::BasinError;
use basin_config::schema::BasinConfig;
use basin_scene::assets::AssetPaths;
use basin_scene::Scene;
use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        tracing::error!("Basin panicked: {info}");
        default_hook(info);
    }));
}

/// Load the config from `--config` or the platform default, falling back to
/// defaults on any error.
fn load_config(args: &cli::Args) -> BasinConfig {
    let result = match args.config {
        Some(ref path) => {
            tracing::info!("Using config override: {}", path.display());
            basin_config::load_config_from(path)
        }
        None => basin_config::load_config(),
    };
    result.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        BasinConfig::default()
    })
}

/// Build the scene and drive the event loop until the window closes.
fn run(args: &cli::Args, config: BasinConfig) -> Result<(), BasinError> {
    let scene = Scene::from_config(&config)?;
    tracing::info!(
        models = scene.model_count(),
        rings = scene.rings().len(),
        radius = scene.layout().radius(),
        "Scene built"
    );

    let asset_paths = AssetPaths::from_config(&config.assets, args.assets.as_deref());
    let event_loop = EventLoop::new().map_err(|e| BasinError::EventLoop(e.to_string()))?;
    let mut app = app_state::BasinApp::new(config, scene, asset_paths);

    tracing::info!("Entering event loop");
    event_loop
        .run_app(&mut app)
        .map_err(|e| BasinError::EventLoop(e.to_string()))?;
    if let Some(err) = app.take_error() {
        return Err(err);
    }
    tracing::info!(frames = app.frames(), "Shutdown complete");
    Ok(())
}

fn main() -> ExitCode {
    install_panic_hook();

    let args = cli::parse();

    // The log level lives in the config, so load it under a temporary
    // subscriber and install the real one afterwards.
    let bootstrap = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(args.log_level.as_deref().unwrap_or("info")))
        .finish();
    let config = tracing::subscriber::with_default(bootstrap, || load_config(&args));

    if args.dump_config {
        println!("{}", basin_config::config_to_json(&config));
        return ExitCode::SUCCESS;
    }

    logging::init(args.log_level.as_deref(), config.logging.level);
    tracing::info!("Basin v{} starting...", env!("CARGO_PKG_VERSION"));

    match run(&args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Basin failed: {e}");
            ExitCode::FAILURE
        }
    }
}
