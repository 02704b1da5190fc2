//! `genera`: render a terrain preset to a PNG map.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use genera_config::{CliArgs, Config, ConfigError, default_config_dir};
use genera_terrain::debug_viz::{DebugImageError, DebugLayer, UnknownLayer, render_layer};
use genera_terrain::{PresetError, PresetStore, TerrainPreset, Viewport};
use glam::DVec2;
use tracing::{error, info, warn};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Preset(#[from] PresetError),
    #[error(transparent)]
    Layer(#[from] UnknownLayer),
    #[error(transparent)]
    Image(#[from] DebugImageError),
    #[error("failed to configure worker threads: {0}")]
    Threads(#[from] rayon::ThreadPoolBuildError),
    #[error("output size {width}x{height} is empty")]
    EmptyOutput { width: u32, height: u32 },
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    let config_dir = match args.config.clone().map(Ok).unwrap_or_else(default_config_dir) {
        Ok(dir) => dir,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    genera_log::init_logging(
        Some(&config_dir.join("logs")),
        cfg!(debug_assertions),
        Some(&config),
    );

    match run(&config, &config_dir) {
        Ok(path) => {
            info!("Map written to {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Resolve the preset, render the configured layer, and write the PNG.
fn run(config: &Config, config_dir: &Path) -> Result<PathBuf, CliError> {
    let (width, height) = (config.output.width, config.output.height);
    if width == 0 || height == 0 {
        return Err(CliError::EmptyOutput { width, height });
    }
    let layer: DebugLayer = config.output.layer.parse()?;

    if config.generation.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(config.generation.threads)
            .build_global()?;
    }

    let preset = resolve_preset(config, config_dir)?;
    info!(
        "Generating {:?} (seed {:?} -> {})",
        preset.preset_name,
        preset.seed,
        preset.seed_value()
    );
    let sampler = preset.sampler()?;

    let viewport = Viewport::new(
        DVec2::new(config.generation.origin_x, config.generation.origin_y),
        width,
        height,
        config.generation.zoom,
    );
    if viewport.units_per_pixel != config.generation.zoom {
        warn!(
            "Invalid zoom {}, using {}",
            config.generation.zoom, viewport.units_per_pixel
        );
    }

    let start = Instant::now();
    let image = render_layer(&sampler, &viewport, layer);
    info!(
        "Rendered {layer} map {}x{} on {} threads in {:.1?}",
        width,
        height,
        rayon::current_num_threads(),
        start.elapsed()
    );

    image.write_png(&config.output.path)?;
    Ok(config.output.path.clone())
}

/// The configured preset, creating the default preset on first run.
fn resolve_preset(config: &Config, config_dir: &Path) -> Result<TerrainPreset, CliError> {
    let store = PresetStore::new(config.presets_dir(config_dir));
    // Only the default preset is written on demand; others must already exist.
    if config.generation.preset == TerrainPreset::default().preset_id {
        return Ok(store.ensure_default()?);
    }
    Ok(store.load(&config.generation.preset)?)
}
