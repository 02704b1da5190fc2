//! Command-line argument parsing for the `genera` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Genera command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "genera", about = "Render procedural terrain maps")]
pub struct CliArgs {
    /// Output image width.
    #[arg(long)]
    pub width: Option<u32>,

    /// Output image height.
    #[arg(long)]
    pub height: Option<u32>,

    /// Output PNG path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Map layer: biome, elevation or moisture.
    #[arg(long)]
    pub layer: Option<String>,

    /// Preset id to generate.
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Preset directory.
    #[arg(long)]
    pub presets_dir: Option<PathBuf>,

    /// World x of the top-left pixel.
    #[arg(long, allow_negative_numbers = true)]
    pub origin_x: Option<f64>,

    /// World y of the top-left pixel.
    #[arg(long, allow_negative_numbers = true)]
    pub origin_y: Option<f64>,

    /// World units per pixel.
    #[arg(long)]
    pub zoom: Option<f64>,

    /// Worker threads (0 = one per core).
    #[arg(long)]
    pub threads: Option<usize>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(w) = args.width {
            self.output.width = w;
        }
        if let Some(h) = args.height {
            self.output.height = h;
        }
        if let Some(ref path) = args.output {
            self.output.path = path.clone();
        }
        if let Some(ref layer) = args.layer {
            self.output.layer = layer.clone();
        }
        if let Some(ref preset) = args.preset {
            self.generation.preset = preset.clone();
        }
        if let Some(ref dir) = args.presets_dir {
            self.generation.presets_dir = Some(dir.clone());
        }
        if let Some(x) = args.origin_x {
            self.generation.origin_x = x;
        }
        if let Some(y) = args.origin_y {
            self.generation.origin_y = y;
        }
        if let Some(zoom) = args.zoom {
            self.generation.zoom = zoom;
        }
        if let Some(threads) = args.threads {
            self.generation.threads = threads;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
