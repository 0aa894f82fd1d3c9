//! Command-line argument parsing for the orrery demo.

use std::path::PathBuf;

use clap::Parser;

use crate::{Config, MotionKind};

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Celestial body mesh batching and placement")]
pub struct CliArgs {
    /// Longitude slices per sphere.
    #[arg(long)]
    pub sectors: Option<u32>,

    /// Latitude bands per sphere.
    #[arg(long)]
    pub stacks: Option<u32>,

    /// Body placement mode.
    #[arg(long, value_enum)]
    pub mode: Option<MotionKind>,

    /// Frames to simulate before exiting.
    #[arg(long)]
    pub frames: Option<u32>,

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
        if let Some(sectors) = args.sectors {
            self.mesh.sector_count = sectors;
        }
        if let Some(stacks) = args.stacks {
            self.mesh.stack_count = stacks;
        }
        if let Some(mode) = args.mode {
            self.motion.mode = mode;
        }
        if let Some(frames) = args.frames {
            self.debug.frames = frames;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
