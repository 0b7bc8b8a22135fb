//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod palettes;
mod plan;
mod validate;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::config::OutputFormat;
use crate::models::{Anchor, ParticlesShape};

pub use palettes::PaletteAction;
pub use plan::PlanArgs;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// Env var holding the tracing filter directive
pub const LOG_ENV: &str = "CONFETTI_LOG";

/// Confetti - Plan confetti explosions as particle fields and CSS motion curves
#[derive(Parser)]
#[command(name = "confetti")]
#[command(about = "Confetti - Plan confetti explosions as particle fields and CSS motion curves")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Plan an explosion and print particles with their motion parameters
    Plan {
        /// JSON or JSON5 options file (camelCase keys)
        options: Option<PathBuf>,

        /// Number of particles
        #[arg(long, allow_negative_numbers = true)]
        count: Option<i64>,

        /// Explosion duration in milliseconds
        #[arg(long, allow_negative_numbers = true)]
        duration: Option<i64>,

        /// Vertical force, 0 to 1
        #[arg(long, allow_negative_numbers = true)]
        force: Option<f64>,

        /// Particle size in px
        #[arg(long, allow_negative_numbers = true)]
        size: Option<f64>,

        /// Horizontal spread of the explosion in px
        #[arg(long, allow_negative_numbers = true)]
        stage_width: Option<f64>,

        /// Distance particles fall in px
        #[arg(long, allow_negative_numbers = true)]
        stage_height: Option<f64>,

        /// Particle shapes: mix, circles, rectangles
        #[arg(long)]
        shape: Option<ParticlesShape>,

        /// Built-in palette (see `confetti palettes list`)
        #[arg(long)]
        palette: Option<String>,

        /// Explosion origin as X,Y in px
        #[arg(long, allow_hyphen_values = true)]
        anchor: Option<Anchor>,

        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: json, css
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Derive motion on all cores (ignored with --seed)
        #[arg(long)]
        parallel: bool,

        /// Path to confetti.toml (default: discovered from the current directory)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate explosion option files
    Validate {
        /// JSON or JSON5 option files to validate
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output issues as JSON
        #[arg(long)]
        json: bool,
    },

    /// List and inspect built-in palettes
    Palettes {
        #[command(subcommand)]
        action: PaletteAction,
    },
}

/// Install the stderr log subscriber. Safe to call more than once.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Parse arguments and run the selected command.
pub fn run() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            options,
            count,
            duration,
            force,
            size,
            stage_width,
            stage_height,
            shape,
            palette,
            anchor,
            seed,
            format,
            pretty,
            parallel,
            config,
        } => plan::run_plan(PlanArgs {
            options,
            count,
            duration,
            force,
            size,
            stage_width,
            stage_height,
            shape,
            palette,
            anchor,
            seed,
            format,
            pretty,
            parallel,
            config,
        }),
        Commands::Validate { files, json } => validate::run_validate(&files, json),
        Commands::Palettes { action } => palettes::run_palettes(action),
    }
}
