//! Palettes command implementation

use clap::Subcommand;
use std::process::ExitCode;

use crate::palettes;

use super::{EXIT_ERROR, EXIT_SUCCESS};

#[derive(Subcommand)]
pub enum PaletteAction {
    /// List all available built-in palettes
    List,
    /// Show the colors of a specific palette
    Show {
        /// Name of the palette to show
        name: String,
    },
}

/// Execute the palettes command
pub fn run_palettes(action: PaletteAction) -> ExitCode {
    match action {
        PaletteAction::List => {
            println!("Built-in palettes:");
            for name in palettes::list_builtins() {
                println!("  @{}", name);
            }
            ExitCode::from(EXIT_SUCCESS)
        }
        PaletteAction::Show { name } => match palettes::get_builtin(&name) {
            Some(palette) => {
                println!("Palette: @{}", palette.name);
                println!();
                for (i, color) in palette.colors.iter().enumerate() {
                    println!("  {} => {}", i, color);
                }
                ExitCode::from(EXIT_SUCCESS)
            }
            None => {
                eprintln!("Error: Unknown palette '{}'", name);
                eprintln!();
                eprintln!("Available palettes:");
                for builtin_name in palettes::list_builtins() {
                    eprintln!("  @{}", builtin_name);
                }
                ExitCode::from(EXIT_ERROR)
            }
        },
    }
}
