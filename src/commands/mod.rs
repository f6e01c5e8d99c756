//! Command implementations for the modgraph CLI
//!
//! This module contains the implementations for each CLI command:
//! - render: Render the whole module graph with version styling
//! - paths: Render the paths from the root to one module
//! - picks: Report the selected and superseded versions

pub mod paths;
pub mod picks;
pub mod render;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Render { .. } => render::execute_render_command(command),
        Commands::Paths { .. } => paths::execute_paths_command(command),
        Commands::Picks { .. } => picks::execute_picks_command(command),
    }
}
