//! Picks command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::PicksConfig;
use crate::error::ModGraphError;

impl FromCommand for PicksConfig {
    fn from_command(command: Commands) -> Result<Self, ModGraphError> {
        match command {
            Commands::Picks { input, format } => PicksConfig::builder()
                .with_input(input.get_input())
                .with_format(format)
                .with_quiet(input.quiet)
                .build(),
            _ => Err(ModGraphError::ConfigurationError {
                message: "Invalid command type for PicksConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(PicksConfig);

/// Execute the picks command for reporting version selection
pub fn execute_picks_command(command: Commands) -> Result<()> {
    let config = PicksConfig::from_command(command)
        .wrap_err("Failed to parse picks command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::picks::PicksExecutor;
    PicksExecutor::execute(config)
}
