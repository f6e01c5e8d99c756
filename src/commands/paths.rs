//! Paths command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::PathsConfig;
use crate::error::ModGraphError;

impl FromCommand for PathsConfig {
    fn from_command(command: Commands) -> Result<Self, ModGraphError> {
        match command {
            Commands::Paths {
                target,
                input,
                output,
            } => PathsConfig::builder()
                .with_target(&target)
                .with_input(input.get_input())
                .with_output(output.output)
                .with_split_versions(output.split_versions)
                .with_quiet(input.quiet)
                .build(),
            _ => Err(ModGraphError::ConfigurationError {
                message: "Invalid command type for PathsConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(PathsConfig);

/// Execute the paths command for tracing one module back to the root
pub fn execute_paths_command(command: Commands) -> Result<()> {
    let config = PathsConfig::from_command(command)
        .wrap_err("Failed to parse paths command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::paths::PathsExecutor;
    PathsExecutor::execute(config)
}
