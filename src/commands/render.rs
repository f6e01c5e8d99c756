//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderOptions;
use crate::error::ModGraphError;

impl FromCommand for RenderOptions {
    fn from_command(command: Commands) -> Result<Self, ModGraphError> {
        match command {
            Commands::Render {
                input,
                output,
                no_classify,
            } => RenderOptions::builder()
                .with_input(input.get_input())
                .with_output(output.output)
                .with_classify(!no_classify)
                .with_split_versions(output.split_versions)
                .with_quiet(input.quiet)
                .build(),
            _ => Err(ModGraphError::ConfigurationError {
                message: "Invalid command type for RenderOptions".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderOptions);

/// Execute the render command for generating the full DOT graph
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderOptions::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::common::{InputArgs, OutputArgs};

    #[test]
    fn test_render_options_from_command() {
        let command = Commands::Render {
            input: InputArgs {
                input: Some(PathBuf::from("-")),
                quiet: true,
            },
            output: OutputArgs {
                output: Some(PathBuf::from("graph.dot")),
                split_versions: true,
            },
            no_classify: true,
        };

        let options = RenderOptions::try_from(command).unwrap();
        assert_eq!(options.input, None);
        assert_eq!(options.output, Some(PathBuf::from("graph.dot")));
        assert!(!options.classify);
        assert!(options.split_versions);
        assert!(options.quiet);
    }

    #[test]
    fn test_render_options_reject_other_commands() {
        let command = Commands::Picks {
            input: InputArgs {
                input: None,
                quiet: false,
            },
            format: OutputFormat::Human,
        };

        assert!(RenderOptions::try_from(command).is_err());
    }
}
