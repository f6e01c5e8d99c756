//! Common functionality shared across commands

use std::ffi::OsStr;
use std::path::PathBuf;

use clap::Args;

use crate::constants::output::STDIN_PATH;

/// Input arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Edge list to read (standard input if omitted or `-`)
    #[arg(value_name = "INPUT", env = "MODGRAPH_INPUT")]
    pub input: Option<PathBuf>,

    /// Suppress status messages on standard error
    #[arg(short, long, env = "MODGRAPH_QUIET")]
    pub quiet: bool,
}

/// Output arguments shared by the rendering commands
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output file (stdout if not specified)
    #[arg(short, long, env = "MODGRAPH_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Break node labels onto a second line before the version
    #[arg(long, env = "MODGRAPH_SPLIT_VERSIONS")]
    pub split_versions: bool,
}

impl InputArgs {
    /// Get the input path, mapping `-` to standard input
    pub fn get_input(&self) -> Option<PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != OsStr::new(STDIN_PATH))
            .cloned()
    }
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::ModGraphError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::ModGraphError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::ModGraphError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Build the "missing required field" error used by every config builder
pub(crate) fn missing_field(field: &str) -> crate::error::ModGraphError {
    crate::error::ModGraphError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
