//! Picks command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;
use crate::error::ModGraphError;

#[derive(Debug, Clone)]
pub struct PicksConfig {
    pub input: Option<PathBuf>,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl PicksConfig {
    pub fn builder() -> PicksConfigBuilder {
        PicksConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct PicksConfigBuilder {
    input: Option<Option<PathBuf>>,
    format: Option<OutputFormat>,
    quiet: Option<bool>,
}

impl PicksConfigBuilder {
    pub fn new() -> Self {
        Self {
            input: None,
            format: None,
            quiet: None,
        }
    }

    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }
}

impl crate::common::ConfigBuilder for PicksConfigBuilder {
    type Config = PicksConfig;

    fn build(self) -> Result<Self::Config, ModGraphError> {
        Ok(PicksConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            quiet: self.quiet.ok_or_else(|| missing_field("quiet"))?,
        })
    }
}
