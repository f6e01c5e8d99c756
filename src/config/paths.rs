//! Paths command configuration

use std::path::PathBuf;

use crate::common::missing_field;
use crate::error::ModGraphError;

#[derive(Debug, Clone)]
pub struct PathsConfig {
    pub target: String,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub split_versions: bool,
    pub quiet: bool,
}

impl PathsConfig {
    pub fn builder() -> PathsConfigBuilder {
        PathsConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct PathsConfigBuilder {
    target: Option<String>,
    input: Option<Option<PathBuf>>,
    output: Option<Option<PathBuf>>,
    split_versions: Option<bool>,
    quiet: Option<bool>,
}

impl PathsConfigBuilder {
    pub fn new() -> Self {
        Self {
            target: None,
            input: None,
            output: None,
            split_versions: None,
            quiet: None,
        }
    }

    pub fn with_target(mut self, target: &str) -> Self {
        self.target = Some(target.to_string());
        self
    }

    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_split_versions(mut self, split_versions: bool) -> Self {
        self.split_versions = Some(split_versions);
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = Some(quiet);
        self
    }
}

impl crate::common::ConfigBuilder for PathsConfigBuilder {
    type Config = PathsConfig;

    fn build(self) -> Result<Self::Config, ModGraphError> {
        let target = self.target.ok_or_else(|| missing_field("target"))?;
        if target.is_empty() {
            return Err(ModGraphError::ConfigurationError {
                message: "Target module name must not be empty".to_string(),
            });
        }

        Ok(PathsConfig {
            target,
            input: self.input.ok_or_else(|| missing_field("input"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            split_versions: self
                .split_versions
                .ok_or_else(|| missing_field("split_versions"))?,
            quiet: self.quiet.ok_or_else(|| missing_field("quiet"))?,
        })
    }
}
