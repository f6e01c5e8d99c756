//! Render command configuration

use std::path::PathBuf;

use crate::common::missing_field;
use crate::error::ModGraphError;

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub classify: bool,
    pub split_versions: bool,
    pub quiet: bool,
}

impl RenderOptions {
    pub fn builder() -> RenderOptionsBuilder {
        RenderOptionsBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderOptionsBuilder {
    input: Option<Option<PathBuf>>,
    output: Option<Option<PathBuf>>,
    classify: Option<bool>,
    split_versions: Option<bool>,
    quiet: Option<bool>,
}

impl RenderOptionsBuilder {
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
            classify: None,
            split_versions: None,
            quiet: None,
        }
    }

    pub fn with_input(mut self, input: Option<PathBuf>) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }

    pub fn with_classify(mut self, classify: bool) -> Self {
        self.classify = Some(classify);
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

impl crate::common::ConfigBuilder for RenderOptionsBuilder {
    type Config = RenderOptions;

    fn build(self) -> Result<Self::Config, ModGraphError> {
        Ok(RenderOptions {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
            classify: self.classify.ok_or_else(|| missing_field("classify"))?,
            split_versions: self
                .split_versions
                .ok_or_else(|| missing_field("split_versions"))?,
            quiet: self.quiet.ok_or_else(|| missing_field("quiet"))?,
        })
    }
}
