//! Paths command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{describe_input, open_output, read_graph};
use crate::config::PathsConfig;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;
use crate::paths::PathExtractor;
use crate::utils::string::pluralize;

pub struct PathsExecutor;

impl CommandExecutor for PathsExecutor {
    type Config = PathsConfig;

    fn execute(config: Self::Config) -> Result<()> {
        if !config.quiet {
            eprintln!(
                "{} Tracing paths to {} in {}...",
                style("🔍").cyan(),
                style(&config.target).bold(),
                describe_input(config.input.as_deref())
            );
        }

        let graph = read_graph(config.input.as_deref())?;

        let mut extractor = PathExtractor::new();
        let paths = extractor
            .extract_paths_to(&graph, &config.target)
            .wrap_err("Failed to extract paths")?;

        if !config.quiet {
            eprintln!(
                "  {} {} {} found, {} cyclic {} cut",
                style("→").dim(),
                style(extractor.paths_found()).green(),
                pluralize("path", extractor.paths_found()),
                style(extractor.cycles_cut()).dim(),
                pluralize("trail", extractor.cycles_cut())
            );
        }

        let mut output_writer = open_output(config.output.as_deref())?;
        GraphRenderer::new(config.split_versions)
            .render_dot(&paths, None, output_writer.as_mut())
            .wrap_err("Failed to render DOT graph")?;
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush DOT output")?;

        if let Some(output_path) = config.output.as_ref().filter(|_| !config.quiet) {
            eprintln!(
                "{} Paths written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
