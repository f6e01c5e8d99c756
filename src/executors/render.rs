//! Render command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use super::{describe_input, open_output, read_graph};
use crate::config::RenderOptions;
use crate::executors::CommandExecutor;
use crate::graph::GraphRenderer;
use crate::selection::classify;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderOptions;

    fn execute(config: Self::Config) -> Result<()> {
        if !config.quiet {
            eprintln!(
                "{} Reading module graph from {}...",
                style("📊").cyan(),
                describe_input(config.input.as_deref())
            );
        }

        let graph = read_graph(config.input.as_deref())?;
        let selection = config.classify.then(|| classify(&graph));

        if !config.quiet {
            eprintln!(
                "  {} {} modules, {} edges",
                style("→").dim(),
                style(graph.node_count()).bold(),
                style(graph.edge_count()).bold()
            );
            if let Some(selection) = selection.as_ref() {
                eprintln!(
                    "  {} {} selected, {} superseded",
                    style("→").dim(),
                    style(selection.selected().len()).green(),
                    style(selection.superseded().len()).dim()
                );
            }
        }

        let mut output_writer = open_output(config.output.as_deref())?;
        GraphRenderer::new(config.split_versions)
            .render_dot(&graph, selection.as_ref(), output_writer.as_mut())
            .wrap_err("Failed to render DOT graph")?;
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush DOT output")?;

        if let Some(output_path) = config.output.as_ref().filter(|_| !config.quiet) {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}
