//! Picks command executor

use console::style;
use miette::{Result, WrapErr};

use super::{describe_input, read_graph};
use crate::cli::OutputFormat;
use crate::config::PicksConfig;
use crate::executors::CommandExecutor;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::selection::classify;

pub struct PicksExecutor;

impl CommandExecutor for PicksExecutor {
    type Config = PicksConfig;

    fn execute(config: Self::Config) -> Result<()> {
        if !config.quiet {
            eprintln!(
                "{} Selecting module versions from {}...",
                style("📦").cyan(),
                describe_input(config.input.as_deref())
            );
        }

        let graph = read_graph(config.input.as_deref())?;
        let selection = classify(&graph);

        let report = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&selection),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&selection),
        }
        .wrap_err("Failed to generate selection report")?;

        println!("{report}");

        Ok(())
    }
}
