//! Command executors that handle the actual logic for each command

pub mod paths;
pub mod picks;
pub mod render;

use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use miette::{IntoDiagnostic, Result, WrapErr};

use crate::graph::{ModuleGraph, ModuleGraphBuilder};

/// Trait for command executors
pub trait CommandExecutor {
    type Config;

    /// Execute the command with the given configuration
    fn execute(config: Self::Config) -> Result<()>;
}

/// Human-readable name of the input source
pub(crate) fn describe_input(input: Option<&Path>) -> String {
    match input {
        Some(path) => path.display().to_string(),
        None => "standard input".to_string(),
    }
}

/// Read the whole edge list from a file or standard input
pub(crate) fn read_graph(input: Option<&Path>) -> Result<ModuleGraph> {
    let reader: Box<dyn BufRead> = match input {
        Some(path) => Box::new(BufReader::new(
            File::open(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to open input file '{}'", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    ModuleGraphBuilder::from_reader(reader)
        .wrap_err_with(|| format!("Failed to read module graph from {}", describe_input(input)))
}

/// Open the output destination, standard output when no path is given
pub(crate) fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => Ok(Box::new(BufWriter::new(
            File::create(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("Failed to create output file '{}'", path.display()))?,
        ))),
        None => Ok(Box::new(io::stdout())),
    }
}
