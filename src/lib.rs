//! # modgraph - Module Dependency Graphs as Graphviz DOT
//!
//! modgraph reads a module dependency graph written as a plain edge list, one
//! `<from> <to>` pair per line (the format printed by `go mod graph`), and
//! produces DOT text for Graphviz.
//!
//! ## Main Components
//!
//! - **Graph**: Builds the in-memory module graph and renders it as DOT
//! - **Paths**: Keeps only the acyclic paths from the root to one module
//! - **Selection**: Picks the greatest version of every module and marks the
//!   others as superseded
//! - **Reports**: Summarizes a selection for humans or as JSON
//!
//! ## Input Format
//!
//! Each non-empty line holds exactly two whitespace separated tokens. Empty
//! lines are ignored and any other line shape is an error. The first source
//! token of the input is the root of the graph. Tokens may carry a version
//! after an `@`, as in `golang.org/x/text@v0.3.0`.
//!
//! ## Usage
//!
//! ### Example: Rendering a Classified Graph
//!
//! ```
//! use std::io::Cursor;
//!
//! use modgraph::graph::{GraphRenderer, ModuleGraphBuilder};
//! use modgraph::selection::classify;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let input = "example.com/app example.com/lib@v1.0.0\n\
//!              example.com/app example.com/util@v0.2.0\n\
//!              example.com/lib@v1.0.0 example.com/util@v0.3.0\n";
//!
//! let graph = ModuleGraphBuilder::from_reader(Cursor::new(input))?;
//! let selection = classify(&graph);
//!
//! assert_eq!(selection.selected(), ["example.com/lib@v1.0.0", "example.com/util@v0.3.0"]);
//! assert_eq!(selection.superseded(), ["example.com/util@v0.2.0"]);
//!
//! let mut dot = Vec::new();
//! GraphRenderer::new(false).render_dot(&graph, Some(&selection), &mut dot)?;
//! let dot = String::from_utf8(dot)?;
//! assert!(dot.contains(r#""example.com/util@v0.2.0" [style=filled, fillcolor=gray];"#));
//! # Ok(())
//! # }
//! ```
//!
//! ### Example: Explaining Why a Module Is Needed
//!
//! ```
//! use modgraph::graph::ModuleGraphBuilder;
//! use modgraph::paths::PathExtractor;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = ModuleGraphBuilder::from_lines([
//!     "app a@v1.0.0",
//!     "app b@v1.0.0",
//!     "a@v1.0.0 c@v1.0.0",
//!     "b@v1.0.0 c@v1.0.0",
//!     "c@v1.0.0 a@v1.0.0",
//! ])?;
//!
//! let mut extractor = PathExtractor::new();
//! let paths = extractor.extract_paths_to(&graph, "c@v1.0.0")?;
//!
//! assert_eq!(extractor.paths_found(), 2);
//! assert_eq!(paths.edge_count(), 4);
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod error;
pub mod executors;
pub mod graph;
pub mod paths;
pub mod reports;
pub mod selection;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
