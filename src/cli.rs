use clap::{Parser, Subcommand};

use crate::common::{InputArgs, OutputArgs};

#[derive(Parser)]
#[command(
    name = "modgraph",
    about = "Turn module dependency edge lists into Graphviz DOT",
    long_about = "modgraph reads a module dependency graph written as one `<from> <to>` edge per \
                  line (the format printed by `go mod graph`) and turns it into Graphviz DOT. It \
                  can color the version picked for every module, keep only the paths that lead \
                  to one module, or report which versions were selected.",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the whole module graph as DOT
    ///
    /// For each module the greatest version is filled green and every other
    /// version of it is filled gray.
    #[command(
        long_about = "Render every edge of the module graph as a Graphviz DOT statement. The \
                      greatest version of each module, by semantic version precedence, is \
                      styled as selected and all other versions as superseded. Pipe the result \
                      into `dot -Tsvg` to draw it."
    )]
    Render {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,

        /// Leave out the selected/superseded styling
        #[arg(long, env = "MODGRAPH_NO_CLASSIFY")]
        no_classify: bool,
    },

    /// Render only the paths from the root module to TARGET
    ///
    /// Shows why a module is part of the build by keeping every acyclic path
    /// that leads to it.
    #[command(
        long_about = "Keep only the acyclic paths from the root module (the first source token \
                      of the input) to TARGET and render them as Graphviz DOT. Paths that would \
                      revisit a module are cut. Fails if TARGET never appears in the input."
    )]
    Paths {
        /// Module to trace, for example `golang.org/x/text@v0.3.0`
        #[arg(value_name = "TARGET", env = "MODGRAPH_TARGET")]
        target: String,

        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Report which version of each module is selected
    #[command(
        long_about = "Classify every versioned module in the graph: the greatest version of \
                      each module is selected and the rest are superseded. Prints a \
                      human-readable summary or JSON."
    )]
    Picks {
        #[command(flatten)]
        input: InputArgs,

        /// Report format
        #[arg(
            short,
            long,
            value_enum,
            default_value = crate::constants::output::DEFAULT_FORMAT,
            env = "MODGRAPH_FORMAT"
        )]
        format: OutputFormat,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
