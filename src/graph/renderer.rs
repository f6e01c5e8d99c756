use std::io::Write;

use crate::constants::dot::{GRAPH_NAME, NODE_ATTRIBUTES, SELECTED_FILL, SUPERSEDED_FILL};
use crate::constants::graph::VERSION_DELIMITER;
use crate::error::ModGraphError;
use crate::graph::ModuleGraph;
use crate::selection::Selection;

// Helper macro for write operations that converts IO errors
macro_rules! writeln_out {
    ($dst:expr) => {
        writeln!($dst).map_err(ModGraphError::from)
    };
    ($dst:expr, $($arg:tt)*) => {
        writeln!($dst, $($arg)*).map_err(ModGraphError::from)
    };
}

/// Renders module graphs as Graphviz DOT
pub struct GraphRenderer {
    split_versions: bool,
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::new(false)
    }
}

impl GraphRenderer {
    /// Create a renderer
    ///
    /// With `split_versions`, every displayed name breaks onto a second line
    /// before its version, which keeps long module paths readable.
    pub fn new(split_versions: bool) -> Self {
        Self { split_versions }
    }

    /// Write `graph` as a `digraph` block
    ///
    /// Edges come first, in insertion order. When a selection is given, one
    /// styling statement follows for every selected and every superseded
    /// module.
    pub fn render_dot(
        &self,
        graph: &ModuleGraph,
        selection: Option<&Selection>,
        output: &mut dyn Write,
    ) -> Result<(), ModGraphError> {
        writeln_out!(output, "digraph {} {{", GRAPH_NAME)?;
        writeln_out!(output, "    node [{}];", NODE_ATTRIBUTES)?;

        for (from, to) in graph.edges() {
            writeln_out!(
                output,
                "    {} -> {};",
                self.node_id(from),
                self.node_id(to)
            )?;
        }

        if let Some(selection) = selection {
            for name in selection.selected() {
                writeln_out!(
                    output,
                    "    {} [style=filled, fillcolor={}];",
                    self.node_id(name),
                    SELECTED_FILL
                )?;
            }
            for name in selection.superseded() {
                writeln_out!(
                    output,
                    "    {} [style=filled, fillcolor={}];",
                    self.node_id(name),
                    SUPERSEDED_FILL
                )?;
            }
        }

        writeln_out!(output, "}}")?;
        Ok(())
    }

    fn node_id(&self, name: &str) -> String {
        if self.split_versions {
            let delimiter = VERSION_DELIMITER.to_string();
            quote_id(&name.replacen(&delimiter, &format!("\n{delimiter}"), 1))
        } else {
            quote_id(name)
        }
    }
}

/// Quote a name as a DOT string identifier
pub fn quote_id(name: &str) -> String {
    let mut quoted = String::with_capacity(name.len() + 2);
    quoted.push('"');
    for ch in name.chars() {
        match ch {
            '"' => quoted.push_str("\\\""),
            '\\' => quoted.push_str("\\\\"),
            '\n' => quoted.push_str("\\n"),
            '\r' => quoted.push_str("\\r"),
            _ => quoted.push(ch),
        }
    }
    quoted.push('"');
    quoted
}
