use std::io::BufRead;

use super::model::ModuleGraph;
use crate::error::ModGraphError;

/// Builder for constructing module graphs from an edge list
///
/// The edge list is line oriented: every non-empty line holds exactly two
/// whitespace separated tokens, `<from> <to>`, meaning `from` depends on
/// `to`. The first `from` token of the input becomes the graph root; the
/// builder does not try to infer the root from in-degrees.
#[derive(Debug, Default)]
pub struct ModuleGraphBuilder {
    graph: ModuleGraph,
    line_number: usize,
}

impl ModuleGraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: ModuleGraph::new(),
            line_number: 0,
        }
    }

    /// Parse a single line of input and register its edge
    ///
    /// Empty lines are skipped. A line holding only whitespace is not empty
    /// and fails like any other line without exactly two tokens.
    pub fn add_line(&mut self, line: &str) -> Result<(), ModGraphError> {
        self.line_number += 1;

        if line.is_empty() {
            return Ok(());
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [from, to] = tokens.as_slice() else {
            return Err(ModGraphError::malformed_line(
                self.line_number,
                line,
                tokens.len(),
            ));
        };

        if self.graph.root().is_none() {
            self.graph.set_root(from);
        }
        self.graph.add_edge(from, to);

        Ok(())
    }

    /// Number of lines consumed so far, including skipped ones
    pub fn lines_read(&self) -> usize {
        self.line_number
    }

    pub fn graph(&self) -> &ModuleGraph {
        &self.graph
    }

    pub fn build(self) -> ModuleGraph {
        self.graph
    }

    /// Read an edge list to completion
    ///
    /// Any malformed line or read failure aborts the build; no partial graph
    /// is returned.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<ModuleGraph, ModGraphError> {
        let mut builder = Self::new();
        for line in reader.lines() {
            builder.add_line(&line?)?;
        }
        Ok(builder.build())
    }

    pub fn from_lines<'a, I>(lines: I) -> Result<ModuleGraph, ModGraphError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut builder = Self::new();
        for line in lines {
            builder.add_line(line)?;
        }
        Ok(builder.build())
    }
}
