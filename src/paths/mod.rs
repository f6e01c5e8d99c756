//! # Path Extraction Module
//!
//! Answers "why does my build depend on X?" by keeping only the paths from
//! the root module to a chosen target.
//!
//! ## Algorithm
//!
//! A breadth-first search walks out from the root, attaching to every
//! frontier entry the trail of nodes it came through. Before an entry is
//! expanded its trail is checked for a repeated node; entries that revisit
//! their own trail are dropped, so cycles neither appear in the output nor
//! keep the search alive. Each trail that reaches the target is merged into
//! a new graph, sharing prefixes and deduplicating edges.
//!
//! The check is local to a trail: it costs O(trail length) per entry and
//! shared sub-paths may be expanded more than once.
//!
//! ## Example
//!
//! ```
//! use modgraph::graph::ModuleGraphBuilder;
//! use modgraph::paths::extract_paths_to;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = ModuleGraphBuilder::from_lines(["A B", "B C", "A D"])?;
//! let paths = extract_paths_to(&graph, "C")?;
//!
//! let edges: Vec<_> = paths.edges().collect();
//! assert_eq!(edges, vec![("A", "B"), ("B", "C")]);
//! # Ok(())
//! # }
//! ```

mod extractor_impl;

pub use extractor_impl::*;
