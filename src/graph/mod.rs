//! # Graph Construction and Rendering Module
//!
//! This module owns the in-memory module graph, builds it from an edge list,
//! and renders it as Graphviz DOT.
//!
//! ## Components
//!
//! ### Graph Model
//! - **ModuleGraph**: Arena of named nodes with deduplicated directed edges
//!   and a designated root
//! - **ModuleNode**: A module, optionally carrying a `@version` suffix
//!
//! ### Graph Building
//! - **ModuleGraphBuilder**: Parses `<from> <to>` lines; the first source
//!   token becomes the root
//!
//! ### Graph Rendering
//! - **GraphRenderer**: Emits a `digraph` block with one statement per edge,
//!   optionally styling selected and superseded versions
//!
//! ## Example
//!
//! ```
//! use modgraph::graph::{GraphRenderer, ModuleGraphBuilder};
//! use modgraph::selection::classify;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = ModuleGraphBuilder::from_lines([
//!     "example.com/app golang.org/x/text@v0.3.0",
//!     "example.com/app golang.org/x/net@v0.1.0",
//!     "golang.org/x/net@v0.1.0 golang.org/x/text@v0.1.0",
//! ])?;
//!
//! let selection = classify(&graph);
//! let mut output = Vec::new();
//! GraphRenderer::new(false).render_dot(&graph, Some(&selection), &mut output)?;
//!
//! let dot = String::from_utf8(output)?;
//! assert!(dot.starts_with("digraph"));
//! assert!(dot.contains(r#""example.com/app" -> "golang.org/x/net@v0.1.0";"#));
//! assert!(dot.contains(r#""golang.org/x/text@v0.1.0" [style=filled, fillcolor=gray];"#));
//! # Ok(())
//! # }
//! ```

mod builder;
mod model;
mod renderer;
mod types;

pub use builder::ModuleGraphBuilder;
pub use model::ModuleGraph;
pub use renderer::{GraphRenderer, quote_id};
pub use types::{ModuleNode, split_version};
