//! # Version Selection Module
//!
//! Module graphs usually mention several versions of the same module. This
//! module decides which one wins: for each module path the greatest version
//! under semantic version precedence is *selected*, and every other version
//! is *superseded*.
//!
//! ## Example
//!
//! ```
//! use modgraph::graph::ModuleGraphBuilder;
//! use modgraph::selection::classify;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let graph = ModuleGraphBuilder::from_lines(["m@v1.0.0 n@v1.0.0", "m@v2.0.0 n@v1.0.0"])?;
//! let selection = classify(&graph);
//!
//! assert_eq!(selection.selected(), ["m@v2.0.0", "n@v1.0.0"]);
//! assert_eq!(selection.superseded(), ["m@v1.0.0"]);
//! # Ok(())
//! # }
//! ```

mod classifier;

pub use classifier::{Selection, VersionClassifier, classify, compare_versions};
