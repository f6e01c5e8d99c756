//! # Configuration Module
//!
//! This module provides configuration structures for all modgraph commands.
//! Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **RenderOptions**: Configuration for the `render` command
//! - **PathsConfig**: Configuration for the `paths` command
//! - **PicksConfig**: Configuration for the `picks` command
//!
//! ## Example
//!
//! ```
//! use modgraph::cli::OutputFormat;
//! use modgraph::common::ConfigBuilder;
//! use modgraph::config::{PathsConfig, PicksConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let paths = PathsConfig::builder()
//!     .with_target("golang.org/x/text@v0.3.0")
//!     .with_input(None)
//!     .with_output(Some("paths.dot".into()))
//!     .with_split_versions(false)
//!     .with_quiet(true)
//!     .build()?;
//! assert_eq!(paths.target, "golang.org/x/text@v0.3.0");
//!
//! // Missing fields are reported instead of defaulted
//! let incomplete = PicksConfig::builder().with_format(OutputFormat::Json).build();
//! assert!(incomplete.is_err());
//! # Ok(())
//! # }
//! ```

pub mod paths;
pub mod picks;
pub mod render;

pub use paths::PathsConfig;
pub use picks::PicksConfig;
pub use render::RenderOptions;
