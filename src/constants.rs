//! Configuration constants for modgraph
//!
//! This module contains the fixed values used throughout the application:
//! the input format delimiter, the DOT output vocabulary and CLI defaults.

/// Edge list format
pub mod graph {
    /// Separates the module path from its version in a node name
    pub const VERSION_DELIMITER: char = '@';
}

/// DOT output vocabulary
pub mod dot {
    /// Name of the emitted `digraph` block
    pub const GRAPH_NAME: &str = "modgraph";

    /// Default attributes applied to every node
    pub const NODE_ATTRIBUTES: &str = "shape=rectangle, fontsize=12";

    /// Fill color for the version picked for each module
    pub const SELECTED_FILL: &str = "green";

    /// Fill color for versions that lost to a higher one
    pub const SUPERSEDED_FILL: &str = "gray";
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";

    /// Path argument that stands for standard input
    pub const STDIN_PATH: &str = "-";
}
