use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum ModGraphError {
    #[error("Expected 2 words on line {line_number}, but got {token_count}: {line}")]
    #[diagnostic(
        code(modgraph::malformed_line),
        help("Each non-empty line must be exactly `<from> <to>` separated by whitespace")
    )]
    MalformedLine {
        line_number: usize,
        #[source_code]
        line: String,
        token_count: usize,
        #[label("this line")]
        span: SourceSpan,
    },

    #[error("'{target}' does not exist in the dependency graph")]
    #[diagnostic(
        code(modgraph::target_not_found),
        help("The target must appear as an endpoint of at least one edge in the input")
    )]
    TargetNotFound { target: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(modgraph::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(modgraph::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(modgraph::io_error),
        help("Check that the input is readable and the output is writable")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(modgraph::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}

impl ModGraphError {
    /// Build a `MalformedLine` error whose label covers the whole line
    pub fn malformed_line(line_number: usize, line: &str, token_count: usize) -> Self {
        ModGraphError::MalformedLine {
            line_number,
            line: line.to_string(),
            token_count,
            span: (0, line.len()).into(),
        }
    }
}
