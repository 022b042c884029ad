use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading an ABI or resolving a selector.
///
/// A selector that matches nothing is not an error; see [`crate::matcher::find_matching_error`].
#[derive(Debug, Error)]
pub enum FindError {
    #[error("failed to read ABI file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse ABI file {}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("malformed error declaration at index {index} ({name}): missing `{field}`")]
    MissingField {
        index: usize,
        name: String,
        field: &'static str,
    },

    #[error("malformed error declaration at index {index} ({name}): tuple parameter without `components`")]
    MissingComponents { index: usize, name: String },

    #[error("invalid error selector {input:?}: expected up to 8 hex digits, optionally 0x-prefixed")]
    InvalidSelector { input: String },
}
