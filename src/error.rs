//! Errors raised while loading palettes, themes and exporting tokens.
//!
//! Style resolution itself cannot fail; only the data around it can.

use std::path::PathBuf;

use thiserror::Error;

/// Error returned by palette import, theme configuration and export.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The design-token document is not valid JSON.
    #[error("invalid design token document: {0}")]
    Json(#[from] serde_json::Error),

    /// The theme configuration is not valid YAML.
    #[error("invalid theme configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A design-token value is not an `rgb(r, g, b)` triple.
    #[error("token '{key}' has value '{value}', expected rgb(r, g, b) with 3 byte components")]
    InvalidRgb { key: String, value: String },

    /// A configured color is not a `#RRGGBB` hex string.
    #[error("'{value}' is not a #RRGGBB color")]
    InvalidHex { value: String },

    /// A configured palette key does not name any known token.
    #[error("unknown palette token '{key}'")]
    UnknownToken { key: String },

    /// A listing template failed to render.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Reading or writing a file failed.
    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ThemeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ThemeError::Io {
            path: path.into(),
            source,
        }
    }
}
