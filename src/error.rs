//! Error types for theme conversion and dconf operations.

use thiserror::Error;

/// Primary error type for the conversion pipeline.
#[derive(Error, Debug)]
pub enum ConvertError {
    // Theme document errors
    #[error("Theme file not found: {path}")]
    ThemeNotFound { path: String },

    #[error("Invalid theme document: {0}")]
    InvalidDocument(String),

    #[error("Malformed color entry '{key}': missing {component}")]
    MalformedColorEntry { key: String, component: String },

    #[error("Theme has no '{key}' entry")]
    MissingColorKey { key: String },

    // Command building errors
    #[error("Incomplete palette: missing ANSI slots {missing:?}")]
    IncompletePalette { missing: Vec<usize> },

    // Store errors
    #[error("Failed to read profile store: {0}")]
    StoreRead(String),

    #[error("Command failed: {command}")]
    ExternalCommandFailed { command: String },

    // General errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConvertError {
    /// Returns true if the error is recoverable by the user.
    pub const fn is_user_recoverable(&self) -> bool {
        matches!(
            self,
            Self::ThemeNotFound { .. }
                | Self::MissingColorKey { .. }
                | Self::IncompletePalette { .. }
        )
    }

    /// Returns a suggestion for how to fix the error.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::ThemeNotFound { .. } => Some("Check the path to the .itermcolors file"),
            Self::MissingColorKey { .. } | Self::IncompletePalette { .. } => {
                Some("Re-export the theme from iTerm2; it should carry all 16 ANSI colors")
            }
            Self::StoreRead(_) | Self::ExternalCommandFailed { .. } => {
                Some("Ensure dconf is installed and a session bus is available")
            }
            _ => None,
        }
    }
}

/// Convenience type alias for Results using ConvertError.
pub type Result<T> = std::result::Result<T, ConvertError>;
