//! Error types for board profile operations.

use std::path::PathBuf;

/// Errors that can occur while looking up or loading board profiles.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// The board identifier is not in the catalog.
    #[error("unknown board '{id}' (supported: i5, i9)")]
    UnknownBoard {
        /// The identifier that failed to resolve.
        id: String,
    },

    /// The revision is not covered by the board profile.
    #[error("unknown revision '{revision}' for board '{board}'")]
    UnknownRevision {
        /// Board identifier.
        board: String,
        /// The revision that failed to resolve.
        revision: String,
    },

    /// The flash chip name is not in the catalog.
    #[error("unknown flash chip '{name}'")]
    UnknownFlashChip {
        /// The chip name that failed to resolve.
        name: String,
    },

    /// The SDRAM module name is not in the catalog.
    #[error("unknown SDRAM module '{name}'")]
    UnknownSdramModule {
        /// The module name that failed to resolve.
        name: String,
    },

    /// TOML deserialization error.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    /// I/O error reading/writing board files.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Board definition file not found.
    #[error("board file not found: {}", path.display())]
    NotFound {
        /// The path that was not found.
        path: PathBuf,
    },
}

/// Result type for board profile operations.
pub type Result<T> = std::result::Result<T, BoardError>;
