use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShrinkerError {
    #[error("directory not found or unreadable: {}", path.display())]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    #[error("invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("refusing to rename files without confirmation: stdin is not a terminal (pass --yes)")]
    ConfirmationRequired,

    #[error("config error at {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl ShrinkerError {
    /// Errors caused by what the caller passed in rather than by the tool.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::DirectoryUnreadable { .. }
                | Self::NotADirectory { .. }
                | Self::InvalidPattern { .. }
                | Self::ConfirmationRequired
        )
    }
}
