use std::path::PathBuf;

/// Errors that can occur while reading choice sources or writing exports.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A choice source could not be opened or read.
    #[error("cannot open file {}: {source}", .path.display())]
    Read {
        /// The file that failed to open.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An export file could not be written.
    #[error("cannot write file {}: {source}", .path.display())]
    Write {
        /// The file that failed to write.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The platform does not provide a home directory.
    #[error("could not determine home directory")]
    NoHomeDir,
}
