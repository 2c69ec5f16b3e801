// src/error.rs
use std::io;
use std::path::PathBuf;

/// Why a data source could not be turned into records.
///
/// Neither variant is fatal: views render [`LoadError::notice`] in place of
/// the listing. Short rows are not errors at all; the loader drops them.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The source file is missing or could not be read as UTF-8 text.
    #[error("{what} data unavailable at {}: {source}", path.display())]
    DataUnavailable {
        what: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file was read but its structure is unusable (menu JSON only;
    /// CSV has no file-level failure mode).
    #[error("{what} data at {} is malformed: {detail}", path.display())]
    Malformed {
        what: &'static str,
        path: PathBuf,
        detail: String,
    },
}

impl LoadError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, LoadError::DataUnavailable { .. })
    }

    /// User-facing text shown instead of the listing.
    pub fn notice(&self) -> String {
        match self {
            LoadError::DataUnavailable { what, .. } => format!("{what} data not found."),
            LoadError::Malformed { what, .. } => {
                format!("Error loading {} data.", what.to_lowercase())
            }
        }
    }
}
