//! Error kinds surfaced by the roster domain.
//!
//! None of these are fatal: a load failure is rendered inline with a retry action,
//! everything else degrades to a [`Notice`].

use crate::notice::Notice;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RosterError {
    /// The data store query was rejected (transport, status or decode failure).
    #[error("failed to load user data: {0}")]
    Load(String),

    /// Export requested while the view holds no records.
    #[error("no data to export")]
    EmptyExport,

    /// Copy-all requested while the view holds no records.
    #[error("no emails to copy")]
    EmptyCopy,

    /// The clipboard rejected the payload.
    #[error("failed to copy to clipboard: {0}")]
    Clipboard(String),

    /// Writing the CSV payload or file failed.
    #[error("failed to export CSV: {0}")]
    Export(String),

    #[error("unknown sort field `{0}` (expected one of: email, name, created, verified, profile, active)")]
    UnknownSortField(String),

    /// Row number outside the current page.
    #[error("row {0} is not on the current page")]
    NoSuchRow(usize),
}

impl RosterError {
    /// User-facing notice for this error.
    pub fn notice(&self) -> Notice {
        match self {
            Self::Load(_) => {
                Notice::error("Failed to load user data. Run with --verbose for details.")
            }
            Self::EmptyExport => Notice::error("No data to export"),
            Self::EmptyCopy => Notice::error("No emails to copy"),
            Self::Clipboard(_) => Notice::error("Failed to copy to clipboard"),
            Self::Export(detail) => Notice::error(format!("Failed to export CSV: {detail}")),
            Self::UnknownSortField(_) | Self::NoSuchRow(_) => Notice::error(self.to_string()),
        }
    }
}
