#![forbid(unsafe_code)]

//! Collection load failures.

/// Why a collection failed to load.
///
/// Every variant is reported to the user the same way (the collection's error
/// message); the distinction only exists for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    /// The request never produced a response (network error, blocked request).
    Transport { url: String, reason: String },
    /// The server answered with a non-success status.
    Status { url: String, status: u16 },
    /// The body was not a JSON array of records.
    Decode { url: String, reason: String },
}

impl LoadError {
    /// URL of the collection that failed.
    pub fn url(&self) -> &str {
        match self {
            Self::Transport { url, .. } | Self::Status { url, .. } | Self::Decode { url, .. } => {
                url
            }
        }
    }
}

impl core::fmt::Display for LoadError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Transport { url, reason } => write!(f, "failed to fetch {url}: {reason}"),
            Self::Status { url, status } => write!(f, "failed to load {url}: HTTP {status}"),
            Self::Decode { url, reason } => write!(f, "invalid collection data in {url}: {reason}"),
        }
    }
}

impl std::error::Error for LoadError {}
