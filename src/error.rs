use thiserror::Error;

/// Errors that can occur while loading the menu or running the roulette
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum MenuError {
    // ============================================================================
    // I/O and Parse Errors
    // ============================================================================
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("Serde JSON error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    // ============================================================================
    // Fetch Errors
    // ============================================================================
    #[error("HTTP client error: {source}")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    #[error("Menu fetch failed with HTTP {status}: {url}")]
    HttpFailed { status: u16, url: String },

    // ============================================================================
    // Catalog Errors
    // ============================================================================
    #[error("Invalid menu document: {message}")]
    InvalidCatalog { message: String },

    #[error("Category {id} not found")]
    UnknownCategory { id: String },

    // ============================================================================
    // Roulette Errors
    // ============================================================================
    #[error("No drinks match filter '{filter}'")]
    EmptySelection { filter: String },

    #[error("No roulette wheel has been built")]
    NoWheel,

    #[error("A spin is already in progress")]
    SpinInProgress,
}

impl MenuError {
    /// Create an invalid catalog error with a message
    pub fn invalid_catalog(msg: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            message: msg.into(),
        }
    }

    /// Create an empty selection error for the given filter
    pub fn empty_selection(filter: impl Into<String>) -> Self {
        Self::EmptySelection {
            filter: filter.into(),
        }
    }

    /// Create an HTTP failed error
    pub fn http_failed(status: u16, url: impl Into<String>) -> Self {
        Self::HttpFailed {
            status,
            url: url.into(),
        }
    }

    /// Whether this error came from fetching or parsing the menu document
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Io { .. }
                | Self::Serde { .. }
                | Self::Reqwest { .. }
                | Self::HttpFailed { .. }
                | Self::InvalidCatalog { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
