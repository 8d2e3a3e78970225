//! Error types for Solidafy Pager
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! The window calculator itself is total and never fails; errors come from
//! the collaborators (message bundles, URL building, context lookup) and are
//! passed through to the caller unchanged.

use thiserror::Error;

/// The main error type for Solidafy Pager
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Message Bundle Errors
    // ============================================================================
    #[error("Message bundle '{bundle}' not found")]
    BundleNotFound { bundle: String },

    #[error("Missing message '{key}' in bundle '{bundle}' for locale '{locale}'")]
    MissingMessage {
        bundle: String,
        key: String,
        locale: String,
    },

    #[error("Invalid bundle file name: {name}")]
    InvalidBundleName { name: String },

    // ============================================================================
    // Context Errors
    // ============================================================================
    #[error("No paginated result found in the rendering context")]
    PageNotFound,

    #[error("Invalid page state: {message}")]
    InvalidPage { message: String },

    // ============================================================================
    // URL Errors
    // ============================================================================
    #[error("Cannot build page URL: {message}")]
    PageUrl { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a bundle-not-found error
    pub fn bundle_not_found(bundle: impl Into<String>) -> Self {
        Self::BundleNotFound {
            bundle: bundle.into(),
        }
    }

    /// Create a missing message error
    pub fn missing_message(
        bundle: impl Into<String>,
        key: impl Into<String>,
        locale: impl Into<String>,
    ) -> Self {
        Self::MissingMessage {
            bundle: bundle.into(),
            key: key.into(),
            locale: locale.into(),
        }
    }

    /// Create an invalid page error
    pub fn invalid_page(message: impl Into<String>) -> Self {
        Self::InvalidPage {
            message: message.into(),
        }
    }

    /// Create a page URL error
    pub fn page_url(message: impl Into<String>) -> Self {
        Self::PageUrl {
            message: message.into(),
        }
    }

    /// Check if this error comes from a missing translation
    pub fn is_missing_message(&self) -> bool {
        matches!(
            self,
            Error::MissingMessage { .. } | Error::BundleNotFound { .. }
        )
    }
}

/// Result type alias for Solidafy Pager
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::missing_message("custom-full", "laquo", "es");
        assert_eq!(
            err.to_string(),
            "Missing message 'laquo' in bundle 'custom-full' for locale 'es'"
        );

        let err = Error::PageNotFound;
        assert_eq!(
            err.to_string(),
            "No paginated result found in the rendering context"
        );
    }

    #[test]
    fn test_is_missing_message() {
        assert!(Error::missing_message("b", "k", "en").is_missing_message());
        assert!(Error::bundle_not_found("b").is_missing_message());
        assert!(!Error::PageNotFound.is_missing_message());
        assert!(!Error::config("x").is_missing_message());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
