//! Pager configuration
//!
//! Settings for building a decorator from YAML:
//!
//! ```yaml
//! default_bundle: custom-full
//! default_window_size: 7
//! window_size_variable: paginationSplit
//! page_param: page
//! page_offset: 0
//! bundle_dir: ./bundles
//! ```
//!
//! Every field is optional.

use crate::error::{Error, Result};
use crate::messages::BundleResolver;
use crate::render::{
    FullPaginationDecorator, DEFAULT_BUNDLE, REQUIRED_KEYS, WINDOW_SIZE_VARIABLE,
};
use crate::types::Locale;
use crate::url_builder::{QueryUrlBuilder, DEFAULT_PAGE_PARAM};
use crate::window::{WindowConfig, DEFAULT_MAX_VISIBLE_LINKS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Configuration for the pagination decorator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PagerConfig {
    /// Bundle used when an element has no `sd:resource` attribute
    #[serde(default = "default_bundle")]
    pub default_bundle: String,

    /// Window size when the context does not provide one
    #[serde(default = "default_window_size")]
    pub default_window_size: u32,

    /// Context variable holding the window size
    #[serde(default = "default_window_size_variable")]
    pub window_size_variable: String,

    /// Query parameter carrying the page in generated links
    #[serde(default = "default_page_param")]
    pub page_param: String,

    /// Offset added to page indices in generated links
    #[serde(default)]
    pub page_offset: i64,

    /// Directory of bundle YAML files, layered over the built-in bundles
    #[serde(default)]
    pub bundle_dir: Option<PathBuf>,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            default_bundle: default_bundle(),
            default_window_size: default_window_size(),
            window_size_variable: default_window_size_variable(),
            page_param: default_page_param(),
            page_offset: 0,
            bundle_dir: None,
        }
    }
}

fn default_bundle() -> String {
    DEFAULT_BUNDLE.to_string()
}

fn default_window_size() -> u32 {
    DEFAULT_MAX_VISIBLE_LINKS
}

fn default_window_size_variable() -> String {
    WINDOW_SIZE_VARIABLE.to_string()
}

fn default_page_param() -> String {
    DEFAULT_PAGE_PARAM.to_string()
}

impl PagerConfig {
    /// Parse and validate a configuration from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse pager config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration file
    ///
    /// A relative `bundle_dir` is resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        let mut config = Self::from_yaml_str(&content)?;
        if let (Some(dir), Some(parent)) = (&config.bundle_dir, path.parent()) {
            if dir.is_relative() {
                config.bundle_dir = Some(parent.join(dir));
            }
        }
        Ok(config)
    }

    /// Check field values
    pub fn validate(&self) -> Result<()> {
        if self.default_bundle.trim().is_empty() {
            return Err(Error::invalid_value("default_bundle", "cannot be empty"));
        }
        if self.default_window_size == 0 {
            return Err(Error::invalid_value(
                "default_window_size",
                "must be greater than zero",
            ));
        }
        if self.window_size_variable.trim().is_empty() {
            return Err(Error::invalid_value("window_size_variable", "cannot be empty"));
        }
        if self.page_param.trim().is_empty() {
            return Err(Error::invalid_value("page_param", "cannot be empty"));
        }
        Ok(())
    }

    /// Window used when the context has no usable window size
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig::new(self.default_window_size)
    }

    /// URL builder for generated page links
    pub fn url_builder(&self) -> QueryUrlBuilder {
        QueryUrlBuilder::new()
            .with_page_param(&self.page_param)
            .with_page_offset(self.page_offset)
    }

    /// Built-in bundles plus any bundles in `bundle_dir`
    pub fn bundle_resolver(&self) -> Result<BundleResolver> {
        let mut resolver = BundleResolver::with_builtins()?;
        if let Some(dir) = &self.bundle_dir {
            let loaded = resolver.load_dir(dir)?;
            debug!(dir = %dir.display(), loaded, "loaded bundle directory");
        }
        Ok(resolver)
    }

    /// Build the full decorator
    ///
    /// Fails when the default bundle is missing or lacks a required key.
    pub fn decorator(&self) -> Result<FullPaginationDecorator> {
        let resolver = self.bundle_resolver()?;
        if !resolver.has_bundle(&self.default_bundle) {
            return Err(Error::bundle_not_found(&self.default_bundle));
        }
        let missing = resolver.missing_keys(&self.default_bundle, &Locale::root(), REQUIRED_KEYS);
        if let Some(key) = missing.first() {
            return Err(Error::missing_message(&self.default_bundle, *key, ""));
        }

        Ok(
            FullPaginationDecorator::new(Arc::new(resolver), Arc::new(self.url_builder()))
                .with_default_bundle(&self.default_bundle)
                .with_window_size_variable(&self.window_size_variable)
                .with_default_window(self.window_config()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = PagerConfig::default();
        assert_eq!(config.default_bundle, "custom-full");
        assert_eq!(config.default_window_size, 7);
        assert_eq!(config.window_size_variable, "paginationSplit");
        assert_eq!(config.page_param, "page");
        assert_eq!(config.page_offset, 0);
        assert!(config.bundle_dir.is_none());
    }

    #[test]
    fn test_parse_partial_config() {
        let yaml = r#"
default_window_size: 5
page_param: p
page_offset: 1
"#;
        let config = PagerConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.default_window_size, 5);
        assert_eq!(config.page_param, "p");
        assert_eq!(config.page_offset, 1);
        assert_eq!(config.default_bundle, "custom-full");
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = PagerConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, PagerConfig::default());
    }

    #[test]
    fn test_reject_zero_window() {
        let err = PagerConfig::from_yaml_str("default_window_size: 0").unwrap_err();
        assert!(err.to_string().contains("default_window_size"));
    }

    #[test]
    fn test_reject_unknown_field() {
        assert!(PagerConfig::from_yaml_str("window: 3").is_err());
    }

    #[test]
    fn test_reject_empty_page_param() {
        assert!(PagerConfig::from_yaml_str("page_param: ''").is_err());
    }

    #[test]
    fn test_from_file_resolves_bundle_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("pager.yaml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "bundle_dir: bundles").unwrap();

        let config = PagerConfig::from_file(&path).unwrap();
        assert_eq!(config.bundle_dir, Some(dir.path().join("bundles")));
    }

    #[test]
    fn test_from_missing_file() {
        let err = PagerConfig::from_file("/nonexistent/pager.yaml").unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }

    #[test]
    fn test_decorator_with_builtins() {
        let decorator = PagerConfig::default().decorator().unwrap();
        assert_eq!(decorator.default_bundle(), "custom-full");
    }

    #[test]
    fn test_decorator_unknown_default_bundle() {
        let config = PagerConfig {
            default_bundle: "nope".to_string(),
            ..Default::default()
        };
        let err = config.decorator().unwrap_err();
        assert!(matches!(err, Error::BundleNotFound { .. }));
    }

    #[test]
    fn test_decorator_incomplete_bundle() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("tiny.yaml"), "pagination: '<ul>{3}</ul>'\n").unwrap();

        let config = PagerConfig {
            default_bundle: "tiny".to_string(),
            bundle_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let err = config.decorator().unwrap_err();
        assert!(matches!(err, Error::MissingMessage { ref key, .. } if key == "laquo"));
    }
}
