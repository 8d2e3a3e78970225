//! Bundle storage and lookup
//!
//! Bundles are flat YAML maps. A bundle file is named
//! `<name>.yaml` for the root locale or `<name>_<locale>.yaml` for a
//! localized variant (`custom-full_es_AR.yaml`).

use super::builtin::BUILTIN_BUNDLES;
use super::format::format_message;
use crate::error::{Error, Result, ResultExt};
use crate::render::MessageResolver;
use crate::types::{Locale, MessageArg};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Trailing `_<lang>` or `_<lang>_<REGION>` locale suffix of a bundle file stem
static LOCALE_SUFFIX_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"_[a-z]{2,3}(?:_[A-Za-z]{2})?$").expect("locale suffix regex is valid")
});

// ============================================================================
// Message Bundle
// ============================================================================

/// One flat key -> template map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBundle {
    messages: BTreeMap<String, String>,
}

impl MessageBundle {
    /// Create an empty bundle
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a bundle from YAML
    ///
    /// An empty document yields an empty bundle.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        if yaml.lines().all(|l| {
            let l = l.trim();
            l.is_empty() || l.starts_with('#')
        }) {
            return Ok(Self::new());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Add or replace a message
    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) -> &mut Self {
        self.messages.insert(key.into(), template.into());
        self
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.insert(key, template);
        self
    }

    /// Get a message template
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    /// Number of messages
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when the bundle holds no messages
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Message keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }
}

// ============================================================================
// Bundle Resolver
// ============================================================================

/// Resolves messages across named, localized bundles
///
/// Lookup walks the locale fallback chain one key at a time, so a localized
/// bundle only needs the keys it changes.
#[derive(Debug, Clone, Default)]
pub struct BundleResolver {
    /// Bundles keyed by (name, locale tag)
    bundles: HashMap<(String, String), MessageBundle>,
}

impl BundleResolver {
    /// Create a resolver without any bundles
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver preloaded with the built-in bundles
    pub fn with_builtins() -> Result<Self> {
        let mut resolver = Self::new();
        for builtin in BUILTIN_BUNDLES {
            let bundle = MessageBundle::from_yaml_str(builtin.yaml).with_context(|| {
                format!(
                    "Invalid built-in bundle '{}' ({})",
                    builtin.name, builtin.locale
                )
            })?;
            resolver.insert(builtin.name, &Locale::new(builtin.locale), bundle);
        }
        Ok(resolver)
    }

    /// Add a bundle, replacing any bundle with the same name and locale
    pub fn insert(&mut self, name: impl Into<String>, locale: &Locale, bundle: MessageBundle) {
        self.bundles.insert((name.into(), locale.tag().to_string()), bundle);
    }

    /// Load every `*.yaml` / `*.yml` bundle file in a directory
    ///
    /// Returns the number of bundle files loaded. Files replace bundles that
    /// are already present for the same name and locale.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        if !dir.is_dir() {
            return Err(Error::FileNotFound {
                path: dir.display().to_string(),
            });
        }

        let mut paths: Vec<_> = fs::read_dir(dir)?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| {
                p.is_file()
                    && p.extension()
                        .is_some_and(|ext| ext == "yaml" || ext == "yml")
            })
            .collect();
        paths.sort();

        for path in &paths {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .ok_or_else(|| Error::InvalidBundleName {
                    name: path.display().to_string(),
                })?;
            let (name, locale) = parse_bundle_file_name(stem)?;
            let content = fs::read_to_string(path)?;
            let bundle = MessageBundle::from_yaml_str(&content)
                .with_context(|| format!("Failed to load bundle '{}'", path.display()))?;
            debug!(
                bundle = name,
                locale = %locale,
                messages = bundle.len(),
                "loaded message bundle"
            );
            self.insert(name, &locale, bundle);
        }

        Ok(paths.len())
    }

    /// True when any locale of the named bundle is loaded
    pub fn has_bundle(&self, name: &str) -> bool {
        self.bundles.keys().any(|(n, _)| n == name)
    }

    /// Loaded bundle names, sorted and deduplicated
    pub fn bundle_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.bundles.keys().map(|(n, _)| n.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        names
    }

    /// Find the raw template for a key, walking the locale fallback chain
    pub fn lookup(&self, name: &str, locale: &Locale, key: &str) -> Option<&str> {
        locale.fallback_chain().into_iter().find_map(|tag| {
            self.bundles
                .get(&(name.to_string(), tag.to_string()))
                .and_then(|bundle| bundle.get(key))
        })
    }

    /// Keys from `required` that the bundle cannot resolve for a locale
    pub fn missing_keys<'a>(
        &self,
        name: &str,
        locale: &Locale,
        required: &[&'a str],
    ) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|key| self.lookup(name, locale, key).is_none())
            .collect()
    }
}

impl MessageResolver for BundleResolver {
    fn resolve(
        &self,
        bundle: &str,
        key: &str,
        locale: &Locale,
        params: &[MessageArg],
    ) -> Result<String> {
        if !self.has_bundle(bundle) {
            return Err(Error::bundle_not_found(bundle));
        }
        let template = self
            .lookup(bundle, locale, key)
            .ok_or_else(|| Error::missing_message(bundle, key, locale.tag()))?;
        trace!(bundle, key, locale = %locale, "resolved message");
        Ok(format_message(template, params))
    }
}

/// Split a bundle file stem into its name and locale
///
/// `custom-full` -> (`custom-full`, root), `custom-full_es_AR` ->
/// (`custom-full`, `es_AR`). Only a trailing language (and region) suffix is
/// a locale, so `order_list` is a root bundle named `order_list`.
pub fn parse_bundle_file_name(stem: &str) -> Result<(&str, Locale)> {
    let (name, locale) = match LOCALE_SUFFIX_REGEX.find(stem) {
        Some(suffix) => (
            &stem[..suffix.start()],
            Locale::new(&stem[suffix.start() + 1..]),
        ),
        None => (stem, Locale::root()),
    };
    if name.trim().is_empty() {
        return Err(Error::InvalidBundleName {
            name: stem.to_string(),
        });
    }
    Ok((name, locale))
}
