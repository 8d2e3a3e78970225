//! Common types used throughout Solidafy Pager
//!
//! This module contains the page-state snapshot, locale handling, message
//! arguments and the element model shared by the renderer and the services.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

// ============================================================================
// Page State
// ============================================================================

/// Snapshot of an already-paginated result
///
/// `current_page` is 0-based. When `total_pages` is zero the current page is
/// expected to be zero as well.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageState {
    /// Current page index (0-based)
    #[serde(default)]
    pub current_page: u32,
    /// Total number of pages
    #[serde(default)]
    pub total_pages: u32,
    /// Total number of elements across all pages
    #[serde(default)]
    pub total_elements: u64,
}

impl PageState {
    /// Create a page state without validation
    pub const fn new(current_page: u32, total_pages: u32, total_elements: u64) -> Self {
        Self {
            current_page,
            total_pages,
            total_elements,
        }
    }

    /// Create a page state, rejecting a current page outside the result
    pub fn try_new(current_page: u32, total_pages: u32, total_elements: u64) -> Result<Self> {
        let state = Self::new(current_page, total_pages, total_elements);
        state.validate()?;
        Ok(state)
    }

    /// Check the page-state invariants
    pub fn validate(&self) -> Result<()> {
        if self.total_pages == 0 && self.current_page != 0 {
            return Err(Error::invalid_page(format!(
                "current page {} with an empty result",
                self.current_page
            )));
        }
        if self.total_pages > 0 && self.current_page >= self.total_pages {
            return Err(Error::invalid_page(format!(
                "current page {} out of range for {} pages",
                self.current_page, self.total_pages
            )));
        }
        Ok(())
    }

    /// An empty result (no elements, no pages)
    pub const fn empty() -> Self {
        Self::new(0, 0, 0)
    }

    /// True when there are no elements to paginate
    pub fn is_empty(&self) -> bool {
        self.total_elements == 0
    }

    /// True when the current page is the first one
    pub fn is_first_page(&self) -> bool {
        self.current_page == 0
    }

    /// True when the current page is the last one, or there are no pages
    pub fn is_last_page(&self) -> bool {
        self.total_pages == 0 || self.current_page == self.total_pages - 1
    }

    /// Index of the previous page; `-1` on the first page
    pub fn previous_index(&self) -> i64 {
        i64::from(self.current_page) - 1
    }

    /// Index of the next page; may equal `total_pages` on the last page
    pub fn next_index(&self) -> i64 {
        i64::from(self.current_page) + 1
    }

    /// Index of the last page; `-1` when there are no pages
    pub fn last_index(&self) -> i64 {
        i64::from(self.total_pages) - 1
    }

    /// True when a previous page exists
    pub fn has_previous(&self) -> bool {
        self.previous_index() >= 0
    }

    /// True when a next page exists
    pub fn has_next(&self) -> bool {
        self.total_pages > 0 && self.next_index() < i64::from(self.total_pages)
    }
}

// ============================================================================
// Locale
// ============================================================================

/// A language tag such as `en`, `es_AR` or `pt-BR`
///
/// Tags are normalized to `language[_REGION]` with a lowercase language and an
/// uppercase region. The empty tag is the root locale.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Locale {
    tag: String,
}

impl Locale {
    /// Parse and normalize a language tag
    pub fn new(tag: &str) -> Self {
        let mut parts = tag.trim().split(['_', '-']).filter(|p| !p.is_empty());
        let tag = match (parts.next(), parts.next()) {
            (Some(lang), Some(region)) => {
                format!("{}_{}", lang.to_lowercase(), region.to_uppercase())
            }
            (Some(lang), None) => lang.to_lowercase(),
            _ => String::new(),
        };
        Self { tag }
    }

    /// The root locale (no language)
    pub fn root() -> Self {
        Self::default()
    }

    /// Normalized tag, empty for the root locale
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Language part of the tag
    pub fn language(&self) -> &str {
        self.tag.split('_').next().unwrap_or_default()
    }

    /// True for the root locale
    pub fn is_root(&self) -> bool {
        self.tag.is_empty()
    }

    /// Lookup order from most to least specific, ending with the root locale
    ///
    /// `es_AR` yields `["es_AR", "es", ""]`.
    pub fn fallback_chain(&self) -> Vec<&str> {
        let mut chain = Vec::with_capacity(3);
        if !self.tag.is_empty() {
            chain.push(self.tag.as_str());
            let language = self.language();
            if language != self.tag {
                chain.push(language);
            }
        }
        chain.push("");
        chain
    }
}

impl From<String> for Locale {
    fn from(tag: String) -> Self {
        Self::new(&tag)
    }
}

impl From<&str> for Locale {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl From<Locale> for String {
    fn from(locale: Locale) -> Self {
        locale.tag
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

// ============================================================================
// Message Arguments
// ============================================================================

/// Positional argument interpolated into a message template
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageArg {
    /// Text inserted verbatim
    Text(String),
    /// Integer (page numbers and indices)
    Int(i64),
}

impl fmt::Display for MessageArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageArg::Text(s) => f.write_str(s),
            MessageArg::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for MessageArg {
    fn from(s: &str) -> Self {
        MessageArg::Text(s.to_string())
    }
}

impl From<String> for MessageArg {
    fn from(s: String) -> Self {
        MessageArg::Text(s)
    }
}

impl From<i64> for MessageArg {
    fn from(n: i64) -> Self {
        MessageArg::Int(n)
    }
}

impl From<u32> for MessageArg {
    fn from(n: u32) -> Self {
        MessageArg::Int(i64::from(n))
    }
}

// ============================================================================
// Element Model
// ============================================================================

/// The markup element a pagination decorator is attached to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementTag {
    /// Complete element name (e.g. `ul`, `nav`, `div`)
    pub name: String,
    /// Attributes in document order
    pub attributes: Vec<(String, String)>,
}

impl ElementTag {
    /// Create an element without attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
        }
    }

    /// Add an attribute
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Look up an attribute value (attribute names are case-insensitive)
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}
