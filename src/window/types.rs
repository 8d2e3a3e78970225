//! Window types
//!
//! The computed window, the configuration that bounds it and the selection
//! summary handed to the renderer.

use super::calculator::select_window;
use crate::types::{JsonValue, PageState};
use serde::Serialize;
use std::num::NonZeroU32;
use std::ops::Range;

/// Number of numbered links shown when nothing else is configured
pub const DEFAULT_MAX_VISIBLE_LINKS: u32 = 7;

// ============================================================================
// Page Window
// ============================================================================

/// Half-open range `[first_index, last_index_exclusive)` of page indices
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    /// First page index rendered (0-based, inclusive)
    pub first_index: u32,
    /// One past the last page index rendered
    pub last_index_exclusive: u32,
}

impl PageWindow {
    /// Window with nothing to render
    pub const EMPTY: Self = Self {
        first_index: 0,
        last_index_exclusive: 0,
    };

    /// Create a window; an inverted range collapses to an empty one at `first`
    pub fn new(first_index: u32, last_index_exclusive: u32) -> Self {
        Self {
            first_index,
            last_index_exclusive: last_index_exclusive.max(first_index),
        }
    }

    /// Number of page indices in the window
    pub fn len(&self) -> u32 {
        self.last_index_exclusive - self.first_index
    }

    /// True when the window renders nothing
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check whether a page index falls inside the window
    pub fn contains(&self, index: u32) -> bool {
        self.indices().contains(&index)
    }

    /// Page indices in rendering order
    pub fn indices(&self) -> Range<u32> {
        self.first_index..self.last_index_exclusive
    }
}

impl IntoIterator for PageWindow {
    type Item = u32;
    type IntoIter = Range<u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices()
    }
}

/// Which rule produced a window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowCase {
    /// Nothing to paginate
    Empty,
    /// Every page fits in the window
    BelowThreshold,
    /// Current page is the first page
    Start,
    /// Window anchored to the last page
    End,
    /// One page of look-back, the rest look-ahead
    Middle,
}

// ============================================================================
// Window Config
// ============================================================================

/// Bounds the number of numbered links
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    /// Maximum number of numbered links shown at once
    pub max_visible_links: NonZeroU32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            max_visible_links: NonZeroU32::new(DEFAULT_MAX_VISIBLE_LINKS)
                .unwrap_or(NonZeroU32::MIN),
        }
    }
}

impl WindowConfig {
    /// Create a config; zero falls back to the default size
    pub fn new(max_visible_links: u32) -> Self {
        NonZeroU32::new(max_visible_links)
            .map(|max_visible_links| Self { max_visible_links })
            .unwrap_or_default()
    }

    /// Parse a window size from a context value, falling back to the default
    pub fn from_value(value: Option<&JsonValue>) -> Self {
        Self::from_value_or(value, Self::default())
    }

    /// Parse a window size from a context value, falling back to `fallback`
    ///
    /// Any integral JSON number is accepted (`5`, `5.0`). Absent values,
    /// non-numbers, fractions and sizes outside `1..=u32::MAX` give `fallback`.
    pub fn from_value_or(value: Option<&JsonValue>, fallback: Self) -> Self {
        value.and_then(Self::parse).unwrap_or(fallback)
    }

    /// Parse a window size, returning `None` when the value is unusable
    pub fn parse(value: &JsonValue) -> Option<Self> {
        parse_window_size(value).map(|max_visible_links| Self { max_visible_links })
    }

    /// Maximum visible links as a plain integer
    pub fn max_visible(&self) -> u32 {
        self.max_visible_links.get()
    }
}

/// Accept any integral representation of a positive window size
fn parse_window_size(value: &JsonValue) -> Option<NonZeroU32> {
    let JsonValue::Number(number) = value else {
        return None;
    };
    let size = if let Some(n) = number.as_u64() {
        n
    } else if let Some(f) = number.as_f64() {
        if f.fract() != 0.0 || f < 1.0 || f > f64::from(u32::MAX) {
            return None;
        }
        f as u64
    } else {
        return None;
    };
    u32::try_from(size).ok().and_then(NonZeroU32::new)
}

// ============================================================================
// Window Selection
// ============================================================================

/// Window plus the boundary flags of the page it was computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WindowSelection {
    /// Numbered-link range
    pub window: PageWindow,
    /// Rule that produced the window
    pub case: WindowCase,
    /// Current page is the first page
    pub is_first_page: bool,
    /// Current page is the last page (or there are no pages)
    pub is_last_page: bool,
    /// A previous page exists
    pub has_previous: bool,
    /// A next page exists
    pub has_next: bool,
}

impl WindowSelection {
    /// Select the window for a page state
    ///
    /// A result with no elements always gets the empty window, even if the
    /// page count claims otherwise.
    pub fn for_page(page: &PageState, config: &WindowConfig) -> Self {
        let (case, window) = if page.is_empty() {
            (WindowCase::Empty, PageWindow::EMPTY)
        } else {
            select_window(page.total_pages, page.current_page, config.max_visible())
        };

        Self {
            window,
            case,
            is_first_page: page.is_first_page(),
            is_last_page: page.is_last_page(),
            has_previous: page.has_previous(),
            has_next: page.has_next(),
        }
    }
}
