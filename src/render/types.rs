//! Link descriptors and message keys

use serde::Serialize;

/// Message keys the `custom-full` decorator resolves
pub mod keys {
    /// Whole pagination block: class, first, previous, links, next, last
    pub const PAGINATION: &str = "pagination";
    /// Disabled first-page link
    pub const FIRST: &str = "laquo";
    /// First-page link: url, index
    pub const FIRST_LINK: &str = "laquo.link";
    /// Disabled last-page link
    pub const LAST: &str = "raquo";
    /// Last-page link: url, index
    pub const LAST_LINK: &str = "raquo.link";
    /// Disabled previous-page link: url, index
    pub const PREVIOUS: &str = "previous.page";
    /// Previous-page link: url, index
    pub const PREVIOUS_LINK: &str = "previous.page.link";
    /// Disabled next-page link: url, index
    pub const NEXT: &str = "next.page";
    /// Next-page link: url, index
    pub const NEXT_LINK: &str = "next.page.link";
    /// Current page: page number
    pub const LINK_ACTIVE: &str = "link.active";
    /// Numbered link: url, page number, index
    pub const LINK: &str = "link";
}

/// Every key a bundle must provide for the `custom-full` decorator
pub const REQUIRED_KEYS: &[&str] = &[
    keys::PAGINATION,
    keys::FIRST,
    keys::FIRST_LINK,
    keys::LAST,
    keys::LAST_LINK,
    keys::PREVIOUS,
    keys::PREVIOUS_LINK,
    keys::NEXT,
    keys::NEXT_LINK,
    keys::LINK_ACTIVE,
    keys::LINK,
];

/// How a single link is rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LinkState {
    /// Rendered but not clickable
    Disabled,
    /// Clickable link to `url`
    Active {
        /// Link target
        url: String,
    },
    /// The page being displayed
    Current,
}

impl LinkState {
    /// Link target, present only for active links
    pub fn url(&self) -> Option<&str> {
        match self {
            LinkState::Active { url } => Some(url),
            LinkState::Disabled | LinkState::Current => None,
        }
    }
}

/// One numbered link in the window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkDescriptor {
    /// Displayed page number (1-based)
    pub page_number: u32,
    /// Target page index (0-based)
    pub target_index: u32,
    /// Render state
    #[serde(flatten)]
    pub state: LinkState,
}

impl LinkDescriptor {
    /// Descriptor for the page being displayed
    pub fn current(index: u32) -> Self {
        Self {
            page_number: index + 1,
            target_index: index,
            state: LinkState::Current,
        }
    }

    /// Descriptor for a linkable page
    pub fn active(index: u32, url: impl Into<String>) -> Self {
        Self {
            page_number: index + 1,
            target_index: index,
            state: LinkState::Active { url: url.into() },
        }
    }

    /// True for the page being displayed
    pub fn is_current(&self) -> bool {
        matches!(self.state, LinkState::Current)
    }
}

/// Boundary navigation links
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavKind {
    /// First page (`laquo`)
    First,
    /// Previous page
    Previous,
    /// Next page
    Next,
    /// Last page (`raquo`)
    Last,
}

impl NavKind {
    /// Message keys for the disabled and active variants
    pub fn keys(self) -> (&'static str, &'static str) {
        match self {
            NavKind::First => (keys::FIRST, keys::FIRST_LINK),
            NavKind::Previous => (keys::PREVIOUS, keys::PREVIOUS_LINK),
            NavKind::Next => (keys::NEXT, keys::NEXT_LINK),
            NavKind::Last => (keys::LAST, keys::LAST_LINK),
        }
    }
}

/// A first/previous/next/last link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Which boundary link this is
    pub kind: NavKind,
    /// Would-be target index; may be `-1` or `total_pages`
    pub target_index: i64,
    /// Disabled or active
    #[serde(flatten)]
    pub state: LinkState,
}

impl NavLink {
    /// True when the link can be followed
    pub fn is_enabled(&self) -> bool {
        matches!(self.state, LinkState::Active { .. })
    }

    /// Message key for the link's current state
    pub fn key(&self) -> &'static str {
        let (disabled, active) = self.kind.keys();
        if self.is_enabled() {
            active
        } else {
            disabled
        }
    }
}
