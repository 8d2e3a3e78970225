//! # Solidafy Pager
//!
//! Page-window selection and localized pagination markup for template
//! engines.
//!
//! Given an already-paginated result (current page, total pages, total
//! elements), the pager decides which numbered links to show and renders
//! first / previous / numbered / next / last links from message bundles.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use solidafy_pager::{ElementTag, MapContext, PageState, PagerConfig, PaginationDecorator};
//!
//! let decorator = PagerConfig::default().decorator()?;
//!
//! let mut ctx = MapContext::with_page(PageState::new(4, 20, 193));
//! ctx.set_locale("es").set_request_uri("/orders?sort=date");
//!
//! let html = decorator.decorate(&ElementTag::new("nav"), &ctx)?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │          PaginationDecorator::decorate(tag, ctx)            │
//! └────────────────────────────────────────────────────────────┘
//!                               │
//! ┌──────────────┬──────────────┴───────────┬─────────────────┐
//! │    Window    │           Render         │    Services     │
//! ├──────────────┼──────────────────────────┼─────────────────┤
//! │ Below thresh │ class token              │ MessageResolver │
//! │ Start        │ first / previous         │ UrlBuilder      │
//! │ End          │ numbered links           │ ContextAccessor │
//! │ Middle       │ next / last              │                 │
//! └──────────────┴──────────────────────────┴─────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the pager
pub mod error;

/// Common types and type aliases
pub mod types;

/// Page window selection
pub mod window;

/// Pagination markup rendering
pub mod render;

/// Message bundles and interpolation
pub mod messages;

/// JSON-backed rendering context
pub mod context;

/// Page URL construction
pub mod url_builder;

/// Pager configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::PagerConfig;
pub use context::MapContext;
pub use error::{Error, Result};
pub use messages::BundleResolver;
pub use render::{
    ContextAccessor, FullPaginationDecorator, MessageResolver, PaginationDecorator, UrlBuilder,
};
pub use types::*;
pub use url_builder::QueryUrlBuilder;
pub use window::{compute_window, PageWindow, WindowConfig, WindowSelection};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
