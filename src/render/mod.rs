//! Pagination rendering
//!
//! Turns a page state into markup by asking a [`MessageResolver`] for one
//! localized fragment per link and concatenating them.
//!
//! # Overview
//!
//! The collaborators are traits so a host template engine can plug in its own
//! message bundles, URL scheme and variable store:
//!
//! - [`MessageResolver`] resolves `(bundle, key, locale, params)` to markup.
//! - [`UrlBuilder`] produces the href for a 0-based page index.
//! - [`ContextAccessor`] exposes the locale, variables and current page.
//!
//! [`FullPaginationDecorator`] is the `custom-full` decorator: first,
//! previous, numbered, next and last links.

mod decorator;
mod renderer;
mod services;
mod types;

pub use decorator::{
    FullPaginationDecorator, PaginationDecorator, DECORATOR_ID, DEFAULT_BUNDLE,
    RESOURCE_ATTRIBUTE, WINDOW_SIZE_VARIABLE,
};
pub use renderer::{resolve_class, PaginationRenderer, DEFAULT_CLASS};
pub use services::{ContextAccessor, MessageResolver, RenderServices, UrlBuilder};
pub use types::{keys, LinkDescriptor, LinkState, NavKind, NavLink, REQUIRED_KEYS};
