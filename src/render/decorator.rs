//! Pagination decorators
//!
//! A decorator is the entry point the host template engine calls once per
//! pagination element it meets while rendering.

use super::renderer::PaginationRenderer;
use super::services::{ContextAccessor, MessageResolver, RenderServices, UrlBuilder};
use crate::error::{Error, Result};
use crate::types::ElementTag;
use crate::window::WindowConfig;
use std::sync::Arc;
use tracing::warn;

/// Identifier of the full decorator
pub const DECORATOR_ID: &str = "custom-full";

/// Bundle used unless the element overrides it
pub const DEFAULT_BUNDLE: &str = "custom-full";

/// Element attribute naming an alternative bundle
pub const RESOURCE_ATTRIBUTE: &str = "sd:resource";

/// Context variable holding the window size
pub const WINDOW_SIZE_VARIABLE: &str = "paginationSplit";

/// Renders a pagination element into markup
pub trait PaginationDecorator: Send + Sync {
    /// Name the host uses to select this decorator
    fn identifier(&self) -> &str;

    /// Render the markup for `tag` in `ctx`
    fn decorate(&self, tag: &ElementTag, ctx: &dyn ContextAccessor) -> Result<String>;
}

/// First, previous, numbered, next and last links
///
/// The bundle override from `sd:resource` applies to a single call only, so
/// one instance can be shared across threads and requests.
#[derive(Clone)]
pub struct FullPaginationDecorator {
    messages: Arc<dyn MessageResolver>,
    urls: Arc<dyn UrlBuilder>,
    default_bundle: String,
    window_size_variable: String,
    default_window: WindowConfig,
}

impl std::fmt::Debug for FullPaginationDecorator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FullPaginationDecorator")
            .field("default_bundle", &self.default_bundle)
            .field("window_size_variable", &self.window_size_variable)
            .field("default_window", &self.default_window)
            .finish_non_exhaustive()
    }
}

impl FullPaginationDecorator {
    /// Create a decorator over the given collaborators
    pub fn new(messages: Arc<dyn MessageResolver>, urls: Arc<dyn UrlBuilder>) -> Self {
        Self {
            messages,
            urls,
            default_bundle: DEFAULT_BUNDLE.to_string(),
            window_size_variable: WINDOW_SIZE_VARIABLE.to_string(),
            default_window: WindowConfig::default(),
        }
    }

    /// Use a different default bundle
    pub fn with_default_bundle(mut self, bundle: impl Into<String>) -> Self {
        self.default_bundle = bundle.into();
        self
    }

    /// Read the window size from a different context variable
    pub fn with_window_size_variable(mut self, name: impl Into<String>) -> Self {
        self.window_size_variable = name.into();
        self
    }

    /// Window used when the context does not configure one
    pub fn with_default_window(mut self, window: WindowConfig) -> Self {
        self.default_window = window;
        self
    }

    /// Default bundle name
    pub fn default_bundle(&self) -> &str {
        &self.default_bundle
    }

    /// Window configuration for a render call
    pub fn window_config(&self, ctx: &dyn ContextAccessor) -> WindowConfig {
        let Some(value) = ctx.variable(&self.window_size_variable) else {
            return self.default_window;
        };
        WindowConfig::parse(value).unwrap_or_else(|| {
            warn!(
                variable = %self.window_size_variable,
                %value,
                default = self.default_window.max_visible(),
                "ignoring invalid window size"
            );
            self.default_window
        })
    }
}

impl PaginationDecorator for FullPaginationDecorator {
    fn identifier(&self) -> &str {
        DECORATOR_ID
    }

    fn decorate(&self, tag: &ElementTag, ctx: &dyn ContextAccessor) -> Result<String> {
        let bundle = tag
            .attribute(RESOURCE_ATTRIBUTE)
            .unwrap_or(&self.default_bundle);
        let page = ctx.page().ok_or(Error::PageNotFound)?;
        let config = self.window_config(ctx);

        let services = RenderServices::new(self.messages.as_ref(), self.urls.as_ref(), ctx);
        PaginationRenderer::new(services, bundle).render(
            &page,
            &config,
            &tag.name,
            tag.attribute("class"),
        )
    }
}
