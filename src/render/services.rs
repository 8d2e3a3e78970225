//! Collaborator traits consumed by the renderer

use crate::error::Result;
use crate::types::{JsonValue, Locale, MessageArg, PageState};

/// Resolves a localized message template and interpolates its arguments
pub trait MessageResolver: Send + Sync {
    /// Resolve `key` from `bundle` for `locale`, filling positional params
    fn resolve(
        &self,
        bundle: &str,
        key: &str,
        locale: &Locale,
        params: &[MessageArg],
    ) -> Result<String>;
}

/// Builds the link target for a 0-based page index
///
/// The index may fall outside the result (`-1` for the page before the
/// first) because disabled links still interpolate their would-be target.
pub trait UrlBuilder: Send + Sync {
    /// Build the URL for `page_index`
    fn build_page_url(&self, ctx: &dyn ContextAccessor, page_index: i64) -> Result<String>;
}

impl<F> UrlBuilder for F
where
    F: Fn(&dyn ContextAccessor, i64) -> Result<String> + Send + Sync,
{
    fn build_page_url(&self, ctx: &dyn ContextAccessor, page_index: i64) -> Result<String> {
        self(ctx, page_index)
    }
}

/// Read-only view of the rendering context
pub trait ContextAccessor: Send + Sync {
    /// Locale to render messages in
    fn locale(&self) -> &Locale;

    /// Look up a context variable by name
    fn variable(&self, name: &str) -> Option<&JsonValue>;

    /// The paginated result being rendered, if any
    fn page(&self) -> Option<PageState>;

    /// URI of the current request, used as the base for page links
    fn request_uri(&self) -> Option<&str> {
        None
    }
}

/// Borrowed set of collaborators for one render call
#[derive(Clone, Copy)]
pub struct RenderServices<'a> {
    /// Message lookup
    pub messages: &'a dyn MessageResolver,
    /// Page URL construction
    pub urls: &'a dyn UrlBuilder,
    /// Rendering context
    pub context: &'a dyn ContextAccessor,
}

impl<'a> RenderServices<'a> {
    /// Bundle the collaborators for a render call
    pub fn new(
        messages: &'a dyn MessageResolver,
        urls: &'a dyn UrlBuilder,
        context: &'a dyn ContextAccessor,
    ) -> Self {
        Self {
            messages,
            urls,
            context,
        }
    }

    /// Build the URL for a page index using the current context
    pub fn page_url(&self, page_index: i64) -> Result<String> {
        self.urls.build_page_url(self.context, page_index)
    }
}
