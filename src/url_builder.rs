//! Page URL construction
//!
//! Builds page links by rewriting the page query parameter of the current
//! request URI, keeping every other parameter (sort, filters, size) in place.

use crate::error::Result;
use crate::render::{ContextAccessor, UrlBuilder};
use url::form_urlencoded;

/// Default query parameter carrying the page index
pub const DEFAULT_PAGE_PARAM: &str = "page";

/// Rewrites the page query parameter of the request URI
#[derive(Debug, Clone)]
pub struct QueryUrlBuilder {
    /// Query parameter name for the page
    pub page_param: String,
    /// Added to the 0-based index before it is written (1 for 1-based URLs)
    pub page_offset: i64,
    /// Base URI used instead of the request URI
    pub base: Option<String>,
}

impl Default for QueryUrlBuilder {
    fn default() -> Self {
        Self {
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            page_offset: 0,
            base: None,
        }
    }
}

impl QueryUrlBuilder {
    /// Create a builder using the `page` parameter
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different page parameter name
    pub fn with_page_param(mut self, param: impl Into<String>) -> Self {
        self.page_param = param.into();
        self
    }

    /// Shift written page numbers (e.g. 1 for 1-based URLs)
    pub fn with_page_offset(mut self, offset: i64) -> Self {
        self.page_offset = offset;
        self
    }

    /// Use a fixed base URI instead of the request URI
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Rewrite `base` so its page parameter points at `page_index`
    pub fn page_url(&self, base: &str, page_index: i64) -> String {
        let (without_fragment, fragment) = match base.split_once('#') {
            Some((rest, fragment)) => (rest, Some(fragment)),
            None => (base, None),
        };
        let (path, query) = without_fragment
            .split_once('?')
            .unwrap_or((without_fragment, ""));

        let page_value = (page_index + self.page_offset).to_string();
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(
                form_urlencoded::parse(query.as_bytes()).filter(|(key, _)| key != &self.page_param),
            )
            .append_pair(&self.page_param, &page_value)
            .finish();

        let mut url = format!("{path}?{query}");
        if let Some(fragment) = fragment {
            url.push('#');
            url.push_str(fragment);
        }
        url
    }
}

impl UrlBuilder for QueryUrlBuilder {
    fn build_page_url(&self, ctx: &dyn ContextAccessor, page_index: i64) -> Result<String> {
        let base = self
            .base
            .as_deref()
            .or_else(|| ctx.request_uri())
            .unwrap_or_default();
        Ok(self.page_url(base, page_index))
    }
}
