//! Rendering context backed by JSON variables
//!
//! A standalone [`ContextAccessor`] for hosts that do not bring their own
//! variable store. Supports nested access like `paging.split` and
//! `request.params.sort`.

use crate::render::ContextAccessor;
use crate::types::{JsonObject, JsonValue, Locale, PageState};

/// Variable searched for the paginated result when none was set explicitly
pub const PAGE_VARIABLE: &str = "page";

/// Context for one render call
#[derive(Debug, Clone, Default)]
pub struct MapContext {
    /// Locale for message lookup
    pub locale: Locale,
    /// Template variables (a JSON object)
    pub vars: JsonValue,
    /// Paginated result being rendered
    pub page: Option<PageState>,
    /// URI of the current request
    pub request_uri: Option<String>,
}

impl MapContext {
    /// Create a new empty context
    pub fn new() -> Self {
        Self::default()
    }

    /// Create context with a page already attached
    pub fn with_page(page: PageState) -> Self {
        Self {
            page: Some(page),
            ..Default::default()
        }
    }

    /// Set the locale
    pub fn set_locale(&mut self, locale: impl Into<Locale>) -> &mut Self {
        self.locale = locale.into();
        self
    }

    /// Replace all variables
    pub fn set_vars(&mut self, vars: JsonValue) -> &mut Self {
        self.vars = vars;
        self
    }

    /// Set a single top-level variable
    pub fn set_var(&mut self, name: impl Into<String>, value: JsonValue) -> &mut Self {
        if !self.vars.is_object() {
            self.vars = JsonValue::Object(JsonObject::new());
        }
        if let JsonValue::Object(map) = &mut self.vars {
            map.insert(name.into(), value);
        }
        self
    }

    /// Attach the paginated result
    pub fn set_page(&mut self, page: PageState) -> &mut Self {
        self.page = Some(page);
        self
    }

    /// Set the request URI used as the base for page links
    pub fn set_request_uri(&mut self, uri: impl Into<String>) -> &mut Self {
        self.request_uri = Some(uri.into());
        self
    }

    /// Get a value by dotted path (e.g., "request.params.sort")
    pub fn get(&self, path: &str) -> Option<&JsonValue> {
        if path.is_empty() {
            return None;
        }
        let parts: Vec<&str> = path.split('.').collect();
        get_nested_value(&self.vars, &parts)
    }

    /// Page state stored as a JSON variable, if it has the expected shape
    fn page_from_vars(&self) -> Option<PageState> {
        let value = self.get(PAGE_VARIABLE)?;
        if !value.get("total_pages").is_some_and(JsonValue::is_u64) {
            return None;
        }
        serde_json::from_value(value.clone()).ok()
    }
}

impl ContextAccessor for MapContext {
    fn locale(&self) -> &Locale {
        &self.locale
    }

    fn variable(&self, name: &str) -> Option<&JsonValue> {
        self.get(name)
    }

    fn page(&self) -> Option<PageState> {
        self.page.or_else(|| self.page_from_vars())
    }

    fn request_uri(&self) -> Option<&str> {
        self.request_uri.as_deref()
    }
}

/// Get a nested value from a JSON value by path
fn get_nested_value<'a>(value: &'a JsonValue, path: &[&str]) -> Option<&'a JsonValue> {
    let mut current = value;
    for part in path {
        match current {
            JsonValue::Object(map) => {
                current = map.get(*part)?;
            }
            _ => return None,
        }
    }
    Some(current)
}
