//! Markup assembly for the full pagination block

use super::services::RenderServices;
use super::types::{keys, LinkDescriptor, LinkState, NavKind, NavLink};
use crate::error::Result;
use crate::types::{Locale, MessageArg, PageState};
use crate::window::{PageWindow, WindowConfig, WindowSelection};
use tracing::debug;

/// Class used unless a `ul` element carries its own
pub const DEFAULT_CLASS: &str = "pagination";

/// Pick the class token for the pagination block
///
/// Only a list container (`ul`) may override the class; any other element,
/// or a `ul` with an empty class, gets [`DEFAULT_CLASS`].
pub fn resolve_class<'a>(element_name: &str, existing_class: Option<&'a str>) -> &'a str {
    match existing_class {
        Some(class) if element_name.eq_ignore_ascii_case("ul") && !class.is_empty() => class,
        _ => DEFAULT_CLASS,
    }
}

/// Renders one pagination block against a fixed bundle and locale
///
/// Holds no state between calls; build one per render.
pub struct PaginationRenderer<'a> {
    services: RenderServices<'a>,
    bundle: &'a str,
    locale: &'a Locale,
}

impl<'a> PaginationRenderer<'a> {
    /// Create a renderer for `bundle`, using the context's locale
    pub fn new(services: RenderServices<'a>, bundle: &'a str) -> Self {
        Self {
            services,
            bundle,
            locale: services.context.locale(),
        }
    }

    /// Render the full block: class, first, previous, links, next, last
    pub fn render(
        &self,
        page: &PageState,
        config: &WindowConfig,
        element_name: &str,
        existing_class: Option<&str>,
    ) -> Result<String> {
        let selection = WindowSelection::for_page(page, config);

        let first = self.render_nav(&self.nav_link(NavKind::First, page)?)?;
        let previous = self.render_nav(&self.nav_link(NavKind::Previous, page)?)?;
        let links = self.render_links(&self.link_descriptors(page, selection.window)?)?;
        let next = self.render_nav(&self.nav_link(NavKind::Next, page)?)?;
        let last = self.render_nav(&self.nav_link(NavKind::Last, page)?)?;
        let class = resolve_class(element_name, existing_class);

        debug!(
            bundle = self.bundle,
            locale = %self.locale,
            current_page = page.current_page,
            total_pages = page.total_pages,
            case = ?selection.case,
            first_index = selection.window.first_index,
            last_index = selection.window.last_index_exclusive,
            "rendering pagination"
        );

        self.message(
            keys::PAGINATION,
            &[
                class.into(),
                first.into(),
                previous.into(),
                links.into(),
                next.into(),
                last.into(),
            ],
        )
    }

    /// Describe a boundary link for a page state
    ///
    /// Active links carry their URL. Disabled first/last links need no URL,
    /// so none is built for them.
    pub fn nav_link(&self, kind: NavKind, page: &PageState) -> Result<NavLink> {
        let (target_index, enabled) = match kind {
            NavKind::First => (0, !page.is_first_page()),
            NavKind::Previous => (page.previous_index(), page.has_previous()),
            NavKind::Next => (page.next_index(), page.has_next()),
            NavKind::Last => (page.last_index(), !page.is_last_page()),
        };
        let state = if enabled {
            LinkState::Active {
                url: self.services.page_url(target_index)?,
            }
        } else {
            LinkState::Disabled
        };
        Ok(NavLink {
            kind,
            target_index,
            state,
        })
    }

    /// Describe every numbered link in the window
    pub fn link_descriptors(
        &self,
        page: &PageState,
        window: PageWindow,
    ) -> Result<Vec<LinkDescriptor>> {
        window
            .into_iter()
            .map(|index| {
                if index == page.current_page {
                    Ok(LinkDescriptor::current(index))
                } else {
                    let url = self.services.page_url(i64::from(index))?;
                    Ok(LinkDescriptor::active(index, url))
                }
            })
            .collect()
    }

    fn render_nav(&self, link: &NavLink) -> Result<String> {
        let key = link.key();
        let index = MessageArg::Int(link.target_index);
        match (&link.state, link.kind) {
            (LinkState::Active { url }, _) => self.message(key, &[url.as_str().into(), index]),
            // Disabled first/last take no arguments
            (_, NavKind::First | NavKind::Last) => self.message(key, &[]),
            // Disabled previous/next still interpolate the would-be target
            (_, NavKind::Previous | NavKind::Next) => {
                let url = self.services.page_url(link.target_index)?;
                self.message(key, &[url.into(), index])
            }
        }
    }

    fn render_links(&self, links: &[LinkDescriptor]) -> Result<String> {
        let mut out = String::new();
        for link in links {
            let page_number = MessageArg::from(link.page_number);
            let fragment = match &link.state {
                LinkState::Active { url } => self.message(
                    keys::LINK,
                    &[
                        url.as_str().into(),
                        page_number,
                        link.target_index.into(),
                    ],
                )?,
                LinkState::Current | LinkState::Disabled => {
                    self.message(keys::LINK_ACTIVE, &[page_number])?
                }
            };
            out.push_str(&fragment);
        }
        Ok(out)
    }

    fn message(&self, key: &str, params: &[MessageArg]) -> Result<String> {
        self.services
            .messages
            .resolve(self.bundle, key, self.locale, params)
    }
}
