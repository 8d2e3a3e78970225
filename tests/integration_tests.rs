//! End-to-end rendering tests
//!
//! Builds the decorator from configuration and renders against the built-in
//! and on-disk bundles: config → bundles → window → markup

use pretty_assertions::assert_eq;
use serde_json::json;
use solidafy_pager::{
    ElementTag, Error, MapContext, PageState, PagerConfig, PaginationDecorator,
};
use std::fs;
use tempfile::TempDir;

const FIRST_DISABLED: &str = r#"<li class="page-item disabled"><span class="page-link" aria-label="First">&laquo;</span></li>"#;
const PREVIOUS_DISABLED: &str = r#"<li class="page-item disabled"><span class="page-link" aria-label="Previous">&lsaquo;</span></li>"#;
const NEXT_DISABLED: &str = r#"<li class="page-item disabled"><span class="page-link" aria-label="Next">&rsaquo;</span></li>"#;
const LAST_DISABLED: &str = r#"<li class="page-item disabled"><span class="page-link" aria-label="Last">&raquo;</span></li>"#;

fn render(ctx: &MapContext) -> String {
    PagerConfig::default()
        .decorator()
        .unwrap()
        .decorate(&ElementTag::new("nav"), ctx)
        .unwrap()
}

fn numbered_links(markup: &str) -> Vec<String> {
    markup
        .split("<li")
        .filter(|item| item.contains(r#"class="page-link" href"#) && !item.contains("aria-label"))
        .filter_map(|item| {
            let text = item.rsplit("\">").next()?;
            Some(text.split('<').next()?.to_string())
        })
        .collect()
}

fn current_link(markup: &str) -> Option<String> {
    let start = markup.find(r#"aria-current="page"><span class="page-link">"#)?;
    let rest = &markup[start..];
    let text = rest.split("\">").nth(2)?;
    Some(text.split('<').next()?.to_string())
}

// ============================================================================
// Window Scenarios
// ============================================================================

#[test]
fn test_single_page_markup() {
    let ctx = MapContext::with_page(PageState::new(0, 1, 5));
    let expected = format!(
        "{}{}{}{}{}{}{}",
        r#"<nav aria-label="Pagination"><ul class="pagination">"#,
        FIRST_DISABLED,
        PREVIOUS_DISABLED,
        r#"<li class="page-item active" aria-current="page"><span class="page-link">1</span></li>"#,
        NEXT_DISABLED,
        LAST_DISABLED,
        "</ul></nav>",
    );
    assert_eq!(render(&ctx), expected);
}

#[test]
fn test_empty_result_markup() {
    let ctx = MapContext::with_page(PageState::empty());
    let expected = format!(
        "{}{}{}{}{}{}",
        r#"<nav aria-label="Pagination"><ul class="pagination">"#,
        FIRST_DISABLED,
        PREVIOUS_DISABLED,
        NEXT_DISABLED,
        LAST_DISABLED,
        "</ul></nav>",
    );
    assert_eq!(render(&ctx), expected);
}

#[test]
fn test_first_page_of_many() {
    let mut ctx = MapContext::with_page(PageState::new(0, 20, 200));
    ctx.set_request_uri("/orders");
    let html = render(&ctx);

    assert_eq!(current_link(&html).as_deref(), Some("1"));
    assert_eq!(numbered_links(&html), vec!["2", "3", "4", "5", "6", "7"]);
    assert!(html.contains(FIRST_DISABLED));
    assert!(html.contains(PREVIOUS_DISABLED));
    assert!(html.contains(r#"href="/orders?page=1" data-page="1" rel="next""#));
    assert!(html.contains(r#"href="/orders?page=19" data-page="19" aria-label="Last""#));
}

#[test]
fn test_middle_page_looks_back_one() {
    let mut ctx = MapContext::with_page(PageState::new(4, 20, 193));
    ctx.set_request_uri("/orders?sort=date");
    let html = render(&ctx);

    assert_eq!(current_link(&html).as_deref(), Some("5"));
    assert_eq!(numbered_links(&html), vec!["4", "6", "7", "8", "9", "10"]);
    assert!(html.contains(r#"href="/orders?sort=date&page=0" data-page="0" aria-label="First""#));
    assert!(html.contains(r#"href="/orders?sort=date&page=3" data-page="3" rel="prev""#));
    assert!(html.contains(r#"href="/orders?sort=date&page=3" data-page="3">4</a>"#));
}

#[test]
fn test_last_page_anchors_tail() {
    let ctx = MapContext::with_page(PageState::new(9, 10, 100));
    let html = render(&ctx);

    assert_eq!(current_link(&html).as_deref(), Some("10"));
    assert_eq!(numbered_links(&html), vec!["4", "5", "6", "7", "8", "9"]);
    assert!(html.contains(NEXT_DISABLED));
    assert!(html.contains(LAST_DISABLED));
}

#[test]
fn test_few_pages_show_all() {
    let ctx = MapContext::with_page(PageState::new(2, 5, 50));
    let html = render(&ctx);

    assert_eq!(current_link(&html).as_deref(), Some("3"));
    assert_eq!(numbered_links(&html), vec!["1", "2", "4", "5"]);
}

// ============================================================================
// Context Variables
// ============================================================================

#[test]
fn test_window_size_from_context() {
    let mut ctx = MapContext::with_page(PageState::new(10, 50, 500));
    ctx.set_var("paginationSplit", json!(3));
    let html = render(&ctx);

    assert_eq!(numbered_links(&html), vec!["10", "12"]);
    assert_eq!(current_link(&html).as_deref(), Some("11"));
}

#[test]
fn test_invalid_window_size_falls_back() {
    let mut ctx = MapContext::with_page(PageState::new(10, 50, 500));
    ctx.set_var("paginationSplit", json!("three"));
    let html = render(&ctx);

    assert_eq!(numbered_links(&html).len(), 6);
}

#[test]
fn test_page_from_json_variable() {
    let mut ctx = MapContext::new();
    ctx.set_vars(json!({
        "page": {"current_page": 1, "total_pages": 3, "total_elements": 25}
    }));
    let html = render(&ctx);

    assert_eq!(current_link(&html).as_deref(), Some("2"));
    assert_eq!(numbered_links(&html), vec!["1", "3"]);
}

#[test]
fn test_missing_page_is_an_error() {
    let decorator = PagerConfig::default().decorator().unwrap();
    let err = decorator
        .decorate(&ElementTag::new("nav"), &MapContext::new())
        .unwrap_err();
    assert!(matches!(err, Error::PageNotFound));
}

// ============================================================================
// Element Attributes
// ============================================================================

#[test]
fn test_list_element_keeps_its_class() {
    let decorator = PagerConfig::default().decorator().unwrap();
    let ctx = MapContext::with_page(PageState::new(0, 2, 20));

    let ul = ElementTag::new("ul").with_attribute("class", "pagination-sm");
    let div = ElementTag::new("div").with_attribute("class", "pagination-sm");

    assert!(decorator.decorate(&ul, &ctx).unwrap().contains(r#"<ul class="pagination-sm">"#));
    assert!(decorator.decorate(&div, &ctx).unwrap().contains(r#"<ul class="pagination">"#));
}

#[test]
fn test_unknown_resource_bundle() {
    let decorator = PagerConfig::default().decorator().unwrap();
    let ctx = MapContext::with_page(PageState::new(0, 2, 20));
    let tag = ElementTag::new("nav").with_attribute("sd:resource", "compact");

    let err = decorator.decorate(&tag, &ctx).unwrap_err();
    assert!(matches!(err, Error::BundleNotFound { ref bundle } if bundle == "compact"));
}

// ============================================================================
// Locales and Bundles
// ============================================================================

#[test]
fn test_spanish_labels_with_region_fallback() {
    let mut ctx = MapContext::with_page(PageState::new(1, 3, 30));
    ctx.set_locale("es_MX");
    let html = render(&ctx);

    assert!(html.contains(r#"aria-label="Paginación""#));
    assert!(html.contains(r#"aria-label="Anterior""#));
    assert!(html.contains(r#"aria-label="Siguiente""#));
    // Numbered links come from the root bundle
    assert_eq!(numbered_links(&html), vec!["1", "3"]);
}

#[test]
fn test_german_labels() {
    let mut ctx = MapContext::with_page(PageState::new(0, 3, 30));
    ctx.set_locale("de-DE");
    let html = render(&ctx);

    assert!(html.contains(r#"aria-label="Seitennavigation""#));
    assert!(html.contains(r#"aria-label="Weiter""#));
    assert!(html.contains(r#"aria-label="Erste""#));
}

#[test]
fn test_bundle_dir_from_config_file() {
    let dir = TempDir::new().unwrap();
    let bundles = dir.path().join("bundles");
    fs::create_dir(&bundles).unwrap();
    fs::write(
        bundles.join("compact.yaml"),
        r#"
pagination: '<ol class="{0}">{1}{2}{3}{4}{5}</ol>'
laquo: ''
laquo.link: ''
previous.page: '<li>prev</li>'
previous.page.link: '<li><a href="{0}">prev</a></li>'
link.active: '<li><b>{0}</b></li>'
link: '<li><a href="{0}">{1}</a></li>'
next.page: '<li>next</li>'
next.page.link: '<li><a href="{0}">next</a></li>'
raquo: ''
raquo.link: ''
"#,
    )
    .unwrap();

    let config_path = dir.path().join("pager.yaml");
    fs::write(
        &config_path,
        "default_bundle: compact\npage_param: p\npage_offset: 1\nbundle_dir: bundles\n",
    )
    .unwrap();

    let decorator = PagerConfig::from_file(&config_path)
        .unwrap()
        .decorator()
        .unwrap();
    let mut ctx = MapContext::with_page(PageState::new(1, 3, 30));
    ctx.set_request_uri("/feed?p=2");

    let html = decorator.decorate(&ElementTag::new("nav"), &ctx).unwrap();
    assert_eq!(
        html,
        concat!(
            r#"<ol class="pagination">"#,
            r#"<li><a href="/feed?p=1">prev</a></li>"#,
            r#"<li><a href="/feed?p=1">1</a></li>"#,
            r#"<li><b>2</b></li>"#,
            r#"<li><a href="/feed?p=3">3</a></li>"#,
            r#"<li><a href="/feed?p=3">next</a></li>"#,
            "</ol>",
        )
    );

    // The built-in bundle remains reachable through sd:resource
    let tag = ElementTag::new("nav").with_attribute("sd:resource", "custom-full");
    let html = decorator.decorate(&tag, &ctx).unwrap();
    assert!(html.starts_with(r#"<nav aria-label="Pagination">"#));
}

#[test]
fn test_config_rejects_incomplete_default_bundle() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("thin.yaml"), "laquo: ''\n").unwrap();

    let config = PagerConfig {
        default_bundle: "thin".to_string(),
        bundle_dir: Some(dir.path().to_path_buf()),
        ..PagerConfig::default()
    };
    let err = config.decorator().unwrap_err();
    assert!(err.is_missing_message());
}
