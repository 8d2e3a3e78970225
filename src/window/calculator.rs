//! Window selection arithmetic

use super::types::{PageWindow, WindowCase, DEFAULT_MAX_VISIBLE_LINKS};
use tracing::trace;

/// Compute the window of page indices to render
///
/// A `max_visible` of zero is treated as the default window size.
pub fn compute_window(total_pages: u32, current_page: u32, max_visible: u32) -> PageWindow {
    select_window(total_pages, current_page, max_visible).1
}

/// Compute the window and report which case produced it
pub fn select_window(
    total_pages: u32,
    current_page: u32,
    max_visible: u32,
) -> (WindowCase, PageWindow) {
    if total_pages == 0 {
        return (WindowCase::Empty, PageWindow::EMPTY);
    }

    let max_visible = if max_visible == 0 {
        DEFAULT_MAX_VISIBLE_LINKS
    } else {
        max_visible
    };
    let current_page = current_page.min(total_pages - 1);

    let (case, first, last) = if total_pages <= max_visible {
        (WindowCase::BelowThreshold, 0, total_pages)
    } else if current_page == 0 {
        (WindowCase::Start, 0, max_visible)
    } else if total_pages - current_page < max_visible {
        (WindowCase::End, total_pages - max_visible, total_pages)
    } else {
        (
            WindowCase::Middle,
            current_page - 1,
            (current_page - 1).saturating_add(max_visible),
        )
    };

    // Clamp to [0, total_pages]
    let last = last.min(total_pages);
    let first = first.min(last);
    debug_assert!(first <= last && last <= total_pages);
    debug_assert!(last - first <= max_visible);

    trace!(
        total_pages,
        current_page,
        max_visible,
        ?case,
        first,
        last,
        "selected page window"
    );

    (case, PageWindow::new(first, last))
}
