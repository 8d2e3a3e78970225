//! Page window module
//!
//! Decides which contiguous range of page indices is rendered as numbered
//! links, given the total page count, the current page and the maximum number
//! of visible links.
//!
//! # Overview
//!
//! Four cases are checked in order and the first match wins:
//!
//! | Case            | Condition                          | Window                              |
//! |-----------------|------------------------------------|-------------------------------------|
//! | Below threshold | `total <= max`                     | `[0, total)`                        |
//! | Start           | `current == 0`                     | `[0, max)`                          |
//! | End             | `total - current < max`            | `[total - max, total)`              |
//! | Middle          | otherwise                          | `[current - 1, current + max - 1)`  |

mod calculator;
mod types;

pub use calculator::{compute_window, select_window};
pub use types::{PageWindow, WindowCase, WindowConfig, WindowSelection, DEFAULT_MAX_VISIBLE_LINKS};
