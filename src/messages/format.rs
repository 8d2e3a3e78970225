//! Positional message interpolation
//!
//! Handles `{0}`, `{1}`, ... placeholders in message templates. A doubled
//! single quote (`''`) renders as one quote.

use crate::types::MessageArg;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Regex for matching placeholders `{N}` and escaped quotes `''`
static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"''|\{\s*(\d+)\s*\}").expect("placeholder regex is valid"));

/// Interpolate positional arguments into a message template
///
/// Placeholders without a matching argument are left as-is.
pub fn format_message(template: &str, args: &[MessageArg]) -> String {
    PLACEHOLDER_REGEX
        .replace_all(template, |cap: &Captures<'_>| {
            let Some(index) = cap.get(1) else {
                return "'".to_string();
            };
            index
                .as_str()
                .parse::<usize>()
                .ok()
                .and_then(|i| args.get(i))
                .map_or_else(|| cap[0].to_string(), ToString::to_string)
        })
        .into_owned()
}

/// Extract the placeholder indices used by a template, in order of appearance
pub fn placeholders(template: &str) -> Vec<usize> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .filter_map(|cap| cap.get(1))
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}
