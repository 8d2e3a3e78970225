//! Message bundles
//!
//! Localized markup fragments keyed by bundle name, locale and message key.
//!
//! # Overview
//!
//! - [`format_message`] interpolates `{N}` positional placeholders.
//! - [`MessageBundle`] is one flat key -> template map loaded from YAML.
//! - [`BundleResolver`] holds bundles for several names and locales and
//!   implements [`MessageResolver`](crate::render::MessageResolver) with
//!   per-key locale fallback (`es_AR` -> `es` -> root).
//! - Built-in bundles are embedded in the binary; files in a bundle directory
//!   override them.

mod builtin;
mod bundle;
mod format;

pub use builtin::{get_builtin, list_builtin, BuiltinBundle, BUILTIN_BUNDLES};
pub use bundle::{parse_bundle_file_name, BundleResolver, MessageBundle};
pub use format::{format_message, placeholders};
