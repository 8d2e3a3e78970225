//! Built-in message bundles embedded in the binary
//!
//! This module embeds the bundle YAML files shipped in `bundles/`, so the
//! default decorator renders without any bundle directory on disk.

/// An embedded bundle file
#[derive(Debug, Clone, Copy)]
pub struct BuiltinBundle {
    /// Bundle name
    pub name: &'static str,
    /// Locale tag, empty for the root bundle
    pub locale: &'static str,
    /// YAML source
    pub yaml: &'static str,
}

/// Built-in bundle YAML definitions
pub static BUILTIN_BUNDLES: &[BuiltinBundle] = &[
    BuiltinBundle {
        name: "custom-full",
        locale: "",
        yaml: include_str!("../../bundles/custom-full.yaml"),
    },
    BuiltinBundle {
        name: "custom-full",
        locale: "es",
        yaml: include_str!("../../bundles/custom-full_es.yaml"),
    },
    BuiltinBundle {
        name: "custom-full",
        locale: "de",
        yaml: include_str!("../../bundles/custom-full_de.yaml"),
    },
];

/// Get a built-in bundle by name and exact locale tag
pub fn get_builtin(name: &str, locale: &str) -> Option<&'static str> {
    BUILTIN_BUNDLES
        .iter()
        .find(|b| b.name == name && b.locale == locale)
        .map(|b| b.yaml)
}

/// List built-in bundle names (deduplicated)
pub fn list_builtin() -> Vec<&'static str> {
    let mut names: Vec<&'static str> = BUILTIN_BUNDLES.iter().map(|b| b.name).collect();
    names.sort_unstable();
    names.dedup();
    names
}
