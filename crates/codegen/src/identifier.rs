//! Schema names to Rust identifiers.

use std::collections::HashSet;
use std::sync::LazyLock;

use heck::{ToSnakeCase, ToUpperCamelCase};

/// Rust strict and reserved keywords (2024 edition), plus `_`.
pub static RUST_KEYWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "_", "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
        "move", "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super",
        "trait", "true", "type", "unsafe", "use", "where", "while", "abstract", "become", "box",
        "do", "final", "macro", "override", "priv", "try", "typeof", "unsized", "virtual",
        "yield",
    ]
    .into_iter()
    .collect()
});

/// Methods of the runtime's field handle, plus the parameter name composite
/// accessors take their nested selection under.
pub const RUNTIME_NAMES: &[&str] = &[
    "leaf",
    "composite",
    "fragments",
    "include",
    "typename",
    "is_recording",
    "on",
    "selection",
];

/// Prelude items generated code names unqualified.
pub const PRELUDE_TYPES: &[&str] = &["Option", "Some", "None", "Result", "Ok", "Err", "Vec", "Box"];

const DEFAULT_SUFFIX: &str = "_";

/// Maps raw schema names to Rust identifiers.
#[derive(Debug, Clone)]
pub struct IdentifierPolicy {
    reserved: HashSet<String>,
    suffix: String,
}

impl Default for IdentifierPolicy {
    fn default() -> Self {
        let reserved = RUST_KEYWORDS
            .iter()
            .copied()
            .chain(RUNTIME_NAMES.iter().copied())
            .chain(PRELUDE_TYPES.iter().copied())
            .map(str::to_string)
            .collect();
        IdentifierPolicy {
            reserved,
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

impl IdentifierPolicy {
    /// Adds words escaped on top of the defaults.
    pub fn with_reserved_words<I, W>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        self.reserved.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn is_reserved(&self, word: &str) -> bool {
        self.reserved.contains(word)
    }

    /// Type names keep their schema casing.
    pub fn to_type_identifier(&self, raw: &str) -> String {
        self.finish(raw.to_string(), "Unnamed")
    }

    /// `NEWHOPE` becomes `Newhope`, `NEW_HOPE` becomes `NewHope`.
    pub fn to_variant_identifier(&self, raw: &str) -> String {
        self.finish(raw.to_upper_camel_case(), "Unnamed")
    }

    /// `homePlanet` becomes `home_planet`, `type` becomes `type_`.
    pub fn to_field_identifier(&self, raw: &str) -> String {
        self.finish(raw.to_snake_case(), "unnamed")
    }

    fn finish(&self, mut ident: String, fallback: &str) -> String {
        if ident.is_empty() {
            return fallback.to_string();
        }
        if ident.starts_with(|c: char| c.is_ascii_digit()) {
            ident.insert(0, '_');
        }
        if self.is_reserved(&ident) {
            ident.push_str(&self.suffix);
        }
        ident
    }

    /// Disambiguates identifiers that share one scope.
    ///
    /// The first occurrence keeps its name; later ones get the suffix and an
    /// ordinal starting at 2, skipping ordinals already taken.
    pub fn unique<I>(&self, identifiers: I) -> Vec<String>
    where
        I: IntoIterator<Item = String>,
    {
        let identifiers: Vec<String> = identifiers.into_iter().collect();
        let mut taken: HashSet<String> = HashSet::with_capacity(identifiers.len());
        let mut result = Vec::with_capacity(identifiers.len());
        for ident in identifiers {
            let mut candidate = ident.clone();
            let mut ordinal = 2;
            while taken.contains(&candidate) {
                candidate = format!("{ident}{}{ordinal}", self.suffix);
                ordinal += 1;
            }
            taken.insert(candidate.clone());
            result.push(candidate);
        }
        result
    }
}
