//! Conversion of OpenAPI names into Rust identifiers.

use std::collections::HashSet;

use cruet::*;
use proc_macro2::{Ident, Span};

use crate::errors::GeneratorError;

/// Keywords that need a raw identifier.
const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "do", "break", "const", "continue", "dyn",
    "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

/// Keywords that cannot be raw identifiers.
const RESERVED: &[&str] = &["crate", "self", "super", "Self"];

/// Replaces every character that cannot appear in an identifier by `_`.
fn sanitize(name: &str) -> String {
    name.chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}

fn prefix_digit(name: String, prefix: &str) -> String {
    if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        format!("{prefix}{name}")
    } else {
        name
    }
}

/// `ListResponse_MessageAttemptEndpointOut_` → `ListResponseMessageAttemptEndpointOut`.
pub fn type_name(name: &str) -> String {
    let name = sanitize(name).to_pascal_case();
    prefix_digit(name, "Type")
}

/// `prevIterator` → `prev_iterator`, `event.types` → `event_types`.
pub fn field_name(name: &str) -> String {
    let name = sanitize(name).to_snake_case();
    let name = prefix_digit(name, "field_");
    if name.is_empty() {
        "value".to_string()
    } else {
        name
    }
}

/// Enumeration variant for a wire value: `message.created` → `MessageCreated`.
pub fn variant_name(value: &str) -> String {
    let name = sanitize(value).to_pascal_case();
    if name.is_empty() {
        "Empty".to_string()
    } else {
        prefix_digit(name, "Value")
    }
}

/// Claims `name` in `taken`, suffixed with `_2`, `_3`... when already used.
///
/// `appId` and `app_id` both become `app_id`; the second one is `app_id_2`.
pub fn claim_unique(name: String, taken: &mut HashSet<String>) -> String {
    let mut candidate = name.clone();
    let mut index = 2;
    while !taken.insert(candidate.clone()) {
        candidate = format!("{name}_{index}");
        index += 1;
    }
    candidate
}

/// Builds an identifier, raw for keywords.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidIdentifier`] when the name is not an identifier.
pub fn ident(name: &str) -> Result<Ident, GeneratorError> {
    if RESERVED.contains(&name) {
        return Ok(Ident::new(&format!("{name}_"), Span::call_site()));
    }
    let valid = name.starts_with(|ch: char| ch.is_ascii_alphabetic() || ch == '_')
        && name.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        && name != "_";
    if !valid {
        return Err(GeneratorError::InvalidIdentifier {
            name: name.to_string(),
        });
    }
    if KEYWORDS.contains(&name) {
        Ok(Ident::new_raw(name, Span::call_site()))
    } else {
        Ok(Ident::new(name, Span::call_site()))
    }
}

/// The wire name an identifier stands for, without `r#`.
pub fn unraw(ident: &Ident) -> String {
    let name = ident.to_string();
    name.strip_prefix("r#").map_or(name.clone(), str::to_string)
}
