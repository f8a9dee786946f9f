//! Token Naming - Field Keys to Placeholder Tokens
//!
//! Every `{{TOKEN}}` a template may carry is derived from its field
//! schema. The derivation is fixed: change it and every shipped
//! template breaks.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::templates::FieldType;

/// Matches `{{TOKEN}}` markers. Token names are upper snake case and
/// matching is case-sensitive.
pub static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([A-Z][A-Z0-9_]*)\}\}").expect("token pattern"));

/// Upper-snake-case a camelCase field key: `businessName` -> `BUSINESS_NAME`.
pub fn upper_snake(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    let mut prev_breakable = false;
    for ch in key.chars() {
        if ch == '-' || ch == '_' || ch == ' ' {
            if !out.is_empty() && !out.ends_with('_') {
                out.push('_');
            }
            prev_breakable = false;
        } else if ch.is_ascii_uppercase() {
            if prev_breakable {
                out.push('_');
            }
            out.push(ch);
            prev_breakable = false;
        } else {
            out.push(ch.to_ascii_uppercase());
            prev_breakable = ch.is_ascii_lowercase() || ch.is_ascii_digit();
        }
    }
    out
}

/// Derive the placeholder token for a field or subfield key.
///
/// Image- and url-typed keys carry a `_URL` suffix so the markup reads
/// honestly: `logo` -> `LOGO_URL`, `heroImage` -> `HERO_IMAGE_URL`,
/// `facebook` (url) -> `FACEBOOK_URL`. Keys already ending in `_URL`
/// are left alone. Array fields use the bare key: `products` -> `PRODUCTS`.
pub fn field_token(key: &str, kind: FieldType) -> String {
    let base = upper_snake(key);
    match kind {
        FieldType::Image | FieldType::Url => {
            if base == "URL" || base.ends_with("_URL") {
                base
            } else {
                format!("{}_URL", base)
            }
        }
        _ => base,
    }
}
