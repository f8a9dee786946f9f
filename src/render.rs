//! Substitution Engine - Single-Pass Token Replacement
//!
//! Each asset is scanned exactly once; replacement text is never
//! rescanned, so user values containing `{{...}}` stay literal. Tokens
//! no schema field derives are left verbatim for legacy templates.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::cards::CardRegistry;
use crate::data::CustomData;
use crate::templates::{FieldType, Template};
use crate::tokens::{field_token, TOKEN_RE};

/// Which asset a source string belongs to. HTML gets entity escaping;
/// stylesheets and scripts receive values raw, which is what keeps
/// validated hex colors intact in CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderContext {
    Html,
    Css,
    Js,
}

/// The three rendered sources of a site, ready to preview or package.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedAssets {
    pub html: String,
    pub css: String,
    pub js: String,
}

/// Escape text for an HTML context. Exactly `&`, `<`, `>` and `"`;
/// shipped templates only interpolate into element text and
/// double-quoted attributes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Resolve a scalar: the supplied value when non-blank after trimming,
/// else the declared default, else empty.
pub(crate) fn resolve_scalar(raw: Option<&str>, default: Option<&str>) -> String {
    match raw {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => default.unwrap_or("").to_string(),
    }
}

enum Binding {
    /// Plain value, escaped per context at substitution time.
    Text(String),
    /// Pre-escaped markup from a card renderer, inserted as-is.
    Markup(String),
}

/// Build the token table for one template and payload. Array fields
/// without a registered renderer get no binding, leaving their token
/// verbatim, so a missing registration is visible in the output rather
/// than silently deleting a section.
fn bindings(
    template: &Template,
    data: &CustomData,
    cards: &CardRegistry,
) -> HashMap<String, Binding> {
    let mut map = HashMap::new();

    for (key, spec) in &template.fields {
        match spec.field_type {
            FieldType::Array => {
                let Some(renderer) = cards.get(key) else { continue };
                let entries = data.list(key).unwrap_or(&[]);
                let markup = entries
                    .iter()
                    .map(|entry| renderer.render(entry))
                    .collect::<Vec<_>>()
                    .join("\n");
                map.insert(field_token(key, spec.field_type), Binding::Markup(markup));
            }
            FieldType::Object => {
                let Some(subs) = spec.fields.as_ref() else { continue };
                let members = data.group(key);
                for (sub, subspec) in subs {
                    let raw = members.and_then(|m| m.get(sub)).map(String::as_str);
                    let value = resolve_scalar(raw, subspec.default_value());
                    map.insert(field_token(sub, subspec.kind()), Binding::Text(value));
                }
            }
            _ => {
                let value = resolve_scalar(data.scalar(key), spec.default.as_deref());
                map.insert(field_token(key, spec.field_type), Binding::Text(value));
            }
        }
    }

    map
}

fn substitute(source: &str, context: RenderContext, bindings: &HashMap<String, Binding>) -> String {
    TOKEN_RE
        .replace_all(source, |caps: &regex::Captures| -> String {
            match bindings.get(&caps[1]) {
                Some(Binding::Text(value)) => match context {
                    RenderContext::Html => escape_html(value),
                    RenderContext::Css | RenderContext::Js => value.clone(),
                },
                Some(Binding::Markup(fragment)) => fragment.clone(),
                // Unknown token: leave the marker untouched.
                None => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Render all three assets of a template against a payload.
///
/// Pure: identical inputs produce byte-identical output.
pub fn render_assets(template: &Template, data: &CustomData, cards: &CardRegistry) -> RenderedAssets {
    let bindings = bindings(template, data, cards);
    RenderedAssets {
        html: substitute(&template.html_content, RenderContext::Html, &bindings),
        css: substitute(&template.css_content, RenderContext::Css, &bindings),
        js: substitute(&template.js_content, RenderContext::Js, &bindings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template(html: &str, css: &str, js: &str, fields: serde_json::Value) -> Template {
        serde_json::from_value(json!({
            "id": "t-1",
            "name": "Test",
            "industry": "test",
            "description": "Test template",
            "htmlContent": html,
            "cssContent": css,
            "jsContent": js,
            "fields": fields
        }))
        .unwrap()
    }

    fn data(value: serde_json::Value) -> CustomData {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn escape_html_covers_exactly_four_entities() {
        assert_eq!(escape_html("A & B <Co>"), "A &amp; B &lt;Co&gt;");
        assert_eq!(escape_html("say \"hi\""), "say &quot;hi&quot;");
        assert_eq!(escape_html("it's fine"), "it's fine");
    }

    #[test]
    fn html_is_escaped_css_is_not() {
        let template = template(
            "<h1>{{BUSINESS_NAME}}</h1>",
            ".logo { color: {{PRIMARY_COLOR}}; content: \"{{BUSINESS_NAME}}\"; }",
            "",
            json!({
                "businessName": {"type": "text", "label": "Business Name"},
                "primaryColor": {"type": "color", "label": "Primary Color"}
            }),
        );
        let assets = render_assets(
            &template,
            &data(json!({"businessName": "A & B <Co>", "primaryColor": "#e91e63"})),
            &CardRegistry::with_builtins(),
        );

        assert_eq!(assets.html, "<h1>A &amp; B &lt;Co&gt;</h1>");
        assert!(assets.css.contains("color: #e91e63;"));
        assert!(assets.css.contains("content: \"A & B <Co>\";"));
    }

    #[test]
    fn blank_values_fall_back_to_defaults() {
        let template = template(
            "",
            "a { color: {{PRIMARY_COLOR}}; } b { color: {{SECONDARY_COLOR}}; }",
            "",
            json!({
                "primaryColor": {"type": "color", "label": "Primary", "default": "#e91e63"},
                "secondaryColor": {"type": "color", "label": "Secondary"}
            }),
        );
        let assets = render_assets(
            &template,
            &data(json!({"primaryColor": "  "})),
            &CardRegistry::with_builtins(),
        );

        assert!(assets.css.contains("a { color: #e91e63; }"));
        assert!(assets.css.contains("b { color: ; }"));
    }

    #[test]
    fn object_members_substitute_independently() {
        let template = template(
            "<a href=\"{{FACEBOOK_URL}}\">f</a><a href=\"{{TWITTER_URL}}\">t</a>",
            "",
            "",
            json!({
                "socialMedia": {
                    "type": "object",
                    "label": "Social Media",
                    "fields": {"facebook": "url", "twitter": "url"}
                }
            }),
        );
        let assets = render_assets(
            &template,
            &data(json!({"socialMedia": {"facebook": "https://facebook.com/glow"}})),
            &CardRegistry::with_builtins(),
        );

        assert!(assets.html.contains("href=\"https://facebook.com/glow\""));
        assert!(assets.html.contains("href=\"\">t</a>"));
    }

    #[test]
    fn unknown_tokens_are_left_verbatim() {
        let template = template(
            "{{BUSINESS_NAME}} {{LEGACY_SLOT}}",
            "",
            "",
            json!({"businessName": {"type": "text", "label": "Business Name"}}),
        );
        let assets = render_assets(
            &template,
            &data(json!({"businessName": "Glow"})),
            &CardRegistry::with_builtins(),
        );

        assert_eq!(assets.html, "Glow {{LEGACY_SLOT}}");
    }

    #[test]
    fn substituted_values_are_not_rescanned() {
        let template = template(
            "{{BUSINESS_NAME}} | {{EMAIL}}",
            "",
            "",
            json!({
                "businessName": {"type": "text", "label": "Business Name"},
                "email": {"type": "email", "label": "Email"}
            }),
        );
        let assets = render_assets(
            &template,
            &data(json!({"businessName": "{{EMAIL}}", "email": "hello@glow.example"})),
            &CardRegistry::with_builtins(),
        );

        assert_eq!(assets.html, "{{EMAIL}} | hello@glow.example");
    }

    #[test]
    fn array_without_renderer_keeps_its_token() {
        let template = template(
            "<div>{{TESTIMONIALS}}</div>",
            "",
            "",
            json!({
                "testimonials": {
                    "type": "array",
                    "label": "Testimonials",
                    "fields": {"name": "text"}
                }
            }),
        );
        let assets = render_assets(
            &template,
            &data(json!({"testimonials": [{"name": "Ada"}]})),
            &CardRegistry::with_builtins(),
        );

        assert_eq!(assets.html, "<div>{{TESTIMONIALS}}</div>");
    }

    #[test]
    fn empty_array_renders_empty_block() {
        let template = template(
            "<div class=\"products-grid\">{{PRODUCTS}}</div>",
            "",
            "",
            json!({
                "products": {
                    "type": "array",
                    "label": "Products",
                    "fields": {"name": "text", "description": "textarea"}
                }
            }),
        );
        let assets = render_assets(
            &template,
            &data(json!({"products": []})),
            &CardRegistry::with_builtins(),
        );

        assert_eq!(assets.html, "<div class=\"products-grid\"></div>");
    }

    #[test]
    fn array_entries_expand_in_order() {
        let template = template(
            "{{SERVICES}}",
            "",
            "",
            json!({
                "services": {
                    "type": "array",
                    "label": "Services",
                    "fields": {"name": "text", "description": "textarea"}
                }
            }),
        );
        let assets = render_assets(
            &template,
            &data(json!({"services": [
                {"name": "First", "description": "a"},
                {"name": "Second", "description": "b"}
            ]})),
            &CardRegistry::with_builtins(),
        );

        let first = assets.html.find("First").unwrap();
        let second = assets.html.find("Second").unwrap();
        assert!(first < second);
        assert_eq!(assets.html.matches("service-item").count(), 2);
    }
}
