//! Card Renderers - Array Fields to Markup Fragments
//!
//! Each array field expands through a renderer registered under the
//! field key. New industries add renderers without touching existing
//! ones. Fragments escape their own values; the substitution engine
//! inserts them as-is.

use std::collections::BTreeMap;
use std::collections::HashMap;

use crate::render::escape_html;

/// Renders one array entry to an HTML fragment.
pub trait CardRenderer: Send + Sync {
    fn render(&self, entry: &BTreeMap<String, String>) -> String;
}

fn value<'a>(entry: &'a BTreeMap<String, String>, key: &str) -> &'a str {
    entry.get(key).map(String::as_str).unwrap_or("").trim()
}

/// Product card: image, name, description, price. The image and price
/// lines are omitted when blank.
pub struct ProductCard;

impl CardRenderer for ProductCard {
    fn render(&self, entry: &BTreeMap<String, String>) -> String {
        let name = escape_html(value(entry, "name"));
        let description = escape_html(value(entry, "description"));
        let price = value(entry, "price");
        let image = value(entry, "image");

        let mut card = String::from("<div class=\"product-item\">\n");
        if !image.is_empty() {
            card.push_str(&format!(
                "    <img src=\"{}\" alt=\"{}\" class=\"product-image\">\n",
                escape_html(image),
                name
            ));
        }
        card.push_str(&format!("    <h3 class=\"product-name\">{}</h3>\n", name));
        card.push_str(&format!(
            "    <p class=\"product-description\">{}</p>\n",
            description
        ));
        if !price.is_empty() {
            card.push_str(&format!(
                "    <div class=\"product-price\">{}</div>\n",
                escape_html(price)
            ));
        }
        card.push_str("</div>");
        card
    }
}

/// Service card: name and description only.
pub struct ServiceCard;

impl CardRenderer for ServiceCard {
    fn render(&self, entry: &BTreeMap<String, String>) -> String {
        format!(
            "<div class=\"service-item\">\n    <h3 class=\"service-name\">{}</h3>\n    <p class=\"service-description\">{}</p>\n</div>",
            escape_html(value(entry, "name")),
            escape_html(value(entry, "description"))
        )
    }
}

/// Card registry - renderers keyed by array field key
pub struct CardRegistry {
    renderers: HashMap<String, Box<dyn CardRenderer>>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self { renderers: HashMap::new() }
    }

    /// Registry with the shipped renderers: `products` and `services`.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register("products", Box::new(ProductCard));
        registry.register("services", Box::new(ServiceCard));
        registry
    }

    pub fn register(&mut self, field: impl Into<String>, renderer: Box<dyn CardRenderer>) {
        self.renderers.insert(field.into(), renderer);
    }

    pub fn get(&self, field: &str) -> Option<&dyn CardRenderer> {
        self.renderers.get(field).map(Box::as_ref)
    }
}

impl Default for CardRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
