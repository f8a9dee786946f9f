//! Template System - Enforceable Contracts
//!
//! A template declares its sources and the exact field schema a payload
//! must satisfy. Once registered a template is immutable.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

pub type TemplateId = String;

/// Field schema: field key to spec, in declaration order.
///
/// Order matters downstream: image references are collected and archive
/// entries written in schema order.
pub type FieldSchema = IndexMap<String, FieldSpec>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: TemplateId,
    pub name: String,
    pub industry: String,
    pub description: String,
    #[serde(default)]
    pub preview_image: Option<String>,
    pub html_content: String,
    pub css_content: String,
    pub js_content: String,
    pub fields: FieldSchema,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Email,
    Url,
    Color,
    Image,
    Array,
    Object,
}

impl FieldType {
    /// Kinds whose values are single strings in the payload.
    pub fn is_scalar(self) -> bool {
        !matches!(self, FieldType::Array | FieldType::Object)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub default: Option<String>,
    /// One level of subfields for array and object fields. Deeper
    /// nesting is unsupported by construction.
    #[serde(default)]
    pub fields: Option<IndexMap<String, SubfieldSpec>>,
}

/// Subfield declaration. The compact form is just the kind
/// (`"image": "image"` style); the full form adds required/default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubfieldSpec {
    Kind(FieldType),
    Spec {
        #[serde(rename = "type")]
        field_type: FieldType,
        #[serde(default)]
        required: bool,
        #[serde(default)]
        default: Option<String>,
    },
}

impl SubfieldSpec {
    pub fn kind(&self) -> FieldType {
        match self {
            SubfieldSpec::Kind(kind) => *kind,
            SubfieldSpec::Spec { field_type, .. } => *field_type,
        }
    }

    pub fn required(&self) -> bool {
        matches!(self, SubfieldSpec::Spec { required: true, .. })
    }

    pub fn default_value(&self) -> Option<&str> {
        match self {
            SubfieldSpec::Kind(_) => None,
            SubfieldSpec::Spec { default, .. } => default.as_deref(),
        }
    }
}

/// Template registry - loads and caches templates
pub struct TemplateRegistry {
    templates: HashMap<TemplateId, Template>,
}

impl TemplateRegistry {
    pub fn new() -> Self {
        Self { templates: HashMap::new() }
    }

    /// Registry preloaded with the shipped industry templates.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for template in crate::seed::builtin_templates() {
            registry.register(template);
        }
        registry
    }

    pub fn load_from_dir(dir: &Path) -> Result<Self, io::Error> {
        let mut registry = Self::new();
        registry.load_dir(dir)?;
        Ok(registry)
    }

    /// Load every readable `*.json` template under `dir` into the
    /// registry. Unreadable or malformed entries are skipped. Returns
    /// the number of templates loaded.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, io::Error> {
        let mut loaded = 0;
        if dir.exists() {
            for entry in fs::read_dir(dir)? {
                let entry = entry?;
                let path = entry.path();
                if path.extension().map_or(false, |e| e == "json") {
                    if let Ok(content) = fs::read_to_string(&path) {
                        if let Ok(template) = serde_json::from_str::<Template>(&content) {
                            self.register(template);
                            loaded += 1;
                        }
                    }
                }
            }
        }
        Ok(loaded)
    }

    pub fn get(&self, id: &str) -> Option<&Template> {
        self.templates.get(id)
    }

    pub fn list(&self) -> Vec<&Template> {
        let mut templates: Vec<&Template> = self.templates.values().collect();
        templates.sort_by(|a, b| a.id.cmp(&b.id));
        templates
    }

    pub fn by_industry(&self, industry: &str) -> Vec<&Template> {
        self.list()
            .into_iter()
            .filter(|t| t.industry == industry)
            .collect()
    }

    pub fn register(&mut self, template: Template) {
        self.templates.insert(template.id.clone(), template);
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    fn minimal_template(id: &str, industry: &str) -> Template {
        serde_json::from_value(json!({
            "id": id,
            "name": "Minimal",
            "industry": industry,
            "description": "Test template",
            "htmlContent": "<h1>{{BUSINESS_NAME}}</h1>",
            "cssContent": "",
            "jsContent": "",
            "fields": {
                "businessName": {"type": "text", "label": "Business Name", "required": true}
            }
        }))
        .unwrap()
    }

    #[test]
    fn register_and_lookup() {
        let mut registry = TemplateRegistry::new();
        registry.register(minimal_template("t-1", "cosmetics"));
        assert!(registry.get("t-1").is_some());
        assert!(registry.get("t-2").is_none());
    }

    #[test]
    fn list_is_sorted_and_industry_filtered() {
        let mut registry = TemplateRegistry::new();
        registry.register(minimal_template("b", "pharmacy"));
        registry.register(minimal_template("a", "cosmetics"));
        registry.register(minimal_template("c", "cosmetics"));

        let ids: Vec<_> = registry.list().iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);

        let cosmetics: Vec<_> =
            registry.by_industry("cosmetics").iter().map(|t| t.id.clone()).collect();
        assert_eq!(cosmetics, vec!["a", "c"]);
    }

    #[test]
    fn load_dir_skips_malformed_entries() {
        let dir = tempfile::tempdir().unwrap();

        let good = serde_json::to_string(&minimal_template("from-disk", "education")).unwrap();
        fs::write(dir.path().join("good.json"), good).unwrap();
        let mut bad = fs::File::create(dir.path().join("bad.json")).unwrap();
        bad.write_all(b"{ not json").unwrap();
        fs::write(dir.path().join("ignored.txt"), "nope").unwrap();

        let registry = TemplateRegistry::load_from_dir(dir.path()).unwrap();
        assert!(registry.get("from-disk").is_some());
        assert_eq!(registry.list().len(), 1);
    }

    #[test]
    fn load_dir_tolerates_missing_directory() {
        let registry =
            TemplateRegistry::load_from_dir(Path::new("/definitely/not/here")).unwrap();
        assert!(registry.list().is_empty());
    }

    #[test]
    fn subfield_specs_accept_compact_and_full_forms() {
        let schema: FieldSchema = serde_json::from_value(json!({
            "products": {
                "type": "array",
                "label": "Products",
                "fields": {
                    "name": "text",
                    "image": {"type": "image", "required": false, "default": null}
                }
            }
        }))
        .unwrap();

        let subs = schema["products"].fields.as_ref().unwrap();
        assert_eq!(subs["name"].kind(), FieldType::Text);
        assert_eq!(subs["image"].kind(), FieldType::Image);
        assert!(!subs["image"].required());
    }
}
