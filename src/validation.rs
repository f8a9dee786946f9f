//! Validation System - Rule/Policy Separation
//!
//! Rules produce structured violations. Severity decides what blocks:
//! errors stop the render, warnings are reported and rendering proceeds.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::data::{CustomData, FieldValue};
use crate::templates::{FieldSchema, FieldType, Template};

/// `#RGB` or `#RRGGBB`, case-insensitive hex. Anything else would leak
/// broken declarations into the generated stylesheet.
static HEX_COLOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern"));

/// Scheme-like prefix per RFC 3986: letter, then letters/digits/+/-/.,
/// then a colon.
static URL_SCHEME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*:").expect("url scheme pattern"));

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ViolationSeverity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldViolation {
    /// Path of the offending value: `primaryColor`, `products[0].image`,
    /// `socialMedia.facebook`.
    pub field: String,
    pub rule: String,
    pub severity: ViolationSeverity,
    pub message: String,
    pub expected: Option<String>,
    pub actual: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub violations: Vec<FieldViolation>,
    pub template_id: String,
}

impl ValidationResult {
    pub fn success(template: &Template) -> Self {
        Self {
            valid: true,
            violations: vec![],
            template_id: template.id.clone(),
        }
    }

    pub fn failure(template: &Template, violations: Vec<FieldViolation>) -> Self {
        Self {
            valid: false,
            violations,
            template_id: template.id.clone(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.violations.iter().any(|v| v.severity == ViolationSeverity::Error)
    }

    /// Distinct field paths with error-severity violations, in report order.
    pub fn offending_fields(&self) -> Vec<&str> {
        let mut fields: Vec<&str> = vec![];
        for v in &self.violations {
            if v.severity == ViolationSeverity::Error && !fields.contains(&v.field.as_str()) {
                fields.push(v.field.as_str());
            }
        }
        fields
    }

    /// One-line digest of the error violations, for error displays.
    pub fn summary(&self) -> String {
        self.violations
            .iter()
            .filter(|v| v.severity == ViolationSeverity::Error)
            .map(|v| format!("{}: {}", v.field, v.message))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Validation rule trait - produces violations
pub trait FieldRule: Send + Sync {
    fn name(&self) -> &'static str;
    fn check(&self, schema: &FieldSchema, data: &CustomData) -> Vec<FieldViolation>;
}

/// Collect every supplied scalar value of the given kind, including
/// array-entry and object-member values one level deep, with its path.
fn scalars_of_kind<'a>(
    schema: &'a FieldSchema,
    data: &'a CustomData,
    kind: FieldType,
) -> Vec<(String, &'a str)> {
    let mut out = vec![];
    for (key, spec) in schema {
        match spec.field_type {
            FieldType::Array => {
                let (Some(subs), Some(entries)) = (spec.fields.as_ref(), data.list(key)) else {
                    continue;
                };
                for (sub, subspec) in subs {
                    if subspec.kind() != kind {
                        continue;
                    }
                    for (index, entry) in entries.iter().enumerate() {
                        if let Some(value) = entry.get(sub) {
                            out.push((format!("{}[{}].{}", key, index, sub), value.as_str()));
                        }
                    }
                }
            }
            FieldType::Object => {
                let (Some(subs), Some(members)) = (spec.fields.as_ref(), data.group(key)) else {
                    continue;
                };
                for (sub, subspec) in subs {
                    if subspec.kind() != kind {
                        continue;
                    }
                    if let Some(value) = members.get(sub) {
                        out.push((format!("{}.{}", key, sub), value.as_str()));
                    }
                }
            }
            ft if ft == kind => {
                if let Some(value) = data.scalar(key) {
                    out.push((key.clone(), value));
                }
            }
            _ => {}
        }
    }
    out
}

// --- Concrete Rules ---

/// Required fields must be present and non-empty after trimming.
/// Required arrays need at least one entry; required subfields apply
/// per entry and per object member.
pub struct RequiredRule;

impl RequiredRule {
    fn violation(&self, field: String, message: String) -> FieldViolation {
        FieldViolation {
            field,
            rule: self.name().to_string(),
            severity: ViolationSeverity::Error,
            message,
            expected: Some("a non-empty value".to_string()),
            actual: None,
        }
    }
}

impl FieldRule for RequiredRule {
    fn name(&self) -> &'static str { "required" }

    fn check(&self, schema: &FieldSchema, data: &CustomData) -> Vec<FieldViolation> {
        let mut violations = vec![];

        for (key, spec) in schema {
            match spec.field_type {
                FieldType::Array => {
                    let entries = data.list(key).unwrap_or(&[]);
                    if spec.required && entries.is_empty() {
                        violations.push(self.violation(
                            key.clone(),
                            format!("{} needs at least one entry", spec.label),
                        ));
                        continue;
                    }
                    let Some(subs) = spec.fields.as_ref() else { continue };
                    for (sub, subspec) in subs {
                        if !subspec.required() {
                            continue;
                        }
                        for (index, entry) in entries.iter().enumerate() {
                            let blank = entry.get(sub).map_or(true, |v| v.trim().is_empty());
                            if blank {
                                violations.push(self.violation(
                                    format!("{}[{}].{}", key, index, sub),
                                    format!("entry {} of {} is missing {}", index + 1, spec.label, sub),
                                ));
                            }
                        }
                    }
                }
                FieldType::Object => {
                    let members = data.group(key);
                    if spec.required && members.is_none() {
                        violations.push(self.violation(
                            key.clone(),
                            format!("{} is required", spec.label),
                        ));
                        continue;
                    }
                    let (Some(subs), Some(members)) = (spec.fields.as_ref(), members) else {
                        continue;
                    };
                    for (sub, subspec) in subs {
                        if !subspec.required() {
                            continue;
                        }
                        if members.get(sub).map_or(true, |v| v.trim().is_empty()) {
                            violations.push(self.violation(
                                format!("{}.{}", key, sub),
                                format!("{} is missing {}", spec.label, sub),
                            ));
                        }
                    }
                }
                _ => {
                    if spec.required
                        && data.scalar(key).map_or(true, |v| v.trim().is_empty())
                    {
                        violations.push(self.violation(
                            key.clone(),
                            format!("{} is required", spec.label),
                        ));
                    }
                }
            }
        }

        violations
    }
}

/// Every supplied value must have the shape its field declares: one
/// string for scalar kinds, a list of entries for arrays, a group of
/// named members for objects.
pub struct ShapeRule;

fn shape_name(value: &FieldValue) -> &'static str {
    match value {
        FieldValue::Scalar(_) => "a single value",
        FieldValue::List(_) => "a list of entries",
        FieldValue::Group(_) => "a group of named values",
    }
}

impl FieldRule for ShapeRule {
    fn name(&self) -> &'static str { "shape" }

    fn check(&self, schema: &FieldSchema, data: &CustomData) -> Vec<FieldViolation> {
        let mut violations = vec![];

        for (key, spec) in schema {
            let Some(value) = data.get(key) else { continue };
            let expected = match spec.field_type {
                FieldType::Array => "a list of entries",
                FieldType::Object => "a group of named values",
                _ => "a single value",
            };
            if shape_name(value) != expected {
                violations.push(FieldViolation {
                    field: key.clone(),
                    rule: self.name().to_string(),
                    severity: ViolationSeverity::Error,
                    message: format!("{} has the wrong shape", spec.label),
                    expected: Some(expected.to_string()),
                    actual: Some(shape_name(value).to_string()),
                });
            }
        }

        violations
    }
}

/// Color values must be `#RGB` or `#RRGGBB`. Errors, not warnings: a
/// bad color would corrupt the generated stylesheet.
pub struct ColorRule;

impl FieldRule for ColorRule {
    fn name(&self) -> &'static str { "color_format" }

    fn check(&self, schema: &FieldSchema, data: &CustomData) -> Vec<FieldViolation> {
        let mut violations = vec![];

        for (field, value) in scalars_of_kind(schema, data, FieldType::Color) {
            let value = value.trim();
            if value.is_empty() || HEX_COLOR_RE.is_match(value) {
                continue;
            }
            violations.push(FieldViolation {
                field,
                rule: self.name().to_string(),
                severity: ViolationSeverity::Error,
                message: "must be a hex color".to_string(),
                expected: Some("#rgb or #rrggbb".to_string()),
                actual: Some(value.to_string()),
            });
        }

        violations
    }
}

/// Email values should contain an `@`. Warning only: the value still
/// renders, escaped like any other text.
pub struct EmailRule;

impl FieldRule for EmailRule {
    fn name(&self) -> &'static str { "email_format" }

    fn check(&self, schema: &FieldSchema, data: &CustomData) -> Vec<FieldViolation> {
        let mut violations = vec![];

        for (field, value) in scalars_of_kind(schema, data, FieldType::Email) {
            let value = value.trim();
            if value.is_empty() || value.contains('@') {
                continue;
            }
            violations.push(FieldViolation {
                field,
                rule: self.name().to_string(),
                severity: ViolationSeverity::Warning,
                message: "does not look like an email address".to_string(),
                expected: Some("an address containing @".to_string()),
                actual: Some(value.to_string()),
            });
        }

        violations
    }
}

/// Url values should start with a scheme. Warning only, same policy as
/// email.
pub struct UrlRule;

impl FieldRule for UrlRule {
    fn name(&self) -> &'static str { "url_format" }

    fn check(&self, schema: &FieldSchema, data: &CustomData) -> Vec<FieldViolation> {
        let mut violations = vec![];

        for (field, value) in scalars_of_kind(schema, data, FieldType::Url) {
            let value = value.trim();
            if value.is_empty() || URL_SCHEME_RE.is_match(value) {
                continue;
            }
            violations.push(FieldViolation {
                field,
                rule: self.name().to_string(),
                severity: ViolationSeverity::Warning,
                message: "does not look like a link".to_string(),
                expected: Some("a scheme prefix like https://".to_string()),
                actual: Some(value.to_string()),
            });
        }

        violations
    }
}

/// Validator orchestrates rules and applies policy
pub struct Validator {
    rules: Vec<Box<dyn FieldRule>>,
}

impl Validator {
    pub fn new() -> Self {
        Self {
            rules: vec![
                Box::new(RequiredRule),
                Box::new(ShapeRule),
                Box::new(ColorRule),
                Box::new(EmailRule),
                Box::new(UrlRule),
            ],
        }
    }

    pub fn validate(&self, template: &Template, data: &CustomData) -> ValidationResult {
        let mut all_violations = vec![];

        for rule in &self.rules {
            all_violations.extend(rule.check(&template.fields, data));
        }

        let has_errors = all_violations
            .iter()
            .any(|v| v.severity == ViolationSeverity::Error);

        if has_errors {
            ValidationResult::failure(template, all_violations)
        } else if all_violations.is_empty() {
            ValidationResult::success(template)
        } else {
            // Warnings don't block
            ValidationResult {
                valid: true,
                violations: all_violations,
                template_id: template.id.clone(),
            }
        }
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template_with(fields: serde_json::Value) -> Template {
        serde_json::from_value(json!({
            "id": "t-1",
            "name": "Test",
            "industry": "test",
            "description": "Test template",
            "htmlContent": "",
            "cssContent": "",
            "jsContent": "",
            "fields": fields
        }))
        .unwrap()
    }

    fn data(value: serde_json::Value) -> CustomData {
        serde_json::from_value(value).unwrap()
    }

    fn contact_template() -> Template {
        template_with(json!({
            "businessName": {"type": "text", "label": "Business Name", "required": true},
            "primaryColor": {"type": "color", "label": "Primary Color", "default": "#e91e63"},
            "email": {"type": "email", "label": "Email Address"},
            "products": {
                "type": "array",
                "label": "Products",
                "fields": {
                    "name": {"type": "text", "required": true},
                    "image": "image"
                }
            },
            "socialMedia": {
                "type": "object",
                "label": "Social Media",
                "fields": {"facebook": "url", "twitter": "url"}
            }
        }))
    }

    #[test]
    fn required_field_blank_after_trim_is_an_error() {
        let template = contact_template();
        let validator = Validator::new();

        let result = validator.validate(&template, &data(json!({"businessName": "   "})));
        assert!(!result.valid);
        assert!(result.offending_fields().contains(&"businessName"));

        let result = validator.validate(&template, &data(json!({"businessName": "Glow"})));
        assert!(result.valid);
    }

    #[test]
    fn color_formats_are_strict() {
        let template = contact_template();
        let validator = Validator::new();

        for good in ["#fff", "#FF4081", "#e91e63", ""] {
            let result = validator.validate(
                &template,
                &data(json!({"businessName": "Glow", "primaryColor": good})),
            );
            assert!(result.valid, "expected {:?} to pass", good);
        }

        for bad in ["blue", "#ff408", "e91e63", "#ggg", "rgb(0,0,0)"] {
            let result = validator.validate(
                &template,
                &data(json!({"businessName": "Glow", "primaryColor": bad})),
            );
            assert!(!result.valid, "expected {:?} to fail", bad);
            assert_eq!(result.offending_fields(), vec!["primaryColor"]);
        }
    }

    #[test]
    fn email_and_url_problems_are_warnings() {
        let template = contact_template();
        let validator = Validator::new();

        let result = validator.validate(
            &template,
            &data(json!({
                "businessName": "Glow",
                "email": "not-an-address",
                "socialMedia": {"facebook": "facebook.com/glow"}
            })),
        );

        assert!(result.valid);
        assert!(!result.has_errors());
        let warned: Vec<_> = result.violations.iter().map(|v| v.field.as_str()).collect();
        assert!(warned.contains(&"email"));
        assert!(warned.contains(&"socialMedia.facebook"));
    }

    #[test]
    fn nested_violations_carry_entry_paths() {
        let template = contact_template();
        let validator = Validator::new();

        let result = validator.validate(
            &template,
            &data(json!({
                "businessName": "Glow",
                "products": [
                    {"name": "Serum"},
                    {"name": "", "image": "https://cdn.example.com/mask.png"}
                ]
            })),
        );

        assert!(!result.valid);
        assert_eq!(result.offending_fields(), vec!["products[1].name"]);
    }

    #[test]
    fn wrong_shapes_are_errors() {
        let template = contact_template();
        let validator = Validator::new();

        let result = validator.validate(
            &template,
            &data(json!({"businessName": "Glow", "products": "not a list"})),
        );

        assert!(!result.valid);
        let shape = result
            .violations
            .iter()
            .find(|v| v.rule == "shape")
            .expect("shape violation");
        assert_eq!(shape.field, "products");
        assert_eq!(shape.expected.as_deref(), Some("a list of entries"));
    }

    #[test]
    fn summary_names_offending_fields() {
        let template = contact_template();
        let validator = Validator::new();

        let result = validator.validate(&template, &data(json!({"primaryColor": "blue"})));
        let summary = result.summary();
        assert!(summary.contains("businessName"));
        assert!(summary.contains("primaryColor"));
    }
}
