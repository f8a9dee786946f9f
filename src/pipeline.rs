//! Site Pipeline - Single Entry Point
//!
//! CRITICAL: render_site MUST call validate internally. No bypass.

use std::sync::Arc;

use thiserror::Error;

use crate::cards::CardRegistry;
use crate::data::CustomData;
use crate::package::{build_archive, PackageError, PackageOptions};
use crate::preview::preview_document;
use crate::render::{render_assets, RenderedAssets};
use crate::store::{HttpImageStore, ImageFetchError, ImageStore};
use crate::templates::{Template, TemplateRegistry};
use crate::validation::{ValidationResult, Validator};

#[cfg(feature = "test-hooks")]
use std::sync::atomic::{AtomicU32, Ordering};

#[cfg(feature = "test-hooks")]
static VALIDATION_CALL_COUNT: AtomicU32 = AtomicU32::new(0);

#[cfg(feature = "test-hooks")]
pub fn get_validation_call_count() -> u32 {
    VALIDATION_CALL_COUNT.load(Ordering::SeqCst)
}

#[cfg(feature = "test-hooks")]
pub fn reset_validation_call_count() {
    VALIDATION_CALL_COUNT.store(0, Ordering::SeqCst);
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Validation failed: {}", .0.summary())]
    ValidationFailed(ValidationResult),

    #[error(transparent)]
    ImageFetch(#[from] ImageFetchError),

    #[error("Packaging error: {0}")]
    Packaging(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<PackageError> for PipelineError {
    fn from(err: PackageError) -> Self {
        match err {
            PackageError::ImageFetch(inner) => PipelineError::ImageFetch(inner),
            other => PipelineError::Packaging(other.to_string()),
        }
    }
}

/// The site pipeline - single entry point for all site operations
pub struct SitePipeline {
    registry: TemplateRegistry,
    validator: Validator,
    cards: CardRegistry,
    images: Arc<dyn ImageStore>,
    package_options: PackageOptions,
}

impl SitePipeline {
    pub fn new(registry: TemplateRegistry, images: Arc<dyn ImageStore>) -> Self {
        Self {
            registry,
            validator: Validator::new(),
            cards: CardRegistry::with_builtins(),
            images,
            package_options: PackageOptions::default(),
        }
    }

    /// Replace the card registry (custom per-entry markup).
    pub fn with_card_registry(mut self, cards: CardRegistry) -> Self {
        self.cards = cards;
        self
    }

    /// Replace the packaging limits (concurrency and timeouts).
    pub fn with_package_options(mut self, options: PackageOptions) -> Self {
        self.package_options = options;
        self
    }

    /// List all available templates
    pub fn list_templates(&self) -> Vec<&Template> {
        self.registry.list()
    }

    /// List templates for one industry
    pub fn templates_for_industry(&self, industry: &str) -> Vec<&Template> {
        self.registry.by_industry(industry)
    }

    /// Get a specific template
    pub fn get_template(&self, id: &str) -> Option<&Template> {
        self.registry.get(id)
    }

    fn require_template(&self, template_id: &str) -> Result<&Template, PipelineError> {
        self.registry
            .get(template_id)
            .ok_or_else(|| PipelineError::TemplateNotFound(template_id.to_string()))
    }

    /// Every validation in the crate funnels through here; the counter
    /// behind the `test-hooks` feature counts these runs.
    fn run_validation(&self, template: &Template, data: &CustomData) -> ValidationResult {
        #[cfg(feature = "test-hooks")]
        VALIDATION_CALL_COUNT.fetch_add(1, Ordering::SeqCst);

        self.validator.validate(template, data)
    }

    /// Resolve a template and reject payloads with validation errors.
    /// Render and packaging share this gate: one lookup and one
    /// validation per call.
    fn validated_template(
        &self,
        template_id: &str,
        data: &CustomData,
    ) -> Result<&Template, PipelineError> {
        let template = self.require_template(template_id)?;
        let validation = self.run_validation(template, data);
        if !validation.valid {
            return Err(PipelineError::ValidationFailed(validation));
        }
        Ok(template)
    }

    /// Validate customer data against a template's field schema
    ///
    /// This is the ONLY public validation entry point.
    pub fn validate_custom_data(
        &self,
        template_id: &str,
        data: &CustomData,
    ) -> Result<ValidationResult, PipelineError> {
        let template = self.require_template(template_id)?;
        Ok(self.run_validation(template, data))
    }

    /// Render the three site assets (HTML, CSS, JS) for a payload
    ///
    /// CRITICAL: This ALWAYS validates internally. No bypass possible.
    pub fn render_site(
        &self,
        template_id: &str,
        data: &CustomData,
    ) -> Result<RenderedAssets, PipelineError> {
        // MANDATORY: Validation is always called. This is non-negotiable.
        // Errors reject the render. Warnings pass through.
        let template = self.validated_template(template_id, data)?;

        Ok(render_assets(template, data, &self.cards))
    }

    /// Render a single self-contained preview document
    ///
    /// CSS and JS are inlined; images stay on their live URLs.
    pub fn render_preview(
        &self,
        template_id: &str,
        data: &CustomData,
    ) -> Result<String, PipelineError> {
        let assets = self.render_site(template_id, data)?;
        Ok(preview_document(&assets))
    }

    /// Build the downloadable site archive
    ///
    /// Fetches every referenced image, stores it under a content-hash
    /// name, and rewrites the rendered HTML to relative paths. Fails
    /// whole if any fetch fails.
    pub async fn build_download_archive(
        &self,
        template_id: &str,
        data: &CustomData,
    ) -> Result<Vec<u8>, PipelineError> {
        // Same gate as render_site: nothing is packaged unvalidated.
        let template = self.validated_template(template_id, data)?;

        let bytes = build_archive(
            template,
            data,
            &self.cards,
            self.images.as_ref(),
            &self.package_options,
        )
        .await?;

        Ok(bytes)
    }
}

impl Default for SitePipeline {
    fn default() -> Self {
        Self::new(
            TemplateRegistry::with_builtins(),
            Arc::new(HttpImageStore::new()),
        )
    }
}

#[cfg(all(test, feature = "test-hooks"))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn entry_points_validate_exactly_once() {
        let pipeline = SitePipeline::default();
        let data: CustomData = serde_json::from_value(json!({
            "businessName": "Glow & Co.",
            "description": "Small-batch skincare."
        }))
        .unwrap();

        reset_validation_call_count();

        pipeline
            .validate_custom_data("cosmetics-template-1", &data)
            .unwrap();
        assert_eq!(get_validation_call_count(), 1);

        pipeline.render_site("cosmetics-template-1", &data).unwrap();
        assert_eq!(get_validation_call_count(), 2);

        pipeline
            .render_preview("cosmetics-template-1", &data)
            .unwrap();
        assert_eq!(get_validation_call_count(), 3);

        // Lookup failures never reach the validator.
        assert!(pipeline.render_site("missing", &data).is_err());
        assert_eq!(get_validation_call_count(), 3);
    }
}
