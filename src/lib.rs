//! SiteForge Core - Website Production Compiler
//!
//! # The Five Laws (Non-Negotiable)
//! 1. Templates Are Contracts
//! 2. Validation Is Protective
//! 3. Escape By Default
//! 4. Deterministic Output
//! 5. Archives Are All-Or-Nothing

pub mod cards;
pub mod data;
pub mod hashing;
pub mod package;
pub mod pipeline;
pub mod preview;
pub mod render;
pub mod seed;
pub mod store;
pub mod templates;
pub mod tokens;
pub mod validation;

pub use cards::{CardRegistry, CardRenderer};
pub use data::{CustomData, FieldValue};
pub use package::{PackageError, PackageOptions};
pub use pipeline::{PipelineError, SitePipeline};
pub use render::{escape_html, RenderedAssets};
pub use store::{FetchedImage, HttpImageStore, ImageFetchError, ImageStore};
pub use templates::{FieldSchema, FieldSpec, FieldType, Template, TemplateRegistry};
pub use validation::{FieldRule, FieldViolation, ValidationResult, ViolationSeverity};
