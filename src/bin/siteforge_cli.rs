//! SiteForge CLI - Bridge interface for the Node server
//!
//! Commands: templates, validate, preview, package
//! Outputs JSON to stdout
//! Returns non-zero on validation failure

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use siteforge_core::{
    data::CustomData, hashing::sha256_hex, templates::TemplateRegistry, HttpImageStore,
    PipelineError, SitePipeline,
};

#[derive(Parser)]
#[command(name = "siteforge-cli")]
#[command(about = "SiteForge CLI - Website Production Compiler")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to extra templates directory (overlays the built-ins)
    #[arg(short, long, default_value = "templates")]
    templates_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// List available templates
    Templates {
        /// Only templates for this industry
        #[arg(short, long)]
        industry: Option<String>,
    },

    /// Validate customer data
    Validate {
        /// Template ID
        #[arg(short, long)]
        template: String,

        /// JSON payload (customer field data)
        #[arg(short, long)]
        payload: String,
    },

    /// Render a self-contained preview document
    Preview {
        /// Template ID
        #[arg(short, long)]
        template: String,

        /// JSON payload (customer field data)
        #[arg(short, long)]
        payload: String,

        /// Write the HTML here instead of embedding it in the output
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Build the downloadable site archive
    Package {
        /// Template ID
        #[arg(short, long)]
        template: String,

        /// JSON payload (customer field data)
        #[arg(short, long)]
        payload: String,

        /// Write the archive here instead of embedding it in the output
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Built-ins first, then any on-disk overrides
    let mut registry = TemplateRegistry::with_builtins();
    if let Err(e) = registry.load_dir(&cli.templates_dir) {
        eprintln!(r#"{{"error": "Failed to load templates: {}"}}"#, e);
        return ExitCode::FAILURE;
    }

    let pipeline = SitePipeline::new(registry, std::sync::Arc::new(HttpImageStore::new()));

    match cli.command {
        Commands::Templates { industry } => {
            let templates = match industry {
                Some(ref industry) => pipeline.templates_for_industry(industry),
                None => pipeline.list_templates(),
            };
            let listing: Vec<_> = templates
                .iter()
                .map(|t| {
                    serde_json::json!({
                        "id": t.id,
                        "name": t.name,
                        "industry": t.industry,
                        "description": t.description,
                        "previewImage": t.preview_image,
                    })
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&listing).unwrap());
            ExitCode::SUCCESS
        }

        Commands::Validate { template, payload } => {
            let data: CustomData = match serde_json::from_str(&payload) {
                Ok(d) => d,
                Err(e) => {
                    println!(r#"{{"valid": false, "error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            match pipeline.validate_custom_data(&template, &data) {
                Ok(result) => {
                    println!("{}", serde_json::to_string_pretty(&result).unwrap());
                    if result.valid {
                        ExitCode::SUCCESS
                    } else {
                        ExitCode::from(2) // Validation failure
                    }
                }
                Err(e) => {
                    println!(r#"{{"valid": false, "error": "{}"}}"#, e);
                    ExitCode::FAILURE
                }
            }
        }

        Commands::Preview { template, payload, out } => {
            let data: CustomData = match serde_json::from_str(&payload) {
                Ok(d) => d,
                Err(e) => {
                    println!(r#"{{"success": false, "error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            match pipeline.render_preview(&template, &data) {
                Ok(html) => emit_document(&html, out),
                Err(e) => emit_failure(e),
            }
        }

        Commands::Package { template, payload, out } => {
            let data: CustomData = match serde_json::from_str(&payload) {
                Ok(d) => d,
                Err(e) => {
                    println!(r#"{{"success": false, "error": "Invalid payload: {}"}}"#, e);
                    return ExitCode::FAILURE;
                }
            };

            match pipeline.build_download_archive(&template, &data).await {
                Ok(bytes) => {
                    let sha256 = sha256_hex(&bytes);
                    match out {
                        Some(path) => {
                            if let Err(e) = std::fs::write(&path, &bytes) {
                                println!(
                                    r#"{{"success": false, "error": "Failed to write archive: {}"}}"#,
                                    e
                                );
                                return ExitCode::FAILURE;
                            }
                            let output = serde_json::json!({
                                "success": true,
                                "out": path,
                                "bytes": bytes.len(),
                                "sha256": sha256,
                            });
                            println!("{}", serde_json::to_string_pretty(&output).unwrap());
                        }
                        None => {
                            let encoded = base64::Engine::encode(
                                &base64::engine::general_purpose::STANDARD,
                                &bytes,
                            );
                            let output = serde_json::json!({
                                "success": true,
                                "bytes": bytes.len(),
                                "sha256": sha256,
                                "archiveBase64": encoded,
                            });
                            println!("{}", serde_json::to_string_pretty(&output).unwrap());
                        }
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => emit_failure(e),
            }
        }
    }
}

fn emit_document(html: &str, out: Option<PathBuf>) -> ExitCode {
    match out {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, html) {
                println!(r#"{{"success": false, "error": "Failed to write document: {}"}}"#, e);
                return ExitCode::FAILURE;
            }
            let output = serde_json::json!({
                "success": true,
                "out": path,
                "bytes": html.len(),
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
        None => {
            let output = serde_json::json!({
                "success": true,
                "html": html,
            });
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }
    ExitCode::SUCCESS
}

fn emit_failure(err: PipelineError) -> ExitCode {
    let output = serde_json::json!({
        "success": false,
        "error": err.to_string(),
    });
    println!("{}", serde_json::to_string(&output).unwrap());
    match err {
        PipelineError::ValidationFailed(_) => ExitCode::from(2), // Validation failure
        _ => ExitCode::FAILURE,
    }
}
