//! Artifact Packager - Deterministic Download Archives
//!
//! Fetches every referenced image, renames it by content hash, rewrites
//! references to relative `images/` paths and writes one ZIP. All or
//! nothing: a single failed fetch aborts the whole archive.

use futures::stream::{self, StreamExt, TryStreamExt};
use indexmap::IndexSet;
use std::collections::{BTreeMap, HashMap};
use std::io::{Cursor, Write};
use std::time::Duration;
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::cards::CardRegistry;
use crate::data::{CustomData, FieldValue};
use crate::render::{render_assets, resolve_scalar, RenderedAssets};
use crate::store::{FetchedImage, ImageFetchError, ImageStore};
use crate::templates::{FieldType, Template};

const HASH_PREFIX_LEN: usize = 12;

#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// Concurrent image fetches during packaging.
    pub concurrency: usize,
    /// Deadline per fetch.
    pub fetch_timeout: Duration,
    /// Deadline for the whole retrieval phase.
    pub overall_timeout: Duration,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            concurrency: 4,
            fetch_timeout: Duration::from_secs(10),
            overall_timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Error)]
pub enum PackageError {
    #[error(transparent)]
    ImageFetch(#[from] ImageFetchError),

    #[error("archive write failed: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("archive io failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Where an image URL came from, so the packaged payload can be
/// rewritten at the same spot.
enum RefSite {
    Field { key: String },
    Entry { key: String, index: usize, sub: String },
    Member { key: String, sub: String },
}

struct ImageRef {
    site: RefSite,
    url: String,
}

/// Collect resolved image references in schema order: image fields,
/// then per-entry image subfields, then object image members. Each
/// site resolves the way its renderer does, so the fetched set always
/// matches the emitted markup: fields and object members fall back to
/// declared defaults (even when the whole group is absent from the
/// payload); array entries have no fallback, cards render entry values
/// as-is.
fn image_refs(template: &Template, data: &CustomData) -> Vec<ImageRef> {
    let mut refs = vec![];

    for (key, spec) in &template.fields {
        match spec.field_type {
            FieldType::Image => {
                let url = resolve_scalar(data.scalar(key), spec.default.as_deref());
                if !url.trim().is_empty() {
                    refs.push(ImageRef { site: RefSite::Field { key: key.clone() }, url });
                }
            }
            FieldType::Array => {
                let (Some(subs), Some(entries)) = (spec.fields.as_ref(), data.list(key)) else {
                    continue;
                };
                for (index, entry) in entries.iter().enumerate() {
                    for (sub, subspec) in subs {
                        if subspec.kind() != FieldType::Image {
                            continue;
                        }
                        let Some(url) = entry.get(sub).map(|v| v.trim()) else {
                            continue;
                        };
                        if !url.is_empty() {
                            refs.push(ImageRef {
                                site: RefSite::Entry {
                                    key: key.clone(),
                                    index,
                                    sub: sub.clone(),
                                },
                                url: url.to_string(),
                            });
                        }
                    }
                }
            }
            FieldType::Object => {
                let Some(subs) = spec.fields.as_ref() else { continue };
                let members = data.group(key);
                for (sub, subspec) in subs {
                    if subspec.kind() != FieldType::Image {
                        continue;
                    }
                    let url = resolve_scalar(
                        members.and_then(|m| m.get(sub)).map(String::as_str),
                        subspec.default_value(),
                    );
                    if !url.trim().is_empty() {
                        refs.push(ImageRef {
                            site: RefSite::Member { key: key.clone(), sub: sub.clone() },
                            url,
                        });
                    }
                }
            }
            _ => {}
        }
    }

    refs
}

/// Fetch every distinct URL with bounded concurrency. Each fetch runs
/// under its own timeout and under the shared phase deadline; either
/// expiring fails the fetch, and the first failure aborts the rest.
async fn fetch_all(
    urls: &IndexSet<String>,
    store: &dyn ImageStore,
    options: &PackageOptions,
) -> Result<HashMap<String, FetchedImage>, ImageFetchError> {
    let deadline = tokio::time::Instant::now() + options.overall_timeout;
    let fetch_timeout = options.fetch_timeout;

    stream::iter(urls.iter().cloned().map(|url| async move {
        let outcome = tokio::time::timeout_at(
            deadline,
            tokio::time::timeout(fetch_timeout, store.fetch_image(&url)),
        )
        .await;
        match outcome {
            Err(_) => Err(ImageFetchError::new(url, "packaging deadline exceeded")),
            Ok(Err(_)) => Err(ImageFetchError::new(
                url,
                format!("no response within {:?}", fetch_timeout),
            )),
            Ok(Ok(result)) => result.map(|image| (url, image)),
        }
    }))
    .buffer_unordered(options.concurrency.max(1))
    .try_collect()
    .await
}

/// Archive filename for a fetched image: first 12 hex digits of the
/// content hash plus an extension from the reported content type, else
/// a recognized URL extension, else `img`. The remote filename is never
/// trusted.
fn archive_filename(url: &str, image: &FetchedImage) -> String {
    let digest = crate::hashing::sha256_hex(&image.bytes);
    format!(
        "{}.{}",
        &digest[..HASH_PREFIX_LEN],
        extension_for(image.content_type.as_deref(), url)
    )
}

fn extension_for(content_type: Option<&str>, url: &str) -> String {
    let by_type = content_type.and_then(|ct| match ct {
        "image/png" => Some("png"),
        "image/jpeg" | "image/jpg" => Some("jpg"),
        "image/gif" => Some("gif"),
        "image/webp" => Some("webp"),
        "image/svg+xml" => Some("svg"),
        "image/x-icon" | "image/vnd.microsoft.icon" => Some("ico"),
        "image/avif" => Some("avif"),
        _ => None,
    });
    if let Some(ext) = by_type {
        return ext.to_string();
    }

    let path = url.split(|c| c == '?' || c == '#').next().unwrap_or(url);
    if let Some((_, ext)) = path.rsplit_once('.') {
        let ext = ext.to_ascii_lowercase();
        if matches!(
            ext.as_str(),
            "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "ico" | "avif"
        ) {
            return if ext == "jpeg" { "jpg".to_string() } else { ext };
        }
    }

    "img".to_string()
}

/// Clone the payload with every image value replaced by its relative
/// archive path, so the packaged render references `images/` instead of
/// the live URLs.
fn rewrite_image_refs(
    data: &CustomData,
    refs: &[ImageRef],
    names: &HashMap<String, String>,
) -> CustomData {
    let mut out = data.clone();

    for r in refs {
        let Some(relative) = names.get(&r.url) else { continue };
        match &r.site {
            RefSite::Field { key } => {
                out.0.insert(key.clone(), FieldValue::Scalar(relative.clone()));
            }
            RefSite::Entry { key, index, sub } => {
                if let Some(FieldValue::List(entries)) = out.0.get_mut(key) {
                    if let Some(entry) = entries.get_mut(*index) {
                        entry.insert(sub.clone(), relative.clone());
                    }
                }
            }
            RefSite::Member { key, sub } => match out.0.get_mut(key) {
                Some(FieldValue::Group(members)) => {
                    members.insert(sub.clone(), relative.clone());
                }
                _ => {
                    let mut members = BTreeMap::new();
                    members.insert(sub.clone(), relative.clone());
                    out.0.insert(key.clone(), FieldValue::Group(members));
                }
            },
        }
    }

    out
}

fn write_archive(
    assets: &RenderedAssets,
    images: &[(String, &FetchedImage)],
) -> Result<Vec<u8>, PackageError> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    // Fixed timestamps and entry order keep archives byte-identical.
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(zip::DateTime::default());

    zip.start_file("index.html", options)?;
    zip.write_all(assets.html.as_bytes())?;
    zip.start_file("style.css", options)?;
    zip.write_all(assets.css.as_bytes())?;
    zip.start_file("script.js", options)?;
    zip.write_all(assets.js.as_bytes())?;

    zip.add_directory("images", options)?;
    let mut written = IndexSet::new();
    for (filename, image) in images {
        // Identical bytes from different URLs share one entry.
        if !written.insert(filename.clone()) {
            continue;
        }
        zip.start_file(format!("images/{}", filename), options)?;
        zip.write_all(&image.bytes)?;
    }

    Ok(zip.finish()?.into_inner())
}

/// Build the download archive for a template and payload.
///
/// Nothing is returned unless every image fetch succeeded.
pub async fn build_archive(
    template: &Template,
    data: &CustomData,
    cards: &CardRegistry,
    store: &dyn ImageStore,
    options: &PackageOptions,
) -> Result<Vec<u8>, PackageError> {
    let refs = image_refs(template, data);
    let urls: IndexSet<String> = refs.iter().map(|r| r.url.clone()).collect();
    let fetched = fetch_all(&urls, store, options).await?;

    let mut names = HashMap::new();
    let mut entries: Vec<(String, &FetchedImage)> = vec![];
    for url in &urls {
        let Some(image) = fetched.get(url) else { continue };
        let filename = archive_filename(url, image);
        names.insert(url.clone(), format!("images/{}", filename));
        entries.push((filename, image));
    }

    let packaged = rewrite_image_refs(data, &refs, &names);
    let assets = render_assets(template, &packaged, cards);
    write_archive(&assets, &entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn template(fields: serde_json::Value) -> Template {
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

    #[test]
    fn extension_prefers_content_type_over_url() {
        assert_eq!(extension_for(Some("image/png"), "https://x/img.jpg"), "png");
        assert_eq!(extension_for(Some("image/jpeg"), "https://x/img"), "jpg");
        assert_eq!(extension_for(None, "https://x/photo.JPEG?w=800"), "jpg");
        assert_eq!(extension_for(None, "https://x/photo.webp#frag"), "webp");
        assert_eq!(extension_for(None, "https://images.example.com/photo-123"), "img");
        assert_eq!(extension_for(Some("text/html"), "https://x/page.html"), "img");
    }

    #[test]
    fn filenames_are_content_addressed() {
        let image = FetchedImage {
            bytes: b"pixels".to_vec(),
            content_type: Some("image/png".to_string()),
        };
        let a = archive_filename("https://x/a.png", &image);
        let b = archive_filename("https://y/b.bin", &image);
        assert_eq!(a, b);
        assert_eq!(a.len(), HASH_PREFIX_LEN + ".png".len());
        assert!(a.ends_with(".png"));
    }

    #[test]
    fn refs_follow_schema_order_and_resolve_defaults() {
        let template = template(json!({
            "logo": {"type": "image", "label": "Logo", "default": "https://cdn.example.com/fallback.png"},
            "heroImage": {"type": "image", "label": "Hero"},
            "products": {
                "type": "array",
                "label": "Products",
                "fields": {"name": "text", "image": "image"}
            },
            "socialMedia": {
                "type": "object",
                "label": "Social",
                "fields": {"badge": "image", "facebook": "url"}
            }
        }));
        let data = data(json!({
            "logo": "  ",
            "heroImage": "https://cdn.example.com/hero.jpg",
            "products": [
                {"name": "a", "image": "https://cdn.example.com/a.png"},
                {"name": "b"},
                {"name": "c", "image": "https://cdn.example.com/c.png"}
            ],
            "socialMedia": {"badge": "https://cdn.example.com/badge.svg"}
        }));

        let urls: Vec<String> = image_refs(&template, &data).into_iter().map(|r| r.url).collect();
        assert_eq!(
            urls,
            vec![
                "https://cdn.example.com/fallback.png",
                "https://cdn.example.com/hero.jpg",
                "https://cdn.example.com/a.png",
                "https://cdn.example.com/c.png",
                "https://cdn.example.com/badge.svg",
            ]
        );
    }

    #[test]
    fn absent_group_still_resolves_member_defaults() {
        let template = template(json!({
            "branding": {
                "type": "object",
                "label": "Branding",
                "fields": {
                    "badge": {"type": "image", "default": "https://cdn.example.com/badge.png"},
                    "facebook": "url"
                }
            }
        }));
        let source = data(json!({}));

        let refs = image_refs(&template, &source);
        let urls: Vec<&str> = refs.iter().map(|r| r.url.as_str()).collect();
        assert_eq!(urls, vec!["https://cdn.example.com/badge.png"]);

        let names = HashMap::from([(
            "https://cdn.example.com/badge.png".to_string(),
            "images/ab12cd34ef56.png".to_string(),
        )]);
        let rewritten = rewrite_image_refs(&source, &refs, &names);
        assert_eq!(
            rewritten.group("branding").and_then(|m| m.get("badge")).map(String::as_str),
            Some("images/ab12cd34ef56.png")
        );
    }

    #[test]
    fn array_entries_ignore_subfield_defaults() {
        let template = template(json!({
            "products": {
                "type": "array",
                "label": "Products",
                "fields": {
                    "name": "text",
                    "image": {"type": "image", "default": "https://cdn.example.com/stock.png"}
                }
            }
        }));
        let source = data(json!({
            "products": [
                {"name": "listed", "image": "https://cdn.example.com/a.png"},
                {"name": "bare"},
                {"name": "blank", "image": "   "}
            ]
        }));

        let urls: Vec<String> =
            image_refs(&template, &source).into_iter().map(|r| r.url).collect();
        assert_eq!(urls, vec!["https://cdn.example.com/a.png"]);
    }

    #[test]
    fn rewrite_touches_only_mapped_urls() {
        let template = template(json!({
            "logo": {"type": "image", "label": "Logo"},
            "products": {
                "type": "array",
                "label": "Products",
                "fields": {"name": "text", "image": "image"}
            }
        }));
        let source = data(json!({
            "logo": "https://cdn.example.com/logo.png",
            "products": [{"name": "a", "image": "https://cdn.example.com/a.png"}]
        }));

        let refs = image_refs(&template, &source);
        let names = HashMap::from([(
            "https://cdn.example.com/a.png".to_string(),
            "images/ab12cd34ef56.png".to_string(),
        )]);
        let rewritten = rewrite_image_refs(&source, &refs, &names);

        assert_eq!(rewritten.scalar("logo"), Some("https://cdn.example.com/logo.png"));
        assert_eq!(
            rewritten.list("products").unwrap()[0].get("image").map(String::as_str),
            Some("images/ab12cd34ef56.png")
        );
        // The source payload is untouched.
        assert_eq!(
            source.list("products").unwrap()[0].get("image").map(String::as_str),
            Some("https://cdn.example.com/a.png")
        );
    }
}
