//! Catalog image uploads
//!
//! Catalog writes arrive either as JSON or as `multipart/form-data` carrying
//! an optional `img` file. `CatalogForm` accepts both; `ImageStore` writes
//! uploaded files into the public images directory.

use arcade_shared::CatalogItemRequest;
use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Multipart, Request},
    http::header,
    Json,
};
use serde_json::Value;
use std::path::PathBuf;

use crate::error::ApiError;
use crate::validation::json_rejection_error;

/// Multipart field holding the image file
pub const IMAGE_FIELD: &str = "img";

/// An uploaded file with its sanitized stored name
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub bytes: Bytes,
}

/// Reduce a client-supplied file name to its final path component.
///
/// Returns `None` when nothing usable remains.
pub fn stored_file_name(original: &str) -> Option<String> {
    let name = original
        .rsplit(|c: char| c == '/' || c == '\\')
        .next()
        .unwrap_or_default()
        .trim();

    if name.is_empty() || name == "." || name == ".." || name.chars().any(char::is_control) {
        return None;
    }
    Some(name.to_string())
}

/// Directory that uploaded catalog images are written to
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.dir).await
    }

    /// Write the upload under its own name, replacing any file with the same name
    pub async fn save(&self, upload: &ImageUpload) -> std::io::Result<()> {
        self.ensure_dir().await?;
        let path = self.dir.join(&upload.file_name);
        tokio::fs::write(&path, &upload.bytes).await?;
        tracing::info!(path = %path.display(), bytes = upload.bytes.len(), "stored catalog image");
        Ok(())
    }
}

/// Catalog write payload plus an optional image upload
#[derive(Debug, Default)]
pub struct CatalogForm {
    pub fields: CatalogItemRequest,
    pub image: Option<ImageUpload>,
}

#[async_trait]
impl<S> FromRequest<S> for CatalogForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.starts_with("multipart/form-data"))
            .unwrap_or(false);

        if !is_multipart {
            let Json(fields) = Json::<CatalogItemRequest>::from_request(req, state)
                .await
                .map_err(json_rejection_error)?;
            return Ok(CatalogForm {
                fields,
                image: None,
            });
        }

        let multipart = Multipart::from_request(req, state)
            .await
            .map_err(|err| ApiError::bad_request(format!("Invalid form data: {}", err.body_text())))?;
        read_multipart(multipart).await
    }
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> ApiError {
    ApiError::bad_request(format!("Invalid form data: {}", err.body_text()))
}

async fn read_multipart(mut multipart: Multipart) -> Result<CatalogForm, ApiError> {
    let mut form = CatalogForm::default();
    let mut reviews: Vec<Value> = Vec::new();
    let mut saw_reviews = false;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();

        if name == IMAGE_FIELD {
            let original = field.file_name().map(str::to_string);
            let bytes = field.bytes().await.map_err(multipart_error)?;
            // Browsers send an empty part when no file was picked
            match original {
                Some(original) if !original.is_empty() || !bytes.is_empty() => {
                    let file_name = stored_file_name(&original).ok_or_else(|| {
                        ApiError::bad_request("\"img\" must have a valid file name")
                    })?;
                    form.image = Some(ImageUpload { file_name, bytes });
                }
                _ => {}
            }
            continue;
        }

        let value = field.text().await.map_err(multipart_error)?;
        match name.as_str() {
            "name" => form.fields.name = Some(Value::String(value)),
            "price" => form.fields.price = Some(Value::String(value)),
            "description" => form.fields.description = Some(Value::String(value)),
            "rating" => form.fields.rating = Some(Value::String(value)),
            "reviews" | "reviews[]" => {
                saw_reviews = true;
                if value.trim_start().starts_with('[') {
                    match serde_json::from_str(&value) {
                        Ok(Value::Array(items)) => reviews.extend(items),
                        _ => return Err(ApiError::bad_request("\"reviews\" must be an array")),
                    }
                } else {
                    reviews.push(Value::String(value));
                }
            }
            other => {
                form.fields.unknown.insert(other.to_string(), Value::String(value));
            }
        }
    }

    if saw_reviews {
        form.fields.reviews = Some(Value::Array(reviews));
    }
    Ok(form)
}
