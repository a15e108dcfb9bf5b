//! Multipart form parsing and image upload.
//!
//! Create endpoints (API and pages) accept `multipart/form-data` with plain
//! text fields plus an optional `image` file. The image is pushed to object
//! storage before the owning record is written, so a failed upload aborts
//! the request without touching the database.

use std::collections::HashMap;

use axum::extract::Multipart;
use roster_core::error::CoreError;
use roster_core::naming::{base_file_name, image_object_path};
use roster_core::types::Date;
use roster_db::models::image::ImageRef;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Form field carrying the uploaded file.
pub const IMAGE_FIELD: &str = "image";

/// Content type assumed when the client does not send one.
const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";

/// An uploaded image held in memory until it is stored.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Text fields and the optional image of a multipart submission.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    pub image: Option<ImageUpload>,
}

impl MultipartForm {
    /// Drain a multipart body.
    ///
    /// An `image` part with no file name or no bytes (an empty file input)
    /// counts as "no image". Non-image content types are rejected.
    pub async fn read(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?
        {
            let name = field.name().unwrap_or("").to_string();
            if name == IMAGE_FIELD {
                let file_name = field.file_name().unwrap_or("").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or(DEFAULT_CONTENT_TYPE)
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if file_name.is_empty() || bytes.is_empty() {
                    continue;
                }
                if !content_type.starts_with("image/") {
                    return Err(CoreError::Validation(format!(
                        "Unsupported image content type '{content_type}'"
                    ))
                    .into());
                }
                form.image = Some(ImageUpload {
                    file_name,
                    content_type,
                    bytes: bytes.to_vec(),
                });
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                form.fields.insert(name, text);
            }
        }

        Ok(form)
    }

    /// Raw text fields as submitted, for re-rendering a rejected form.
    pub fn values(&self) -> &HashMap<String, String> {
        &self.fields
    }

    /// Trimmed value of a text field; blank counts as absent.
    pub fn text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    /// A text field that must be present.
    pub fn required(&self, name: &str) -> Result<String, CoreError> {
        self.text(name)
            .ok_or_else(|| CoreError::Validation(format!("Missing required field '{name}'")))
    }

    /// An optional `YYYY-MM-DD` date field.
    pub fn date(&self, name: &str) -> Result<Option<Date>, CoreError> {
        self.text(name)
            .map(|raw| {
                Date::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| {
                    CoreError::Validation(format!("Field '{name}' must be a YYYY-MM-DD date"))
                })
            })
            .transpose()
    }
}

/// Store an uploaded image under `{folder}/{owner}_{file}` and describe it.
///
/// Without an upload the result is an empty [`ImageRef`]. Without configured
/// object storage only the file name is kept.
pub async fn store_image(
    state: &AppState,
    folder: &str,
    owner_name: &str,
    upload: Option<ImageUpload>,
) -> AppResult<ImageRef> {
    let Some(upload) = upload else {
        return Ok(ImageRef::default());
    };
    let filename = base_file_name(&upload.file_name).to_string();

    let url = match &state.storage {
        Some(storage) => {
            let dest_path = image_object_path(folder, owner_name, &upload.file_name);
            Some(
                storage
                    .upload(upload.bytes, &dest_path, &upload.content_type)
                    .await?,
            )
        }
        None => {
            tracing::debug!(%filename, "Object storage not configured, keeping file name only");
            None
        }
    };

    Ok(ImageRef {
        filename: Some(filename),
        url,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn form(pairs: &[(&str, &str)]) -> MultipartForm {
        MultipartForm {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            image: None,
        }
    }

    #[test]
    fn blank_text_is_absent() {
        let f = form(&[("alias", "   ")]);
        assert_eq!(f.text("alias"), None);
        assert_matches!(f.required("alias"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn date_parses_iso_format() {
        let f = form(&[("founded_date", "1963-09-01")]);
        assert_eq!(
            f.date("founded_date").unwrap(),
            Date::from_ymd_opt(1963, 9, 1)
        );
        assert_eq!(f.date("missing").unwrap(), None);
    }

    #[test]
    fn malformed_date_is_validation_error() {
        let f = form(&[("founded_date", "09/01/1963")]);
        assert_matches!(f.date("founded_date"), Err(CoreError::Validation(_)));
    }
}
