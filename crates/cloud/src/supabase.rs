//! Supabase Storage client.
//!
//! Uploads go to `POST {url}/storage/v1/object/{bucket}/{path}`; the public
//! URL of an object is `{url}/storage/v1/object/public/{bucket}/{path}`.

use std::time::Duration;

use async_trait::async_trait;

use crate::storage::{ObjectStore, StorageError};

/// HTTP timeout for a single upload.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Bucket used when `SUPABASE_BUCKET` is unset.
pub const DEFAULT_BUCKET: &str = "Marvel";

/// Connection settings for a Supabase project.
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://abc.supabase.co`.
    pub url: String,
    /// Service or anon API key.
    pub key: String,
    pub bucket: String,
}

impl SupabaseConfig {
    /// Load from `SUPABASE_URL`, `SUPABASE_KEY` and `SUPABASE_BUCKET`.
    ///
    /// Returns `None` unless both URL and key are set, meaning uploads are
    /// disabled and records keep only the image filename.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("SUPABASE_URL").ok().filter(|v| !v.is_empty())?;
        let key = std::env::var("SUPABASE_KEY").ok().filter(|v| !v.is_empty())?;
        let bucket = std::env::var("SUPABASE_BUCKET").unwrap_or_else(|_| DEFAULT_BUCKET.into());
        Some(Self { url, key, bucket })
    }
}

/// [`ObjectStore`] backed by a Supabase Storage bucket.
pub struct SupabaseStorage {
    client: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseStorage {
    pub fn new(mut config: SupabaseConfig) -> Result<Self, StorageError> {
        config.url = config.url.trim_end_matches('/').to_string();
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self { client, config })
    }

    /// Endpoint that receives the upload for `dest_path`.
    pub fn object_url(&self, dest_path: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.config.url,
            self.config.bucket,
            dest_path.trim_start_matches('/')
        )
    }

    /// Public URL under which an uploaded object is served.
    pub fn public_url(&self, dest_path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.config.url,
            self.config.bucket,
            dest_path.trim_start_matches('/')
        )
    }
}

#[async_trait]
impl ObjectStore for SupabaseStorage {
    async fn upload(
        &self,
        bytes: Vec<u8>,
        dest_path: &str,
        content_type: &str,
    ) -> Result<String, StorageError> {
        let size = bytes.len();
        let response = self
            .client
            .post(self.object_url(dest_path))
            .bearer_auth(&self.config.key)
            .header("apikey", &self.config.key)
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .header("x-upsert", "true")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), dest_path, %body, "Image upload rejected");
            return Err(StorageError::HttpStatus {
                status: status.as_u16(),
                body,
            });
        }

        tracing::info!(dest_path, size, bucket = %self.config.bucket, "Image uploaded");
        Ok(self.public_url(dest_path))
    }
}
