use async_trait::async_trait;

/// Error type for object storage failures.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The underlying HTTP request failed (network, DNS, timeout, etc.).
    #[error("Storage request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The storage service answered with a non-2xx status code.
    #[error("Storage returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },
}

/// A bucket that accepts uploads and serves them under a public URL.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Upload `bytes` to `dest_path` and return the object's public URL.
    async fn upload(
        &self,
        bytes: Vec<u8>,
        dest_path: &str,
        content_type: &str,
    ) -> Result<String, StorageError>;
}
