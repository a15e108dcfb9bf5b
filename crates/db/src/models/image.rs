use serde::Serialize;

/// Reference to an uploaded image: the client file name and, when object
/// storage is configured, its public URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImageRef {
    pub filename: Option<String>,
    pub url: Option<String>,
}

impl ImageRef {
    /// `true` when neither a filename nor a URL is present.
    pub fn is_empty(&self) -> bool {
        self.filename.is_none() && self.url.is_none()
    }
}
