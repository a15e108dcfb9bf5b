use std::sync::Arc;

use roster_cloud::ObjectStore;

use crate::config::ServerConfig;
use crate::templates::Templates;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: roster_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Image storage. `None` when object storage is not configured.
    pub storage: Option<Arc<dyn ObjectStore>>,
    /// Page templates.
    pub templates: Arc<Templates>,
}
