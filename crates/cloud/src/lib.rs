//! Object storage for uploaded images.
//!
//! [`ObjectStore`] is the seam the API depends on; [`SupabaseStorage`]
//! talks to the Supabase Storage REST API.

pub mod storage;
pub mod supabase;

pub use storage::{ObjectStore, StorageError};
pub use supabase::{SupabaseConfig, SupabaseStorage};
