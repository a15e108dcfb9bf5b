//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` input DTO used for create and full-replace update

pub mod character;
pub mod identity;
pub mod image;
pub mod membership;
pub mod stats;
pub mod team;

/// Serde default for the `active` flag on input DTOs.
pub(crate) fn default_active() -> bool {
    true
}
