//! Character entity model and DTOs.

use roster_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::identity::SecretIdentity;
use crate::models::membership::TeamMembership;

/// A character row from the `characters` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Character {
    pub id: DbId,
    pub name: String,
    pub alias: Option<String>,
    pub alignment: String,
    pub first_appearance: Option<Date>,
    pub description: Option<String>,
    pub image_filename: Option<String>,
    pub image_url: Option<String>,
    /// `false` once soft-deleted.
    pub active: bool,
    pub created_at: Timestamp,
}

/// A character with its secret identity and team memberships attached.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterDetail {
    #[serde(flatten)]
    pub character: Character,
    pub secret_identity: Option<SecretIdentity>,
    pub teams: Vec<TeamMembership>,
}

/// DTO for creating a character or fully replacing an existing one.
///
/// Every field overwrites the stored value on update, so an omitted
/// optional field clears the column.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CharacterInput {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    #[validate(length(max = 100))]
    pub alias: Option<String>,
    #[validate(length(min = 3, max = 50))]
    pub alignment: String,
    pub first_appearance: Option<Date>,
    pub description: Option<String>,
    #[serde(default = "super::default_active")]
    pub active: bool,
}
