//! Secret identity model and DTO.

use roster_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `secret_identities` table. At most one per character.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SecretIdentity {
    pub id: DbId,
    pub real_name: String,
    pub birth_date: Option<Date>,
    pub place_of_birth: Option<String>,
    pub character_id: DbId,
}

/// DTO for creating or fully replacing a secret identity.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SecretIdentityInput {
    #[validate(length(min = 1, max = 100))]
    pub real_name: String,
    pub birth_date: Option<Date>,
    #[validate(length(max = 100))]
    pub place_of_birth: Option<String>,
    pub character_id: DbId,
}
