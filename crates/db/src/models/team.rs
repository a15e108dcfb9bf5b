//! Team entity model and DTOs.

use roster_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::membership::TeamMember;

/// A team row from the `teams` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Team {
    pub id: DbId,
    pub name: String,
    pub founded_date: Option<Date>,
    pub description: Option<String>,
    pub image_filename: Option<String>,
    pub image_url: Option<String>,
    pub active: bool,
    pub created_at: Timestamp,
}

/// A team with its member characters attached.
#[derive(Debug, Clone, Serialize)]
pub struct TeamDetail {
    #[serde(flatten)]
    pub team: Team,
    pub members: Vec<TeamMember>,
}

/// DTO for creating a team or fully replacing an existing one.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeamInput {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
    pub founded_date: Option<Date>,
    pub description: Option<String>,
    #[serde(default = "super::default_active")]
    pub active: bool,
}
