//! Character/team membership models.

use roster_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::character::Character;
use crate::models::team::Team;

/// A row from the `character_team` join table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Membership {
    pub id: DbId,
    pub character_id: DbId,
    pub team_id: DbId,
}

/// DTO for linking a character to a team.
#[derive(Debug, Clone, Deserialize)]
pub struct MembershipInput {
    pub character_id: DbId,
    pub team_id: DbId,
}

/// A membership seen from the character side, with the team loaded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMembership {
    #[sqlx(rename = "membership_id")]
    pub id: DbId,
    pub character_id: DbId,
    pub team_id: DbId,
    #[sqlx(flatten)]
    pub team: Team,
}

/// A membership seen from the team side, with the character loaded.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    #[sqlx(rename = "membership_id")]
    pub id: DbId,
    pub character_id: DbId,
    pub team_id: DbId,
    #[sqlx(flatten)]
    pub character: Character,
}
