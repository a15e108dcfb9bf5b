//! Repository for the `character_team` join table.

use roster_core::error::CoreError;
use roster_core::types::DbId;
use sqlx::PgPool;

use crate::error::RepoError;
use crate::models::membership::{Membership, MembershipInput, TeamMember, TeamMembership};
use crate::repositories::{CharacterRepo, TeamRepo};

const COLUMNS: &str = "id, character_id, team_id";

/// Team columns prefixed for joins against `character_team ct`.
const TEAM_COLUMNS: &str = "t.id, t.name, t.founded_date, t.description, \
     t.image_filename, t.image_url, t.active, t.created_at";

/// Character columns prefixed for joins against `character_team ct`.
const CHARACTER_COLUMNS: &str = "c.id, c.name, c.alias, c.alignment, c.first_appearance, \
     c.description, c.image_filename, c.image_url, c.active, c.created_at";

/// Provides operations on character/team memberships.
pub struct MembershipRepo;

impl MembershipRepo {
    /// List every membership, ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Membership>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM character_team ORDER BY id ASC");
        sqlx::query_as::<_, Membership>(&query).fetch_all(pool).await
    }

    /// Find a membership by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Membership>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM character_team WHERE id = $1");
        sqlx::query_as::<_, Membership>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Link a character to a team.
    ///
    /// Fails with `NotFound` if either side is missing and with `Conflict`
    /// if the pair is already linked.
    pub async fn create(pool: &PgPool, input: &MembershipInput) -> Result<Membership, RepoError> {
        let mut tx = pool.begin().await?;

        if !CharacterRepo::exists(&mut *tx, input.character_id).await? {
            return Err(CoreError::NotFound {
                entity: "Character",
                id: input.character_id,
            }
            .into());
        }
        if !TeamRepo::exists(&mut *tx, input.team_id).await? {
            return Err(CoreError::NotFound {
                entity: "Team",
                id: input.team_id,
            }
            .into());
        }

        let linked = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                SELECT 1 FROM character_team WHERE character_id = $1 AND team_id = $2
             )",
        )
        .bind(input.character_id)
        .bind(input.team_id)
        .fetch_one(&mut *tx)
        .await?;
        if linked {
            return Err(CoreError::Conflict(format!(
                "Character {} is already a member of team {}",
                input.character_id, input.team_id
            ))
            .into());
        }

        let query = format!(
            "INSERT INTO character_team (character_id, team_id)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let membership = sqlx::query_as::<_, Membership>(&query)
            .bind(input.character_id)
            .bind(input.team_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(membership)
    }

    /// Delete a membership. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM character_team WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// All memberships of a character, each with its team loaded.
    pub async fn teams_for_character(
        pool: &PgPool,
        character_id: DbId,
    ) -> Result<Vec<TeamMembership>, sqlx::Error> {
        let query = format!(
            "SELECT ct.id AS membership_id, ct.character_id, ct.team_id, {TEAM_COLUMNS}
             FROM character_team ct
             JOIN teams t ON t.id = ct.team_id
             WHERE ct.character_id = $1
             ORDER BY ct.id ASC"
        );
        sqlx::query_as::<_, TeamMembership>(&query)
            .bind(character_id)
            .fetch_all(pool)
            .await
    }

    /// All memberships of a team, each with its character loaded.
    pub async fn members_for_team(
        pool: &PgPool,
        team_id: DbId,
    ) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!(
            "SELECT ct.id AS membership_id, ct.character_id, ct.team_id, {CHARACTER_COLUMNS}
             FROM character_team ct
             JOIN characters c ON c.id = ct.character_id
             WHERE ct.team_id = $1
             ORDER BY ct.id ASC"
        );
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(team_id)
            .fetch_all(pool)
            .await
    }
}
