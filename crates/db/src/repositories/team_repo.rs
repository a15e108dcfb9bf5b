//! Repository for the `teams` table.

use roster_core::search::like_pattern;
use roster_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::image::ImageRef;
use crate::models::team::{Team, TeamDetail, TeamInput};
use crate::repositories::MembershipRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, founded_date, description, image_filename, image_url, active, created_at";

/// Provides CRUD, search, and soft-delete operations for teams.
pub struct TeamRepo;

impl TeamRepo {
    /// Insert a new team, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &TeamInput,
        image: &ImageRef,
    ) -> Result<Team, sqlx::Error> {
        let query = format!(
            "INSERT INTO teams
                (name, founded_date, description, image_filename, image_url, active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(&input.name)
            .bind(input.founded_date)
            .bind(&input.description)
            .bind(&image.filename)
            .bind(&image.url)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    /// Find a team by ID. Soft-deleted rows are included.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Team>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teams WHERE id = $1");
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a team by ID with its member characters.
    pub async fn find_detail(pool: &PgPool, id: DbId) -> Result<Option<TeamDetail>, sqlx::Error> {
        let Some(team) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let members = MembershipRepo::members_for_team(pool, id).await?;
        Ok(Some(TeamDetail { team, members }))
    }

    /// Whether a team row with this ID exists (active or not).
    pub async fn exists<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM teams WHERE id = $1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// List active teams whose name contains `query` (case-insensitive),
    /// ordered by ID ascending. An empty `query` disables the filter.
    pub async fn list(
        pool: &PgPool,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Team>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM teams
             WHERE active = true
               AND ($1::text IS NULL OR name ILIKE $1)
             ORDER BY id ASC
             OFFSET $2 LIMIT $3"
        );
        sqlx::query_as::<_, Team>(&sql)
            .bind(like_pattern(query))
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List every active team, ordered by ID ascending.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Team>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teams WHERE active = true ORDER BY id ASC");
        sqlx::query_as::<_, Team>(&query).fetch_all(pool).await
    }

    /// Replace every input field of a team, including `active`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TeamInput,
    ) -> Result<Option<Team>, sqlx::Error> {
        let query = format!(
            "UPDATE teams SET
                name = $2,
                founded_date = $3,
                description = $4,
                active = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.founded_date)
            .bind(&input.description)
            .bind(input.active)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite the image filename and/or URL present in `image`.
    pub async fn set_image(
        pool: &PgPool,
        id: DbId,
        image: &ImageRef,
    ) -> Result<Option<Team>, sqlx::Error> {
        let query = format!(
            "UPDATE teams SET
                image_filename = COALESCE($2, image_filename),
                image_url = COALESCE($3, image_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Team>(&query)
            .bind(id)
            .bind(&image.filename)
            .bind(&image.url)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a team. Returns `true` if the row exists.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        Self::set_active(pool, id, false).await
    }

    /// Restore a soft-deleted team. Returns `true` if the row exists.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        Self::set_active(pool, id, true).await
    }

    /// Permanently delete a team and, by cascade, its memberships.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_active(pool: &PgPool, id: DbId, active: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE teams SET active = $2 WHERE id = $1")
            .bind(id)
            .bind(active)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
