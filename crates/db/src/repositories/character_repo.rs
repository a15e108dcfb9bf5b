//! Repository for the `characters` table.

use roster_core::search::like_pattern;
use roster_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::models::character::{Character, CharacterDetail, CharacterInput};
use crate::models::image::ImageRef;
use crate::repositories::{IdentityRepo, MembershipRepo};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, alias, alignment, first_appearance, description, \
     image_filename, image_url, active, created_at";

/// Provides CRUD, search, and soft-delete operations for characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Insert a new character, returning the created row.
    ///
    /// Image columns are filled from `image` when present.
    pub async fn create(
        pool: &PgPool,
        input: &CharacterInput,
        image: &ImageRef,
    ) -> Result<Character, sqlx::Error> {
        let query = format!(
            "INSERT INTO characters
                (name, alias, alignment, first_appearance, description,
                 image_filename, image_url, active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(&input.name)
            .bind(&input.alias)
            .bind(&input.alignment)
            .bind(input.first_appearance)
            .bind(&input.description)
            .bind(&image.filename)
            .bind(&image.url)
            .bind(input.active)
            .fetch_one(pool)
            .await
    }

    /// Find a character by ID. Soft-deleted rows are included.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a character by ID with its secret identity and team memberships.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CharacterDetail>, sqlx::Error> {
        let Some(character) = Self::find_by_id(pool, id).await? else {
            return Ok(None);
        };
        let secret_identity = IdentityRepo::find_by_character(pool, id).await?;
        let teams = MembershipRepo::teams_for_character(pool, id).await?;
        Ok(Some(CharacterDetail {
            character,
            secret_identity,
            teams,
        }))
    }

    /// Whether a character row with this ID exists (active or not).
    pub async fn exists<'e>(executor: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM characters WHERE id = $1)")
            .bind(id)
            .fetch_one(executor)
            .await
    }

    /// List active characters whose name or alias contains `query`
    /// (case-insensitive), ordered by ID ascending.
    ///
    /// An empty `query` disables the filter.
    pub async fn list(
        pool: &PgPool,
        query: &str,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE active = true
               AND ($1::text IS NULL OR name ILIKE $1 OR alias ILIKE $1)
             ORDER BY id ASC
             OFFSET $2 LIMIT $3"
        );
        sqlx::query_as::<_, Character>(&sql)
            .bind(like_pattern(query))
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// List every active character, ordered by ID ascending.
    pub async fn list_active(pool: &PgPool) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE active = true ORDER BY id ASC");
        sqlx::query_as::<_, Character>(&query).fetch_all(pool).await
    }

    /// Replace every input field of a character, including `active`.
    ///
    /// Image columns are left untouched. Returns `None` if no row with the
    /// given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &CharacterInput,
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                name = $2,
                alias = $3,
                alignment = $4,
                first_appearance = $5,
                description = $6,
                active = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.alias)
            .bind(&input.alignment)
            .bind(input.first_appearance)
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
    ) -> Result<Option<Character>, sqlx::Error> {
        let query = format!(
            "UPDATE characters SET
                image_filename = COALESCE($2, image_filename),
                image_url = COALESCE($3, image_url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .bind(&image.filename)
            .bind(&image.url)
            .fetch_optional(pool)
            .await
    }

    /// Soft-delete a character. Returns `true` if the row exists.
    ///
    /// Idempotent: an already inactive character still reports `true`.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        Self::set_active(pool, id, false).await
    }

    /// Restore a soft-deleted character. Returns `true` if the row exists.
    pub async fn restore(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        Self::set_active(pool, id, true).await
    }

    /// Permanently delete a character. Its secret identity and memberships
    /// go with it (`ON DELETE CASCADE`). Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn set_active(pool: &PgPool, id: DbId, active: bool) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE characters SET active = $2 WHERE id = $1")
            .bind(id)
            .bind(active)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
