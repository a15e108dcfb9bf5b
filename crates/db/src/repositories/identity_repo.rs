//! Repository for the `secret_identities` table.
//!
//! A character owns at most one secret identity. Both `create` and `update`
//! check that rule with explicit lookups inside the write transaction; the
//! `uq_secret_identities_character` constraint is only a backstop.

use roster_core::error::CoreError;
use roster_core::types::DbId;
use sqlx::{PgExecutor, PgPool};

use crate::error::RepoError;
use crate::models::identity::{SecretIdentity, SecretIdentityInput};
use crate::repositories::CharacterRepo;

const COLUMNS: &str = "id, real_name, birth_date, place_of_birth, character_id";

/// Provides CRUD operations for secret identities.
pub struct IdentityRepo;

impl IdentityRepo {
    /// List every secret identity, ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<SecretIdentity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM secret_identities ORDER BY id ASC");
        sqlx::query_as::<_, SecretIdentity>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a secret identity by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SecretIdentity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM secret_identities WHERE id = $1");
        sqlx::query_as::<_, SecretIdentity>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the secret identity owned by a character, if any.
    pub async fn find_by_character<'e>(
        executor: impl PgExecutor<'e>,
        character_id: DbId,
    ) -> Result<Option<SecretIdentity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM secret_identities WHERE character_id = $1");
        sqlx::query_as::<_, SecretIdentity>(&query)
            .bind(character_id)
            .fetch_optional(executor)
            .await
    }

    /// Insert a secret identity for an existing character.
    ///
    /// Fails with `NotFound` if the character does not exist and with
    /// `Conflict` if it already has a secret identity.
    pub async fn create(
        pool: &PgPool,
        input: &SecretIdentityInput,
    ) -> Result<SecretIdentity, RepoError> {
        let mut tx = pool.begin().await?;

        if !CharacterRepo::exists(&mut *tx, input.character_id).await? {
            return Err(CoreError::NotFound {
                entity: "Character",
                id: input.character_id,
            }
            .into());
        }
        if Self::find_by_character(&mut *tx, input.character_id)
            .await?
            .is_some()
        {
            return Err(CoreError::Conflict(format!(
                "Character {} already has a secret identity",
                input.character_id
            ))
            .into());
        }

        let query = format!(
            "INSERT INTO secret_identities (real_name, birth_date, place_of_birth, character_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let identity = sqlx::query_as::<_, SecretIdentity>(&query)
            .bind(&input.real_name)
            .bind(input.birth_date)
            .bind(&input.place_of_birth)
            .bind(input.character_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(identity)
    }

    /// Replace every field of a secret identity.
    ///
    /// When the character reference changes, the new character must exist
    /// and must not own a different identity. Keeping the current character
    /// is always allowed. Returns `Ok(None)` if no identity has this `id`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &SecretIdentityInput,
    ) -> Result<Option<SecretIdentity>, RepoError> {
        let mut tx = pool.begin().await?;

        let lock_query = format!("SELECT {COLUMNS} FROM secret_identities WHERE id = $1 FOR UPDATE");
        let Some(current) = sqlx::query_as::<_, SecretIdentity>(&lock_query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        if input.character_id != current.character_id {
            if !CharacterRepo::exists(&mut *tx, input.character_id).await? {
                return Err(CoreError::NotFound {
                    entity: "Character",
                    id: input.character_id,
                }
                .into());
            }
            let owner = Self::find_by_character(&mut *tx, input.character_id).await?;
            if owner.is_some_and(|other| other.id != id) {
                return Err(CoreError::Conflict(format!(
                    "Character {} already has a secret identity",
                    input.character_id
                ))
                .into());
            }
        }

        let query = format!(
            "UPDATE secret_identities SET
                real_name = $2,
                birth_date = $3,
                place_of_birth = $4,
                character_id = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let identity = sqlx::query_as::<_, SecretIdentity>(&query)
            .bind(id)
            .bind(&input.real_name)
            .bind(input.birth_date)
            .bind(&input.place_of_birth)
            .bind(input.character_id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(identity))
    }

    /// Delete a secret identity. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM secret_identities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
