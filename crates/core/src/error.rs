use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display_names_entity_and_id() {
        let err = CoreError::NotFound {
            entity: "Character",
            id: 42,
        };
        assert_eq!(err.to_string(), "Entity not found: Character with id 42");
    }

    #[test]
    fn conflict_display_carries_message() {
        let err = CoreError::Conflict("Relation already exists".into());
        assert_eq!(err.to_string(), "Conflict: Relation already exists");
    }
}
