//! Input-shape validation shared by every write path.
//!
//! Input DTOs derive [`validator::Validate`]; handlers call
//! [`validate_input`] before anything reaches the repository layer.

use validator::Validate;

use crate::error::CoreError;

/// Validate an input DTO, converting failures into [`CoreError::Validation`].
pub fn validate_input<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(errors.to_string()))
}
