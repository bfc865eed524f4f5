use super::error::ValidationError;

/// Rejects input that is empty once surrounding whitespace is removed.
pub fn validate(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(())
}
