//! Input rules shared by the models, the repositories and the search service

use thiserror::Error;

/// Minimum keyword length, counted in characters after trimming
pub const MIN_KEYWORD_CHARS: usize = 3;

/// Inclusive bounds for a class weight
pub const MIN_WEIGHT: i64 = 1;
pub const MAX_WEIGHT: i64 = 5;

/// Rule violations, reported back to the caller unchanged
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Keyword must be at least {min} characters long")]
    KeywordTooShort { min: usize },

    #[error("Name is required and cannot be empty")]
    EmptyName,

    #[error("Weight must be between 1 and 5 (got {weight})")]
    WeightOutOfRange { weight: i64 },

    #[error("Exam type must be one of: selection, question-answer, completion (got '{code}')")]
    UnknownExamType { code: String },
}

/// Trim a search keyword and check its length
///
/// Length is counted in Unicode scalar values so that "química" is seven
/// characters, not eight bytes.
pub fn validate_keyword(keyword: &str) -> Result<String, ValidationError> {
    let trimmed = keyword.trim();

    if trimmed.chars().count() < MIN_KEYWORD_CHARS {
        return Err(ValidationError::KeywordTooShort {
            min: MIN_KEYWORD_CHARS,
        });
    }

    Ok(trimmed.to_string())
}

/// Reject names that are empty or whitespace only
pub fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    Ok(())
}

/// Check a class weight and narrow it to its stored width
pub fn validate_weight(weight: i64) -> Result<u8, ValidationError> {
    if !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
        return Err(ValidationError::WeightOutOfRange { weight });
    }
    u8::try_from(weight).map_err(|_| ValidationError::WeightOutOfRange { weight })
}
