use super::{Searchable, UNSAVED_ID};
use crate::validation::{validate_name, validate_weight, ValidationError, MAX_WEIGHT};

/// A class with an importance weight between 1 and 5
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    id: i64,
    name: String,
    weight: u8,
    created_at: String,
    updated_at: String,
}

impl Class {
    /// Build a class, rejecting an empty name or a weight outside 1..=5
    pub fn new(id: i64, name: impl Into<String>, weight: i64) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        let weight = validate_weight(weight)?;

        Ok(Self {
            id,
            name,
            weight,
            created_at: String::new(),
            updated_at: String::new(),
        })
    }

    /// A class that has not been saved yet
    pub fn unsaved(name: impl Into<String>, weight: i64) -> Result<Self, ValidationError> {
        Self::new(UNSAVED_ID, name, weight)
    }

    /// Attach the storage timestamps, kept verbatim
    pub fn with_timestamps(mut self, created_at: impl Into<String>, updated_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self.updated_at = updated_at.into();
        self
    }

    pub fn weight(&self) -> u8 {
        self.weight
    }

    pub fn is_new(&self) -> bool {
        self.id == UNSAVED_ID
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> Result<&mut Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(self)
    }

    pub fn set_weight(&mut self, weight: i64) -> Result<&mut Self, ValidationError> {
        self.weight = validate_weight(weight)?;
        Ok(self)
    }
}

impl Searchable for Class {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind_label(&self) -> &'static str {
        "Class"
    }

    fn display(&self) -> String {
        format!("{} | {}/{}", self.name, self.weight, MAX_WEIGHT)
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }
}
