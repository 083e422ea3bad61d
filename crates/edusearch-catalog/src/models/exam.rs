use super::{Searchable, UNSAVED_ID};
use crate::validation::{validate_name, ValidationError};
use std::fmt;
use std::str::FromStr;

/// Label shown for a type code outside the known set
pub const UNKNOWN_TYPE_LABEL: &str = "Unknown";

/// How an exam is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExamType {
    Selection,
    QuestionAnswer,
    Completion,
}

impl ExamType {
    pub const ALL: [ExamType; 3] = [
        ExamType::Selection,
        ExamType::QuestionAnswer,
        ExamType::Completion,
    ];

    /// Code stored in the `exams.type` column
    pub fn as_str(self) -> &'static str {
        match self {
            ExamType::Selection => "selection",
            ExamType::QuestionAnswer => "question-answer",
            ExamType::Completion => "completion",
        }
    }

    /// Human-readable label used in search results
    pub fn label(self) -> &'static str {
        match self {
            ExamType::Selection => "Selección",
            ExamType::QuestionAnswer => "Pregunta y Respuesta",
            ExamType::Completion => "Completación",
        }
    }

    /// Label for a raw stored code, `"Unknown"` when the code is not recognised
    pub fn label_for_code(code: &str) -> &'static str {
        code.parse::<ExamType>()
            .map(ExamType::label)
            .unwrap_or(UNKNOWN_TYPE_LABEL)
    }
}

impl FromStr for ExamType {
    type Err = ValidationError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        ExamType::ALL
            .into_iter()
            .find(|t| t.as_str() == code)
            .ok_or_else(|| ValidationError::UnknownExamType {
                code: code.to_string(),
            })
    }
}

impl fmt::Display for ExamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An exam of one of the fixed [`ExamType`]s
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exam {
    id: i64,
    name: String,
    exam_type: ExamType,
    created_at: String,
    updated_at: String,
}

impl Exam {
    /// Build an exam from a stored type code, rejecting unknown codes
    pub fn new(id: i64, name: impl Into<String>, type_code: &str) -> Result<Self, ValidationError> {
        Self::with_type(id, name, type_code.parse()?)
    }

    /// Build an exam from an already typed [`ExamType`]
    pub fn with_type(id: i64, name: impl Into<String>, exam_type: ExamType) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_name(&name)?;

        Ok(Self {
            id,
            name,
            exam_type,
            created_at: String::new(),
            updated_at: String::new(),
        })
    }

    /// An exam that has not been saved yet
    pub fn unsaved(name: impl Into<String>, exam_type: ExamType) -> Result<Self, ValidationError> {
        Self::with_type(UNSAVED_ID, name, exam_type)
    }

    /// Attach the storage timestamps, kept verbatim
    pub fn with_timestamps(mut self, created_at: impl Into<String>, updated_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self.updated_at = updated_at.into();
        self
    }

    pub fn exam_type(&self) -> ExamType {
        self.exam_type
    }

    /// Label of this exam's type, e.g. `"Pregunta y Respuesta"`
    pub fn type_label(&self) -> &'static str {
        self.exam_type.label()
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

    pub fn set_exam_type(&mut self, exam_type: ExamType) -> &mut Self {
        self.exam_type = exam_type;
        self
    }

    /// Set the type from a raw code; unknown codes leave the exam unchanged
    pub fn set_exam_type_code(&mut self, code: &str) -> Result<&mut Self, ValidationError> {
        self.exam_type = code.parse()?;
        Ok(self)
    }
}

impl Searchable for Exam {
    fn id(&self) -> i64 {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn kind_label(&self) -> &'static str {
        "Exam"
    }

    fn display(&self) -> String {
        format!("{} | {}", self.name, self.type_label())
    }

    fn created_at(&self) -> &str {
        &self.created_at
    }

    fn updated_at(&self) -> &str {
        &self.updated_at
    }
}
