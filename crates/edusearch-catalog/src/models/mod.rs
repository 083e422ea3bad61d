//! Learning resources returned by the keyword search
//!
//! Both kinds share the [`Searchable`] capability; [`Resource`] carries either
//! one through the search pipeline without losing its concrete type.

mod class;
mod exam;

pub use class::Class;
pub use exam::{Exam, ExamType};

use std::fmt;

/// Identifier of a resource that has not been stored yet
pub const UNSAVED_ID: i64 = 0;

/// What every searchable resource exposes
pub trait Searchable {
    /// Database identifier, [`UNSAVED_ID`] before the first save
    fn id(&self) -> i64;

    fn name(&self) -> &str;

    /// Category shown in front of each search result
    fn kind_label(&self) -> &'static str;

    /// One-line rendering: `"<name> | <kind-specific detail>"`
    fn display(&self) -> String;

    fn created_at(&self) -> &str;

    fn updated_at(&self) -> &str;
}

/// A search hit of either kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Class(Class),
    Exam(Exam),
}

impl Resource {
    fn inner(&self) -> &dyn Searchable {
        match self {
            Resource::Class(class) => class,
            Resource::Exam(exam) => exam,
        }
    }
}

impl Searchable for Resource {
    fn id(&self) -> i64 {
        self.inner().id()
    }

    fn name(&self) -> &str {
        self.inner().name()
    }

    fn kind_label(&self) -> &'static str {
        self.inner().kind_label()
    }

    fn display(&self) -> String {
        self.inner().display()
    }

    fn created_at(&self) -> &str {
        self.inner().created_at()
    }

    fn updated_at(&self) -> &str {
        self.inner().updated_at()
    }
}

/// Formats a search result line: `"<kind>: <display>"`
impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind_label(), self.display())
    }
}

impl From<Class> for Resource {
    fn from(class: Class) -> Self {
        Resource::Class(class)
    }
}

impl From<Exam> for Resource {
    fn from(exam: Exam) -> Self {
        Resource::Exam(exam)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_delegates_to_variant() {
        let class: Resource = Class::new(7, "Vocabulario sobre Trabajo", 5).unwrap().into();
        assert_eq!(class.id(), 7);
        assert_eq!(class.name(), "Vocabulario sobre Trabajo");
        assert_eq!(class.kind_label(), "Class");
        assert_eq!(class.display(), "Vocabulario sobre Trabajo | 5/5");

        let exam: Resource = Exam::new(2, "Examen de Trabajo", "selection").unwrap().into();
        assert_eq!(exam.kind_label(), "Exam");
        assert_eq!(exam.display(), "Examen de Trabajo | Selección");
    }

    #[test]
    fn test_resource_line_format() {
        let class: Resource = Class::new(1, "Clase de Prueba", 4).unwrap().into();
        assert_eq!(class.to_string(), "Class: Clase de Prueba | 4/5");

        let exam: Resource = Exam::with_type(1, "Examen Final", ExamType::Completion)
            .unwrap()
            .into();
        assert_eq!(exam.to_string(), "Exam: Examen Final | Completación");
    }

    #[test]
    fn test_timestamps_pass_through_untouched() {
        let class: Resource = Class::new(1, "Clase", 3)
            .unwrap()
            .with_timestamps("2024-01-01 10:00:00", "not a date")
            .into();
        assert_eq!(class.created_at(), "2024-01-01 10:00:00");
        assert_eq!(class.updated_at(), "not a date");
    }
}
