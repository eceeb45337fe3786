//! Student record and request body

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Server-assigned student identifier (`BIGSERIAL`)
pub type StudentId = i64;

/// Student record as stored and as returned over HTTP
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: i32,
    pub grade: String,
}

/// Mutable fields of a student, used for create and update.
///
/// An `id` in the body is ignored; the server owns identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentFields {
    pub name: String,
    pub age: i32,
    pub grade: String,
}

impl StudentFields {
    /// Attach an identifier, producing a full record.
    pub fn with_id(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
            grade: self.grade,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn student_json_shape() {
        let student = Student {
            id: 1,
            name: "Alice".into(),
            age: 20,
            grade: "A".into(),
        };
        let value = serde_json::to_value(&student).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"id": 1, "name": "Alice", "age": 20, "grade": "A"})
        );
    }

    #[test]
    fn fields_ignore_supplied_id() {
        let fields: StudentFields =
            serde_json::from_str(r#"{"id": 99, "name": "Bob", "age": 19, "grade": "B"}"#)
                .unwrap();
        assert_eq!(fields.with_id(3).id, 3);
    }

    #[test]
    fn fields_reject_wrong_types() {
        let result: Result<StudentFields, _> =
            serde_json::from_str(r#"{"name": "Bob", "age": "nineteen", "grade": "B"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn fields_require_all_members() {
        let result: Result<StudentFields, _> = serde_json::from_str(r#"{"name": "Bob"}"#);
        assert!(result.is_err());
    }
}
