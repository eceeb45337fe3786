//! Student store trait
//!
//! Handlers only see this trait. `PgStudentStore` is the real backend;
//! `MemoryStudentStore` stands in for it in tests.

use async_trait::async_trait;

use crate::models::{Student, StudentFields, StudentId};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("student '{id}' not found")]
    NotFound { id: StudentId },
}

/// CRUD operations over the students table
#[async_trait]
pub trait StudentStore: Send + Sync {
    /// All students, in whatever order the store yields them.
    async fn list(&self) -> Result<Vec<Student>, StoreError>;

    async fn get(&self, id: StudentId) -> Result<Student, StoreError>;

    /// Insert a new student; the store assigns the id.
    async fn create(&self, fields: StudentFields) -> Result<Student, StoreError>;

    /// Overwrite every field of an existing student.
    ///
    /// Returns `NotFound` without writing anything if no row matches.
    async fn update(&self, id: StudentId, fields: StudentFields) -> Result<Student, StoreError>;

    /// Remove a student. Succeeds whether or not the row existed.
    async fn delete(&self, id: StudentId) -> Result<(), StoreError>;

    /// Check that the backing store is reachable.
    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
