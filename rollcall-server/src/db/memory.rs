//! In-memory student store for testing
//!
//! Mirrors the Postgres semantics: ids start at 1 and are never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::store::{StoreError, StudentStore};
use crate::models::{Student, StudentFields, StudentId};

#[derive(Default)]
struct Table {
    rows: BTreeMap<StudentId, Student>,
    last_id: StudentId,
}

/// Student store kept in process memory
#[derive(Default)]
pub struct MemoryStudentStore {
    table: RwLock<Table>,
}

impl MemoryStudentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored students
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl StudentStore for MemoryStudentStore {
    async fn list(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn get(&self, id: StudentId) -> Result<Student, StoreError> {
        self.table
            .read()
            .await
            .rows
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, fields: StudentFields) -> Result<Student, StoreError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let student = fields.with_id(table.last_id);
        table.rows.insert(student.id, student.clone());
        Ok(student)
    }

    async fn update(&self, id: StudentId, fields: StudentFields) -> Result<Student, StoreError> {
        let mut table = self.table.write().await;
        let row = table.rows.get_mut(&id).ok_or(StoreError::NotFound { id })?;
        *row = fields.with_id(id);
        Ok(row.clone())
    }

    async fn delete(&self, id: StudentId) -> Result<(), StoreError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }
}
