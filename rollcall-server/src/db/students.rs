//! Postgres student store
//!
//! Expects the table to exist already:
//!
//! ```sql
//! CREATE TABLE students (
//!     id    BIGSERIAL PRIMARY KEY,
//!     name  TEXT    NOT NULL,
//!     age   INTEGER NOT NULL,
//!     grade TEXT    NOT NULL
//! );
//! ```

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{StoreError, StudentStore};
use crate::models::{Student, StudentFields, StudentId};

/// Student store backed by a Postgres pool
#[derive(Clone)]
pub struct PgStudentStore {
    pool: PgPool,
}

impl PgStudentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StudentStore for PgStudentStore {
    async fn list(&self) -> Result<Vec<Student>, StoreError> {
        let students = sqlx::query_as::<_, Student>("SELECT id, name, age, grade FROM students")
            .fetch_all(&self.pool)
            .await?;

        Ok(students)
    }

    async fn get(&self, id: StudentId) -> Result<Student, StoreError> {
        sqlx::query_as::<_, Student>("SELECT id, name, age, grade FROM students WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::NotFound { id })
    }

    async fn create(&self, fields: StudentFields) -> Result<Student, StoreError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, age, grade)
            VALUES ($1, $2, $3)
            RETURNING id, name, age, grade
            "#,
        )
        .bind(&fields.name)
        .bind(fields.age)
        .bind(&fields.grade)
        .fetch_one(&self.pool)
        .await?;

        Ok(student)
    }

    async fn update(&self, id: StudentId, fields: StudentFields) -> Result<Student, StoreError> {
        // RETURNING yields no row when the id is absent
        sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET name = $1, age = $2, grade = $3
            WHERE id = $4
            RETURNING id, name, age, grade
            "#,
        )
        .bind(&fields.name)
        .bind(fields.age)
        .bind(&fields.grade)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound { id })
    }

    async fn delete(&self, id: StudentId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        tracing::debug!(id, rows = result.rows_affected(), "student delete");
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        super::pool::ping(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p rollcall-server -- --ignored

    async fn store() -> PgStudentStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = PgPool::connect(&url).await.expect("pool creation failed");
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS students (
                id BIGSERIAL PRIMARY KEY,
                name TEXT NOT NULL,
                age INTEGER NOT NULL,
                grade TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await
        .expect("create table failed");
        PgStudentStore::new(pool)
    }

    fn alice() -> StudentFields {
        StudentFields {
            name: "Alice".into(),
            age: 20,
            grade: "A".into(),
        }
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_get() {
        let store = store().await;
        let created = store.create(alice()).await.unwrap();
        let fetched = store.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Alice");

        store.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn delete_then_get_is_not_found() {
        let store = store().await;
        let created = store.create(alice()).await.unwrap();
        store.delete(created.id).await.unwrap();

        let err = store.get(created.id).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { .. }));

        // Second delete of the same id still succeeds
        store.delete(created.id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_missing_writes_nothing() {
        let store = store().await;
        let before = store.list().await.unwrap().len();

        let err = store.update(i64::MAX, alice()).await.unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id } if id == i64::MAX));

        let after = store.list().await.unwrap().len();
        assert_eq!(before, after);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_overwrites_fields() {
        let store = store().await;
        let created = store.create(alice()).await.unwrap();

        let updated = store
            .update(
                created.id,
                StudentFields {
                    name: "Alicia".into(),
                    age: 21,
                    grade: "B".into(),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(store.get(created.id).await.unwrap(), updated);

        store.delete(created.id).await.unwrap();
    }
}
