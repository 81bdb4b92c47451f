use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, DatabaseConnection, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect, Set,
};
use tracing::debug;

use crate::domain::{DomainError, DomainResult, Student, StudentRepositoryInterface};
use crate::infrastructure::database::entities::student;

pub struct StudentRepository {
    db: DatabaseConnection,
}

impl StudentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

// ── Conversion helpers ──────────────────────────────────────────

fn student_model_to_domain(model: student::Model) -> Student {
    Student {
        id: model.id,
        name: model.name,
        email: model.email,
        age: model.age,
    }
}

/// Classify a SeaORM error into a domain kind. Anything unrecognized
/// becomes `Database`, wrapping the underlying error text.
fn db_err(e: sea_orm::DbErr) -> DomainError {
    let text = e.to_string();
    if text.contains("UNIQUE") || text.contains("duplicate") {
        DomainError::Duplicate(text)
    } else {
        DomainError::Database(text)
    }
}

// ── Repository implementation ───────────────────────────────────

#[async_trait]
impl StudentRepositoryInterface for StudentRepository {
    async fn create(&self, name: &str, email: &str, age: i32) -> DomainResult<i64> {
        let new_student = student::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            email: Set(email.to_string()),
            age: Set(age),
        };

        let inserted = new_student.insert(&self.db).await.map_err(db_err)?;

        debug!(id = inserted.id, "student row inserted");
        Ok(inserted.id)
    }

    async fn get_by_id(&self, id: i64) -> DomainResult<Student> {
        let model = student::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        match model {
            Some(model) => Ok(student_model_to_domain(model)),
            None => Err(DomainError::NotFound {
                entity: "Student",
                id,
            }),
        }
    }

    async fn list(&self, offset: u64, limit: u64) -> DomainResult<Vec<Student>> {
        let models = student::Entity::find()
            .order_by_asc(student::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(models.into_iter().map(student_model_to_domain).collect())
    }

    async fn count(&self) -> DomainResult<u64> {
        student::Entity::find()
            .count(&self.db)
            .await
            .map_err(db_err)
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::migrator::Migrator;
    use sea_orm::Database;
    use sea_orm_migration::MigratorTrait;

    async fn repo() -> StudentRepository {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        StudentRepository::new(db)
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let repo = repo().await;

        let id = repo.create("Alice", "alice@example.com", 22).await.unwrap();
        assert!(id > 0);

        let student = repo.get_by_id(id).await.unwrap();
        assert_eq!(student.id, id);
        assert_eq!(student.name, "Alice");
        assert_eq!(student.email, "alice@example.com");
        assert_eq!(student.age, 22);
    }

    #[tokio::test]
    async fn create_is_not_idempotent() {
        let repo = repo().await;

        let first = repo.create("Bob", "bob@example.com", 30).await.unwrap();
        let second = repo.create("Bob", "bob@example.com", 30).await.unwrap();
        assert_ne!(first, second);
        assert_eq!(repo.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn get_by_id_reports_not_found() {
        let repo = repo().await;

        let err = repo.get_by_id(9999).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn list_is_ordered_and_empty_page_is_ok() {
        let repo = repo().await;

        for i in 0..5 {
            repo.create(&format!("Student {}", i), "s@example.com", 20 + i)
                .await
                .unwrap();
        }

        let page = repo.list(1, 2).await.unwrap();
        assert_eq!(page.len(), 2);
        assert!(page[0].id < page[1].id);
        assert_eq!(page[0].name, "Student 1");

        // Offset past the end: empty, not an error.
        let beyond = repo.list(100, 10).await.unwrap();
        assert!(beyond.is_empty());

        assert_eq!(repo.count().await.unwrap(), 5);
    }
}
