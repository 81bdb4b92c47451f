use async_trait::async_trait;

use super::Student;
use crate::domain::DomainResult;

/// Storage gateway for student records.
///
/// `list` and `count` are independent reads with no cross-call snapshot
/// guarantee. An empty page from `list` is a normal outcome, not
/// `NotFound` — that kind is reserved for single-record lookups.
#[async_trait]
pub trait StudentRepositoryInterface: Send + Sync {
    /// Insert a new row and return the assigned identifier.
    /// Not idempotent: identical arguments create distinct records.
    async fn create(&self, name: &str, email: &str, age: i32) -> DomainResult<i64>;

    async fn get_by_id(&self, id: i64) -> DomainResult<Student>;

    /// Rows ordered by id ascending (insertion order).
    async fn list(&self, offset: u64, limit: u64) -> DomainResult<Vec<Student>>;

    async fn count(&self) -> DomainResult<u64>;
}
