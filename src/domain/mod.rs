//! Domain layer: entities, error kinds and repository traits.

pub mod error;
pub mod student;

pub use error::{DomainError, DomainResult};
pub use student::{Student, StudentRepositoryInterface};
