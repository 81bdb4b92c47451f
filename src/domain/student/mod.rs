pub mod model;
pub mod repository;

pub use model::Student;
pub use repository::StudentRepositoryInterface;
