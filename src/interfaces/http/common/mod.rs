pub mod response;
pub mod validated_json;

pub use response::{ApiError, ErrorResponse};
pub use validated_json::ValidatedJson;
