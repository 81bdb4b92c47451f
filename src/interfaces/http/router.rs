//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::domain::StudentRepositoryInterface;
use crate::interfaces::http::common::response::ErrorResponse;
use crate::interfaces::http::modules::health;
use crate::interfaces::http::modules::students::{
    dto::{CreateStudentRequest, CreateStudentResponse, StudentDto},
    handlers as students,
    handlers::StudentHandlerState,
};
use crate::shared::types::PaginatedResult;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Students API",
        description = "Minimal REST service for student records over embedded SQLite"
    ),
    paths(
        students::create_student,
        students::get_student,
        students::list_students,
        health::handlers::health_check,
    ),
    components(schemas(
        CreateStudentRequest,
        CreateStudentResponse,
        StudentDto,
        PaginatedResult<StudentDto>,
        ErrorResponse,
        health::handlers::HealthResponse,
    )),
    tags(
        (name = "Students", description = "Student record management"),
        (name = "Health", description = "Service health")
    )
)]
struct ApiDoc;

/// Build the application router.
///
/// The repository is passed in explicitly — the router owns no storage
/// and tests substitute an in-memory fake.
pub fn create_api_router(students: Arc<dyn StudentRepositoryInterface>) -> Router {
    let state = StudentHandlerState { students };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route(
            "/students",
            post(students::create_student).get(students::list_students),
        )
        .route("/students/{id}", get(students::get_student))
        .route("/health", get(health::handlers::health_check))
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Per-request timeout layer; requests exceeding it answer 408.
///
/// Applied around the whole router at startup with the configured
/// `server.timeout_secs`.
pub fn request_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::new(timeout)
}
