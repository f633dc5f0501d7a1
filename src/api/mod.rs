mod handlers;

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::service::GradebookService;

pub fn create_router(service: GradebookService) -> Router {
    let api = Router::new()
        // Students
        .route("/students", get(handlers::list_students))
        .route("/students", post(handlers::create_student))
        .route("/students/{id}", get(handlers::student_detail))
        .route("/students/{id}", delete(handlers::delete_student))
        // Grades
        .route("/grades", post(handlers::create_grade))
        .route("/grades/{subject}/{id}", delete(handlers::delete_grade))
        // Health
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(service)
}
