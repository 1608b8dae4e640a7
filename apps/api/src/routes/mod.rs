pub mod health;

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::admin::handlers as admin;
use crate::dashboard::handlers as dashboard;
use crate::showcase::handlers as showcase;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Admin dashboard
        .route("/api/v1/dashboard", get(dashboard::handle_dashboard))
        // Public site
        .route("/api/v1/showcase/:token", get(showcase::handle_showcase))
        .route("/api/v1/skills/:id", get(showcase::handle_get_skill))
        .route("/api/v1/projects/:id", get(showcase::handle_get_project))
        .route("/api/v1/history", get(showcase::handle_history))
        .route("/api/v1/about/:tab", get(showcase::handle_about))
        .route("/api/v1/contact", post(admin::handle_contact))
        // Content management (validated and logged, not stored)
        .route("/api/v1/admin/projects", post(admin::handle_upsert_project))
        .route(
            "/api/v1/admin/projects/:id",
            delete(admin::handle_delete_project),
        )
        .route("/api/v1/admin/skills", post(admin::handle_upsert_skill))
        .route(
            "/api/v1/admin/skills/:id",
            delete(admin::handle_delete_skill),
        )
        .route(
            "/api/v1/admin/experience",
            post(admin::handle_upsert_experience),
        )
        .route(
            "/api/v1/admin/experience/:id",
            delete(admin::handle_delete_experience),
        )
        .route(
            "/api/v1/admin/education",
            post(admin::handle_upsert_education),
        )
        .route(
            "/api/v1/admin/education/:id",
            delete(admin::handle_delete_education),
        )
        .route("/api/v1/admin/summary", post(admin::handle_update_summary))
        .with_state(state)
}
