//! Content-management endpoints. Submissions are validated and logged; nothing
//! is persisted, so every write is acknowledged with `202 Accepted`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::admin::validation::{ContactForm, ProjectForm, SkillForm, Validate};
use crate::errors::AppError;
use crate::models::{Education, Experience, PortfolioSnapshot, Summary};
use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminAction {
    Created,
    Updated,
    Deleted,
}

#[derive(Debug, Serialize)]
pub struct AdminAck {
    pub resource: &'static str,
    pub id: String,
    pub action: AdminAction,
}

#[derive(Debug, Serialize)]
pub struct ContactAck {
    pub id: String,
    pub status: &'static str,
}

type Accepted<T> = Result<(StatusCode, Json<T>), AppError>;

/// Resolves create vs. update from the submitted id and logs the outcome.
fn accept_upsert(resource: &'static str, id: Option<&str>) -> Accepted<AdminAck> {
    let (id, action) = match id.filter(|id| !id.trim().is_empty()) {
        Some(id) => (id.to_string(), AdminAction::Updated),
        None => (Uuid::new_v4().to_string(), AdminAction::Created),
    };
    info!("Accepted {resource} {action:?}: {id}");
    Ok((StatusCode::ACCEPTED, Json(AdminAck { resource, id, action })))
}

/// POST /api/v1/admin/projects
pub async fn handle_upsert_project(Json(form): Json<ProjectForm>) -> Accepted<AdminAck> {
    form.validate()?;
    accept_upsert("project", form.id.as_deref())
}

/// POST /api/v1/admin/skills
pub async fn handle_upsert_skill(Json(form): Json<SkillForm>) -> Accepted<AdminAck> {
    form.validate()?;
    accept_upsert("skill", form.id.as_deref())
}

/// POST /api/v1/admin/experience
pub async fn handle_upsert_experience(Json(form): Json<Experience>) -> Accepted<AdminAck> {
    form.validate()?;
    accept_upsert("experience", form.id.as_deref())
}

/// POST /api/v1/admin/education
pub async fn handle_upsert_education(Json(form): Json<Education>) -> Accepted<AdminAck> {
    form.validate()?;
    accept_upsert("education", form.id.as_deref())
}

/// POST /api/v1/admin/summary
///
/// Summaries are keyed by their tab, so this is always an update.
pub async fn handle_update_summary(Json(form): Json<Summary>) -> Accepted<AdminAck> {
    form.validate()?;
    let id = form
        .id
        .clone()
        .unwrap_or_else(|| format!("{:?}", form.kind).to_lowercase());
    info!("Accepted summary update for {:?}", form.kind);
    Ok((
        StatusCode::ACCEPTED,
        Json(AdminAck {
            resource: "summary",
            id,
            action: AdminAction::Updated,
        }),
    ))
}

/// Acknowledges a delete of an item that exists in the loaded snapshot.
async fn accept_delete(
    state: &AppState,
    resource: &'static str,
    id: String,
    exists: fn(&PortfolioSnapshot, &str) -> bool,
) -> Accepted<AdminAck> {
    let snapshot = state.source.snapshot().await?;
    if !exists(&snapshot, &id) {
        return Err(AppError::NotFound(format!("{resource} {id} not found")));
    }
    info!("Accepted {resource} delete: {id}");
    Ok((
        StatusCode::ACCEPTED,
        Json(AdminAck {
            resource,
            id,
            action: AdminAction::Deleted,
        }),
    ))
}

/// DELETE /api/v1/admin/projects/:id
pub async fn handle_delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Accepted<AdminAck> {
    accept_delete(&state, "project", id, |s, id| {
        s.projects.iter().any(|p| p.id == id)
    })
    .await
}

/// DELETE /api/v1/admin/skills/:id
pub async fn handle_delete_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Accepted<AdminAck> {
    accept_delete(&state, "skill", id, |s, id| s.skills.iter().any(|k| k.id == id)).await
}

/// DELETE /api/v1/admin/experience/:id
pub async fn handle_delete_experience(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Accepted<AdminAck> {
    accept_delete(&state, "experience", id, |s, id| {
        s.experience.iter().any(|e| e.id.as_deref() == Some(id))
    })
    .await
}

/// DELETE /api/v1/admin/education/:id
pub async fn handle_delete_education(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Accepted<AdminAck> {
    accept_delete(&state, "education", id, |s, id| {
        s.education.iter().any(|e| e.id.as_deref() == Some(id))
    })
    .await
}

/// POST /api/v1/contact
pub async fn handle_contact(Json(form): Json<ContactForm>) -> Accepted<ContactAck> {
    form.validate()?;
    let id = Uuid::new_v4().to_string();
    info!("Contact message {id} from {} <{}>: {}", form.name, form.email, form.subject);
    Ok((
        StatusCode::ACCEPTED,
        Json(ContactAck {
            id,
            status: "received",
        }),
    ))
}
