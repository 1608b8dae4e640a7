//! Axum route handlers for the public site.

use std::time::Instant;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{Project, Skill, SummaryKind};
use crate::showcase::carousel::{
    CarouselController, CarouselState, PageDirection, ScrollWrite, WindowSlot,
    FALLBACK_VIEWPORT_WIDTH_PX, SCROLL_DEBOUNCE,
};
use crate::showcase::display::{
    current_proficiency, project_skill_display, related_projects, skill_title, skill_usage_share,
    SkillDisplayItem, SkillDisplayKind,
};
use crate::showcase::profile::{about_statement, history_timeline, TimelineEntry};
use crate::showcase::role_filter::ALL_TOKEN;
use crate::showcase::{filter_by_role, RoleScope};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ShowcaseQuery {
    pub viewport_width: Option<f64>,
    /// Last scroll offsets reported by the client, if any.
    pub skills_offset: Option<f64>,
    pub projects_offset: Option<f64>,
    /// Page command for either carousel, applied after the offset settles.
    pub skills_page: Option<PageDirection>,
    pub projects_page: Option<PageDirection>,
}

#[derive(Debug, Serialize)]
pub struct CarouselFrame {
    pub item_count: usize,
    pub item_width: f64,
    pub one_set_width: f64,
    pub state: CarouselState,
    pub offset: f64,
    pub show_back: bool,
    /// Correction to apply when the reported offset left the safe zone.
    pub snap: Option<ScrollWrite>,
    /// Smooth scroll for a requested page command.
    pub page: Option<ScrollWrite>,
    pub window: Vec<WindowSlot>,
}

#[derive(Debug, Serialize)]
pub struct ProjectCard {
    #[serde(flatten)]
    pub project: Project,
    pub skill_display: Vec<SkillDisplayItem>,
}

#[derive(Debug, Serialize)]
pub struct ShowcaseResponse {
    pub token: String,
    pub visible: bool,
    pub display_role: &'static str,
    pub skills: Vec<Skill>,
    pub projects: Vec<ProjectCard>,
    pub skills_carousel: Option<CarouselFrame>,
    pub projects_carousel: Option<CarouselFrame>,
}

#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    pub role: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillDetailResponse {
    pub skill: Skill,
    pub display_role: &'static str,
    pub related_projects: Vec<Project>,
    /// Share of the role's projects that use this skill.
    pub usage_share: u32,
}

#[derive(Debug, Serialize)]
pub struct UsageView {
    pub skill_id: String,
    pub title: String,
    pub kind: SkillDisplayKind,
    pub usage_level: u32,
    pub proficiency: &'static str,
}

#[derive(Debug, Serialize)]
pub struct ProjectDetailResponse {
    pub project: Project,
    pub display_role: &'static str,
    pub skill_display: Vec<SkillDisplayItem>,
    pub usages: Vec<UsageView>,
}

#[derive(Debug, Serialize)]
pub struct AboutResponse {
    pub tab: SummaryKind,
    pub statement: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/showcase/:token
///
/// Role-filtered skills and projects plus the carousel frame for each list.
/// The "default" token answers `visible: false` with empty lists.
pub async fn handle_showcase(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Query(query): Query<ShowcaseQuery>,
) -> Result<Json<ShowcaseResponse>, AppError> {
    let snapshot = state.source.snapshot().await?;
    let content = filter_by_role(&token, &snapshot.skills, &snapshot.projects);
    let scope = RoleScope::from_token(&token);
    let viewport = query.viewport_width.unwrap_or(FALLBACK_VIEWPORT_WIDTH_PX);

    let (skills_carousel, projects_carousel) = if content.visible {
        (
            Some(carousel_frame(
                content.skills.len(),
                viewport,
                query.skills_offset,
                query.skills_page,
            )),
            Some(carousel_frame(
                content.projects.len(),
                viewport,
                query.projects_offset,
                query.projects_page,
            )),
        )
    } else {
        (None, None)
    };

    let projects = content
        .projects
        .iter()
        .map(|&project| ProjectCard {
            project: project.clone(),
            skill_display: project_skill_display(project, &snapshot.skills, scope),
        })
        .collect();

    Ok(Json(ShowcaseResponse {
        visible: content.visible,
        display_role: scope.as_str(),
        skills: content.skills.into_iter().cloned().collect(),
        projects,
        skills_carousel,
        projects_carousel,
        token,
    }))
}

/// GET /api/v1/skills/:id
pub async fn handle_get_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<RoleQuery>,
) -> Result<Json<SkillDetailResponse>, AppError> {
    let skill = state
        .source
        .fetch_skill(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Skill {id} not found")))?;
    let snapshot = state.source.snapshot().await?;

    let scope = RoleScope::from_token(query.role.as_deref().unwrap_or(ALL_TOKEN));
    let role_projects: Vec<&Project> = snapshot
        .projects
        .iter()
        .filter(|p| match scope {
            RoleScope::All => true,
            RoleScope::Only(role) => p.has_role(role),
        })
        .collect();
    let using = role_projects.iter().filter(|p| p.uses_skill(&skill.id)).count();

    Ok(Json(SkillDetailResponse {
        related_projects: related_projects(&skill.id, &snapshot.projects)
            .into_iter()
            .cloned()
            .collect(),
        usage_share: skill_usage_share(using, role_projects.len()),
        display_role: scope.as_str(),
        skill,
    }))
}

/// GET /api/v1/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<RoleQuery>,
) -> Result<Json<ProjectDetailResponse>, AppError> {
    let project = state
        .source
        .fetch_project(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))?;
    let snapshot = state.source.snapshot().await?;

    let scope = RoleScope::from_token(query.role.as_deref().unwrap_or(ALL_TOKEN));
    let usages = project
        .roles
        .iter()
        .filter(|r| scope.roles().contains(&r.role))
        .flat_map(|r| {
            let used = r.skills.iter().map(|u| (u, SkillDisplayKind::Skills));
            let stack = r.tech_stack.iter().map(|u| (u, SkillDisplayKind::Techstack));
            used.chain(stack)
        })
        .map(|(u, kind)| UsageView {
            skill_id: u.skill_id.clone(),
            title: skill_title(&u.skill_id, &snapshot.skills),
            kind,
            usage_level: u.usage_level,
            proficiency: current_proficiency(u.usage_level).label,
        })
        .collect();

    Ok(Json(ProjectDetailResponse {
        skill_display: project_skill_display(&project, &snapshot.skills, scope),
        display_role: scope.as_str(),
        usages,
        project,
    }))
}

/// GET /api/v1/history
pub async fn handle_history(
    State(state): State<AppState>,
) -> Result<Json<Vec<TimelineEntry>>, AppError> {
    let snapshot = state.source.snapshot().await?;
    Ok(Json(history_timeline(&snapshot.experience, &snapshot.education)))
}

/// GET /api/v1/about/:tab
pub async fn handle_about(
    State(state): State<AppState>,
    Path(tab): Path<String>,
) -> Result<Json<AboutResponse>, AppError> {
    let kind = SummaryKind::from_tab(&tab)
        .ok_or_else(|| AppError::Validation(format!("Unknown about tab '{tab}'")))?;
    let snapshot = state.source.snapshot().await?;

    Ok(Json(AboutResponse {
        tab: kind,
        statement: about_statement(kind, &snapshot.summaries),
    }))
}

/// Mounts a controller for the list and, when the client reported an offset,
/// runs it through one settled scroll so any boundary snap is returned.
fn carousel_frame(
    len: usize,
    viewport_width: f64,
    reported_offset: Option<f64>,
    page: Option<PageDirection>,
) -> CarouselFrame {
    let mut controller = CarouselController::new(len, viewport_width);
    controller.mount();

    let snap = reported_offset.and_then(|offset| {
        let now = Instant::now();
        controller.on_scroll(offset, now);
        controller.poll(now + SCROLL_DEBOUNCE)
    });
    let page = page.and_then(|direction| controller.page(direction));

    CarouselFrame {
        item_count: controller.len(),
        item_width: controller.item_width(),
        one_set_width: controller.one_set_width(),
        state: controller.state(),
        offset: controller.offset(),
        show_back: controller.show_back(),
        snap,
        page,
        window: controller.visible_window(viewport_width),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_for_empty_list_has_no_window() {
        let frame = carousel_frame(0, 1280.0, Some(400.0), Some(PageDirection::Right));
        assert_eq!(frame.item_count, 0);
        assert_eq!(frame.offset, 0.0);
        assert!(frame.snap.is_none());
        assert!(frame.page.is_none());
        assert!(frame.window.is_empty());
        assert_eq!(frame.state, CarouselState::Uninitialized);
    }

    #[test]
    fn test_frame_reports_snap_for_deep_offset() {
        let frame = carousel_frame(4, 1280.0, Some(frame_one_set(4) * 2.9), None);
        match frame.snap {
            Some(ScrollWrite::Jump(px)) => {
                assert!((px - frame.one_set_width * 1.9).abs() < 1e-6);
            }
            other => panic!("expected a jump, got {other:?}"),
        }
        assert_eq!(frame.state, CarouselState::Repositioning);
    }

    #[test]
    fn test_frame_without_offset_is_anchored() {
        let frame = carousel_frame(4, 1280.0, None, None);
        assert_eq!(frame.offset, frame.one_set_width);
        assert!(frame.page.is_none());
        assert_eq!(frame.state, CarouselState::Positioned);
        assert_eq!(frame.window.first().map(|s| s.item_index), Some(0));
    }

    #[test]
    fn test_frame_page_right_reveals_back_control() {
        let frame = carousel_frame(6, 1280.0, None, Some(PageDirection::Right));
        match frame.page {
            Some(ScrollWrite::SmoothBy(px)) => assert!((px - frame.item_width * 5.0).abs() < 1e-9),
            other => panic!("expected a smooth scroll, got {other:?}"),
        }
        assert!(frame.show_back);
    }

    fn frame_one_set(len: usize) -> f64 {
        CarouselController::new(len, 1280.0).one_set_width()
    }
}
