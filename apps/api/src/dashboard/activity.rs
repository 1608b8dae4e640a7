//! Recent-activity derivation: one record per (project, role) pair, with
//! status, date and progress resolved from explicit fields or from dates.

use chrono::{DateTime, NaiveDate, Utc};

use crate::dashboard::model::{Activity, ActivityIcon, ActivityStatus};
use crate::format::format_enum_label;
use crate::models::{Project, ProjectRole, ProjectStatus, ProjectType};

/// Where a role sits on the timeline relative to "now", judged from dates only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePhase {
    /// Project end date has passed.
    Completed,
    /// Role start date has passed, project not ended.
    InProgress,
    Planning,
}

impl DatePhase {
    pub fn of(project: &Project, role: &ProjectRole, today: NaiveDate) -> Self {
        match project.end_date {
            Some(end) if end <= today => DatePhase::Completed,
            _ if role.start_date <= today => DatePhase::InProgress,
            _ => DatePhase::Planning,
        }
    }
}

/// Explicit status wins; otherwise the date phase decides.
pub fn resolve_status(role: &ProjectRole, phase: DatePhase) -> ActivityStatus {
    match role.status {
        Some(ProjectStatus::Planning) => ActivityStatus::Planning,
        Some(ProjectStatus::InProgress) => ActivityStatus::InProgress,
        Some(ProjectStatus::Completed) => ActivityStatus::Completed,
        None => match phase {
            DatePhase::Completed => ActivityStatus::Completed,
            DatePhase::InProgress => ActivityStatus::InProgress,
            DatePhase::Planning => ActivityStatus::Planning,
        },
    }
}

/// Activity date, always driven by the date phase even when the status is explicit.
pub fn resolve_date(project: &Project, role: &ProjectRole, phase: DatePhase) -> NaiveDate {
    match (phase, project.end_date) {
        (DatePhase::Completed, Some(end)) => end,
        (DatePhase::InProgress, _) => project
            .updated_at
            .map(|ts| ts.date_naive())
            .unwrap_or(role.start_date),
        _ => role.start_date,
    }
}

pub fn progress_for(status: ActivityStatus) -> u8 {
    match status {
        ActivityStatus::Completed => 100,
        ActivityStatus::InProgress => 75,
        ActivityStatus::Planning => 25,
    }
}

/// Label shown for a role's project type; untyped roles read as "Others".
pub fn type_label(project_type: Option<ProjectType>) -> String {
    match project_type {
        Some(t) => format_enum_label(t.as_str()),
        None => "Others".to_string(),
    }
}

/// Icon lookup keyed by the literal display label, `Play` for anything unmapped.
/// `format_enum_label` renders `API_Testing` as "Api Testing", which is not a
/// key here, so API testing activities get `Play`.
pub fn icon_for_label(label: &str) -> ActivityIcon {
    match label {
        "Web Development" => ActivityIcon::Monitor,
        "Mobile Development" => ActivityIcon::Smartphone,
        "Web Testing" => ActivityIcon::MonitorCheck,
        "Mobile Testing" => ActivityIcon::TabletSmartphone,
        "API Testing" => ActivityIcon::Settings2,
        "Others" => ActivityIcon::Presentation,
        _ => ActivityIcon::Play,
    }
}

/// Flattens every project role into an activity record, newest first,
/// truncated to `limit`. Equal dates keep their input order.
pub fn recent_activities(projects: &[Project], limit: usize, now: DateTime<Utc>) -> Vec<Activity> {
    let today = now.date_naive();

    let mut activities: Vec<Activity> = projects
        .iter()
        .flat_map(|project| {
            project.roles.iter().map(move |role| {
                let phase = DatePhase::of(project, role, today);
                let status = resolve_status(role, phase);
                let label = type_label(role.project_type);
                Activity {
                    id: format!("{}-{}", project.id, role.role.as_str()),
                    project_id: project.id.clone(),
                    title: project.title.clone(),
                    role: role.role,
                    icon: icon_for_label(&label),
                    project_type: label,
                    status,
                    date: resolve_date(project, role, phase),
                    progress: progress_for(status),
                }
            })
        })
        .collect();

    activities.sort_by(|a, b| b.date.cmp(&a.date));
    activities.truncate(limit);
    activities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    fn make_role(role: Role, start: NaiveDate, status: Option<ProjectStatus>) -> ProjectRole {
        ProjectRole {
            id: None,
            role,
            project_type: Some(ProjectType::WebDevelopment),
            status,
            start_date: start,
            skills: vec![],
            tech_stack: vec![],
            achievements: vec![],
        }
    }

    fn make_project(id: &str, end: Option<NaiveDate>, roles: Vec<ProjectRole>) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {id}"),
            description: String::new(),
            image_url: String::new(),
            source_link: String::new(),
            demo_link: String::new(),
            demo_video_link: None,
            asset_id: None,
            end_date: end,
            roles,
            images: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_past_end_date_is_completed() {
        let role = make_role(Role::Developer, date(2024, 1, 1), None);
        let project = make_project("p", Some(date(2024, 12, 1)), vec![role.clone()]);
        let phase = DatePhase::of(&project, &role, now().date_naive());
        assert_eq!(phase, DatePhase::Completed);
        assert_eq!(resolve_status(&role, phase), ActivityStatus::Completed);
        assert_eq!(resolve_date(&project, &role, phase), date(2024, 12, 1));
    }

    #[test]
    fn test_end_date_today_counts_as_completed() {
        let role = make_role(Role::Developer, date(2024, 1, 1), None);
        let project = make_project("p", Some(date(2025, 6, 15)), vec![role.clone()]);
        assert_eq!(
            DatePhase::of(&project, &role, now().date_naive()),
            DatePhase::Completed
        );
    }

    #[test]
    fn test_started_role_is_in_progress_and_prefers_updated_at() {
        let role = make_role(Role::Tester, date(2025, 1, 10), None);
        let mut project = make_project("p", None, vec![role.clone()]);
        let phase = DatePhase::of(&project, &role, now().date_naive());
        assert_eq!(resolve_status(&role, phase), ActivityStatus::InProgress);
        assert_eq!(resolve_date(&project, &role, phase), date(2025, 1, 10));

        project.updated_at = Some(Utc.with_ymd_and_hms(2025, 5, 2, 23, 30, 0).unwrap());
        assert_eq!(resolve_date(&project, &role, phase), date(2025, 5, 2));
    }

    #[test]
    fn test_future_start_is_planning() {
        let role = make_role(Role::ProductManager, date(2025, 9, 1), None);
        let project = make_project("p", Some(date(2026, 1, 1)), vec![role.clone()]);
        let phase = DatePhase::of(&project, &role, now().date_naive());
        assert_eq!(phase, DatePhase::Planning);
        let status = resolve_status(&role, phase);
        assert_eq!(status, ActivityStatus::Planning);
        assert_eq!(progress_for(status), 25);
        assert_eq!(resolve_date(&project, &role, phase), date(2025, 9, 1));
    }

    #[test]
    fn test_explicit_status_overrides_but_date_follows_phase() {
        let role = make_role(Role::Developer, date(2025, 2, 1), Some(ProjectStatus::Completed));
        let project = make_project("p", None, vec![role.clone()]);
        let phase = DatePhase::of(&project, &role, now().date_naive());
        assert_eq!(phase, DatePhase::InProgress);
        assert_eq!(resolve_status(&role, phase), ActivityStatus::Completed);
        assert_eq!(resolve_date(&project, &role, phase), date(2025, 2, 1));
    }

    #[test]
    fn test_progress_mapping() {
        assert_eq!(progress_for(ActivityStatus::Completed), 100);
        assert_eq!(progress_for(ActivityStatus::InProgress), 75);
        assert_eq!(progress_for(ActivityStatus::Planning), 25);
    }

    #[test]
    fn test_icon_lookup_uses_display_labels() {
        assert_eq!(icon_for_label("Web Development"), ActivityIcon::Monitor);
        assert_eq!(icon_for_label("API Testing"), ActivityIcon::Settings2);
        assert_eq!(icon_for_label(&type_label(None)), ActivityIcon::Presentation);
        assert_eq!(icon_for_label("Game Development"), ActivityIcon::Play);
    }

    #[test]
    fn test_api_testing_activity_falls_back_to_play() {
        let label = type_label(Some(ProjectType::ApiTesting));
        assert_eq!(label, "Api Testing");
        assert_eq!(icon_for_label(&label), ActivityIcon::Play);
    }

    #[test]
    fn test_icon_lookup_covers_formatted_types() {
        let icon = |t| icon_for_label(&type_label(Some(t)));
        assert_eq!(icon(ProjectType::WebDevelopment), ActivityIcon::Monitor);
        assert_eq!(icon(ProjectType::MobileDevelopment), ActivityIcon::Smartphone);
        assert_eq!(icon(ProjectType::WebTesting), ActivityIcon::MonitorCheck);
        assert_eq!(icon(ProjectType::MobileTesting), ActivityIcon::TabletSmartphone);
        assert_eq!(icon(ProjectType::Others), ActivityIcon::Presentation);
    }

    #[test]
    fn test_feed_is_sorted_newest_first_and_truncated() {
        let projects = vec![
            make_project(
                "old",
                Some(date(2023, 5, 1)),
                vec![make_role(Role::Developer, date(2023, 1, 1), None)],
            ),
            make_project(
                "multi",
                Some(date(2025, 3, 1)),
                vec![
                    make_role(Role::Developer, date(2024, 1, 1), None),
                    make_role(Role::Tester, date(2024, 2, 1), None),
                ],
            ),
            make_project(
                "future",
                None,
                vec![make_role(Role::ProductManager, date(2026, 1, 1), None)],
            ),
        ];

        let feed = recent_activities(&projects, 3, now());
        assert_eq!(feed.len(), 3);
        assert_eq!(feed[0].id, "future-PRODUCT_MANAGER");
        // Same date for both roles of "multi": input order is kept.
        assert_eq!(feed[1].id, "multi-DEVELOPER");
        assert_eq!(feed[2].id, "multi-TESTER");
        assert!(feed.windows(2).all(|w| w[0].date >= w[1].date));
        assert_eq!(feed[1].project_id, "multi");
    }

    #[test]
    fn test_project_without_roles_yields_no_activity() {
        let projects = vec![make_project("empty", None, vec![])];
        assert!(recent_activities(&projects, 4, now()).is_empty());
    }
}
