use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Role;

/// Placeholder values shown until real analytics exist.
pub const PORTFOLIO_VIEWS_PLACEHOLDER: u32 = 1234;
pub const CLIENT_INQUIRIES_PLACEHOLDER: u32 = 5678;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMetrics {
    pub total_projects: usize,
    pub total_skills: usize,
    pub portfolio_views: u32,
    pub client_inquiries: u32,
}

/// One bar of a distribution chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub name: String,
    pub count: usize,
    /// Integer in 0..=100; 0 when the total is 0.
    pub percentage: u32,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub project_distribution: Vec<ChartEntry>,
    pub skill_categories: Vec<ChartEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityStatus {
    Planning,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

/// Icon names understood by the front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityIcon {
    Monitor,
    Smartphone,
    MonitorCheck,
    TabletSmartphone,
    #[serde(rename = "settings-2")]
    Settings2,
    Presentation,
    Play,
}

/// One (project, role) pair in the recent-activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// `<project id>-<ROLE>`
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub role: Role,
    #[serde(rename = "type")]
    pub project_type: String,
    pub status: ActivityStatus,
    pub date: NaiveDate,
    pub icon: ActivityIcon,
    pub progress: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectBreakdown {
    pub web_dev: usize,
    pub mobile_dev: usize,
    pub web_test: usize,
    pub mobile_test: usize,
    pub api_test: usize,
    pub others: usize,
}

/// Overlapping counters: a skill can be counted in several fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillBreakdown {
    pub programming_skills: usize,
    pub testing_skills: usize,
    pub database_skills: usize,
    pub hard_skills: usize,
    pub soft_skills: usize,
    pub both_skills: usize,
    pub others: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemsBreakdown {
    pub project_breakdown: ProjectBreakdown,
    pub skill_breakdown: SkillBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardViewModel {
    pub key_metric_data: KeyMetrics,
    pub chart_data: ChartData,
    pub recent_activities: Vec<Activity>,
    pub items_breakdown: ItemsBreakdown,
}
