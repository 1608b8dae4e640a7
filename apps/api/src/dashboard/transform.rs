//! Dashboard view-model assembly.
//!
//! Distribution and breakdown counters are "at least one matches" counts, so
//! buckets overlap: a project with a web and an API testing role is counted in
//! both, and a skill can be both "programming" and "hard".

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::dashboard::activity::recent_activities;
use crate::dashboard::model::{
    ChartData, ChartEntry, DashboardViewModel, ItemsBreakdown, KeyMetrics, ProjectBreakdown,
    SkillBreakdown, CLIENT_INQUIRIES_PLACEHOLDER, PORTFOLIO_VIEWS_PLACEHOLDER,
};
use crate::format::format_enum_label;
use crate::models::{Project, ProjectType, Skill, SkillCategory, SkillType};

pub const DEFAULT_RECENT_LIMIT: usize = 4;

const DEFAULT_COLOR: &str = "from-gray-500 to-gray-600";

/// Skill chart buckets. "Framework" is a union of Frontend and Backend and
/// "Others" catches anything outside the six core categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SkillBucket {
    ProgrammingLanguage,
    Framework,
    Database,
    Testing,
    CoreCompetencies,
    Others,
}

impl SkillBucket {
    const ORDERED: [SkillBucket; 6] = [
        SkillBucket::ProgrammingLanguage,
        SkillBucket::Framework,
        SkillBucket::Database,
        SkillBucket::Testing,
        SkillBucket::CoreCompetencies,
        SkillBucket::Others,
    ];

    /// Raw category key, also the color lookup key.
    fn key(&self) -> &'static str {
        match self {
            SkillBucket::ProgrammingLanguage => "Programming_Language",
            SkillBucket::Framework => "Framework",
            SkillBucket::Database => "Database",
            SkillBucket::Testing => "Testing",
            SkillBucket::CoreCompetencies => "Core_Competencies",
            SkillBucket::Others => "Others",
        }
    }

    fn name(&self) -> &'static str {
        match self {
            SkillBucket::ProgrammingLanguage => "Programming Language",
            SkillBucket::Framework => "Framework",
            SkillBucket::Database => "Database",
            SkillBucket::Testing => "Testing",
            SkillBucket::CoreCompetencies => "Core Competencies",
            SkillBucket::Others => "Others",
        }
    }

    fn contains(&self, skill: &Skill) -> bool {
        match self {
            SkillBucket::ProgrammingLanguage => {
                skill.in_category(SkillCategory::ProgrammingLanguage)
            }
            SkillBucket::Framework => {
                skill.in_category(SkillCategory::Frontend)
                    || skill.in_category(SkillCategory::Backend)
            }
            SkillBucket::Database => skill.in_category(SkillCategory::Database),
            SkillBucket::Testing => skill.in_category(SkillCategory::Testing),
            SkillBucket::CoreCompetencies => skill.in_category(SkillCategory::CoreCompetencies),
            SkillBucket::Others => skill.is_uncategorised(),
        }
    }
}

/// Builds the dashboard view model as of the current wall clock.
pub fn transform_dashboard_data(
    projects: &[Project],
    skills: &[Skill],
    recent_limit: usize,
) -> DashboardViewModel {
    transform_dashboard_data_at(projects, skills, recent_limit, Utc::now())
}

/// Same as [`transform_dashboard_data`] with an explicit "now".
pub fn transform_dashboard_data_at(
    projects: &[Project],
    skills: &[Skill],
    recent_limit: usize,
    now: DateTime<Utc>,
) -> DashboardViewModel {
    let total_projects = projects.len();
    let total_skills = skills.len();

    debug!(
        total_projects,
        total_skills, recent_limit, "Rebuilding dashboard view model"
    );

    let project_distribution = ProjectType::ORDERED
        .iter()
        .map(|&project_type| {
            let count = count_projects_of_type(projects, project_type);
            let name = format_enum_label(project_type.as_str());
            ChartEntry {
                color: project_type_color(&name).to_string(),
                name,
                count,
                percentage: percentage(count, total_projects),
            }
        })
        .collect();

    let skill_categories = SkillBucket::ORDERED
        .iter()
        .map(|bucket| {
            let count = skills.iter().filter(|s| bucket.contains(s)).count();
            ChartEntry {
                name: bucket.name().to_string(),
                count,
                percentage: percentage(count, total_skills),
                color: skill_category_color(bucket.key()).to_string(),
            }
        })
        .collect();

    DashboardViewModel {
        key_metric_data: KeyMetrics {
            total_projects,
            total_skills,
            portfolio_views: PORTFOLIO_VIEWS_PLACEHOLDER,
            client_inquiries: CLIENT_INQUIRIES_PLACEHOLDER,
        },
        chart_data: ChartData {
            project_distribution,
            skill_categories,
        },
        recent_activities: recent_activities(projects, recent_limit, now),
        items_breakdown: ItemsBreakdown {
            project_breakdown: project_breakdown(projects),
            skill_breakdown: skill_breakdown(skills),
        },
    }
}

/// `round(count / total * 100)`, 0 for an empty total.
pub fn percentage(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((count as f64 / total as f64) * 100.0).round() as u32
}

fn count_projects_of_type(projects: &[Project], project_type: ProjectType) -> usize {
    projects.iter().filter(|p| p.has_type(project_type)).count()
}

fn project_breakdown(projects: &[Project]) -> ProjectBreakdown {
    ProjectBreakdown {
        web_dev: count_projects_of_type(projects, ProjectType::WebDevelopment),
        mobile_dev: count_projects_of_type(projects, ProjectType::MobileDevelopment),
        web_test: count_projects_of_type(projects, ProjectType::WebTesting),
        mobile_test: count_projects_of_type(projects, ProjectType::MobileTesting),
        api_test: count_projects_of_type(projects, ProjectType::ApiTesting),
        others: count_projects_of_type(projects, ProjectType::Others),
    }
}

fn skill_breakdown(skills: &[Skill]) -> SkillBreakdown {
    let count = |pred: &dyn Fn(&Skill) -> bool| skills.iter().filter(|s| pred(s)).count();

    SkillBreakdown {
        programming_skills: count(&|s| {
            s.in_category(SkillCategory::ProgrammingLanguage)
                || s.in_category(SkillCategory::Frontend)
                || s.in_category(SkillCategory::Backend)
        }),
        testing_skills: count(&|s| s.in_category(SkillCategory::Testing)),
        database_skills: count(&|s| s.in_category(SkillCategory::Database)),
        hard_skills: count(&|s| s.skill_type == SkillType::Hard),
        soft_skills: count(&|s| s.skill_type == SkillType::Soft),
        both_skills: count(&|s| s.skill_type == SkillType::Both),
        others: count(&|s| s.is_uncategorised()),
    }
}

/// Keyed by display label. "Api Testing" (the formatted `API_Testing`) is not
/// a key and gets the default.
fn project_type_color(label: &str) -> &'static str {
    match label {
        "Web Development" => "from-red-500 to-red-600",
        "Mobile Development" => "from-orange-500 to-red-500",
        "Web Testing" => "from-purple-500 to-red-500",
        "Mobile Testing" => "from-pink-500 to-red-500",
        "API Testing" => "from-blue-500 to-red-500",
        "Others" => "from-gray-500 to-red-500",
        _ => DEFAULT_COLOR,
    }
}

/// Keyed by display name but called with the raw bucket key, so only
/// Database and Testing find a color.
fn skill_category_color(category: &str) -> &'static str {
    match category {
        "Programming Language" => "from-blue-500 to-blue-600",
        "Frontend" => "from-indigo-500 to-indigo-600",
        "Backend" => "from-purple-500 to-purple-600",
        "Database" => "from-pink-500 to-pink-600",
        "Testing" => "from-red-500 to-red-600",
        "Cloud & Devops" => "from-orange-500 to-orange-600",
        "Practices" => "from-yellow-500 to-yellow-600",
        "Core Competencies" => "from-green-500 to-green-600",
        _ => DEFAULT_COLOR,
    }
}
