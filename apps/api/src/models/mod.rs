pub mod history;
pub mod project;
pub mod role;
pub mod skill;
pub mod summary;

use serde::{Deserialize, Serialize};

pub use history::{Education, Experience};
pub use project::{Project, ProjectMedia, ProjectRole, ProjectStatus, ProjectType, SkillUsage};
pub use role::Role;
pub use skill::{RoleSkill, Skill, SkillCategory, SkillType};
pub use summary::{Summary, SummaryKind};

/// Everything the site renders, loaded as one document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioSnapshot {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub summaries: Vec<Summary>,
}
