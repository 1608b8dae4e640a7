use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::models::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "Web_Development")]
    WebDevelopment,
    #[serde(rename = "Mobile_Development")]
    MobileDevelopment,
    #[serde(rename = "Web_Testing")]
    WebTesting,
    #[serde(rename = "Mobile_Testing")]
    MobileTesting,
    #[serde(rename = "API_Testing")]
    ApiTesting,
    Others,
}

impl ProjectType {
    /// Fixed display order used by every dashboard aggregate.
    pub const ORDERED: [ProjectType; 6] = [
        ProjectType::WebDevelopment,
        ProjectType::MobileDevelopment,
        ProjectType::WebTesting,
        ProjectType::MobileTesting,
        ProjectType::ApiTesting,
        ProjectType::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::WebDevelopment => "Web_Development",
            ProjectType::MobileDevelopment => "Mobile_Development",
            ProjectType::WebTesting => "Web_Testing",
            ProjectType::MobileTesting => "Mobile_Testing",
            ProjectType::ApiTesting => "API_Testing",
            ProjectType::Others => "Others",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    #[serde(rename = "In_Progress")]
    InProgress,
    Completed,
}

/// Reference from a project role to a skill, with how heavily it was used (0-100).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillUsage {
    #[serde(default)]
    pub id: Option<String>,
    pub skill_id: String,
    pub usage_level: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectMedia {
    #[serde(default)]
    pub id: Option<String>,
    pub url: String,
    #[serde(default)]
    pub asset_id: Option<String>,
}

/// One project's engagement under a single professional role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRole {
    #[serde(default)]
    pub id: Option<String>,
    pub role: Role,
    #[serde(rename = "type", default)]
    pub project_type: Option<ProjectType>,
    /// Explicit lifecycle state; derived from dates when absent.
    #[serde(default)]
    pub status: Option<ProjectStatus>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub skills: Vec<SkillUsage>,
    #[serde(default)]
    pub tech_stack: Vec<SkillUsage>,
    #[serde(default)]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub source_link: String,
    #[serde(default)]
    pub demo_link: String,
    #[serde(default)]
    pub demo_video_link: Option<String>,
    #[serde(default)]
    pub asset_id: Option<String>,
    /// `None` means the project is ongoing.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub roles: Vec<ProjectRole>,
    #[serde(default)]
    pub images: Vec<ProjectMedia>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Fallback "last activity" signal for in-progress work.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Project {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r.role == role)
    }

    pub fn has_type(&self, project_type: ProjectType) -> bool {
        self.roles
            .iter()
            .any(|r| r.project_type == Some(project_type))
    }

    pub fn role_entry(&self, role: Role) -> Option<&ProjectRole> {
        self.roles.iter().find(|r| r.role == role)
    }

    /// True when any role entry lists the skill in its skills or tech stack.
    pub fn uses_skill(&self, skill_id: &str) -> bool {
        self.roles.iter().any(|r| {
            r.skills.iter().any(|s| s.skill_id == skill_id)
                || r.tech_stack.iter().any(|s| s.skill_id == skill_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_project_deserializes_with_optional_fields_missing() {
        let value = json!({
            "id": "p1",
            "title": "Storefront",
            "description": "Shop",
            "roles": [{
                "role": "DEVELOPER",
                "type": "Web_Development",
                "start_date": "2024-01-15",
                "skills": [{"skill_id": "s1", "usage_level": 80}]
            }]
        });
        let project: Project = serde_json::from_value(value).unwrap();
        assert!(project.end_date.is_none());
        assert!(project.updated_at.is_none());
        assert_eq!(project.roles[0].project_type, Some(ProjectType::WebDevelopment));
        assert!(project.roles[0].status.is_none());
        assert!(project.roles[0].tech_stack.is_empty());
    }

    #[test]
    fn test_status_wire_form() {
        let status: ProjectStatus = serde_json::from_str("\"In_Progress\"").unwrap();
        assert_eq!(status, ProjectStatus::InProgress);
        assert_eq!(serde_json::to_string(&status).unwrap(), "\"In_Progress\"");
    }

    #[test]
    fn test_uses_skill_checks_skills_and_tech_stack() {
        let role = ProjectRole {
            id: None,
            role: Role::Tester,
            project_type: None,
            status: None,
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            skills: vec![],
            tech_stack: vec![SkillUsage {
                id: None,
                skill_id: "cypress".to_string(),
                usage_level: 60,
            }],
            achievements: vec![],
        };
        let project: Project = serde_json::from_value(json!({
            "id": "p2", "title": "t", "description": "d", "roles": []
        }))
        .unwrap();
        let project = Project {
            roles: vec![role],
            ..project
        };
        assert!(project.uses_skill("cypress"));
        assert!(!project.uses_skill("rust"));
        assert!(project.has_role(Role::Tester));
        assert!(!project.has_type(ProjectType::Others));
    }
}
