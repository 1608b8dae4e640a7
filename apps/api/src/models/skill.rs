use serde::{Deserialize, Serialize};

use crate::models::role::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillType {
    Hard,
    Soft,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillCategory {
    #[serde(rename = "Programming_Language")]
    ProgrammingLanguage,
    Frontend,
    Backend,
    Database,
    Testing,
    #[serde(rename = "Core_Competencies")]
    CoreCompetencies,
    #[serde(rename = "Cloud_Devops")]
    CloudDevops,
    Practices,
    Tools,
}

impl SkillCategory {
    /// Categories with a dedicated dashboard bucket; everything else is "Others".
    pub const CORE: [SkillCategory; 6] = [
        SkillCategory::ProgrammingLanguage,
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
        SkillCategory::Testing,
        SkillCategory::CoreCompetencies,
    ];
}

/// Association of a skill with one role. `is_custom` marks a per-role
/// customisation as opposed to a shared assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSkill {
    #[serde(default)]
    pub id: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub is_custom: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(rename = "type")]
    pub skill_type: SkillType,
    #[serde(default)]
    pub category: Option<SkillCategory>,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub is_common: bool,
    #[serde(default)]
    pub roles: Vec<RoleSkill>,
}

impl Skill {
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.iter().any(|r| r.role == role)
    }

    pub fn in_category(&self, category: SkillCategory) -> bool {
        self.category == Some(category)
    }

    /// No category, or one outside the six core dashboard categories.
    pub fn is_uncategorised(&self) -> bool {
        match self.category {
            Some(category) => !SkillCategory::CORE.contains(&category),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_skill_deserializes_with_wire_enums() {
        let skill: Skill = serde_json::from_value(json!({
            "id": "s1",
            "title": "Docker",
            "type": "Hard",
            "category": "Cloud_Devops",
            "roles": [{"role": "DEVELOPER", "is_custom": false}]
        }))
        .unwrap();
        assert_eq!(skill.category, Some(SkillCategory::CloudDevops));
        assert!(skill.has_role(Role::Developer));
        assert!(!skill.has_role(Role::Tester));
        assert!(skill.is_uncategorised());
    }

    #[test]
    fn test_missing_category_is_uncategorised() {
        let skill: Skill = serde_json::from_value(json!({
            "id": "s2", "title": "Leadership", "type": "Soft"
        }))
        .unwrap();
        assert!(skill.category.is_none());
        assert!(skill.is_uncategorised());
        assert!(skill.roles.is_empty());
    }
}
