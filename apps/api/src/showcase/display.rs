//! Card-level helpers: which skills a project card lists for a role, how a
//! usage level reads, and which projects use a given skill.

use std::collections::HashSet;

use serde::Serialize;

use crate::dashboard::transform::percentage;
use crate::format::format_skill_title;
use crate::models::{Project, Skill, SkillUsage};
use crate::showcase::role_filter::RoleScope;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillDisplayKind {
    Skills,
    Techstack,
}

/// A comma-joined list of skill titles for one card row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillDisplayItem {
    pub title: String,
    #[serde(rename = "type")]
    pub kind: SkillDisplayKind,
}

/// Skills and tech stack a project card shows for a role scope.
/// A role the project was not staffed under shows nothing.
pub fn project_skill_display(
    project: &Project,
    skills: &[Skill],
    scope: RoleScope,
) -> Vec<SkillDisplayItem> {
    let (used, stack): (Vec<&SkillUsage>, Vec<&SkillUsage>) = match scope {
        RoleScope::All => (
            project.roles.iter().flat_map(|r| r.skills.iter()).collect(),
            project.roles.iter().flat_map(|r| r.tech_stack.iter()).collect(),
        ),
        RoleScope::Only(role) => match project.role_entry(role) {
            Some(entry) => (entry.skills.iter().collect(), entry.tech_stack.iter().collect()),
            None => return Vec::new(),
        },
    };

    let mut items = Vec::with_capacity(2);
    for (usages, kind) in [
        (used, SkillDisplayKind::Skills),
        (stack, SkillDisplayKind::Techstack),
    ] {
        let titles = unique_titles(&usages, skills);
        if !titles.is_empty() {
            items.push(SkillDisplayItem {
                title: titles.join(", "),
                kind,
            });
        }
    }
    items
}

/// Titles for the distinct skill ids, in first-seen order.
fn unique_titles(usages: &[&SkillUsage], skills: &[Skill]) -> Vec<String> {
    let mut seen = HashSet::new();
    usages
        .iter()
        .filter(|u| seen.insert(u.skill_id.clone()))
        .map(|u| skill_title(&u.skill_id, skills))
        .collect()
}

/// Title of a skill by id, or a prettified id when the skill is unknown.
pub fn skill_title(skill_id: &str, skills: &[Skill]) -> String {
    skills
        .iter()
        .find(|s| s.id == skill_id)
        .map(|s| s.title.clone())
        .unwrap_or_else(|| format_skill_title(skill_id))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProficiencyLevel {
    pub min: u32,
    pub max: u32,
    pub label: &'static str,
    pub color: &'static str,
    pub bg_color: &'static str,
}

pub static PROFICIENCY_LEVELS: [ProficiencyLevel; 5] = [
    ProficiencyLevel {
        min: 0,
        max: 25,
        label: "Beginner",
        color: "text-red-400",
        bg_color: "bg-red-500",
    },
    ProficiencyLevel {
        min: 26,
        max: 50,
        label: "Novice",
        color: "text-orange-400",
        bg_color: "bg-orange-500",
    },
    ProficiencyLevel {
        min: 51,
        max: 75,
        label: "Intermediate",
        color: "text-yellow-400",
        bg_color: "bg-yellow-500",
    },
    ProficiencyLevel {
        min: 76,
        max: 90,
        label: "Advanced",
        color: "text-blue-400",
        bg_color: "bg-blue-500",
    },
    ProficiencyLevel {
        min: 91,
        max: 100,
        label: "Expert",
        color: "text-green-400",
        bg_color: "bg-green-500",
    },
];

/// Band for a usage level; out-of-range levels read as Beginner.
pub fn current_proficiency(level: u32) -> &'static ProficiencyLevel {
    PROFICIENCY_LEVELS
        .iter()
        .find(|p| level >= p.min && level <= p.max)
        .unwrap_or(&PROFICIENCY_LEVELS[0])
}

/// Share of a role's projects that use a skill, as a whole percentage.
pub fn skill_usage_share(projects_using_skill: usize, role_projects: usize) -> u32 {
    percentage(projects_using_skill, role_projects)
}

/// Projects where any role lists the skill in its skills or tech stack.
pub fn related_projects<'a>(skill_id: &str, projects: &'a [Project]) -> Vec<&'a Project> {
    projects.iter().filter(|p| p.uses_skill(skill_id)).collect()
}
