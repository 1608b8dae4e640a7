//! Role selection tokens and the content filter behind the public showcase.
//!
//! Two call sites interpret an unknown token differently and both behaviours
//! are kept: [`RoleScope::from_token`] (how cards are rendered) falls back to
//! "everything", while [`filter_by_role`] (what is listed) returns nothing.

use serde::Serialize;
use tracing::debug;

use crate::models::{Project, Role, Skill};

/// Nothing selected yet; the section is not rendered.
pub const DEFAULT_TOKEN: &str = "default";
pub const ALL_TOKEN: &str = "all";
pub const PRODUCT_MANAGER_TOKEN: &str = "product_manager";
pub const WEB_DEVELOPER_TOKEN: &str = "web_developer";
pub const QA_TESTER_TOKEN: &str = "qa-engineer_tester";

fn normalize(token: &str) -> String {
    token.to_lowercase().replace(['_', '-'], " ")
}

/// Keyword-based resolution, checked in priority order.
pub fn resolve_role(token: &str) -> Option<Role> {
    let normalized = normalize(token);

    if normalized.contains("product") || normalized.contains("manager") {
        return Some(Role::ProductManager);
    }
    if normalized.contains("developer") || normalized.contains("web") {
        return Some(Role::Developer);
    }
    if normalized.contains("qa") || normalized.contains("tester") || normalized.contains("test") {
        return Some(Role::Tester);
    }
    None
}

/// Role a card is rendered for: a single role or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleScope {
    All,
    Only(Role),
}

impl RoleScope {
    /// Unresolvable tokens render as `All`.
    pub fn from_token(token: &str) -> Self {
        match resolve_role(token) {
            Some(role) => RoleScope::Only(role),
            None => {
                debug!("Role token '{token}' did not resolve, rendering for ALL");
                RoleScope::All
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoleScope::All => "ALL",
            RoleScope::Only(role) => role.as_str(),
        }
    }

    /// Roles whose entries a card draws from.
    pub fn roles(&self) -> &[Role] {
        match self {
            RoleScope::All => &Role::ALL,
            RoleScope::Only(role) => std::slice::from_ref(role),
        }
    }
}

/// What the filter makes of a token. Only five exact tokens are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Hidden,
    All,
    Role(Role),
    Unrecognized,
}

impl Selection {
    pub fn parse(token: &str) -> Self {
        match token {
            DEFAULT_TOKEN => Selection::Hidden,
            ALL_TOKEN => Selection::All,
            PRODUCT_MANAGER_TOKEN | WEB_DEVELOPER_TOKEN | QA_TESTER_TOKEN => {
                resolve_role(token).map_or(Selection::Unrecognized, Selection::Role)
            }
            _ => Selection::Unrecognized,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RoleScopedContent<'a> {
    /// False for the "default" token: the caller renders nothing at all.
    pub visible: bool,
    pub skills: Vec<&'a Skill>,
    pub projects: Vec<&'a Project>,
}

impl<'a> RoleScopedContent<'a> {
    fn empty(visible: bool) -> Self {
        Self {
            visible,
            skills: Vec::new(),
            projects: Vec::new(),
        }
    }
}

/// Skills and projects relevant to a selection token. Membership is an
/// existence check, so an item can appear under several roles.
pub fn filter_by_role<'a>(
    token: &str,
    skills: &'a [Skill],
    projects: &'a [Project],
) -> RoleScopedContent<'a> {
    match Selection::parse(token) {
        Selection::Hidden => RoleScopedContent::empty(false),
        Selection::All => RoleScopedContent {
            visible: true,
            skills: skills.iter().collect(),
            projects: projects.iter().collect(),
        },
        Selection::Role(role) => RoleScopedContent {
            visible: true,
            skills: skills.iter().filter(|s| s.has_role(role)).collect(),
            projects: projects.iter().filter(|p| p.has_role(role)).collect(),
        },
        Selection::Unrecognized => {
            debug!("Unrecognised role selection '{token}', nothing to list");
            RoleScopedContent::empty(true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectRole, RoleSkill, SkillType};
    use chrono::NaiveDate;

    fn make_skill(id: &str, roles: &[Role]) -> Skill {
        Skill {
            id: id.to_string(),
            title: id.to_string(),
            image_url: String::new(),
            skill_type: SkillType::Hard,
            category: None,
            asset_id: None,
            is_common: roles.len() > 1,
            roles: roles
                .iter()
                .map(|&role| RoleSkill {
                    id: None,
                    role,
                    is_custom: roles.len() == 1,
                })
                .collect(),
        }
    }

    fn make_project(id: &str, roles: &[Role]) -> Project {
        Project {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            image_url: String::new(),
            source_link: String::new(),
            demo_link: String::new(),
            demo_video_link: None,
            asset_id: None,
            end_date: None,
            roles: roles
                .iter()
                .map(|&role| ProjectRole {
                    id: None,
                    role,
                    project_type: None,
                    status: None,
                    start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    skills: vec![],
                    tech_stack: vec![],
                    achievements: vec![],
                })
                .collect(),
            images: vec![],
            created_at: None,
            updated_at: None,
        }
    }

    fn fixtures() -> (Vec<Skill>, Vec<Project>) {
        let skills = vec![
            make_skill("rust", &[Role::Developer]),
            make_skill("cypress", &[Role::Tester]),
            make_skill("roadmaps", &[Role::ProductManager]),
            make_skill("communication", &Role::ALL),
        ];
        let projects = vec![
            make_project("api", &[Role::Developer, Role::Tester]),
            make_project("launch", &[Role::ProductManager]),
            make_project("orphan", &[]),
        ];
        (skills, projects)
    }

    fn ids<T, F: Fn(&T) -> &str>(items: &[&T], f: F) -> Vec<String> {
        items.iter().map(|i| f(i).to_string()).collect()
    }

    #[test]
    fn test_resolver_keywords() {
        assert_eq!(resolve_role("product_manager"), Some(Role::ProductManager));
        assert_eq!(resolve_role("Engineering-Manager"), Some(Role::ProductManager));
        assert_eq!(resolve_role("web_developer"), Some(Role::Developer));
        assert_eq!(resolve_role("qa-engineer_tester"), Some(Role::Tester));
        assert_eq!(resolve_role("TEST"), Some(Role::Tester));
        assert_eq!(resolve_role("all"), None);
        assert_eq!(resolve_role("designer"), None);
    }

    #[test]
    fn test_resolver_priority_order() {
        // "product" wins over "developer"; "web" wins over "test".
        assert_eq!(resolve_role("product_developer"), Some(Role::ProductManager));
        assert_eq!(resolve_role("web_tester"), Some(Role::Developer));
    }

    #[test]
    fn test_display_scope_falls_back_to_all() {
        assert_eq!(RoleScope::from_token("unknown_token"), RoleScope::All);
        assert_eq!(RoleScope::from_token("all"), RoleScope::All);
        assert_eq!(
            RoleScope::from_token("web_developer"),
            RoleScope::Only(Role::Developer)
        );
        assert_eq!(RoleScope::All.as_str(), "ALL");
    }

    #[test]
    fn test_scope_roles() {
        assert_eq!(RoleScope::All.roles(), &Role::ALL);
        assert_eq!(RoleScope::Only(Role::Tester).roles(), &[Role::Tester]);
    }

    #[test]
    fn test_web_developer_filter() {
        let (skills, projects) = fixtures();
        let result = filter_by_role("web_developer", &skills, &projects);
        assert!(result.visible);
        assert_eq!(ids(&result.skills, |s| s.id.as_str()), vec!["rust", "communication"]);
        assert_eq!(ids(&result.projects, |p| p.id.as_str()), vec!["api"]);
        assert!(result.projects.iter().all(|p| p.has_role(Role::Developer)));
    }

    #[test]
    fn test_project_appears_under_every_matching_role() {
        let (skills, projects) = fixtures();
        let dev = filter_by_role("web_developer", &skills, &projects);
        let qa = filter_by_role("qa-engineer_tester", &skills, &projects);
        assert!(dev.projects.iter().any(|p| p.id == "api"));
        assert!(qa.projects.iter().any(|p| p.id == "api"));
    }

    #[test]
    fn test_all_returns_everything_including_roleless() {
        let (skills, projects) = fixtures();
        let result = filter_by_role("all", &skills, &projects);
        assert!(result.visible);
        assert_eq!(result.skills.len(), skills.len());
        assert_eq!(result.projects.len(), projects.len());
    }

    #[test]
    fn test_default_is_hidden() {
        let (skills, projects) = fixtures();
        let result = filter_by_role("default", &skills, &projects);
        assert!(!result.visible);
        assert!(result.skills.is_empty());
        assert!(result.projects.is_empty());
    }

    #[test]
    fn test_unknown_token_denies_even_when_resolvable() {
        let (skills, projects) = fixtures();
        let unknown = filter_by_role("unknown_token", &skills, &projects);
        assert!(unknown.skills.is_empty() && unknown.projects.is_empty());

        // "developer" resolves to a role but is not one of the filter's tokens.
        let loose = filter_by_role("developer", &skills, &projects);
        assert!(loose.skills.is_empty() && loose.projects.is_empty());
        assert_eq!(RoleScope::from_token("developer"), RoleScope::Only(Role::Developer));
    }

    #[test]
    fn test_roleless_project_never_role_scoped() {
        let (skills, projects) = fixtures();
        for token in [PRODUCT_MANAGER_TOKEN, WEB_DEVELOPER_TOKEN, QA_TESTER_TOKEN] {
            let result = filter_by_role(token, &skills, &projects);
            assert!(result.projects.iter().all(|p| p.id != "orphan"));
        }
    }
}
