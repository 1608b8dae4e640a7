use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::AppError;
use crate::models::{Education, Experience, ProjectMedia, ProjectRole, RoleSkill, Summary};
use crate::models::{SkillCategory, SkillType};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Project create/update payload. An absent `id` means create.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectForm {
    #[serde(default)]
    pub id: Option<String>,
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
    pub asset_id: String,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub roles: Vec<ProjectRole>,
    #[serde(default)]
    pub images: Vec<ProjectMedia>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkillForm {
    #[serde(default)]
    pub id: Option<String>,
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

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub subject: String,
    pub message: String,
}

/// Collects every failing field of a form instead of stopping at the first.
pub trait Validate {
    fn field_errors(&self) -> Vec<FieldError>;

    fn validate(&self) -> Result<(), AppError> {
        let errors = self.field_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::InvalidForm(errors))
        }
    }
}

#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn fail(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.into(),
            message: message.into(),
        });
    }

    /// Non-empty; whitespace counts as content.
    fn required(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.fail(field, "is required");
        }
    }

    fn url(&mut self, field: &str, value: &str) {
        if !is_url(value) {
            self.fail(field, "must be a valid http(s) URL");
        }
    }

    fn optional_url(&mut self, field: &str, value: Option<&str>) {
        match value {
            Some(v) if !v.is_empty() => self.url(field, v),
            _ => {}
        }
    }

    fn length(&mut self, field: &str, value: &str, min: usize, max: usize) {
        let n = value.chars().count();
        if n < min || n > max {
            self.fail(field, format!("must be between {min} and {max} characters"));
        }
    }

    fn date_order(&mut self, field: &str, start: NaiveDate, end: Option<NaiveDate>) {
        if let Some(end) = end {
            if end < start {
                self.fail(field, "must not be before the start date");
            }
        }
    }

    fn finish(self) -> Vec<FieldError> {
        self.errors
    }
}

/// Local part of dot-separated atoms, then a dotted domain with an alphabetic TLD.
const EMAIL_PATTERN: &str =
    r"(?i)^[a-z0-9_'+\-]+(?:\.[a-z0-9_'+\-]+)*@(?:[a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$";

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// Absolute http(s) URL with a well-formed, non-empty host.
pub fn is_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

pub fn is_email(value: &str) -> bool {
    email_regex().is_some_and(|re| re.is_match(value))
}

impl Validate for ProjectForm {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut c = Checker::default();
        c.required("title", &self.title);
        c.required("description", &self.description);
        c.required("asset_id", &self.asset_id);
        c.url("image_url", &self.image_url);
        c.url("source_link", &self.source_link);
        c.url("demo_link", &self.demo_link);
        c.optional_url("demo_video_link", self.demo_video_link.as_deref());

        if self.roles.is_empty() {
            c.fail("roles", "at least one role is required");
        }
        for (i, role) in self.roles.iter().enumerate() {
            if role.skills.is_empty() {
                c.fail(format!("roles[{i}].skills"), "at least one skill is required");
            }
            for (j, usage) in role.skills.iter().enumerate() {
                c.required(&format!("roles[{i}].skills[{j}].skill_id"), &usage.skill_id);
            }
            for (list, usages) in [("skills", &role.skills), ("tech_stack", &role.tech_stack)] {
                for (j, usage) in usages.iter().enumerate() {
                    if usage.usage_level < 1 {
                        c.fail(
                            format!("roles[{i}].{list}[{j}].usage_level"),
                            "must be at least 1",
                        );
                    }
                }
            }
        }

        for (i, media) in self.images.iter().enumerate() {
            c.url(&format!("images[{i}].url"), &media.url);
        }

        if let Some(first_start) = self.roles.iter().map(|r| r.start_date).min() {
            c.date_order("end_date", first_start, self.end_date);
        }
        c.finish()
    }
}

impl Validate for SkillForm {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut c = Checker::default();
        c.required("title", &self.title);
        c.optional_url("image_url", Some(&self.image_url));
        c.finish()
    }
}

impl Validate for Experience {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut c = Checker::default();
        c.required("company", &self.company);
        c.required("role", &self.role);
        c.url("image_url", &self.image_url);
        if self.description.is_empty() {
            c.fail("description", "at least one line is required");
        }
        for (i, line) in self.description.iter().enumerate() {
            c.required(&format!("description[{i}]"), line);
        }
        c.date_order("end_date", self.start_date, self.end_date);
        c.finish()
    }
}

impl Validate for Education {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut c = Checker::default();
        c.required("institution", &self.institution);
        c.required("degree", &self.degree);
        c.required("field_of_study", &self.field_of_study);
        c.url("image_url", &self.image_url);
        if self.description.is_empty() {
            c.fail("description", "at least one line is required");
        }
        for (i, line) in self.description.iter().enumerate() {
            c.required(&format!("description[{i}]"), line);
        }
        c.date_order("end_date", self.start_date, self.end_date);
        c.finish()
    }
}

impl Validate for Summary {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut c = Checker::default();
        if self.summary_text.chars().count() < 10 {
            c.fail("summary_text", "must be at least 10 characters");
        }
        c.finish()
    }
}

impl Validate for ContactForm {
    fn field_errors(&self) -> Vec<FieldError> {
        let mut c = Checker::default();
        c.length("name", &self.name, 2, 50);
        if !is_email(&self.email) {
            c.fail("email", "must be a valid email address");
        }
        if let Some(phone) = self.phone.as_deref() {
            c.length("phone", phone, 10, 12);
        }
        c.length("subject", &self.subject, 2, 100);
        c.length("message", &self.message, 10, 500);
        c.finish()
    }
}
