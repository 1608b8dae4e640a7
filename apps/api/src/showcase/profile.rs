use serde::Serialize;

use crate::format::format_date;
use crate::models::{Education, Experience, Summary, SummaryKind};

/// Statement for an about tab, falling back to the "All" statement.
pub fn about_statement(kind: SummaryKind, summaries: &[Summary]) -> String {
    let find = |k: SummaryKind| summaries.iter().find(|s| s.kind == k);

    find(kind)
        .or_else(|| find(SummaryKind::All))
        .map(|s| s.summary_text.clone())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineKind {
    Work,
    Education,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub title: String,
    pub subtitle: String,
    pub achievements: Vec<String>,
    pub start_date: String,
    /// "Present" for ongoing entries.
    pub end_date: String,
}

/// Work history first, then education, in their stored order.
pub fn history_timeline(experience: &[Experience], education: &[Education]) -> Vec<TimelineEntry> {
    let work = experience.iter().map(|e| TimelineEntry {
        kind: TimelineKind::Work,
        title: e.role.clone(),
        subtitle: e.company.clone(),
        achievements: e.description.clone(),
        start_date: format_date(Some(e.start_date)),
        end_date: format_date(e.end_date),
    });
    let schooling = education.iter().map(|e| TimelineEntry {
        kind: TimelineKind::Education,
        title: e.institution.clone(),
        subtitle: e.degree.clone(),
        achievements: e.description.clone(),
        start_date: format_date(Some(e.start_date)),
        end_date: format_date(e.end_date),
    });
    work.chain(schooling).collect()
}
