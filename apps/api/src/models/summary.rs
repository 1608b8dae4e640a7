use serde::{Deserialize, Serialize};

/// Which "about" tab a summary belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryKind {
    All,
    General,
    Product,
    Developer,
    Tester,
}

impl SummaryKind {
    /// Parses a lower-case tab key such as `"developer"`.
    pub fn from_tab(tab: &str) -> Option<Self> {
        match tab.trim().to_lowercase().as_str() {
            "all" => Some(SummaryKind::All),
            "general" => Some(SummaryKind::General),
            "product" => Some(SummaryKind::Product),
            "developer" => Some(SummaryKind::Developer),
            "tester" => Some(SummaryKind::Tester),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: SummaryKind,
    pub summary_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tab_is_case_insensitive() {
        assert_eq!(SummaryKind::from_tab("Developer"), Some(SummaryKind::Developer));
        assert_eq!(SummaryKind::from_tab(" all "), Some(SummaryKind::All));
        assert_eq!(SummaryKind::from_tab("image"), None);
    }
}
