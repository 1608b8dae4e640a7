//! Display-label helpers shared by the dashboard and the public views.

use chrono::NaiveDate;

/// Enum values whose underscores read as "&" rather than a space.
const AMPERSAND_VALUES: &[&str] = &["Cloud_Devops", "AI_ML"];

/// Turns an enum wire value such as `Web_Development` into `Web Development`.
pub fn format_enum_label(value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }
    if AMPERSAND_VALUES.contains(&value) {
        return value.replace('_', " & ");
    }

    value
        .split('_')
        .map(|word| {
            if word.eq_ignore_ascii_case("devops") {
                return "DevOps".to_string();
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Title for a skill id that has no matching skill record.
pub fn format_skill_title(value: &str) -> String {
    let separator = if value == "Cloud_Devops" { " & " } else { " " };
    let lowered = value.replace('_', separator).to_lowercase();

    let mut out = String::with_capacity(lowered.len());
    let mut prev_is_word = false;
    for c in lowered.chars() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word && !prev_is_word {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        prev_is_word = is_word;
    }
    out
}

/// `None` renders as "Present", otherwise "March 2024".
pub fn format_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%B %Y").to_string(),
        None => "Present".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_label_basic() {
        assert_eq!(format_enum_label("Web_Development"), "Web Development");
        assert_eq!(format_enum_label("In_Progress"), "In Progress");
        assert_eq!(format_enum_label("Others"), "Others");
    }

    #[test]
    fn test_enum_label_lowercases_tail() {
        assert_eq!(format_enum_label("API_Testing"), "Api Testing");
        assert_eq!(format_enum_label("PRODUCT_MANAGER"), "Product Manager");
    }

    #[test]
    fn test_enum_label_special_cases() {
        assert_eq!(format_enum_label("Cloud_Devops"), "Cloud & Devops");
        assert_eq!(format_enum_label("AI_ML"), "AI & ML");
        assert_eq!(format_enum_label("Platform_devops"), "Platform DevOps");
    }

    #[test]
    fn test_enum_label_empty() {
        assert_eq!(format_enum_label(""), "");
    }

    #[test]
    fn test_skill_title() {
        assert_eq!(format_skill_title("react_native"), "React Native");
        assert_eq!(format_skill_title("Cloud_Devops"), "Cloud & Devops");
        assert_eq!(format_skill_title("node.js"), "Node.Js");
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 9);
        assert_eq!(format_date(d), "March 2024");
        assert_eq!(format_date(None), "Present");
    }
}
