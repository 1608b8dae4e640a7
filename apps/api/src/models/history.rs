use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub id: Option<String>,
    pub company: String,
    pub role: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub is_common: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub id: Option<String>,
    pub institution: String,
    pub degree: String,
    pub field_of_study: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub description: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub asset_id: Option<String>,
    #[serde(default)]
    pub is_common: bool,
}
