use serde::{Deserialize, Serialize};

use crate::shared::decimal;

/// Class offered by the academy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description_id: Option<String>,
    #[serde(default)]
    pub description_en: Option<String>,
    #[serde(deserialize_with = "decimal::deserialize")]
    pub price: f64,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Service {
    /// Description in the requested language ("id" or "en")
    pub fn description(&self, lang: &str) -> Option<&str> {
        match lang {
            "id" => self.description_id.as_deref(),
            _ => self.description_en.as_deref(),
        }
    }
}
