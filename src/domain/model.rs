use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Election kinds served by the valgresultat API, identified by the
/// two-letter codes used in its URL paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElectionType {
    St,
    Fy,
    Kv,
}

impl ElectionType {
    pub fn code(&self) -> &'static str {
        match self {
            ElectionType::St => "st",
            ElectionType::Fy => "fy",
            ElectionType::Kv => "kv",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "st" => Some(ElectionType::St),
            "fy" => Some(ElectionType::Fy),
            "kv" => Some(ElectionType::Kv),
            _ => None,
        }
    }
}

impl std::fmt::Display for ElectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// One party result for one kommune, flattened for CSV and table output.
/// Field order matches the column order of the exported file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub timestamp_utc: DateTime<Utc>,
    pub aar: String,
    pub valtype: ElectionType,
    pub fylke_id: String,
    pub kommune_id: String,
    pub kommune_navn: Option<String>,
    pub partikode: Option<String>,
    pub partinavn: Option<String>,
    pub stemmer: Option<i64>,
    pub prosent: Option<f64>,
}

/// Cache key for one harvested result set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HarvestKey {
    pub year: String,
    pub valtype: ElectionType,
}
