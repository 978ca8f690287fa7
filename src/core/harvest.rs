use crate::core::cache::ResultCache;
use crate::core::client::ApiClient;
use crate::core::links::child_links;
use crate::domain::model::{ElectionType, HarvestKey, ResultRow};
use crate::domain::ports::Harvest;
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::time::Duration;

/// Ordered fallback keys for a party entry's code and display name. A value
/// counts only when it is a non-empty string.
const PARTY_CODE_KEYS: [&str; 2] = ["partikode", "kode"];
const PARTY_NAME_KEYS: [&str; 2] = ["partinavn", "navn"];

/// Walks the fixed two-level hierarchy for one election (root -> fylker ->
/// kommuner) and flattens every kommune's party entries into rows.
///
/// Whole result sets are memoized per (year, election type); repeated calls
/// inside the TTL window cost no upstream requests. The first failed fetch
/// aborts the sweep and discards everything collected so far.
pub struct Harvester {
    client: ApiClient,
    cache: ResultCache,
}

impl Harvester {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            cache: ResultCache::new(),
        }
    }

    pub fn new_with_ttl(client: ApiClient, ttl: Duration) -> Self {
        Self {
            client,
            cache: ResultCache::new_with_ttl(ttl),
        }
    }

    async fn collect(&self, year: &str, valgtype: ElectionType) -> Result<Vec<ResultRow>> {
        let root_path = format!("{}/{}", year, valgtype.code());
        let mut rows = Vec::new();

        let fylker = child_links(&self.client.get_json(&root_path).await?);
        tracing::info!("📡 {} fylker under {}", fylker.len(), root_path);

        for fylke_path in &fylker {
            let fylke_id = last_segment(fylke_path);
            let kommuner = child_links(&self.client.get_json(fylke_path).await?);
            tracing::debug!("fylke {}: {} kommuner", fylke_id, kommuner.len());

            for kommune_path in &kommuner {
                let kommune_id = last_segment(kommune_path);
                let data = self.client.get_json(kommune_path).await?;
                rows.extend(party_rows(year, valgtype, fylke_id, kommune_id, &data));
            }
        }

        Ok(rows)
    }
}

#[async_trait]
impl Harvest for Harvester {
    async fn fetch_results(&self, year: &str, valgtype: ElectionType) -> Result<Vec<ResultRow>> {
        let key = HarvestKey {
            year: year.to_string(),
            valtype: valgtype,
        };
        self.cache
            .get_or_fetch(key, || self.collect(year, valgtype))
            .await
    }
}

/// Node ids are the trailing segment of the node's own link,
/// `/2021/st/11/1103` -> `1103`.
fn last_segment(path: &str) -> &str {
    path.trim_matches('/').rsplit('/').next().unwrap_or("")
}

fn first_string<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a str> {
    keys.iter()
        .filter_map(|key| value.get(key))
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
}

/// One row per entry in the kommune's `"partier"` list. A missing or
/// non-array list means no rows, never an error; missing fields inside an
/// entry become empty cells.
fn party_rows(
    year: &str,
    valgtype: ElectionType,
    fylke_id: &str,
    kommune_id: &str,
    data: &Value,
) -> Vec<ResultRow> {
    let kommune_navn = data.get("navn").and_then(Value::as_str).map(str::to_string);

    data.get("partier")
        .and_then(Value::as_array)
        .map(|partier| {
            partier
                .iter()
                .map(|parti| ResultRow {
                    timestamp_utc: Utc::now(),
                    aar: year.to_string(),
                    valtype: valgtype,
                    fylke_id: fylke_id.to_string(),
                    kommune_id: kommune_id.to_string(),
                    kommune_navn: kommune_navn.clone(),
                    partikode: first_string(parti, &PARTY_CODE_KEYS).map(str::to_string),
                    partinavn: first_string(parti, &PARTY_NAME_KEYS).map(str::to_string),
                    stemmer: parti
                        .get("stemmer")
                        .and_then(|v| v.get("totalt"))
                        .and_then(Value::as_i64),
                    prosent: parti
                        .get("prosent")
                        .and_then(|v| v.get("totalt"))
                        .and_then(Value::as_f64),
                })
                .collect()
        })
        .unwrap_or_default()
}
