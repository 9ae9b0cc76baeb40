//! Attraction counts per region and per content type for the statistics dashboard.
//!
//! Each count is one `areaBasedList2` call with `numOfRows=1`, reading only
//! `totalCount`. The calls for a breakdown are issued together and awaited
//! jointly; a call that fails after its retries is logged and counted as 0
//! so one bad region does not blank the whole dashboard.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use serde::Serialize;
use tour_api::types::ContentType;
use tour_api::{AreaBasedListQuery, Client, FilterQuery, Query};

/// Top-level area codes (provinces and metropolitan cities) and their names.
pub const AREAS: &[(&str, &str)] = &[
    ("1", "서울"),
    ("2", "인천"),
    ("3", "대전"),
    ("4", "대구"),
    ("5", "광주"),
    ("6", "부산"),
    ("7", "울산"),
    ("8", "세종"),
    ("31", "경기"),
    ("32", "강원"),
    ("33", "충북"),
    ("34", "충남"),
    ("35", "경북"),
    ("36", "경남"),
    ("37", "전북"),
    ("38", "전남"),
    ("39", "제주"),
];

/// How many entries the summary keeps in each top list.
pub const TOP_N: usize = 3;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RegionCount {
    pub area_code: String,
    pub name: String,
    pub count: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TypeCount {
    pub content_type_id: String,
    pub name: String,
    pub count: u64,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    /// Sum of the per-type counts.
    pub total_count: u64,
    pub top_regions: Vec<RegionCount>,
    pub top_types: Vec<TypeCount>,
    pub last_updated: DateTime<Utc>,
}

/// Looks up the display name of a top-level area code.
pub fn area_name(area_code: &str) -> Option<&'static str> {
    AREAS
        .iter()
        .find(|(code, _)| *code == area_code.trim())
        .map(|(_, name)| *name)
}

async fn count_matching(client: &Client, query: AreaBasedListQuery, label: &str) -> u64 {
    match client.area_based_list(&query.with_num_of_rows(1)).await {
        Ok(page) => page.total_count,
        Err(e) => {
            tracing::warn!("Failed to count {}: {}", label, e);
            0
        }
    }
}

/// Attraction count for every area in [`AREAS`], largest first.
pub async fn region_stats(client: &Client) -> Vec<RegionCount> {
    let requests = AREAS.iter().map(|&(code, name)| async move {
        let query = AreaBasedListQuery::default().with_area_code(code);
        RegionCount {
            area_code: code.to_string(),
            name: name.to_string(),
            count: count_matching(client, query, name).await,
        }
    });
    let mut counts = join_all(requests).await;
    // Stable sort keeps table order among equal counts.
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Attraction count for every [`ContentType`], largest first.
pub async fn type_stats(client: &Client) -> Vec<TypeCount> {
    let requests = ContentType::ALL.into_iter().map(|content_type| async move {
        let query = AreaBasedListQuery::default().with_content_type(content_type);
        TypeCount {
            content_type_id: content_type.to_string(),
            name: content_type.label().to_string(),
            count: count_matching(client, query, content_type.label()).await,
        }
    });
    let mut counts = join_all(requests).await;
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// Dashboard headline numbers: total, top regions and top types.
pub async fn stats_summary(client: &Client) -> StatsSummary {
    let (mut regions, mut types) = futures::join!(region_stats(client), type_stats(client));
    let total_count: u64 = types.iter().map(|t| t.count).sum();
    regions.truncate(TOP_N);
    types.truncate(TOP_N);
    StatsSummary {
        total_count,
        top_regions: regions,
        top_types: types,
        last_updated: Utc::now(),
    }
}
