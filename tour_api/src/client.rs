//! HTTP client for the Korea Tourism Organization KorService2 API.

use std::time::Duration;

use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{AreaBasedListQuery, AreaCodeQuery, DetailQuery, KeywordQuery, Query},
    retry::RetryPolicy,
    types::{
        decode_envelope, AreaCode, Body, Page, PetTourInfo, TourDetail, TourImage, TourIntro,
        TourItem,
    },
    Error,
};

/// Production endpoint of the KorService2 API.
pub const DEFAULT_BASE_URL: &str = "https://apis.data.go.kr/B551011/KorService2";

/// Application name reported in the `MobileApp` parameter.
pub const DEFAULT_MOBILE_APP: &str = "TourInfo";

/// Request timeout for every upstream call.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Enough rows to list every sub-district of the largest province in one page.
const AREA_CODE_ROWS: u32 = 100;

/// Settings a [`Client`] is built from. Loading them from the environment
/// is the caller's job; the client never reads process state.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Decoded service key issued by data.go.kr.
    pub service_key: String,
    pub base_url: String,
    pub mobile_app: String,
    pub retry: RetryPolicy,
}

impl ClientConfig {
    pub fn new(service_key: &str) -> Self {
        Self {
            service_key: service_key.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            mobile_app: DEFAULT_MOBILE_APP.to_string(),
            retry: RetryPolicy::default(),
        }
    }
}

/// HTTP client for the tour API.
///
/// Each operation validates its inputs, then issues a GET with bounded
/// retry (see [`RetryPolicy`]) and normalizes the envelope. The client holds
/// no per-call state, so one instance can serve concurrent callers.
pub struct Client {
    http: reqwest::Client,
    base_api_url: String,
    service_key: String,
    mobile_app: String,
    retry: RetryPolicy,
}

impl Client {
    /// Creates a client pointing at the production API.
    pub fn new(service_key: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig::new(service_key))
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, service_key: &str) -> Result<Self, Error> {
        Self::from_config(ClientConfig {
            base_url: base_url.to_string(),
            ..ClientConfig::new(service_key)
        })
    }

    pub fn from_config(config: ClientConfig) -> Result<Self, Error> {
        let service_key = config.service_key.trim();
        if service_key.is_empty() {
            return Err(Error::Configuration("service key is not set".to_string()));
        }
        let base_api_url = config.base_url.trim_end_matches('/').to_string();
        Url::parse(&base_api_url).map_err(|e| {
            Error::Configuration(format!("invalid base URL {}: {}", config.base_url, e))
        })?;
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_api_url,
            service_key: service_key.to_string(),
            mobile_app: config.mobile_app,
            retry: config.retry,
        })
    }

    /// Replaces the retry policy.
    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        self.retry
    }

    fn get_url(&self, operation: &str, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(format!("{}/{}", &self.base_api_url, operation).as_str())
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::Configuration(format!("invalid URL for {}: {}", operation, e))
            })?;
        let mut url = query.add_to_url(&url);
        tracing::debug!("GET {}", url);
        url.query_pairs_mut()
            .append_pair("serviceKey", &self.service_key)
            .append_pair("MobileOS", "ETC")
            .append_pair("MobileApp", &self.mobile_app)
            .append_pair("_type", "json");
        Ok(url)
    }

    async fn get<T, Q>(&self, operation: &str, query: &Q) -> Result<Body<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(operation, query)?;
        self.retry
            .run(operation, || self.attempt::<T>(&url))
            .await
    }

    /// One request/response cycle. Every failure comes back as a tagged
    /// [`Error`] for the retry loop to inspect.
    async fn attempt<T: DeserializeOwned>(&self, url: &Url) -> Result<Body<T>, Error> {
        let resp = self
            .http
            .get(url.clone())
            .header("accept", "application/json")
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        decode_envelope(&body)
    }

    /// Lists provinces and metropolitan cities, or the sub-districts of
    /// `parent_area_code` when given.
    pub async fn area_codes(&self, parent_area_code: Option<&str>) -> Result<Vec<AreaCode>, Error> {
        let mut query = AreaCodeQuery::default().with_num_of_rows(AREA_CODE_ROWS);
        if let Some(parent) = parent_area_code {
            query = query.with_area_code(parent);
        }
        Ok(self
            .get::<AreaCode, _>("areaCode2", &query)
            .await?
            .items
            .into_vec())
    }

    /// Fetches a page of attractions filtered by region and category.
    pub async fn area_based_list(
        &self,
        query: &AreaBasedListQuery,
    ) -> Result<Page<TourItem>, Error> {
        let body = self.get::<TourItem, _>("areaBasedList2", query).await?;
        Ok(Page::from_body(body))
    }

    /// Fetches a page of attractions matching a keyword.
    pub async fn search_keyword(&self, query: &KeywordQuery) -> Result<Page<TourItem>, Error> {
        require("keyword", &query.keyword)?;
        let body = self.get::<TourItem, _>("searchKeyword2", query).await?;
        Ok(Page::from_body(body))
    }

    /// Fetches the common detail record for one attraction.
    pub async fn detail_common(&self, content_id: &str) -> Result<TourDetail, Error> {
        let content_id = require("contentId", content_id)?;
        let query = DetailQuery::new(content_id);
        first_item(self.get::<TourDetail, _>("detailCommon2", &query).await?)
            .ok_or_else(|| Error::NotFound(format!("detail for content {}", content_id)))
    }

    /// Fetches operating information (hours, closing days, parking) for one attraction.
    pub async fn detail_intro(
        &self,
        content_id: &str,
        content_type_id: &str,
    ) -> Result<TourIntro, Error> {
        let content_id = require("contentId", content_id)?;
        let content_type_id = require("contentTypeId", content_type_id)?;
        let query = DetailQuery::new(content_id).with_content_type_id(content_type_id);
        first_item(self.get::<TourIntro, _>("detailIntro2", &query).await?)
            .ok_or_else(|| Error::NotFound(format!("intro for content {}", content_id)))
    }

    /// Lists the gallery images of one attraction. An attraction without
    /// images yields an empty list.
    pub async fn detail_images(&self, content_id: &str) -> Result<Vec<TourImage>, Error> {
        let content_id = require("contentId", content_id)?;
        let query = DetailQuery::new(content_id).with_images();
        Ok(self
            .get::<TourImage, _>("detailImage2", &query)
            .await?
            .items
            .into_vec())
    }

    /// Fetches pet companion information for one attraction.
    ///
    /// Pet information is optional upstream data: zero items, or a
    /// `SERVICE_ERROR` application failure that outlasts the retries, yields
    /// `Ok(None)`. Every other failure propagates.
    pub async fn detail_pet_tour(&self, content_id: &str) -> Result<Option<PetTourInfo>, Error> {
        let content_id = require("contentId", content_id)?;
        let query = DetailQuery::new(content_id);
        match self.get::<PetTourInfo, _>("detailPetTour2", &query).await {
            Ok(body) => Ok(first_item(body)),
            Err(err) if err.is_service_error() => {
                tracing::info!("No pet info for content {}: {}", content_id, err);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

/// Trims a required argument, rejecting it when nothing is left.
fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str, Error> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidArgument(name));
    }
    Ok(trimmed)
}

fn first_item<T>(body: Body<T>) -> Option<T> {
    body.items.into_vec().into_iter().next()
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
