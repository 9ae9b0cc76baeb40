//! Location and category filters shared by the list and keyword-search queries.

use chrono::NaiveDate;
use url::Url;

use super::common::{append_opt, Query};
use crate::types::{Arrange, ContentType};

/// Optional filters accepted by `areaBasedList2` and `searchKeyword2`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListFilter {
    pub area_code: Option<String>,
    pub sigungu_code: Option<String>,
    pub content_type: Option<ContentType>,
    pub cat1: Option<String>,
    pub cat2: Option<String>,
    pub cat3: Option<String>,
    pub arrange: Option<Arrange>,
    /// Only items modified on or after this date.
    pub modified_since: Option<NaiveDate>,
}

impl ListFilter {
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(arrange) = self.arrange {
            url.query_pairs_mut()
                .append_pair("arrange", &arrange.to_string());
        }
        if let Some(content_type) = self.content_type {
            url.query_pairs_mut()
                .append_pair("contentTypeId", &content_type.to_string());
        }
        append_opt(&mut url, "areaCode", self.area_code.as_deref());
        append_opt(&mut url, "sigunguCode", self.sigungu_code.as_deref());
        append_opt(&mut url, "cat1", self.cat1.as_deref());
        append_opt(&mut url, "cat2", self.cat2.as_deref());
        append_opt(&mut url, "cat3", self.cat3.as_deref());
        if let Some(since) = self.modified_since {
            url.query_pairs_mut()
                .append_pair("modifiedtime", &since.format("%Y%m%d").to_string());
        }
        url
    }
}

/// Builder methods for queries that carry a [`ListFilter`].
pub trait FilterQuery: Query {
    /// Returns a mutable reference to the filter fields.
    fn get_filter(&mut self) -> &mut ListFilter;

    fn with_area_code(mut self, area_code: &str) -> Self
    where
        Self: Sized,
    {
        self.get_filter().area_code = Some(area_code.to_string());
        self
    }

    fn with_sigungu_code(mut self, sigungu_code: &str) -> Self
    where
        Self: Sized,
    {
        self.get_filter().sigungu_code = Some(sigungu_code.to_string());
        self
    }

    fn with_content_type(mut self, content_type: ContentType) -> Self
    where
        Self: Sized,
    {
        self.get_filter().content_type = Some(content_type);
        self
    }

    /// Sets the category hierarchy; pass `None` for the levels to leave open.
    fn with_category(mut self, cat1: &str, cat2: Option<&str>, cat3: Option<&str>) -> Self
    where
        Self: Sized,
    {
        let filter = self.get_filter();
        filter.cat1 = Some(cat1.to_string());
        filter.cat2 = cat2.map(str::to_string);
        filter.cat3 = cat3.map(str::to_string);
        self
    }

    fn with_arrange(mut self, arrange: Arrange) -> Self
    where
        Self: Sized,
    {
        self.get_filter().arrange = Some(arrange);
        self
    }

    fn with_modified_since(mut self, since: NaiveDate) -> Self
    where
        Self: Sized,
    {
        self.get_filter().modified_since = Some(since);
        self
    }
}
