use url::Url;

use super::{
    common::QueryCommon,
    filter::{FilterQuery, ListFilter},
    Query,
};

/// Query for `searchKeyword2`. The keyword is required; the client rejects
/// a blank keyword before sending anything.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeywordQuery {
    pub common: QueryCommon,
    pub keyword: String,
    pub filter: ListFilter,
}

impl KeywordQuery {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
            ..Default::default()
        }
    }

    pub fn with_keyword(mut self, keyword: &str) -> Self {
        self.keyword = keyword.to_string();
        self
    }
}

impl Query for KeywordQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("keyword", self.keyword.trim());
        self.filter.add_to_url(&url)
    }
}

impl FilterQuery for KeywordQuery {
    fn get_filter(&mut self) -> &mut ListFilter {
        &mut self.filter
    }
}
