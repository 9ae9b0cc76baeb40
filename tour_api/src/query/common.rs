//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] paging fields.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page_no: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().page_no = Some(page_no);
        self
    }

    /// Sets the number of results per page.
    fn with_num_of_rows(mut self, num_of_rows: u32) -> Self
    where
        Self: Sized,
    {
        self.get_common().num_of_rows = Some(num_of_rows);
        self
    }
}

/// Paging fields shared by all query types. `None` leaves the parameter
/// off the request so the upstream default applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryCommon {
    pub page_no: Option<u32>,
    pub num_of_rows: Option<u32>,
}

impl QueryCommon {
    /// Appends the paging parameters to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Some(num_of_rows) = self.num_of_rows {
            url.query_pairs_mut()
                .append_pair("numOfRows", &num_of_rows.to_string());
        };
        if let Some(page_no) = self.page_no {
            url.query_pairs_mut()
                .append_pair("pageNo", &page_no.to_string());
        };
        url
    }
}

/// Appends `key=value` unless the value is missing or blank. The value is
/// sent trimmed.
pub(crate) fn append_opt(url: &mut Url, key: &str, value: Option<&str>) {
    if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
        url.query_pairs_mut().append_pair(key, value);
    }
}
