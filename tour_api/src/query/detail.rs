use url::Url;

use super::{common::QueryCommon, Query};

/// Parameters for the per-attraction detail endpoints. Built by the client
/// after the identifiers have been validated.
#[derive(Clone, Debug, Default)]
pub(crate) struct DetailQuery {
    common: QueryCommon,
    content_id: String,
    content_type_id: Option<String>,
    image_yn: bool,
}

impl DetailQuery {
    pub(crate) fn new(content_id: &str) -> Self {
        Self {
            content_id: content_id.to_string(),
            ..Default::default()
        }
    }

    pub(crate) fn with_content_type_id(mut self, content_type_id: &str) -> Self {
        self.content_type_id = Some(content_type_id.to_string());
        self
    }

    /// Requests content images rather than menu images on `detailImage2`.
    pub(crate) fn with_images(mut self) -> Self {
        self.image_yn = true;
        self
    }
}

impl Query for DetailQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        url.query_pairs_mut()
            .append_pair("contentId", &self.content_id);
        if let Some(content_type_id) = &self.content_type_id {
            url.query_pairs_mut()
                .append_pair("contentTypeId", content_type_id);
        }
        if self.image_yn {
            url.query_pairs_mut().append_pair("imageYN", "Y");
        }
        url
    }
}
