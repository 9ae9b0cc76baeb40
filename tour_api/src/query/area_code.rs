use url::Url;

use super::{
    common::{append_opt, QueryCommon},
    Query,
};

/// Query for `areaCode2`. Without a parent area code the upstream lists
/// provinces and metropolitan cities; with one it lists that area's
/// sub-districts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaCodeQuery {
    pub common: QueryCommon,
    pub area_code: Option<String>,
}

impl AreaCodeQuery {
    pub fn with_area_code(mut self, area_code: &str) -> Self {
        self.area_code = Some(area_code.to_string());
        self
    }
}

impl Query for AreaCodeQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = self.common.add_to_url(url);
        append_opt(&mut url, "areaCode", self.area_code.as_deref());
        url
    }
}
