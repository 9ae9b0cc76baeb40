use url::Url;

use super::{
    common::QueryCommon,
    filter::{FilterQuery, ListFilter},
    Query,
};

/// Query for `areaBasedList2`: attractions filtered by region and category.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AreaBasedListQuery {
    pub common: QueryCommon,
    pub filter: ListFilter,
}

impl Query for AreaBasedListQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let url = self.common.add_to_url(url);
        self.filter.add_to_url(&url)
    }
}

impl FilterQuery for AreaBasedListQuery {
    fn get_filter(&mut self) -> &mut ListFilter {
        &mut self.filter
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::query::{AreaBasedListQuery, FilterQuery, Query};
    use crate::types::{Arrange, ContentType};

    #[test]
    fn test_area_based_list_query() {
        let url = Url::parse("https://example.com/areaBasedList2").unwrap();

        insta::assert_snapshot!(
            AreaBasedListQuery::default().add_to_url(&url).to_string(),
            @"https://example.com/areaBasedList2"
        );

        insta::assert_snapshot!(
            AreaBasedListQuery::default()
                .with_num_of_rows(12)
                .with_page(2)
                .with_area_code("1")
                .with_sigungu_code("23")
                .with_content_type(ContentType::TouristSpot)
                .with_arrange(Arrange::ModifiedWithImage)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/areaBasedList2?numOfRows=12&pageNo=2&arrange=Q&contentTypeId=12&areaCode=1&sigunguCode=23"
        );

        insta::assert_snapshot!(
            AreaBasedListQuery::default()
                .with_category("A01", Some("A0101"), None)
                .add_to_url(&url)
                .to_string(),
            @"https://example.com/areaBasedList2?cat1=A01&cat2=A0101"
        );
    }
}
