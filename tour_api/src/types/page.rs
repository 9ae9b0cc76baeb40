use serde::{Deserialize, Serialize};

use super::envelope::Body;

const DEFAULT_NUM_OF_ROWS: u64 = 20;
const DEFAULT_PAGE_NO: u64 = 1;

/// One page of list results with client-derived pagination counters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub num_of_rows: u64,
    pub page_no: u64,
    pub total_pages: u64,
}

impl<T> Page<T> {
    /// Builds a page from an envelope body. Missing counters default to
    /// 0 total, 20 rows and page 1; `total_pages` is always recomputed.
    pub fn from_body(body: Body<T>) -> Self {
        let total_count = body.total_count.unwrap_or(0);
        let num_of_rows = body.num_of_rows.unwrap_or(DEFAULT_NUM_OF_ROWS);
        Self {
            items: body.items.into_vec(),
            total_count,
            num_of_rows,
            page_no: body.page_no.unwrap_or(DEFAULT_PAGE_NO),
            total_pages: total_pages(total_count, num_of_rows),
        }
    }

    pub fn has_next(&self) -> bool {
        self.page_no < self.total_pages
    }
}

/// `ceil(total_count / num_of_rows)`, or 0 when `num_of_rows` is 0.
pub fn total_pages(total_count: u64, num_of_rows: u64) -> u64 {
    if num_of_rows == 0 {
        return 0;
    }
    total_count.div_ceil(num_of_rows)
}
