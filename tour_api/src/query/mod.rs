mod common;
pub use self::common::{Query, QueryCommon};

mod filter;
pub use self::filter::{FilterQuery, ListFilter};

mod area;
pub use self::area::AreaBasedListQuery;

mod keyword;
pub use self::keyword::KeywordQuery;

mod area_code;
pub use self::area_code::AreaCodeQuery;

mod detail;
pub(crate) use self::detail::DetailQuery;
