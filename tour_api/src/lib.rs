mod client;
mod errors;
mod query;
mod retry;
pub mod types;
pub use self::client::{Client, ClientConfig, DEFAULT_BASE_URL, DEFAULT_MOBILE_APP};
pub use self::errors::Error;
pub use self::query::{
    AreaBasedListQuery, AreaCodeQuery, FilterQuery, KeywordQuery, ListFilter, Query, QueryCommon,
};
pub use self::retry::RetryPolicy;
