//! The upstream response envelope and item-shape normalization.
//!
//! Every response is wrapped as
//! `{ "response": { "header": {...}, "body": {...} } }`, but rejected
//! requests may instead come back as a bare `{ header, body }` or a flat
//! `{ "resultCode", "resultMsg" }`. `body.items` may be missing, an empty
//! string, or `{ "item": T | [T] }`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use super::de;
use crate::Error;

/// The result code the upstream uses for "no error".
pub const SUCCESS_CODE: &str = "0000";

/// Result status carried by every envelope.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    #[serde(deserialize_with = "de::string")]
    pub result_code: String,
    #[serde(default, deserialize_with = "de::string_or_empty")]
    pub result_msg: String,
}

impl Header {
    pub fn is_success(&self) -> bool {
        self.result_code == SUCCESS_CODE
    }
}

/// Payload section of a successful envelope.
#[derive(Deserialize, Debug)]
#[serde(
    rename_all = "camelCase",
    bound(deserialize = "T: Deserialize<'de>")
)]
pub struct Body<T> {
    #[serde(default)]
    pub items: ItemField<T>,
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub num_of_rows: Option<u64>,
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub page_no: Option<u64>,
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub total_count: Option<u64>,
}

impl<T> Default for Body<T> {
    fn default() -> Self {
        Self {
            items: ItemField::Absent,
            num_of_rows: None,
            page_no: None,
            total_count: None,
        }
    }
}

/// The three shapes `body.items.item` arrives in.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemField<T> {
    Absent,
    One(T),
    Many(Vec<T>),
}

impl<T> Default for ItemField<T> {
    fn default() -> Self {
        ItemField::Absent
    }
}

impl<T> ItemField<T> {
    pub fn into_vec(self) -> Vec<T> {
        normalize(self)
    }
}

/// Flattens the item field into an ordered sequence, preserving upstream order.
pub fn normalize<T>(field: ItemField<T>) -> Vec<T> {
    match field {
        ItemField::Absent => Vec::new(),
        ItemField::One(item) => vec![item],
        ItemField::Many(items) => items,
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItem<T> {
    Many(Vec<T>),
    One(T),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawItems<T> {
    Wrapped { item: Option<RawItem<T>> },
    // The upstream sends `"items": ""` when there are no results. Only a
    // string matches here, so other junk still fails to decode.
    Blank(#[allow(dead_code)] String),
}

impl<'de, T> Deserialize<'de> for ItemField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<RawItems<T>>::deserialize(deserializer)? {
            None | Some(RawItems::Blank(_)) | Some(RawItems::Wrapped { item: None }) => {
                ItemField::Absent
            }
            Some(RawItems::Wrapped {
                item: Some(RawItem::One(item)),
            }) => ItemField::One(item),
            Some(RawItems::Wrapped {
                item: Some(RawItem::Many(items)),
            }) => ItemField::Many(items),
        })
    }
}

#[derive(Deserialize)]
struct Envelope {
    header: Header,
    #[serde(default)]
    body: Option<serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawEnvelope {
    Wrapped { response: Envelope },
    Bare(Envelope),
    Flat(Header),
}

/// Parses a response body, rejecting any envelope whose result code is not
/// [`SUCCESS_CODE`] before the payload is decoded into `T`.
pub fn decode_envelope<T: DeserializeOwned>(text: &str) -> Result<Body<T>, Error> {
    let raw: RawEnvelope = serde_json::from_str(text).map_err(|e| {
        tracing::error!("Failed to parse envelope: {} | body: {}", e, truncate(text));
        Error::Decode(e.to_string())
    })?;

    let (header, body) = match raw {
        RawEnvelope::Wrapped { response } | RawEnvelope::Bare(response) => {
            (response.header, response.body)
        }
        RawEnvelope::Flat(header) => (header, None),
    };

    if !header.is_success() {
        return Err(Error::Upstream {
            code: header.result_code,
            message: header.result_msg,
        });
    }

    match body {
        None | Some(serde_json::Value::Null) => Ok(Body::default()),
        Some(value) => serde_json::from_value(value).map_err(|e| {
            tracing::error!("Failed to parse envelope body: {} | body: {}", e, truncate(text));
            Error::Decode(e.to_string())
        }),
    }
}

fn truncate(body: &str) -> &str {
    const MAX: usize = 500;
    if body.len() <= MAX {
        return body;
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    &body[..end]
}
