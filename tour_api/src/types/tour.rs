//! Attraction records returned by the list and detail endpoints.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::content::ContentType;
use super::de;

/// Opaque upstream identifier for a single attraction (e.g. "126508").
pub type ContentID = String;

/// Summary record returned by `areaBasedList2` and `searchKeyword2`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TourItem {
    #[serde(rename = "contentid", deserialize_with = "de::string")]
    pub content_id: ContentID,

    #[serde(
        rename = "contenttypeid",
        default,
        deserialize_with = "de::opt_string"
    )]
    pub content_type_id: Option<String>,

    #[serde(default)]
    pub title: String,

    /// Street address.
    pub addr1: Option<String>,
    /// Address detail (building, floor).
    pub addr2: Option<String>,
    #[serde(default, deserialize_with = "de::opt_string")]
    pub zipcode: Option<String>,

    #[serde(rename = "areacode", default, deserialize_with = "de::opt_string")]
    pub area_code: Option<String>,
    #[serde(rename = "sigungucode", default, deserialize_with = "de::opt_string")]
    pub sigungu_code: Option<String>,

    pub cat1: Option<String>,
    pub cat2: Option<String>,
    pub cat3: Option<String>,

    /// Representative image, full size.
    #[serde(rename = "firstimage")]
    pub first_image: Option<String>,
    /// Representative image, thumbnail.
    #[serde(rename = "firstimage2")]
    pub first_image2: Option<String>,

    /// Longitude (WGS84) as sent by the upstream.
    #[serde(rename = "mapx", default, deserialize_with = "de::opt_string")]
    pub map_x: Option<String>,
    /// Latitude (WGS84) as sent by the upstream.
    #[serde(rename = "mapy", default, deserialize_with = "de::opt_string")]
    pub map_y: Option<String>,
    #[serde(rename = "mlevel", default, deserialize_with = "de::opt_string")]
    pub map_level: Option<String>,

    pub tel: Option<String>,

    /// `YYYYMMDDHHMMSS`.
    #[serde(rename = "createdtime", default, deserialize_with = "de::opt_string")]
    pub created_time: Option<String>,
    /// `YYYYMMDDHHMMSS`.
    #[serde(rename = "modifiedtime", default, deserialize_with = "de::opt_string")]
    pub modified_time: Option<String>,

    /// Image copyright category (Type1 / Type3).
    #[serde(rename = "cpyrhtDivCd")]
    pub copyright_div: Option<String>,

    #[serde(rename = "lDongRegnCd", default, deserialize_with = "de::opt_string")]
    pub ldong_regn_code: Option<String>,
    #[serde(rename = "lDongSignguCd", default, deserialize_with = "de::opt_string")]
    pub ldong_signgu_code: Option<String>,

    #[serde(rename = "lclsSystm1")]
    pub lcls_systm1: Option<String>,
    #[serde(rename = "lclsSystm2")]
    pub lcls_systm2: Option<String>,
    #[serde(rename = "lclsSystm3")]
    pub lcls_systm3: Option<String>,
}

impl TourItem {
    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type_id.as_deref()?.parse().ok()
    }

    /// Parses `mapx`/`mapy` into `(longitude, latitude)`.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        let x = self.map_x.as_deref()?.trim().parse().ok()?;
        let y = self.map_y.as_deref()?.trim().parse().ok()?;
        Some((x, y))
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(self.created_time.as_deref()?)
    }

    pub fn modified_at(&self) -> Option<NaiveDateTime> {
        parse_timestamp(self.modified_time.as_deref()?)
    }

    /// Best available image: full size first, then the thumbnail.
    pub fn image(&self) -> Option<&str> {
        non_empty(self.first_image.as_deref()).or(non_empty(self.first_image2.as_deref()))
    }
}

/// Common detail record returned by `detailCommon2`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TourDetail {
    #[serde(flatten)]
    pub summary: TourItem,

    pub homepage: Option<String>,

    pub overview: Option<String>,

    #[serde(rename = "telname")]
    pub tel_name: Option<String>,
}

/// Operating information returned by `detailIntro2`.
///
/// The fields differ per content type (a restaurant has `firstmenu`, an
/// accommodation has `checkintime`), so everything except the identifiers
/// is kept by its upstream key.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TourIntro {
    #[serde(rename = "contentid", deserialize_with = "de::string")]
    pub content_id: ContentID,

    #[serde(
        rename = "contenttypeid",
        default,
        deserialize_with = "de::opt_string"
    )]
    pub content_type_id: Option<String>,

    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
}

const INFO_CENTER_KEYS: &[&str] = &[
    "infocenter",
    "infocenterculture",
    "infocenterleports",
    "infocenterlodging",
    "infocentershopping",
    "infocenterfood",
    "infocentertourcourse",
];
const USE_TIME_KEYS: &[&str] = &[
    "usetime",
    "usetimeculture",
    "usetimeleports",
    "usetimefestival",
    "opentime",
    "opentimefood",
    "checkintime",
];
const REST_DATE_KEYS: &[&str] = &[
    "restdate",
    "restdateculture",
    "restdateleports",
    "restdateshopping",
    "restdatefood",
];
const PARKING_KEYS: &[&str] = &[
    "parking",
    "parkingculture",
    "parkingleports",
    "parkinglodging",
    "parkingshopping",
    "parkingfood",
];
const PET_KEYS: &[&str] = &["chkpet", "chkpetculture", "chkpetleports", "chkpetshopping"];

impl TourIntro {
    pub fn content_type(&self) -> Option<ContentType> {
        self.content_type_id.as_deref()?.parse().ok()
    }

    /// Raw value for an upstream key. Blank strings count as missing.
    pub fn get(&self, key: &str) -> Option<&str> {
        non_empty(self.fields.get(key)?.as_str())
    }

    fn first_of(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }

    /// Contact point, whichever per-type key the upstream used.
    pub fn info_center(&self) -> Option<&str> {
        self.first_of(INFO_CENTER_KEYS)
    }

    pub fn use_time(&self) -> Option<&str> {
        self.first_of(USE_TIME_KEYS)
    }

    pub fn rest_date(&self) -> Option<&str> {
        self.first_of(REST_DATE_KEYS)
    }

    pub fn parking(&self) -> Option<&str> {
        self.first_of(PARKING_KEYS)
    }

    pub fn pet_policy(&self) -> Option<&str> {
        self.first_of(PET_KEYS)
    }
}

/// Image record returned by `detailImage2`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct TourImage {
    #[serde(rename = "contentid", deserialize_with = "de::string")]
    pub content_id: ContentID,
    #[serde(rename = "originimgurl")]
    pub origin_url: Option<String>,
    #[serde(rename = "smallimageurl")]
    pub small_url: Option<String>,
    #[serde(rename = "imgname")]
    pub name: Option<String>,
    #[serde(rename = "serialnum")]
    pub serial_num: Option<String>,
    #[serde(rename = "cpyrhtDivCd")]
    pub copyright_div: Option<String>,
}

/// Pet companion information returned by `detailPetTour2`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct PetTourInfo {
    #[serde(rename = "contentid", deserialize_with = "de::string")]
    pub content_id: ContentID,
    /// Which pets may accompany (size, breed).
    #[serde(rename = "acmpyPsblCpam")]
    pub possible: Option<String>,
    /// Where pets may go (whole site, outdoor only).
    #[serde(rename = "acmpyTypeCd")]
    pub accompany_type: Option<String>,
    /// Requirements (leash, muzzle, carrier).
    #[serde(rename = "acmpyNeedMtr")]
    pub requirements: Option<String>,
    #[serde(rename = "relaPosesFclty")]
    pub facilities: Option<String>,
    #[serde(rename = "relaFrnshPrdlst")]
    pub furnished_items: Option<String>,
    #[serde(rename = "relaPurcPrdlst")]
    pub purchasable_items: Option<String>,
    #[serde(rename = "relaRntlPrdlst")]
    pub rental_items: Option<String>,
    #[serde(rename = "relaAcdntRiskMtr")]
    pub accident_risk: Option<String>,
    #[serde(rename = "etcAcmpyInfo")]
    pub etc: Option<String>,
}

/// Area or sub-district (sigungu) code returned by `areaCode2`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct AreaCode {
    #[serde(default, deserialize_with = "de::opt_u64")]
    pub rnum: Option<u64>,
    #[serde(deserialize_with = "de::string")]
    pub code: String,
    pub name: String,
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value.trim(), "%Y%m%d%H%M%S").ok()
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
