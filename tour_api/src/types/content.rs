use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Category of attraction, sent to the API as `contentTypeId`.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContentType {
    TouristSpot = 12,
    CulturalFacility = 14,
    Festival = 15,
    TravelCourse = 25,
    LeisureSports = 28,
    Accommodation = 32,
    Shopping = 38,
    Restaurant = 39,
}

impl ContentType {
    pub const ALL: [ContentType; 8] = [
        ContentType::TouristSpot,
        ContentType::CulturalFacility,
        ContentType::Festival,
        ContentType::TravelCourse,
        ContentType::LeisureSports,
        ContentType::Accommodation,
        ContentType::Shopping,
        ContentType::Restaurant,
    ];

    /// Numeric code used on the wire.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Display name as shown by the upstream service.
    pub fn label(&self) -> &'static str {
        match self {
            ContentType::TouristSpot => "관광지",
            ContentType::CulturalFacility => "문화시설",
            ContentType::Festival => "축제/공연/행사",
            ContentType::TravelCourse => "여행코스",
            ContentType::LeisureSports => "레포츠",
            ContentType::Accommodation => "숙박",
            ContentType::Shopping => "쇼핑",
            ContentType::Restaurant => "음식점",
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for ContentType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "12" => Ok(ContentType::TouristSpot),
            "14" => Ok(ContentType::CulturalFacility),
            "15" => Ok(ContentType::Festival),
            "25" => Ok(ContentType::TravelCourse),
            "28" => Ok(ContentType::LeisureSports),
            "32" => Ok(ContentType::Accommodation),
            "38" => Ok(ContentType::Shopping),
            "39" => Ok(ContentType::Restaurant),
            _ => Err(()),
        }
    }
}

/// Sort order, passed through verbatim as the `arrange` parameter.
///
/// The `*WithImage` variants only return items that have a representative image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Arrange {
    #[default]
    Title,
    Modified,
    Created,
    TitleWithImage,
    ModifiedWithImage,
    CreatedWithImage,
}

impl std::fmt::Display for Arrange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Arrange::Title => "A",
                Arrange::Modified => "C",
                Arrange::Created => "D",
                Arrange::TitleWithImage => "O",
                Arrange::ModifiedWithImage => "Q",
                Arrange::CreatedWithImage => "R",
            }
        )?;
        Ok(())
    }
}

impl FromStr for Arrange {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Arrange::Title),
            "C" => Ok(Arrange::Modified),
            "D" => Ok(Arrange::Created),
            "O" => Ok(Arrange::TitleWithImage),
            "Q" => Ok(Arrange::ModifiedWithImage),
            "R" => Ok(Arrange::CreatedWithImage),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_codes_round_trip_through_display() {
        for content_type in ContentType::ALL {
            let code = content_type.to_string();
            assert_eq!(code.parse::<ContentType>(), Ok(content_type));
        }
        assert_eq!(ContentType::Restaurant.to_string(), "39");
        assert!("13".parse::<ContentType>().is_err());
    }

    #[test]
    fn arrange_letters() {
        assert_eq!(Arrange::default().to_string(), "A");
        assert_eq!(Arrange::ModifiedWithImage.to_string(), "Q");
        assert_eq!("R".parse::<Arrange>(), Ok(Arrange::CreatedWithImage));
        assert!("Z".parse::<Arrange>().is_err());
    }
}
