mod de;

mod envelope;
pub use self::envelope::{decode_envelope, normalize, Body, Header, ItemField, SUCCESS_CODE};

mod page;
pub use self::page::{total_pages, Page};

mod content;
pub use self::content::{Arrange, ContentType};

mod tour;
pub use self::tour::{AreaCode, ContentID, PetTourInfo, TourDetail, TourImage, TourIntro, TourItem};
