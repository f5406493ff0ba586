//! photo-jsonld Common Library
//!
//! I/Oを持たない純粋なロジック:
//! - EXIF GPS有理数タプル → 10進度 変換
//! - ディレクトリ既定値と画像ごとの値のマージ（キャリーフォワード）
//! - JSON-LDレコードの組み立て

pub mod types;
pub mod error;
pub mod coords;
pub mod location;
pub mod record;

pub use types::{
    About, Coordinates, DirectoryMetadata, GeoCoordinates, GeoPoint, LinkedDataRecord,
    LocationCreated, Place, Rational, TagMap, TagValue,
};
pub use error::{Error, Result};
pub use coords::{
    dms_to_decimal, extract_coordinates, HemispherePolicy, GPS_LATITUDE, GPS_LATITUDE_REF,
    GPS_LONGITUDE, GPS_LONGITUDE_REF,
};
pub use location::{resolve_in_order, ResolvedLocation, RunningLocation};
pub use record::{build_record, content_url, RecordTemplate};
