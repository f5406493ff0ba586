//! GPS座標変換
//!
//! EXIFの度・分・秒（それぞれ有理数）を10進度に変換する。
//! 既定では北緯/南緯・東経/西経の符号を付けない（既存出力との互換のため）。

use crate::types::{Coordinates, Rational, TagMap};
use serde::{Deserialize, Serialize};

pub const GPS_LATITUDE: &str = "GPS GPSLatitude";
pub const GPS_LONGITUDE: &str = "GPS GPSLongitude";
pub const GPS_LATITUDE_REF: &str = "GPS GPSLatitudeRef";
pub const GPS_LONGITUDE_REF: &str = "GPS GPSLongitudeRef";

/// 方位（N/S, E/W）の扱い
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HemispherePolicy {
    /// 生の値をそのまま使う（南緯・西経でも正の値）
    #[default]
    Ignore,
    /// GPSLatitudeRef = S / GPSLongitudeRef = W のとき負にする
    Apply,
}

impl std::str::FromStr for HemispherePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ignore" => Ok(HemispherePolicy::Ignore),
            "apply" => Ok(HemispherePolicy::Apply),
            _ => Err(format!("Unknown hemisphere policy: {}. Use ignore or apply", s)),
        }
    }
}

impl std::fmt::Display for HemispherePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HemispherePolicy::Ignore => write!(f, "ignore"),
            HemispherePolicy::Apply => write!(f, "apply"),
        }
    }
}

/// 度・分・秒 → 10進度
///
/// `d + m/60 + s/3600`。分母0はNone。
pub fn dms_to_decimal(degrees: Rational, minutes: Rational, seconds: Rational) -> Option<f64> {
    let d = degrees.to_f64().ok()?;
    let m = minutes.to_f64().ok()?;
    let s = seconds.to_f64().ok()?;
    Some(d + m / 60.0 + s / 3600.0)
}

fn axis(tags: &TagMap, key: &str) -> Option<f64> {
    match tags.get(key)?.as_rationals()? {
        [d, m, s, ..] => dms_to_decimal(*d, *m, *s),
        _ => None,
    }
}

fn is_negative_ref(tags: &TagMap, key: &str, negative: char) -> bool {
    tags.get(key)
        .and_then(|v| v.as_text())
        .map(|t| t.trim().starts_with(negative))
        .unwrap_or(false)
}

/// タグマップから座標を取り出す
///
/// 緯度・経度のどちらかが欠けている（または不正な）場合は `None`。
/// 片方だけの結果は返さない。
pub fn extract_coordinates(tags: &TagMap, policy: HemispherePolicy) -> Option<Coordinates> {
    let mut latitude = axis(tags, GPS_LATITUDE)?;
    let mut longitude = axis(tags, GPS_LONGITUDE)?;

    if policy == HemispherePolicy::Apply {
        if is_negative_ref(tags, GPS_LATITUDE_REF, 'S') {
            latitude = -latitude;
        }
        if is_negative_ref(tags, GPS_LONGITUDE_REF, 'W') {
            longitude = -longitude;
        }
    }

    Some(Coordinates { latitude, longitude })
}
