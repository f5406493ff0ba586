//! 撮影場所のマージ
//!
//! ディレクトリ既定値から始め、GPSを持つ画像が現れるたびに緯度・経度を上書きする。
//! GPSを持たない画像は直前の値を引き継ぐ（画像ごとにリセットしない）。
//! 場所名は画像側に情報源がないため、既定値のまま変わらない。

use crate::types::{Coordinates, DirectoryMetadata};

/// ある画像に適用された場所
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedLocation {
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// 走査中の「現在の場所」
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunningLocation {
    current: ResolvedLocation,
}

impl RunningLocation {
    pub fn seed(metadata: &DirectoryMetadata) -> Self {
        let loc = &metadata.location_created;
        Self {
            current: ResolvedLocation {
                name: loc.name.clone(),
                latitude: loc.geo.latitude,
                longitude: loc.geo.longitude,
            },
        }
    }

    /// 画像の座標を取り込み、その画像に適用する場所を返す
    pub fn absorb(&mut self, coords: Option<Coordinates>) -> ResolvedLocation {
        if let Some(c) = coords {
            self.current.latitude = Some(c.latitude);
            self.current.longitude = Some(c.longitude);
        }
        self.current.clone()
    }
}

/// 走査順に座標を畳み込む
///
/// 戻り値は入力と同じ順序・同じ件数。
pub fn resolve_in_order<I>(seed: RunningLocation, coords: I) -> Vec<ResolvedLocation>
where
    I: IntoIterator<Item = Option<Coordinates>>,
{
    coords
        .into_iter()
        .scan(seed, |running, c| Some(running.absorb(c)))
        .collect()
}
