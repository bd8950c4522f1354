use crate::geo::models::GeoPoint;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LocationCode {
    #[serde(rename = "HN")]
    Hanoi,
    #[serde(rename = "TPHCM")]
    HoChiMinh,
    #[serde(rename = "HP")]
    HaiPhong,
    #[serde(rename = "ND")]
    NamDinh,
    #[serde(rename = "DN")]
    DaNang,
    #[serde(rename = "DL")]
    Dalat,
    #[serde(rename = "DHLA")]
    DucHoa,
}

#[derive(Debug, Error, PartialEq)]
#[error("unknown location code `{0}`")]
pub struct UnknownLocation(pub String);

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CityBounds {
    pub min_lng: f64,
    pub min_lat: f64,
    pub max_lng: f64,
    pub max_lat: f64,
    /// Half-side, in degrees, of the square searched for imagery around a random point.
    pub delta: f64,
}

impl CityBounds {
    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.min_lat..=self.max_lat).contains(&point.lat)
            && (self.min_lng..=self.max_lng).contains(&point.lng)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchArea {
    pub center: GeoPoint,
    pub search_box: SearchBox,
}

impl LocationCode {
    pub fn all() -> [LocationCode; 7] {
        [
            LocationCode::Hanoi,
            LocationCode::HoChiMinh,
            LocationCode::HaiPhong,
            LocationCode::NamDinh,
            LocationCode::DaNang,
            LocationCode::Dalat,
            LocationCode::DucHoa,
        ]
    }

    pub fn code(&self) -> &'static str {
        match self {
            LocationCode::Hanoi => "HN",
            LocationCode::HoChiMinh => "TPHCM",
            LocationCode::HaiPhong => "HP",
            LocationCode::NamDinh => "ND",
            LocationCode::DaNang => "DN",
            LocationCode::Dalat => "DL",
            LocationCode::DucHoa => "DHLA",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            LocationCode::Hanoi => "HA NOI",
            LocationCode::HoChiMinh => "TP. HO CHI MINH",
            LocationCode::HaiPhong => "HAI PHONG",
            LocationCode::NamDinh => "NAM DINH",
            LocationCode::DaNang => "DA NANG",
            LocationCode::Dalat => "DALAT",
            LocationCode::DucHoa => "DUC HOA",
        }
    }

    pub fn bounds(&self) -> CityBounds {
        let (min_lng, min_lat, max_lng, max_lat, delta) = match self {
            LocationCode::Hanoi => (105.77, 20.96, 105.88, 21.05, 0.003),
            LocationCode::HoChiMinh => (106.62, 10.71, 106.75, 10.83, 0.005),
            LocationCode::HaiPhong => (106.65, 20.8, 106.75, 20.9, 0.05),
            LocationCode::NamDinh => (106.0, 20.35, 106.25, 20.5, 0.005),
            LocationCode::DaNang => (108.17, 16.0, 108.25, 16.1, 0.005),
            LocationCode::Dalat => (108.38, 11.89, 108.50, 12.00, 0.005),
            LocationCode::DucHoa => (106.35, 10.85, 106.45, 10.95, 0.005),
        };
        CityBounds {
            min_lng,
            min_lat,
            max_lng,
            max_lat,
            delta,
        }
    }
}

impl FromStr for LocationCode {
    type Err = UnknownLocation;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        LocationCode::all()
            .into_iter()
            .find(|location| location.code() == code)
            .ok_or_else(|| UnknownLocation(code.to_string()))
    }
}

impl fmt::Display for LocationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
