use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::api::point::GridPoint;
use crate::core::bands::{is_northern_band, normalize_longitude, validate_zone_number, zone_number_at};
use crate::core::projection::{geographic_to_utm, utm_to_geographic};
use crate::util::coord::Coordinate;
use crate::util::error::MgrsGridError;

/// UTM coordinate grammar: zone, hemisphere letter, easting, northing.
const UTM_PATTERN: &str = r"^(\d{1,2})\s*([NSns])\s*(\d+\.?\d*)\s*(\d+\.?\d*)$";

fn utm_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(UTM_PATTERN).expect("valid UTM pattern"))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Hemisphere containing the latitude; the equator counts as north.
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 { Hemisphere::North } else { Hemisphere::South }
    }

    /// Hemisphere of a latitude band letter.
    pub fn from_band_letter(letter: char) -> Self {
        if is_northern_band(letter) { Hemisphere::North } else { Hemisphere::South }
    }

    pub fn is_northern(self) -> bool {
        self == Hemisphere::North
    }

    fn letter(self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        }
    }
}

/// A Universal Transverse Mercator coordinate, always tied to its zone.
///
/// # Example
///
/// ```
/// use mgrs_grid_rs::Utm;
///
/// # fn main() -> Result<(), mgrs_grid_rs::MgrsGridError> {
/// let utm = Utm::from(&(-76.9953, 38.8856));
/// assert_eq!(utm.zone_number(), 18);
/// let point = utm.to_point();
/// assert!((point.latitude() - 38.8856).abs() < 1e-5);
///
/// let parsed: Utm = "18 N 326938.11 4305973.76".parse()?;
/// assert_eq!(parsed.zone_number(), 18);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Utm {
    zone_number: u8,
    hemisphere: Hemisphere,
    easting: f64,
    northing: f64,
}

impl Utm {
    /// UTM coordinate from its parts; the zone number must be 1-60.
    pub fn new(
        zone_number: u8,
        hemisphere: Hemisphere,
        easting: f64,
        northing: f64,
    ) -> Result<Self, MgrsGridError> {
        validate_zone_number(zone_number)?;
        Ok(Self { zone_number, hemisphere, easting, northing })
    }

    pub(crate) fn create(zone_number: u8, hemisphere: Hemisphere, easting: f64, northing: f64) -> Self {
        debug_assert!(validate_zone_number(zone_number).is_ok());
        Self { zone_number, hemisphere, easting, northing }
    }

    /// Projection of a lon/lat degree coordinate, deriving the zone number
    /// (with the Svalbard and Norway remaps) and hemisphere.
    pub fn from<C: Coordinate>(coord: &C) -> Utm {
        let longitude = normalize_longitude(coord.x());
        let latitude = coord.y();
        let zone_number = zone_number_at(longitude, latitude);
        let hemisphere = Hemisphere::from_latitude(latitude);
        Self::from_point(&GridPoint::degrees(longitude, latitude), zone_number, hemisphere)
    }

    /// Projection of a point into a chosen zone and hemisphere.
    pub fn from_point(point: &GridPoint, zone_number: u8, hemisphere: Hemisphere) -> Utm {
        let point = point.to_degrees();
        let (easting, northing) = geographic_to_utm(
            point.longitude(),
            point.latitude(),
            zone_number,
            hemisphere.is_northern(),
        );
        Self::create(zone_number, hemisphere, easting, northing)
    }

    /// Inverse projection to a degree point.
    pub fn to_point(&self) -> GridPoint {
        let (longitude, latitude) = utm_to_geographic(
            self.easting,
            self.northing,
            self.zone_number,
            self.hemisphere.is_northern(),
        );
        GridPoint::degrees(longitude, latitude)
    }

    pub fn zone_number(&self) -> u8 {
        self.zone_number
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    pub fn easting(&self) -> f64 {
        self.easting
    }

    pub fn northing(&self) -> f64 {
        self.northing
    }
}

impl fmt::Display for Utm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:.2} {:.2}",
            self.zone_number,
            self.hemisphere.letter(),
            self.easting,
            self.northing
        )
    }
}

impl FromStr for Utm {
    type Err = MgrsGridError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let captures = utm_regex()
            .captures(value.trim())
            .ok_or_else(|| MgrsGridError::InvalidUtm(value.to_string()))?;
        let zone_number: u8 = captures[1]
            .parse()
            .map_err(|_| MgrsGridError::InvalidUtm(value.to_string()))?;
        validate_zone_number(zone_number)
            .map_err(|_| MgrsGridError::InvalidUtm(value.to_string()))?;
        let hemisphere = match &captures[2] {
            "N" | "n" => Hemisphere::North,
            _ => Hemisphere::South,
        };
        let easting: f64 = captures[3]
            .parse()
            .map_err(|_| MgrsGridError::InvalidUtm(value.to_string()))?;
        let northing: f64 = captures[4]
            .parse()
            .map_err(|_| MgrsGridError::InvalidUtm(value.to_string()))?;
        Ok(Self::create(zone_number, hemisphere, easting, northing))
    }
}
