use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::api::bounds::Line;
use crate::api::grid_type::GridType;
use crate::api::partition::ZonePartition;
use crate::api::point::GridPoint;
use crate::api::utm::{Hemisphere, Utm};
use crate::core::bands::{
    band_letter, band_south_latitude, normalize_longitude, validate_band_letter,
    validate_zone_number,
};
use crate::core::constants::{HUNDRED_KM, MAX_LAT, MIN_LAT, ROW_LETTER_CYCLE};
use crate::core::letters::{column_index, column_letter, row_index, row_letter};
use crate::util::coord::Coordinate;
use crate::util::error::MgrsGridError;

/// MGRS grammar: zone, band, optional 100 km square, optional digit pairs.
const MGRS_PATTERN: &str =
    r"^(\d{1,2})([C-HJ-NP-X])(?:([A-HJ-NP-Z][A-HJ-NP-V])((?:\d\d){0,5})?)?$";

fn mgrs_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(MGRS_PATTERN).expect("valid MGRS pattern"))
}

/// Slack absorbed when quantizing projected meters onto the grid lattice.
///
/// UTM values are centimeter rounded and a projection round trip moves a
/// lattice point by up to a few centimeters, so anything this close below
/// a whole meter belongs to it.
const GRID_EPSILON: f64 = 0.05;

/// A Military Grid Reference System coordinate.
///
/// Easting and northing are the meters within the 100 km square, always
/// in [0, 100000).
///
/// # Example
///
/// ```
/// use mgrs_grid_rs::{GridType, Mgrs};
///
/// # fn main() -> Result<(), mgrs_grid_rs::MgrsGridError> {
/// let mgrs = Mgrs::from(&(-76.9953, 38.8856));
/// assert_eq!(mgrs.to_string(), "18S UJ 26938 05973");
/// assert_eq!(mgrs.coordinate(GridType::Kilometer), "18SUJ2605");
///
/// let parsed: Mgrs = "18SUJ2693805973".parse()?;
/// assert_eq!(parsed, mgrs);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mgrs {
    zone_number: u8,
    band_letter: char,
    column_letter: char,
    row_letter: char,
    easting: u32,
    northing: u32,
}

impl Mgrs {
    /// MGRS coordinate from its parts.
    ///
    /// The zone number, band letter, and the column letter against the
    /// zone's alphabet are validated, as is the [0, 100000) range of the
    /// easting and northing.
    pub fn new(
        zone_number: u8,
        band_letter: char,
        column_letter: char,
        row_letter: char,
        easting: u32,
        northing: u32,
    ) -> Result<Self, MgrsGridError> {
        validate_zone_number(zone_number)?;
        validate_band_letter(band_letter)?;
        if column_index(zone_number, column_letter).is_none() {
            return Err(MgrsGridError::InvalidMgrs(format!(
                "column letter {} is not valid for zone {}",
                column_letter, zone_number
            )));
        }
        if row_index(zone_number, row_letter).is_none() {
            return Err(MgrsGridError::InvalidMgrs(format!(
                "row letter {} is not valid",
                row_letter
            )));
        }
        if easting >= 100_000 || northing >= 100_000 {
            return Err(MgrsGridError::InvalidMgrs(format!(
                "easting {} / northing {} outside the 100 km square",
                easting, northing
            )));
        }
        Ok(Self { zone_number, band_letter, column_letter, row_letter, easting, northing })
    }

    fn create(
        zone_number: u8,
        band_letter: char,
        column_letter: char,
        row_letter: char,
        easting: u32,
        northing: u32,
    ) -> Self {
        debug_assert!(validate_zone_number(zone_number).is_ok());
        debug_assert!(validate_band_letter(band_letter).is_ok());
        Self { zone_number, band_letter, column_letter, row_letter, easting, northing }
    }

    /// MGRS coordinate of a lon/lat degree coordinate.
    ///
    /// The latitude is clamped to [-80, 84] and the longitude normalized
    /// into range before projecting.
    pub fn from<C: Coordinate>(coord: &C) -> Mgrs {
        Self::from_point(&GridPoint::degrees(coord.x(), coord.y()))
    }

    /// MGRS coordinate of a point.
    pub fn from_point(point: &GridPoint) -> Mgrs {
        let point = point.to_degrees();
        let longitude = normalize_longitude(point.longitude());
        let latitude = point.latitude().clamp(MIN_LAT, MAX_LAT);

        let utm = Utm::from(&(longitude, latitude));
        let band = band_letter(latitude, true);

        // quantize once, then split the letters and digits from the same
        // snapped meters so both stay on the same lattice cell
        let easting = (utm.easting() + GRID_EPSILON).floor();
        let northing = (utm.northing() + GRID_EPSILON).floor();
        let column = column_letter(utm.zone_number(), easting);
        let row = row_letter(utm.zone_number(), northing);

        Self::create(
            utm.zone_number(),
            band,
            column,
            row,
            easting.rem_euclid(HUNDRED_KM) as u32,
            northing.rem_euclid(HUNDRED_KM) as u32,
        )
    }

    /// The full UTM coordinate.
    ///
    /// The easting is rebuilt from the column letter's cycle position. The
    /// northing adds 2,000,000 m row cycles until it reaches the band's
    /// southern edge northing, which handles the row letter wraparound
    /// between widely separated bands.
    pub fn utm(&self) -> Utm {
        let column = column_index(self.zone_number, self.column_letter).unwrap_or(0);
        let easting = column as f64 * HUNDRED_KM + f64::from(self.easting);

        let row = row_index(self.zone_number, self.row_letter).unwrap_or(0);
        let hemisphere = Hemisphere::from_band_letter(self.band_letter);

        // northing of the band's southern edge, extended down to the
        // enclosing 100 km square
        let band_south = band_south_latitude(self.band_letter);
        let south_utm = Utm::from(&(0.0, band_south));
        let band_northing = (south_utm.northing() / HUNDRED_KM).floor() * HUNDRED_KM;

        let mut northing = row as f64 * HUNDRED_KM + f64::from(self.northing);
        while northing < band_northing {
            northing += ROW_LETTER_CYCLE;
        }

        Utm::create(self.zone_number, hemisphere, easting, northing)
    }

    /// The degree point of this coordinate's southwest corner.
    pub fn to_point(&self) -> GridPoint {
        self.utm().to_point()
    }

    pub fn zone_number(&self) -> u8 {
        self.zone_number
    }

    pub fn band_letter(&self) -> char {
        self.band_letter
    }

    pub fn column_letter(&self) -> char {
        self.column_letter
    }

    pub fn row_letter(&self) -> char {
        self.row_letter
    }

    /// Easting within the 100 km square.
    pub fn easting(&self) -> u32 {
        self.easting
    }

    /// Northing within the 100 km square.
    pub fn northing(&self) -> u32 {
        self.northing
    }

    /// Grid zone designator name, e.g. "18S".
    pub fn gzd(&self) -> String {
        format!("{}{}", self.zone_number, self.band_letter)
    }

    /// The 100 km square column/row pair, e.g. "UJ".
    pub fn column_row_id(&self) -> String {
        format!("{}{}", self.column_letter, self.row_letter)
    }

    /// Number of digits the easting and northing carry, 0-5.
    ///
    /// Each power of ten dividing both values drops one digit.
    pub fn accuracy(&self) -> u32 {
        let mut accuracy = 5;
        let mut level = 10;
        while level <= 100_000 {
            if self.easting % level != 0 || self.northing % level != 0 {
                break;
            }
            accuracy -= 1;
            level *= 10;
        }
        accuracy
    }

    /// Grid precision encoded by the easting and northing digits.
    pub fn precision(&self) -> GridType {
        GridType::from_accuracy(self.accuracy())
    }

    /// The compact designator at the requested precision, e.g.
    /// "18SUJ2605" at [`GridType::Kilometer`].
    pub fn coordinate(&self, grid_type: GridType) -> String {
        let mut value = self.gzd();
        if grid_type != GridType::Gzd {
            value.push(self.column_letter);
            value.push(self.row_letter);
            if grid_type != GridType::HundredKilometer {
                value.push_str(&self.easting_northing(grid_type));
            }
        }
        value
    }

    /// Easting then northing digits at the requested precision.
    pub(crate) fn easting_northing(&self, grid_type: GridType) -> String {
        let accuracy = grid_type.accuracy() as usize;
        let easting = format!("{:05}", self.easting);
        let northing = format!("{:05}", self.northing);
        format!("{}{}", &easting[..accuracy], &northing[..accuracy])
    }
}

impl fmt::Display for Mgrs {
    /// The spaced one meter form, e.g. "18S UJ 26938 05973".
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {}{} {:05} {:05}",
            self.zone_number,
            self.band_letter,
            self.column_letter,
            self.row_letter,
            self.easting,
            self.northing
        )
    }
}

impl FromStr for Mgrs {
    type Err = MgrsGridError;

    /// Parses an MGRS string, ignoring whitespace and letter case.
    ///
    /// A zone/band-only string decodes to the grid zone's southwest
    /// corner. A 100 km square without digits decodes to the square's
    /// southwest corner, snapped one meter inside the grid zone when the
    /// regular square lattice puts that corner outside the zone's true
    /// bounds.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let invalid = || MgrsGridError::InvalidMgrs(value.to_string());

        let compact: String = value
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();
        let captures = mgrs_regex().captures(&compact).ok_or_else(invalid)?;

        let zone_number: u8 = captures[1].parse().map_err(|_| invalid())?;
        validate_zone_number(zone_number).map_err(|_| invalid())?;
        let band = captures[2].chars().next().ok_or_else(invalid)?;

        // rejects the Svalbard gaps 32X, 34X and 36X
        let grid_zone = ZonePartition::global()
            .grid_zone(zone_number, band)
            .ok_or_else(invalid)?;

        let Some(column_row) = captures.get(3) else {
            // zone and band only: the grid zone's southwest corner
            return Ok(Mgrs::from_point(&grid_zone.bounds().southwest()));
        };
        let mut letters = column_row.as_str().chars();
        let column = letters.next().ok_or_else(invalid)?;
        let row = letters.next().ok_or_else(invalid)?;

        let digits = captures.get(4).map(|m| m.as_str()).unwrap_or("");
        if !digits.is_empty() {
            let accuracy = digits.len() / 2;
            let multiplier = 10u32.pow(5 - accuracy as u32);
            let easting: u32 = digits[..accuracy].parse().map_err(|_| invalid())?;
            let northing: u32 = digits[accuracy..].parse().map_err(|_| invalid())?;
            return Mgrs::new(zone_number, band, column, row, easting * multiplier, northing * multiplier);
        }

        // 100 km square only: its southwest corner, unless the regular
        // lattice places it outside the grid zone
        let mgrs = Mgrs::new(zone_number, band, column, row, 0, 0)?;
        let point = mgrs.to_point();
        let zone_bounds = grid_zone.bounds();
        let southwest = zone_bounds.southwest();
        let west_out = point.longitude() < southwest.longitude();
        let south_out = point.latitude() < southwest.latitude();

        if west_out && south_out {
            Ok(Mgrs::from_point(&southwest))
        } else if west_out {
            let utm = mgrs.utm();
            let east_corner = Utm::create(
                utm.zone_number(),
                utm.hemisphere(),
                utm.easting() + HUNDRED_KM,
                utm.northing(),
            )
            .to_point();
            match Line::new(point, east_corner).intersection(&zone_bounds.west_line()) {
                Some(intersection) => {
                    // pin onto the boundary meridian; the eastern
                    // tie-break keeps the encoding in this zone
                    let boundary =
                        GridPoint::degrees(southwest.longitude(), intersection.latitude());
                    let inside = Mgrs::from_point(&boundary);
                    let easting = (inside.easting() + 1).min(99_999);
                    Ok(Mgrs::create(zone_number, band, column, row, easting, 0))
                }
                None => Ok(Mgrs::from_point(&southwest)),
            }
        } else if south_out {
            let utm = mgrs.utm();
            let north_corner = Utm::create(
                utm.zone_number(),
                utm.hemisphere(),
                utm.easting(),
                utm.northing() + HUNDRED_KM,
            )
            .to_point();
            match Line::new(point, north_corner).intersection(&zone_bounds.south_line()) {
                Some(intersection) => {
                    // pin onto the boundary parallel; the northern
                    // tie-break keeps the encoding in this band
                    let boundary =
                        GridPoint::degrees(intersection.longitude(), southwest.latitude());
                    let inside = Mgrs::from_point(&boundary);
                    let northing = (inside.northing() + 1).min(99_999);
                    Ok(Mgrs::create(zone_number, band, column, row, 0, northing))
                }
                None => Ok(Mgrs::from_point(&southwest)),
            }
        } else {
            Ok(mgrs)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_value() {
        let mgrs = Mgrs::from(&(-76.9953, 38.8856));
        assert_eq!(mgrs.zone_number(), 18);
        assert_eq!(mgrs.band_letter(), 'S');
        assert_eq!(mgrs.column_row_id(), "UJ");
        assert_eq!(mgrs.easting(), 26938);
        assert_eq!(mgrs.northing(), 5973);
        assert_eq!(mgrs.to_string(), "18S UJ 26938 05973");
    }

    #[test]
    fn test_coordinate_precisions() {
        let mgrs = Mgrs::from(&(-76.9953, 38.8856));
        assert_eq!(mgrs.coordinate(GridType::Gzd), "18S");
        assert_eq!(mgrs.coordinate(GridType::HundredKilometer), "18SUJ");
        assert_eq!(mgrs.coordinate(GridType::TenKilometer), "18SUJ20");
        assert_eq!(mgrs.coordinate(GridType::Kilometer), "18SUJ2605");
        assert_eq!(mgrs.coordinate(GridType::HundredMeter), "18SUJ269059");
        assert_eq!(mgrs.coordinate(GridType::TenMeter), "18SUJ26930597");
        assert_eq!(mgrs.coordinate(GridType::Meter), "18SUJ2693805973");
    }

    #[test]
    fn test_parse_roundtrip() -> Result<(), MgrsGridError> {
        let mgrs: Mgrs = "18SUJ2693805973".parse()?;
        assert_eq!(mgrs.coordinate(GridType::Meter), "18SUJ2693805973");
        let point = mgrs.to_point();
        assert!((point.longitude() + 76.9953).abs() < 1e-4);
        assert!((point.latitude() - 38.8856).abs() < 1e-4);
        assert_eq!(Mgrs::from_point(&point), mgrs);
        Ok(())
    }

    #[test]
    fn test_parse_ignores_spacing_and_case() -> Result<(), MgrsGridError> {
        let spaced: Mgrs = "18S UJ 26938 05973".parse()?;
        let lower: Mgrs = "18suj2693805973".parse()?;
        assert_eq!(spaced, lower);
        assert_eq!(spaced.to_string(), "18S UJ 26938 05973");
        Ok(())
    }

    #[test]
    fn test_parse_partial_accuracy() -> Result<(), MgrsGridError> {
        let mgrs: Mgrs = "18SUJ2605".parse()?;
        assert_eq!(mgrs.easting(), 26_000);
        assert_eq!(mgrs.northing(), 5_000);
        assert_eq!(mgrs.accuracy(), 2);
        assert_eq!(mgrs.precision(), GridType::Kilometer);
        Ok(())
    }

    #[test]
    fn test_parse_gzd_only() -> Result<(), MgrsGridError> {
        let mgrs: Mgrs = "12R".parse()?;
        assert_eq!(mgrs.zone_number(), 12);
        assert_eq!(mgrs.band_letter(), 'R');
        let point = mgrs.to_point();
        // southwest corner of 12R
        assert!((point.longitude() + 114.0).abs() < 1e-3);
        assert!((point.latitude() - 24.0).abs() < 1e-3);
        Ok(())
    }

    #[test]
    fn test_parse_hundred_km_square() -> Result<(), MgrsGridError> {
        let mgrs: Mgrs = "4QFJ".parse()?;
        assert_eq!(mgrs.zone_number(), 4);
        assert_eq!(mgrs.band_letter(), 'Q');
        assert_eq!(mgrs.column_row_id(), "FJ");
        assert_eq!(mgrs.easting(), 0);
        assert_eq!(mgrs.northing(), 0);
        assert_eq!(mgrs.precision(), GridType::HundredKilometer);
        Ok(())
    }

    #[test]
    fn test_parse_square_snapped_inside_zone() -> Result<(), MgrsGridError> {
        // the regular lattice puts the southwest corner of 18S TJ almost
        // half a degree west of the zone boundary; the decode snaps it
        // onto the boundary crossing instead
        let naive = Mgrs::new(18, 'S', 'T', 'J', 0, 0)?;
        assert!(naive.to_point().longitude() < -78.4);

        let mgrs: Mgrs = "18STJ".parse()?;
        let point = mgrs.to_point();
        assert!((point.longitude() + 78.0).abs() < 1e-3, "off boundary: {}", point.longitude());
        assert_eq!(mgrs.northing(), 0);
        assert!(mgrs.easting() > 39_000 && mgrs.easting() < 40_000);
        Ok(())
    }

    #[test]
    fn test_parse_rejects_svalbard_gaps() {
        for value in ["32X", "34X", "36X", "32XMH", "34XAB12"] {
            assert!(Mgrs::from_str(value).is_err(), "accepted {:?}", value);
        }
        for value in ["31X", "33X", "35X", "37X"] {
            assert!(Mgrs::from_str(value).is_ok(), "rejected {:?}", value);
        }
    }

    #[test]
    fn test_parse_rejects_bad_grammar() {
        for value in [
            "",
            "S",
            "18I",
            "18O",
            "18Y",
            "0C",
            "61C",
            "18SU",
            "18SUJ1",
            "18SUJ123",
            "18SUJ269380597312",
            "18SIJ12",
        ] {
            assert!(Mgrs::from_str(value).is_err(), "accepted {:?}", value);
        }
    }

    #[test]
    fn test_invalid_column_for_zone() {
        // zone 18 columns are S-Z, so A is out of the cycle
        assert!(Mgrs::new(18, 'S', 'A', 'J', 0, 0).is_err());
        assert!(Mgrs::new(18, 'S', 'U', 'J', 0, 0).is_ok());
    }

    #[test]
    fn test_accuracy_inference() -> Result<(), MgrsGridError> {
        let mgrs = Mgrs::new(18, 'S', 'U', 'J', 12300, 45600)?;
        assert_eq!(mgrs.accuracy(), 3);
        assert_eq!(mgrs.precision(), GridType::HundredMeter);

        let coarse = Mgrs::new(18, 'S', 'U', 'J', 0, 0)?;
        assert_eq!(coarse.accuracy(), 0);
        assert_eq!(coarse.precision(), GridType::HundredKilometer);

        let fine = Mgrs::new(18, 'S', 'U', 'J', 12345, 45600)?;
        assert_eq!(fine.accuracy(), 5);
        assert_eq!(fine.precision(), GridType::Meter);
        Ok(())
    }

    #[test]
    fn test_utm_reconstruction() -> Result<(), MgrsGridError> {
        let utm = Mgrs::from(&(-76.9953, 38.8856)).utm();
        assert_eq!(utm.zone_number(), 18);
        assert!((utm.easting() - 326_938.0).abs() < 1.0);
        assert!((utm.northing() - 4_305_973.0).abs() < 1.0);

        // southern hemisphere wraparound
        let sydney = Mgrs::from(&(151.2093, -33.8688));
        let utm = sydney.utm();
        assert!((utm.easting() - 334_368.0).abs() < 1.0);
        assert!((utm.northing() - 6_250_948.0).abs() < 1.0);
        Ok(())
    }

    #[test]
    fn test_southern_roundtrip() {
        let mgrs = Mgrs::from(&(151.2093, -33.8688));
        let point = mgrs.to_point();
        let again = Mgrs::from_point(&point);
        assert_eq!(mgrs, again);
    }

    #[test]
    fn test_latitude_clamped() {
        let high = Mgrs::from(&(10.0, 89.0));
        assert_eq!(high.band_letter(), 'X');
        let low = Mgrs::from(&(10.0, -89.0));
        assert_eq!(low.band_letter(), 'C');
    }
}
