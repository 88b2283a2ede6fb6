//! Zone number and latitude band arithmetic.
//!
//! Pure index math over the 60 longitudinal strips and 20 latitude bands.
//! The band alphabet runs C through X, skipping I and O. Exact boundary
//! values are tie-broken by the `eastern`/`northern` flags: the default
//! call resolves to the zone/band on the east/north side of the boundary.

use crate::core::constants::{
    BAND_HEIGHT, MAX_BAND_LETTER, MAX_LAT, MAX_LON, MAX_ZONE_NUMBER, MIN_BAND_LETTER, MIN_LAT,
    MIN_LON, MIN_ZONE_NUMBER, NORWAY_BAND_LETTER, NUM_BANDS, SVALBARD_BAND_LETTER,
    SVALBARD_MAX_ZONE_NUMBER, SVALBARD_MIN_ZONE_NUMBER, ZONE_WIDTH,
};
use crate::util::error::MgrsGridError;

/// Normalizes a longitude into [-180, 180].
pub fn normalize_longitude(longitude: f64) -> f64 {
    if !(MIN_LON..=MAX_LON).contains(&longitude) {
        (longitude - MIN_LON).rem_euclid(360.0) + MIN_LON
    } else {
        longitude
    }
}

/// Zone number containing the longitude.
///
/// On an exact 6 degree boundary the `eastern` call resolves to the zone
/// east of the boundary (wrapping 180 back to zone 1) and the western call
/// to the zone west of it.
pub fn zone_number(longitude: f64, eastern: bool) -> u8 {
    let longitude = normalize_longitude(longitude);
    let zone_value = (longitude - MIN_LON) / ZONE_WIDTH;
    let mut zone = 1 + zone_value as u8;
    if !eastern {
        if zone > MIN_ZONE_NUMBER && zone_value.fract() == 0.0 {
            zone -= 1;
        }
    } else if zone > MAX_ZONE_NUMBER {
        zone -= MAX_ZONE_NUMBER;
    }
    zone
}

/// Zone number containing the coordinate, remapped through the Svalbard
/// and Norway strip-width exceptions.
pub fn zone_number_at(longitude: f64, latitude: f64) -> u8 {
    let longitude = normalize_longitude(longitude);
    let mut zone = zone_number(longitude, true);
    let band = band_letter(latitude, true);
    if band == NORWAY_BAND_LETTER && zone == 31 && longitude >= 3.0 {
        zone = 32;
    } else if band == SVALBARD_BAND_LETTER
        && (SVALBARD_MIN_ZONE_NUMBER..=SVALBARD_MAX_ZONE_NUMBER).contains(&zone)
    {
        zone = if longitude < 9.0 {
            31
        } else if longitude < 21.0 {
            33
        } else if longitude < 33.0 {
            35
        } else {
            37
        };
    }
    zone
}

/// Band letter containing the latitude, clamped to [-80, 84].
///
/// On an exact 8 degree boundary the `northern` call resolves to the band
/// whose southern edge is the boundary; the southern call rounds down one
/// band.
pub fn band_letter(latitude: f64, northern: bool) -> char {
    let latitude = latitude.clamp(MIN_LAT, MAX_LAT);
    let band_value = (latitude - MIN_LAT) / BAND_HEIGHT;
    let mut band = band_value as u8;
    if band >= NUM_BANDS || (band > 0 && !northern && band_value.fract() == 0.0) {
        band -= 1;
    }
    band_letter_at(band)
}

/// Band letter for a band index 0-19, skipping I and O.
pub fn band_letter_at(index: u8) -> char {
    debug_assert!(index < NUM_BANDS);
    let mut letter = MIN_BAND_LETTER as u8 + index;
    if letter >= b'I' {
        letter += 1;
    }
    if letter >= b'O' {
        letter += 1;
    }
    letter as char
}

/// Band index 0-19 of a band letter.
pub fn band_index(letter: char) -> u8 {
    let mut value = letter as u8;
    if value > b'O' {
        value -= 1;
    }
    if value > b'I' {
        value -= 1;
    }
    value - MIN_BAND_LETTER as u8
}

/// Latitude of the southern edge of a band.
pub fn band_south_latitude(letter: char) -> f64 {
    MIN_LAT + f64::from(band_index(letter)) * BAND_HEIGHT
}

/// Whether the band letter lies in the northern hemisphere.
///
/// N is the first band north of the equator.
pub fn is_northern_band(letter: char) -> bool {
    letter >= 'N'
}

pub fn validate_zone_number(zone_number: u8) -> Result<(), MgrsGridError> {
    if !(MIN_ZONE_NUMBER..=MAX_ZONE_NUMBER).contains(&zone_number) {
        return Err(MgrsGridError::InvalidZoneNumber(zone_number));
    }
    Ok(())
}

pub fn validate_band_letter(letter: char) -> Result<(), MgrsGridError> {
    if !(MIN_BAND_LETTER..=MAX_BAND_LETTER).contains(&letter) || letter == 'I' || letter == 'O' {
        return Err(MgrsGridError::InvalidBandLetter(letter));
    }
    Ok(())
}
