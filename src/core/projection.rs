//! Transverse Mercator and Web Mercator projection math.
//!
//! The forward and inverse Transverse Mercator transforms are the
//! Gauss-Krüger series expansions over the WGS84 ellipsoid, scaled by the
//! UTM central meridian factor and offset by the UTM false easting and,
//! in the southern hemisphere, the false northing.

use std::f64::consts::PI;

use crate::core::bands::normalize_longitude;
use crate::core::constants::{
    MAX_ZONE_NUMBER, MIN_ZONE_NUMBER, UTM_FALSE_EASTING, UTM_FALSE_NORTHING, UTM_K0,
    WEB_MERCATOR_HALF_WORLD_WIDTH, WGS84_A, WGS84_E2, WGS84_EP2,
};

/// Central meridian longitude of a zone (degrees).
pub fn central_meridian(zone_number: u8) -> f64 {
    debug_assert!((MIN_ZONE_NUMBER..=MAX_ZONE_NUMBER).contains(&zone_number));
    f64::from(zone_number) * 6.0 - 183.0
}

/// Meridian arc length from the equator to the given latitude (radians).
fn meridian_arc(phi: f64) -> f64 {
    let e2 = WGS84_E2;
    let e4 = e2 * e2;
    let e6 = e4 * e2;
    WGS84_A
        * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
            - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
            + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
}

/// Rectifying radius used to recover the footpoint latitude.
fn meridian_arc_factor() -> f64 {
    let e2 = WGS84_E2;
    let e4 = e2 * e2;
    let e6 = e4 * e2;
    WGS84_A * (1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0)
}

/// Geographic coordinates to UTM easting/northing (meters).
///
/// Easting carries the 500,000 m false easting; the 10,000,000 m false
/// northing is added for the southern hemisphere. Both are rounded to
/// centimeter precision.
pub fn geographic_to_utm(longitude: f64, latitude: f64, zone_number: u8, northern: bool) -> (f64, f64) {
    let lat = latitude.to_radians();
    // delta from the central meridian, wrapped across the antimeridian
    let delta = normalize_longitude(longitude - central_meridian(zone_number)).to_radians();

    let n = WGS84_A / (1.0 - WGS84_E2 * lat.sin().powi(2)).sqrt();
    let t = lat.tan().powi(2);
    let c = WGS84_EP2 * lat.cos().powi(2);
    let a = delta * lat.cos();
    let m = meridian_arc(lat);

    let x = UTM_K0
        * n
        * (a + (1.0 - t + c) * a.powi(3) / 6.0
            + (5.0 - 18.0 * t + t.powi(2) + 72.0 * c - 58.0 * WGS84_EP2) * a.powi(5) / 120.0);

    let y = UTM_K0
        * (m + n
            * lat.tan()
            * (a.powi(2) / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c.powi(2)) * a.powi(4) / 24.0
                + (61.0 - 58.0 * t + t.powi(2) + 600.0 * c - 330.0 * WGS84_EP2) * a.powi(6)
                    / 720.0));

    let easting = x + UTM_FALSE_EASTING;
    let northing = if northern { y } else { y + UTM_FALSE_NORTHING };

    ((easting * 100.0).round() / 100.0, (northing * 100.0).round() / 100.0)
}

/// UTM easting/northing (meters) to geographic coordinates (degrees).
///
/// Southern hemisphere northings are first reduced by the false northing.
/// Longitude and latitude are rounded to 7 decimal places to suppress
/// floating point noise.
pub fn utm_to_geographic(easting: f64, northing: f64, zone_number: u8, northern: bool) -> (f64, f64) {
    let x = easting - UTM_FALSE_EASTING;
    let y = if northern { northing } else { northing - UTM_FALSE_NORTHING };

    let mu = y / UTM_K0 / meridian_arc_factor();
    let e1 = (1.0 - (1.0 - WGS84_E2).sqrt()) / (1.0 + (1.0 - WGS84_E2).sqrt());

    // footpoint latitude
    let phi1 = mu
        + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
        + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

    let n1 = WGS84_A / (1.0 - WGS84_E2 * phi1.sin().powi(2)).sqrt();
    let r1 = WGS84_A * (1.0 - WGS84_E2) / (1.0 - WGS84_E2 * phi1.sin().powi(2)).powf(1.5);
    let t1 = phi1.tan().powi(2);
    let c1 = WGS84_EP2 * phi1.cos().powi(2);
    let d = x / (n1 * UTM_K0);

    let lat = phi1
        - (n1 * phi1.tan() / r1)
            * (d.powi(2) / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1.powi(2) - 9.0 * WGS84_EP2) * d.powi(4)
                    / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1.powi(2)
                    - 252.0 * WGS84_EP2
                    - 3.0 * c1.powi(2))
                    * d.powi(6)
                    / 720.0);

    let lon = central_meridian(zone_number).to_radians()
        + (d - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1.powi(2) + 8.0 * WGS84_EP2
                + 24.0 * t1.powi(2))
                * d.powi(5)
                / 120.0)
            / phi1.cos();

    (round_degrees(lon.to_degrees()), round_degrees(lat.to_degrees()))
}

fn round_degrees(value: f64) -> f64 {
    (value * 1e7).round() / 1e7
}

/// Degrees to Web Mercator meters.
pub fn degrees_to_meters(longitude: f64, latitude: f64) -> (f64, f64) {
    let x = longitude * WEB_MERCATOR_HALF_WORLD_WIDTH / 180.0;
    let y = ((90.0 + latitude) * PI / 360.0).tan().ln() / (PI / 180.0);
    (x, y * WEB_MERCATOR_HALF_WORLD_WIDTH / 180.0)
}

/// Web Mercator meters to degrees.
pub fn meters_to_degrees(x: f64, y: f64) -> (f64, f64) {
    let longitude = x * 180.0 / WEB_MERCATOR_HALF_WORLD_WIDTH;
    let latitude = y * 180.0 / WEB_MERCATOR_HALF_WORLD_WIDTH;
    let latitude = (latitude * (PI / 180.0)).exp().atan() / PI * 360.0 - 90.0;
    (longitude, latitude)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_known_value() {
        // Washington Monument area, zone 18 northern
        let (easting, northing) = geographic_to_utm(-76.9953, 38.8856, 18, true);
        assert!((easting - 326938.11).abs() < 0.02, "easting {}", easting);
        assert!((northing - 4305973.76).abs() < 0.02, "northing {}", northing);
    }

    #[test]
    fn test_roundtrip_northern() {
        let (easting, northing) = geographic_to_utm(13.4, 52.52, 33, true);
        let (lon, lat) = utm_to_geographic(easting, northing, 33, true);
        assert!((lon - 13.4).abs() < 1e-5);
        assert!((lat - 52.52).abs() < 1e-5);
    }

    #[test]
    fn test_roundtrip_southern() {
        let (easting, northing) = geographic_to_utm(151.0, -33.9, 56, false);
        assert!(northing > 6_000_000.0, "false northing applied: {}", northing);
        let (lon, lat) = utm_to_geographic(easting, northing, 56, false);
        assert!((lon - 151.0).abs() < 1e-5);
        assert!((lat + 33.9).abs() < 1e-5);
    }

    #[test]
    fn test_roundtrip_near_band_edges() {
        for (lon, lat, zone, northern) in [
            (-179.99, -79.5, 1, false),
            (9.0, 78.9, 32, true),
            (0.01, 0.01, 31, true),
        ] {
            let (easting, northing) = geographic_to_utm(lon, lat, zone, northern);
            let (lon2, lat2) = utm_to_geographic(easting, northing, zone, northern);
            assert!((lon - lon2).abs() < 1e-5, "lon {} vs {}", lon, lon2);
            assert!((lat - lat2).abs() < 1e-5, "lat {} vs {}", lat, lat2);
        }
    }

    #[test]
    fn test_central_meridian() {
        assert_eq!(central_meridian(1), -177.0);
        assert_eq!(central_meridian(18), -75.0);
        assert_eq!(central_meridian(31), 3.0);
        assert_eq!(central_meridian(60), 177.0);
    }

    #[test]
    fn test_web_mercator_roundtrip() {
        let (x, y) = degrees_to_meters(-76.9953, 38.8856);
        assert!(x < 0.0 && y > 0.0);
        let (lon, lat) = meters_to_degrees(x, y);
        assert!((lon + 76.9953).abs() < 1e-9);
        assert!((lat - 38.8856).abs() < 1e-9);
    }

    #[test]
    fn test_web_mercator_half_world() {
        let (x, _) = degrees_to_meters(180.0, 0.0);
        assert!((x - WEB_MERCATOR_HALF_WORLD_WIDTH).abs() < 1e-6);
    }
}
