//! # mgrs-grid-rs
//!
//! Geodetic coordinate engine for the Military Grid Reference System:
//! geographic/UTM/MGRS conversion plus a multi-resolution grid overlay
//! that decides which precision levels are visible at a map zoom level
//! and renders them into a tile's coordinate space as line segments and
//! label records.
//!
//! There are three main entry points.
//!
//! ### 1. `Mgrs` / `Utm` - Coordinate Conversion
//!
//! ```
//! use mgrs_grid_rs::{Mgrs, Utm};
//!
//! # fn main() -> Result<(), mgrs_grid_rs::MgrsGridError> {
//! let mgrs = Mgrs::from(&(-76.9953, 38.8856));
//! assert_eq!(mgrs.to_string(), "18S UJ 26938 05973");
//!
//! let utm = Utm::from(&(-76.9953, 38.8856));
//! let back = utm.to_point();
//! assert!((back.latitude() - 38.8856).abs() < 1e-5);
//!
//! let parsed: Mgrs = "18SUJ2693805973".parse()?;
//! assert_eq!(parsed, mgrs);
//! # Ok(())
//! # }
//! ```
//!
//! ### 2. `ZonePartition` - Grid Zone Lookup
//!
//! ```
//! use mgrs_grid_rs::{Bounds, ZonePartition};
//!
//! let partition = ZonePartition::global();
//! let zone = partition.grid_zone(18, 'S').expect("exists");
//! assert_eq!(zone.name(), "18S");
//!
//! let zones = partition.grid_zones(&Bounds::degrees(-78.5, 38.0, -77.5, 39.0));
//! assert_eq!(zones.len(), 2);
//! ```
//!
//! ### 3. `Grids` - Tile Lines and Labels
//!
//! ```
//! use mgrs_grid_rs::{Grids, GridTile};
//!
//! let grids = Grids::new();
//! let tile = GridTile::xyz(256, 256, 9, 12, 5);
//! let content = grids.tile_content(&tile);
//! for line in &content.lines {
//!     let style = grids.style_for(line.grid_type, line.line.grid_type.unwrap_or(line.grid_type));
//!     let _ = (tile.pixel(&line.line.point1), tile.pixel(&line.line.point2), style);
//! }
//! ```
//!
//! All coordinate math is pure and safe to call from multiple threads;
//! the zone partition table is built once behind a one-time initializer.
//! [`Grids`] is mutable state for a single configuration owner.

pub mod api;
pub mod core;
pub mod util;

pub use api::{
    BandLetterRange, Bounds, Color, Grid, GridLabel, GridLabeler, GridPoint, GridProperties,
    GridRange, GridStyle, GridTile, GridType, GridZone, Grids, GridsProperties, Hemisphere,
    LabelerKind, LabelerProperties, LatitudeBand, Line, LongitudinalStrip, Mgrs, Pixel, PixelRange,
    TileContent, TileLine, Utm, ZonePartition, ZoneNumberRange, ZoomGrids,
};
pub use util::{Coordinate, MgrsGridError, Unit};

pub use geo_types;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_roundtrip_sweep() {
        // whole-degree sweep across the covered latitudes
        let mut checked = 0;
        for lon in (-175..=175).step_by(25) {
            for lat in (-76..=80).step_by(13) {
                let point = GridPoint::degrees(f64::from(lon) + 0.37, f64::from(lat) + 0.21);
                let utm = Utm::from(&point);
                let back = utm.to_point();
                assert!(
                    (back.longitude() - point.longitude()).abs() < 1e-5,
                    "lon {} -> {}",
                    point.longitude(),
                    back.longitude()
                );
                assert!(
                    (back.latitude() - point.latitude()).abs() < 1e-5,
                    "lat {} -> {}",
                    point.latitude(),
                    back.latitude()
                );
                checked += 1;
            }
        }
        assert!(checked > 100);
    }

    #[test]
    fn test_mgrs_string_roundtrip() -> Result<(), MgrsGridError> {
        for value in [
            "18SUJ2693805973",
            "33XVG74594359",
            "32VNM",
            "4QFJ1234567890",
            "25XEN041865",
            "56HLH3436850948",
        ] {
            let mgrs: Mgrs = value.parse()?;
            let reencoded = Mgrs::from_point(&mgrs.to_point());
            assert_eq!(
                reencoded.coordinate(mgrs.precision()),
                value,
                "roundtrip of {}",
                value
            );
        }
        Ok(())
    }

    #[test]
    fn test_known_coordinate() {
        let mgrs = Mgrs::from(&GridPoint::degrees(-76.9953, 38.8856));
        assert_eq!(mgrs.to_string(), "18S UJ 26938 05973");
        assert_eq!(mgrs.coordinate(GridType::Meter), "18SUJ2693805973");
    }

    #[test]
    fn test_svalbard_partition() {
        let partition = ZonePartition::global();
        assert!(partition.grid_zone(32, 'X').is_none());
        assert!(partition.grid_zone(34, 'X').is_none());
        assert!(partition.grid_zone(36, 'X').is_none());
        let widened = partition.grid_zone(31, 'X').expect("exists");
        assert_eq!(widened.bounds().max_x(), 9.0);
    }

    #[test]
    fn test_grids_from_json_properties() -> Result<(), MgrsGridError> {
        let json = r#"{
            "grids": [
                { "grid_type": "Gzd", "enabled": true, "min_zoom": 0, "width": 2.0 },
                { "grid_type": "HundredKilometer", "enabled": true, "min_zoom": 3, "max_zoom": 9 }
            ]
        }"#;
        let properties: GridsProperties = serde_json::from_str(json).expect("parses");
        let grids = Grids::with_properties(properties)?;
        let zoom3 = grids.grids_at(3).expect("seeded");
        assert_eq!(
            zoom3.grid_types(),
            &[GridType::Gzd, GridType::HundredKilometer]
        );
        let zoom10 = grids.grids_at(10).expect("seeded");
        assert_eq!(zoom10.grid_types(), &[GridType::Gzd]);
        // types missing from the table are disabled
        assert!(!grids.grid(GridType::Meter).is_enabled());
        Ok(())
    }

    #[test]
    fn test_end_to_end_tile() {
        let grids = Grids::new();

        // zoom 12 tile over Washington DC
        let tile = GridTile::xyz(256, 256, 1171, 1566, 12);
        let bounds = tile.bounds().to_degrees();
        assert!(bounds.min_x() < -77.0 && bounds.max_x() > -77.0);

        let content = grids.tile_content(&tile);
        assert!(!content.lines.is_empty());

        // every line maps into the vicinity of the tile pixel rectangle
        for tile_line in &content.lines {
            let pixel = tile.pixel(&tile_line.line.point1);
            assert!(pixel.x.is_finite() && pixel.y.is_finite());
        }

        // kilometer lines are active and tagged at kilometer or coarser
        assert!(content
            .lines
            .iter()
            .any(|line| line.grid_type == GridType::Kilometer));
        for line in content
            .lines
            .iter()
            .filter(|line| line.grid_type == GridType::Kilometer)
        {
            assert!(line.line.grid_type.expect("tagged") <= GridType::Kilometer);
        }

        // labels carry the MGRS coordinate of their cell
        assert!(!content.labels.is_empty());
        for label in &content.labels {
            assert!(!label.name.is_empty());
            assert!(!label.bounds.is_empty());
        }
    }

    #[test]
    fn test_tile_with_no_zones_is_empty() {
        let grids = Grids::new();
        // polar tile above 84 degrees north
        let tile = GridTile::xyz(256, 256, 0, 0, 6);
        let bounds = tile.bounds().to_degrees();
        assert!(bounds.min_y() > 84.0);
        assert!(grids.tile_content(&tile).is_empty());
    }
}
