use crate::api::bounds::Bounds;
use crate::api::grid_type::GridType;
use crate::api::mgrs::Mgrs;
use crate::api::point::GridPoint;
use crate::api::style::Color;
use crate::api::zone::GridZone;
use crate::core::projection::utm_to_geographic;
use crate::util::error::MgrsGridError;

/// A label placement within a tile: the text, its anchor point, and the
/// clipped cell rectangle it describes.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLabel {
    pub name: String,
    pub center: GridPoint,
    pub bounds: Bounds,
    pub grid_type: GridType,
    pub coordinate: Mgrs,
}

/// The closed set of labeler behaviors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelerKind {
    /// One label per grid zone, the zone designator name
    Gzd,
    /// One label per grid cell, the 100 km square id or the cell digits
    Mgrs,
}

/// Label generator for one grid, gated by its own zoom range.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLabeler {
    kind: LabelerKind,
    enabled: bool,
    min_zoom: u8,
    max_zoom: Option<u8>,
    color: Color,
    text_size: f64,
    buffer: f64,
}

impl GridLabeler {
    /// Labeler with the given zoom floor and text style.
    ///
    /// The edge buffer is the fraction of the cell kept clear around a
    /// label and must lie in [0.0, 0.5).
    pub fn new(
        kind: LabelerKind,
        min_zoom: u8,
        color: Color,
        text_size: f64,
        buffer: f64,
    ) -> Result<Self, MgrsGridError> {
        validate_buffer(buffer)?;
        Ok(Self {
            kind,
            enabled: true,
            min_zoom,
            max_zoom: None,
            color,
            text_size,
            buffer,
        })
    }

    pub fn kind(&self) -> LabelerKind {
        self.kind
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> Option<u8> {
        self.max_zoom
    }

    pub fn set_zoom_range(&mut self, min_zoom: u8, max_zoom: Option<u8>) -> Result<(), MgrsGridError> {
        if let Some(max) = max_zoom {
            if max < min_zoom {
                return Err(MgrsGridError::InvalidZoomRange(min_zoom, max));
            }
        }
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        Ok(())
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn text_size(&self) -> f64 {
        self.text_size
    }

    pub fn set_text_size(&mut self, text_size: f64) {
        self.text_size = text_size;
    }

    pub fn buffer(&self) -> f64 {
        self.buffer
    }

    pub fn set_buffer(&mut self, buffer: f64) -> Result<(), MgrsGridError> {
        validate_buffer(buffer)?;
        self.buffer = buffer;
        Ok(())
    }

    pub fn is_within(&self, zoom: u8) -> bool {
        zoom >= self.min_zoom && self.max_zoom.is_none_or(|max| zoom <= max)
    }

    /// Labels for the zone cells of the requested precision inside the
    /// tile bounds.
    pub fn labels(&self, tile_bounds: &Bounds, grid_type: GridType, zone: &GridZone) -> Vec<GridLabel> {
        match self.kind {
            LabelerKind::Gzd => gzd_labels(zone),
            LabelerKind::Mgrs => {
                if grid_type == GridType::Gzd {
                    gzd_labels(zone)
                } else {
                    mgrs_labels(tile_bounds, grid_type, zone)
                }
            }
        }
    }
}

/// One label, the zone designator at the zone centroid.
fn gzd_labels(zone: &GridZone) -> Vec<GridLabel> {
    let bounds = zone.bounds();
    let center = bounds.centroid();
    vec![GridLabel {
        name: zone.name(),
        center,
        bounds,
        grid_type: GridType::Gzd,
        coordinate: Mgrs::from_point(&center),
    }]
}

/// One label per precision cell within the draw bounds, skipping cells
/// whose clipped rectangle is degenerate.
fn mgrs_labels(tile_bounds: &Bounds, grid_type: GridType, zone: &GridZone) -> Vec<GridLabel> {
    let mut labels = Vec::new();
    let Some(draw_bounds) = zone.draw_bounds(tile_bounds, grid_type) else {
        return labels;
    };
    let precision = grid_type.precision();

    let mut easting = draw_bounds.min_x();
    while easting <= draw_bounds.max_x() {
        let mut northing = draw_bounds.min_y();
        while northing <= draw_bounds.max_y() {
            if let Some(label) = cell_label(grid_type, zone, easting, northing) {
                labels.push(label);
            }
            northing += precision;
        }
        easting += precision;
    }

    labels
}

fn cell_label(grid_type: GridType, zone: &GridZone, easting: f64, northing: f64) -> Option<GridLabel> {
    let precision = grid_type.precision();
    let bounds = zone.bounds();
    let zone_number = zone.zone_number();
    let northern = zone.hemisphere().is_northern();

    let point = |easting: f64, northing: f64| {
        let (longitude, latitude) = utm_to_geographic(easting, northing, zone_number, northern);
        GridPoint::degrees(longitude, latitude)
    };
    let southwest = point(easting, northing);
    let northwest = point(easting, northing + precision);
    let southeast = point(easting + precision, northing);
    let northeast = point(easting + precision, northing + precision);

    // clip the cell to the zone: the rectangle inside all four projected
    // corners and the zone bounds
    let min_latitude = southwest
        .latitude()
        .max(southeast.latitude())
        .max(bounds.min_y());
    let max_latitude = northwest
        .latitude()
        .min(northeast.latitude())
        .min(bounds.max_y());
    let min_longitude = southwest
        .longitude()
        .max(northwest.longitude())
        .max(bounds.min_x());
    let max_longitude = southeast
        .longitude()
        .min(northeast.longitude())
        .min(bounds.max_x());

    if min_longitude > max_longitude || min_latitude > max_latitude {
        return None;
    }

    let label_bounds = Bounds::degrees(min_longitude, min_latitude, max_longitude, max_latitude);
    let center = label_bounds.centroid();
    let mgrs = Mgrs::from_point(&center);
    let name = if grid_type == GridType::HundredKilometer {
        mgrs.column_row_id()
    } else {
        mgrs.easting_northing(grid_type)
    };

    Some(GridLabel {
        name,
        center,
        bounds: label_bounds,
        grid_type,
        coordinate: mgrs,
    })
}

fn validate_buffer(buffer: f64) -> Result<(), MgrsGridError> {
    if !(0.0..0.5).contains(&buffer) {
        return Err(MgrsGridError::InvalidEdgeBuffer(buffer));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::zone::{LatitudeBand, LongitudinalStrip};

    fn zone_18s() -> GridZone {
        GridZone::new(
            LongitudinalStrip::new(18, -78.0, -72.0),
            LatitudeBand::new('S', 32.0, 40.0),
        )
    }

    fn labeler(kind: LabelerKind) -> GridLabeler {
        GridLabeler::new(kind, 0, Color::BLACK, 16.0, 0.05).unwrap()
    }

    #[test]
    fn test_buffer_validation() {
        assert!(GridLabeler::new(LabelerKind::Gzd, 0, Color::BLACK, 16.0, 0.5).is_err());
        assert!(GridLabeler::new(LabelerKind::Gzd, 0, Color::BLACK, 16.0, -0.1).is_err());
        let mut ok = labeler(LabelerKind::Gzd);
        assert_eq!(ok.set_buffer(0.49), Ok(()));
        assert_eq!(
            ok.set_buffer(0.5),
            Err(MgrsGridError::InvalidEdgeBuffer(0.5))
        );
    }

    #[test]
    fn test_zoom_gating() {
        let mut labeler = labeler(LabelerKind::Gzd);
        labeler.set_zoom_range(4, Some(10)).unwrap();
        assert!(!labeler.is_within(3));
        assert!(labeler.is_within(4));
        assert!(labeler.is_within(10));
        assert!(!labeler.is_within(11));
        assert_eq!(
            labeler.set_zoom_range(8, Some(7)),
            Err(MgrsGridError::InvalidZoomRange(8, 7))
        );
    }

    #[test]
    fn test_gzd_label() {
        let zone = zone_18s();
        let tile = Bounds::degrees(-77.5, 38.0, -76.5, 39.0);
        let labels = labeler(LabelerKind::Gzd).labels(&tile, GridType::Gzd, &zone);
        assert_eq!(labels.len(), 1);
        let label = &labels[0];
        assert_eq!(label.name, "18S");
        assert_eq!(label.grid_type, GridType::Gzd);
        assert_eq!(label.center.longitude(), -75.0);
        assert_eq!(label.center.latitude(), 36.0);
    }

    #[test]
    fn test_hundred_km_labels() {
        let zone = zone_18s();
        let tile = Bounds::degrees(-77.5, 38.5, -76.5, 39.0);
        let labels = labeler(LabelerKind::Mgrs).labels(&tile, GridType::HundredKilometer, &zone);
        assert!(!labels.is_empty());
        for label in &labels {
            assert_eq!(label.name.len(), 2, "column/row id: {}", label.name);
            assert!(label.bounds.min_x() >= -78.0);
            assert!(label.bounds.max_x() <= -72.0);
        }
        assert!(labels.iter().any(|label| label.name == "UJ"));
    }

    #[test]
    fn test_kilometer_label_names_are_digit_pairs() {
        let zone = zone_18s();
        let tile = Bounds::degrees(-77.01, 38.88, -76.99, 38.9);
        let labels = labeler(LabelerKind::Mgrs).labels(&tile, GridType::Kilometer, &zone);
        assert!(!labels.is_empty());
        for label in &labels {
            assert_eq!(label.name.len(), 4, "easting/northing digits: {}", label.name);
            assert!(label.name.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_labels_empty_outside_zone() {
        let zone = zone_18s();
        let tile = Bounds::degrees(-60.0, 38.0, -59.0, 39.0);
        let labels = labeler(LabelerKind::Mgrs).labels(&tile, GridType::Kilometer, &zone);
        assert!(labels.is_empty());
    }
}
