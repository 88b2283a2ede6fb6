use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo_types::{Coord, Line as GeoLine, Rect};

use crate::api::grid_type::GridType;
use crate::api::point::GridPoint;
use crate::util::coord::Unit;
use crate::util::error::MgrsGridError;

/// An axis-aligned rectangle in degree or Web Mercator meter space.
///
/// Corners are normalized so min <= max on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub rect: Rect<f64>,
    pub unit: Unit,
}

impl Bounds {
    /// Bounds from WGS84 degree edges.
    pub fn degrees(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        Self {
            rect: Rect::new(
                Coord { x: min_lon, y: min_lat },
                Coord { x: max_lon, y: max_lat },
            ),
            unit: Unit::Degree,
        }
    }

    /// Bounds from Web Mercator meter edges.
    pub fn meters(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            rect: Rect::new(Coord { x: min_x, y: min_y }, Coord { x: max_x, y: max_y }),
            unit: Unit::Meter,
        }
    }

    /// Bounds from two corner points sharing a unit.
    pub fn new(corner1: GridPoint, corner2: GridPoint) -> Result<Self, MgrsGridError> {
        if corner1.unit != corner2.unit {
            return Err(MgrsGridError::UnitMismatch(corner1.unit, corner2.unit));
        }
        Ok(Self {
            rect: Rect::new(corner1.coord, corner2.coord),
            unit: corner1.unit,
        })
    }

    pub fn min_x(&self) -> f64 {
        self.rect.min().x
    }

    pub fn min_y(&self) -> f64 {
        self.rect.min().y
    }

    pub fn max_x(&self) -> f64 {
        self.rect.max().x
    }

    pub fn max_y(&self) -> f64 {
        self.rect.max().y
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0.0 || self.height() == 0.0
    }

    /// The bounds converted to the given unit, a copy when already there.
    pub fn to_unit(&self, unit: Unit) -> Bounds {
        if self.unit == unit {
            return *self;
        }
        let min = GridPoint { coord: self.rect.min(), unit: self.unit }.to_unit(unit);
        let max = GridPoint { coord: self.rect.max(), unit: self.unit }.to_unit(unit);
        Bounds {
            rect: Rect::new(min.coord, max.coord),
            unit,
        }
    }

    pub fn to_degrees(&self) -> Bounds {
        self.to_unit(Unit::Degree)
    }

    pub fn to_meters(&self) -> Bounds {
        self.to_unit(Unit::Meter)
    }

    pub fn southwest(&self) -> GridPoint {
        GridPoint { coord: self.rect.min(), unit: self.unit }
    }

    pub fn northwest(&self) -> GridPoint {
        GridPoint {
            coord: Coord { x: self.min_x(), y: self.max_y() },
            unit: self.unit,
        }
    }

    pub fn southeast(&self) -> GridPoint {
        GridPoint {
            coord: Coord { x: self.max_x(), y: self.min_y() },
            unit: self.unit,
        }
    }

    pub fn northeast(&self) -> GridPoint {
        GridPoint { coord: self.rect.max(), unit: self.unit }
    }

    pub fn centroid(&self) -> GridPoint {
        GridPoint { coord: self.rect.center(), unit: self.unit }
    }

    /// Intersection with another bounds, converted to this unit.
    ///
    /// `None` when the rectangles are disjoint; a shared edge yields an
    /// empty (zero area) overlap.
    pub fn overlap(&self, other: &Bounds) -> Option<Bounds> {
        let other = other.to_unit(self.unit);
        let min_x = self.min_x().max(other.min_x());
        let min_y = self.min_y().max(other.min_y());
        let max_x = self.max_x().min(other.max_x());
        let max_y = self.max_y().min(other.max_y());
        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(Bounds {
            rect: Rect::new(Coord { x: min_x, y: min_y }, Coord { x: max_x, y: max_y }),
            unit: self.unit,
        })
    }

    /// Smallest bounds containing both, converted to this unit.
    pub fn union(&self, other: &Bounds) -> Bounds {
        let other = other.to_unit(self.unit);
        Bounds {
            rect: Rect::new(
                Coord {
                    x: self.min_x().min(other.min_x()),
                    y: self.min_y().min(other.min_y()),
                },
                Coord {
                    x: self.max_x().max(other.max_x()),
                    y: self.max_y().max(other.max_y()),
                },
            ),
            unit: self.unit,
        }
    }

    /// Expansion outward to whole multiples of a precision step.
    pub fn to_precision(&self, precision: f64) -> Bounds {
        Bounds {
            rect: Rect::new(
                Coord {
                    x: (self.min_x() / precision).floor() * precision,
                    y: (self.min_y() / precision).floor() * precision,
                },
                Coord {
                    x: (self.max_x() / precision).ceil() * precision,
                    y: (self.max_y() / precision).ceil() * precision,
                },
            ),
            unit: self.unit,
        }
    }

    pub fn west_line(&self) -> Line {
        Line::new(self.southwest(), self.northwest())
    }

    pub fn north_line(&self) -> Line {
        Line::new(self.northwest(), self.northeast())
    }

    pub fn east_line(&self) -> Line {
        Line::new(self.northeast(), self.southeast())
    }

    pub fn south_line(&self) -> Line {
        Line::new(self.southeast(), self.southwest())
    }

    /// The four edges, west, north, east, south.
    pub fn lines(&self) -> Vec<Line> {
        vec![
            self.west_line(),
            self.north_line(),
            self.east_line(),
            self.south_line(),
        ]
    }
}

/// A line segment between two points sharing a unit, optionally tagged
/// with the grid precision it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub point1: GridPoint,
    pub point2: GridPoint,
    pub grid_type: Option<GridType>,
}

impl Line {
    /// Line between two points known to share a unit.
    pub fn new(point1: GridPoint, point2: GridPoint) -> Self {
        debug_assert_eq!(point1.unit, point2.unit);
        Self { point1, point2, grid_type: None }
    }

    /// Checked construction for points of unverified units.
    pub fn try_new(point1: GridPoint, point2: GridPoint) -> Result<Self, MgrsGridError> {
        if point1.unit != point2.unit {
            return Err(MgrsGridError::UnitMismatch(point1.unit, point2.unit));
        }
        Ok(Self { point1, point2, grid_type: None })
    }

    /// Line tagged with the precision it represents.
    pub fn with_type(point1: GridPoint, point2: GridPoint, grid_type: GridType) -> Self {
        debug_assert_eq!(point1.unit, point2.unit);
        Self {
            point1,
            point2,
            grid_type: Some(grid_type),
        }
    }

    pub fn unit(&self) -> Unit {
        self.point1.unit
    }

    pub fn to_unit(&self, unit: Unit) -> Line {
        Line {
            point1: self.point1.to_unit(unit),
            point2: self.point2.to_unit(unit),
            grid_type: self.grid_type,
        }
    }

    /// Segment intersection point, in this line's unit.
    pub fn intersection(&self, other: &Line) -> Option<GridPoint> {
        let unit = self.unit();
        let other = other.to_unit(unit);
        let segment1 = GeoLine::new(self.point1.coord, self.point2.coord);
        let segment2 = GeoLine::new(other.point1.coord, other.point2.coord);
        match line_intersection(segment1, segment2) {
            Some(LineIntersection::SinglePoint { intersection, .. }) => {
                Some(GridPoint { coord: intersection, unit })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_normalize() {
        let bounds = Bounds::degrees(12.0, 60.0, 6.0, 56.0);
        assert_eq!(bounds.min_x(), 6.0);
        assert_eq!(bounds.min_y(), 56.0);
        assert_eq!(bounds.max_x(), 12.0);
        assert_eq!(bounds.max_y(), 60.0);
    }

    #[test]
    fn test_mixed_unit_corners_rejected() {
        let result = Bounds::new(
            GridPoint::degrees(0.0, 0.0),
            GridPoint::meters(1000.0, 1000.0),
        );
        assert_eq!(
            result,
            Err(MgrsGridError::UnitMismatch(Unit::Degree, Unit::Meter))
        );
    }

    #[test]
    fn test_overlap() {
        let a = Bounds::degrees(0.0, 0.0, 10.0, 10.0);
        let b = Bounds::degrees(5.0, 5.0, 15.0, 15.0);
        let overlap = a.overlap(&b).unwrap();
        assert_eq!(overlap.min_x(), 5.0);
        assert_eq!(overlap.max_x(), 10.0);
        assert!(!overlap.is_empty());

        let touching = Bounds::degrees(10.0, 0.0, 20.0, 10.0);
        let edge = a.overlap(&touching).unwrap();
        assert!(edge.is_empty());

        let disjoint = Bounds::degrees(11.0, 11.0, 12.0, 12.0);
        assert!(a.overlap(&disjoint).is_none());
    }

    #[test]
    fn test_union() {
        let a = Bounds::degrees(0.0, 0.0, 6.0, 8.0);
        let b = Bounds::degrees(6.0, 8.0, 12.0, 16.0);
        let union = a.union(&b);
        assert_eq!(union.min_x(), 0.0);
        assert_eq!(union.max_x(), 12.0);
        assert_eq!(union.max_y(), 16.0);
    }

    #[test]
    fn test_to_precision_expands_outward() {
        let bounds = Bounds::meters(326_938.0, 4_305_973.0, 327_001.0, 4_306_010.0);
        let expanded = bounds.to_precision(1_000.0);
        assert_eq!(expanded.min_x(), 326_000.0);
        assert_eq!(expanded.min_y(), 4_305_000.0);
        assert_eq!(expanded.max_x(), 328_000.0);
        assert_eq!(expanded.max_y(), 4_307_000.0);
    }

    #[test]
    fn test_unit_conversion_roundtrip() {
        let bounds = Bounds::degrees(-78.0, 38.0, -76.0, 40.0);
        let meters = bounds.to_meters();
        assert_eq!(meters.unit, Unit::Meter);
        let back = meters.to_degrees();
        assert!((back.min_x() + 78.0).abs() < 1e-9);
        assert!((back.max_y() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_edge_lines() {
        let bounds = Bounds::degrees(-78.0, 32.0, -72.0, 40.0);
        let lines = bounds.lines();
        assert_eq!(lines.len(), 4);
        let west = bounds.west_line();
        assert_eq!(west.point1.longitude(), -78.0);
        assert_eq!(west.point2.longitude(), -78.0);
    }

    #[test]
    fn test_line_intersection() {
        let horizontal = Line::new(
            GridPoint::degrees(-1.0, 5.0),
            GridPoint::degrees(1.0, 5.0),
        );
        let vertical = Line::new(
            GridPoint::degrees(0.0, 0.0),
            GridPoint::degrees(0.0, 10.0),
        );
        let point = horizontal.intersection(&vertical).unwrap();
        assert!((point.longitude()).abs() < 1e-12);
        assert!((point.latitude() - 5.0).abs() < 1e-12);

        let elsewhere = Line::new(
            GridPoint::degrees(2.0, 0.0),
            GridPoint::degrees(2.0, 10.0),
        );
        assert!(horizontal.intersection(&elsewhere).is_none());
    }

    #[test]
    fn test_line_mixed_units_rejected() {
        let result = Line::try_new(
            GridPoint::degrees(0.0, 0.0),
            GridPoint::meters(0.0, 0.0),
        );
        assert_eq!(
            result,
            Err(MgrsGridError::UnitMismatch(Unit::Degree, Unit::Meter))
        );
    }
}
