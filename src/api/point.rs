use geo_types::{Coord, Point};

use crate::core::projection::{degrees_to_meters, meters_to_degrees};
use crate::util::coord::{Coordinate, Unit};

/// A point in either degree or Web Mercator meter space.
///
/// The unit is part of the value: operations that combine two points
/// require identical units and conversions are always explicit.
///
/// # Example
///
/// ```
/// use mgrs_grid_rs::{GridPoint, Unit};
///
/// let point = GridPoint::degrees(-76.9953, 38.8856);
/// let meters = point.to_meters();
/// assert_eq!(meters.unit, Unit::Meter);
/// let back = meters.to_degrees();
/// assert!((back.longitude() - point.longitude()).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridPoint {
    /// Position, x/longitude then y/latitude
    pub coord: Coord<f64>,
    /// Space the position is expressed in
    pub unit: Unit,
}

impl GridPoint {
    /// Point from WGS84 longitude and latitude degrees.
    pub fn degrees(longitude: f64, latitude: f64) -> Self {
        Self {
            coord: Coord { x: longitude, y: latitude },
            unit: Unit::Degree,
        }
    }

    /// Point from Web Mercator meters.
    pub fn meters(x: f64, y: f64) -> Self {
        Self {
            coord: Coord { x, y },
            unit: Unit::Meter,
        }
    }

    /// Degree point from any lon/lat coordinate source.
    pub fn from_coordinate<C: Coordinate>(coord: &C) -> Self {
        Self::degrees(coord.x(), coord.y())
    }

    pub fn longitude(&self) -> f64 {
        self.coord.x
    }

    pub fn latitude(&self) -> f64 {
        self.coord.y
    }

    pub fn is_unit(&self, unit: Unit) -> bool {
        self.unit == unit
    }

    /// The point converted to the given unit, a copy when already there.
    pub fn to_unit(&self, unit: Unit) -> GridPoint {
        match (self.unit, unit) {
            (Unit::Degree, Unit::Meter) => {
                let (x, y) = degrees_to_meters(self.coord.x, self.coord.y);
                GridPoint::meters(x, y)
            }
            (Unit::Meter, Unit::Degree) => {
                let (longitude, latitude) = meters_to_degrees(self.coord.x, self.coord.y);
                GridPoint::degrees(longitude, latitude)
            }
            _ => *self,
        }
    }

    pub fn to_degrees(&self) -> GridPoint {
        self.to_unit(Unit::Degree)
    }

    pub fn to_meters(&self) -> GridPoint {
        self.to_unit(Unit::Meter)
    }

    /// The position as a `geo_types` point.
    pub fn point(&self) -> Point<f64> {
        self.coord.into()
    }
}

impl Coordinate for GridPoint {
    fn x(&self) -> f64 {
        self.coord.x
    }

    fn y(&self) -> f64 {
        self.coord.y
    }
}
