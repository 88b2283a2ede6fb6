use geo_types::{Coord, Point};

/// Coordinate space unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    /// WGS84 longitude/latitude degrees (EPSG:4326)
    Degree,
    /// Web Mercator meters (EPSG:3857)
    Meter,
}

pub trait Coordinate {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 { self.0 }
    fn y(&self) -> f64 { self.1 }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 { Point::x(*self) }
    fn y(&self) -> f64 { Point::y(*self) }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 { self.x }
    fn y(&self) -> f64 { self.y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_trait_tuple() {
        let tuple = (-76.9953, 38.8856);
        assert_eq!(tuple.x(), -76.9953);
        assert_eq!(tuple.y(), 38.8856);
    }

    #[test]
    fn test_coordinate_trait_point() {
        let point = Point::new(-76.9953, 38.8856);
        assert_eq!(point.x(), -76.9953);
        assert_eq!(point.y(), 38.8856);
    }

    #[test]
    fn test_coordinate_trait_coord() {
        let coord = Coord { x: -76.9953, y: 38.8856 };
        assert_eq!(coord.x(), -76.9953);
        assert_eq!(coord.y(), 38.8856);
    }
}
