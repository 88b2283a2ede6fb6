use std::fmt;

use crate::api::bounds::{Bounds, Line};
use crate::api::grid_type::GridType;
use crate::api::point::GridPoint;
use crate::api::utm::Hemisphere;
use crate::core::projection::{geographic_to_utm, utm_to_geographic};

/// One of the 60 longitudinal strips, possibly widened or narrowed by the
/// Svalbard and Norway exceptions.
#[derive(Debug, Clone, PartialEq)]
pub struct LongitudinalStrip {
    zone_number: u8,
    west: f64,
    east: f64,
    /// Neighboring strips to additionally visit when iterating ranges.
    expand: u8,
}

impl LongitudinalStrip {
    pub fn new(zone_number: u8, west: f64, east: f64) -> Self {
        Self { zone_number, west, east, expand: 0 }
    }

    pub fn with_expand(zone_number: u8, west: f64, east: f64, expand: u8) -> Self {
        Self { zone_number, west, east, expand }
    }

    pub fn zone_number(&self) -> u8 {
        self.zone_number
    }

    pub fn west(&self) -> f64 {
        self.west
    }

    pub fn east(&self) -> f64 {
        self.east
    }

    pub fn expand(&self) -> u8 {
        self.expand
    }
}

/// One of the 20 latitude bands, C through X.
#[derive(Debug, Clone, PartialEq)]
pub struct LatitudeBand {
    letter: char,
    south: f64,
    north: f64,
}

impl LatitudeBand {
    pub fn new(letter: char, south: f64, north: f64) -> Self {
        Self { letter, south, north }
    }

    pub fn letter(&self) -> char {
        self.letter
    }

    pub fn south(&self) -> f64 {
        self.south
    }

    pub fn north(&self) -> f64 {
        self.north
    }

    pub fn hemisphere(&self) -> Hemisphere {
        Hemisphere::from_band_letter(self.letter)
    }
}

/// One cell of the zone partition, a longitudinal strip crossed with a
/// latitude band. Identity is the zone number and band letter.
#[derive(Debug, Clone, PartialEq)]
pub struct GridZone {
    strip: LongitudinalStrip,
    band: LatitudeBand,
}

impl GridZone {
    pub fn new(strip: LongitudinalStrip, band: LatitudeBand) -> Self {
        Self { strip, band }
    }

    pub fn strip(&self) -> &LongitudinalStrip {
        &self.strip
    }

    pub fn band(&self) -> &LatitudeBand {
        &self.band
    }

    pub fn zone_number(&self) -> u8 {
        self.strip.zone_number
    }

    pub fn band_letter(&self) -> char {
        self.band.letter
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.band.hemisphere()
    }

    /// Designator name, e.g. "18S".
    pub fn name(&self) -> String {
        format!("{}{}", self.strip.zone_number, self.band.letter)
    }

    /// Degree rectangle of the strip crossed with the band.
    pub fn bounds(&self) -> Bounds {
        Bounds::degrees(self.strip.west, self.band.south, self.strip.east, self.band.north)
    }

    /// Grid lines of the requested precision within the tile bounds.
    ///
    /// The zone designator grid draws the four zone edges. Finer grids walk
    /// the easting/northing lattice of the draw bounds, tagging each
    /// segment with the precision its own coordinate value implies, and
    /// pull endpoints that overshoot the zone's true longitude range back
    /// to one meter inside the boundary.
    pub fn lines(&self, tile_bounds: &Bounds, grid_type: GridType) -> Vec<Line> {
        let mut lines = Vec::new();
        if grid_type == GridType::Gzd {
            for mut line in self.bounds().lines() {
                line.grid_type = Some(GridType::Gzd);
                lines.push(line);
            }
            return lines;
        }

        let Some(draw_bounds) = self.draw_bounds(tile_bounds, grid_type) else {
            return lines;
        };

        let precision = grid_type.precision();
        let bounds = self.bounds();
        let min_lon = bounds.min_x();
        let max_lon = bounds.max_x();
        let zone_number = self.zone_number();
        let northern = self.hemisphere().is_northern();

        let to_point = |easting: f64, northing: f64| {
            let (longitude, latitude) = utm_to_geographic(easting, northing, zone_number, northern);
            GridPoint::degrees(longitude, latitude)
        };

        let mut easting = draw_bounds.min_x();
        while easting < draw_bounds.max_x() {
            let easting_precision = GridType::precision_of(easting);

            let mut northing = draw_bounds.min_y();
            while northing < draw_bounds.max_y() {
                let northing_precision = GridType::precision_of(northing);

                let mut southwest = to_point(easting, northing);
                let northwest = to_point(easting, northing + precision);
                let mut southeast = to_point(easting + precision, northing);

                // pull points outside the zone back inside the boundary
                if precision > 1.0 {
                    if southwest.longitude() < min_lon {
                        if let Some(point) =
                            self.bounds_point(northing, &southwest, &southeast, false)
                        {
                            southwest = point;
                        }
                    } else if southeast.longitude() > max_lon {
                        if let Some(point) =
                            self.bounds_point(northing, &southwest, &southeast, true)
                        {
                            southeast = point;
                        }
                    }
                }

                lines.push(Line::with_type(southwest, northwest, easting_precision));
                lines.push(Line::with_type(southwest, southeast, northing_precision));

                northing += precision;
            }
            easting += precision;
        }

        lines
    }

    /// The UTM meter rectangle to generate grid geometry over, covering
    /// the tile/zone overlap expanded outward to the precision lattice.
    ///
    /// `None` when the tile does not overlap the zone. The returned bounds
    /// carry UTM meters for the zone designator they came from and are
    /// only meaningful as loop ranges.
    pub fn draw_bounds(&self, tile_bounds: &Bounds, grid_type: GridType) -> Option<Bounds> {
        let bounds = self.bounds();
        let overlap = tile_bounds.to_degrees().overlap(&bounds)?;
        if overlap.is_empty() {
            return None;
        }
        if grid_type == GridType::Gzd {
            return Some(overlap);
        }

        let precision = grid_type.precision();
        let zone_number = self.zone_number();
        let northern = self.hemisphere().is_northern();
        let project = |point: GridPoint| {
            geographic_to_utm(point.longitude(), point.latitude(), zone_number, northern)
        };

        let (sw_e, sw_n) = project(overlap.southwest());
        let (nw_e, nw_n) = project(overlap.northwest());
        let (se_e, se_n) = project(overlap.southeast());
        let (ne_e, ne_n) = project(overlap.northeast());

        let left = sw_e.min(nw_e);
        let lower = sw_n.min(se_n);
        let right = se_e.max(ne_e);
        let upper = nw_n.max(ne_n);

        Some(Bounds::meters(left, lower, right, upper).to_precision(precision))
    }

    /// The one meter precision point just inside the west or east zone
    /// boundary, on the horizontal grid line at the given northing.
    fn bounds_point(
        &self,
        northing: f64,
        west: &GridPoint,
        east: &GridPoint,
        eastern: bool,
    ) -> Option<GridPoint> {
        let bounds = self.bounds();
        let bounds_line = if eastern { bounds.east_line() } else { bounds.west_line() };
        let bounds_longitude = bounds_line.point1.longitude();

        let segment = Line::new(*west, *east);
        let intersection = segment.intersection(&bounds_line)?;

        let zone_number = self.zone_number();
        let northern = self.hemisphere().is_northern();
        let (easting, _) = geographic_to_utm(
            intersection.longitude(),
            intersection.latitude(),
            zone_number,
            northern,
        );
        // round away from the boundary into the zone
        let easting = if eastern { easting.floor() } else { easting.ceil() };
        let (_, latitude) = utm_to_geographic(easting, northing, zone_number, northern);
        Some(GridPoint::degrees(bounds_longitude, latitude))
    }
}

impl fmt::Display for GridZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
