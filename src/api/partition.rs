use std::collections::HashMap;
use std::sync::OnceLock;

use crate::api::bounds::Bounds;
use crate::api::zone::{GridZone, LatitudeBand, LongitudinalStrip};
use crate::core::bands::{band_index, band_letter, band_letter_at, zone_number};
use crate::core::constants::{
    BAND_HEIGHT, MAX_BAND_HEIGHT, MAX_BAND_LETTER, MAX_ZONE_NUMBER, MIN_LAT, MIN_LON,
    MIN_ZONE_NUMBER, NORWAY_BAND_LETTER, NORWAY_MAX_ZONE_NUMBER, NORWAY_MIN_ZONE_NUMBER, NUM_BANDS,
    SVALBARD_BAND_LETTER, SVALBARD_MAX_ZONE_NUMBER, SVALBARD_MIN_ZONE_NUMBER, ZONE_WIDTH,
};

/// Inclusive zone number range covering a bounds rectangle.
///
/// The west edge uses the western tie-break and the east edge the eastern
/// one, so bounds touching a strip boundary cover both neighbors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoneNumberRange {
    pub west: u8,
    pub east: u8,
}

impl ZoneNumberRange {
    pub fn new(west: u8, east: u8) -> Self {
        Self { west, east }
    }

    pub fn from_bounds(bounds: &Bounds) -> Self {
        let bounds = bounds.to_degrees();
        Self {
            west: zone_number(bounds.min_x(), false),
            east: zone_number(bounds.max_x(), true),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + use<> {
        self.west..=self.east
    }
}

/// Inclusive band letter range covering a bounds rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandLetterRange {
    pub south: char,
    pub north: char,
}

impl BandLetterRange {
    pub fn new(south: char, north: char) -> Self {
        Self { south, north }
    }

    pub fn from_bounds(bounds: &Bounds) -> Self {
        let bounds = bounds.to_degrees();
        Self {
            south: band_letter(bounds.min_y(), false),
            north: band_letter(bounds.max_y(), true),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + use<> {
        (band_index(self.south)..=band_index(self.north)).map(band_letter_at)
    }
}

/// The immutable partition of the globe into longitudinal strips, latitude
/// bands, and their grid zones, with the Svalbard and Norway exceptions
/// applied.
///
/// Built once and shared; use [`ZonePartition::global`] for the memoized
/// process-wide table or [`ZonePartition::new`] for an owned one.
///
/// # Example
///
/// ```
/// use mgrs_grid_rs::ZonePartition;
///
/// let partition = ZonePartition::global();
/// assert!(partition.grid_zone(18, 'S').is_some());
/// // Svalbard removes 32X, 34X and 36X
/// assert!(partition.grid_zone(32, 'X').is_none());
/// ```
#[derive(Debug)]
pub struct ZonePartition {
    strips: Vec<LongitudinalStrip>,
    bands: Vec<LatitudeBand>,
    zones: HashMap<(u8, char), GridZone>,
}

impl ZonePartition {
    /// Builds the full partition table.
    pub fn new() -> Self {
        let mut strips = Vec::with_capacity(usize::from(MAX_ZONE_NUMBER));
        for number in MIN_ZONE_NUMBER..=MAX_ZONE_NUMBER {
            let west = MIN_LON + f64::from(number - 1) * ZONE_WIDTH;
            strips.push(LongitudinalStrip::new(number, west, west + ZONE_WIDTH));
        }

        let mut bands = Vec::with_capacity(usize::from(NUM_BANDS));
        let mut south = MIN_LAT;
        for index in 0..NUM_BANDS {
            let letter = band_letter_at(index);
            let height = if letter == MAX_BAND_LETTER { MAX_BAND_HEIGHT } else { BAND_HEIGHT };
            bands.push(LatitudeBand::new(letter, south, south + height));
            south += height;
        }

        let mut zones = HashMap::new();
        for band in &bands {
            for strip in &strips {
                let strip = if band.letter() == SVALBARD_BAND_LETTER
                    && is_svalbard_zone(strip.zone_number())
                {
                    svalbard_strip(strip)
                } else if band.letter() == NORWAY_BAND_LETTER && is_norway_zone(strip.zone_number())
                {
                    Some(norway_strip(strip))
                } else {
                    Some(strip.clone())
                };
                if let Some(strip) = strip {
                    zones.insert(
                        (strip.zone_number(), band.letter()),
                        GridZone::new(strip, band.clone()),
                    );
                }
            }
        }

        Self { strips, bands, zones }
    }

    /// The memoized process-wide partition, built on first use.
    pub fn global() -> &'static ZonePartition {
        static PARTITION: OnceLock<ZonePartition> = OnceLock::new();
        PARTITION.get_or_init(ZonePartition::new)
    }

    /// Nominal 6 degree strip of a zone number.
    pub fn strip(&self, zone_number: u8) -> Option<&LongitudinalStrip> {
        self.strips.get(usize::from(zone_number.checked_sub(1)?))
    }

    /// Latitude band of a letter.
    pub fn band(&self, letter: char) -> Option<&LatitudeBand> {
        self.bands.iter().find(|band| band.letter() == letter)
    }

    /// Grid zone lookup; `None` for the Svalbard gap combinations.
    pub fn grid_zone(&self, zone_number: u8, band_letter: char) -> Option<&GridZone> {
        self.zones.get(&(zone_number, band_letter))
    }

    /// All grid zones physically overlapping the bounds, in band then zone
    /// order.
    pub fn grid_zones(&self, bounds: &Bounds) -> Vec<&GridZone> {
        GridRange::new(self, *bounds).zones()
    }
}

impl Default for ZonePartition {
    fn default() -> Self {
        Self::new()
    }
}

fn is_svalbard_zone(zone_number: u8) -> bool {
    (SVALBARD_MIN_ZONE_NUMBER..=SVALBARD_MAX_ZONE_NUMBER).contains(&zone_number)
}

fn is_norway_zone(zone_number: u8) -> bool {
    (NORWAY_MIN_ZONE_NUMBER..=NORWAY_MAX_ZONE_NUMBER).contains(&zone_number)
}

/// Odd Svalbard zones absorb half of each removed even neighbor.
fn svalbard_strip(strip: &LongitudinalStrip) -> Option<LongitudinalStrip> {
    let number = strip.zone_number();
    if number % 2 == 0 {
        return None;
    }
    let half_width = (strip.east() - strip.west()) / 2.0;
    let west = if number > SVALBARD_MIN_ZONE_NUMBER { strip.west() - half_width } else { strip.west() };
    let east = if number < SVALBARD_MAX_ZONE_NUMBER { strip.east() + half_width } else { strip.east() };
    Some(LongitudinalStrip::new(number, west, east))
}

/// Zone 32 takes the eastern half of zone 31 over Norway; the narrowed
/// zone 31 marks its stolen half with an expand neighbor.
fn norway_strip(strip: &LongitudinalStrip) -> LongitudinalStrip {
    let number = strip.zone_number();
    let half_width = (strip.east() - strip.west()) / 2.0;
    if number == NORWAY_MIN_ZONE_NUMBER {
        LongitudinalStrip::with_expand(number, strip.west(), strip.east() - half_width, 1)
    } else {
        LongitudinalStrip::new(number, strip.west() - half_width, strip.east())
    }
}

/// All grid zones intersecting a bounds rectangle.
///
/// Candidates come from the nominal zone/band ranges; a Svalbard gap
/// visits its two odd neighbors and a strip with an expand count visits
/// that many neighbors on both sides. Every candidate is filtered by true
/// bounds overlap, so the widened strips are found even when the nominal
/// 6 degree arithmetic would miss them.
#[derive(Debug)]
pub struct GridRange<'a> {
    partition: &'a ZonePartition,
    bounds: Bounds,
}

impl<'a> GridRange<'a> {
    pub fn new(partition: &'a ZonePartition, bounds: Bounds) -> Self {
        Self { partition, bounds }
    }

    pub fn zones(&self) -> Vec<&'a GridZone> {
        let bounds = self.bounds.to_degrees();
        let zone_range = ZoneNumberRange::from_bounds(&bounds);
        let band_range = BandLetterRange::from_bounds(&bounds);

        let mut seen: Vec<(u8, char)> = Vec::new();
        let mut zones = Vec::new();

        for band_letter in band_range.iter() {
            for zone_number in zone_range.iter() {
                let mut candidates = vec![zone_number];
                match self.partition.grid_zone(zone_number, band_letter) {
                    None => {
                        // a removed Svalbard zone; its widened odd
                        // neighbors may reach into this strip
                        candidates.extend(neighbors(zone_number, 1));
                    }
                    Some(zone) => {
                        candidates.extend(neighbors(zone_number, zone.strip().expand()));
                    }
                }
                for candidate in candidates {
                    let Some(zone) = self.partition.grid_zone(candidate, band_letter) else {
                        continue;
                    };
                    let overlaps = zone
                        .bounds()
                        .overlap(&bounds)
                        .is_some_and(|overlap| !overlap.is_empty());
                    if overlaps && !seen.contains(&(candidate, band_letter)) {
                        seen.push((candidate, band_letter));
                        zones.push(zone);
                    }
                }
            }
        }

        zones
    }
}

fn neighbors(zone_number: u8, expand: u8) -> Vec<u8> {
    let mut numbers = Vec::new();
    for offset in 1..=expand {
        if zone_number >= MIN_ZONE_NUMBER + offset {
            numbers.push(zone_number - offset);
        }
        if zone_number + offset <= MAX_ZONE_NUMBER {
            numbers.push(zone_number + offset);
        }
    }
    numbers
}
