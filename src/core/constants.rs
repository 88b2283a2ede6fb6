/// WGS84 semi-major axis (meters)
pub const WGS84_A: f64 = 6378137.0;

/// WGS84 first eccentricity squared
pub const WGS84_E2: f64 = 0.00669437999014133;

/// WGS84 second eccentricity squared
pub const WGS84_EP2: f64 = WGS84_E2 / (1.0 - WGS84_E2);

/// UTM central meridian scale factor
pub const UTM_K0: f64 = 0.9996;

/// UTM false easting (meters)
pub const UTM_FALSE_EASTING: f64 = 500_000.0;

/// Southern hemisphere false northing (meters)
pub const UTM_FALSE_NORTHING: f64 = 10_000_000.0;

/// Minimum longitude
pub const MIN_LON: f64 = -180.0;

/// Maximum longitude
pub const MAX_LON: f64 = 180.0;

/// Minimum latitude covered by the band alphabet
pub const MIN_LAT: f64 = -80.0;

/// Maximum latitude covered by the band alphabet
pub const MAX_LAT: f64 = 84.0;

/// Longitudinal strip width (degrees)
pub const ZONE_WIDTH: f64 = 6.0;

/// Latitude band height (degrees)
pub const BAND_HEIGHT: f64 = 8.0;

/// Height of the northernmost band X (degrees)
pub const MAX_BAND_HEIGHT: f64 = 12.0;

/// Minimum zone number
pub const MIN_ZONE_NUMBER: u8 = 1;

/// Maximum zone number
pub const MAX_ZONE_NUMBER: u8 = 60;

/// Number of latitude bands
pub const NUM_BANDS: u8 = 20;

/// Southernmost band letter
pub const MIN_BAND_LETTER: char = 'C';

/// Northernmost band letter
pub const MAX_BAND_LETTER: char = 'X';

/// Band containing the Svalbard strip-width exceptions
pub const SVALBARD_BAND_LETTER: char = 'X';

/// Band containing the Norway strip-width exception
pub const NORWAY_BAND_LETTER: char = 'V';

/// Zone numbers subject to the Svalbard exception in band X
pub const SVALBARD_MIN_ZONE_NUMBER: u8 = 31;
pub const SVALBARD_MAX_ZONE_NUMBER: u8 = 37;

/// Zone numbers subject to the Norway exception in band V
pub const NORWAY_MIN_ZONE_NUMBER: u8 = 31;
pub const NORWAY_MAX_ZONE_NUMBER: u8 = 32;

/// Web Mercator half world width (meters)
pub const WEB_MERCATOR_HALF_WORLD_WIDTH: f64 = 20037508.342789244;

/// 100 km square size (meters)
pub const HUNDRED_KM: f64 = 100_000.0;

/// Height of one full row letter cycle (meters)
pub const ROW_LETTER_CYCLE: f64 = 2_000_000.0;

/// 100 km square column letters, cycling every third zone
pub const COLUMN_LETTERS: [&str; 3] = ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"];

/// 100 km square row letters for odd numbered zones
pub const ROW_LETTERS_ODD: &str = "ABCDEFGHJKLMNPQRSTUV";

/// 100 km square row letters for even numbered zones, rotated by five
pub const ROW_LETTERS_EVEN: &str = "FGHJKLMNPQRSTUVABCDE";

/// Minimum zoom level seeded in the grids zoom table
pub const MIN_ZOOM_LEVEL: u8 = 0;

/// Maximum zoom level seeded in the grids zoom table
pub const MAX_ZOOM_LEVEL: u8 = 21;
