pub mod bands;
pub mod constants;
pub mod letters;
pub mod projection;

pub use bands::{
    band_index, band_letter, band_letter_at, band_south_latitude, is_northern_band,
    normalize_longitude, validate_band_letter, validate_zone_number, zone_number, zone_number_at,
};
pub use constants::{MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL};
pub use letters::{column_letter, column_letters, row_letter, row_letters};
pub use projection::{
    central_meridian, degrees_to_meters, geographic_to_utm, meters_to_degrees, utm_to_geographic,
};
