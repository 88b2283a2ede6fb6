pub mod bounds;
pub mod grid_type;
pub mod grids;
pub mod labeler;
pub mod mgrs;
pub mod partition;
pub mod point;
pub mod properties;
pub mod style;
pub mod tile;
pub mod utm;
pub mod zone;

pub use bounds::{Bounds, Line};
pub use grid_type::GridType;
pub use grids::{Grid, Grids, ZoomGrids};
pub use labeler::{GridLabel, GridLabeler, LabelerKind};
pub use mgrs::Mgrs;
pub use partition::{BandLetterRange, GridRange, ZoneNumberRange, ZonePartition};
pub use point::GridPoint;
pub use properties::{GridProperties, GridsProperties, LabelerProperties};
pub use style::{Color, GridStyle};
pub use tile::{GridTile, Pixel, PixelRange, TileContent, TileLine};
pub use utm::{Hemisphere, Utm};
pub use zone::{GridZone, LatitudeBand, LongitudinalStrip};
