pub mod coord;
pub mod error;

pub use coord::{Coordinate, Unit};
pub use error::MgrsGridError;
