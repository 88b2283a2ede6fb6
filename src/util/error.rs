use crate::util::coord::Unit;

/// Error type for mgrs-grid-rs operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MgrsGridError {
    /// The UTM zone number is outside the valid range (1-60).
    InvalidZoneNumber(u8),
    /// The latitude band letter is outside C-X or one of the omitted letters I and O.
    InvalidBandLetter(char),
    /// A zoom range maximum is smaller than its minimum.
    InvalidZoomRange(u8, u8),
    /// A label edge buffer is outside the valid range [0.0, 0.5).
    InvalidEdgeBuffer(f64),
    /// A style override names a precision finer than the grid's own type.
    InvalidStylePrecision(String),
    /// The MGRS string does not match the grammar or names a removed zone.
    InvalidMgrs(String),
    /// The UTM string does not match the grammar.
    InvalidUtm(String),
    /// Arithmetic between values tagged with different units.
    UnitMismatch(Unit, Unit),
}

impl std::fmt::Display for MgrsGridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MgrsGridError::InvalidZoneNumber(zone) => write!(f, "Invalid zone number: {}", zone),
            MgrsGridError::InvalidBandLetter(band) => write!(f, "Invalid band letter: {}", band),
            MgrsGridError::InvalidZoomRange(min, max) => {
                write!(f, "Invalid zoom range: {} - {}", min, max)
            }
            MgrsGridError::InvalidEdgeBuffer(buffer) => {
                write!(f, "Invalid edge buffer: {}", buffer)
            }
            MgrsGridError::InvalidStylePrecision(msg) => {
                write!(f, "Invalid style precision: {}", msg)
            }
            MgrsGridError::InvalidMgrs(msg) => write!(f, "Invalid MGRS: {}", msg),
            MgrsGridError::InvalidUtm(msg) => write!(f, "Invalid UTM: {}", msg),
            MgrsGridError::UnitMismatch(expected, actual) => {
                write!(f, "Unit mismatch: expected {:?}, found {:?}", expected, actual)
            }
        }
    }
}

impl std::error::Error for MgrsGridError {}
