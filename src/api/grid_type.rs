use serde::{Deserialize, Serialize};

/// Grid precision levels, ordered coarse to fine.
///
/// The ordering doubles as the precision rank: `Gzd` is the whole grid
/// zone, every later variant refines by a power of ten down to one meter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum GridType {
    /// Grid zone designator, the full zone/band cell
    Gzd,
    /// 100,000 m squares
    HundredKilometer,
    /// 10,000 m squares
    TenKilometer,
    /// 1,000 m squares
    Kilometer,
    /// 100 m squares
    HundredMeter,
    /// 10 m squares
    TenMeter,
    /// 1 m squares
    Meter,
}

impl GridType {
    /// All grid types, coarse to fine.
    pub const ALL: [GridType; 7] = [
        GridType::Gzd,
        GridType::HundredKilometer,
        GridType::TenKilometer,
        GridType::Kilometer,
        GridType::HundredMeter,
        GridType::TenMeter,
        GridType::Meter,
    ];

    /// Grid cell size in meters, zero for the zone designator.
    pub fn precision(self) -> f64 {
        match self {
            GridType::Gzd => 0.0,
            GridType::HundredKilometer => 100_000.0,
            GridType::TenKilometer => 10_000.0,
            GridType::Kilometer => 1_000.0,
            GridType::HundredMeter => 100.0,
            GridType::TenMeter => 10.0,
            GridType::Meter => 1.0,
        }
    }

    /// Number of easting/northing digits encoded at this precision.
    pub fn accuracy(self) -> u32 {
        match self {
            GridType::Gzd | GridType::HundredKilometer => 0,
            GridType::TenKilometer => 1,
            GridType::Kilometer => 2,
            GridType::HundredMeter => 3,
            GridType::TenMeter => 4,
            GridType::Meter => 5,
        }
    }

    /// Grid type encoding the given number of digits.
    pub fn from_accuracy(accuracy: u32) -> GridType {
        match accuracy {
            0 => GridType::HundredKilometer,
            1 => GridType::TenKilometer,
            2 => GridType::Kilometer,
            3 => GridType::HundredMeter,
            4 => GridType::TenMeter,
            _ => GridType::Meter,
        }
    }

    /// Precision actually implied by an easting or northing value.
    ///
    /// A grid line at a whole multiple of a coarser precision belongs to
    /// that coarser grid even when generated at a finer one.
    pub fn precision_of(value: f64) -> GridType {
        if value % 100_000.0 == 0.0 {
            GridType::HundredKilometer
        } else if value % 10_000.0 == 0.0 {
            GridType::TenKilometer
        } else if value % 1_000.0 == 0.0 {
            GridType::Kilometer
        } else if value % 100.0 == 0.0 {
            GridType::HundredMeter
        } else if value % 10.0 == 0.0 {
            GridType::TenMeter
        } else {
            GridType::Meter
        }
    }
}
