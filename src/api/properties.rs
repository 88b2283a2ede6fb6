use serde::{Deserialize, Serialize};

use crate::api::grid_type::GridType;
use crate::api::style::Color;

/// Typed labeler configuration supplied by an external properties loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelerProperties {
    pub enabled: bool,
    pub min_zoom: u8,
    #[serde(default)]
    pub max_zoom: Option<u8>,
    #[serde(default)]
    pub color: Color,
    #[serde(default = "default_text_size")]
    pub text_size: f64,
    #[serde(default = "default_buffer")]
    pub buffer: f64,
}

/// Typed per-grid configuration supplied by an external properties loader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridProperties {
    pub grid_type: GridType,
    pub enabled: bool,
    pub min_zoom: u8,
    #[serde(default)]
    pub max_zoom: Option<u8>,
    #[serde(default)]
    pub color: Color,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default)]
    pub labeler: Option<LabelerProperties>,
}

/// The full grid configuration table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridsProperties {
    pub grids: Vec<GridProperties>,
}

impl GridsProperties {
    pub fn grid(&self, grid_type: GridType) -> Option<&GridProperties> {
        self.grids.iter().find(|grid| grid.grid_type == grid_type)
    }
}

impl Default for GridsProperties {
    /// The stock table: every grid enabled, zoom floors stepping with
    /// precision, labelers one zoom level above their grid.
    fn default() -> Self {
        let table: [(GridType, u8, f64, u8, f64); 7] = [
            (GridType::Gzd, 0, 2.0, 4, 24.0),
            (GridType::HundredKilometer, 5, 1.0, 6, 16.0),
            (GridType::TenKilometer, 9, 1.0, 10, 16.0),
            (GridType::Kilometer, 12, 1.0, 13, 16.0),
            (GridType::HundredMeter, 15, 1.0, 16, 16.0),
            (GridType::TenMeter, 18, 1.0, 19, 16.0),
            (GridType::Meter, 20, 1.0, 20, 16.0),
        ];
        let grids = table
            .into_iter()
            .map(|(grid_type, min_zoom, width, labeler_min_zoom, text_size)| GridProperties {
                grid_type,
                enabled: true,
                min_zoom,
                max_zoom: None,
                color: Color::BLACK,
                width,
                labeler: Some(LabelerProperties {
                    enabled: true,
                    min_zoom: labeler_min_zoom,
                    max_zoom: None,
                    color: Color::BLACK,
                    text_size,
                    buffer: default_buffer(),
                }),
            })
            .collect();
        Self { grids }
    }
}

fn default_width() -> f64 {
    1.0
}

fn default_text_size() -> f64 {
    16.0
}

fn default_buffer() -> f64 {
    0.05
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_complete() {
        let properties = GridsProperties::default();
        for grid_type in GridType::ALL {
            let grid = properties.grid(grid_type).expect("configured");
            assert!(grid.enabled);
            assert!(grid.labeler.is_some());
        }
        assert_eq!(properties.grid(GridType::Gzd).unwrap().min_zoom, 0);
        assert_eq!(properties.grid(GridType::Meter).unwrap().min_zoom, 20);
    }

    #[test]
    fn test_deserialize_from_json() {
        let json = r#"{
            "grids": [
                {
                    "grid_type": "Gzd",
                    "enabled": true,
                    "min_zoom": 2,
                    "width": 1.5,
                    "labeler": {
                        "enabled": true,
                        "min_zoom": 3,
                        "text_size": 20.0,
                        "buffer": 0.1
                    }
                },
                {
                    "grid_type": "HundredKilometer",
                    "enabled": false,
                    "min_zoom": 6
                }
            ]
        }"#;
        let properties: GridsProperties = serde_json::from_str(json).expect("parses");
        let gzd = properties.grid(GridType::Gzd).unwrap();
        assert_eq!(gzd.min_zoom, 2);
        assert_eq!(gzd.width, 1.5);
        assert_eq!(gzd.color, Color::BLACK);
        let labeler = gzd.labeler.as_ref().unwrap();
        assert_eq!(labeler.min_zoom, 3);
        assert_eq!(labeler.buffer, 0.1);

        let hundred = properties.grid(GridType::HundredKilometer).unwrap();
        assert!(!hundred.enabled);
        assert_eq!(hundred.width, 1.0);
        assert!(hundred.labeler.is_none());
        assert!(properties.grid(GridType::Meter).is_none());
    }

    #[test]
    fn test_serialize_roundtrip() {
        let properties = GridsProperties::default();
        let json = serde_json::to_string(&properties).expect("serializes");
        let back: GridsProperties = serde_json::from_str(&json).expect("parses");
        assert_eq!(back, properties);
    }
}
