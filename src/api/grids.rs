use std::collections::HashMap;

use log::{debug, trace};

use crate::api::grid_type::GridType;
use crate::api::labeler::{GridLabeler, LabelerKind};
use crate::api::partition::ZonePartition;
use crate::api::properties::{GridProperties, GridsProperties};
use crate::api::style::{Color, GridStyle};
use crate::api::tile::{GridTile, TileContent, TileLine};
use crate::core::constants::{MAX_ZOOM_LEVEL, MIN_ZOOM_LEVEL};
use crate::util::error::MgrsGridError;

/// Configuration of one grid precision: zoom range, style, and labeler.
///
/// Owned by [`Grids`], which keeps the per-zoom activation sets in step
/// with every configuration change.
#[derive(Debug, Clone)]
pub struct Grid {
    grid_type: GridType,
    enabled: bool,
    min_zoom: u8,
    max_zoom: Option<u8>,
    lines_min_zoom: Option<u8>,
    lines_max_zoom: Option<u8>,
    style: GridStyle,
    precision_styles: HashMap<GridType, GridStyle>,
    labeler: Option<GridLabeler>,
}

impl Grid {
    fn from_properties(
        grid_type: GridType,
        properties: Option<&GridProperties>,
    ) -> Result<Self, MgrsGridError> {
        let labeler = match properties.and_then(|p| p.labeler.as_ref()) {
            Some(labeler_properties) => {
                let kind = if grid_type == GridType::Gzd {
                    LabelerKind::Gzd
                } else {
                    LabelerKind::Mgrs
                };
                let mut labeler = GridLabeler::new(
                    kind,
                    labeler_properties.min_zoom,
                    labeler_properties.color,
                    labeler_properties.text_size,
                    labeler_properties.buffer,
                )?;
                labeler.set_enabled(labeler_properties.enabled);
                labeler.set_zoom_range(labeler_properties.min_zoom, labeler_properties.max_zoom)?;
                Some(labeler)
            }
            None => None,
        };
        Ok(Self {
            grid_type,
            enabled: properties.is_some_and(|p| p.enabled),
            min_zoom: properties.map_or(MIN_ZOOM_LEVEL, |p| p.min_zoom),
            max_zoom: properties.and_then(|p| p.max_zoom),
            lines_min_zoom: None,
            lines_max_zoom: None,
            style: GridStyle::new(
                properties.map_or(Color::BLACK, |p| p.color),
                properties.map_or(1.0, |p| p.width),
            ),
            precision_styles: HashMap::new(),
            labeler,
        })
    }

    pub fn grid_type(&self) -> GridType {
        self.grid_type
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn min_zoom(&self) -> u8 {
        self.min_zoom
    }

    pub fn max_zoom(&self) -> Option<u8> {
        self.max_zoom
    }

    pub fn lines_min_zoom(&self) -> Option<u8> {
        self.lines_min_zoom
    }

    pub fn lines_max_zoom(&self) -> Option<u8> {
        self.lines_max_zoom
    }

    pub fn labeler(&self) -> Option<&GridLabeler> {
        self.labeler.as_ref()
    }

    pub fn is_within(&self, zoom: u8) -> bool {
        zoom >= self.min_zoom && self.max_zoom.is_none_or(|max| zoom <= max)
    }

    /// Whether lines draw at the zoom, honoring the lines-only overrides.
    pub fn is_lines_within(&self, zoom: u8) -> bool {
        self.lines_min_zoom.is_none_or(|min| zoom >= min)
            && self.lines_max_zoom.is_none_or(|max| zoom <= max)
    }

    /// Base line style.
    pub fn style(&self) -> GridStyle {
        self.style
    }

    /// Resolved style for lines of the given precision within this grid.
    ///
    /// An explicit override wins; an override width of zero, or no
    /// override at all, falls back to the base style.
    pub fn style_for(&self, precision: GridType) -> GridStyle {
        if precision == self.grid_type {
            return self.style;
        }
        match self.precision_styles.get(&precision) {
            Some(style) if style.width > 0.0 => *style,
            Some(style) => GridStyle::new(style.color, self.style.width),
            None => self.style,
        }
    }

    fn set_precision_style(
        &mut self,
        precision: GridType,
        style: GridStyle,
    ) -> Result<(), MgrsGridError> {
        // lines only ever carry tags at or coarser than the grid's own
        // precision, so finer overrides would never apply
        if precision > self.grid_type {
            return Err(MgrsGridError::InvalidStylePrecision(format!(
                "{:?} is finer than the {:?} grid",
                precision, self.grid_type
            )));
        }
        self.precision_styles.insert(precision, style);
        Ok(())
    }
}

/// The grids active at one integer zoom level, sorted coarse to fine.
#[derive(Debug, Clone)]
pub struct ZoomGrids {
    zoom: u8,
    grid_types: Vec<GridType>,
}

impl ZoomGrids {
    fn new(zoom: u8) -> Self {
        Self { zoom, grid_types: Vec::new() }
    }

    pub fn zoom(&self) -> u8 {
        self.zoom
    }

    /// Active grid types in increasing precision order.
    pub fn grid_types(&self) -> &[GridType] {
        &self.grid_types
    }

    pub fn has_grids(&self) -> bool {
        !self.grid_types.is_empty()
    }

    pub fn len(&self) -> usize {
        self.grid_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid_types.is_empty()
    }

    pub fn contains(&self, grid_type: GridType) -> bool {
        self.grid_types.contains(&grid_type)
    }

    /// Set-style insert; false when already present.
    fn add(&mut self, grid_type: GridType) -> bool {
        match self.grid_types.binary_search(&grid_type) {
            Ok(_) => false,
            Err(position) => {
                self.grid_types.insert(position, grid_type);
                true
            }
        }
    }

    /// Set-style removal; false when absent.
    fn remove(&mut self, grid_type: GridType) -> bool {
        match self.grid_types.binary_search(&grid_type) {
            Ok(position) => {
                self.grid_types.remove(position);
                true
            }
            Err(_) => false,
        }
    }
}

/// The mutable aggregate of all grid configurations and their per-zoom
/// activation sets.
///
/// The zoom table is an array seeded for zooms 0 through 21; the global
/// zoom range derives from its ends. Configuration is single-owner: the
/// caller serializes mutations (see the crate concurrency notes).
///
/// # Example
///
/// ```
/// use mgrs_grid_rs::{GridType, Grids, GridTile};
///
/// # fn main() -> Result<(), mgrs_grid_rs::MgrsGridError> {
/// let mut grids = Grids::new();
/// grids.set_zoom_range(GridType::HundredKilometer, 3, Some(7))?;
///
/// let tile = GridTile::xyz(256, 256, 9, 12, 5);
/// let content = grids.tile_content(&tile);
/// assert!(!content.lines.is_empty());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Grids {
    grids: Vec<Grid>,
    zoom_grids: Vec<ZoomGrids>,
}

impl Grids {
    /// Grids with the stock configuration table.
    pub fn new() -> Self {
        Self::with_properties(GridsProperties::default()).expect("stock properties are valid")
    }

    /// Grids configured from loaded properties.
    pub fn with_properties(properties: GridsProperties) -> Result<Self, MgrsGridError> {
        let mut grids = Vec::with_capacity(GridType::ALL.len());
        for grid_type in GridType::ALL {
            grids.push(Grid::from_properties(grid_type, properties.grid(grid_type))?);
        }
        let zoom_grids = (MIN_ZOOM_LEVEL..=MAX_ZOOM_LEVEL).map(ZoomGrids::new).collect();
        let mut value = Self { grids, zoom_grids };
        for grid_type in GridType::ALL {
            let grid = value.grid(grid_type);
            if grid.is_enabled() {
                let min = grid.min_zoom();
                let max = grid.max_zoom().unwrap_or(MAX_ZOOM_LEVEL);
                for zoom in min..=max {
                    value.add_grid(grid_type, zoom);
                }
            }
        }
        Ok(value)
    }

    pub fn grid(&self, grid_type: GridType) -> &Grid {
        &self.grids[grid_type as usize]
    }

    /// Mutable access to a grid's labeler.
    pub fn labeler_mut(&mut self, grid_type: GridType) -> Option<&mut GridLabeler> {
        self.grids[grid_type as usize].labeler.as_mut()
    }

    /// The grids active at a zoom level; `None` outside the seeded range.
    pub fn grids_at(&self, zoom: u8) -> Option<&ZoomGrids> {
        let index = zoom.checked_sub(MIN_ZOOM_LEVEL)?;
        self.zoom_grids.get(usize::from(index))
    }

    /// Smallest zoom level in the seeded table.
    pub fn min_zoom_level(&self) -> u8 {
        self.zoom_grids.first().map_or(MIN_ZOOM_LEVEL, ZoomGrids::zoom)
    }

    /// Largest zoom level in the seeded table.
    pub fn max_zoom_level(&self) -> u8 {
        self.zoom_grids.last().map_or(MAX_ZOOM_LEVEL, ZoomGrids::zoom)
    }

    /// Enables the grid across its zoom range; false when already enabled.
    pub fn enable(&mut self, grid_type: GridType) -> bool {
        if self.grids[grid_type as usize].enabled {
            return false;
        }
        self.grids[grid_type as usize].enabled = true;
        let min = self.grids[grid_type as usize].min_zoom;
        let max = self.grids[grid_type as usize]
            .max_zoom
            .unwrap_or(self.max_zoom_level());
        for zoom in min..=max {
            self.add_grid(grid_type, zoom);
        }
        debug!("enabled {:?} for zooms {}..={}", grid_type, min, max);
        true
    }

    /// Disables the grid everywhere; false when already disabled.
    pub fn disable(&mut self, grid_type: GridType) -> bool {
        if !self.grids[grid_type as usize].enabled {
            return false;
        }
        self.grids[grid_type as usize].enabled = false;
        let min = self.grids[grid_type as usize].min_zoom;
        let max = self.grids[grid_type as usize]
            .max_zoom
            .unwrap_or(self.max_zoom_level());
        for zoom in min..=max {
            self.remove_grid(grid_type, zoom);
        }
        debug!("disabled {:?}", grid_type);
        true
    }

    /// Moves the grid's zoom range, touching only the zoom levels whose
    /// membership actually changes.
    ///
    /// Overlapping old and new ranges walk the symmetric difference;
    /// disjoint ranges clear the old range and fill the new one.
    pub fn set_zoom_range(
        &mut self,
        grid_type: GridType,
        min_zoom: u8,
        max_zoom: Option<u8>,
    ) -> Result<(), MgrsGridError> {
        if let Some(max) = max_zoom {
            if max < min_zoom {
                return Err(MgrsGridError::InvalidZoomRange(min_zoom, max));
            }
        }
        let all_min = self.min_zoom_level();
        let all_max = self.max_zoom_level();

        let grid = &mut self.grids[grid_type as usize];
        let old_min = grid.min_zoom.max(all_min);
        let old_max = grid.max_zoom.unwrap_or(all_max).min(all_max);
        grid.min_zoom = min_zoom;
        grid.max_zoom = max_zoom;
        let enabled = grid.enabled;

        let new_min = min_zoom.max(all_min);
        let new_max = max_zoom.unwrap_or(all_max).min(all_max);

        if enabled {
            if new_min <= old_max && new_max >= old_min {
                let low = new_min.min(old_min);
                let high = new_max.max(old_max);
                for zoom in low..=high {
                    if zoom < new_min || zoom > new_max {
                        self.remove_grid(grid_type, zoom);
                    } else if zoom < old_min || zoom > old_max {
                        self.add_grid(grid_type, zoom);
                    }
                }
            } else {
                for zoom in old_min..=old_max {
                    self.remove_grid(grid_type, zoom);
                }
                for zoom in new_min..=new_max {
                    self.add_grid(grid_type, zoom);
                }
            }
        }
        debug!(
            "zoom range of {:?} now {}..={:?}",
            grid_type, min_zoom, max_zoom
        );
        Ok(())
    }

    pub fn set_min_zoom(&mut self, grid_type: GridType, min_zoom: u8) -> Result<(), MgrsGridError> {
        let max_zoom = self.grid(grid_type).max_zoom();
        self.set_zoom_range(grid_type, min_zoom, max_zoom)
    }

    pub fn set_max_zoom(
        &mut self,
        grid_type: GridType,
        max_zoom: Option<u8>,
    ) -> Result<(), MgrsGridError> {
        let min_zoom = self.grid(grid_type).min_zoom();
        self.set_zoom_range(grid_type, min_zoom, max_zoom)
    }

    /// Zoom range for drawing lines only, independent of the grid range.
    pub fn set_lines_zoom_range(
        &mut self,
        grid_type: GridType,
        min_zoom: Option<u8>,
        max_zoom: Option<u8>,
    ) -> Result<(), MgrsGridError> {
        if let (Some(min), Some(max)) = (min_zoom, max_zoom) {
            if max < min {
                return Err(MgrsGridError::InvalidZoomRange(min, max));
            }
        }
        let grid = &mut self.grids[grid_type as usize];
        grid.lines_min_zoom = min_zoom;
        grid.lines_max_zoom = max_zoom;
        Ok(())
    }

    pub fn set_style(&mut self, grid_type: GridType, style: GridStyle) {
        self.grids[grid_type as usize].style = style;
    }

    pub fn set_color(&mut self, grid_type: GridType, color: Color) {
        self.grids[grid_type as usize].style.color = color;
    }

    pub fn set_width(&mut self, grid_type: GridType, width: f64) {
        self.grids[grid_type as usize].style.width = width;
    }

    /// Style override for lines of a coarser precision within the grid.
    pub fn set_precision_style(
        &mut self,
        grid_type: GridType,
        precision: GridType,
        style: GridStyle,
    ) -> Result<(), MgrsGridError> {
        self.grids[grid_type as usize].set_precision_style(precision, style)
    }

    /// Resolved style for (grid, line precision).
    pub fn style_for(&self, grid_type: GridType, precision: GridType) -> GridStyle {
        self.grid(grid_type).style_for(precision)
    }

    fn add_grid(&mut self, grid_type: GridType, zoom: u8) -> bool {
        let Some(index) = zoom.checked_sub(MIN_ZOOM_LEVEL) else {
            return false;
        };
        match self.zoom_grids.get_mut(usize::from(index)) {
            Some(zoom_grids) => zoom_grids.add(grid_type),
            None => false,
        }
    }

    fn remove_grid(&mut self, grid_type: GridType, zoom: u8) -> bool {
        let Some(index) = zoom.checked_sub(MIN_ZOOM_LEVEL) else {
            return false;
        };
        match self.zoom_grids.get_mut(usize::from(index)) {
            Some(zoom_grids) => zoom_grids.remove(grid_type),
            None => false,
        }
    }

    /// Lines and labels of every active grid for every grid zone the tile
    /// overlaps.
    ///
    /// A tile with no overlapping zones or no active grids yields empty
    /// content, not an error.
    pub fn tile_content(&self, tile: &GridTile) -> TileContent {
        let mut content = TileContent::default();
        let Some(zoom_grids) = self.grids_at(tile.zoom()) else {
            return content;
        };
        if !zoom_grids.has_grids() {
            return content;
        }

        let bounds = tile.bounds().to_degrees();
        let zones = ZonePartition::global().grid_zones(&bounds);

        for &grid_type in zoom_grids.grid_types() {
            let grid = self.grid(grid_type);
            for zone in &zones {
                if grid.is_lines_within(tile.zoom()) {
                    for line in zone.lines(&bounds, grid_type) {
                        content.lines.push(TileLine { grid_type, line });
                    }
                }
                if let Some(labeler) = grid.labeler() {
                    if labeler.is_enabled() && labeler.is_within(tile.zoom()) {
                        content.labels.extend(labeler.labels(&bounds, grid_type, zone));
                    }
                }
            }
        }

        trace!(
            "tile zoom {} produced {} lines and {} labels across {} zones",
            tile.zoom(),
            content.lines.len(),
            content.labels.len(),
            zones.len()
        );
        content
    }
}

impl Default for Grids {
    fn default() -> Self {
        Self::new()
    }
}
