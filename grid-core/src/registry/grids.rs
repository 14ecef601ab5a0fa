//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Grid registry with zoom level index

use crate::core::config::DEFAULT_CONFIG;
use crate::core::error::{GridError, Result};
use crate::core::grid::Grid;
use crate::core::labeler::check_buffer;
use crate::core::properties::GridProperties;
use crate::core::Config;
use crate::registry::zoom_grids::{GridId, ZoomGrids, ZoomLevelGrids};
use std::collections::BTreeMap;

/// Highest zoom level indexed on construction
pub const MAX_MAP_ZOOM_LEVEL: u8 = 20;

/// Owns all grids and keeps the active grids of every zoom level.
#[derive(Clone, Debug)]
pub struct Grids {
    default_width: Option<f64>,
    grids: Vec<Grid>,
    zoom_grids: BTreeMap<u8, ZoomGrids>,
}

fn populate(zoom: u8, grids: &[Grid]) -> ZoomGrids {
    let mut zoom_grids = ZoomGrids::new(zoom);
    for (idx, grid) in grids.iter().enumerate() {
        if grid.is_enabled() && grid.is_within(zoom) {
            zoom_grids.add_grid(GridId(idx));
        }
    }
    zoom_grids
}

impl Grids {
    /// Registry indexing zoom levels 0 to `MAX_MAP_ZOOM_LEVEL`
    pub fn new(grids: Vec<Grid>, default_width: Option<f64>) -> Grids {
        let zoom_grids = (0..=MAX_MAP_ZOOM_LEVEL)
            .map(|zoom| (zoom, populate(zoom, &grids)))
            .collect();
        Grids {
            default_width,
            grids,
            zoom_grids,
        }
    }
    /// Registry with packaged default grids
    pub fn defaults() -> Result<Grids> {
        Grids::from_config(&GridProperties::defaults()?)
    }
    pub fn default_width(&self) -> Option<f64> {
        self.default_width
    }
    pub fn len(&self) -> usize {
        self.grids.len()
    }
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
    pub fn ids(&self) -> impl Iterator<Item = GridId> {
        (0..self.grids.len()).map(GridId)
    }
    pub fn grids(&self) -> impl Iterator<Item = &Grid> {
        self.grids.iter()
    }
    pub fn grid(&self, id: GridId) -> Option<&Grid> {
        self.grids.get(id.0)
    }
    /// Mutable grid access. Call `rebuild` after changing enabled state or zoom range.
    pub fn grid_mut(&mut self, id: GridId) -> Option<&mut Grid> {
        self.grids.get_mut(id.0)
    }
    pub fn grid_id(&self, key: &str) -> Option<GridId> {
        self.grids.iter().position(|g| g.key() == key).map(GridId)
    }
    /// Lowest indexed zoom level
    pub fn min_zoom(&self) -> u8 {
        self.zoom_grids.keys().next().cloned().unwrap_or(0)
    }
    /// Highest indexed zoom level
    pub fn max_zoom(&self) -> u8 {
        self.zoom_grids
            .keys()
            .next_back()
            .cloned()
            .unwrap_or(MAX_MAP_ZOOM_LEVEL)
    }

    /// Grids of the zoom level, indexing the zoom level if required
    pub fn get_grids(&mut self, zoom: u8) -> ZoomLevelGrids<'_> {
        let grids = &self.grids;
        let zoom_grids = self.zoom_grids.entry(zoom).or_insert_with(|| {
            debug!("Indexing zoom level {}", zoom);
            populate(zoom, grids)
        });
        ZoomLevelGrids::new(zoom_grids, grids)
    }
    /// Grids of an already indexed zoom level
    pub fn zoom_grids(&self, zoom: u8) -> Option<ZoomLevelGrids<'_>> {
        self.zoom_grids
            .get(&zoom)
            .map(|zoom_grids| ZoomLevelGrids::new(zoom_grids, &self.grids))
    }

    fn grid_ref(&self, id: GridId) -> Result<&Grid> {
        self.grids.get(id.0).ok_or(GridError::UnknownGridId(id.0))
    }
    fn add_grid(&mut self, id: GridId, zoom: u8) {
        if let Some(zoom_grids) = self.zoom_grids.get_mut(&zoom) {
            zoom_grids.add_grid(id);
        }
    }
    fn remove_grid(&mut self, id: GridId, zoom: u8) {
        if let Some(zoom_grids) = self.zoom_grids.get_mut(&zoom) {
            zoom_grids.remove_grid(id);
        }
    }

    /// Enable the grid. A grid without max zoom is added up to the highest
    /// zoom level indexed at this time.
    pub fn enable(&mut self, id: GridId) -> Result<()> {
        self.set_enabled(id, true)
    }
    /// Disable the grid. A grid without max zoom is removed up to the highest
    /// zoom level indexed at this time.
    pub fn disable(&mut self, id: GridId) -> Result<()> {
        self.set_enabled(id, false)
    }
    fn set_enabled(&mut self, id: GridId, enabled: bool) -> Result<()> {
        let index_max = self.max_zoom();
        let grid = self
            .grids
            .get_mut(id.0)
            .ok_or(GridError::UnknownGridId(id.0))?;
        if grid.is_enabled() == enabled {
            return Ok(());
        }
        grid.set_enabled(enabled);
        let min_zoom = grid.min_zoom();
        let max_zoom = grid.max_zoom().unwrap_or(index_max);
        debug!(
            "{} grid '{}' for zoom levels {}-{}",
            if enabled { "Enable" } else { "Disable" },
            grid.key(),
            min_zoom,
            max_zoom
        );
        for zoom in min_zoom..=max_zoom {
            if enabled {
                self.add_grid(id, zoom);
            } else {
                self.remove_grid(id, zoom);
            }
        }
        Ok(())
    }
    pub fn enable_grids(&mut self, ids: &[GridId]) -> Result<()> {
        for id in ids {
            self.enable(*id)?;
        }
        Ok(())
    }
    pub fn disable_grids(&mut self, ids: &[GridId]) -> Result<()> {
        for id in ids {
            self.disable(*id)?;
        }
        Ok(())
    }

    /// Set the min zoom, raising a smaller max zoom to match
    pub fn set_min_zoom(&mut self, id: GridId, min_zoom: u8) -> Result<()> {
        let max_zoom = match self.grid_ref(id)?.max_zoom() {
            Some(max_zoom) if max_zoom < min_zoom => Some(min_zoom),
            max_zoom => max_zoom,
        };
        self.set_zoom_range(id, min_zoom, max_zoom)
    }
    /// Set the max zoom, lowering a larger min zoom to match
    pub fn set_max_zoom(&mut self, id: GridId, max_zoom: Option<u8>) -> Result<()> {
        let mut min_zoom = self.grid_ref(id)?.min_zoom();
        if let Some(max_zoom) = max_zoom {
            min_zoom = min_zoom.min(max_zoom);
        }
        self.set_zoom_range(id, min_zoom, max_zoom)
    }
    /// Change the zoom range of the grid. Only zoom levels outside the
    /// overlap of the old and new range are updated, so that the grid order
    /// within the overlapping zoom levels is kept.
    pub fn set_zoom_range(&mut self, id: GridId, min_zoom: u8, max_zoom: Option<u8>) -> Result<()> {
        if let Some(max) = max_zoom {
            if max < min_zoom {
                return Err(GridError::InvalidRange { min: min_zoom, max });
            }
        }
        let domain_min = self.min_zoom();
        let domain_max = self.max_zoom();

        let grid = self
            .grids
            .get_mut(id.0)
            .ok_or(GridError::UnknownGridId(id.0))?;
        let old_min = grid.min_zoom();
        let old_max = grid.max_zoom().map_or(domain_max, |max| max.min(domain_max));
        grid.set_zoom_range(min_zoom, max_zoom)?;
        debug!(
            "Grid '{}' zoom range {}-{:?}",
            grid.key(),
            min_zoom,
            max_zoom
        );
        // Disabled grids are not a member of any zoom level
        if !grid.is_enabled() {
            return Ok(());
        }

        let new_min = min_zoom.max(domain_min);
        let new_max = max_zoom.map_or(domain_max, |max| max.min(domain_max));
        let overlap_min = new_min.max(old_min);
        let overlap_max = new_max.min(old_max);

        if overlap_min <= overlap_max {
            for zoom in new_min.min(old_min)..=new_max.max(old_max) {
                if zoom >= overlap_min && zoom <= overlap_max {
                    continue;
                }
                if zoom >= new_min && zoom <= new_max {
                    self.add_grid(id, zoom);
                } else {
                    self.remove_grid(id, zoom);
                }
            }
        } else {
            for zoom in old_min..=old_max {
                self.remove_grid(id, zoom);
            }
            for zoom in new_min..=new_max {
                self.add_grid(id, zoom);
            }
        }
        Ok(())
    }

    /// Enable the labelers of all grids with a labeler
    pub fn enable_all_labelers(&mut self) {
        for grid in self.grids.iter_mut() {
            if let Some(labeler) = grid.labeler_mut() {
                labeler.set_enabled(true);
            }
        }
    }
    /// Set the label buffer of all grids with a labeler.
    /// An invalid buffer leaves every labeler unchanged.
    pub fn set_all_label_buffers(&mut self, buffer: f64) -> Result<()> {
        check_buffer(buffer)?;
        for grid in self.grids.iter_mut() {
            if let Some(labeler) = grid.labeler_mut() {
                labeler.set_buffer(buffer)?;
            }
        }
        Ok(())
    }

    /// Recompute all indexed zoom levels from the grid settings
    pub fn rebuild(&mut self) {
        let grids = &self.grids;
        for (zoom, zoom_grids) in self.zoom_grids.iter_mut() {
            *zoom_grids = populate(*zoom, grids);
        }
    }

    /// Grid settings and zoom level membership
    pub fn metadata(&self) -> serde_json::Value {
        let grids: Vec<serde_json::Value> = self
            .grids
            .iter()
            .map(|grid| {
                json!({
                    "key": grid.key(),
                    "enabled": grid.is_enabled(),
                    "minzoom": grid.min_zoom(),
                    "maxzoom": grid.max_zoom(),
                    "color": grid.color().to_string(),
                    "width": grid.width(),
                    "precision": grid.precision(),
                    "labeler": grid.labeler().map(|l| l.enabled()),
                })
            })
            .collect();
        let mut zooms = serde_json::Map::new();
        for (zoom, zoom_grids) in self.zoom_grids.iter() {
            let keys = ZoomLevelGrids::new(zoom_grids, &self.grids).keys();
            zooms.insert(zoom.to_string(), json!(keys));
        }
        json!({
            "grids": grids,
            "zooms": zooms,
        })
    }
}

impl Config<GridProperties> for Grids {
    fn from_config(properties: &GridProperties) -> Result<Self> {
        let default_width = properties.default_width();
        let mut grids = Vec::new();
        for key in properties.grid_keys() {
            let cfg = properties
                .grid(&key)
                .ok_or_else(|| GridError::UnknownGrid(key.clone()))?;
            grids.push(Grid::load(&key, &cfg, default_width)?);
        }
        info!("Registering {} grids", grids.len());
        Ok(Grids::new(grids, default_width))
    }
    fn gen_config() -> String {
        let toml = r#"# grid_overlay configuration
#
# Grids not listed in registry.grids are ignored.
# Environment variables are available as template values env.VARNAME
"#;
        format!("{}{}", toml, DEFAULT_CONFIG)
    }
    fn gen_runtime_config(&self) -> String {
        let keys: Vec<String> = self
            .grids
            .iter()
            .map(|grid| format!("\"{}\"", grid.key()))
            .collect();
        let mut config = String::from("[registry]\n");
        if let Some(width) = self.default_width {
            config.push_str(&format!("width = {:?}\n", width));
        }
        config.push_str(&format!("grids = [{}]\n", keys.join(", ")));
        for grid in &self.grids {
            config.push('\n');
            config.push_str(&grid.gen_runtime_config());
            config.push('\n');
        }
        config
    }
}
