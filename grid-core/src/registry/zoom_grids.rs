//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

use crate::core::grid::Grid;
use std::slice;

/// Registry handle of a grid
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct GridId(pub(crate) usize);

impl GridId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Grids active at one zoom level, in insertion order
#[derive(PartialEq, Clone, Debug)]
pub struct ZoomGrids {
    zoom: u8,
    grids: Vec<GridId>,
}

impl ZoomGrids {
    pub fn new(zoom: u8) -> ZoomGrids {
        ZoomGrids {
            zoom,
            grids: Vec::new(),
        }
    }
    pub fn zoom(&self) -> u8 {
        self.zoom
    }
    /// Append the grid unless already present. Returns true if added.
    pub fn add_grid(&mut self, grid: GridId) -> bool {
        if self.contains(grid) {
            false
        } else {
            self.grids.push(grid);
            true
        }
    }
    /// Returns true if the grid was a member
    pub fn remove_grid(&mut self, grid: GridId) -> bool {
        match self.position(grid) {
            Some(pos) => {
                self.grids.remove(pos);
                true
            }
            None => false,
        }
    }
    pub fn contains(&self, grid: GridId) -> bool {
        self.grids.contains(&grid)
    }
    pub fn position(&self, grid: GridId) -> Option<usize> {
        self.grids.iter().position(|id| *id == grid)
    }
    pub fn iter(&self) -> impl Iterator<Item = GridId> + '_ {
        self.grids.iter().cloned()
    }
    pub fn count(&self) -> usize {
        self.grids.len()
    }
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }
}

impl<'a> IntoIterator for &'a ZoomGrids {
    type Item = &'a GridId;
    type IntoIter = slice::Iter<'a, GridId>;

    fn into_iter(self) -> Self::IntoIter {
        self.grids.iter()
    }
}

/// Zoom level view resolving grid ids to the grids of the registry
#[derive(Clone, Copy, Debug)]
pub struct ZoomLevelGrids<'a> {
    zoom_grids: &'a ZoomGrids,
    grids: &'a [Grid],
}

impl<'a> ZoomLevelGrids<'a> {
    pub(crate) fn new(zoom_grids: &'a ZoomGrids, grids: &'a [Grid]) -> ZoomLevelGrids<'a> {
        ZoomLevelGrids { zoom_grids, grids }
    }
    pub fn zoom(&self) -> u8 {
        self.zoom_grids.zoom()
    }
    pub fn ids(&self) -> &'a ZoomGrids {
        self.zoom_grids
    }
    /// Grids in insertion order. Ids are issued by the registry owning `grids`.
    pub fn iter(&self) -> impl Iterator<Item = &'a Grid> + 'a {
        let grids = self.grids;
        self.zoom_grids.grids.iter().map(move |id| &grids[id.0])
    }
    pub fn count(&self) -> usize {
        self.zoom_grids.count()
    }
    pub fn is_empty(&self) -> bool {
        self.zoom_grids.is_empty()
    }
    pub fn contains(&self, grid: GridId) -> bool {
        self.zoom_grids.contains(grid)
    }
    /// Grid keys in insertion order
    pub fn keys(&self) -> Vec<&'a str> {
        self.iter().map(|grid| grid.key()).collect()
    }
}

#[test]
fn test_add_remove() {
    let mut zoom_grids = ZoomGrids::new(4);
    assert_eq!(zoom_grids.zoom(), 4);
    assert!(zoom_grids.is_empty());
    assert!(zoom_grids.add_grid(GridId(2)));
    assert!(zoom_grids.add_grid(GridId(0)));
    assert!(!zoom_grids.add_grid(GridId(2)));
    assert_eq!(zoom_grids.count(), 2);
    assert_eq!(zoom_grids.iter().collect::<Vec<_>>(), vec![GridId(2), GridId(0)]);
    assert_eq!(zoom_grids.position(GridId(0)), Some(1));

    assert!(!zoom_grids.remove_grid(GridId(1)));
    assert!(zoom_grids.remove_grid(GridId(2)));
    assert!(!zoom_grids.contains(GridId(2)));
    assert_eq!(zoom_grids.count(), 1);
    // restartable
    assert_eq!((&zoom_grids).into_iter().count(), 1);
    assert_eq!((&zoom_grids).into_iter().count(), 1);
}

#[test]
fn test_zoom_level_view() {
    let grids = vec![Grid::new("a"), Grid::new("b"), Grid::new("c")];
    let mut zoom_grids = ZoomGrids::new(0);
    zoom_grids.add_grid(GridId(2));
    zoom_grids.add_grid(GridId(0));
    let view = ZoomLevelGrids::new(&zoom_grids, &grids);
    assert_eq!(view.zoom(), 0);
    assert_eq!(view.count(), 2);
    assert_eq!(view.keys(), vec!["c", "a"]);
    assert_eq!(view.iter().count(), view.count());
    assert!(view.contains(GridId(0)));
    assert!(!view.contains(GridId(1)));
}
