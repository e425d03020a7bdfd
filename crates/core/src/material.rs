//! Material module - occupancy of one synonym class over a tile map
//!
//! A tile map stores the raw [`TileId`] of every loaded cell. Outline
//! extraction wants "is this cell made of material M?", where M is a whole
//! synonym class. [`MaterialView`] answers exactly that without copying the map.

use std::collections::{BTreeSet, HashMap};

use crate::occupancy::{OccupancySet, OccupancyView};
use crate::synonyms::SynonymTable;
use crate::types::{GridCoord, TileId};

/// Loaded tiles keyed by cell
pub type TileMap = HashMap<GridCoord, TileId>;

/// Cells of `tiles` whose tile is equivalent to `material`
#[derive(Debug, Clone, Copy)]
pub struct MaterialView<'a> {
    tiles: &'a TileMap,
    synonyms: &'a SynonymTable,
    material: TileId,
}

impl<'a> MaterialView<'a> {
    /// `material` may be any member of its class; it is canonicalized here.
    pub fn new(tiles: &'a TileMap, synonyms: &'a SynonymTable, material: TileId) -> Self {
        Self {
            tiles,
            synonyms,
            material: synonyms.canonical_of(material),
        }
    }

    /// Canonical representative this view filters on
    pub fn material(&self) -> TileId {
        self.material
    }

    fn matches(&self, id: TileId) -> bool {
        self.synonyms.canonical_of(id) == self.material
    }
}

impl OccupancyView for MaterialView<'_> {
    fn is_occupied(&self, coord: GridCoord) -> bool {
        self.tiles.get(&coord).is_some_and(|&id| self.matches(id))
    }
}

impl OccupancySet for MaterialView<'_> {
    fn cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.tiles
            .iter()
            .filter(|&(_, &id)| self.matches(id))
            .map(|(&coord, _)| coord)
    }
}

/// Distinct canonical materials present in `tiles`, sorted
pub fn materials(tiles: &TileMap, synonyms: &SynonymTable) -> Vec<TileId> {
    tiles
        .values()
        .map(|&id| synonyms.canonical_of(id))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
