//! Tile source - where loaded tiles come from
//!
//! The layer never decides which tiles exist. When the window loads a cell it
//! asks its [`TileSource`]; `None` means the cell is empty and nothing is
//! stored.

use crate::core::TileMap;
use crate::types::{GridCoord, TileId};

pub trait TileSource {
    fn tile_at(&self, coord: GridCoord) -> Option<TileId>;
}

impl TileSource for TileMap {
    fn tile_at(&self, coord: GridCoord) -> Option<TileId> {
        self.get(&coord).copied()
    }
}

impl<F> TileSource for F
where
    F: Fn(GridCoord) -> Option<TileId>,
{
    fn tile_at(&self, coord: GridCoord) -> Option<TileId> {
        self(coord)
    }
}
