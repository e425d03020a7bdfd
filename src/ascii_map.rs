//! ASCII tile maps
//!
//! One character per cell. `.` and space are empty; any other character is a
//! tile whose id is the character's code point. The first line is the top
//! row, so the last line sits at `y = 0` and x grows to the right:
//!
//! ```text
//! ..##    y = 2
//! ..##    y = 1
//! ####    y = 0
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::TileMap;
use crate::types::{GridCoord, TileId};

#[derive(Debug, Error)]
pub enum MapError {
    #[error("failed to read map {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("map has no rows")]
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AsciiMap {
    tiles: TileMap,
    width: i32,
    height: i32,
}

impl AsciiMap {
    /// Parse map text. Trailing empty lines are ignored.
    pub fn parse(text: &str) -> Result<Self, MapError> {
        let rows: Vec<&str> = text.trim_end_matches(['\n', '\r']).lines().collect();
        if rows.is_empty() || rows.iter().all(|row| row.is_empty()) {
            return Err(MapError::Empty);
        }

        let height = rows.len() as i32;
        let mut width = 0;
        let mut tiles = TileMap::new();
        for (row, line) in rows.iter().enumerate() {
            let y = height - 1 - row as i32;
            let mut x = 0;
            for ch in line.chars() {
                if !is_empty_cell(ch) {
                    tiles.insert(GridCoord::planar(x, y), TileId(ch as u32));
                }
                x += 1;
            }
            width = width.max(x);
        }

        Ok(Self {
            tiles,
            width,
            height,
        })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MapError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| MapError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    pub fn tiles(&self) -> &TileMap {
        &self.tiles
    }

    pub fn into_tiles(self) -> TileMap {
        self.tiles
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Middle cell, rounded down
    pub fn center(&self) -> GridCoord {
        GridCoord::planar(self.width / 2, self.height / 2)
    }
}

fn is_empty_cell(ch: char) -> bool {
    ch == '.' || ch == ' '
}

/// Character a tile id was read from, if it is a printable code point
pub fn symbol_of(id: TileId) -> Option<char> {
    char::from_u32(id.0).filter(|ch| !ch.is_control() && !is_empty_cell(*ch))
}
