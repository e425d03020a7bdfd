//! Occupancy module - "is this cell filled?" abstractions
//!
//! The outline algorithms never own grid storage. They read it through
//! [`OccupancyView`] (point queries) and [`OccupancySet`] (point queries plus
//! enumeration). Two storage strategies ship with the crate:
//!
//! - [`SparseOccupancy`]: hash set of coordinates, best for scattered cells
//! - [`ChunkedOccupancy`]: 16x16 bit chunks keyed by chunk coordinate, best for
//!   dense tile layers
//!
//! Plain `HashSet`/`BTreeSet` of coordinates and any `Fn(GridCoord) -> bool`
//! closure work as views too.

use std::collections::{BTreeSet, HashMap, HashSet};

use crate::types::GridCoord;

/// Point query over a grid.
pub trait OccupancyView {
    fn is_occupied(&self, coord: GridCoord) -> bool;
}

/// A view that can also enumerate its occupied cells.
pub trait OccupancySet: OccupancyView {
    /// Occupied cells in storage order (not necessarily sorted)
    fn cells(&self) -> impl Iterator<Item = GridCoord> + '_;

    /// Number of occupied cells
    fn cell_count(&self) -> usize {
        self.cells().count()
    }

    fn is_empty(&self) -> bool {
        self.cells().next().is_none()
    }
}

impl<F> OccupancyView for F
where
    F: Fn(GridCoord) -> bool,
{
    fn is_occupied(&self, coord: GridCoord) -> bool {
        self(coord)
    }
}

impl<S: std::hash::BuildHasher> OccupancyView for HashSet<GridCoord, S> {
    fn is_occupied(&self, coord: GridCoord) -> bool {
        self.contains(&coord)
    }
}

impl<S: std::hash::BuildHasher> OccupancySet for HashSet<GridCoord, S> {
    fn cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.iter().copied()
    }

    fn cell_count(&self) -> usize {
        self.len()
    }
}

impl OccupancyView for BTreeSet<GridCoord> {
    fn is_occupied(&self, coord: GridCoord) -> bool {
        self.contains(&coord)
    }
}

impl OccupancySet for BTreeSet<GridCoord> {
    fn cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.iter().copied()
    }

    fn cell_count(&self) -> usize {
        self.len()
    }
}

/// Hash-set backed storage for scattered cells
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SparseOccupancy {
    cells: HashSet<GridCoord>,
}

impl SparseOccupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a cell occupied. Returns true if it was empty before.
    pub fn insert(&mut self, coord: GridCoord) -> bool {
        self.cells.insert(coord)
    }

    /// Mark a cell empty. Returns true if it was occupied before.
    pub fn remove(&mut self, coord: GridCoord) -> bool {
        self.cells.remove(&coord)
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl FromIterator<GridCoord> for SparseOccupancy {
    fn from_iter<I: IntoIterator<Item = GridCoord>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl OccupancyView for SparseOccupancy {
    fn is_occupied(&self, coord: GridCoord) -> bool {
        self.cells.contains(&coord)
    }
}

impl OccupancySet for SparseOccupancy {
    fn cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.cells.iter().copied()
    }

    fn cell_count(&self) -> usize {
        self.cells.len()
    }
}

/// Side length of one chunk in cells
pub const CHUNK_SIZE: i32 = 16;

/// One 16x16 block; bit `x` of `rows[y]` is the cell at local `(x, y)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Chunk {
    rows: [u16; CHUNK_SIZE as usize],
}

impl Chunk {
    fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| *row == 0)
    }

    fn count(&self) -> usize {
        self.rows.iter().map(|row| row.count_ones() as usize).sum()
    }
}

/// Chunk coordinate: `(chunk_x, chunk_y, layer)`
type ChunkKey = (i32, i32, i32);

/// Split a cell into its chunk key and local `(x, y)` inside the chunk.
#[inline(always)]
fn split(coord: GridCoord) -> (ChunkKey, usize, usize) {
    let key = (
        coord.x.div_euclid(CHUNK_SIZE),
        coord.y.div_euclid(CHUNK_SIZE),
        coord.z,
    );
    let lx = coord.x.rem_euclid(CHUNK_SIZE) as usize;
    let ly = coord.y.rem_euclid(CHUNK_SIZE) as usize;
    (key, lx, ly)
}

/// Dense storage: bit rows grouped into fixed-size chunks
///
/// Chunks are allocated on first insert and dropped when their last cell is
/// removed, so memory follows the populated area rather than the bounding box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChunkedOccupancy {
    chunks: HashMap<ChunkKey, Chunk>,
    len: usize,
}

impl ChunkedOccupancy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a cell occupied. Returns true if it was empty before.
    pub fn insert(&mut self, coord: GridCoord) -> bool {
        let (key, lx, ly) = split(coord);
        let chunk = self.chunks.entry(key).or_default();
        let mask = 1u16 << lx;
        if chunk.rows[ly] & mask != 0 {
            return false;
        }
        chunk.rows[ly] |= mask;
        self.len += 1;
        true
    }

    /// Mark a cell empty. Returns true if it was occupied before.
    pub fn remove(&mut self, coord: GridCoord) -> bool {
        let (key, lx, ly) = split(coord);
        let Some(chunk) = self.chunks.get_mut(&key) else {
            return false;
        };
        let mask = 1u16 << lx;
        if chunk.rows[ly] & mask == 0 {
            return false;
        }
        chunk.rows[ly] &= !mask;
        self.len -= 1;
        if chunk.is_empty() {
            self.chunks.remove(&key);
        }
        true
    }

    pub fn clear(&mut self) {
        self.chunks.clear();
        self.len = 0;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }
}

impl FromIterator<GridCoord> for ChunkedOccupancy {
    fn from_iter<I: IntoIterator<Item = GridCoord>>(iter: I) -> Self {
        let mut occupancy = Self::new();
        for coord in iter {
            occupancy.insert(coord);
        }
        occupancy
    }
}

impl OccupancyView for ChunkedOccupancy {
    fn is_occupied(&self, coord: GridCoord) -> bool {
        let (key, lx, ly) = split(coord);
        self.chunks
            .get(&key)
            .is_some_and(|chunk| chunk.rows[ly] & (1u16 << lx) != 0)
    }
}

impl OccupancySet for ChunkedOccupancy {
    fn cells(&self) -> impl Iterator<Item = GridCoord> + '_ {
        self.chunks.iter().flat_map(|(&(cx, cy, z), chunk)| {
            chunk.rows.iter().enumerate().flat_map(move |(ly, &row)| {
                (0..CHUNK_SIZE).filter_map(move |lx| {
                    (row & (1u16 << lx) != 0).then(|| {
                        GridCoord::new(cx * CHUNK_SIZE + lx, cy * CHUNK_SIZE + ly as i32, z)
                    })
                })
            })
        })
    }

    fn cell_count(&self) -> usize {
        debug_assert_eq!(self.len, self.chunks.values().map(Chunk::count).sum::<usize>());
        self.len
    }
}
