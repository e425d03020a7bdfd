//! Bounds module - axis-aligned extents of an occupancy set

use crate::occupancy::OccupancySet;
use crate::types::{GridCoord, Vec2};

/// Bounding box of a set of cells
///
/// `min` and `max` are inclusive cell coordinates. `center` and `size` are
/// measured in grid space, where a cell spans one unit, so `center` sits on a
/// cell midpoint or a cell edge rather than on a cell's lower-left corner. Both
/// are computed in `i64`, so sets spanning the whole `i32` grid still measure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellBounds {
    pub min: GridCoord,
    pub max: GridCoord,
    pub center: Vec2,
    pub size: Vec2,
}

impl CellBounds {
    fn from_extremes(min: GridCoord, max: GridCoord) -> Self {
        Self {
            min,
            max,
            center: Vec2::new(midpoint(min.x, max.x), midpoint(min.y, max.y)),
            size: Vec2::new(span(min.x, max.x) as f32, span(min.y, max.y) as f32),
        }
    }

    /// Number of columns and rows covered
    pub fn cell_extent(&self) -> (u64, u64) {
        (span(self.min.x, self.max.x), span(self.min.y, self.max.y))
    }
}

/// Cells in `min..=max`
#[inline]
fn span(min: i32, max: i32) -> u64 {
    (i64::from(max) - i64::from(min) + 1) as u64
}

/// Grid-space midpoint of `min..=max`
#[inline]
fn midpoint(min: i32, max: i32) -> f32 {
    ((i64::from(min) + i64::from(max) + 1) as f64 / 2.0) as f32
}

/// Bounding box of `set` in one pass; `None` when the set is empty.
pub fn compute_bounds<S: OccupancySet + ?Sized>(set: &S) -> Option<CellBounds> {
    compute_bounds_of(set.cells())
}

/// Bounding box of any sequence of cells; `None` when it is empty.
pub fn compute_bounds_of(cells: impl IntoIterator<Item = GridCoord>) -> Option<CellBounds> {
    let mut cells = cells.into_iter();
    let first = cells.next()?;
    let (min, max) = cells.fold((first, first), |(mut min, mut max), c| {
        min.x = min.x.min(c.x);
        min.y = min.y.min(c.y);
        max.x = max.x.max(c.x);
        max.y = max.y.max(c.y);
        (min, max)
    });
    Some(CellBounds::from_extremes(min, max))
}
