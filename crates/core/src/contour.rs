//! Contour module - boundary walker for one region
//!
//! The walker keeps the region on its right and empty space on its left,
//! starting at a bottom-left seed cell heading [`Direction::Up`]. Each step
//! tries, in order:
//!
//! 1. **Cut the corner**: the cell ahead-and-left is filled. Move there, turn
//!    left, record a corner.
//! 2. **Straight**: the cell ahead is filled. Move there, nothing recorded.
//! 3. **Turn right** in place and record a corner.
//!
//! The walk ends when it is back on the seed heading up. Straight runs leave no
//! vertices, so every recorded corner is a real turning point.
//!
//! Because the diagonal test runs first, cells that only touch at a corner
//! are walked as one outline that pinches at the shared point.
//!
//! Cells past the edge of the `i32` grid count as empty, so regions touching
//! the edge are outlined like any other.

use thiserror::Error;

use crate::occupancy::OccupancyView;
use crate::shape::Shape;
use crate::types::{Direction, GridCoord, DEFAULT_TRACE_STEP_LIMIT};

/// Direction every walk starts and ends with
pub const START_DIRECTION: Direction = Direction::Up;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TraceError {
    /// The seed is empty, or its lower or left neighbour is filled
    #[error("{0} is not a bottom-left boundary cell")]
    InvalidSeed(GridCoord),
    /// The walk did not close within the step budget
    #[error("outline from {seed} did not close within {steps} steps")]
    StepLimit { seed: GridCoord, steps: usize },
}

/// Tuning for a single walk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceOptions {
    /// Upper bound on walker steps before giving up
    pub max_steps: usize,
}

impl Default for TraceOptions {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_TRACE_STEP_LIMIT,
        }
    }
}

/// True if `coord` is filled while its lower and left neighbours are empty.
pub fn is_seed<V: OccupancyView + ?Sized>(view: &V, coord: GridCoord) -> bool {
    view.is_occupied(coord)
        && filled(view, coord.step(Direction::Left)).is_none()
        && filled(view, coord.step(Direction::Down)).is_none()
}

/// `coord` if it exists on the grid and is occupied
#[inline]
fn filled<V: OccupancyView + ?Sized>(view: &V, coord: Option<GridCoord>) -> Option<GridCoord> {
    coord.filter(|&c| view.is_occupied(c))
}

/// Trace the outline through `seed` with default options.
pub fn trace_shape<V: OccupancyView + ?Sized>(view: &V, seed: GridCoord) -> Result<Shape, TraceError> {
    trace_shape_with(view, seed, TraceOptions::default())
}

/// Trace the outline through `seed`, validating it first.
pub fn trace_shape_with<V: OccupancyView + ?Sized>(
    view: &V,
    seed: GridCoord,
    options: TraceOptions,
) -> Result<Shape, TraceError> {
    if !is_seed(view, seed) {
        return Err(TraceError::InvalidSeed(seed));
    }
    walk(view, seed, options.max_steps)
}

/// The walker itself. Callers must have checked [`is_seed`].
pub(crate) fn walk<V: OccupancyView + ?Sized>(
    view: &V,
    seed: GridCoord,
    max_steps: usize,
) -> Result<Shape, TraceError> {
    let mut shape = Shape::new();
    let mut position = seed;
    let mut direction = START_DIRECTION;
    let mut steps = 0usize;

    loop {
        let left = direction.rotate_left();
        let ahead = position.step(direction);
        if let Some(diagonal) = filled(view, ahead.and_then(|c| c.step(left))) {
            position = diagonal;
            direction = left;
            shape.add_corner(position, direction.corner_offset());
        } else if let Some(next) = filled(view, ahead) {
            position = next;
        } else {
            direction = direction.rotate_right();
            shape.add_corner(position, direction.corner_offset());
        }

        if position == seed && direction == START_DIRECTION {
            break;
        }
        steps += 1;
        if steps >= max_steps {
            return Err(TraceError::StepLimit { seed, steps });
        }
    }

    log::trace!("traced outline from {} with {} corners", seed, shape.len());
    Ok(shape)
}
