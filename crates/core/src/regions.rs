//! Regions module - one outline per disjoint region of an occupancy set
//!
//! Every region has at least one bottom-left cell (filled, with empty left and
//! lower neighbours), and the outline walk records a corner on each of them.
//! Seeds are therefore visited in ascending coordinate order and a seed whose
//! cell already appears as a corner of an earlier outline is skipped.
//!
//! Output is capped at `capacity` outlines. Once the cap is reached the
//! remaining seeds are left untouched; outlines already produced are never
//! modified. Holes are not detected on their own; see [`extract_shapes`].

use std::collections::HashSet;

use crate::contour::{is_seed, walk, TraceError, TraceOptions};
use crate::occupancy::OccupancySet;
use crate::shape::Shape;
use crate::types::GridCoord;

/// Candidate seeds of `set`, sorted ascending
pub fn seeds<S: OccupancySet + ?Sized>(set: &S) -> Vec<GridCoord> {
    let mut seeds: Vec<GridCoord> = set.cells().filter(|&c| is_seed(set, c)).collect();
    seeds.sort_unstable();
    seeds
}

/// Extract up to `capacity` outlines with default trace options.
///
/// A seed lying on the boundary of a hole (its left and lower neighbours are
/// both hole cells) produces the hole's outline as a separate shape. Holes
/// without such a cell produce nothing.
///
/// An outline that cannot close within the default step budget is logged
/// and skipped.
pub fn extract_shapes<S: OccupancySet + ?Sized>(set: &S, capacity: usize) -> Vec<Shape> {
    let mut shapes = Vec::new();
    let mut extractor = ShapeExtractor::new(set, TraceOptions::default());
    while shapes.len() < capacity {
        match extractor.next() {
            Some(Ok(shape)) => shapes.push(shape),
            Some(Err(err)) => log::warn!("skipping outline: {}", err),
            None => break,
        }
    }
    finish(set, shapes, capacity)
}

/// Extract up to `capacity` outlines, stopping at the first trace error.
pub fn extract_shapes_with<S: OccupancySet + ?Sized>(
    set: &S,
    capacity: usize,
    options: TraceOptions,
) -> Result<Vec<Shape>, TraceError> {
    let shapes = ShapeExtractor::new(set, options)
        .take(capacity)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(finish(set, shapes, capacity))
}

fn finish<S: OccupancySet + ?Sized>(set: &S, shapes: Vec<Shape>, capacity: usize) -> Vec<Shape> {
    if capacity > 0 && shapes.len() == capacity {
        log::debug!(
            "shape capacity {} reached over {} cells; remaining seeds skipped",
            capacity,
            set.cell_count()
        );
    } else {
        log::debug!("extracted {} shapes", shapes.len());
    }
    shapes
}

/// Lazy outline extraction, one shape per `next`.
///
/// Seeds are collected and sorted up front; each call walks forward to the
/// next seed not yet covered by an earlier outline and traces it.
pub struct ShapeExtractor<'a, S: OccupancySet + ?Sized> {
    set: &'a S,
    options: TraceOptions,
    seeds: std::vec::IntoIter<GridCoord>,
    claimed: HashSet<GridCoord>,
}

impl<'a, S: OccupancySet + ?Sized> ShapeExtractor<'a, S> {
    pub fn new(set: &'a S, options: TraceOptions) -> Self {
        Self {
            set,
            options,
            seeds: seeds(set).into_iter(),
            claimed: HashSet::new(),
        }
    }
}

impl<S: OccupancySet + ?Sized> Iterator for ShapeExtractor<'_, S> {
    type Item = Result<Shape, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        let seed = self.seeds.find(|seed| !self.claimed.contains(seed))?;
        let result = walk(self.set, seed, self.options.max_steps);
        match &result {
            Ok(shape) => self
                .claimed
                .extend(shape.corners().iter().map(|corner| corner.position)),
            Err(_) => {
                self.claimed.insert(seed);
            }
        }
        Some(result)
    }
}
