//! Core tile logic - pure, deterministic, and testable
//!
//! This crate contains the window streaming and outline extraction logic.
//! It has **zero dependencies** on rendering, physics, or I/O, making it:
//!
//! - **Deterministic**: identical inputs produce identical diffs and outlines
//! - **Storage-agnostic**: algorithms read cells through [`OccupancyView`]
//! - **Bounded**: window diffs visit only changed cells; walks have a step budget
//!
//! # Module Structure
//!
//! - [`occupancy`]: occupancy traits plus sparse and chunked storage
//! - [`window`]: moving active region with ordered discard/load diffs
//! - [`contour`]: boundary walker producing one minimal outline
//! - [`regions`]: one outline per disjoint region, capped by capacity
//! - [`bounds`]: bounding box of an occupancy set
//! - [`synonyms`]: equivalence classes of tile ids
//! - [`material`]: occupancy of one synonym class over a tile map
//! - [`shape`]: outline data types
//!
//! # Example
//!
//! ```
//! use std::collections::HashSet;
//! use tilemap_shapes_core::{compute_bounds, extract_shapes, WindowTracker};
//! use tilemap_shapes_core::types::GridCoord;
//!
//! // Stream a 4x4 window
//! let mut tracker = WindowTracker::with_extents(2, 2);
//! let first = tracker.prepare_diff(GridCoord::planar(0, 0));
//! assert_eq!(first.loaded.len(), 16);
//!
//! // Step right: one column leaves, one enters
//! let diff = tracker.move_to_diff(GridCoord::planar(1, 0));
//! assert_eq!(diff.discarded.len(), 4);
//! assert_eq!(diff.loaded.len(), 4);
//!
//! // Outline a 3x2 block
//! let cells: HashSet<GridCoord> = (0..3)
//!     .flat_map(|x| (0..2).map(move |y| GridCoord::planar(x, y)))
//!     .collect();
//! let shapes = extract_shapes(&cells, 8);
//! assert_eq!(shapes.len(), 1);
//! assert_eq!(shapes[0].len(), 4);
//!
//! let bounds = compute_bounds(&cells).unwrap();
//! assert_eq!((bounds.size.x, bounds.size.y), (3.0, 2.0));
//! ```

pub mod bounds;
pub mod contour;
pub mod material;
pub mod occupancy;
pub mod regions;
pub mod shape;
pub mod synonyms;
pub mod window;

pub use tilemap_shapes_types as types;

// Re-export commonly used types for convenience
pub use bounds::{compute_bounds, compute_bounds_of, CellBounds};
pub use contour::{is_seed, trace_shape, trace_shape_with, TraceError, TraceOptions};
pub use material::{materials, MaterialView, TileMap};
pub use occupancy::{ChunkedOccupancy, OccupancySet, OccupancyView, SparseOccupancy};
pub use regions::{extract_shapes, extract_shapes_with, seeds, ShapeExtractor};
pub use shape::{Corner, Shape};
pub use synonyms::SynonymTable;
pub use window::{FnSink, TileDiff, TileRect, TileSink, Window, WindowTracker};
