//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain values with no external dependencies, making them
//! usable in any context (window streaming, outline extraction, reporting).
//!
//! # Grid Conventions
//!
//! - **x** grows to the right, **y** grows upward
//! - **z** is the layer; it stays constant within one tracked grid
//! - A cell `(x, y)` covers the unit square `[x, x + 1) x [y, y + 1)`
//! - The grid ends at the `i32` range: stepping past it yields `None` and
//!   offsets saturate at the edge
//!
//! # Direction Tables
//!
//! | Direction | Step | `rotate_left` | `rotate_right` | Corner offset |
//! |-----------|------|---------------|----------------|---------------|
//! | `Up` | (0, 1) | `Left` | `Right` | (0, 0) |
//! | `Right` | (1, 0) | `Up` | `Down` | (0, 1) |
//! | `Down` | (0, -1) | `Right` | `Left` | (1, 1) |
//! | `Left` | (-1, 0) | `Down` | `Up` | (1, 0) |
//!
//! # Window Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_HALF_EXTENT` | 10 | Half width/height of a new window |
//! | `MIN_HALF_EXTENT` | 1 | Smallest configurable half extent |
//! | `MAX_HALF_EXTENT` | 100 | Largest configurable half extent |
//! | `DEFAULT_MAX_SHAPES` | 256 | Outline cap per material |
//!
//! # Examples
//!
//! ```
//! use tilemap_shapes_types::{Direction, GridCoord, Vec2};
//!
//! let origin = GridCoord::planar(0, 0);
//! assert_eq!(origin.step(Direction::Up), Some(GridCoord::planar(0, 1)));
//! assert_eq!(GridCoord::planar(i32::MAX, 0).step(Direction::Right), None);
//!
//! // Rotations are inverses of each other
//! assert_eq!(Direction::Up.rotate_left().rotate_right(), Direction::Up);
//!
//! // Corner offsets pick one sub-corner of the unit cell
//! assert_eq!(Direction::Down.corner_offset(), Vec2::new(1.0, 1.0));
//! ```

use std::fmt;

/// Default half width and half height of a tracking window (10 cells)
pub const DEFAULT_HALF_EXTENT: i32 = 10;

/// Smallest half extent accepted by layer configuration
pub const MIN_HALF_EXTENT: i32 = 1;

/// Largest half extent accepted by layer configuration
pub const MAX_HALF_EXTENT: i32 = 100;

/// Default number of outlines extracted per material
pub const DEFAULT_MAX_SHAPES: usize = 256;

/// Default step budget for a single boundary walk.
pub const DEFAULT_TRACE_STEP_LIMIT: usize = 1 << 22;

/// An integer grid position.
///
/// `z` is the layer component. It is carried through every operation but never
/// stepped by [`Direction`], so a walk stays on the layer it started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl GridCoord {
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Coordinate on layer 0
    pub const fn planar(x: i32, y: i32) -> Self {
        Self { x, y, z: 0 }
    }

    /// Translate on the grid plane, keeping the layer. Saturates at the grid edge.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            z: self.z,
        }
    }

    /// Neighbouring cell one step towards `direction`; `None` past the grid edge
    pub fn step(self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        Some(Self {
            x: self.x.checked_add(dx)?,
            y: self.y.checked_add(dy)?,
            z: self.z,
        })
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// A fractional 2D vector, used for corner offsets and bounding boxes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The four cardinal walking directions
///
/// - **Up**: towards +y
/// - **Right**: towards +x
/// - **Down**: towards -y
/// - **Left**: towards -x
///
/// Clockwise cycle (with y up): Up → Right → Down → Left → Up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Unit step `(dx, dy)`
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, 1),
            Direction::Right => (1, 0),
            Direction::Down => (0, -1),
            Direction::Left => (-1, 0),
        }
    }

    /// Rotate 90° counter-clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tilemap_shapes_types::Direction;
    ///
    /// assert_eq!(Direction::Up.rotate_left(), Direction::Left);
    /// assert_eq!(Direction::Left.rotate_left(), Direction::Down);
    /// assert_eq!(Direction::Down.rotate_left(), Direction::Right);
    /// assert_eq!(Direction::Right.rotate_left(), Direction::Up);
    /// ```
    pub const fn rotate_left(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Rotate 90° clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tilemap_shapes_types::Direction;
    ///
    /// assert_eq!(Direction::Up.rotate_right(), Direction::Right);
    /// assert_eq!(Direction::Right.rotate_right(), Direction::Down);
    /// assert_eq!(Direction::Down.rotate_right(), Direction::Left);
    /// assert_eq!(Direction::Left.rotate_right(), Direction::Up);
    /// ```
    pub const fn rotate_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Sub-corner of the unit cell where an outline vertex sits when the walk
    /// leaves that cell heading in this direction.
    pub const fn corner_offset(self) -> Vec2 {
        match self {
            Direction::Right => Vec2::new(0.0, 1.0),
            Direction::Down => Vec2::new(1.0, 1.0),
            Direction::Left => Vec2::new(1.0, 0.0),
            Direction::Up => Vec2::new(0.0, 0.0),
        }
    }
}

/// Identifier of a tile variant as supplied by the tile source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One window-diff event.
///
/// Produced by the window tracker and consumed by whatever owns the tile content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffEvent {
    /// The cell entered the active window
    Load(GridCoord),
    /// The cell left the active window
    Discard(GridCoord),
}

impl DiffEvent {
    pub fn coord(&self) -> GridCoord {
        match *self {
            DiffEvent::Load(c) | DiffEvent::Discard(c) => c,
        }
    }

    pub fn is_load(&self) -> bool {
        matches!(self, DiffEvent::Load(_))
    }
}
