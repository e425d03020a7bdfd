//! Shape module - closed outlines produced by the contour tracer

use crate::types::{GridCoord, Vec2};

/// One outline vertex: a cell plus the sub-corner of that cell the vertex sits on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Corner {
    pub position: GridCoord,
    pub offset: Vec2,
}

impl Corner {
    pub fn new(position: GridCoord, offset: Vec2) -> Self {
        Self { position, offset }
    }

    /// Vertex in grid space (`position + offset`)
    pub fn vertex(&self) -> Vec2 {
        Vec2::new(
            self.position.x as f32 + self.offset.x,
            self.position.y as f32 + self.offset.y,
        )
    }
}

/// A closed outline around one region
///
/// The outer boundary of a region winds clockwise (y up); a hole boundary
/// winds counter-clockwise. The last corner connects back to the first.
/// Only turning points are stored, so a rectangle has exactly four.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    corners: Vec<Corner>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn add_corner(&mut self, position: GridCoord, offset: Vec2) {
        self.corners.push(Corner::new(position, offset));
    }

    pub fn corners(&self) -> &[Corner] {
        &self.corners
    }

    pub fn len(&self) -> usize {
        self.corners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.corners.is_empty()
    }

    /// True if any corner was recorded at `position`
    pub fn contains_position(&self, position: GridCoord) -> bool {
        self.corners.iter().any(|c| c.position == position)
    }

    /// Vertices in grid space, in winding order
    pub fn vertices(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.corners.iter().map(Corner::vertex)
    }

    /// Signed area via the shoelace formula; negative for clockwise outlines
    pub fn signed_area(&self) -> f32 {
        let n = self.corners.len();
        let mut twice = 0.0;
        for i in 0..n {
            let a = self.corners[i].vertex();
            let b = self.corners[(i + 1) % n].vertex();
            twice += a.x * b.y - b.x * a.y;
        }
        twice / 2.0
    }
}
