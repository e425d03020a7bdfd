//! Window module - moving active region with exact load/discard diffs
//!
//! A [`Window`] is a rectangle of `2 * half_width` by `2 * half_height` cells
//! anchored at `center - extents`. The [`WindowTracker`] remembers the region
//! it last reported and, on every move, emits only the cells that changed:
//!
//! 1. **Discard** every cell of the old region that is not in the new one
//! 2. **Load** every cell of the new region that was not in the old one
//!
//! Within each phase cells are visited x outer, y inner, so identical inputs
//! always produce identical event streams. Only changed cells are visited; a
//! column that overlaps the other rectangle contributes at most two y spans.

use std::ops::Range;

use arrayvec::ArrayVec;

use crate::types::{DiffEvent, GridCoord, DEFAULT_HALF_EXTENT};

/// Axis-aligned block of cells on a single layer.
///
/// Covers `x` in `min.x..min.x + width` and `y` in `min.y..min.y + height`
/// on layer `min.z`. A zero width or height means the rectangle is empty.
/// Both ranges stop at `i32::MAX` (exclusive); cells past it are never covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileRect {
    pub min: GridCoord,
    pub width: i32,
    pub height: i32,
}

impl TileRect {
    /// The empty rectangle at the origin
    pub const EMPTY: TileRect = TileRect {
        min: GridCoord::new(0, 0, 0),
        width: 0,
        height: 0,
    };

    pub const fn new(min: GridCoord, width: i32, height: i32) -> Self {
        Self { min, width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.x_range().is_empty() || self.y_range().is_empty()
    }

    pub fn x_range(&self) -> Range<i32> {
        self.min.x..self.min.x.saturating_add(self.width.max(0))
    }

    pub fn y_range(&self) -> Range<i32> {
        self.min.y..self.min.y.saturating_add(self.height.max(0))
    }

    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.z == self.min.z
            && self.x_range().contains(&coord.x)
            && self.y_range().contains(&coord.y)
    }

    pub fn cell_count(&self) -> usize {
        self.x_range().len() * self.y_range().len()
    }

    /// Every cell, x outer, y inner
    pub fn cells(&self) -> impl Iterator<Item = GridCoord> {
        let ys = self.y_range();
        let z = self.min.z;
        let xs = if self.is_empty() {
            0..0
        } else {
            self.x_range()
        };
        xs.flat_map(move |x| ys.clone().map(move |y| GridCoord::new(x, y, z)))
    }
}

/// `a` minus `b` as at most two ascending spans
fn subtract_span(a: Range<i32>, b: Range<i32>) -> ArrayVec<Range<i32>, 2> {
    let mut spans = ArrayVec::new();
    if b.is_empty() {
        if !a.is_empty() {
            spans.push(a);
        }
        return spans;
    }
    let lower = a.start..a.end.min(b.start);
    let upper = a.start.max(b.end)..a.end;
    if !lower.is_empty() {
        spans.push(lower);
    }
    if !upper.is_empty() {
        spans.push(upper);
    }
    spans
}

/// Visit every cell of `from` that is not in `minus`, x outer, y inner.
/// Returns the number of cells visited.
fn for_each_difference(from: &TileRect, minus: &TileRect, mut visit: impl FnMut(GridCoord)) -> usize {
    if from.is_empty() {
        return 0;
    }
    let z = from.min.z;
    let overlaps_layer = !minus.is_empty() && minus.min.z == z;
    let minus_xs = minus.x_range();
    let mut count = 0;

    for x in from.x_range() {
        let spans = if overlaps_layer && minus_xs.contains(&x) {
            subtract_span(from.y_range(), minus.y_range())
        } else {
            let mut whole = ArrayVec::new();
            whole.push(from.y_range());
            whole
        };
        for span in spans {
            for y in span {
                visit(GridCoord::new(x, y, z));
                count += 1;
            }
        }
    }
    count
}

/// Receiver of window diff events.
pub trait TileSink {
    fn load(&mut self, coord: GridCoord);
    fn discard(&mut self, coord: GridCoord);
}

impl TileSink for Vec<DiffEvent> {
    fn load(&mut self, coord: GridCoord) {
        self.push(DiffEvent::Load(coord));
    }

    fn discard(&mut self, coord: GridCoord) {
        self.push(DiffEvent::Discard(coord));
    }
}

impl<T: TileSink + ?Sized> TileSink for &mut T {
    fn load(&mut self, coord: GridCoord) {
        (**self).load(coord);
    }

    fn discard(&mut self, coord: GridCoord) {
        (**self).discard(coord);
    }
}

/// Sink that forwards to a pair of closures
pub struct FnSink<L, D> {
    pub on_load: L,
    pub on_discard: D,
}

impl<L, D> FnSink<L, D>
where
    L: FnMut(GridCoord),
    D: FnMut(GridCoord),
{
    pub fn new(on_load: L, on_discard: D) -> Self {
        Self {
            on_load,
            on_discard,
        }
    }
}

impl<L, D> TileSink for FnSink<L, D>
where
    L: FnMut(GridCoord),
    D: FnMut(GridCoord),
{
    fn load(&mut self, coord: GridCoord) {
        (self.on_load)(coord);
    }

    fn discard(&mut self, coord: GridCoord) {
        (self.on_discard)(coord);
    }
}

/// The two ordered halves of one window move
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TileDiff {
    pub discarded: Vec<GridCoord>,
    pub loaded: Vec<GridCoord>,
}

impl TileDiff {
    pub fn len(&self) -> usize {
        self.discarded.len() + self.loaded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.discarded.is_empty() && self.loaded.is_empty()
    }

    /// Events in emission order: all discards, then all loads
    pub fn events(&self) -> impl Iterator<Item = DiffEvent> + '_ {
        self.discarded
            .iter()
            .map(|&c| DiffEvent::Discard(c))
            .chain(self.loaded.iter().map(|&c| DiffEvent::Load(c)))
    }
}

impl TileSink for TileDiff {
    fn load(&mut self, coord: GridCoord) {
        self.loaded.push(coord);
    }

    fn discard(&mut self, coord: GridCoord) {
        self.discarded.push(coord);
    }
}

/// Window configuration plus its current center
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub center: GridCoord,
    pub half_width: i32,
    pub half_height: i32,
    pub enabled: bool,
}

impl Window {
    pub fn new(half_width: i32, half_height: i32) -> Self {
        Self {
            center: GridCoord::default(),
            half_width,
            half_height,
            enabled: true,
        }
    }

    /// `(half_width, half_height)`
    pub fn extents(&self) -> (i32, i32) {
        (self.half_width, self.half_height)
    }

    /// Cells covered while enabled
    pub fn active_cell_count(&self) -> usize {
        (self.half_width.max(0) as usize) * (self.half_height.max(0) as usize) * 4
    }

    /// Region covered at the current center; empty when disabled.
    ///
    /// Near the edge of the grid the region is clipped to the cells that exist,
    /// so it may hold fewer than [`active_cell_count`](Self::active_cell_count).
    pub fn region(&self) -> TileRect {
        let (x, width) = clipped_span(self.center.x, self.half_width);
        let (y, height) = clipped_span(self.center.y, self.half_height);
        let min = GridCoord::new(x, y, self.center.z);
        if self.enabled {
            TileRect::new(min, width, height)
        } else {
            TileRect::new(min, 0, 0)
        }
    }
}

/// `center - half..center + half` clipped to the `i32` grid, as `(start, len)`
fn clipped_span(center: i32, half: i32) -> (i32, i32) {
    let center = i64::from(center);
    let half = i64::from(half.max(0));
    let start = (center - half).max(i64::from(i32::MIN));
    let end = (center + half).min(i64::from(i32::MAX));
    (start as i32, (end - start).min(i64::from(i32::MAX)) as i32)
}

impl Default for Window {
    fn default() -> Self {
        Self::new(DEFAULT_HALF_EXTENT, DEFAULT_HALF_EXTENT)
    }
}

/// Tracks the reported region of a moving [`Window`].
///
/// The tracker keeps no record of individual cells; the last reported
/// rectangle is the only state, so memory stays constant however far the
/// window travels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowTracker {
    window: Window,
    region: TileRect,
}

impl WindowTracker {
    pub fn new(window: Window) -> Self {
        Self {
            window,
            region: TileRect::EMPTY,
        }
    }

    pub fn with_extents(half_width: i32, half_height: i32) -> Self {
        Self::new(Window::new(half_width, half_height))
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn center(&self) -> GridCoord {
        self.window.center
    }

    /// Region as of the last `prepare_at`/`move_to`
    pub fn region(&self) -> TileRect {
        self.region
    }

    pub fn is_enabled(&self) -> bool {
        self.window.enabled
    }

    /// Record the enabled flag. The region follows on the next move.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.window.enabled = enabled;
    }

    /// First-time population: load every cell of the region around `center`.
    ///
    /// Assumes nothing was loaded before; any previously reported region is
    /// forgotten without discards.
    pub fn prepare_at(&mut self, center: GridCoord, sink: &mut impl TileSink) -> usize {
        self.window.center = center;
        self.region = self.window.region();
        let count = for_each_difference(&self.region, &TileRect::EMPTY, |c| sink.load(c));
        log::debug!("window prepared at {} ({} loaded)", center, count);
        count
    }

    /// Move the window and report the difference. Returns the number of events.
    pub fn move_to(&mut self, center: GridCoord, sink: &mut impl TileSink) -> usize {
        let old = self.region;
        self.window.center = center;
        self.region = self.window.region();
        if old == self.region {
            return 0;
        }

        let discarded = for_each_difference(&old, &self.region, |c| sink.discard(c));
        let loaded = for_each_difference(&self.region, &old, |c| sink.load(c));
        log::debug!(
            "window moved to {} ({} discarded, {} loaded)",
            center,
            discarded,
            loaded
        );
        discarded + loaded
    }

    /// [`prepare_at`](Self::prepare_at) collecting the loads
    pub fn prepare_diff(&mut self, center: GridCoord) -> TileDiff {
        let mut diff = TileDiff::default();
        self.prepare_at(center, &mut diff);
        diff
    }

    /// [`move_to`](Self::move_to) collecting both phases
    pub fn move_to_diff(&mut self, center: GridCoord) -> TileDiff {
        let mut diff = TileDiff::default();
        self.move_to(center, &mut diff);
        diff
    }
}

impl Default for WindowTracker {
    fn default() -> Self {
        Self::new(Window::default())
    }
}
