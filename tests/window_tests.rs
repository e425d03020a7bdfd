//! Window tests - diff ordering and replay consistency

use std::collections::HashSet;

use tilemap_shapes::core::{FnSink, TileRect, WindowTracker};
use tilemap_shapes::types::{DiffEvent, GridCoord};

/// Small LCG so move sequences are reproducible
struct Lcg(u32);

impl Lcg {
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1_103_515_245).wrapping_add(12_345);
        self.0 >> 16
    }

    fn range(&mut self, lo: i32, hi: i32) -> i32 {
        lo + (self.next_u32() % (hi - lo + 1) as u32) as i32
    }
}

fn region_cells(region: TileRect) -> HashSet<GridCoord> {
    region.cells().collect()
}

/// Apply events to `loaded`, asserting each one is consistent with the set
fn replay(loaded: &mut HashSet<GridCoord>, events: &[DiffEvent]) {
    let first_load = events.iter().position(|e| e.is_load()).unwrap_or(events.len());
    assert!(
        events[first_load..].iter().all(|e| e.is_load()),
        "discard emitted after a load"
    );
    for event in events {
        let c = event.coord();
        if event.is_load() {
            assert!(loaded.insert(c), "duplicate load of {}", c);
        } else {
            assert!(loaded.remove(&c), "discard of unloaded {}", c);
        }
    }
}

#[test]
fn test_prepare_loads_full_region() {
    let mut tracker = WindowTracker::with_extents(3, 2);
    let diff = tracker.prepare_diff(GridCoord::planar(10, -5));
    assert!(diff.discarded.is_empty());
    assert_eq!(diff.loaded.len(), 24);

    let region = tracker.region();
    assert_eq!(region.min, GridCoord::planar(7, -7));
    assert_eq!((region.width, region.height), (6, 4));
    assert_eq!(
        diff.loaded.iter().copied().collect::<HashSet<_>>(),
        region_cells(region)
    );
}

#[test]
fn test_move_to_same_center_is_noop() {
    let mut tracker = WindowTracker::with_extents(4, 4);
    let center = GridCoord::planar(3, 3);
    tracker.prepare_diff(center);

    let mut events = Vec::new();
    assert_eq!(tracker.move_to(center, &mut events), 0);
    assert!(events.is_empty());
}

#[test]
fn test_diagonal_step_ordering() {
    let mut tracker = WindowTracker::with_extents(2, 2);
    tracker.prepare_diff(GridCoord::planar(0, 0));

    let diff = tracker.move_to_diff(GridCoord::planar(1, 1));
    let p = GridCoord::planar;
    assert_eq!(
        diff.discarded,
        vec![
            p(-2, -2),
            p(-2, -1),
            p(-2, 0),
            p(-2, 1),
            p(-1, -2),
            p(0, -2),
            p(1, -2),
        ]
    );
    assert_eq!(
        diff.loaded,
        vec![
            p(-1, 2),
            p(0, 2),
            p(1, 2),
            p(2, -1),
            p(2, 0),
            p(2, 1),
            p(2, 2),
        ]
    );

    // Flattened, the same diff is every discard followed by every load
    let events: Vec<DiffEvent> = diff.events().collect();
    assert_eq!(events.len(), diff.len());
    assert_eq!(events[0], DiffEvent::Discard(p(-2, -2)));
    assert!(events[..7].iter().all(|e| !e.is_load()));
    assert!(events[7..].iter().all(|e| e.is_load()));
    assert_eq!(events[7].coord(), p(-1, 2));
}

#[test]
fn test_window_is_clipped_at_grid_edge() {
    let p = GridCoord::planar;
    let mut tracker = WindowTracker::with_extents(2, 2);
    let mut loaded = HashSet::new();
    let mut events = Vec::new();

    tracker.prepare_at(p(i32::MAX - 1, 0), &mut events);
    replay(&mut loaded, &events);
    assert_eq!(loaded.len(), 12);
    assert!(loaded.iter().all(|c| c.x >= i32::MAX - 3 && c.x < i32::MAX));

    for center in [
        p(i32::MAX, i32::MAX),
        p(i32::MAX - 1, i32::MAX - 3),
        p(i32::MIN, i32::MIN),
        p(i32::MIN + 1, 5),
        p(0, 0),
        p(i32::MAX - 1, 0),
    ] {
        events.clear();
        let count = tracker.move_to(center, &mut events);
        assert_eq!(count, events.len());
        replay(&mut loaded, &events);
        assert_eq!(loaded, region_cells(tracker.region()), "center {}", center);
    }
}

#[test]
fn test_far_jump_swaps_whole_region() {
    let mut tracker = WindowTracker::with_extents(2, 3);
    tracker.prepare_diff(GridCoord::planar(0, 0));
    let diff = tracker.move_to_diff(GridCoord::planar(100, 0));
    assert_eq!(diff.discarded.len(), 24);
    assert_eq!(diff.loaded.len(), 24);
}

#[test]
fn test_disable_discards_and_enable_reloads() {
    let mut tracker = WindowTracker::with_extents(2, 2);
    let center = GridCoord::planar(5, 5);
    tracker.prepare_diff(center);

    tracker.set_enabled(false);
    assert!(!tracker.is_enabled());
    let off = tracker.move_to_diff(center);
    assert_eq!(off.discarded.len(), 16);
    assert!(off.loaded.is_empty());
    assert!(tracker.region().is_empty());

    // Moving while disabled reports nothing
    assert!(tracker.move_to_diff(GridCoord::planar(50, 50)).is_empty());

    tracker.set_enabled(true);
    let on = tracker.move_to_diff(GridCoord::planar(50, 50));
    assert!(on.discarded.is_empty());
    assert_eq!(on.loaded.len(), 16);
}

#[test]
fn test_fn_sink_counts() {
    let mut tracker = WindowTracker::with_extents(1, 1);
    tracker.prepare_diff(GridCoord::planar(0, 0));

    let mut loads = 0;
    let mut discards = 0;
    let mut sink = FnSink::new(|_| loads += 1, |_| discards += 1);
    let events = tracker.move_to(GridCoord::planar(1, 0), &mut sink);
    drop(sink);
    assert_eq!(events, 4);
    assert_eq!((loads, discards), (2, 2));
}

#[test]
fn test_random_walk_replay_matches_region() {
    let mut rng = Lcg(0x5eed);
    let mut tracker = WindowTracker::with_extents(5, 3);
    let mut loaded = HashSet::new();

    let mut events = Vec::new();
    // Start near the corner of the grid so the walk keeps crossing the edge
    let mut center = GridCoord::planar(i32::MAX - 20, i32::MIN + 20);
    tracker.prepare_at(center, &mut events);
    replay(&mut loaded, &events);
    assert_eq!(loaded, region_cells(tracker.region()));

    for step in 0..500 {
        match rng.range(0, 19) {
            0 => tracker.set_enabled(!tracker.is_enabled()),
            1 => center = center.offset(rng.range(-40, 40), rng.range(-40, 40)),
            _ => center = center.offset(rng.range(-3, 3), rng.range(-3, 3)),
        }

        events.clear();
        let count = tracker.move_to(center, &mut events);
        assert_eq!(count, events.len(), "step {}", step);
        replay(&mut loaded, &events);
        assert_eq!(loaded, region_cells(tracker.region()), "step {}", step);
    }
}
