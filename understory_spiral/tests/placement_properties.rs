// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for spiral placement.
//!
//! These hold for any board honoring the size contract:
//!
//! 1. The first note is exactly centered.
//! 2. Unforced placements stay inside the padded canvas.
//! 3. Unforced placements clear every earlier note's padded rect.
//! 4. Placement is deterministic, bit for bit.
//! 5. Every call terminates within the attempt budget.
//! 6. Rotation never exceeds the configured amplitude.
//! 7. Occupancy backends do not change the result.

use kurbo::Size;
use proptest::prelude::*;
use understory_spiral::{
    Board, Canvas, Placement, PlacedSet, PlacementConfig, SpiralEngine, padded_overlap,
};

// ── Helpers ─────────────────────────────────────────────────────────────

fn canvas_strategy() -> impl Strategy<Value = Canvas> {
    (400.0_f64..=1600.0, 300.0_f64..=1200.0).prop_map(|(w, h)| Canvas::new(w, h))
}

fn size_strategy() -> impl Strategy<Value = Size> {
    (20.0_f64..=120.0, 15.0_f64..=60.0).prop_map(|(w, h)| Size::new(w, h))
}

fn sizes_strategy(max_len: usize) -> impl Strategy<Value = Vec<Size>> {
    proptest::collection::vec(size_strategy(), 1..=max_len)
}

fn bits(p: &Placement) -> (u64, u64, u64, bool, u32) {
    (
        p.x.to_bits(),
        p.y.to_bits(),
        p.rotation_degrees.to_bits(),
        p.forced,
        p.attempts,
    )
}

fn layout(engine: &SpiralEngine, canvas: Canvas, sizes: &[Size]) -> Vec<Placement> {
    let mut board = Board::new(engine.clone(), canvas).unwrap();
    board.layout_all(sizes.iter().copied()).unwrap().to_vec()
}

// ═════════════════════════════════════════════════════════════════════════
// 1. First note is centered
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn first_note_is_centered(
        w in 1.0_f64..=4000.0,
        h in 1.0_f64..=4000.0,
        size in size_strategy(),
    ) {
        let canvas = Canvas::new(w, h);
        let p = SpiralEngine::default().place_first(canvas, size).unwrap();
        prop_assert_eq!(p.x, w / 2.0 - size.width / 2.0);
        prop_assert_eq!(p.y, h / 2.0 - size.height / 2.0);
        prop_assert_eq!(p.rotation_degrees, 0.0);
        prop_assert!(!p.forced);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2 + 3. Unforced placements are in bounds and clear earlier notes
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn unforced_placements_do_not_overlap(
        canvas in canvas_strategy(),
        sizes in sizes_strategy(30),
        min_distance in 0.0_f64..=25.0,
    ) {
        let engine = SpiralEngine::new(PlacementConfig {
            min_distance,
            ..PlacementConfig::default()
        })
        .unwrap();
        let placements = layout(&engine, canvas, &sizes);
        let boxes: Vec<_> = placements
            .iter()
            .zip(&sizes)
            .map(|(p, s)| p.to_box(*s))
            .collect();

        for (j, p) in placements.iter().enumerate().skip(1) {
            if p.forced {
                continue;
            }
            let b = boxes[j];
            let padding = engine.config().padding;
            prop_assert!(b.x >= padding && b.y >= padding, "note {} left the canvas", j);
            prop_assert!(
                b.x + b.width <= canvas.width - padding
                    && b.y + b.height <= canvas.height - padding,
                "note {} left the canvas",
                j
            );
            for (i, earlier) in boxes[..j].iter().enumerate() {
                prop_assert!(
                    !padded_overlap(b.padded(min_distance), earlier.padded(min_distance)),
                    "note {} overlaps note {}",
                    j,
                    i
                );
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn layout_is_deterministic(
        canvas in canvas_strategy(),
        sizes in sizes_strategy(20),
    ) {
        let engine = SpiralEngine::default();
        let a: Vec<_> = layout(&engine, canvas, &sizes).iter().map(bits).collect();
        let b: Vec<_> = layout(&engine, canvas, &sizes).iter().map(bits).collect();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn place_next_is_pure(
        canvas in canvas_strategy(),
        sizes in sizes_strategy(10),
        next in size_strategy(),
    ) {
        let engine = SpiralEngine::default();
        let placements = layout(&engine, canvas, &sizes);
        let placed: PlacedSet = placements
            .iter()
            .zip(&sizes)
            .map(|(p, s)| p.to_box(*s))
            .collect();

        let index = sizes.len();
        let a = engine.place_next(&placed, canvas, index, next).unwrap();
        let b = engine.place_next(&placed, canvas, index, next).unwrap();
        prop_assert_eq!(bits(&a), bits(&b));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5 + 6. Bounded termination and bounded tilt
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn attempts_stay_within_budget(
        max_attempts in 1_u32..=300,
        amplitude in 0.0_f64..=5.0,
        sizes in sizes_strategy(40),
        side in 150.0_f64..=500.0,
    ) {
        let engine = SpiralEngine::new(PlacementConfig {
            max_attempts,
            rotation_amplitude: amplitude,
            ..PlacementConfig::default()
        })
        .unwrap();
        for p in layout(&engine, Canvas::new(side, side), &sizes) {
            prop_assert!(p.attempts <= max_attempts);
            prop_assert!(p.rotation_degrees.abs() <= amplitude);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. Occupancy backends agree
// ═════════════════════════════════════════════════════════════════════════

#[cfg(feature = "occupancy_grid")]
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn grid_and_flat_backends_agree(
        canvas in canvas_strategy(),
        sizes in sizes_strategy(40),
        cell in 16.0_f64..=256.0,
    ) {
        let engine = SpiralEngine::default();
        let flat = layout(&engine, canvas, &sizes);

        let mut grid = Board::with_placed_set(engine, canvas, PlacedSet::with_grid(cell)).unwrap();
        let grid = grid.layout_all(sizes.iter().copied()).unwrap();

        let flat: Vec<_> = flat.iter().map(bits).collect();
        let grid: Vec<_> = grid.iter().map(bits).collect();
        prop_assert_eq!(flat, grid);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// Scenarios
// ═════════════════════════════════════════════════════════════════════════

#[test]
fn second_note_avoids_the_first_on_800x600() {
    let engine = SpiralEngine::new(PlacementConfig {
        min_distance: 20.0,
        ..PlacementConfig::default()
    })
    .unwrap();
    let canvas = Canvas::new(800.0, 600.0);
    let size = Size::new(100.0, 40.0);

    let first = engine.place_first(canvas, size).unwrap();
    assert_eq!((first.x, first.y), (350.0, 280.0));

    let mut placed = PlacedSet::new();
    placed.push(first.to_box(size));
    let second = engine.place_next(&placed, canvas, 1, size).unwrap();

    assert!(!second.forced);
    let b = second.to_box(size);
    assert!(!padded_overlap(b.padded(20.0), first.to_box(size).padded(20.0)));
    assert!(b.x >= 10.0 && b.x + b.width <= 790.0);
    assert!(b.y >= 10.0 && b.y + b.height <= 590.0);
}

#[test]
fn two_hundred_notes_on_a_small_canvas_fall_back_without_hanging() {
    let engine = SpiralEngine::new(PlacementConfig {
        min_distance: 15.0,
        ..PlacementConfig::default()
    })
    .unwrap();
    let sizes = vec![Size::new(60.0, 30.0); 200];
    let placements = layout(&engine, Canvas::new(400.0, 400.0), &sizes);

    assert_eq!(placements.len(), 200);
    let forced = placements.iter().filter(|p| p.forced).count();
    assert!(forced > 0, "expected a crowded board to need fallbacks");
    assert!(forced < 200, "expected some notes to fit");
}

#[test]
fn reordering_changes_the_layout() {
    let engine = SpiralEngine::default();
    let canvas = Canvas::new(900.0, 700.0);
    let sizes = [
        Size::new(120.0, 40.0),
        Size::new(60.0, 60.0),
        Size::new(90.0, 30.0),
        Size::new(140.0, 50.0),
    ];
    let mut reversed = sizes;
    reversed.reverse();

    let forward = layout(&engine, canvas, &sizes);
    let backward = layout(&engine, canvas, &reversed);
    assert_ne!(forward, backward);
}
