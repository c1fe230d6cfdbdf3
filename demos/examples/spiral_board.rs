// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lay out a board of sticky notes along the golden-angle spiral.
//!
//! Notes are "measured" with a crude fixed-width text model, placed with a
//! grid-backed [`Board`], then a late note is appended and the board is
//! resized. Set `RUST_LOG=understory_spiral=trace` to see per-note events.
//!
//! Run:
//! - `cargo run -p understory_spiral_demos --example spiral_board`

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use understory_spiral::{Board, Canvas, PlacedSet, Placement, PlacementConfig, SpiralEngine};

const CHAR_WIDTH: f64 = 7.5;
const LINE_HEIGHT: f64 = 18.0;
const WRAP_COLUMNS: usize = 24;
const NOTE_PADDING: f64 = 12.0;

/// Rough note size: wrap at a fixed column count, then add padding.
fn measure(text: &str) -> Size {
    let chars = text.chars().count().max(1);
    let columns = chars.min(WRAP_COLUMNS);
    let lines = chars.div_ceil(WRAP_COLUMNS);
    Size::new(
        columns as f64 * CHAR_WIDTH + 2.0 * NOTE_PADDING,
        lines as f64 * LINE_HEIGHT + 2.0 * NOTE_PADDING,
    )
}

fn print_placements(first: usize, texts: &[&str], placements: &[Placement]) {
    for (i, (text, p)) in texts.iter().zip(placements).enumerate() {
        let i = first + i;
        println!(
            "  #{i:<2} ({:>7.1}, {:>7.1}) tilt {:>5.2}° attempts {:>4}{}  {text}",
            p.x,
            p.y,
            p.rotation_degrees,
            p.attempts,
            if p.forced { " forced" } else { "" },
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut texts = vec![
        "what if the board grew outward",
        "coffee",
        "ask about the deadline",
        "golden angle spiral",
        "remember to water the plants on friday",
        "idea",
        "refactor the measuring step",
        "notes should never overlap",
        "call back",
        "weekend hike?",
        "buy stamps",
        "the first note sits dead center",
    ];

    let engine = match SpiralEngine::new(PlacementConfig {
        min_distance: 12.0,
        ..PlacementConfig::default()
    }) {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("invalid config: {err}");
            return;
        }
    };

    let canvas = Canvas::new(1024.0, 768.0);
    let mut board = match Board::with_placed_set(engine, canvas, PlacedSet::with_grid(96.0)) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("invalid canvas: {err}");
            return;
        }
    };

    let sizes: Vec<Size> = texts.iter().copied().map(measure).collect();
    if let Err(err) = board.layout_all(sizes) {
        eprintln!("layout failed: {err}");
        return;
    }
    println!("Board {}x{}:", canvas.width, canvas.height);
    print_placements(0, &texts, board.placements());

    let late = "one more thing";
    match board.append(measure(late)) {
        Ok(p) => {
            texts.push(late);
            println!("\nAppended without moving the others:");
            print_placements(texts.len() - 1, &[late], &[p]);
        }
        Err(err) => eprintln!("append failed: {err}"),
    }

    let small = Canvas::new(480.0, 360.0);
    match board.resize(small) {
        Ok(placements) => {
            println!("\nResized to {}x{}:", small.width, small.height);
            print_placements(0, &texts, placements);
        }
        Err(err) => eprintln!("resize failed: {err}"),
    }
    println!(
        "\n{} of {} notes needed the fallback position",
        board.forced_count(),
        board.len()
    );
}
