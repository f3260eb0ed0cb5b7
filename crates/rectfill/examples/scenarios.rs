//! Print both maxima for a few hand-made contours.
//!
//! Usage:
//!   cargo run -p rectfill --example scenarios
//!   cargo run -p rectfill --example scenarios -- gapped

use rectfill::prelude::*;

fn main() {
    let compression = match std::env::args().nth(1).as_deref() {
        Some("gapped") => Compression::Gapped,
        Some("dense") | None => Compression::Dense,
        Some(other) => {
            eprintln!("usage: scenarios [dense|gapped] (got {other})");
            return;
        }
    };
    let cfg = SearchCfg {
        compression,
        ..SearchCfg::default()
    };
    let scenarios: [(&str, &[(i64, i64)]); 5] = [
        ("square", &[(0, 0), (4, 0), (4, 4), (0, 4)]),
        ("l-shape", &[(0, 0), (6, 0), (6, 2), (2, 2), (2, 6), (0, 6)]),
        (
            "notched-u",
            &[(0, 0), (10, 0), (10, 10), (5, 10), (5, 3), (2, 3), (2, 10), (0, 10)],
        ),
        ("degenerate", &[(0, 0), (0, 0), (5, 0), (5, 5), (0, 5)]),
        ("diagonal", &[(0, 0), (3, 4), (5, 5), (0, 5)]),
    ];
    for (name, coords) in scenarios {
        let pts = coords.iter().map(|&(x, y)| Point::new(x, y)).collect();
        match analyze(pts, cfg) {
            Ok(a) => println!(
                "{name}: unconstrained={} filled={} grid={}x{}",
                a.unconstrained_area,
                a.filled_area(),
                a.grid_width,
                a.grid_height
            ),
            Err(e) => println!("{name}: rejected ({e})"),
        }
    }
}
