//! Property tests over random bar-chart contours.

use std::collections::VecDeque;

use proptest::prelude::*;

use crate::compress::{AxisMap, CompressedContour, Compression};
use crate::contour::Contour;
use crate::grid::{flood_fill_exterior, rasterize, Cell, ClassificationGrid};
use crate::rand::{draw_histogram_contour, HistogramCfg, ReplayToken};
use crate::search::{
    filled_rectangle_max_area, unconstrained_max_area, Containment, FilledShape, SearchCfg,
};

fn small_contour(seed: u64, columns: usize) -> Contour {
    let cfg = HistogramCfg {
        columns,
        max_step: 4,
        max_height: 6,
        max_offset: 20,
    };
    draw_histogram_contour(cfg, ReplayToken { seed, index: 0 }).unwrap()
}

fn cfg(compression: Compression, containment: Containment) -> SearchCfg {
    SearchCfg {
        compression,
        containment,
    }
}

/// Dense map over every integer in the contour's range: one rank per original cell.
fn full_resolution_area(contour: &Contour) -> u128 {
    let pts = contour.points();
    let span = |f: fn(&crate::contour::Point) -> i64| {
        let lo = pts.iter().map(f).min().unwrap();
        let hi = pts.iter().map(f).max().unwrap();
        AxisMap::from_values(lo..=hi, Compression::Dense)
    };
    let cc = CompressedContour::with_axes(pts, span(|p| p.x), span(|p| p.y));
    FilledShape::from_compressed(cc)
        .unwrap()
        .largest_rectangle(Containment::Scan)
        .map_or(0, |r| r.area)
}

/// Breadth-first variant of the exterior fill, for order-independence checks.
fn fill_bfs(grid: &mut ClassificationGrid) {
    let (w, h) = (grid.width(), grid.height());
    let mut queue = VecDeque::from([(0usize, 0usize)]);
    grid.set(0, 0, Cell::Exterior);
    while let Some((x, y)) = queue.pop_front() {
        let next = [
            (x.wrapping_sub(1), y),
            (x + 1, y),
            (x, y.wrapping_sub(1)),
            (x, y + 1),
        ];
        for (nx, ny) in next {
            if nx < w && ny < h && grid.get(nx, ny) == Cell::Interior {
                grid.set(nx, ny, Cell::Exterior);
                queue.push_back((nx, ny));
            }
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn axis_map_round_trips(values in prop::collection::vec(any::<i64>(), 1..60), gapped in any::<bool>()) {
        let mode = if gapped { Compression::Gapped } else { Compression::Dense };
        let m = AxisMap::from_values(values.iter().copied(), mode);
        let mut last = 0usize;
        for &v in &values {
            let r = m.rank(v).unwrap();
            prop_assert!(r >= 1 && r <= m.max_rank());
            prop_assert_eq!(m.value(r), Some(v));
        }
        for (v, r) in m.iter() {
            prop_assert!(r > last);
            prop_assert_eq!(m.rank(v), Some(r));
            last = r;
        }
    }

    #[test]
    fn fill_is_idempotent_and_keeps_boundary(seed in any::<u64>(), columns in 1usize..10, gapped in any::<bool>()) {
        let mode = if gapped { Compression::Gapped } else { Compression::Dense };
        let contour = small_contour(seed, columns);
        let cc = CompressedContour::new(contour.points(), mode).unwrap();
        let raster = rasterize(&cc).unwrap();
        let mut once = raster.clone();
        flood_fill_exterior(&mut once);
        for (before, after) in raster.cells().iter().zip(once.cells()) {
            prop_assert_eq!(*before == Cell::Boundary, *after == Cell::Boundary);
        }
        let mut twice = once.clone();
        prop_assert_eq!(flood_fill_exterior(&mut twice), 0);
        prop_assert_eq!(&once, &twice);

        let mut bfs = raster.clone();
        fill_bfs(&mut bfs);
        prop_assert_eq!(&once, &bfs);
    }

    #[test]
    fn unconstrained_dominates_filled(seed in any::<u64>(), columns in 1usize..10) {
        let contour = small_contour(seed, columns);
        let all = unconstrained_max_area(&contour);
        for mode in [Compression::Dense, Compression::Gapped] {
            prop_assert!(all >= filled_rectangle_max_area(&contour, cfg(mode, Containment::SummedArea)));
        }
    }

    #[test]
    fn containment_strategies_agree(seed in any::<u64>(), columns in 1usize..10, gapped in any::<bool>()) {
        let mode = if gapped { Compression::Gapped } else { Compression::Dense };
        let contour = small_contour(seed, columns);
        prop_assert_eq!(
            filled_rectangle_max_area(&contour, cfg(mode, Containment::SummedArea)),
            filled_rectangle_max_area(&contour, cfg(mode, Containment::Scan))
        );
    }

    #[test]
    fn gapped_matches_full_resolution(seed in any::<u64>(), columns in 1usize..8) {
        let contour = small_contour(seed, columns);
        let gapped = filled_rectangle_max_area(&contour, cfg(Compression::Gapped, Containment::SummedArea));
        prop_assert_eq!(gapped, full_resolution_area(&contour));
        let dense = filled_rectangle_max_area(&contour, cfg(Compression::Dense, Containment::SummedArea));
        prop_assert!(dense >= gapped);
    }
}
