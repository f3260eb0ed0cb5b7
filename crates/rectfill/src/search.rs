//! Vertex-anchored rectangle search.
//!
//! Two maxima over unordered vertex pairs `(p, q)`:
//! - `unconstrained_max_area`: largest bounding box of any pair, no containment test.
//! - `filled_rectangle_max_area`: largest bounding box whose every cell is filled
//!   (boundary or interior) in the classification grid.
//!
//! Areas are always measured in original units, inclusive of both edges:
//! `(|Δx| + 1) · (|Δy| + 1)`.

use crate::compress::{CompressedContour, Compression, Rank2};
use crate::contour::{Contour, ContourError, Point};
use crate::grid::{flood_fill_exterior, rasterize, ClassificationGrid, SummedArea};

/// Area in original grid units.
pub type Area = u128;

/// How candidate boxes are tested against the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Containment {
    /// Summed-area table, O(1) per candidate.
    #[default]
    SummedArea,
    /// Visit every cell of the box.
    Scan,
}

/// Search configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchCfg {
    pub compression: Compression,
    pub containment: Containment,
}

/// Inclusive area of the box spanned by `p` and `q`.
#[inline]
pub fn box_area(p: Point, q: Point) -> Area {
    let w = Area::from(p.x.abs_diff(q.x)) + 1;
    let h = Area::from(p.y.abs_diff(q.y)) + 1;
    w.saturating_mul(h)
}

/// Largest bounding-box area over all vertex pairs; containment is ignored.
pub fn unconstrained_max_area(contour: &Contour) -> Area {
    max_pair_area(contour.points())
}

/// Same as `unconstrained_max_area` on a raw slice; 0 for fewer than two points.
pub fn max_pair_area(points: &[Point]) -> Area {
    let mut best = 0;
    for (i, &p) in points.iter().enumerate() {
        for &q in &points[i + 1..] {
            best = best.max(box_area(p, q));
        }
    }
    best
}

/// A vertex-anchored rectangle in original coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rectangle {
    pub min: Point,
    pub max: Point,
    pub area: Area,
}

/// Compressed contour plus its classified grid, ready for containment queries.
#[derive(Clone, Debug)]
pub struct FilledShape {
    pub compressed: CompressedContour,
    pub grid: ClassificationGrid,
}

impl FilledShape {
    /// Compress, rasterize and flood-fill `points`.
    pub fn build(points: &[Point], mode: Compression) -> Result<Self, ContourError> {
        let compressed = CompressedContour::new(points, mode)?;
        Self::from_compressed(compressed)
    }

    pub(crate) fn from_compressed(compressed: CompressedContour) -> Result<Self, ContourError> {
        let mut grid = rasterize(&compressed)?;
        flood_fill_exterior(&mut grid);
        Ok(Self { compressed, grid })
    }

    /// Largest rectangle spanned by two vertices that lies entirely in the filled region.
    pub fn largest_rectangle(&self, containment: Containment) -> Option<Rectangle> {
        let summed = match containment {
            Containment::SummedArea => Some(SummedArea::new(&self.grid)),
            Containment::Scan => None,
        };
        let is_filled = |a: Rank2, b: Rank2| match &summed {
            Some(table) => table.box_is_filled(a, b),
            None => self.grid.box_is_filled(a, b),
        };

        let pts = &self.compressed.points;
        let mut best: Option<Rectangle> = None;
        for (i, &a) in pts.iter().enumerate() {
            for &b in &pts[i + 1..] {
                let lo = Rank2 {
                    x: a.x.min(b.x),
                    y: a.y.min(b.y),
                };
                let hi = Rank2 {
                    x: a.x.max(b.x),
                    y: a.y.max(b.y),
                };
                let (Some(min), Some(max)) =
                    (self.compressed.decompress(lo), self.compressed.decompress(hi))
                else {
                    continue;
                };
                let area = box_area(min, max);
                if best.is_some_and(|r| r.area >= area) {
                    continue;
                }
                if is_filled(lo, hi) {
                    best = Some(Rectangle { min, max, area });
                }
            }
        }
        best
    }
}

/// Largest vertex-anchored rectangle inside the filled polygon.
pub fn largest_filled_rectangle(contour: &Contour, cfg: SearchCfg) -> Option<Rectangle> {
    // Validated contours are non-empty and rectilinear, so building cannot fail.
    FilledShape::build(contour.points(), cfg.compression)
        .ok()?
        .largest_rectangle(cfg.containment)
}

/// Area of `largest_filled_rectangle`, or 0 when no pair qualifies.
pub fn filled_rectangle_max_area(contour: &Contour, cfg: SearchCfg) -> Area {
    largest_filled_rectangle(contour, cfg).map_or(0, |r| r.area)
}

/// Both maxima for one vertex list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Analysis {
    pub vertices: usize,
    pub grid_width: usize,
    pub grid_height: usize,
    pub unconstrained_area: Area,
    pub filled: Option<Rectangle>,
}

impl Analysis {
    pub fn filled_area(&self) -> Area {
        self.filled.map_or(0, |r| r.area)
    }
}

/// Validate `points` and run both searches.
pub fn analyze(points: Vec<Point>, cfg: SearchCfg) -> Result<Analysis, ContourError> {
    let contour = Contour::new(points)?;
    let shape = FilledShape::build(contour.points(), cfg.compression)?;
    Ok(Analysis {
        vertices: contour.len(),
        grid_width: shape.grid.width(),
        grid_height: shape.grid.height(),
        unconstrained_area: unconstrained_max_area(&contour),
        filled: shape.largest_rectangle(cfg.containment),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn l_shape() -> Contour {
        Contour::from_xy(&[(0, 0), (6, 0), (6, 2), (2, 2), (2, 6), (0, 6)]).unwrap()
    }

    // U with a notch: x in (2, 5) is outside for y > 3.
    fn notched_u() -> Contour {
        Contour::from_xy(&[
            (0, 0),
            (10, 0),
            (10, 10),
            (5, 10),
            (5, 3),
            (2, 3),
            (2, 10),
            (0, 10),
        ])
        .unwrap()
    }

    #[test]
    fn box_area_is_inclusive() {
        assert_eq!(box_area(Point::new(0, 0), Point::new(0, 0)), 1);
        assert_eq!(box_area(Point::new(2, 5), Point::new(11, 1)), 50);
        assert_eq!(box_area(Point::new(-3, 4), Point::new(3, -4)), 63);
    }

    #[test]
    fn box_area_saturates_on_full_range() {
        let a = Point::new(i64::MIN, i64::MIN);
        let b = Point::new(i64::MAX, i64::MAX);
        assert_eq!(box_area(a, b), Area::MAX);
        assert_eq!(
            box_area(a, Point::new(i64::MAX, i64::MIN)),
            Area::from(u64::MAX) + 1
        );
    }

    #[test]
    fn square_scenario() {
        let c = Contour::from_xy(&[(0, 0), (4, 0), (4, 4), (0, 4)]).unwrap();
        assert_eq!(unconstrained_max_area(&c), 25);
        assert_eq!(filled_rectangle_max_area(&c, SearchCfg::default()), 25);
    }

    #[test]
    fn l_shape_scenario() {
        let c = l_shape();
        assert_eq!(unconstrained_max_area(&c), 49);
        for compression in [Compression::Dense, Compression::Gapped] {
            for containment in [Containment::SummedArea, Containment::Scan] {
                let cfg = SearchCfg {
                    compression,
                    containment,
                };
                assert_eq!(filled_rectangle_max_area(&c, cfg), 21);
            }
        }
    }

    #[test]
    fn l_shape_best_rectangle_is_one_arm() {
        let r = largest_filled_rectangle(&l_shape(), SearchCfg::default()).unwrap();
        assert_eq!(r.area, 21);
        assert_eq!(r.min, Point::new(0, 0));
        assert!(r.max == Point::new(6, 2) || r.max == Point::new(2, 6));
    }

    #[test]
    fn puzzle_example() {
        let c = Contour::from_xy(&[
            (7, 1),
            (11, 1),
            (11, 7),
            (9, 7),
            (9, 5),
            (2, 5),
            (2, 3),
            (7, 3),
        ])
        .unwrap();
        assert_eq!(unconstrained_max_area(&c), 50);
        assert_eq!(filled_rectangle_max_area(&c, SearchCfg::default()), 24);
        let gapped = SearchCfg {
            compression: Compression::Gapped,
            ..SearchCfg::default()
        };
        assert_eq!(filled_rectangle_max_area(&c, gapped), 24);
    }

    #[test]
    fn notch_needs_gapped_compression() {
        let c = notched_u();
        let dense = filled_rectangle_max_area(&c, SearchCfg::default());
        let gapped = filled_rectangle_max_area(
            &c,
            SearchCfg {
                compression: Compression::Gapped,
                ..SearchCfg::default()
            },
        );
        // Dense ranks place x=2 and x=5 side by side, hiding the notch.
        assert_eq!(dense, 121);
        // Best true fit is the right arm plus base: (5,0)-(10,10).
        assert_eq!(gapped, 66);
    }

    #[test]
    fn analyze_reports_both_maxima() {
        let pts = l_shape().into_points();
        let a = analyze(pts, SearchCfg::default()).unwrap();
        assert_eq!(a.vertices, 6);
        assert_eq!((a.grid_width, a.grid_height), (5, 5));
        assert_eq!(a.unconstrained_area, 49);
        assert_eq!(a.filled_area(), 21);
    }

    #[test]
    fn analyze_fails_fast_on_bad_input() {
        let pts = vec![
            Point::new(0, 0),
            Point::new(3, 4),
            Point::new(5, 5),
            Point::new(0, 5),
        ];
        assert!(matches!(
            analyze(pts, SearchCfg::default()),
            Err(ContourError::NonRectilinearEdge { index: 0, .. })
        ));
    }

    #[test]
    fn max_pair_area_of_short_lists() {
        assert_eq!(max_pair_area(&[]), 0);
        assert_eq!(max_pair_area(&[Point::new(3, 3)]), 0);
    }
}
