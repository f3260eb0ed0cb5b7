//! Closed rectilinear contours on the integer grid.
//!
//! Purpose
//! - Hold the ordered corner list of an axis-aligned polygon and validate it once,
//!   up front, so every later stage can rely on the invariants.
//!
//! Invariants of a `Contour`
//! - At least four vertices; the last vertex connects back to the first.
//! - Every edge (including the closing one) changes exactly one coordinate.
//! - No two edges touch except adjacent edges at their shared vertex.
//!
//! Code cross-refs: `compress::CompressedContour`, `grid::rasterize`, `search`.

use std::fmt;

use nalgebra::Vector2;

/// Integer grid point `(x, y)`.
pub type Point = Vector2<i64>;

/// Minimum number of corners of a closed rectilinear polygon.
pub const MIN_VERTICES: usize = 4;

/// Validation failures for a vertex list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContourError {
    /// No points supplied.
    EmptyContour,
    /// Edge `index` (from vertex `index` to its successor) changes both coordinates.
    NonRectilinearEdge { index: usize, from: Point, to: Point },
    /// Edge `index` connects a vertex to itself.
    DegenerateEdge { index: usize, at: Point },
    /// Fewer than `MIN_VERTICES` corners.
    TooFewVertices { count: usize },
    /// Edges `first` and `second` cross, touch, or overlap.
    SelfIntersecting { first: usize, second: usize },
}

impl fmt::Display for ContourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContourError::EmptyContour => write!(f, "contour has no points"),
            ContourError::NonRectilinearEdge { index, from, to } => write!(
                f,
                "edge {} from ({},{}) to ({},{}) is not axis-aligned",
                index, from.x, from.y, to.x, to.y
            ),
            ContourError::DegenerateEdge { index, at } => {
                write!(f, "edge {} is degenerate (both ends at ({},{}))", index, at.x, at.y)
            }
            ContourError::TooFewVertices { count } => write!(
                f,
                "contour has {count} vertices, a closed rectilinear polygon needs at least {MIN_VERTICES}"
            ),
            ContourError::SelfIntersecting { first, second } => {
                write!(f, "edges {first} and {second} intersect")
            }
        }
    }
}

impl std::error::Error for ContourError {}

/// Axis-aligned edge between two consecutive vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub from: Point,
    pub to: Point,
}

impl Edge {
    /// Check that the edge is axis-aligned and has distinct endpoints.
    pub fn check(&self, index: usize) -> Result<(), ContourError> {
        match (self.from.x == self.to.x, self.from.y == self.to.y) {
            (true, true) => Err(ContourError::DegenerateEdge {
                index,
                at: self.from,
            }),
            (false, false) => Err(ContourError::NonRectilinearEdge {
                index,
                from: self.from,
                to: self.to,
            }),
            _ => Ok(()),
        }
    }

    /// Inclusive bounds `(min, max)` of the edge, which for an axis-aligned
    /// segment is the segment itself.
    #[inline]
    pub fn bounds(&self) -> (Point, Point) {
        (min_corner(self.from, self.to), max_corner(self.from, self.to))
    }
}

#[inline]
fn min_corner(a: Point, b: Point) -> Point {
    Point::new(a.x.min(b.x), a.y.min(b.y))
}

#[inline]
fn max_corner(a: Point, b: Point) -> Point {
    Point::new(a.x.max(b.x), a.y.max(b.y))
}

/// Edges `i → i+1 (mod n)` of a closed vertex list.
pub fn edges(points: &[Point]) -> impl Iterator<Item = Edge> + '_ {
    let n = points.len();
    (0..n).map(move |i| Edge {
        from: points[i],
        to: points[(i + 1) % n],
    })
}

/// A validated closed rectilinear polygon.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contour {
    points: Vec<Point>,
}

impl Contour {
    /// Validate `points` and wrap them.
    ///
    /// Checks run in order: emptiness, each edge in contour order, vertex count,
    /// then pairwise edge intersection.
    pub fn new(points: Vec<Point>) -> Result<Self, ContourError> {
        if points.is_empty() {
            return Err(ContourError::EmptyContour);
        }
        for (index, edge) in edges(&points).enumerate() {
            edge.check(index)?;
        }
        if points.len() < MIN_VERTICES {
            return Err(ContourError::TooFewVertices {
                count: points.len(),
            });
        }
        check_simple(&points)?;
        Ok(Self { points })
    }

    /// Convenience constructor from `(x, y)` tuples.
    pub fn from_xy(coords: &[(i64, i64)]) -> Result<Self, ContourError> {
        Self::new(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a validated contour; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        edges(&self.points)
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
}

/// Reject contours whose edges touch anywhere other than the shared vertex of
/// neighbouring edges. Axis-aligned segments intersect iff their bounding boxes do.
fn check_simple(points: &[Point]) -> Result<(), ContourError> {
    let n = points.len();
    let bounds: Vec<(Point, Point)> = edges(points).map(|e| e.bounds()).collect();
    for i in 0..n {
        let (lo_i, hi_i) = bounds[i];
        for j in (i + 1)..n {
            let (lo_j, hi_j) = bounds[j];
            let lo = max_corner(lo_i, lo_j);
            let hi = min_corner(hi_i, hi_j);
            if lo.x > hi.x || lo.y > hi.y {
                continue;
            }
            let adjacent = j == i + 1 || (i == 0 && j == n - 1);
            // Neighbours may only share their common vertex.
            if adjacent && lo == hi {
                continue;
            }
            return Err(ContourError::SelfIntersecting {
                first: i,
                second: j,
            });
        }
    }
    Ok(())
}
