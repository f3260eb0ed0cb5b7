//! Trace contour edges onto a padded grid.

use super::types::{Cell, ClassificationGrid};
use crate::compress::{CompressedContour, Rank2};
use crate::contour::{ContourError, Point};

/// Build the classification grid for `contour`, marking every cell on every
/// edge (endpoints included) as `Boundary` and all other cells `Interior`.
///
/// Edges are re-checked in rank space; compression preserves equality and order,
/// so this reports the same edge index as validating the original points.
pub fn rasterize(contour: &CompressedContour) -> Result<ClassificationGrid, ContourError> {
    let pts = &contour.points;
    if pts.is_empty() {
        return Err(ContourError::EmptyContour);
    }
    let (width, height) = contour.grid_dims();
    let mut grid = ClassificationGrid::new_fill(width, height, Cell::Interior);
    let n = pts.len();
    for index in 0..n {
        let a = pts[index];
        let b = pts[(index + 1) % n];
        check_edge(contour, index, a, b)?;
        if a.x == b.x {
            for y in a.y.min(b.y)..=a.y.max(b.y) {
                grid.set(a.x, y, Cell::Boundary);
            }
        } else {
            for x in a.x.min(b.x)..=a.x.max(b.x) {
                grid.set(x, a.y, Cell::Boundary);
            }
        }
    }
    Ok(grid)
}

fn check_edge(
    contour: &CompressedContour,
    index: usize,
    a: Rank2,
    b: Rank2,
) -> Result<(), ContourError> {
    let original = |r: Rank2| contour.decompress(r).unwrap_or_else(Point::zeros);
    match (a.x == b.x, a.y == b.y) {
        (true, true) => Err(ContourError::DegenerateEdge {
            index,
            at: original(a),
        }),
        (false, false) => Err(ContourError::NonRectilinearEdge {
            index,
            from: original(a),
            to: original(b),
        }),
        _ => Ok(()),
    }
}
