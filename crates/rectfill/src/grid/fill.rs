//! Exterior flood fill with an explicit frontier.

use super::types::{Cell, ClassificationGrid};

/// Convert every `Interior` cell 4-connected to the corner `(0, 0)` into
/// `Exterior`. `Boundary` cells block the fill and are never changed.
///
/// Returns the number of cells converted; a second call on the same grid
/// converts nothing.
pub fn flood_fill_exterior(grid: &mut ClassificationGrid) -> usize {
    let (w, h) = (grid.width(), grid.height());
    if w == 0 || h == 0 || grid.get(0, 0) != Cell::Interior {
        return 0;
    }
    let mut converted = 0usize;
    let mut stack: Vec<(usize, usize)> = vec![(0, 0)];
    grid.set(0, 0, Cell::Exterior);
    while let Some((x, y)) = stack.pop() {
        converted += 1;
        let mut visit = |nx: usize, ny: usize| {
            if grid.get(nx, ny) == Cell::Interior {
                grid.set(nx, ny, Cell::Exterior);
                stack.push((nx, ny));
            }
        };
        if x + 1 < w {
            visit(x + 1, y);
        }
        if x > 0 {
            visit(x - 1, y);
        }
        if y + 1 < h {
            visit(x, y + 1);
        }
        if y > 0 {
            visit(x, y - 1);
        }
    }
    converted
}
