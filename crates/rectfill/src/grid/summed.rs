//! Summed-area table over exterior cells.

use super::types::{Cell, ClassificationGrid};
use crate::compress::Rank2;

/// `table[(y + 1) * (w + 1) + (x + 1)]` holds the number of `Exterior` cells in
/// `[0, x] × [0, y]`; row and column zero are zeros.
#[derive(Clone, Debug)]
pub struct SummedArea {
    stride: usize,
    table: Vec<usize>,
}

impl SummedArea {
    pub fn new(grid: &ClassificationGrid) -> Self {
        let (w, h) = (grid.width(), grid.height());
        let stride = w + 1;
        let mut table = vec![0usize; stride * (h + 1)];
        for y in 0..h {
            let mut row = 0usize;
            for x in 0..w {
                row += usize::from(grid.get(x, y) == Cell::Exterior);
                table[(y + 1) * stride + x + 1] = table[y * stride + x + 1] + row;
            }
        }
        Self { stride, table }
    }

    /// Exterior cells in the inclusive box spanned by `a` and `b`.
    pub fn exterior_in(&self, a: Rank2, b: Rank2) -> usize {
        let (x0, x1) = (a.x.min(b.x), a.x.max(b.x) + 1);
        let (y0, y1) = (a.y.min(b.y), a.y.max(b.y) + 1);
        let at = |x: usize, y: usize| self.table[y * self.stride + x];
        at(x1, y1) + at(x0, y0) - at(x0, y1) - at(x1, y0)
    }

    #[inline]
    pub fn box_is_filled(&self, a: Rank2, b: Rank2) -> bool {
        self.exterior_in(a, b) == 0
    }
}
