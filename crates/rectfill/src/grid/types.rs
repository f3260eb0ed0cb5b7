//! Cell states and the flat grid buffer.

use crate::compress::Rank2;

/// State of one compressed cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Exterior,
    Boundary,
    Interior,
}

impl Cell {
    /// Part of the polygon (its outline or the enclosed region).
    #[inline]
    pub fn is_filled(self) -> bool {
        !matches!(self, Cell::Exterior)
    }
}

/// Row-major `width × height` grid indexed by `(rank_x, rank_y)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassificationGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl ClassificationGrid {
    pub fn new_fill(width: usize, height: usize, value: Cell) -> Self {
        Self {
            width,
            height,
            cells: vec![value; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn idx(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Cell {
        self.cells[self.idx(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        let i = self.idx(x, y);
        self.cells[i] = cell;
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of cells in state `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// True iff every cell in the inclusive box spanned by `a` and `b` is filled.
    pub fn box_is_filled(&self, a: Rank2, b: Rank2) -> bool {
        let (x_lo, x_hi) = (a.x.min(b.x), a.x.max(b.x));
        let (y_lo, y_hi) = (a.y.min(b.y), a.y.max(b.y));
        (y_lo..=y_hi).all(|y| {
            let row = y * self.width;
            self.cells[row + x_lo..=row + x_hi]
                .iter()
                .all(|c| c.is_filled())
        })
    }
}
