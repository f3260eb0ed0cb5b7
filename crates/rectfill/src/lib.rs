//! Largest rectangles inside rectilinear polygons.
//!
//! Pipeline
//! - `contour`: validate the closed vertex list (axis-aligned, non-degenerate, simple).
//! - `compress`: map each axis onto small ranks, keeping order and a reversible lookup.
//! - `grid`: rasterize the outline on the rank grid and flood-fill the outside.
//! - `search`: best bounding box over vertex pairs, with or without the containment test.
//!
//! Everything is synchronous and allocation-bounded by the number of distinct
//! coordinates, never by their magnitude.

pub mod compress;
pub mod contour;
pub mod grid;
pub mod rand;
pub mod search;

#[cfg(test)]
mod proptests;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use contour::{Contour, ContourError, Point};
pub use search::{
    analyze, filled_rectangle_max_area, largest_filled_rectangle, unconstrained_max_area,
    Analysis, Area, Containment, Rectangle, SearchCfg,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::compress::{AxisMap, CompressedContour, Compression, Rank2};
    pub use crate::contour::{Contour, ContourError, Edge, Point};
    pub use crate::grid::{flood_fill_exterior, rasterize, Cell, ClassificationGrid, SummedArea};
    pub use crate::rand::{draw_histogram_contour, HistogramCfg, ReplayToken};
    pub use crate::search::{
        analyze, box_area, filled_rectangle_max_area, largest_filled_rectangle, max_pair_area,
        unconstrained_max_area, Analysis, Area, Containment, FilledShape, Rectangle, SearchCfg,
    };
}
