//! Classification grid over compressed coordinates.
//!
//! Pipeline
//! - `rasterize` traces every contour edge (inclusive) as `Boundary` on a grid
//!   padded by one always-outside cell per side; everything else starts `Interior`.
//! - `flood_fill_exterior` turns every `Interior` cell reachable from the corner
//!   `(0, 0)` into `Exterior`. Whatever stays `Boundary` or `Interior` is filled.
//! - `SummedArea` answers "any exterior cell in this box?" in O(1).
//!
//! Code cross-refs: `compress::CompressedContour`, `search::filled_rectangle_max_area`.

mod fill;
mod raster;
mod summed;
mod types;

pub use fill::flood_fill_exterior;
pub use raster::rasterize;
pub use summed::SummedArea;
pub use types::{Cell, ClassificationGrid};
