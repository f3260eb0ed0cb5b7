//! Coordinate compression: map sparse original coordinates onto small ranks.
//!
//! Each axis gets its own `AxisMap`, a single sorted table holding both
//! directions of the bijection (value → rank by binary search on values,
//! rank → value by binary search on ranks), so the two lookups cannot drift.
//!
//! Ranks start at 1. Rank 0 and rank `max_rank + 1` are never assigned; the
//! rasterized grid uses them as an always-outside margin.

use crate::contour::{ContourError, Point};

/// How ranks are spaced along an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Compression {
    /// Ranks `1..=K`, one per distinct value.
    #[default]
    Dense,
    /// Like `Dense`, but consecutive values `a < b` with `b - a >= 2` leave one
    /// free rank between them, a band cell standing for the open interval `(a, b)`.
    Gapped,
}

impl Compression {
    pub fn as_str(&self) -> &'static str {
        match self {
            Compression::Dense => "dense",
            Compression::Gapped => "gapped",
        }
    }
}

/// Order-preserving bijection between the distinct coordinate values of one
/// axis and their ranks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AxisMap {
    values: Vec<i64>,
    ranks: Vec<usize>,
}

impl AxisMap {
    /// Build from arbitrary (unsorted, repeated) values.
    pub fn from_values<I>(values: I, mode: Compression) -> Self
    where
        I: IntoIterator<Item = i64>,
    {
        let mut values: Vec<i64> = values.into_iter().collect();
        values.sort_unstable();
        values.dedup();
        let mut ranks = Vec::with_capacity(values.len());
        let mut next = 1usize;
        for (k, &v) in values.iter().enumerate() {
            if k > 0 && mode == Compression::Gapped && v.abs_diff(values[k - 1]) >= 2 {
                next += 1;
            }
            ranks.push(next);
            next += 1;
        }
        Self { values, ranks }
    }

    /// Number of distinct values (K).
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Highest assigned rank (0 for an empty map).
    #[inline]
    pub fn max_rank(&self) -> usize {
        self.ranks.last().copied().unwrap_or(0)
    }

    /// Rank of an original value, if the value was seen.
    #[inline]
    pub fn rank(&self, value: i64) -> Option<usize> {
        self.values
            .binary_search(&value)
            .ok()
            .map(|k| self.ranks[k])
    }

    /// Original value of an assigned rank; `None` for sentinels and bands.
    #[inline]
    pub fn value(&self, rank: usize) -> Option<i64> {
        self.ranks
            .binary_search(&rank)
            .ok()
            .map(|k| self.values[k])
    }

    /// Distinct values in ascending order.
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// `(value, rank)` pairs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.values.iter().copied().zip(self.ranks.iter().copied())
    }
}

/// Grid-space vertex: a pair of ranks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rank2 {
    pub x: usize,
    pub y: usize,
}

/// The vertex list rewritten in ranks, together with both axis maps.
#[derive(Clone, Debug)]
pub struct CompressedContour {
    pub points: Vec<Rank2>,
    pub x_axis: AxisMap,
    pub y_axis: AxisMap,
}

impl CompressedContour {
    /// Compress `points` axis by axis.
    pub fn new(points: &[Point], mode: Compression) -> Result<Self, ContourError> {
        if points.is_empty() {
            return Err(ContourError::EmptyContour);
        }
        let x_axis = AxisMap::from_values(points.iter().map(|p| p.x), mode);
        let y_axis = AxisMap::from_values(points.iter().map(|p| p.y), mode);
        Ok(Self::with_axes(points, x_axis, y_axis))
    }

    /// Compress against caller-provided axis maps, which must contain every
    /// coordinate of `points`. Used to build full-resolution grids in tests.
    pub(crate) fn with_axes(points: &[Point], x_axis: AxisMap, y_axis: AxisMap) -> Self {
        let points = points
            .iter()
            .map(|p| Rank2 {
                x: x_axis.rank(p.x).unwrap_or(0),
                y: y_axis.rank(p.y).unwrap_or(0),
            })
            .collect();
        Self {
            points,
            x_axis,
            y_axis,
        }
    }

    /// Original coordinates of a rank pair, if both ranks are assigned.
    pub fn decompress(&self, r: Rank2) -> Option<Point> {
        Some(Point::new(self.x_axis.value(r.x)?, self.y_axis.value(r.y)?))
    }

    /// Padded grid dimensions `(width, height)` including the outside margin.
    pub fn grid_dims(&self) -> (usize, usize) {
        (self.x_axis.max_rank() + 2, self.y_axis.max_rank() + 2)
    }
}
