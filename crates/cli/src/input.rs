//! Text input: one `x,y` vertex per line.

use anyhow::{anyhow, bail, Context, Result};
use rectfill::Point;
use std::path::Path;

/// Parse `x,y` lines. Blank lines are skipped; whitespace around numbers is ignored.
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let point = parse_line(line).with_context(|| format!("line {}: {:?}", lineno + 1, line))?;
        points.push(point);
    }
    if points.is_empty() {
        bail!("input contains no points");
    }
    Ok(points)
}

fn parse_line(line: &str) -> Result<Point> {
    let (x, y) = line
        .split_once(',')
        .ok_or_else(|| anyhow!("expected `x,y`"))?;
    let x: i64 = x.trim().parse().context("bad x coordinate")?;
    let y: i64 = y.trim().parse().context("bad y coordinate")?;
    Ok(Point::new(x, y))
}

pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_points(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Inverse of `parse_points`.
pub fn format_points(points: &[Point]) -> String {
    let mut out = String::with_capacity(points.len() * 12);
    for p in points {
        out.push_str(&format!("{},{}\n", p.x, p.y));
    }
    out
}
