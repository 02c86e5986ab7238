//! Import boundary: turns raw coordinate data into a [`PointSet`].
//!
//! The analyzer itself never touches storage; it only requires a sequence of
//! finite `(x, y)` pairs. The CSV loader here is a thin row-oriented reader
//! for the common interchange format, nothing more.

use std::fs;
use std::path::Path;

use crate::error::{AnalysisError, ImportError, Result};
use crate::geometry::{Point, PointSet};

/// Wraps a sequence of raw coordinates into a [`PointSet`].
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyPointSet`] for an empty sequence, or a
/// geometry error for any non-finite coordinate. Validation is fail-fast: no
/// partial set is ever produced.
pub fn points_from_coordinates<I>(coords: I) -> Result<PointSet>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let points: Vec<Point> = coords
        .into_iter()
        .map(|(x, y)| Point::new(x, y))
        .collect::<Result<_>>()?;
    if points.is_empty() {
        return Err(AnalysisError::EmptyPointSet.into());
    }
    Ok(PointSet::new(points))
}

/// Loads points from a CSV file of `x,y` rows.
///
/// Blank rows are skipped; fields beyond the second are ignored.
///
/// # Errors
///
/// Returns [`ImportError::FileAccess`] if the file cannot be read,
/// [`ImportError::MissingCoordinate`] / [`ImportError::MalformedCoordinate`]
/// (with the 1-based row number) for rows that do not hold two floats, and
/// [`AnalysisError::EmptyPointSet`] if the file yields no points.
pub fn load_points_csv<P: AsRef<Path>>(path: P) -> Result<PointSet> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ImportError::FileAccess {
        path: path.display().to_string(),
        source,
    })?;

    let mut coords = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let row = idx + 1;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(',');
        let x = parse_field(fields.next(), row)?;
        let y = parse_field(fields.next(), row)?;
        coords.push((x, y));
    }
    points_from_coordinates(coords)
}

fn parse_field(field: Option<&str>, row: usize) -> Result<f64> {
    let Some(field) = field else {
        return Err(ImportError::MissingCoordinate { row }.into());
    };
    let trimmed = field.trim();
    trimmed.parse::<f64>().map_err(|_| {
        ImportError::MalformedCoordinate {
            row,
            value: trimmed.to_string(),
        }
        .into()
    })
}
