//! Sample validation, remapping, filtering and de-duplication.

use std::collections::HashSet;

use crate::{
    foundation::{
        core::{Canvas, Point},
        error::{UvPathError, UvPathResult},
    },
    table::Table,
};

pub const U_COLUMN: &str = "u";
pub const V_COLUMN: &str = "v";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PrepareOpts {
    /// Shift `u` down by one before filtering (`[1, 2)` authored data).
    pub wrap_u: bool,
    pub flip_vertical: bool,
    pub canvas: Canvas,
}

/// Rows dropped during preparation, by reason.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct DropReport {
    pub rows_read: usize,
    pub missing: usize,
    pub non_numeric: usize,
    pub out_of_range: usize,
    pub duplicate: usize,
    pub retained: usize,
}

impl DropReport {
    pub fn dropped(&self) -> usize {
        self.missing + self.non_numeric + self.out_of_range + self.duplicate
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Prepared {
    Points {
        points: Vec<Point>,
        report: DropReport,
    },
    /// Every row was filtered out.
    Empty { report: DropReport },
}

impl Prepared {
    pub fn report(&self) -> &DropReport {
        match self {
            Self::Points { report, .. } | Self::Empty { report } => report,
        }
    }

    pub fn points(&self) -> &[Point] {
        match self {
            Self::Points { points, .. } => points,
            Self::Empty { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    pub fn into_parts(self) -> (Vec<Point>, DropReport) {
        match self {
            Self::Points { points, report } => (points, report),
            Self::Empty { report } => (Vec::new(), report),
        }
    }
}

enum Cell {
    Value(f64),
    Missing,
    NonNumeric,
}

fn parse_cell(raw: Option<&str>) -> Cell {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Cell::Missing;
    };
    match raw.parse::<f64>() {
        Ok(x) if x.is_nan() => Cell::Missing,
        Ok(x) => Cell::Value(x),
        Err(_) => Cell::NonNumeric,
    }
}

fn in_unit_range(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

/// Turn raw `u`/`v` rows into ordered device-space points.
///
/// Row-level problems (missing, non-numeric, out of range, duplicate) drop the row and are only
/// counted in the returned [`DropReport`]. A table without both `u` and `v` columns is a schema
/// error.
#[tracing::instrument(skip(table), fields(rows = table.len()))]
pub fn prepare(table: &Table, opts: &PrepareOpts) -> UvPathResult<Prepared> {
    opts.canvas.validate()?;

    let (u_col, v_col) = match (table.column_index(U_COLUMN), table.column_index(V_COLUMN)) {
        (Some(u), Some(v)) => (u, v),
        (u, v) => {
            let missing = [(U_COLUMN, u), (V_COLUMN, v)]
                .into_iter()
                .filter(|(_, idx)| idx.is_none())
                .map(|(name, _)| name.to_string())
                .collect();
            return Err(UvPathError::schema(missing, table.columns().to_vec()));
        }
    };

    let mut report = DropReport::default();
    let mut seen: HashSet<(u64, u64)> = HashSet::new();
    let mut points = Vec::new();

    for row in table.rows() {
        report.rows_read += 1;

        let cells = (
            parse_cell(row.get(u_col).map(String::as_str)),
            parse_cell(row.get(v_col).map(String::as_str)),
        );
        let (mut u, v) = match cells {
            (Cell::Value(u), Cell::Value(v)) => (u, v),
            (Cell::Missing, _) | (_, Cell::Missing) => {
                report.missing += 1;
                continue;
            }
            _ => {
                report.non_numeric += 1;
                continue;
            }
        };

        if opts.wrap_u {
            u -= 1.0;
        }
        if !in_unit_range(u) || !in_unit_range(v) {
            report.out_of_range += 1;
            continue;
        }

        // +0.0 folds -0.0 into 0.0 so both hash alike.
        let key = ((u + 0.0).to_bits(), (v + 0.0).to_bits());
        if !seen.insert(key) {
            report.duplicate += 1;
            continue;
        }

        points.push(opts.canvas.to_device(u, v, opts.flip_vertical));
    }

    report.retained = points.len();
    tracing::debug!(
        rows_read = report.rows_read,
        missing = report.missing,
        non_numeric = report.non_numeric,
        out_of_range = report.out_of_range,
        duplicate = report.duplicate,
        retained = report.retained,
        "prepared samples"
    );

    if points.is_empty() {
        return Ok(Prepared::Empty { report });
    }
    Ok(Prepared::Points { points, report })
}
