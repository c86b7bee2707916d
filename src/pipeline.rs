//! End-to-end conversion: table -> prepared points -> segments -> SVG document.

use std::path::{Path, PathBuf};

use crate::{
    config::ConvertOpts,
    foundation::error::UvPathResult,
    prepare::{DropReport, prepare},
    segment::segment,
    svg::PathDocument,
    table::Table,
};

/// Non-fatal conditions the caller may want to surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConvertWarning {
    /// Every row was filtered out.
    EmptyResult { rows_read: usize },
    /// Points survived filtering but none had a close enough neighbour.
    NoSegments { points: usize },
}

/// What to do when preparation leaves nothing to draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmptyPolicy {
    #[default]
    Skip,
    Write,
}

#[derive(Clone, Debug)]
pub struct Conversion {
    pub document: PathDocument,
    pub report: DropReport,
    pub warning: Option<ConvertWarning>,
}

#[derive(Clone, Debug, serde::Serialize)]
pub struct ConvertSummary {
    pub output: PathBuf,
    pub written: bool,
    pub segments: usize,
    pub points: usize,
    pub report: DropReport,
    pub warning: Option<ConvertWarning>,
}

#[tracing::instrument(skip(table), fields(rows = table.len()))]
pub fn convert(table: &Table, opts: &ConvertOpts) -> UvPathResult<Conversion> {
    opts.validate()?;

    let prepared = prepare(table, &opts.prepare_opts())?;
    let empty = prepared.is_empty();
    let (points, report) = prepared.into_parts();
    let point_count = points.len();

    let segments = segment(points, opts.max_dist, f64::from(opts.width));
    let document = PathDocument::new(opts.canvas(), segments);

    let warning = if empty {
        tracing::warn!(rows_read = report.rows_read, "no samples survived filtering");
        Some(ConvertWarning::EmptyResult {
            rows_read: report.rows_read,
        })
    } else if document.is_empty() {
        tracing::warn!(points = point_count, "no two consecutive points within max_dist");
        Some(ConvertWarning::NoSegments {
            points: point_count,
        })
    } else {
        None
    };

    tracing::debug!(
        segments = document.segments.len(),
        points = document.point_count(),
        "segmented samples"
    );

    Ok(Conversion {
        document,
        report,
        warning,
    })
}

/// Load `input`, convert it, and write the SVG to `output`.
///
/// Schema and I/O failures leave `output` untouched. With [`EmptyPolicy::Skip`] nothing is
/// written when every row was filtered out.
pub fn convert_file(
    input: &Path,
    output: &Path,
    opts: &ConvertOpts,
    policy: EmptyPolicy,
) -> UvPathResult<ConvertSummary> {
    opts.validate()?;
    let table = Table::from_path(input)?;
    let conv = convert(&table, opts)?;

    let skip = policy == EmptyPolicy::Skip
        && matches!(conv.warning, Some(ConvertWarning::EmptyResult { .. }));
    if skip {
        tracing::warn!(path = %output.display(), "skipping write of empty document");
    } else {
        conv.document.write(output)?;
    }

    Ok(ConvertSummary {
        output: output.to_path_buf(),
        written: !skip,
        segments: conv.document.segments.len(),
        points: conv.document.point_count(),
        report: conv.report,
        warning: conv.warning,
    })
}

/// `input` with its extension replaced by `.svg`.
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("svg")
}
