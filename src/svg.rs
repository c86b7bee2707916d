//! SVG polyline document model, serializer and atomic file writer.

use std::{io::Write as _, path::Path};

use crate::{
    foundation::{
        core::Canvas,
        error::{UvPathError, UvPathResult},
    },
    segment::Segment,
};

const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Ordered segments on a fixed-size canvas.
#[derive(Clone, Debug, PartialEq)]
pub struct PathDocument {
    pub canvas: Canvas,
    pub segments: Vec<Segment>,
}

impl PathDocument {
    pub fn new(canvas: Canvas, segments: Vec<Segment>) -> Self {
        Self { canvas, segments }
    }

    pub fn point_count(&self) -> usize {
        self.segments.iter().map(Segment::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn to_svg(&self) -> Vec<u8> {
        serialize(&self.segments, self.canvas)
    }

    pub fn write(&self, path: &Path) -> UvPathResult<()> {
        write_document(path, &self.to_svg())
    }
}

/// Render `segments` as one `<polyline>` each inside a `width x height` root.
pub fn serialize(segments: &[Segment], canvas: Canvas) -> Vec<u8> {
    let mut out = String::new();
    out.push_str(&format!(
        r#"<svg xmlns="{SVG_NS}" width="{}" height="{}">"#,
        canvas.width, canvas.height
    ));
    out.push('\n');

    for seg in segments {
        out.push_str(r#"  <polyline points=""#);
        for (i, p) in seg.points().iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&format!("{:.2},{:.2}", p.x, p.y));
        }
        out.push_str(r#"" fill="none" stroke="black" stroke-width="1"/>"#);
        out.push('\n');
    }

    out.push_str("</svg>\n");
    out.into_bytes()
}

pub fn ensure_parent_dir(path: &Path) -> UvPathResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            UvPathError::io(
                format!("failed to create output directory '{}'", parent.display()),
                e,
            )
        })?;
    }
    Ok(())
}

/// Write `bytes` to `path` all-or-nothing.
///
/// Bytes go to a temporary file next to `path` which is renamed over it once fully flushed. On
/// failure the temporary file is removed and `path` is untouched.
pub fn write_document(path: &Path, bytes: &[u8]) -> UvPathResult<()> {
    ensure_parent_dir(path)?;
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let shown = path.display();
    let mut tmp = tempfile::Builder::new()
        .prefix(".uvpath-")
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| UvPathError::io(format!("create temp file for '{shown}'"), e))?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| UvPathError::io(format!("write '{shown}'"), e))?;
    tmp.persist(path)
        .map_err(|e| UvPathError::io(format!("finalize '{shown}'"), e.error))?;

    tracing::info!(path = %shown, bytes = bytes.len(), "wrote document");
    Ok(())
}
