use std::{fs::File, io::BufReader, path::Path};

use crate::{
    foundation::{
        core::Canvas,
        error::{UvPathError, UvPathResult},
    },
    prepare::PrepareOpts,
};

pub const DEFAULT_MAX_DIST: f64 = 0.05;
pub const DEFAULT_SIZE: u32 = 1000;

/// Conversion settings. Every field has a default, so a JSON config may set any subset.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOpts {
    /// Segmentation threshold as a fraction of the unit square (scaled by `width`).
    pub max_dist: f64,
    pub width: u32,
    pub height: u32,
    pub flip_vertical: bool,
    /// Shift `u` from `[1, 2)` down to `[0, 1)` before filtering.
    pub wrap_u: bool,
}

impl Default for ConvertOpts {
    fn default() -> Self {
        Self {
            max_dist: DEFAULT_MAX_DIST,
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            flip_vertical: false,
            wrap_u: false,
        }
    }
}

impl ConvertOpts {
    pub fn validate(&self) -> UvPathResult<()> {
        if !self.max_dist.is_finite() || self.max_dist <= 0.0 {
            return Err(UvPathError::validation(format!(
                "max_dist must be finite and > 0 (got {})",
                self.max_dist
            )));
        }
        self.canvas().validate()
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn prepare_opts(&self) -> PrepareOpts {
        PrepareOpts {
            wrap_u: self.wrap_u,
            flip_vertical: self.flip_vertical,
            canvas: self.canvas(),
        }
    }

    pub fn from_json_str(s: &str) -> UvPathResult<Self> {
        let opts: Self = serde_json::from_str(s)
            .map_err(|e| UvPathError::serde(format!("parse config JSON: {e}")))?;
        opts.validate()?;
        Ok(opts)
    }

    pub fn from_json_path(path: &Path) -> UvPathResult<Self> {
        let f = File::open(path)
            .map_err(|e| UvPathError::io(format!("open config '{}'", path.display()), e))?;
        let opts: Self = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            UvPathError::serde(format!("parse config '{}': {e}", path.display()))
        })?;
        opts.validate()?;
        Ok(opts)
    }
}
