//! Output directory preparation for `train-topics`

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::{PipelineError, PipelineResult};

/// Create the training output directory unless something already exists there.
///
/// Creation is non-recursive: a missing parent is an error. Returns `true`
/// when the directory was created by this call.
pub fn ensure_output_dir(dir: &Path) -> PipelineResult<bool> {
    if dir.exists() {
        debug!(dir = %dir.display(), "output directory already present");
        return Ok(false);
    }

    fs::create_dir(dir).map_err(|source| PipelineError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    debug!(dir = %dir.display(), "created output directory");
    Ok(true)
}
