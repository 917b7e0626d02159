use std::path::Path;

/// Clears the scratch output directory before a build attempt.
///
/// Removes `output_dir` and everything beneath it, whether the path is a
/// directory or a stray file, so artifacts from a previous failed run
/// never leak into the new build's output. A missing path is a no-op,
/// which makes consecutive calls equivalent to a single one.
pub fn stage(output_dir: &Path) -> Result<(), StageError> {
    let meta = match std::fs::symlink_metadata(output_dir) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(StageError::Inspect {
                path: output_dir.to_path_buf(),
                source: e,
            });
        }
    };

    tracing::debug!(path = %output_dir.display(), "removing stale deploy output");

    let removed = if meta.is_dir() {
        std::fs::remove_dir_all(output_dir)
    } else {
        std::fs::remove_file(output_dir)
    };
    removed.map_err(|e| StageError::Remove {
        path: output_dir.to_path_buf(),
        source: e,
    })
}

#[derive(Debug, thiserror::Error)]
pub enum StageError {
    #[error("failed to inspect {path}")]
    Inspect {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
    #[error("failed to remove stale output at {path}")]
    Remove {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}
