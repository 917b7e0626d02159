use std::path::{Path, PathBuf};

use hoist_core::{ArchiveConfig, ManifestRenderer};

use crate::archive::{self, ArchiveError, ArchiveRequest};
use crate::matcher::{IgnoreMatcher, MatcherError};
use crate::naming::{self, NameError};

/// Outputs of one deploy-preparation step, handed back to the
/// orchestrator: where the archive landed, and the renderer for the
/// downloader manifest that accompanies it to storage.
#[derive(Debug, Clone)]
pub struct PreparedArchive {
    pub archive_name: String,
    pub archive_path: PathBuf,
    /// Invoked later, at upload time, with the bucket and revision key of
    /// the attempt.
    pub manifest: ManifestRenderer,
}

/// Run the packaging step of a deploy attempt: name the archive for
/// `revision_key`, compile the ignore rules, and compress `dist_dir` into
/// the configured output directory.
///
/// Staging is deliberately not part of this step. Stale output must be
/// gone before the build produces new artifacts, so the orchestrator
/// calls [`crate::stage::stage`] on `config.output_dir` ahead of the
/// build, then `prepare` once the dist tree exists.
pub async fn prepare(
    config: &ArchiveConfig,
    dist_dir: &Path,
    revision_key: &str,
) -> Result<PreparedArchive, PrepareError> {
    let archive_name = naming::archive_file_name(&config.prefix, revision_key)?;
    let ignore = IgnoreMatcher::compile(&config.ignore)?;

    let result = archive::archive(ArchiveRequest {
        source_dir: dist_dir.to_path_buf(),
        output_dir: config.output_dir.clone(),
        archive_name,
        ignore,
    })
    .await?;

    Ok(PreparedArchive {
        archive_name: result.archive_name,
        archive_path: result.archive_path,
        manifest: ManifestRenderer::new(),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum PrepareError {
    #[error("invalid archive name")]
    Name(#[from] NameError),

    #[error("invalid ignore configuration")]
    Matcher(#[from] MatcherError),

    #[error("archiving failed")]
    Archive(#[from] ArchiveError),
}
