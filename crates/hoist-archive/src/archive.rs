use std::fs::File;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::matcher::IgnoreMatcher;

/// One archiving request: snapshot `source_dir` into
/// `output_dir/archive_name`, minus ignored paths.
#[derive(Debug, Clone)]
pub struct ArchiveRequest {
    /// Built dist tree to snapshot. Must exist and be a directory.
    pub source_dir: PathBuf,
    /// Directory the archive lands in, created if absent.
    pub output_dir: PathBuf,
    pub archive_name: String,
    pub ignore: IgnoreMatcher,
}

/// Where a successful archiving call wrote its output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveResult {
    pub archive_name: String,
    /// `output_dir` joined with `archive_name`.
    pub archive_path: PathBuf,
}

/// Compress every non-ignored file under `request.source_dir` into a zip
/// at `request.output_dir/request.archive_name`.
///
/// Entries are stored under their `/`-separated paths relative to
/// `source_dir`, written in lexicographic order; directories themselves
/// are not stored. The zip is written to a temporary sibling and renamed
/// into place on success, so a failed or cancelled call never leaves a
/// partial archive at the final path.
///
/// Independent requests may run concurrently; a single request walks and
/// compresses sequentially on a blocking thread.
pub async fn archive(request: ArchiveRequest) -> Result<ArchiveResult, ArchiveError> {
    match tokio::fs::metadata(&request.source_dir).await {
        Ok(meta) if meta.is_dir() => {}
        Ok(_) => {
            return Err(ArchiveError::SourceNotFound {
                path: request.source_dir.clone(),
            });
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ArchiveError::SourceNotFound {
                path: request.source_dir.clone(),
            });
        }
        Err(e) => {
            return Err(ArchiveError::ReadSource {
                path: request.source_dir.clone(),
                source: e,
            });
        }
    }

    tokio::task::spawn_blocking(move || write_archive(&request))
        .await
        .map_err(|e| ArchiveError::Interrupted { source: e })?
}

fn write_archive(request: &ArchiveRequest) -> Result<ArchiveResult, ArchiveError> {
    std::fs::create_dir_all(&request.output_dir).map_err(|e| ArchiveError::CreateOutputDir {
        path: request.output_dir.clone(),
        source: e,
    })?;

    let entries = collect_entries(&request.source_dir)?;

    let archive_path = request.output_dir.join(&request.archive_name);
    let staging_path = request
        .output_dir
        .join(format!(".{}.partial", request.archive_name));

    let (written, excluded) = match write_entries(&staging_path, &entries, &request.ignore) {
        Ok(counts) => counts,
        Err(e) => {
            // the staging file is invalid at this point; the original
            // error is the one that matters
            let _ = std::fs::remove_file(&staging_path);
            return Err(e);
        }
    };

    if let Err(e) = std::fs::rename(&staging_path, &archive_path) {
        let _ = std::fs::remove_file(&staging_path);
        return Err(ArchiveError::Persist {
            path: archive_path,
            source: e,
        });
    }

    tracing::debug!(
        archive = %archive_path.display(),
        entries = written,
        excluded,
        "archive written"
    );

    Ok(ArchiveResult {
        archive_name: request.archive_name.clone(),
        archive_path,
    })
}

/// Enumerate files under `source_dir` with their `/`-separated relative
/// names, sorted so the archive layout does not depend on directory
/// iteration order.
fn collect_entries(source_dir: &Path) -> Result<Vec<(PathBuf, String)>, ArchiveError> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(source_dir) {
        let entry = entry.map_err(|e| ArchiveError::WalkSource {
            path: source_dir.to_path_buf(),
            source: e,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        // walkdir only yields paths under source_dir
        let Ok(relative) = entry.path().strip_prefix(source_dir) else {
            continue;
        };
        let name = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        entries.push((entry.into_path(), name));
    }
    entries.sort_by(|a, b| a.1.cmp(&b.1));
    Ok(entries)
}

fn write_entries(
    staging_path: &Path,
    entries: &[(PathBuf, String)],
    ignore: &IgnoreMatcher,
) -> Result<(usize, usize), ArchiveError> {
    let file = File::create(staging_path).map_err(|e| ArchiveError::WriteArchive {
        path: staging_path.to_path_buf(),
        source: e,
    })?;
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let mut written = 0usize;
    let mut excluded = 0usize;
    for (path, name) in entries {
        if ignore.is_excluded(name) {
            excluded += 1;
            continue;
        }
        zip.start_file(name.as_str(), options)
            .map_err(|e| ArchiveError::AppendEntry {
                entry: name.clone(),
                source: e,
            })?;
        let mut reader = File::open(path).map_err(|e| ArchiveError::CopyEntry {
            path: path.clone(),
            source: e,
        })?;
        std::io::copy(&mut reader, &mut zip).map_err(|e| ArchiveError::CopyEntry {
            path: path.clone(),
            source: e,
        })?;
        written += 1;
    }

    zip.finish().map_err(|e| ArchiveError::Finish {
        path: staging_path.to_path_buf(),
        source: e,
    })?;

    Ok((written, excluded))
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("source directory {path} does not exist")]
    SourceNotFound { path: PathBuf },

    #[error("failed to read source directory {path}")]
    ReadSource {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to walk source directory {path}")]
    WalkSource {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error("failed to create output directory {path}")]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write archive at {path}")]
    WriteArchive {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to append {entry} to archive")]
    AppendEntry {
        entry: String,
        source: zip::result::ZipError,
    },

    #[error("failed to archive file {path}")]
    CopyEntry {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to finish archive at {path}")]
    Finish {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("failed to move finished archive into place at {path}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("archive task was interrupted before completing")]
    Interrupted { source: tokio::task::JoinError },
}
