use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info};
use tokio::task::JoinSet;

use crate::GeneratedFile;
use crate::error::OutputError;

/// Delete `dir` if it exists, recreate it, then write `files` in order.
///
/// Used for trees that are fully owned by the generator: stale files from a
/// previous run never survive.
pub fn replace_dir(dir: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>, OutputError> {
    if dir.exists() {
        fs::remove_dir_all(dir).map_err(|e| OutputError::io("failed to remove", dir, e))?;
        info!("cleared {}", dir.display());
    }
    fs::create_dir_all(dir).map_err(|e| OutputError::io("failed to create", dir, e))?;

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = dir.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| OutputError::io("failed to create", parent, e))?;
        }
        fs::write(&path, &file.content).map_err(|e| OutputError::io("failed to write", &path, e))?;
        debug!("wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}

/// Create `dir` if missing and write every file concurrently.
///
/// Existing files not in `files` are left alone. Each file is written by its
/// own task; the first failure is returned once all tasks have settled.
pub async fn write_all_concurrent(
    dir: &Path,
    files: Vec<GeneratedFile>,
) -> Result<Vec<PathBuf>, OutputError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| OutputError::io("failed to create", dir, e))?;

    let mut tasks = JoinSet::new();
    for file in files {
        let path = dir.join(&file.path);
        tasks.spawn(async move {
            tokio::fs::write(&path, file.content)
                .await
                .map_err(|e| OutputError::io("failed to write", &path, e))?;
            debug!("wrote {}", path.display());
            Ok::<_, OutputError>(path)
        });
    }

    let mut written = Vec::new();
    let mut first_error = None;
    while let Some(joined) = tasks.join_next().await {
        match joined.map_err(OutputError::from).and_then(|r| r) {
            Ok(path) => written.push(path),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }
    }

    match first_error {
        Some(e) => Err(e),
        None => {
            written.sort();
            Ok(written)
        }
    }
}
