/// Scanner module — recursive file listing of a source tree.
///
/// Walks with `jwalk` in serial mode. Every non-directory entry (regular
/// files and symlinks alike) is returned, in directory-listing order.
/// Any unreadable directory aborts the walk.
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Collect every file path under `root`, depth first.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>> {
    // jwalk reports a broken root lazily; surface it with the io error.
    std::fs::read_dir(root).map_err(|source| Error::Walk {
        path: root.to_path_buf(),
        source,
    })?;

    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(false)
        .follow_links(false)
        .parallelism(jwalk::Parallelism::Serial);

    let mut files = Vec::new();
    for entry_result in walker {
        let entry = entry_result.map_err(|source| Error::WalkEntry {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;

        if entry.file_type().is_dir() {
            continue;
        }
        files.push(entry.path());
    }

    debug!("Found {} files under {}", files.len(), root.display());
    Ok(files)
}
