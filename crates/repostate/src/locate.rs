use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::Result;

pub const GIT_DIR_NAME: &str = ".git";

/// Returns every directory under `root` that contains a `.git` directory.
///
/// Entries named `.git` are pruned from the walk, so nothing inside git
/// metadata is visited or reported. Descent continues into directories that
/// were already identified as repositories, so nested checkouts are reported
/// as well.
pub fn locate_repos(root: &Path) -> Result<Vec<PathBuf>> {
    let root = fs::canonicalize(root)?;
    let mut repos = Vec::new();

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| entry.file_name() != GIT_DIR_NAME);

    for entry in walker {
        let entry = entry?;
        if !entry.file_type().is_dir() {
            continue;
        }
        if entry.path().join(GIT_DIR_NAME).is_dir() {
            repos.push(entry.path().to_path_buf());
        }
    }

    Ok(repos)
}
