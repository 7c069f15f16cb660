use std::path::Path;

use crate::error::{RepostateError, Result};
use crate::locate::locate_repos;
use crate::model::RepoStatus;
use crate::status::inspect_repo;

#[derive(Debug, Clone, Copy)]
pub struct ScanOptions {
    pub include_patch: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            include_patch: true,
        }
    }
}

/// Discovers every repository under `root` and inspects each in discovery
/// order. Finding none is an error; any inspection failure aborts the scan.
pub fn scan(root: &Path, options: ScanOptions) -> Result<Vec<RepoStatus>> {
    let roots = locate_repos(root)?;
    if roots.is_empty() {
        return Err(RepostateError::NoRepositories);
    }

    let mut statuses = Vec::with_capacity(roots.len());
    for repo in roots {
        statuses.push(inspect_repo(&repo, options.include_patch)?);
    }
    Ok(statuses)
}
