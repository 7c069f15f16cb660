use std::path::PathBuf;

/// Snapshot of one repository's working-tree state, immutable once built.
#[derive(Debug, Clone)]
pub struct RepoStatus {
    pub name: String,
    pub path: PathBuf,
    pub bare: bool,
    pub commit_id: Option<String>,
    pub dirty: bool,
    pub untracked: Vec<String>,
    pub added: Vec<String>,
    pub modified: Vec<String>,
    pub deleted: Vec<String>,
    pub renamed: Vec<(String, String)>,
    pub patch: Option<String>,
}

impl RepoStatus {
    pub fn bare(name: String, path: PathBuf) -> Self {
        Self {
            name,
            path,
            bare: true,
            commit_id: None,
            dirty: false,
            untracked: Vec::new(),
            added: Vec::new(),
            modified: Vec::new(),
            deleted: Vec::new(),
            renamed: Vec::new(),
            patch: None,
        }
    }
}
