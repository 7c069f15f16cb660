use std::path::Path;
use std::process::Command;

use crate::error::{RepostateError, Result};
use crate::model::RepoStatus;

/// Separator line used between the sections of the combined patch buffer.
pub const PATCH_SEPARATOR: &str = "----------------";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Modified,
    Deleted,
    Renamed,
}

/// One file-level entry parsed out of a `git diff HEAD` transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffEntry {
    pub kind: ChangeKind,
    pub old_path: Option<String>,
    pub new_path: Option<String>,
    pub text: String,
}

impl DiffEntry {
    /// Path used when reporting this entry: the new path for additions and
    /// renames, the old path for deletions and modifications.
    pub fn display_path(&self) -> &str {
        let preferred = match self.kind {
            ChangeKind::Added | ChangeKind::Renamed => {
                self.new_path.as_deref().or(self.old_path.as_deref())
            }
            ChangeKind::Deleted | ChangeKind::Modified => {
                self.old_path.as_deref().or(self.new_path.as_deref())
            }
        };
        preferred.unwrap_or("")
    }
}

/// Computes the status snapshot for the repository rooted at `root`.
///
/// The diff is taken between the working tree (including the index) and the
/// HEAD commit. An invalid repository path fails with a `GitCommand` error;
/// callers are expected to treat that as fatal.
pub fn inspect_repo(root: &Path, include_patch: bool) -> Result<RepoStatus> {
    let name = root
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| root.display().to_string());

    let bare = run_git_capture(root, &["rev-parse", "--is-bare-repository"])?;
    if bare.trim() == "true" {
        return Ok(RepoStatus::bare(name, root.to_path_buf()));
    }

    let commit_id = run_git_capture(root, &["rev-parse", "HEAD"])?
        .trim()
        .to_string();

    let diff_output = run_git_capture(
        root,
        &[
            "diff",
            "HEAD",
            "--find-renames",
            "--patch",
            "--no-ext-diff",
            "--no-color",
        ],
    )?;

    let mut added = Vec::new();
    let mut modified = Vec::new();
    let mut deleted = Vec::new();
    let mut renamed = Vec::new();
    let mut patch: Option<String> = None;

    for entry in parse_diff(&diff_output) {
        match entry.kind {
            ChangeKind::Added => added.push(entry.display_path().to_string()),
            ChangeKind::Deleted => deleted.push(entry.display_path().to_string()),
            ChangeKind::Renamed => {
                let old = entry.old_path.clone().unwrap_or_default();
                let new = entry.new_path.clone().unwrap_or_default();
                renamed.push((old, new));
            }
            ChangeKind::Modified => modified.push(entry.display_path().to_string()),
        }

        if include_patch && !entry.text.is_empty() {
            let buffer = patch.get_or_insert_with(|| PATCH_SEPARATOR.to_string());
            buffer.push_str(&format!(
                "\n+++ {}\n{}\n{}{}",
                entry.display_path(),
                PATCH_SEPARATOR,
                entry.text,
                PATCH_SEPARATOR
            ));
        }
    }

    let porcelain = run_git_capture(root, &["status", "--porcelain", "--untracked-files=no"])?;
    let dirty = !porcelain.trim().is_empty();

    let untracked = run_git_capture(root, &["ls-files", "--others", "--exclude-standard"])?
        .lines()
        .map(str::to_string)
        .collect();

    Ok(RepoStatus {
        name,
        path: root.to_path_buf(),
        bare: false,
        commit_id: Some(commit_id),
        dirty,
        untracked,
        added,
        modified,
        deleted,
        renamed,
        patch,
    })
}

/// Splits a `git diff` transcript into per-file entries.
pub fn parse_diff(output: &str) -> Vec<DiffEntry> {
    let mut entries = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in output.lines() {
        if line.starts_with("diff --git ") {
            if let Some(entry) = parse_block(&block) {
                entries.push(entry);
            }
            block = vec![line];
        } else if !block.is_empty() {
            block.push(line);
        }
    }
    if let Some(entry) = parse_block(&block) {
        entries.push(entry);
    }

    entries
}

fn parse_block(lines: &[&str]) -> Option<DiffEntry> {
    let header = lines.first()?;

    let mut old_path: Option<String> = None;
    let mut new_path: Option<String> = None;
    let mut rename_from: Option<String> = None;
    let mut rename_to: Option<String> = None;
    let mut is_new = false;
    let mut is_deleted = false;
    let mut hunk_start = None;

    for (idx, line) in lines.iter().enumerate().skip(1) {
        if line.starts_with("@@") {
            hunk_start = Some(idx);
            break;
        }
        if line.starts_with("new file mode") {
            is_new = true;
        } else if line.starts_with("deleted file mode") {
            is_deleted = true;
        } else if let Some(path) = line.strip_prefix("rename from ") {
            rename_from = Some(path.to_string());
        } else if let Some(path) = line.strip_prefix("rename to ") {
            rename_to = Some(path.to_string());
        } else if let Some(path) = line.strip_prefix("--- ") {
            old_path = strip_diff_prefix(path);
        } else if let Some(path) = line.strip_prefix("+++ ") {
            new_path = strip_diff_prefix(path);
        }
    }

    let is_renamed = rename_from.is_some() && rename_to.is_some();
    if rename_from.is_some() {
        old_path = rename_from;
    }
    if rename_to.is_some() {
        new_path = rename_to;
    }
    if old_path.is_none() && new_path.is_none() {
        let (old, new) = split_git_header(header);
        old_path = old;
        new_path = new;
    }

    let kind = if is_new {
        ChangeKind::Added
    } else if is_deleted {
        ChangeKind::Deleted
    } else if is_renamed {
        ChangeKind::Renamed
    } else {
        ChangeKind::Modified
    };

    let text = match hunk_start {
        Some(idx) => {
            let mut text = lines[idx..].join("\n");
            text.push('\n');
            text
        }
        None => String::new(),
    };

    Some(DiffEntry {
        kind,
        old_path,
        new_path,
        text,
    })
}

fn strip_diff_prefix(path: &str) -> Option<String> {
    if path == "/dev/null" {
        return None;
    }
    let path = path
        .strip_prefix("a/")
        .or_else(|| path.strip_prefix("b/"))
        .unwrap_or(path);
    Some(path.to_string())
}

// Fallback for blocks without ---/+++ lines (mode-only or binary changes).
// Ambiguous for paths containing " b/", which git itself cannot express
// unambiguously on this line either.
fn split_git_header(line: &str) -> (Option<String>, Option<String>) {
    let Some(rest) = line.strip_prefix("diff --git ") else {
        return (None, None);
    };
    let rest = rest.trim();
    let Some(idx) = rest.rfind(" b/") else {
        return (None, None);
    };
    let old = rest[..idx].strip_prefix("a/").unwrap_or(&rest[..idx]);
    let new = &rest[idx + 3..];
    (Some(old.to_string()), Some(new.to_string()))
}

fn run_git_capture(cwd: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git").args(args).current_dir(cwd).output()?;
    if output.status.success() {
        return Ok(String::from_utf8_lossy(&output.stdout).to_string());
    }

    Err(RepostateError::GitCommand {
        command: format!("git {}", args.join(" ")),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::{parse_diff, ChangeKind};

    const TRANSCRIPT: &str = "\
diff --git a/a.txt b/a.txt
index 0000000..1111111 100644
--- a/a.txt
+++ b/a.txt
@@ -1 +1 @@
-old
+new
diff --git a/new.txt b/new.txt
new file mode 100644
index 0000000..2222222
--- /dev/null
+++ b/new.txt
@@ -0,0 +1 @@
+hello
diff --git a/gone.txt b/gone.txt
deleted file mode 100644
index 3333333..0000000
--- a/gone.txt
+++ /dev/null
@@ -1 +0,0 @@
-bye
diff --git a/old_name.txt b/new_name.txt
similarity index 100%
rename from old_name.txt
rename to new_name.txt
";

    #[test]
    fn parse_diff_classifies_entries() {
        let entries = parse_diff(TRANSCRIPT);
        assert_eq!(entries.len(), 4);

        assert_eq!(entries[0].kind, ChangeKind::Modified);
        assert_eq!(entries[0].display_path(), "a.txt");
        assert!(entries[0].text.starts_with("@@ -1 +1 @@"));
        assert!(entries[0].text.ends_with("+new\n"));

        assert_eq!(entries[1].kind, ChangeKind::Added);
        assert_eq!(entries[1].display_path(), "new.txt");
        assert_eq!(entries[1].old_path, None);

        assert_eq!(entries[2].kind, ChangeKind::Deleted);
        assert_eq!(entries[2].display_path(), "gone.txt");
        assert_eq!(entries[2].new_path, None);

        assert_eq!(entries[3].kind, ChangeKind::Renamed);
        assert_eq!(entries[3].old_path.as_deref(), Some("old_name.txt"));
        assert_eq!(entries[3].new_path.as_deref(), Some("new_name.txt"));
        assert_eq!(entries[3].display_path(), "new_name.txt");
        assert!(entries[3].text.is_empty());
    }

    #[test]
    fn parse_diff_empty_input() {
        assert!(parse_diff("").is_empty());
    }

    #[test]
    fn parse_diff_mode_only_change_has_no_text() {
        let transcript = "\
diff --git a/script.sh b/script.sh
old mode 100644
new mode 100755
";
        let entries = parse_diff(transcript);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].kind, ChangeKind::Modified);
        assert_eq!(entries[0].display_path(), "script.sh");
        assert!(entries[0].text.is_empty());
    }
}
