use chrono::{DateTime, Local};

use crate::model::RepoStatus;

pub const BLOCK_SEPARATOR: &str = "===========\n";

/// Header line shared by every emitted report file.
pub fn report_header(now: DateTime<Local>) -> String {
    format!(
        "Installed at: {}\n{}",
        now.format("%Y-%m-%d %H:%M:%S"),
        BLOCK_SEPARATOR
    )
}

pub fn current_report_header() -> String {
    report_header(Local::now())
}

/// Renders every status block in the order the statuses were produced.
pub fn format_report(statuses: &[RepoStatus]) -> String {
    let mut out = String::new();
    for status in statuses {
        out.push_str(&format_status(status));
    }
    out
}

/// Renders one repository block, terminated by the separator line.
pub fn format_status(status: &RepoStatus) -> String {
    let mut out = format!(
        "Repository: {}\n\tPath: {}\n",
        status.name,
        status.path.display()
    );

    if status.bare {
        out.push_str("\tBare Repository!\n");
        out.push_str(BLOCK_SEPARATOR);
        return out;
    }

    out.push_str(&format!(
        "\tSHA: {}\n",
        status.commit_id.as_deref().unwrap_or("")
    ));
    out.push_str(&format!(
        "\tdirty: {}\n",
        if status.dirty { "True" } else { "False" }
    ));
    out.push_str(&format!("\tuntracked: {}\n", render_list(&status.untracked)));
    out.push_str(&format!("\tmodified: {}\n", render_list(&status.modified)));
    out.push_str(&format!("\tadded: {}\n", render_list(&status.added)));
    out.push_str(&format!("\tdeleted: {}\n", render_list(&status.deleted)));
    out.push_str(&format!("\trenamed: {}\n", render_renames(&status.renamed)));
    match &status.patch {
        Some(patch) => out.push_str(&format!("\tpatch: {patch}\n")),
        None => out.push_str("\tpatch: None\n"),
    }
    out.push_str(BLOCK_SEPARATOR);
    out
}

fn render_list(items: &[String]) -> String {
    if items.is_empty() {
        return "None".to_string();
    }
    let quoted: Vec<String> = items.iter().map(|item| format!("'{item}'")).collect();
    format!("[{}]", quoted.join(", "))
}

fn render_renames(pairs: &[(String, String)]) -> String {
    if pairs.is_empty() {
        return "None".to_string();
    }
    let quoted: Vec<String> = pairs
        .iter()
        .map(|(old, new)| format!("'{old} -> {new}'"))
        .collect();
    format!("[{}]", quoted.join(", "))
}
