use std::process::Command;

use crate::error::{RepostateError, Result};

/// Captures the installed Debian package listing via `dpkg -l`.
pub fn list_debian_packages() -> Result<String> {
    run_collector("dpkg", &["-l"])
}

/// Captures the installed Python package listing via `pip list`.
pub fn list_python_packages() -> Result<String> {
    run_collector("pip", &["list"])
}

fn run_collector(program: &str, args: &[&str]) -> Result<String> {
    let output = Command::new(program).args(args).output()?;
    if output.status.success() {
        return Ok(String::from_utf8_lossy(&output.stdout).to_string());
    }

    Err(RepostateError::Collector {
        command: format!("{program} {}", args.join(" ")),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}
