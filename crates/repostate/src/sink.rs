use std::fs;
use std::path::PathBuf;

use crate::error::Result;

pub const BUILD_STATE_LOG: &str = "build_state.log";
pub const DEBIAN_PACKAGES_LOG: &str = "debian_packages.log";
pub const PYTHON_PACKAGES_LOG: &str = "python_packages.log";

/// Fully assembled report text plus any requested package listings.
#[derive(Debug, Clone)]
pub struct Report {
    pub header: String,
    pub body: String,
    pub debian_packages: Option<String>,
    pub python_packages: Option<String>,
}

pub trait ReportSink {
    fn emit(&self, report: &Report) -> Result<()>;
}

/// Prints the report to standard output, package listings last.
pub struct TerminalSink;

impl ReportSink for TerminalSink {
    fn emit(&self, report: &Report) -> Result<()> {
        print!("{}{}", report.header, report.body);
        if let Some(listing) = &report.debian_packages {
            print!("{listing}");
        }
        if let Some(listing) = &report.python_packages {
            print!("{listing}");
        }
        Ok(())
    }
}

/// Writes the report into log files under `dir`, truncating any previous
/// contents. Each file starts with the same header.
pub struct FileSink {
    pub dir: PathBuf,
}

impl ReportSink for FileSink {
    fn emit(&self, report: &Report) -> Result<()> {
        fs::write(
            self.dir.join(BUILD_STATE_LOG),
            format!("{}{}", report.header, report.body),
        )?;
        if let Some(listing) = &report.debian_packages {
            fs::write(
                self.dir.join(DEBIAN_PACKAGES_LOG),
                format!("{}{listing}", report.header),
            )?;
        }
        if let Some(listing) = &report.python_packages {
            fs::write(
                self.dir.join(PYTHON_PACKAGES_LOG),
                format!("{}{listing}", report.header),
            )?;
        }
        Ok(())
    }
}
