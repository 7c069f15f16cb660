use std::path::PathBuf;

use clap::Parser;
use repostate::{
    current_report_header, format_report, list_debian_packages, list_python_packages, scan,
    FileSink, Report, ReportSink, RepostateError, ScanOptions, TerminalSink,
};

#[derive(Parser)]
#[command(
    name = "repostate",
    version,
    about = "report the state of every git repository under a directory"
)]
pub(crate) struct Cli {
    /// Root directory to search for repositories.
    pub(crate) path: PathBuf,

    /// Write the report to log files in this directory instead of the terminal.
    #[arg(long)]
    pub(crate) output_path: Option<PathBuf>,

    /// Skip unified diff text in the report.
    #[arg(long)]
    pub(crate) no_patch: bool,

    /// Also collect the installed Debian package listing.
    #[arg(long)]
    pub(crate) list_debs: bool,

    /// Also collect the installed Python package listing.
    #[arg(long)]
    pub(crate) list_py_pkgs: bool,
}

pub(crate) fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = ScanOptions {
        include_patch: !cli.no_patch,
    };

    let statuses = match scan(&cli.path, options) {
        Ok(statuses) => statuses,
        Err(RepostateError::NoRepositories) => {
            eprintln!("no repositories found under {}", cli.path.display());
            std::process::exit(1);
        }
        Err(err) => return Err(err.into()),
    };

    let debian_packages = if cli.list_debs {
        Some(list_debian_packages()?)
    } else {
        None
    };
    let python_packages = if cli.list_py_pkgs {
        Some(list_python_packages()?)
    } else {
        None
    };

    let report = Report {
        header: current_report_header(),
        body: format_report(&statuses),
        debian_packages,
        python_packages,
    };

    let sink: Box<dyn ReportSink> = match cli.output_path {
        Some(dir) => Box::new(FileSink { dir }),
        None => Box::new(TerminalSink),
    };
    sink.emit(&report)?;

    Ok(())
}
