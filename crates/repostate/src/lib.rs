pub mod error;
pub mod locate;
pub mod model;
pub mod packages;
pub mod report;
pub mod scan;
pub mod sink;
pub mod status;

pub use error::{RepostateError, Result};
pub use locate::{locate_repos, GIT_DIR_NAME};
pub use model::RepoStatus;
pub use packages::{list_debian_packages, list_python_packages};
pub use report::{current_report_header, format_report, format_status, report_header};
pub use scan::{scan, ScanOptions};
pub use sink::{
    FileSink, Report, ReportSink, TerminalSink, BUILD_STATE_LOG, DEBIAN_PACKAGES_LOG,
    PYTHON_PACKAGES_LOG,
};
pub use status::{inspect_repo, parse_diff, ChangeKind, DiffEntry, PATCH_SEPARATOR};
