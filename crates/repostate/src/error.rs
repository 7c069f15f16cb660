use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepostateError {
    #[error("no repositories found")]
    NoRepositories,
    #[error("git command failed: {command}\n{stderr}")]
    GitCommand { command: String, stderr: String },
    #[error("collector command failed: {command}\n{stderr}")]
    Collector { command: String, stderr: String },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, RepostateError>;
