use std::{
    env, fmt,
    path::{Path, PathBuf},
};

use clap::ValueEnum;

pub mod account_layout;
pub mod typedefs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LoggingFormat {
    Standard,
    Json,
}

impl fmt::Display for LoggingFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoggingFormat::Standard => write!(f, "standard"),
            LoggingFormat::Json => write!(f, "json"),
        }
    }
}

pub fn setup_logging(logging_format: LoggingFormat) {
    let env_filter = env::var("RUST_LOG").unwrap_or("info".to_string());
    let subscriber = tracing_subscriber::fmt().with_env_filter(env_filter);
    match logging_format {
        LoggingFormat::Standard => subscriber.init(),
        LoggingFormat::Json => subscriber.json().init(),
    }
}

pub fn relative_project_path(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(path)
}

/// Walks up from `start` to the nearest directory containing `.git`.
pub fn find_repository_root(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// `<repository root>/scripts/accounts`, falling back to `start` when it is not inside a
/// repository.
pub fn default_accounts_dir(start: &Path) -> PathBuf {
    find_repository_root(start)
        .unwrap_or_else(|| start.to_path_buf())
        .join("scripts")
        .join("accounts")
}
