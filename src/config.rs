use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "https://api.github.com";
const DEFAULT_USER: &str = "imitablerabbit";
const DEFAULT_TARGET: &str = "master";
const DEFAULT_UPLOADS_DIR: &str = "uploads/";

/// Create a GitHub release and upload a directory of assets to it
#[derive(Debug, Clone, Parser)]
#[command(name = "ghrelease")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Base URL for the GitHub API
    #[arg(long, default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// Personal access token used for every API call; needs write access to the repo
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, default_value = "")]
    pub pat: String,

    /// User namespace that the repository is located under
    #[arg(long, default_value = DEFAULT_USER)]
    pub user: String,

    /// Repository name exactly as it appears on GitHub
    #[arg(long, default_value = "")]
    pub repo: String,

    #[command(flatten)]
    pub release: ReleaseConfig,

    /// Directory whose files are uploaded as release assets; subdirectories are ignored
    #[arg(long, default_value = DEFAULT_UPLOADS_DIR)]
    pub uploads: PathBuf,

    /// Log verbosity
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warn => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::Trace => log::Level::Trace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Args)]
pub struct ReleaseConfig {
    /// The tag_name used for the release; it does not have to match an existing git tag
    #[arg(long = "release-tag", default_value = "")]
    pub tag: String,

    /// The commit, branch or tag the release is based on
    #[arg(long, default_value = DEFAULT_TARGET)]
    pub target: String,

    /// The name of the release
    #[arg(long, default_value = "")]
    pub name: String,

    /// The body of the release
    #[arg(long, default_value = "")]
    pub body: String,

    /// Create the release as a draft, hidden until published
    #[arg(long)]
    pub draft: bool,

    /// Mark the release as a pre-release
    #[arg(long)]
    pub prerelease: bool,
}
