use std::path::PathBuf;

/// Where dpkg keeps the database of installed packages.
pub const DEFAULT_STATUS_PATH: &str = "/var/lib/dpkg/status";

#[derive(clap::ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// index.html plus one page per package
    #[default]
    Html,
    /// A single packages.json
    Json,
}

/// Resolved settings for one run of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub status_path: PathBuf,
    pub output_dir: PathBuf,
    pub format: OutputFormat,
}

impl Config {
    pub fn new(
        status_path: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        format: Option<OutputFormat>,
    ) -> Self {
        Self {
            status_path: status_path.unwrap_or_else(|| PathBuf::from(DEFAULT_STATUS_PATH)),
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from(".")),
            format: format.unwrap_or_default(),
        }
    }
}
