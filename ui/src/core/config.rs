//! Runtime configuration handed down from the platform shell through context.

use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::palette::ChartTheme;

/// Default location of the snapshot when served next to the web bundle.
pub const DEFAULT_DATA_URL: &str = "/data/dashboard.json";

pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Where the snapshot document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// HTTP(S) location; relative paths resolve against the page on web.
    Url(String),
    /// Local file, desktop only.
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub source: DataSource,
    pub fetch_timeout: Duration,
    pub theme: ChartTheme,
}

impl DashboardConfig {
    pub fn with_source(source: DataSource) -> Self {
        Self {
            source,
            ..Self::default()
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: DataSource::Url(DEFAULT_DATA_URL.to_string()),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            theme: ChartTheme::default(),
        }
    }
}
