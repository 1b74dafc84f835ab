//! Run configuration for demonstrations.
//!
//! There are no flags and no environment variables. A [`Config`] is built in
//! code, starting from the defaults below.

use std::path::{Path, PathBuf};

use tether_log::Level;
use tether_mem::GrowthPolicy;

/// File name the function demonstration persists its results to.
pub const DEFAULT_REPORT_FILE: &str = "results.json";

/// Default minimum log level.
pub const DEFAULT_LOG_LEVEL: Level = Level::Info;

/// Settings shared by every demonstration.
///
/// # Examples
///
/// ```
/// use tether::{Config, GrowthPolicy};
///
/// let config = Config::default()
///     .with_growth(GrowthPolicy::Exact)
///     .with_persist(true);
///
/// assert_eq!(config.growth, GrowthPolicy::Exact);
/// assert!(config.persist);
/// assert_eq!(config.report_file.to_str(), Some("results.json"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the persisted result array is written.
    pub report_file: PathBuf,
    /// Capacity policy for heaps the demonstrations create.
    pub growth: GrowthPolicy,
    /// Minimum level for `tether_log`.
    pub log_level: Level,
    /// Whether demonstrations write their persisted artifact at all.
    pub persist: bool,
}

impl Config {
    /// Replaces the report file path.
    #[must_use]
    pub fn with_report_file(mut self, path: impl AsRef<Path>) -> Self {
        self.report_file = path.as_ref().to_path_buf();
        self
    }

    /// Replaces the growth policy.
    #[must_use]
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Replaces the log level.
    #[must_use]
    pub fn with_log_level(mut self, level: Level) -> Self {
        self.log_level = level;
        self
    }

    /// Enables or disables writing the persisted artifact.
    #[must_use]
    pub fn with_persist(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            report_file: PathBuf::from(DEFAULT_REPORT_FILE),
            growth: GrowthPolicy::default(),
            log_level: DEFAULT_LOG_LEVEL,
            persist: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.report_file, PathBuf::from("results.json"));
        assert_eq!(config.growth, GrowthPolicy::Doubling);
        assert_eq!(config.log_level, Level::Info);
        assert!(!config.persist);
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_report_file("out/report.json")
            .with_log_level(Level::Trace);

        assert_eq!(config.report_file, PathBuf::from("out/report.json"));
        assert_eq!(config.log_level, Level::Trace);
    }
}
