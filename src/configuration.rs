use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::server::DEFAULT_SERVER_NAME;
use crate::time::calendar::calendarerror::CalendarError;
use crate::time::calendar::calendarloader::{china, CalendarLoader};
use crate::time::calendar::chinesecalendar::ChineseCalendar;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("failed to read configuration {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error
    },

    #[error("failed to parse configuration {}: {source}", .path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error
    },

    #[error("failed to load calendar {}: {source}", .path.display())]
    Calendar {
        path: PathBuf,
        source: CalendarError
    },

    #[error("failed to install log subscriber: {0}")]
    Logging(String)
}

fn default_server_name() -> String {
    DEFAULT_SERVER_NAME.to_owned()
}

fn default_log_filter() -> String {
    "info".to_owned()
}

/// Runtime settings, read from an optional JSON file.
///
/// ```text
/// {
///   "server_name": "中国节假日日历",
///   "calendar_file": "/etc/cncalendar/china.json",
///   "log_filter": "cncalendar=debug"
/// }
/// ```
///
/// Every field may be omitted. `calendar_file` replaces the built-in
/// arrangement data.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    #[serde(default = "default_server_name")]
    server_name: String,
    #[serde(default)]
    calendar_file: Option<PathBuf>,
    #[serde(default = "default_log_filter")]
    log_filter: String
}

impl Default for Configuration {
    fn default() -> Configuration {
        Configuration {
            server_name: default_server_name(),
            calendar_file: None,
            log_filter: default_log_filter()
        }
    }
}

impl Configuration {
    pub fn new() -> Configuration {
        Configuration::default()
    }

    pub fn from_reader(file_path: impl AsRef<Path>) -> Result<Configuration, ConfigurationError> {
        let path = file_path.as_ref().to_path_buf();
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(source) => return Err(ConfigurationError::Io { path, source })
        };
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|source| ConfigurationError::Json { path, source })
    }

    pub fn server_name(&self) -> &String {
        &self.server_name
    }

    pub fn calendar_file(&self) -> Option<&Path> {
        self.calendar_file.as_deref()
    }

    pub fn log_filter(&self) -> &String {
        &self.log_filter
    }

    /// Calendar from `calendar_file` when set, otherwise the built-in one.
    pub fn calendar(&self) -> Result<Arc<ChineseCalendar>, ConfigurationError> {
        match &self.calendar_file {
            Some(path) => CalendarLoader::from_reader(path)
                .map(Arc::new)
                .map_err(|source| ConfigurationError::Calendar { path: path.clone(), source }),
            None => Ok(china())
        }
    }

    /// Installs the global `tracing` subscriber, writing to stderr since
    /// stdout carries the protocol. `RUST_LOG` overrides `log_filter`.
    pub fn init_logging(&self) -> Result<(), ConfigurationError> {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.log_filter));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .try_init()
            .map_err(|err| ConfigurationError::Logging(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use serde_json::json;

    use super::*;
    use crate::time::calendar::holidaycalendar::HolidayCalendar;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{}", contents).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Configuration::new();
        assert_eq!(config.server_name(), DEFAULT_SERVER_NAME);
        assert_eq!(config.calendar_file(), None);
        assert_eq!(config.log_filter(), "info");
        assert_eq!(config.calendar().unwrap().supported_years(), 2019..=2026);
    }

    #[test]
    fn test_empty_object_uses_defaults() {
        let file = write_temp("{}");
        assert_eq!(Configuration::from_reader(file.path()).unwrap(), Configuration::default());
    }

    #[test]
    fn test_from_reader_reads_fields() {
        let file = write_temp(&json!({
            "server_name": "holidays",
            "log_filter": "debug"
        }).to_string());
        let config = Configuration::from_reader(file.path()).unwrap();
        assert_eq!(config.server_name(), "holidays");
        assert_eq!(config.log_filter(), "debug");
    }

    #[test]
    fn test_calendar_file_replaces_builtin_data() {
        let calendar_file = write_temp(&json!({
            "name": "custom",
            "weekends": ["Sat", "Sun"],
            "start_year": 2030,
            "end_year": 2030,
            "arrangements": [
                { "holiday": "NationalDay", "rest": [["2030-10-01", "2030-10-07"]] }
            ]
        }).to_string());
        let config_file = write_temp(&json!({ "calendar_file": calendar_file.path() }).to_string());
        let config = Configuration::from_reader(config_file.path()).unwrap();
        let calendar = config.calendar().unwrap();
        assert_eq!(calendar.name(), "custom");
        assert_eq!(calendar.supported_years(), 2030..=2030);
    }

    #[test]
    fn test_bad_calendar_file_is_reported() {
        let calendar_file = write_temp("not json");
        let config_file = write_temp(&json!({ "calendar_file": calendar_file.path() }).to_string());
        let config = Configuration::from_reader(config_file.path()).unwrap();
        let err = config.calendar().err().unwrap();
        assert!(matches!(err, ConfigurationError::Calendar { source: CalendarError::Json(_), .. }));
    }

    #[test]
    fn test_second_logging_install_is_reported() {
        let config = Configuration::new();
        let _ = config.init_logging();
        let err = config.init_logging().unwrap_err();
        assert!(matches!(err, ConfigurationError::Logging(_)));
        assert!(err.to_string().starts_with("failed to install log subscriber"));
    }

    #[test]
    fn test_missing_file_and_bad_json() {
        let err = Configuration::from_reader("/nonexistent/cncalendar.json").unwrap_err();
        assert!(matches!(err, ConfigurationError::Io { .. }));

        let file = write_temp("{ \"server_name\": 42 }");
        let err = Configuration::from_reader(file.path()).unwrap_err();
        assert!(matches!(err, ConfigurationError::Json { .. }));
    }
}
