use std::env;
use std::fmt;
use std::path::{Component, Path};

const DEFAULT_IMPORT_OUTPUT: &str = "questions-manual.json";

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub import: ImportConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let output_file_name =
            env::var("APP_IMPORT_OUTPUT").unwrap_or_else(|_| DEFAULT_IMPORT_OUTPUT.to_string());
        if !is_bare_file_name(&output_file_name) {
            return Err(ConfigError::InvalidOutputName {
                value: output_file_name,
            });
        }

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            import: ImportConfig { output_file_name },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Defaults for the spreadsheet import.
#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Written next to the sheet when no output path is given.
    pub output_file_name: String,
}

impl ImportConfig {
    pub fn default_output_for(&self, sheet: &Path) -> std::path::PathBuf {
        sheet
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(&self.output_file_name)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn is_bare_file_name(value: &str) -> bool {
    let mut components = Path::new(value).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !value.ends_with('/')
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidOutputName { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidOutputName { value } => write!(
                f,
                "APP_IMPORT_OUTPUT must be a plain file name, got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::PathBuf;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_IMPORT_OUTPUT");
        env::remove_var("APP_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.import.output_file_name, "questions-manual.json");
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn recognizes_environment_aliases() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", " CI ");
        let config = AppConfig::load().expect("config loads");
        assert_eq!(config.environment, AppEnvironment::Test);
        reset_env();
    }

    #[test]
    fn rejects_output_names_with_directories() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        for value in ["", "data/questions.json", "../questions.json", "/tmp/q.json", ".."] {
            reset_env();
            env::set_var("APP_IMPORT_OUTPUT", value);
            match AppConfig::load() {
                Err(ConfigError::InvalidOutputName { value: reported }) => {
                    assert_eq!(reported, value)
                }
                other => panic!("expected invalid output name for {value:?}, got {other:?}"),
            }
        }
        reset_env();
    }

    #[test]
    fn default_output_sits_next_to_the_sheet() {
        let config = ImportConfig {
            output_file_name: "fragen.json".to_string(),
        };
        assert_eq!(
            config.default_output_for(Path::new("daten/erfassung.csv")),
            PathBuf::from("daten/fragen.json")
        );
        assert_eq!(
            config.default_output_for(Path::new("erfassung.csv")),
            PathBuf::from("fragen.json")
        );
    }
}
