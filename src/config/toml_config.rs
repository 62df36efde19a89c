use crate::config::{DEFAULT_BIND_ADDRESS, DEFAULT_TITLE};
use crate::core::{ConfigProvider, SliderSettings};
use crate::utils::error::{DashError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub dashboard: Option<DashboardSection>,
    pub data: DataSection,
    pub server: Option<ServerSection>,
    pub slider: Option<SliderSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSection {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind_address: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SliderSection {
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub step: Option<f64>,
    pub marks: Option<Vec<f64>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub format: Option<LogFormat>,
    pub monitor: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DashError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| DashError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LAUNCH_DATA})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DashError::ConfigError {
            message: format!("env substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("dashboard.title", self.title())?;
        validation::validate_required("data.path", &self.data.path)?;
        validation::validate_path("data.path", &self.data.path)?;
        validation::validate_file_extension("data.path", &self.data.path, &["csv"])?;
        validation::validate_bind_address("server.bind_address", self.bind_address())?;

        let slider = self.slider();
        validation::validate_ordered_bounds("slider", slider.min, slider.max)?;
        if slider.step <= 0.0 {
            return Err(DashError::InvalidConfigValueError {
                field: "slider.step".to_string(),
                value: slider.step.to_string(),
                reason: "Step must be positive".to_string(),
            });
        }
        for mark in &slider.marks {
            validation::validate_range("slider.marks", *mark, slider.min, slider.max)?;
        }

        Ok(())
    }

    pub fn log_format(&self) -> LogFormat {
        self.logging
            .as_ref()
            .and_then(|l| l.format)
            .unwrap_or_default()
    }
}

impl ConfigProvider for TomlConfig {
    fn title(&self) -> &str {
        self.dashboard
            .as_ref()
            .and_then(|d| d.title.as_deref())
            .unwrap_or(DEFAULT_TITLE)
    }

    fn data_path(&self) -> &str {
        &self.data.path
    }

    fn bind_address(&self) -> &str {
        self.server
            .as_ref()
            .and_then(|s| s.bind_address.as_deref())
            .unwrap_or(DEFAULT_BIND_ADDRESS)
    }

    fn slider(&self) -> SliderSettings {
        let defaults = SliderSettings::default();
        match &self.slider {
            Some(section) => SliderSettings {
                min: section.min.unwrap_or(defaults.min),
                max: section.max.unwrap_or(defaults.max),
                step: section.step.unwrap_or(defaults.step),
                marks: section.marks.clone().unwrap_or(defaults.marks),
            },
            None => defaults,
        }
    }

    fn monitor_enabled(&self) -> bool {
        self.logging
            .as_ref()
            .and_then(|l| l.monitor)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_minimal_config() {
        let toml_content = r#"
[data]
path = "spacex_launch_dash.csv"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.data_path(), "spacex_launch_dash.csv");
        assert_eq!(config.title(), DEFAULT_TITLE);
        assert_eq!(config.bind_address(), DEFAULT_BIND_ADDRESS);
        assert_eq!(config.slider(), SliderSettings::default());
        assert_eq!(config.log_format(), LogFormat::Compact);
        assert!(!config.monitor_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[dashboard]
title = "Launch Records"

[data]
path = "data/launches.csv"

[server]
bind_address = "0.0.0.0:9000"

[slider]
max = 16000
step = 500
marks = [0, 8000, 16000]

[logging]
format = "json"
monitor = true
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.title(), "Launch Records");
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        let slider = config.slider();
        assert_eq!(slider.min, 0.0);
        assert_eq!(slider.max, 16000.0);
        assert_eq!(slider.step, 500.0);
        assert_eq!(slider.marks, vec![0.0, 8000.0, 16000.0]);
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.monitor_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("LAUNCH_DASH_TEST_DATA", "/srv/launches.csv");

        let toml_content = r#"
[data]
path = "${LAUNCH_DASH_TEST_DATA}"
"#;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.data_path(), "/srv/launches.csv");

        std::env::remove_var("LAUNCH_DASH_TEST_DATA");
    }

    #[test]
    fn test_config_validation() {
        let inverted = r#"
[data]
path = "launches.csv"

[slider]
min = 5000
max = 1000
"#;
        let config = TomlConfig::from_toml_str(inverted).unwrap();
        assert!(config.validate().is_err());

        let mark_outside = r#"
[data]
path = "launches.csv"

[slider]
marks = [0, 12000]
"#;
        let config = TomlConfig::from_toml_str(mark_outside).unwrap();
        assert!(config.validate().is_err());

        let bad_address = r#"
[data]
path = "launches.csv"

[server]
bind_address = "localhost"
"#;
        let config = TomlConfig::from_toml_str(bad_address).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_data_path_is_missing_config() {
        let config = TomlConfig::from_toml_str("[data]\npath = \"\"\n").unwrap();
        let err = config.validate().unwrap_err();
        assert!(matches!(err, DashError::MissingConfigError { ref field } if field == "data.path"));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_missing_data_section_fails_to_parse() {
        let err = TomlConfig::from_toml_str("[server]\nbind_address = \"127.0.0.1:1\"\n").unwrap_err();
        assert!(matches!(err, DashError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r#"
[dashboard]
title = "From file"

[data]
path = "launches.csv"
"#;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.title(), "From file");
    }
}
