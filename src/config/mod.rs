pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::{ConfigProvider, SliderSettings};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";
pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:8050";

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "launch-dash")]
#[command(about = "Interactive dashboard for rocket launch records")]
pub struct CliConfig {
    /// CSV file with the launch records
    #[arg(long, default_value = DEFAULT_DATA_PATH)]
    pub data_path: String,

    /// Address the dashboard listens on
    #[arg(long, default_value = DEFAULT_BIND_ADDRESS)]
    pub bind_address: String,

    /// TOML configuration file; its values replace the defaults above
    #[arg(short, long)]
    pub config: Option<String>,

    /// Page heading
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory usage")]
    pub monitor: bool,

    /// Load and summarise the dataset, then exit without serving
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn title(&self) -> &str {
        &self.title
    }

    fn data_path(&self) -> &str {
        &self.data_path
    }

    fn bind_address(&self) -> &str {
        &self.bind_address
    }

    fn slider(&self) -> SliderSettings {
        SliderSettings::default()
    }

    fn monitor_enabled(&self) -> bool {
        self.monitor
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("title", &self.title)?;
        validation::validate_required("data_path", &self.data_path)?;
        validation::validate_path("data_path", &self.data_path)?;
        validation::validate_file_extension("data_path", &self.data_path, &["csv"])?;
        validation::validate_bind_address("bind_address", &self.bind_address)?;
        Ok(())
    }
}
