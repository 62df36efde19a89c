pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{CsvBytesSource, CsvFileSource};
pub use config::toml_config::TomlConfig;
pub use crate::core::dashboard::DashboardEngine;
pub use utils::error::{DashError, Result};
