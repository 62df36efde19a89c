use crate::domain::model::LaunchRecord;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Where launch records come from (a CSV file on disk, an in-memory buffer, ...).
#[async_trait]
pub trait DatasetSource: Send + Sync {
    fn describe(&self) -> String;
    async fn read_records(&self) -> Result<Vec<LaunchRecord>>;
}

pub trait ConfigProvider: Send + Sync {
    fn title(&self) -> &str;
    fn data_path(&self) -> &str;
    fn bind_address(&self) -> &str;
    fn slider(&self) -> SliderSettings;
    fn monitor_enabled(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SliderSettings {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
}

impl Default for SliderSettings {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 10000.0,
            step: 1000.0,
            marks: vec![0.0, 2500.0, 5000.0, 7500.0, 10000.0],
        }
    }
}
