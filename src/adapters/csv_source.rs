use crate::core::table::read_csv_records;
use crate::domain::model::LaunchRecord;
use crate::domain::ports::DatasetSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for CsvFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read_records(&self) -> Result<Vec<LaunchRecord>> {
        let data = tokio::fs::read(&self.path).await?;
        tracing::debug!("Read {} bytes from {}", data.len(), self.path.display());
        read_csv_records(data.as_slice())
    }
}

/// CSV held in memory, e.g. a bundled sample or test fixture.
#[derive(Debug, Clone)]
pub struct CsvBytesSource {
    name: String,
    data: Vec<u8>,
}

impl CsvBytesSource {
    pub fn new(name: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            data: data.into(),
        }
    }
}

#[async_trait]
impl DatasetSource for CsvBytesSource {
    fn describe(&self) -> String {
        format!("<memory:{}>", self.name)
    }

    async fn read_records(&self) -> Result<Vec<LaunchRecord>> {
        read_csv_records(self.data.as_slice())
    }
}
