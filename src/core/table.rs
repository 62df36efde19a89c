use crate::domain::model::LaunchRecord;
use crate::utils::error::{DashError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Read;

/// Read-only launch table built once at startup.
#[derive(Debug, Clone)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    payload_bounds: Option<(f64, f64)>,
    loaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableSummary {
    pub records: usize,
    pub sites: Vec<String>,
    pub successes: usize,
    pub min_payload_kg: Option<f64>,
    pub max_payload_kg: Option<f64>,
    pub loaded_at: DateTime<Utc>,
}

impl LaunchTable {
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self> {
        for (idx, record) in records.iter().enumerate() {
            // 標頭列為第 1 列
            let row = idx + 2;
            if !record.payload_mass_kg.is_finite() {
                return Err(DashError::data(row, "payload mass is not a finite number"));
            }
            if record.launch_site.trim().is_empty() {
                return Err(DashError::data(row, "launch site is empty"));
            }
        }

        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.contains(&record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        let payload_bounds = records.iter().map(|r| r.payload_mass_kg).fold(None, |acc, p| {
            match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((f64::min(lo, p), f64::max(hi, p))),
            }
        });

        Ok(Self {
            records,
            sites,
            payload_bounds,
            loaded_at: Utc::now(),
        })
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_records(read_csv_records(reader)?)
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct site names in first-appearance order.
    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    /// `(min, max)` payload mass, `None` for an empty table.
    pub fn payload_bounds(&self) -> Option<(f64, f64)> {
        self.payload_bounds
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }

    pub fn summary(&self) -> TableSummary {
        TableSummary {
            records: self.records.len(),
            sites: self.sites.clone(),
            successes: self
                .records
                .iter()
                .filter(|r| r.outcome.is_success())
                .count(),
            min_payload_kg: self.payload_bounds.map(|(lo, _)| lo),
            max_payload_kg: self.payload_bounds.map(|(_, hi)| hi),
            loaded_at: self.loaded_at,
        }
    }
}

/// Deserializes launch records from CSV with a header row. Unknown columns are ignored.
pub fn read_csv_records<R: Read>(reader: R) -> Result<Vec<LaunchRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for result in csv_reader.deserialize() {
        let record: LaunchRecord = result?;
        records.push(record);
    }
    Ok(records)
}
