use crate::core::charts::{pie_chart, scatter_chart, PieChart, ScatterChart};
use crate::core::layout::Layout;
use crate::core::table::{LaunchTable, TableSummary};
use crate::domain::model::{PayloadRange, SiteSelection};
use crate::domain::ports::{ConfigProvider, DatasetSource};
use crate::utils::error::Result;
use crate::utils::monitor::SystemMonitor;
use std::sync::Arc;

/// Loaded table plus page layout; answers the dropdown and slider callbacks.
#[derive(Debug, Clone)]
pub struct DashboardEngine {
    table: Arc<LaunchTable>,
    layout: Arc<Layout>,
}

impl DashboardEngine {
    pub fn new(table: LaunchTable, layout: Layout) -> Self {
        Self {
            table: Arc::new(table),
            layout: Arc::new(layout),
        }
    }

    pub async fn load<S: DatasetSource, C: ConfigProvider>(source: &S, config: &C) -> Result<Self> {
        Self::load_with_monitoring(source, config, &SystemMonitor::new(false)).await
    }

    pub async fn load_with_monitoring<S: DatasetSource, C: ConfigProvider>(
        source: &S,
        config: &C,
        monitor: &SystemMonitor,
    ) -> Result<Self> {
        tracing::info!("📥 Loading launch records from {}", source.describe());
        monitor.log_stats("Before load");

        let records = source.read_records().await?;
        let table = LaunchTable::from_records(records)?;

        if table.is_empty() {
            tracing::warn!("⚠️ Dataset is empty, charts will have no data");
        }
        match table.payload_bounds() {
            Some((lo, hi)) => tracing::info!(
                "✅ Loaded {} records across {} sites (payload {} - {} kg)",
                table.len(),
                table.sites().len(),
                lo,
                hi
            ),
            None => tracing::info!("✅ Loaded {} records", table.len()),
        }
        monitor.log_stats("After load");

        let layout = Layout::build(&table, config.title(), &config.slider());
        Ok(Self::new(table, layout))
    }

    pub fn table(&self) -> &LaunchTable {
        &self.table
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn summary(&self) -> TableSummary {
        self.table.summary()
    }

    pub fn pie(&self, site: &str) -> PieChart {
        let selection = SiteSelection::parse(site);
        if let SiteSelection::Site(name) = &selection {
            if !self.table.has_site(name) {
                tracing::warn!("Unknown launch site requested: {}", name);
            }
        }
        pie_chart(&self.table, &selection)
    }

    /// `low`/`high` fall back to the slider's initial value.
    pub fn scatter(&self, site: &str, low: Option<f64>, high: Option<f64>) -> ScatterChart {
        let (default_low, default_high) = self.layout.initial_range();
        let range = PayloadRange::new(low.unwrap_or(default_low), high.unwrap_or(default_high));
        tracing::debug!("Scatter request: site={}, range=({}, {})", site, range.low, range.high);
        scatter_chart(&self.table, &SiteSelection::parse(site), range)
    }
}
