//! Chart figures handed to the browser. Each figure is plain data (title, slices or
//! series); the page renders it with Chart.js.

use crate::core::filter::{filter_by_site, filter_records};
use crate::core::table::LaunchTable;
use crate::domain::model::{Outcome, PayloadRange, SiteSelection};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: usize,
    /// Rows behind the slice: launches at the site (all-sites view) or the
    /// count itself (single-site view).
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn value_sum(&self) -> usize {
        self.slices.iter().map(|s| s.value).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    pub booster_version: String,
    pub launch_site: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterSeries {
    pub booster_category: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub range: PayloadRange,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

pub fn pie_chart(table: &LaunchTable, selection: &SiteSelection) -> PieChart {
    match selection {
        SiteSelection::All => {
            let slices = table
                .sites()
                .iter()
                .map(|site| {
                    let site_rows = filter_by_site(table.records(), &SiteSelection::Site(site.clone()));
                    PieSlice {
                        label: site.clone(),
                        value: site_rows.iter().filter(|r| r.outcome.is_success()).count(),
                        total: site_rows.len(),
                    }
                })
                .collect();

            PieChart {
                title: "Total Success Launches by Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(site) => {
            let site_rows = filter_by_site(table.records(), selection);
            let slices = [Outcome::Failure, Outcome::Success]
                .into_iter()
                .filter_map(|outcome| {
                    let count = site_rows.iter().filter(|r| r.outcome == outcome).count();
                    (count > 0).then(|| PieSlice {
                        label: outcome.class().to_string(),
                        value: count,
                        total: count,
                    })
                })
                .collect();

            PieChart {
                title: format!("Total Success Launches for site {}", site),
                slices,
            }
        }
    }
}

pub fn scatter_chart(table: &LaunchTable, selection: &SiteSelection, range: PayloadRange) -> ScatterChart {
    let mut series: Vec<ScatterSeries> = Vec::new();

    for record in filter_records(table.records(), selection, range) {
        let point = ScatterPoint {
            payload_mass_kg: record.payload_mass_kg,
            class: record.outcome.class(),
            booster_version: record.booster_version.clone(),
            launch_site: record.launch_site.clone(),
        };

        match series
            .iter_mut()
            .find(|s| s.booster_category == record.booster_category)
        {
            Some(existing) => existing.points.push(point),
            None => series.push(ScatterSeries {
                booster_category: record.booster_category.clone(),
                points: vec![point],
            }),
        }
    }

    let title = match selection {
        SiteSelection::All => "Correlation between Payload and Success for all Sites".to_string(),
        SiteSelection::Site(site) => format!("Success by Payload Size for site {}", site),
    };

    ScatterChart {
        title,
        x_label: "Payload Mass (kg)".to_string(),
        y_label: "class".to_string(),
        range,
        series,
    }
}
