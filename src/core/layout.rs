use crate::core::table::LaunchTable;
use crate::domain::model::ALL_SITES;
use crate::domain::ports::SliderSettings;
use serde::Serialize;

pub const SITE_DROPDOWN_ID: &str = "site-dropdown";
pub const PAYLOAD_SLIDER_ID: &str = "payload-slider";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub id: &'static str,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeSlider {
    pub id: &'static str,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    /// Initial `[low, high]`, the payload bounds of the loaded table.
    pub value: [f64; 2],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: String,
    pub site_dropdown: Dropdown,
    pub payload_slider: RangeSlider,
    pub pie_chart_id: &'static str,
    pub scatter_chart_id: &'static str,
}

impl Layout {
    pub fn build(table: &LaunchTable, title: &str, slider: &SliderSettings) -> Self {
        let options = std::iter::once(ALL_SITES.to_string())
            .chain(table.sites().iter().cloned())
            .map(|site| DropdownOption {
                label: site.clone(),
                value: site,
            })
            .collect();

        let (low, high) = table.payload_bounds().unwrap_or((slider.min, slider.max));

        Self {
            title: title.to_string(),
            site_dropdown: Dropdown {
                id: SITE_DROPDOWN_ID,
                options,
                value: ALL_SITES.to_string(),
                placeholder: "Select a Launch Site".to_string(),
                searchable: true,
            },
            payload_slider: RangeSlider {
                id: PAYLOAD_SLIDER_ID,
                min: slider.min,
                max: slider.max,
                step: slider.step,
                marks: slider.marks.clone(),
                value: [low, high],
            },
            pie_chart_id: PIE_CHART_ID,
            scatter_chart_id: SCATTER_CHART_ID,
        }
    }

    pub fn initial_range(&self) -> (f64, f64) {
        let [low, high] = self.payload_slider.value;
        (low, high)
    }
}
