use serde::{Deserialize, Serialize};

/// 下拉選單中代表「不篩選發射場」的選項
pub const ALL_SITES: &str = "All Sites";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Success)
    }
}

impl From<Outcome> for u8 {
    fn from(outcome: Outcome) -> Self {
        outcome.class()
    }
}

impl TryFrom<u8> for Outcome {
    type Error = String;

    fn try_from(class: u8) -> std::result::Result<Self, Self::Error> {
        match class {
            0 => Ok(Outcome::Failure),
            1 => Ok(Outcome::Success),
            other => Err(format!("class must be 0 or 1, got {}", other)),
        }
    }
}

/// One launch attempt, as read from the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "class")]
    pub outcome: Outcome,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    pub booster_version: String,
    #[serde(rename = "Booster Version Category")]
    pub booster_category: String,
}

/// Which rows the dropdown selects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => ALL_SITES,
            SiteSelection::Site(site) => site,
        }
    }
}

/// Open payload interval `(low, high)` in kg; both bounds are excluded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg > self.low && payload_mass_kg < self.high
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_from_class() {
        assert_eq!(Outcome::try_from(0).unwrap(), Outcome::Failure);
        assert_eq!(Outcome::try_from(1).unwrap(), Outcome::Success);
        assert!(Outcome::try_from(2).is_err());
        assert_eq!(u8::from(Outcome::Success), 1);
    }

    #[test]
    fn test_site_selection_sentinel() {
        assert_eq!(SiteSelection::parse("All Sites"), SiteSelection::All);
        assert_eq!(
            SiteSelection::parse("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
        assert_eq!(SiteSelection::default().label(), ALL_SITES);
    }

    #[test]
    fn test_payload_range_excludes_bounds() {
        let range = PayloadRange::new(1000.0, 5000.0);
        assert!(!range.contains(1000.0));
        assert!(range.contains(1000.5));
        assert!(range.contains(4999.9));
        assert!(!range.contains(5000.0));
    }
}
