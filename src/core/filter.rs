use crate::domain::model::{LaunchRecord, PayloadRange, SiteSelection};

pub fn filter_by_site<'a>(records: &'a [LaunchRecord], selection: &SiteSelection) -> Vec<&'a LaunchRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}

pub fn filter_by_payload<'a>(records: &'a [LaunchRecord], range: PayloadRange) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .collect()
}

/// Payload mask first, then the site mask, the same order the scatter chart applies them.
pub fn filter_records<'a>(
    records: &'a [LaunchRecord],
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|r| range.contains(r.payload_mass_kg))
        .filter(|r| selection.matches(r))
        .collect()
}
