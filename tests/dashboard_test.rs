use launch_dash::core::charts::{pie_chart, scatter_chart};
use launch_dash::core::filter::{filter_by_payload, filter_by_site};
use launch_dash::core::table::LaunchTable;
use launch_dash::core::{ConfigProvider, PayloadRange, SiteSelection};
use launch_dash::{CsvFileSource, DashboardEngine, TomlConfig};
use std::io::Write;
use tempfile::NamedTempFile;

const FIXTURE: &str = include_str!("fixtures/launches.csv");

fn fixture_table() -> LaunchTable {
    LaunchTable::from_reader(FIXTURE.as_bytes()).unwrap()
}

fn test_config(data_path: &str) -> TomlConfig {
    TomlConfig::from_toml_str(&format!("[data]\npath = \"{}\"\n", data_path)).unwrap()
}

#[test]
fn test_site_filter_returns_only_matching_rows() {
    let table = fixture_table();

    for site in table.sites() {
        let rows = filter_by_site(table.records(), &SiteSelection::Site(site.clone()));
        assert!(!rows.is_empty());
        assert!(rows.iter().all(|r| &r.launch_site == site));
    }

    let total: usize = table
        .sites()
        .iter()
        .map(|site| filter_by_site(table.records(), &SiteSelection::Site(site.clone())).len())
        .sum();
    assert_eq!(total, table.len());
}

#[test]
fn test_payload_filter_is_strict_open_interval() {
    let table = fixture_table();

    // 500.0 appears twice in the dataset and 3170.0 once
    let kept = filter_by_payload(table.records(), PayloadRange::new(500.0, 3170.0));
    assert!(kept.iter().all(|r| r.payload_mass_kg > 500.0 && r.payload_mass_kg < 3170.0));
    assert!(!kept.iter().any(|r| r.payload_mass_kg == 500.0));
    assert!(!kept.iter().any(|r| r.payload_mass_kg == 3170.0));
    assert_eq!(kept.len(), 7);

    let (lo, hi) = table.payload_bounds().unwrap();
    let full = filter_by_payload(table.records(), PayloadRange::new(lo, hi));
    assert_eq!(full.len(), table.len() - 3);
}

#[test]
fn test_single_site_pie_counts_sum_to_site_rows() {
    let table = fixture_table();

    for site in table.sites() {
        let selection = SiteSelection::Site(site.clone());
        let pie = pie_chart(&table, &selection);
        let rows = filter_by_site(table.records(), &selection).len();
        assert_eq!(pie.value_sum(), rows, "site {}", site);
    }
}

#[test]
fn test_all_sites_pie_counts_successes() {
    let table = fixture_table();
    let pie = pie_chart(&table, &SiteSelection::All);

    assert_eq!(pie.slices.len(), 4);
    assert_eq!(pie.value_sum(), 8);
    assert_eq!(pie.value_sum(), table.summary().successes);
    assert_eq!(pie.slices.iter().map(|s| s.total).sum::<usize>(), table.len());

    let ksc = pie.slices.iter().find(|s| s.label == "KSC LC-39A").unwrap();
    assert_eq!(ksc.value, 4);
    assert_eq!(ksc.total, 5);
}

#[test]
fn test_scatter_respects_site_and_range() {
    let table = fixture_table();
    let chart = scatter_chart(
        &table,
        &SiteSelection::Site("CCAFS SLC-40".to_string()),
        PayloadRange::new(0.0, 5000.0),
    );

    assert_eq!(chart.title, "Success by Payload Size for site CCAFS SLC-40");
    assert_eq!(chart.point_count(), 2);
    assert!(chart
        .series
        .iter()
        .flat_map(|s| &s.points)
        .all(|p| p.launch_site == "CCAFS SLC-40" && p.payload_mass_kg < 5000.0));
}

#[tokio::test]
async fn test_engine_loads_from_file() {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    file.write_all(FIXTURE.as_bytes()).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let config = test_config(&path);
    let source = CsvFileSource::new(config.data_path());
    let engine = DashboardEngine::load(&source, &config).await.unwrap();

    assert_eq!(engine.table().len(), 20);
    assert_eq!(engine.layout().title, "SpaceX Launch Records Dashboard");
    assert_eq!(engine.layout().payload_slider.value, [0.0, 9600.0]);
    assert_eq!(engine.layout().site_dropdown.options.len(), 5);

    // slider defaults exclude the two zero-payload launches and the 9600 kg one
    let chart = engine.scatter("All Sites", None, None);
    assert_eq!(chart.point_count(), 17);

    let chart = engine.scatter("All Sites", Some(-1.0), Some(10000.0));
    assert_eq!(chart.point_count(), 20);

    let pie = engine.pie("VAFB SLC-4E");
    assert_eq!(pie.value_sum(), 3);
}

#[tokio::test]
async fn test_engine_rejects_malformed_csv() {
    let mut file = NamedTempFile::with_suffix(".csv").unwrap();
    file.write_all(
        b"Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category\n\
          KSC LC-39A,1,heavy,F9 FT B1031.1,FT\n",
    )
    .unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let config = test_config(&path);
    let source = CsvFileSource::new(config.data_path());
    let err = DashboardEngine::load(&source, &config).await.unwrap_err();
    assert_eq!(err.exit_code(), 2);
}
