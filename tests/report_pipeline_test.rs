use std::io::Write;
use taxi_park::utils::validation::Validate;
use taxi_park::{load_park, ParkReport, ReportConfig, TaxiParkError};
use tempfile::NamedTempFile;

const PARK_JSON: &str = r#"{
    "all_drivers": ["Alice", "Boris", "Chen", "Dana", "Emil"],
    "all_passengers": ["p1", "p2", "p3", "p4"],
    "trips": [
        {"driver": "Alice", "passengers": ["p1", "p2"], "duration": 12, "cost": 300.0, "discount": 0.1},
        {"driver": "Alice", "passengers": ["p1"], "duration": 17, "cost": 250.0, "discount": 0.2},
        {"driver": "Alice", "passengers": ["p1", "p3"], "duration": 8, "cost": 150.0},
        {"driver": "Boris", "passengers": ["p2"], "duration": 33, "cost": 40.0},
        {"driver": "Chen", "passengers": ["p2", "p3"], "duration": 14, "cost": 60.0, "discount": 0.3}
    ]
}"#;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_report_from_files() {
    let park_file = write_temp(PARK_JSON);
    let config_file = write_temp(
        r#"
[report]
name = "integration"
min_trips = 2
frequent_passengers_of = ["Alice", "Boris"]

[output]
format = "json"
"#,
    );

    let config = ReportConfig::from_file(config_file.path()).unwrap();
    config.validate().unwrap();
    let park = load_park(park_file.path()).unwrap();
    park.validate().unwrap();

    let report = ParkReport::generate(&park, &config);
    let json: serde_json::Value = serde_json::from_str(&report.render(&config).unwrap()).unwrap();

    assert_eq!(json["name"], "integration");
    assert_eq!(json["trip_count"], 5);
    assert_eq!(json["fake_drivers"], serde_json::json!(["Dana", "Emil"]));
    assert_eq!(json["min_trips"], 2);
    assert_eq!(json["faithful_passengers"], serde_json::json!(["p1", "p2", "p3"]));
    assert_eq!(
        json["frequent_passengers"],
        serde_json::json!({"Alice": ["p1"], "Boris": []})
    );
    // p1: 2 of 3 discounted, p2: 2 of 3, p3: 1 of 2.
    assert_eq!(json["smart_passengers"], serde_json::json!(["p1", "p2"]));
    assert_eq!(
        json["most_frequent_duration_period"],
        serde_json::json!({"start": 10, "end": 19})
    );
    // Alice earns 700 of 800.
    assert_eq!(json["pareto_principle"], true);
    assert_eq!(json["driver_incomes"][0]["driver"], "Alice");
}

#[test]
fn test_csv_and_text_rendering() {
    let park = taxi_park::parse_park(PARK_JSON).unwrap();
    let mut config = ReportConfig::default();
    config.output.format = "csv".to_string();

    let report = ParkReport::generate(&park, &config);
    let csv = report.render(&config).unwrap();
    assert!(csv.starts_with("driver,income\nAlice,700.00\nChen,60.00\nBoris,40.00\n"));

    config.output.format = "text".to_string();
    let text = report.render(&config).unwrap();
    assert!(text.contains("Fake drivers: Dana, Emil"));
    assert!(text.contains("Alice: p1"));
}

#[test]
fn test_inconsistent_park_is_rejected_by_validation() {
    let park = taxi_park::parse_park(
        r#"{
            "all_drivers": ["Alice"],
            "all_passengers": ["p1"],
            "trips": [{"driver": "Alice", "passengers": ["ghost"], "duration": 5, "cost": 1.0}]
        }"#,
    )
    .unwrap();

    let err = park.validate().unwrap_err();
    assert!(matches!(err, TaxiParkError::UnknownPassengerError { .. }));
    assert!(err.recovery_suggestion().contains("all_passengers"));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config_file = write_temp("[report]\nname = \"\"\n");
    let config = ReportConfig::from_file(config_file.path()).unwrap();

    assert!(matches!(
        config.validate(),
        Err(TaxiParkError::InvalidConfigValueError { .. })
    ));
}
