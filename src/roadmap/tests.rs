use super::*;
use tempfile::tempdir;

const SAMPLE_ROADMAP: &str = "\
Year (Roadmap),Label,Year,Qubit counts,Expected Qubit Counts
2020,Falcon,2019,27,Executed
2020,Hummingbird,2020,65,Executed
2020,Eagle,2021,127,Forecast
2020,Osprey,2022,433,Forecast
2020,Condor,2023,\"1,121\",Forecast
2022,Falcon,2019,27,Executed
2022,Eagle,2021,127,Executed
2022,Osprey,2022,433,Executed
2022,Heron,2023,133,Forecast
2022,Condor,2023,\"1,121\",Forecast
2022,Kookaburra,2025,\"4,158\",Forecast
2022,Unknown,2026,TBD,Forecast
2025,Eagle,2021,127,Executed
2025,Osprey,2022,433,Executed
2025,Condor,2023,\"1,121\",Executed
2025,Heron,2023,133,Executed
2025,Nighthawk,2025,120,Forecast
2025,Nighthawk,2028,15K,Forecast
";

#[test]
fn test_clean_count() {
    assert_eq!(clean_count("10,000"), Some(10000.0));
    assert_eq!(clean_count("7.5K"), Some(7500.0));
    assert_eq!(clean_count("16k"), Some(16000.0));
    assert_eq!(clean_count("128"), Some(128.0));
    assert_eq!(clean_count(" 433 "), Some(433.0));
    assert_eq!(clean_count("abc"), None);
    assert_eq!(clean_count(""), None);
    assert_eq!(clean_count("nan"), None);
    assert_eq!(clean_count("NaN"), None);
    assert_eq!(clean_count("inf"), None);
    assert_eq!(clean_count("-infinity"), None);
    assert_eq!(clean_count("nank"), None);
}

#[test]
fn test_status_parsing() {
    assert_eq!("Executed".parse::<Status>().unwrap(), Status::Executed);
    assert_eq!(" forecast ".parse::<Status>().unwrap(), Status::Forecast);
    assert_eq!(
        "Cancelled".parse::<Status>().unwrap(),
        Status::Other("Cancelled".to_string())
    );
    assert_eq!(Status::from(" forecast "), Status::Forecast);
    assert_eq!(Status::from(" "), Status::Other(String::new()));
}

#[test]
fn test_load_renames_columns_and_drops_bad_rows() {
    let points = load_roadmap_from_reader(SAMPLE_ROADMAP.as_bytes()).unwrap();

    // "TBD" row is dropped
    assert_eq!(points.len(), 17);
    assert!(points.iter().all(|p| p.label != "Unknown"));

    let condor = &points[4];
    assert_eq!(condor.roadmap_year, "2020");
    assert_eq!(condor.label, "Condor");
    assert_eq!(condor.qubits, 1121.0);
    assert_eq!(condor.status, Status::Forecast);

    let last = points.last().unwrap();
    assert_eq!(last.qubits, 15000.0);
    assert_eq!(last.year, 2028.0);
}

#[test]
fn test_load_accepts_renamed_headers() {
    let csv = "Roadmap_Year,Label,Year,Qubits,Status\n2022,Osprey,2022,433,Executed\n";
    let points = load_roadmap_from_reader(csv.as_bytes()).unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].status, Status::Executed);
}

#[test]
fn test_load_drops_non_finite_cells() {
    let csv = "\
Roadmap_Year,Label,Year,Qubits,Status
2020,A,2020,nan,Executed
2020,B,2021,64,Executed
2020,C,nan,128,Forecast
2020,D,inf,256,Forecast
2020,E,2022,INF,Forecast
";
    let points = load_roadmap_from_reader(csv.as_bytes()).unwrap();
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].label, "B");
    assert!(points.iter().all(|p| p.year.is_finite() && p.qubits.is_finite()));
}

#[test]
fn test_missing_column() {
    let csv = "Roadmap_Year,Label,Qubits,Status\n2022,Osprey,433,Executed\n";
    let err = load_roadmap_from_reader(csv.as_bytes()).unwrap_err();
    assert!(matches!(err, RoadmapError::MissingColumn(c) if c == "year"));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = load_roadmap(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, RoadmapError::NotFound(_)));
}

#[test]
fn test_two_point_fit_doubling_period() {
    let fit = LinearFit::fit_log2(&[(2020.0, 27.0), (2022.0, 127.0)]).unwrap();
    let expected_slope = (127.0f64.log2() - 27.0f64.log2()) / 2.0;

    assert!((fit.slope - expected_slope).abs() < 1e-9);
    assert!((fit.doubling_months().unwrap() - 12.0 / expected_slope).abs() < 1e-9);
    assert!((fit.predict(2020.0) - 27.0).abs() < 1e-6);
    assert!((fit.predict(2022.0) - 127.0).abs() < 1e-6);
}

#[test]
fn test_fit_rejects_degenerate_subsets() {
    assert!(LinearFit::fit_log2(&[(2020.0, 27.0)]).is_none());
    assert!(LinearFit::fit_log2(&[(2020.0, 27.0), (2020.0, 65.0)]).is_none());
    assert!(LinearFit::fit_log2(&[(2020.0, 27.0), (2021.0, 0.0)]).is_none());
}

#[test]
fn test_trend_line_legend() {
    let a = RoadmapPoint {
        roadmap_year: "2022".to_string(),
        label: "Falcon".to_string(),
        year: 2020.0,
        qubits: 27.0,
        status: Status::Executed,
    };
    let b = RoadmapPoint {
        year: 2022.0,
        qubits: 127.0,
        label: "Eagle".to_string(),
        ..a.clone()
    };

    let line = TrendLine::fit(&[&a, &b], "2022", TrendGroup::Main, "2022 Roadmap").unwrap();
    assert_eq!(line.legend, "2022 Roadmap (Double: 10.7 months)");
    assert_eq!(line.start.0, 2020.0);
    assert_eq!(line.end.0, 2022.0);

    let flat = RoadmapPoint {
        qubits: 27.0,
        ..b.clone()
    };
    let line = TrendLine::fit(&[&a, &flat], "2022", TrendGroup::Main, "2022 Roadmap").unwrap();
    assert_eq!(line.legend, "2022 Roadmap (No Growth)");

    assert!(TrendLine::fit(&[&a], "2022", TrendGroup::Main, "2022 Roadmap").is_none());
}

#[test]
fn test_calculate_trends_subsets() {
    let points = load_roadmap_from_reader(SAMPLE_ROADMAP.as_bytes()).unwrap();
    let lines = calculate_trends(&points, &TrendConfig::default());

    let keys: Vec<(&str, TrendGroup)> = lines
        .iter()
        .map(|l| (l.roadmap_year.as_str(), l.group))
        .collect();
    assert_eq!(
        keys,
        vec![
            ("2020", TrendGroup::Main),
            ("2022", TrendGroup::Main),
            ("2025", TrendGroup::OldTrend),
            ("2025", TrendGroup::NewTrend),
        ]
    );

    // Heron is excluded from the 2022 fit, so its span is Falcon..Kookaburra
    assert_eq!(lines[1].start.0, 2019.0);
    assert_eq!(lines[1].end.0, 2025.0);

    // Old trend stops at the cutoff year
    assert_eq!(lines[2].end.0, 2023.0);
    assert!(lines[2].legend.starts_with("2025 Roadmap (Double:"));

    assert_eq!(lines[3].start.0, 2025.0);
    assert_eq!(lines[3].end.0, 2028.0);
    assert!(lines[3].legend.starts_with("2025 Roadmap - Nighthawk"));
}

#[test]
fn test_recent_year_falls_back_to_latest_edition() {
    let csv = "\
Roadmap_Year,Label,Year,Qubits,Status
2024,Eagle,2021,127,Executed
2024,Osprey,2022,433,Executed
2024,Nighthawk,2025,120,Forecast
2024,Nighthawk,2026,360,Forecast
";
    let points = load_roadmap_from_reader(csv.as_bytes()).unwrap();
    let lines = calculate_trends(&points, &TrendConfig::default());

    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|l| l.roadmap_year == "2024"));
    assert_eq!(lines[0].group, TrendGroup::OldTrend);
    assert!(lines[1].legend.starts_with("2024 Roadmap - Nighthawk"));
}

#[test]
fn test_single_point_subset_yields_no_line() {
    let csv = "Roadmap_Year,Label,Year,Qubits,Status\n2020,Falcon,2019,27,Executed\n";
    let points = load_roadmap_from_reader(csv.as_bytes()).unwrap();
    let lines = calculate_trends(&points, &TrendConfig::default());
    assert!(lines.is_empty());
}
