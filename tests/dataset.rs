use measplot::data::import::parse_variable_field;
use measplot::{AxisSelection, MeasurementDataset, PlotPoint, Variable, ViewerError};

const TEMP_TIME: &str = r#"{
    "variables": [{"name": "temp", "unit": "C"}, {"name": "time", "unit": "s"}],
    "data_points": [{"temp": 10, "time": 0}, {"temp": 12, "time": 1}]
}"#;

#[test]
fn projects_selected_variables_in_order() {
    let ds = MeasurementDataset::from_json(TEMP_TIME).unwrap();
    let pts = ds.project(&AxisSelection::new("time", "temp"));
    assert_eq!(pts, vec![PlotPoint::new(0.0, 10.0), PlotPoint::new(1.0, 12.0)]);
}

#[test]
fn same_variable_on_both_axes_is_allowed() {
    let ds = MeasurementDataset::from_json(TEMP_TIME).unwrap();
    let pts = ds.project(&AxisSelection::new("temp", "temp"));
    assert_eq!(pts, vec![PlotPoint::new(10.0, 10.0), PlotPoint::new(12.0, 12.0)]);
}

#[test]
fn missing_reading_projects_to_nan() {
    let ds = MeasurementDataset::from_json(
        r#"{"variables": [{"name": "a", "unit": "m"}, {"name": "b", "unit": "s"}],
            "data_points": [{"a": 1, "b": 2}, {"a": 3}]}"#,
    )
    .unwrap();
    let pts = ds.project(&AxisSelection::new("a", "b"));
    assert_eq!(pts.len(), 2);
    assert!(pts[0].is_finite());
    assert_eq!(pts[1].x, 3.0);
    assert!(pts[1].y.is_nan());
    assert!(!pts[1].is_finite());
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = MeasurementDataset::from_json("{not json").unwrap_err();
    assert!(matches!(err, ViewerError::Parse(_)));
}

#[test]
fn csv_header_cells_become_variables() {
    let csv = "temp (C),time (s)\n10,0\n12.5,1\n";
    let ds = MeasurementDataset::from_csv_reader("run", csv.as_bytes()).unwrap();
    assert_eq!(ds.name.as_deref(), Some("run"));
    assert_eq!(
        ds.variables,
        vec![Variable::new("temp", "C"), Variable::new("time", "s")]
    );
    let pts = ds.project(&AxisSelection::new("time", "temp"));
    assert_eq!(pts, vec![PlotPoint::new(0.0, 10.0), PlotPoint::new(1.0, 12.5)]);
}

#[test]
fn csv_keeps_non_numeric_cells_verbatim() {
    let csv = "sample (id),mass (g)\nA1,3.5\n";
    let ds = MeasurementDataset::from_csv_reader("s", csv.as_bytes()).unwrap();
    let p = &ds.data_points[0];
    assert_eq!(p.get("sample").and_then(|v| v.as_str()), Some("A1"));
    assert_eq!(p.value("mass"), Some(3.5));
}

#[test]
fn csv_header_without_unit_is_rejected() {
    let csv = "temp,time (s)\n10,0\n";
    let err = MeasurementDataset::from_csv_reader("bad", csv.as_bytes()).unwrap_err();
    match err {
        ViewerError::CsvField(field) => assert_eq!(field, "temp"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn variable_field_parsing() {
    assert_eq!(parse_variable_field(" V (mV) ").unwrap(), Variable::new("V", "mV"));
    assert!(parse_variable_field("too many (parts here)").is_err());
    assert!(parse_variable_field("").is_err());
}

#[test]
fn csv_with_repeated_variable_name_is_rejected() {
    let csv = "a (m),a (s)\n1,2\n";
    let err = MeasurementDataset::from_csv_reader("dup", csv.as_bytes()).unwrap_err();
    match err {
        ViewerError::DuplicateVariable(name) => assert_eq!(name, "a"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn json_with_repeated_variable_name_is_rejected() {
    let err = MeasurementDataset::from_json(
        r#"{"variables": [{"name": "v", "unit": "V"}, {"name": "v", "unit": "mV"}],
            "data_points": []}"#,
    )
    .unwrap_err();
    assert!(matches!(err, ViewerError::DuplicateVariable(ref n) if n == "v"));
    assert!(err.to_string().contains("Duplicate variable names!"));
}
