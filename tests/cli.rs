use std::process::Command;

fn run(args: &[&str]) -> (String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_waypoint_route"))
        .args(args)
        .env("RUST_LOG", "warn")
        .output()
        .expect("run CLI");

    assert!(
        output.status.success(),
        "cli exited with {}: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr)
    );
    (
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn coords_text_report_lists_each_segment_and_total() {
    let (stdout, _) = run(&["coords", "0,0", "0,1", "1,1"]);
    assert_eq!(
        stdout,
        "Distances:\n\
         (0,0) → (0,1) = 111.19 km\n\
         (0,1) → (1,1) = 111.19 km\n\
         Total Distance: 222.38 km\n"
    );
}

#[test]
fn southern_hemisphere_coordinates_are_accepted() {
    let (stdout, _) = run(&["coords", "-33.8688,151.2093", "-37.8136,144.9631"]);
    assert!(
        stdout.starts_with("Distances:\n(-33.8688,151.2093) → (-37.8136,144.9631) = "),
        "unexpected output: {}",
        stdout
    );
}

#[test]
fn options_before_negative_rows_still_apply() {
    let (stdout, _) = run(&["coords", "--format", "json", "-1,-1", "-1,-2"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");
    assert_eq!(value["waypoints"].as_array().unwrap().len(), 2);
    assert_eq!(value["report"]["status"], "route");
}

#[test]
fn unparseable_rows_are_silently_dropped() {
    let (stdout, _) = run(&["coords", "16.5,80.6", "bad,80.6"]);
    assert_eq!(stdout, "Add at least 2 points.\n");
}

#[test]
fn json_output_carries_waypoints_and_report() {
    let (stdout, _) = run(&["coords", "--format", "json", "16.5,80.6", "bad,80.6", "17.0,81.0"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid json");

    let labels: Vec<&str> = value["waypoints"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["label"].as_str().unwrap())
        .collect();
    assert_eq!(labels, vec!["(16.5,80.6)", "(17,81)"]);
    assert_eq!(value["report"]["status"], "route");
    assert_eq!(value["report"]["segments"].as_array().unwrap().len(), 1);
}

#[test]
fn geojson_output_has_markers_line_and_bbox() {
    let (stdout, _) = run(&["coords", "--format", "geojson", "0,0", "2,4"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("valid geojson");

    assert_eq!(value["type"], "FeatureCollection");
    assert_eq!(value["features"].as_array().unwrap().len(), 3);
    assert_eq!(value["bbox"].as_array().unwrap().len(), 4);
}

#[test]
fn file_rows_come_before_argument_rows() {
    let path = std::env::temp_dir().join(format!("waypoint_route_cli_{}.csv", std::process::id()));
    std::fs::write(&path, "# start\n0,0\n").expect("write fixture");

    let (stdout, _) = run(&["coords", "--file", path.to_str().unwrap(), "0,1"]);
    std::fs::remove_file(&path).ok();

    assert!(stdout.starts_with("Distances:\n(0,0) → (0,1) = 111.19 km\n"));
}
