use assert_cmd::Command;

fn grain_evolver() -> Command {
    Command::cargo_bin("grain_evolver").unwrap()
}

#[test]
fn missing_subcommand_prints_usage() {
    let output = grain_evolver().output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: grain_evolver <COMMAND>"));
    for subcommand in ["run", "parse", "example", "presets"] {
        assert!(stderr.contains(subcommand));
    }
}

#[test]
fn presets_are_listed() {
    let output = grain_evolver().arg("presets").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for preset in ["3phase-iso", "3phase-mm4-cos", "3phase-mm4-octagon"] {
        assert!(stdout.contains(preset));
    }
}

#[test]
fn example_config_is_valid_json() {
    let output = grain_evolver().args(["example", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let cfg: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(cfg["simulation"], "3phase-iso");
    assert_eq!(cfg["label_mapping"], "legacy");
    assert_eq!(cfg["paths"]["general_report"], "xxx-report.txt");
}

#[test]
fn parse_prints_curves() {
    let output = grain_evolver()
        .args(["parse", "-g", "tests/data/xxx-report.txt", "-s", "tests/data/sides.txt", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let curves = doc["curves"].as_array().unwrap();
    assert_eq!(curves.len(), 12);

    let curve = |name: &str| curves.iter().find(|curve| curve["name"] == name).unwrap().clone();
    assert_eq!(curve("avgCurvaturePerGrainCurve")["xy"], serde_json::json!([[0.0, 2.0], [20.0, 1.5]]));
    assert_eq!(curve("totalNumberOfGrainsCurve")["xy"], serde_json::json!([[0.0, 10.0], [20.0, 8.0]]));
    assert_eq!(curve("avgSidesTotalCurve")["xy"], serde_json::json!([[0.0, 6.0], [20.0, 6.0]]));
    assert_eq!(curve("whiteAreaCurve")["style"], "-color blue");
}

#[test]
fn parse_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let output_path = dir.path().join("curves.yaml");
    grain_evolver()
        .args(["parse", "-g", "tests/data/xxx-report.txt", "-s", "tests/data/sides.txt", "-o"])
        .arg(&output_path)
        .assert()
        .success();

    let doc: serde_yaml::Value = serde_yaml::from_str(&std::fs::read_to_string(&output_path).unwrap()).unwrap();
    assert_eq!(doc["curves"].as_sequence().unwrap().len(), 12);
}

#[test]
fn malformed_report_fails_with_line_number() {
    let output = grain_evolver()
        .args(["parse", "-g", "tests/data/bad-report.txt", "-s", "tests/data/sides.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Parse Error on line 2"));
    assert!(stderr.contains("total energy at token 2"));
}

#[test]
fn run_halts_when_geometry_tool_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().to_str().unwrap();
    let cfg_path = dir.path().join("run.yaml");
    std::fs::write(&cfg_path, format!("\
number_of_grains: 10
simulation: 3phase-iso
number_of_iterations: 2
output_path: {root}/out.json
paths:
  working_dir: {root}
  bin_dir: {root}/no-bin
")).unwrap();

    let output = grain_evolver().arg("run").arg("--cfg").arg(&cfg_path).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("SIMULATION ERROR"));
    assert!(stderr.contains("vor2fe"));
    assert!(!dir.path().join("out.json").exists());
}
