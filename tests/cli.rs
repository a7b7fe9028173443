use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary against an empty config home so user settings never leak in.
fn ol3ditor_cmd(config_home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ol3ditor").expect("binary exists");
    cmd.env("XDG_CONFIG_HOME", config_home.path());
    cmd
}

#[test]
fn help_prints_usage() {
    let temp = TempDir::new().unwrap();
    ol3ditor_cmd(&temp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Replay pointer events through a map measuring tool",
        ));
}

#[test]
fn length_script_from_stdin_prints_result() {
    let temp = TempDir::new().unwrap();
    ol3ditor_cmd(&temp)
        .write_stdin("click 0 0\nmove 3 4\nclick 3 4\ndblclick 3 10\n")
        .assert()
        .success()
        .stdout("11 m\n");
}

#[test]
fn angle_script_from_file_finishes_on_third_click() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("angle.txt");
    std::fs::write(
        &script,
        "# center, start, end\nclick 0 0\nclick 1 0\nmove 0 1\nclick 0 1\n",
    )
    .unwrap();

    ol3ditor_cmd(&temp)
        .args(["--mode", "angle", "--events"])
        .arg(&script)
        .assert()
        .success()
        .stdout("90°\n");
}

#[test]
fn area_results_switch_units() {
    let temp = TempDir::new().unwrap();
    ol3ditor_cmd(&temp)
        .args(["-m", "area"])
        .write_stdin("click 0 0\nclick 200 0\nclick 200 100\ndblclick 0 100\n")
        .assert()
        .success()
        .stdout("0.02 km²\n");
}

#[test]
fn json_output_reports_every_update() {
    let temp = TempDir::new().unwrap();
    ol3ditor_cmd(&temp)
        .arg("--json")
        .write_stdin("move 5 5\nclick 0 0\ndrag 9 9\ndblclick 0 2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Click to start measure"))
        .stdout(predicate::str::contains("\"result\":\"2 m\""))
        .stdout(predicate::str::contains("\"consumed\":true"));
}

#[test]
fn custom_config_changes_start_label() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("custom.toml");
    std::fs::write(&config, "[labels]\nstart = \"Pick a vertex\"\n").unwrap();

    ol3ditor_cmd(&temp)
        .arg("--json")
        .arg("--config")
        .arg(&config)
        .write_stdin("move 1 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pick a vertex"));
}

#[test]
fn unknown_mode_is_rejected() {
    let temp = TempDir::new().unwrap();
    ol3ditor_cmd(&temp)
        .args(["--mode", "volume"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown measure mode 'volume'"));
}

#[test]
fn malformed_script_reports_line() {
    let temp = TempDir::new().unwrap();
    ol3ditor_cmd(&temp)
        .write_stdin("click 0 0\nzoom 1 1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: unknown event kind 'zoom'"));
}

#[test]
fn unfinished_measurement_prints_nothing() {
    let temp = TempDir::new().unwrap();
    ol3ditor_cmd(&temp)
        .write_stdin("click 0 0\nclick 10 0\nmove 20 0\n")
        .assert()
        .success()
        .stdout("");
}
