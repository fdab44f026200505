//! Integration tests for the `classmodel` binary.

use std::io::Write;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary with colour off and a scratch working directory so no stray
/// `.env` or local config leaks in.
fn classmodel(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("classmodel").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("CLASSMODEL_SCENARIO__STRICT")
        .env_remove("CLASSMODEL_OUTPUT__FORMAT")
        .arg("--no-color");
    cmd
}

fn scenario(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../scenarios")
        .join(name)
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn version_flag() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_flag_is_usage_error() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir).args(["list", "--bogus"]).assert().code(2);
}

// ── list / inspect ────────────────────────────────────────────────────────────

#[test]
fn list_shows_signatures() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Built-in classes:"))
        .stdout(predicate::str::contains("Bicycle(owner, color, radius=2)"))
        .stdout(predicate::str::contains("ImprovedRobot(name)"));
}

#[test]
fn list_json_has_every_class() {
    let dir = TempDir::new().unwrap();
    let out = classmodel(&dir)
        .args(["list", "--format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let classes: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let names: Vec<_> = classes
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(names.len(), 12);
    assert_eq!(names[0], "EmptyClass");
    assert_eq!(names[11], "Sheep");
}

#[test]
fn inspect_is_case_insensitive() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .args(["inspect", "robot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Robot(name)"))
        .stdout(predicate::str::contains("obeys_owner = True"));
}

#[test]
fn inspect_json_reports_properties() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .args(["inspect", "Circle", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"area\""))
        .stdout(predicate::str::contains("\"writable\": false"));
}

#[test]
fn inspect_unknown_class_is_not_found() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .args(["inspect", "Unicorn"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unicorn"))
        .stderr(predicate::str::contains("Suggestions:"));
}

// ── demo ──────────────────────────────────────────────────────────────────────

#[test]
fn demo_robot_replays_the_rebellion() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .args(["demo", "robot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("The machines rebel!"))
        .stdout(predicate::str::contains("but rebels remain"));
}

#[test]
fn demo_all_runs_through_sheep() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .args(["demo", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bicycle"))
        .stdout(predicate::str::contains("3 sheep in the flock!"))
        .stdout(predicate::str::contains("-------------------"));
}

#[test]
fn demo_separator_from_environment() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .env("CLASSMODEL_DEMO__SEPARATOR", "~~~~~")
        .args(["demo", "--all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("~~~~~"));
}

#[test]
fn demo_titles_can_be_hidden_by_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write_file(&dir, "cfg.toml", "[demo]\nshow_titles = false\n");
    classmodel(&dir)
        .arg("--config")
        .arg(&config)
        .args(["demo", "sheep"])
        .assert()
        .success()
        .stdout(predicate::str::diff("3 sheep in the flock!\n"));
}

#[test]
fn demo_unknown_is_not_found() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .args(["demo", "unicorn"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("No demonstration named 'unicorn'"));
}

#[test]
fn quiet_suppresses_demo_output() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .args(["-q", "demo", "robot"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

// ── run ───────────────────────────────────────────────────────────────────────

#[test]
fn run_sample_scenario_passes() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .arg("run")
        .arg(scenario("robot_rebellion.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("ok   expect c3po.obeys_owner == False"))
        .stdout(predicate::str::contains("c3po.obeys_owner -> False (class)"))
        .stdout(predicate::str::contains("10 step(s), 5 expectation(s), 0 failed"));
}

#[test]
fn run_builtin_scenario_passes() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .arg("run")
        .arg(scenario("builtin_classes.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Sheep.total() -> 1"));
}

const FAILING: &str = r#"
[[class]]
name = "Car"
attributes = { wheels = 4 }

[[instance]]
name = "car"
class = "Car"

[[step]]
op = "expect"
target = "car"
attribute = "wheels"
value = 3

[[step]]
op = "expect"
target = "car"
attribute = "doors"
value = 5
"#;

#[test]
fn failed_expectation_exits_with_three() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "failing.toml", FAILING);
    classmodel(&dir)
        .arg("run")
        .arg(&file)
        .assert()
        .code(3)
        .stdout(predicate::str::contains("FAIL expect car.wheels == 3: got 4"))
        .stdout(predicate::str::contains("attribute is missing"))
        .stdout(predicate::str::contains("2 failed"));
}

#[test]
fn strict_run_stops_at_first_failure() {
    let dir = TempDir::new().unwrap();
    let file = write_file(&dir, "failing.toml", FAILING);
    classmodel(&dir)
        .arg("run")
        .arg(&file)
        .arg("--strict")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("1 failed (stopped early)"))
        .stdout(predicate::str::contains("doors").not());
}

#[test]
fn run_missing_file_is_user_error() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .args(["run", "nope.toml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to load scenario"));
}

#[test]
fn run_directory_is_user_error() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .arg("run")
        .arg(dir.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("is a directory"));
}

#[test]
fn run_without_expectations_says_so() {
    let dir = TempDir::new().unwrap();
    let file = write_file(
        &dir,
        "reads.toml",
        "[[class]]\nname = \"Car\"\nattributes = { wheels = 4 }\n\n\
         [[instance]]\nname = \"car\"\nclass = \"Car\"\n\n\
         [[step]]\nop = \"get\"\ntarget = \"car\"\nattribute = \"wheels\"\n",
    );
    classmodel(&dir)
        .arg("run")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("No expectations in this scenario"))
        .stdout(predicate::str::contains("1 step(s), 0 expectation(s), 0 failed"));
}

#[test]
fn run_unknown_instance_is_not_found() {
    let dir = TempDir::new().unwrap();
    let file = write_file(
        &dir,
        "ghost.toml",
        "[[step]]\nop = \"get\"\ntarget = \"ghost\"\nattribute = \"x\"\n",
    );
    classmodel(&dir)
        .arg("run")
        .arg(&file)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("ghost"));
}

// ── config / completions ──────────────────────────────────────────────────────

#[test]
fn config_get_reads_environment() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .env("CLASSMODEL_SCENARIO__STRICT", "true")
        .args(["config", "get", "scenario.strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scenario.strict = true"));
}

#[test]
fn config_get_unknown_key_is_config_error() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .args(["config", "get", "nope.nothing"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn config_list_prints_sections() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[demo]"))
        .stdout(predicate::str::contains("show_titles = true"));
}

#[test]
fn missing_explicit_config_file_exits_with_four() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .args(["--config", "missing.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn shell_completions() {
    let dir = TempDir::new().unwrap();
    classmodel(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("classmodel"));
}
