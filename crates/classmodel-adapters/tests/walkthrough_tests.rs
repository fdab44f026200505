//! End-to-end tests: built-in catalog, demos and TOML scenarios together.

use std::io::Write;
use std::sync::Arc;

use classmodel_adapters::{InMemoryCatalog, TomlScenarioLoader};
use classmodel_core::prelude::*;

fn catalog() -> Arc<dyn ClassCatalog> {
    Arc::new(InMemoryCatalog::with_builtin().unwrap())
}

fn demo_lines(name: &str) -> Vec<String> {
    DemoService::new(catalog())
        .run(name)
        .unwrap()
        .transcript
        .into_lines()
}

#[test]
fn every_builtin_demo_runs() {
    let runs = DemoService::new(catalog()).run_all().unwrap();
    assert_eq!(runs.len(), 12);
    assert!(runs.iter().all(|r| !r.transcript.lines().is_empty()));
    assert!(runs.iter().all(|r| r.title.is_some()));
}

#[test]
fn robot_demo_follows_the_rebellion() {
    assert_eq!(
        demo_lines("robot"),
        [
            "True",
            "True",
            "False",
            "True",
            "The machines rebel!",
            "False",
            "False",
            "False",
            "The rebellion has been quelled... but rebels remain",
            "False",
            "True",
            "True",
        ]
    );
}

#[test]
fn improved_robot_demo_keeps_snapshots() {
    assert_eq!(
        demo_lines("ImprovedRobot"),
        ["True", "The machines rebel!", "True", "False"]
    );
}

#[test]
fn circle_demo_prints_rounded_values() {
    assert_eq!(demo_lines("Circle"), ["3.14", "12.57", "6.28", "12.57"]);
}

#[test]
fn sheep_demo_counts_the_flock() {
    assert_eq!(demo_lines("Sheep"), ["3 sheep in the flock!"]);
}

#[test]
fn dog_demo_lists_tricks() {
    assert_eq!(
        demo_lines("Dog"),
        ["Toby", "[]", "['Give a paw', 'Play dead']"]
    );
}

#[test]
fn spy_demo_cannot_read_the_real_name_directly() {
    let lines = demo_lines("Spy");
    assert!(lines[0].starts_with("AttributeError:"));
    assert!(lines[0].contains("has no attribute"));
    assert_eq!(lines.last().map(String::as_str), Some("Manuel Rojo Perez"));
}

#[test]
fn restaurant_demo_unshadows_after_delete() {
    assert_eq!(
        demo_lines("Restaurant"),
        ["Gijón", "True", "Gijón", "False", "True"]
    );
}

#[test]
fn unknown_demo_is_reported() {
    let err = DemoService::new(catalog()).run("Unicorn").unwrap_err();
    assert!(matches!(
        err,
        CoreError::Application(classmodel_core::application::ApplicationError::DemoNotFound { .. })
    ));
}

#[test]
fn catalog_inspect_ignores_case() {
    let service = CatalogService::new(catalog());
    let summary = service.inspect("spy").unwrap();
    assert_eq!(summary.name, "Spy");
    assert_eq!(summary.signature(), "Spy(real_name, code_name)");
    assert!(summary.has_demo);
}

const SCENARIO: &str = r#"
name = "catalog robots"

[[instance]]
name = "r1"
class = "Robot"
args = ["R2D2"]

[[instance]]
name = "r2"
class = "Robot"
args = ["C3PO"]

[[step]]
op = "set"
target = "r1"
attribute = "obeys_owner"
value = false

[[step]]
op = "set_class"
class = "Robot"
attribute = "obeys_owner"
value = false

[[step]]
op = "expect"
target = "r2"
attribute = "obeys_owner"
value = false

[[step]]
op = "delete"
target = "r1"
attribute = "obeys_owner"

[[step]]
op = "expect"
target = "r1"
attribute = "obeys_owner"
value = false

[[step]]
op = "call_class"
class = "Sheep"
method = "total"
"#;

#[test]
fn scenario_file_runs_against_builtin_classes() {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(SCENARIO.as_bytes()).unwrap();

    let scenario = TomlScenarioLoader::new().load(file.path()).unwrap();
    assert_eq!(scenario.name.as_deref(), Some("catalog robots"));

    let report = ScenarioService::new()
        .with_catalog(catalog())
        .run(&scenario)
        .unwrap();

    assert!(report.passed(), "failures: {:?}", report.failures);
    assert!(report.completed);
    assert_eq!(report.expectations, 2);
    assert_eq!(report.steps_run, 6);
}

#[test]
fn failed_expectation_is_reported_with_its_step() {
    let text = r#"
[[instance]]
name = "kebab"
class = "Restaurant"

[[step]]
op = "expect"
target = "kebab"
attribute = "open"
value = false
"#;
    let scenario = TomlScenarioLoader::new().parse("inline", text).unwrap();
    let report = ScenarioService::new()
        .with_catalog(catalog())
        .run(&scenario)
        .unwrap();

    assert!(!report.passed());
    assert_eq!(report.failures[0].index, 1);
    assert!(report.failures[0].reason.contains("True"));
}
