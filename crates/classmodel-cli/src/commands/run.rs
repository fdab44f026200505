//! Implementation of the `classmodel run` command.
//!
//! Loads a TOML scenario, executes it against a session backed by the
//! built-in catalog, prints the step transcript and fails with exit code 3
//! when any expectation did not hold.

use tracing::{info, instrument};

use classmodel_adapters::TomlScenarioLoader;
use classmodel_core::application::{ScenarioLoader, ScenarioReport, ScenarioService};

use crate::{
    cli::RunArgs,
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: RunArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    if args.file.is_dir() {
        return Err(CliError::InvalidInput {
            message: format!("'{}' is a directory, not a scenario file", args.file.display()),
            source: None,
        });
    }
    let scenario = TomlScenarioLoader::new().load(&args.file)?;
    let strict = args.strict || config.scenario.strict;

    let report = ScenarioService::new()
        .with_catalog(super::builtin_catalog()?)
        .strict(strict)
        .run(&scenario)?;

    info!(
        steps = report.steps_run,
        expectations = report.expectations,
        failures = report.failures.len(),
        "scenario finished"
    );

    if output.is_json() {
        output.json(&report)?;
    } else {
        render(&report, &output)?;
    }

    report.into_result()?;
    Ok(())
}

fn render(report: &ScenarioReport, output: &OutputManager) -> CliResult<()> {
    if let Some(name) = &report.name {
        output.header(name)?;
    }
    for line in &report.lines {
        if line.starts_with("FAIL") {
            output.error(line)?;
        } else {
            output.print(line)?;
        }
    }

    if report.expectations == 0 {
        output.info("No expectations in this scenario; nothing was checked")?;
    }

    let summary = summary(report);
    if report.passed() {
        output.success(&summary)?;
    } else {
        output.error(&summary)?;
    }
    Ok(())
}

fn summary(report: &ScenarioReport) -> String {
    let mut text = format!(
        "{} step(s), {} expectation(s), {} failed",
        report.steps_run,
        report.expectations,
        report.failures.len()
    );
    if !report.completed {
        text.push_str(" (stopped early)");
    }
    text
}
