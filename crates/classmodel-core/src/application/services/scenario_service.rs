//! Scenario Service - executes scenario documents against a fresh session.
//!
//! Action steps that fail abort the run with their error. Expectation steps
//! that fail are recorded; in strict mode the run stops at the first one.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, instrument, warn};

use crate::{
    application::{ApplicationError, ports::ClassCatalog, services::ObjectSession},
    domain::{Scenario, Step, Value},
    error::{CoreError, CoreResult},
};

/// A failed expectation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Failure {
    /// 1-based step number.
    pub index: usize,
    pub step: String,
    pub reason: String,
}

/// Outcome of a scenario run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScenarioReport {
    pub name: Option<String>,
    pub lines: Vec<String>,
    pub steps_run: usize,
    pub expectations: usize,
    pub failures: Vec<Failure>,
    /// `false` when a strict run stopped early.
    pub completed: bool,
}

impl ScenarioReport {
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }

    /// First failure as an error, for callers that want `?` semantics.
    pub fn into_result(self) -> CoreResult<Self> {
        match self.failures.first() {
            None => Ok(self),
            Some(f) => Err(ApplicationError::ExpectationFailed {
                index: f.index,
                step: f.step.clone(),
                reason: f.reason.clone(),
            }
            .into()),
        }
    }
}

/// Service for scenario execution.
pub struct ScenarioService {
    catalog: Option<Arc<dyn ClassCatalog>>,
    strict: bool,
}

impl ScenarioService {
    /// Service whose scenarios may only use the classes they declare.
    pub fn new() -> Self {
        Self {
            catalog: None,
            strict: false,
        }
    }

    /// Let scenarios instantiate catalog classes they do not declare.
    pub fn with_catalog(mut self, catalog: Arc<dyn ClassCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Stop at the first failed expectation.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    #[instrument(skip_all, fields(scenario = scenario.name.as_deref().unwrap_or("<unnamed>")))]
    pub fn run(&self, scenario: &Scenario) -> CoreResult<ScenarioReport> {
        let mut session = match &self.catalog {
            Some(catalog) => ObjectSession::with_catalog(Arc::clone(catalog)),
            None => ObjectSession::new(),
        };

        for decl in &scenario.classes {
            session.define_class(decl.to_descriptor()?)?;
        }
        for decl in &scenario.instances {
            session.create(&decl.name, &decl.class, &decl.args)?;
            for (attribute, value) in &decl.attributes {
                session.set(&decl.name, attribute, value.clone())?;
            }
        }

        let mut report = ScenarioReport {
            name: scenario.name.clone(),
            completed: true,
            ..ScenarioReport::default()
        };

        for (i, step) in scenario.steps.iter().enumerate() {
            let index = i + 1;
            report.steps_run += 1;

            if step.is_expectation() {
                report.expectations += 1;
                match check(&session, step)? {
                    None => report.lines.push(format!("ok   {step}")),
                    Some(reason) => {
                        warn!(index, %step, %reason, "expectation failed");
                        report.lines.push(format!("FAIL {step}: {reason}"));
                        report.failures.push(Failure {
                            index,
                            step: step.to_string(),
                            reason,
                        });
                        if self.strict {
                            report.completed = false;
                            break;
                        }
                    }
                }
            } else {
                let line = apply(&mut session, step)?;
                debug!(index, %line, "step applied");
                report.lines.push(line);
            }
        }

        Ok(report)
    }
}

impl Default for ScenarioService {
    fn default() -> Self {
        Self::new()
    }
}

/// Perform an action step and describe it.
fn apply(session: &mut ObjectSession, step: &Step) -> CoreResult<String> {
    match step {
        Step::Set { target, attribute, value } => {
            session.set(target, attribute, value.clone())?;
        }
        Step::SetClass { class, attribute, value } => {
            session.set_class_attribute(class, attribute, value.clone())?;
        }
        Step::Delete { target, attribute } => {
            session.delete(target, attribute)?;
        }
        Step::DeleteClass { class, attribute } => {
            session.delete_class_attribute(class, attribute)?;
        }
        Step::Get { target, attribute } => {
            let resolved = session.lookup(target, attribute)?;
            return Ok(format!("{step} -> {} ({})", resolved.value, resolved.origin));
        }
        Step::Call { target, method, args } => {
            let out = session.call(target, method, args)?;
            return Ok(describe_call(step, &out));
        }
        Step::CallClass { class, method, args } => {
            let out = session.call_class(class, method, args)?;
            return Ok(describe_call(step, &out));
        }
        Step::Expect { .. } | Step::ExpectMissing { .. } => {}
    }
    Ok(step.to_string())
}

fn describe_call(step: &Step, out: &Value) -> String {
    if out.is_none() {
        step.to_string()
    } else {
        format!("{step} -> {out}")
    }
}

/// Evaluate an expectation: `None` when it holds, otherwise the reason.
///
/// Missing attributes are an expectation outcome, not an error; unknown
/// instances still abort the run.
fn check(session: &ObjectSession, step: &Step) -> CoreResult<Option<String>> {
    match step {
        Step::Expect { target, attribute, value } => match session.get(target, attribute) {
            Ok(actual) if actual.matches(value) => Ok(None),
            Ok(actual) => Ok(Some(format!("got {actual}"))),
            Err(e) if e.is_attribute_not_found() => Ok(Some("attribute is missing".into())),
            Err(e) => Err(e),
        },
        Step::ExpectMissing { target, attribute } => match session.get(target, attribute) {
            Ok(actual) => Ok(Some(format!("found {actual}"))),
            Err(e) if e.is_attribute_not_found() => Ok(None),
            Err(e) => Err(e),
        },
        other => Err(CoreError::Internal {
            message: format!("'{other}' is not an expectation"),
        }),
    }
}
