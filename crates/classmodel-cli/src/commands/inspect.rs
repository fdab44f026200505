//! Implementation of the `classmodel inspect` command.

use classmodel_core::application::{CatalogService, ClassSummary};

use crate::{
    cli::{InspectArgs, InspectFormat, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: InspectArgs, output: OutputManager) -> CliResult<()> {
    let service = CatalogService::new(super::builtin_catalog()?);
    let class = service.inspect(&args.class)?;

    let format = args.format.unwrap_or(match output.format() {
        OutputFormat::Json => InspectFormat::Json,
        _ => InspectFormat::Human,
    });

    match format {
        InspectFormat::Json => output.json(&class),
        InspectFormat::Human => {
            for line in describe(&class) {
                match line {
                    Line::Header(text) => output.header(&text)?,
                    Line::Note(text) => output.note(&text)?,
                    Line::Text(text) => output.print(&text)?,
                }
            }
            Ok(())
        }
    }
}

enum Line {
    Header(String),
    Note(String),
    Text(String),
}

fn describe(class: &ClassSummary) -> Vec<Line> {
    let mut lines = vec![Line::Header(class.signature())];
    if let Some(doc) = &class.doc {
        lines.push(Line::Note(format!("  {doc}")));
    }

    if !class.attributes.is_empty() {
        lines.push(Line::Text("Class attributes:".into()));
        for (name, value) in &class.attributes {
            lines.push(Line::Text(format!("  {name} = {value}")));
        }
    }

    if !class.params.is_empty() {
        lines.push(Line::Text("Constructor:".into()));
        for param in &class.params {
            let mut text = format!("  {}", param.name);
            if let Some(default) = &param.default {
                text.push_str(&format!(" = {default}"));
            }
            if let Some(key) = &param.stored_as {
                text.push_str(&format!(" -> {key}"));
            }
            lines.push(Line::Text(text));
        }
    }

    if !class.methods.is_empty() {
        lines.push(Line::Text(format!("Methods: {}", class.methods.join(", "))));
    }
    if !class.class_methods.is_empty() {
        lines.push(Line::Text(format!(
            "Class methods: {}",
            class.class_methods.join(", ")
        )));
    }
    if !class.properties.is_empty() {
        lines.push(Line::Text("Properties:".into()));
        for property in &class.properties {
            let access = if property.writable { "read-write" } else { "read-only" };
            lines.push(Line::Text(format!("  {} ({access})", property.name)));
        }
    }

    if class.has_demo {
        lines.push(Line::Note(format!(
            "Run `classmodel demo {}` to see it in action.",
            class.name.to_lowercase()
        )));
    }
    lines
}
