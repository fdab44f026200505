//! Implementation of the `classmodel list` command.

use classmodel_core::application::{CatalogService, ClassSummary};

use crate::{
    cli::{ListArgs, ListFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let service = CatalogService::new(super::builtin_catalog()?);
    let classes = service.list()?;

    let format = if output.is_json() { ListFormat::Json } else { args.format };

    match format {
        ListFormat::Table => {
            output.header("Built-in classes:")?;
            let width = classes.iter().map(|c| c.signature().len()).max().unwrap_or(0);
            for class in &classes {
                output.print(&format!(
                    "  {:<width$}  {}",
                    class.signature(),
                    class.doc.as_deref().unwrap_or("")
                ))?;
            }
        }

        ListFormat::Json => output.json(&classes)?,

        ListFormat::List => {
            for class in &classes {
                output.print(&class.name)?;
            }
        }

        ListFormat::Csv => {
            output.print("name,params,methods,properties,demo")?;
            for class in &classes {
                output.print(&csv_row(class))?;
            }
        }
    }

    Ok(())
}

fn csv_row(class: &ClassSummary) -> String {
    let params = class
        .params
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(";");
    let properties = class
        .properties
        .iter()
        .map(|p| p.name.as_str())
        .collect::<Vec<_>>()
        .join(";");
    format!(
        "{},{},{},{},{}",
        class.name,
        params,
        class.methods.join(";"),
        properties,
        class.has_demo
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use classmodel_adapters::builtin::car;

    #[test]
    fn csv_row_joins_lists_with_semicolons() {
        let entry = car::entry(4).unwrap();
        let summary = ClassSummary::from(&entry);
        assert_eq!(csv_row(&summary), "Car,model;color,puncture_tire,,true");
    }
}
