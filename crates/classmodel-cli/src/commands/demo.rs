//! Implementation of the `classmodel demo` command.

use tracing::instrument;

use classmodel_core::application::{DemoRun, DemoService};

use crate::{cli::DemoArgs, config::AppConfig, error::CliResult, output::OutputManager};

#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("all")))]
pub fn execute(args: DemoArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service =
        DemoService::new(super::builtin_catalog()?).with_separator(config.demo.separator.clone());

    let runs = match &args.name {
        Some(name) if !args.all => vec![service.run(name)?],
        _ => service.run_all()?,
    };

    if output.is_json() {
        return output.json(&runs);
    }

    for (i, run) in runs.iter().enumerate() {
        if i > 0 {
            output.print("")?;
            output.print(&config.demo.separator)?;
            output.print("")?;
        }
        render(run, config.demo.show_titles, &output)?;
    }
    Ok(())
}

fn render(run: &DemoRun, show_titles: bool, output: &OutputManager) -> CliResult<()> {
    if show_titles {
        output.header(&run.name)?;
        if let Some(title) = &run.title {
            output.note(title)?;
        }
    }
    for line in run.transcript.lines() {
        output.print(line)?;
    }
    Ok(())
}
