//! Implementation of the `tolgee-toolbox pull` command.

use toolbox_adapters::LocalFilesystem;
use toolbox_core::application::{PullReport, PullService};

use crate::{
    cli::{GlobalArgs, SyncArgs},
    commands::{load_projects, tolgee_client},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(
    args: SyncArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let client = tolgee_client(&config)?;
    let projects = load_projects(&global.base_path, &args.projects)?;
    let service = PullService::new(Box::new(LocalFilesystem::new()), Box::new(client));

    let progress = output.progress(projects.len());
    let mut total = PullReport::default();
    for project in &projects {
        progress.set_message(format!("Pulling {}", project.label()));
        let report = match service.pull(project) {
            Ok(report) => report,
            Err(e) => {
                progress.abandon();
                return Err(e.into());
            }
        };
        progress.inc(1);
        total.merge(report);
    }
    progress.finish_and_clear();

    for file in &total.written {
        output.detail(&format!("{} ({})", file.path.display(), file.locale))?;
    }
    output.success(&format!(
        "Pulled {} file(s) for {} project(s)",
        total.written.len(),
        projects.len()
    ))?;
    if total.excluded > 0 {
        output.print(&format!("Skipped {} excluded locale(s)", total.excluded))?;
    }
    Ok(())
}
