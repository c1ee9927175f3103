//! Implementation of `tolgee-toolbox push` and `push-single-step`.

use toolbox_adapters::LocalFilesystem;
use toolbox_core::{
    application::{PushReport, PushService},
    domain::Project,
    error::ToolboxResult,
};

use crate::{
    cli::{GlobalArgs, SyncArgs},
    commands::{load_projects, tolgee_client},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Which import flow to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportMode {
    TwoStep,
    SingleStep,
}

impl ImportMode {
    fn run(self, service: &PushService, project: &Project) -> ToolboxResult<PushReport> {
        match self {
            Self::TwoStep => service.push(project),
            Self::SingleStep => service.push_single_step(project),
        }
    }
}

pub fn execute(
    args: SyncArgs,
    mode: ImportMode,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let client = tolgee_client(&config)?;
    let projects = load_projects(&global.base_path, &args.projects)?;
    let service = PushService::new(Box::new(LocalFilesystem::new()), Box::new(client));

    let progress = output.progress(projects.len());
    let mut total = PushReport::default();
    let mut empty = Vec::new();
    for project in &projects {
        progress.set_message(format!("Pushing {}", project.label()));
        let report = match mode.run(&service, project) {
            Ok(report) => report,
            Err(e) => {
                progress.abandon();
                return Err(e.into());
            }
        };
        if report.uploaded.is_empty() {
            empty.push(project.label());
        }
        progress.inc(1);
        total.merge(report);
    }
    progress.finish_and_clear();

    for label in &empty {
        output.warning(&format!("No source files found for project {label}"))?;
    }
    for file in &total.uploaded {
        output.detail(&format!("{} ({})", file.path.display(), file.locale))?;
    }
    output.success(&format!(
        "Pushed {} file(s) for {} project(s)",
        total.uploaded.len(),
        projects.len()
    ))?;
    if total.excluded > 0 {
        output.print(&format!("Skipped {} file(s) with excluded locales", total.excluded))?;
    }
    Ok(())
}
