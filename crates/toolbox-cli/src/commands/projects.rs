//! Implementation of the `tolgee-toolbox projects` command.
//!
//! Shows what the project loader resolved and which source files discovery
//! finds for each project. Never contacts Tolgee.

use serde::Serialize;

use toolbox_adapters::{LocalFilesystem, TomlProjectLoader};
use toolbox_core::{
    application::{FileDiscovery, ProjectLoader},
    domain::{Locale, MessageFile, Project, ProjectFile},
};

use crate::{
    cli::{GlobalArgs, ListFormat, ProjectsArgs},
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct ProjectView {
    id: u64,
    namespace: Option<String>,
    path: String,
    api_url: String,
    missing_namespace_fail: bool,
    sources: Vec<EntryView>,
    targets: Vec<EntryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<FileView>>,
}

#[derive(Debug, Serialize)]
struct EntryView {
    files: String,
    format: String,
    locale: Option<Locale>,
    excluded_locales: Vec<Locale>,
}

#[derive(Debug, Serialize)]
struct FileView {
    path: String,
    locale: Locale,
    format: String,
}

impl<F: ToString> From<&ProjectFile<F>> for EntryView {
    fn from(entry: &ProjectFile<F>) -> Self {
        Self {
            files: entry.files.template().to_string(),
            format: entry.format.to_string(),
            locale: entry.locale.clone(),
            excluded_locales: entry.excluded_locales.iter().cloned().collect(),
        }
    }
}

impl From<&MessageFile> for FileView {
    fn from(file: &MessageFile) -> Self {
        Self {
            path: file.path.display().to_string(),
            locale: file.locale.clone(),
            format: file.format.to_string(),
        }
    }
}

fn view(project: &Project, files: Option<Vec<FileView>>) -> ProjectView {
    ProjectView {
        id: project.project_id,
        namespace: project.namespace.clone(),
        path: project.path.display().to_string(),
        api_url: project.api_url.clone(),
        missing_namespace_fail: project.missing_namespace_fail,
        sources: project.sources.iter().map(EntryView::from).collect(),
        targets: project.targets.iter().map(EntryView::from).collect(),
        files,
    }
}

pub fn execute(args: ProjectsArgs, global: GlobalArgs, output: OutputManager) -> CliResult<()> {
    let projects = TomlProjectLoader::new().load_projects(&global.base_path)?;
    let filesystem = LocalFilesystem::new();
    let discovery = FileDiscovery::new(&filesystem);

    let mut views = Vec::with_capacity(projects.len());
    for project in &projects {
        let files = if args.no_files {
            None
        } else {
            let found = discovery.find_files(&project.path, &project.sources)?;
            Some(found.iter().map(FileView::from).collect())
        };
        views.push(view(project, files));
    }

    match args.format {
        ListFormat::Json => {
            // Bypasses OutputManager: JSON must stay parseable in pipes.
            let json = serde_json::to_string_pretty(&views).unwrap_or_else(|_| "[]".into());
            println!("{json}");
        }
        ListFormat::Table => print_table(&views, &output)?,
    }
    Ok(())
}

fn print_table(views: &[ProjectView], output: &OutputManager) -> CliResult<()> {
    if views.is_empty() {
        output.warning("No projects configured")?;
        return Ok(());
    }

    for project in views {
        let namespace = project.namespace.as_deref().unwrap_or("(default)");
        output.header(&format!(
            "Project {} [namespace {namespace}] at {}",
            project.id, project.path
        ))?;
        output.print(&format!("  API: {}", project.api_url))?;

        for (kind, entries) in [("source", &project.sources), ("target", &project.targets)] {
            for entry in entries {
                let locale = entry
                    .locale
                    .as_ref()
                    .map(|l| format!(" locale={l}"))
                    .unwrap_or_default();
                output.print(&format!("  {kind}: {} ({}){locale}", entry.files, entry.format))?;
            }
        }

        if let Some(files) = &project.files {
            if files.is_empty() {
                output.warning("  no source files found")?;
            }
            for file in files {
                output.detail(&format!("{} [{}]", file.path, file.locale))?;
            }
        }
    }
    Ok(())
}
