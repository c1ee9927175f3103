//! Pull Service - downloads translations into the local target files.
//!
//! For every Tolgee language and every target entry of a project:
//! 1. Skip the language if the entry excludes it, or if the entry is a
//!    literal file bound to another locale
//! 2. Render the target path for the language
//! 3. Export the language from Tolgee and write it to that path

use std::path::PathBuf;

use tracing::{debug, info, instrument, trace, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{ExportRequest, Filesystem, TranslationServer},
    },
    domain::{Locale, Project, ProjectLanguage, TargetFile},
    error::ToolboxResult,
};

/// A file written by a pull.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PulledFile {
    pub path: PathBuf,
    pub locale: Locale,
    pub bytes: usize,
}

/// Outcome of pulling one project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullReport {
    pub written: Vec<PulledFile>,
    /// Language/entry pairs skipped because the entry excludes the language.
    pub excluded: usize,
}

impl PullReport {
    pub fn merge(&mut self, other: PullReport) {
        self.written.extend(other.written);
        self.excluded += other.excluded;
    }
}

pub struct PullService {
    filesystem: Box<dyn Filesystem>,
    server: Box<dyn TranslationServer>,
}

impl PullService {
    pub fn new(filesystem: Box<dyn Filesystem>, server: Box<dyn TranslationServer>) -> Self {
        Self { filesystem, server }
    }

    /// Pull every language of `project` into its target files.
    #[instrument(skip_all, fields(project = %project.label()))]
    pub fn pull(&self, project: &Project) -> ToolboxResult<PullReport> {
        let languages = self.server.project_languages(project)?;
        self.check_namespace(project)?;

        let mut report = PullReport::default();
        for language in &languages {
            for target in &project.targets {
                if !target.covers(&language.locale) {
                    continue;
                }
                if target.is_excluded(&language.locale) {
                    trace!(locale = %language.locale, template = target.files.template(), "locale excluded");
                    report.excluded += 1;
                    continue;
                }
                report.written.push(self.pull_one(project, language, target)?);
            }
        }

        info!(
            written = report.written.len(),
            excluded = report.excluded,
            "Pull completed"
        );
        Ok(report)
    }

    fn check_namespace(&self, project: &Project) -> ToolboxResult<()> {
        let namespaces = self.server.project_namespaces(project)?;
        if namespaces.iter().any(|ns| ns.name == project.namespace) {
            return Ok(());
        }

        if project.missing_namespace_fail {
            return Err(ApplicationError::NamespaceMissing {
                project_id: project.project_id,
                namespace: project.namespace.clone(),
            }
            .into());
        }

        warn!(
            namespace = project.namespace.as_deref().unwrap_or_default(),
            "namespace not in use in Tolgee, exports may be empty"
        );
        Ok(())
    }

    fn pull_one(
        &self,
        project: &Project,
        language: &ProjectLanguage,
        target: &TargetFile,
    ) -> ToolboxResult<PulledFile> {
        let path = project.path.join(target.files.render(&language.locale));
        debug!(locale = %language.locale, path = %path.display(), "exporting");

        if let Some(parent) = path.parent() {
            self.filesystem.create_dir_all(parent)?;
        }

        let content = self.server.export(
            project,
            &ExportRequest {
                locale: language.locale.clone(),
                format: target.format,
                namespace: project.namespace.clone(),
            },
        )?;
        self.filesystem.write_file(&path, &content)?;

        Ok(PulledFile {
            path,
            locale: language.locale.clone(),
            bytes: content.len(),
        })
    }
}
