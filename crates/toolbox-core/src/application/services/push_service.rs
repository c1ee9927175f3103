//! Push Service - uploads local source files to Tolgee.
//!
//! Two flavours:
//! - [`PushService::push`] runs a two-step import: upload, then point the
//!   import entry at the project namespace and at the existing language.
//! - [`PushService::push_single_step`] sends namespace, language and format
//!   along with the file in one call.

use std::collections::BTreeSet;
use std::path::PathBuf;

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::{
        ApplicationError,
        ports::{FileUpload, Filesystem, SingleStepImport, TranslationServer},
        services::FileDiscovery,
    },
    domain::{ImportLanguage, Locale, MessageFile, Project, ProjectLanguage},
    error::ToolboxResult,
};

/// A file uploaded by a push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushedFile {
    pub path: PathBuf,
    pub locale: Locale,
    /// Name the file was uploaded under.
    pub upload_name: String,
}

/// Outcome of pushing one project.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PushReport {
    pub uploaded: Vec<PushedFile>,
    /// Discovered files skipped because their source entry excludes the locale.
    pub excluded: usize,
}

impl PushReport {
    pub fn merge(&mut self, other: PushReport) {
        self.uploaded.extend(other.uploaded);
        self.excluded += other.excluded;
    }
}

pub struct PushService {
    filesystem: Box<dyn Filesystem>,
    server: Box<dyn TranslationServer>,
}

impl PushService {
    pub fn new(filesystem: Box<dyn Filesystem>, server: Box<dyn TranslationServer>) -> Self {
        Self { filesystem, server }
    }

    /// Two-step import of every source file.
    #[instrument(skip_all, fields(project = %project.label()))]
    pub fn push(&self, project: &Project) -> ToolboxResult<PushReport> {
        let (files, mut report) = self.pushable_files(project)?;
        if files.is_empty() {
            return Ok(report);
        }

        let languages = self.server.project_languages(project)?;
        for file in files {
            let upload = self.upload_for(&file)?;
            debug!(file = %file.path.display(), upload = %upload.file_name, "importing");

            let entries = self.server.import_add_file(project, &upload)?;
            let matching: Vec<&ImportLanguage> = entries
                .iter()
                .filter(|entry| entry.import_file_name == upload.file_name)
                .collect();

            if let Some(namespace) = &project.namespace {
                let entry = matching.first().ok_or_else(|| ApplicationError::ImportEntryMissing {
                    project_id: project.project_id,
                    file_name: upload.file_name.clone(),
                })?;
                self.server
                    .import_select_namespace(project, entry.import_file_id, namespace)?;
            }

            for entry in &matching {
                let existing = find_language(project, &languages, &file.locale)?;
                self.server
                    .import_select_language(project, entry.id, existing.id)?;
            }

            report.uploaded.push(PushedFile {
                path: file.path,
                locale: file.locale,
                upload_name: upload.file_name,
            });
        }

        info!(uploaded = report.uploaded.len(), "Push completed");
        Ok(report)
    }

    /// Single-step import of every source file.
    #[instrument(skip_all, fields(project = %project.label()))]
    pub fn push_single_step(&self, project: &Project) -> ToolboxResult<PushReport> {
        let (files, mut report) = self.pushable_files(project)?;

        for file in files {
            let upload = self.upload_for(&file)?;
            debug!(file = %file.path.display(), "single-step importing");

            self.server.single_step_import(
                project,
                &upload,
                &SingleStepImport {
                    namespace: project.namespace.clone(),
                    locale: file.locale.clone(),
                    format: file.format,
                },
            )?;

            report.uploaded.push(PushedFile {
                path: file.path,
                locale: file.locale,
                upload_name: upload.file_name,
            });
        }

        info!(uploaded = report.uploaded.len(), "Push completed");
        Ok(report)
    }

    /// Discovered files minus those whose entry excludes their locale.
    ///
    /// A file matched by several entries is kept if any of them accepts it.
    fn pushable_files(&self, project: &Project) -> ToolboxResult<(Vec<MessageFile>, PushReport)> {
        let matches = FileDiscovery::new(self.filesystem.as_ref())
            .find_matches(&project.path, &project.sources)?;
        if matches.is_empty() {
            warn!(path = %project.path.display(), "no source files found");
        }

        let mut files = BTreeSet::new();
        let mut excluded = BTreeSet::new();
        for (source, file) in matches {
            if source.is_excluded(&file.locale) {
                debug!(file = %file.path.display(), locale = %file.locale, "locale excluded");
                excluded.insert(file);
            } else {
                files.insert(file);
            }
        }

        let report = PushReport {
            uploaded: Vec::new(),
            excluded: excluded.difference(&files).count(),
        };
        Ok((files.into_iter().collect(), report))
    }

    fn upload_for(&self, file: &MessageFile) -> ToolboxResult<FileUpload> {
        Ok(FileUpload {
            file_name: format!("{}_{}", Uuid::new_v4(), file.file_name()),
            content: self.filesystem.read_file(&file.path)?,
        })
    }
}

fn find_language<'l>(
    project: &Project,
    languages: &'l [ProjectLanguage],
    locale: &Locale,
) -> ToolboxResult<&'l ProjectLanguage> {
    languages
        .iter()
        .find(|language| &language.locale == locale)
        .ok_or_else(|| {
            ApplicationError::LanguageNotFound {
                project_id: project.project_id,
                locale: locale.to_string(),
            }
            .into()
        })
}
