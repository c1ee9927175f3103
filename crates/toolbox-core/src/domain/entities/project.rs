//! Project model: file-set definitions and the projects that own them.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::domain::{
    error::{DomainError, DomainResult},
    locale::Locale,
    pattern::FilePattern,
    placeholder::{LocalePlaceholder, parse_placeholders, render_template},
    value_objects::{ExportFormat, ImportFormat},
};

// ============================================================================
// ProjectFilesDefinition
// ============================================================================

/// A path template relative to the project root, with the placeholders found
/// in it.
///
/// Invariant: every placeholder's text occurs in `template`. Holds by
/// construction through [`ProjectFilesDefinition::parse`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilesDefinition {
    template: String,
    placeholders: Vec<LocalePlaceholder>,
}

impl ProjectFilesDefinition {
    pub fn parse(template: impl Into<String>) -> DomainResult<Self> {
        let template = template.into();
        let placeholders = parse_placeholders(&template)?;
        Ok(Self {
            template,
            placeholders,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn placeholders(&self) -> &[LocalePlaceholder] {
        &self.placeholders
    }

    pub fn has_placeholder(&self) -> bool {
        !self.placeholders.is_empty()
    }

    /// Compile the matcher used for discovery and extraction.
    pub fn pattern(&self) -> DomainResult<FilePattern> {
        FilePattern::compile(&self.template, &self.placeholders)
    }

    /// Path for `locale`, relative to the project root.
    pub fn render(&self, locale: &Locale) -> PathBuf {
        PathBuf::from(render_template(&self.template, &self.placeholders, locale))
    }
}

// ============================================================================
// ProjectFile
// ============================================================================

/// One `[[projects.sources]]` or `[[projects.targets]]` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFile<F> {
    pub files: ProjectFilesDefinition,
    pub format: F,
    /// Used when the template carries no placeholder.
    pub locale: Option<Locale>,
    pub excluded_locales: BTreeSet<Locale>,
}

/// Local file uploaded on push.
pub type SourceFile = ProjectFile<ImportFormat>;

/// Local file written on pull.
pub type TargetFile = ProjectFile<ExportFormat>;

impl<F> ProjectFile<F> {
    pub fn new(files: ProjectFilesDefinition, format: F) -> Self {
        Self {
            files,
            format,
            locale: None,
            excluded_locales: BTreeSet::new(),
        }
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = Some(locale);
        self
    }

    pub fn with_excluded(mut self, locales: impl IntoIterator<Item = Locale>) -> Self {
        self.excluded_locales.extend(locales);
        self
    }

    pub fn is_excluded(&self, locale: &Locale) -> bool {
        self.excluded_locales.contains(locale)
    }

    /// Whether a file of this entry can hold `locale`.
    ///
    /// Literal templates name a single file, which belongs to the fixed locale
    /// only.
    pub fn covers(&self, locale: &Locale) -> bool {
        self.files.has_placeholder() || self.locale.as_ref() == Some(locale)
    }

    /// Locale of a file matched by `pattern`.
    ///
    /// Placeholder templates extract it from `relative_path`; literal
    /// templates fall back to the configured locale.
    pub fn resolve_locale(
        &self,
        pattern: &FilePattern,
        relative_path: &Path,
    ) -> DomainResult<Locale> {
        match pattern.extract_locale(relative_path)? {
            Some(locale) => Ok(locale),
            None => self
                .locale
                .clone()
                .ok_or_else(|| DomainError::MissingLocaleSource {
                    template: self.files.template().to_string(),
                }),
        }
    }

    /// Reject entries with no way to determine a locale.
    pub fn validate(&self) -> DomainResult<()> {
        if !self.files.has_placeholder() && self.locale.is_none() {
            return Err(DomainError::MissingLocaleSource {
                template: self.files.template().to_string(),
            });
        }
        Ok(())
    }
}

// ============================================================================
// Project
// ============================================================================

/// A local directory bound to one Tolgee project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Directory holding the project's config file; templates are relative to it.
    pub path: PathBuf,
    pub api_url: String,
    pub project_id: u64,
    pub namespace: Option<String>,
    pub missing_namespace_fail: bool,
    pub sources: Vec<SourceFile>,
    pub targets: Vec<TargetFile>,
}

impl Project {
    pub fn validate(&self) -> DomainResult<()> {
        if self.api_url.trim().is_empty() {
            return Err(DomainError::InvalidProject(format!(
                "project {} has an empty API URL",
                self.project_id
            )));
        }
        self.sources.iter().try_for_each(SourceFile::validate)?;
        self.targets.iter().try_for_each(TargetFile::validate)
    }

    /// Short label for logs and progress output.
    pub fn label(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("#{} ({ns})", self.project_id),
            None => format!("#{}", self.project_id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "i18n/Messages_${locale separator=underscore, region_case=upper}.properties";

    fn source(template: &str) -> SourceFile {
        ProjectFile::new(
            ProjectFilesDefinition::parse(template).unwrap(),
            ImportFormat::PropertiesJava,
        )
    }

    #[test]
    fn render_produces_relative_path() {
        let files = ProjectFilesDefinition::parse(TEMPLATE).unwrap();
        let path = files.render(&Locale::parse("de-AT").unwrap());
        assert_eq!(path, PathBuf::from("i18n/Messages_de_AT.properties"));
    }

    #[test]
    fn placeholder_entry_resolves_from_path() {
        let entry = source(TEMPLATE);
        let pattern = entry.files.pattern().unwrap();
        let locale = entry
            .resolve_locale(&pattern, Path::new("i18n/Messages_fr_CA.properties"))
            .unwrap();
        assert_eq!(locale.to_string(), "fr-CA");
    }

    #[test]
    fn literal_entry_resolves_to_fixed_locale() {
        let entry = source("Messages.properties").with_locale(Locale::parse("en").unwrap());
        let pattern = entry.files.pattern().unwrap();
        let locale = entry
            .resolve_locale(&pattern, Path::new("Messages.properties"))
            .unwrap();
        assert_eq!(locale.to_string(), "en");
    }

    #[test]
    fn literal_entry_without_locale_is_invalid() {
        let entry = source("Messages.properties");
        assert!(matches!(
            entry.validate(),
            Err(DomainError::MissingLocaleSource { .. })
        ));
    }

    #[test]
    fn excluded_locales_are_reported() {
        let entry = source(TEMPLATE).with_excluded([Locale::parse("en-US").unwrap()]);
        assert!(entry.is_excluded(&Locale::parse("en_US").unwrap()));
        assert!(!entry.is_excluded(&Locale::parse("en").unwrap()));
    }

    #[test]
    fn literal_entry_covers_only_its_locale() {
        let literal = source("Messages.properties").with_locale(Locale::parse("en").unwrap());
        assert!(literal.covers(&Locale::parse("en").unwrap()));
        assert!(!literal.covers(&Locale::parse("nl").unwrap()));
        assert!(source(TEMPLATE).covers(&Locale::parse("nl").unwrap()));
    }

    #[test]
    fn project_validation_checks_every_entry() {
        let project = Project {
            path: PathBuf::from("."),
            api_url: "https://tolgee.example".into(),
            project_id: 7,
            namespace: None,
            missing_namespace_fail: false,
            sources: vec![source(TEMPLATE), source("plain.json")],
            targets: vec![],
        };
        assert!(project.validate().is_err());
    }
}
