//! Compiled file patterns.
//!
//! A [`FilePattern`] turns a template plus its placeholders into two anchored
//! regular expressions:
//!
//! - the **strict** matcher, where each placeholder becomes
//!   `[a-z]{2}(?:<sep>[A-Z]{2})?` (region class per the placeholder's case).
//!   Discovery uses this one: a file belongs to the template only when the
//!   whole candidate matches.
//! - the **loose** matcher, where each placeholder becomes "any run of
//!   characters inside one path segment". It tells "this file has the
//!   template's shape but a malformed locale" apart from "this file has
//!   nothing to do with the template".
//!
//! Everything outside a placeholder is literal: dots, brackets and the like
//! in the template never act as regex metacharacters.
//!
//! Templates without a `/` are matched against the file name only; templates
//! with one are matched against the path relative to the project root. A
//! leading `./` anchors the template at the root.
//!
//! Only the first placeholder occurrence drives locale extraction; further
//! occurrences must have the right shape but are not compared with the first.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::trace;

use crate::domain::{
    error::{DomainError, DomainResult},
    locale::Locale,
    placeholder::LocalePlaceholder,
};

const LOOSE_SEGMENT: &str = "([^/]+?)";

/// Matcher compiled from a template.
#[derive(Debug, Clone)]
pub struct FilePattern {
    template: String,
    strict: Regex,
    loose: Regex,
    /// Placeholder driving extraction, `None` for literal templates.
    primary: Option<LocalePlaceholder>,
    match_full_path: bool,
}

impl FilePattern {
    /// Compile `template` with the placeholders previously parsed from it.
    ///
    /// Fails with [`DomainError::TemplateStructure`] if a placeholder's text
    /// does not occur in the template.
    pub fn compile(template: &str, placeholders: &[LocalePlaceholder]) -> DomainResult<Self> {
        for placeholder in placeholders {
            if !template.contains(placeholder.text()) {
                return Err(DomainError::TemplateStructure {
                    placeholder: placeholder.text().to_string(),
                    template: template.to_string(),
                });
            }
        }

        let mut strict = String::from("^");
        let mut loose = String::from("^");
        let mut primary = None;
        // Relative paths never carry a `.` component.
        let mut rest = template.trim_start_matches("./");

        while let Some((index, placeholder)) = next_occurrence(rest, placeholders) {
            let literal = regex::escape(&rest[..index]);
            strict.push_str(&literal);
            loose.push_str(&literal);

            strict.push_str(&placeholder.regex_fragment(primary.is_none()));
            loose.push_str(if primary.is_none() {
                LOOSE_SEGMENT
            } else {
                "(?:[^/]+?)"
            });
            primary.get_or_insert_with(|| placeholder.clone());

            rest = &rest[index + placeholder.text().len()..];
        }
        let literal = regex::escape(rest);
        strict.push_str(&literal);
        loose.push_str(&literal);
        strict.push('$');
        loose.push('$');

        trace!(template, regex = %strict, "compiled file pattern");

        let build = |source: &str| {
            Regex::new(source).map_err(|e| DomainError::TemplateStructure {
                placeholder: primary
                    .as_ref()
                    .map(|p: &LocalePlaceholder| p.text().to_string())
                    .unwrap_or_default(),
                template: format!("{template} ({e})"),
            })
        };

        Ok(Self {
            strict: build(&strict)?,
            loose: build(&loose)?,
            template: template.to_string(),
            match_full_path: template.contains('/'),
            primary,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    /// Whether the template carries a locale placeholder.
    pub fn has_placeholder(&self) -> bool {
        self.primary.is_some()
    }

    /// Whether `path` (relative to the project root) belongs to the template.
    pub fn is_match(&self, path: &Path) -> bool {
        self.strict.is_match(&self.candidate(path))
    }

    /// Extract the locale encoded in `path` (relative to the project root).
    ///
    /// Returns `Ok(None)` for literal templates that match; the caller then
    /// falls back to the configured locale.
    pub fn extract_locale(&self, path: &Path) -> DomainResult<Option<Locale>> {
        let candidate = self.candidate(path);

        let Some(loose) = self.loose.captures(&candidate) else {
            return Err(DomainError::NoMatch {
                path: path.to_path_buf(),
                template: self.template.clone(),
            });
        };

        let Some(placeholder) = &self.primary else {
            return Ok(None);
        };

        let Some(strict) = self.strict.captures(&candidate) else {
            let segment = loose.get(1).map(|m| m.as_str()).unwrap_or_default();
            return Err(self.extraction_error(
                path,
                format!(
                    "'{segment}' is not a language code optionally followed by '{}' and a {} region",
                    placeholder.separator().as_char(),
                    placeholder.region_case(),
                ),
            ));
        };

        let language = strict
            .name("language")
            .map(|m| m.as_str())
            .unwrap_or_default();
        let region = strict.name("region").map(|m| m.as_str());

        Locale::new(language, region)
            .map(Some)
            .map_err(|e| self.extraction_error(path, e.to_string()))
    }

    fn extraction_error(&self, path: &Path, reason: String) -> DomainError {
        DomainError::LocaleExtraction {
            path: PathBuf::from(path),
            template: self.template.clone(),
            reason,
        }
    }

    fn candidate<'a>(&self, path: &'a Path) -> Cow<'a, str> {
        if self.match_full_path {
            let joined = path
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            Cow::Owned(joined)
        } else {
            path.file_name()
                .map(|name| name.to_string_lossy())
                .unwrap_or_default()
        }
    }
}

/// Earliest placeholder occurrence in `haystack`.
fn next_occurrence<'p>(
    haystack: &str,
    placeholders: &'p [LocalePlaceholder],
) -> Option<(usize, &'p LocalePlaceholder)> {
    placeholders
        .iter()
        .filter_map(|p| haystack.find(p.text()).map(|index| (index, p)))
        .min_by_key(|(index, _)| *index)
}
