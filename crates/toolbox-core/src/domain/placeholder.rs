//! Locale placeholders embedded in file-path templates.
//!
//! A template such as
//!
//! ```text
//! i18n/Messages_${locale separator=underscore, region_case=upper}.properties
//! ```
//!
//! contains one placeholder. It names where a locale is written into the path
//! and how: the separator placed between language and region, and the letter
//! case of the region. Both arguments are mandatory, their order is free and
//! their values are case-insensitive. The keyword `locale` and the argument
//! keys are matched exactly as written.

use std::sync::OnceLock;

use regex::Regex;

use crate::domain::{
    error::{DomainError, DomainResult},
    locale::Locale,
    value_objects::{RegionCase, Separator},
};

const SEPARATOR_KEY: &str = "separator";
const REGION_CASE_KEY: &str = "region_case";

fn placeholder_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"\$\{locale(?:\s+([^}]*))?\}").expect("placeholder regex is valid")
    })
}

/// One parsed `${locale ...}` occurrence.
///
/// Equality is structural over all three fields, so two placeholders with the
/// same options but differently written text are distinct values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LocalePlaceholder {
    text: String,
    separator: Separator,
    region_case: RegionCase,
}

impl LocalePlaceholder {
    pub fn new(text: impl Into<String>, separator: Separator, region_case: RegionCase) -> Self {
        Self {
            text: text.into(),
            separator,
            region_case,
        }
    }

    /// The placeholder exactly as written in the template.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn separator(&self) -> Separator {
        self.separator
    }

    pub fn region_case(&self) -> RegionCase {
        self.region_case
    }

    /// Render `locale` the way this placeholder writes it into a path.
    ///
    /// `en-US` becomes `en_US`, `en-us`, ... depending on the options; a
    /// language-only locale renders as just the language.
    pub fn render(&self, locale: &Locale) -> String {
        let mut rendered = locale.language().to_ascii_lowercase();
        if let Some(region) = locale.region() {
            rendered.push(self.separator.as_char());
            rendered.push_str(&self.region_case.apply(region));
        }
        rendered
    }

    /// Regex fragment recognising a rendered locale.
    ///
    /// With `capture` set, the language and region are exposed as the named
    /// groups `language` and `region`.
    pub(crate) fn regex_fragment(&self, capture: bool) -> String {
        let separator = regex::escape(&self.separator.as_char().to_string());
        let region = self.region_case.char_class();
        if capture {
            format!("(?P<language>[a-z]{{2}})(?:{separator}(?P<region>{region}{{2}}))?")
        } else {
            format!("[a-z]{{2}}(?:{separator}{region}{{2}})?")
        }
    }
}

/// Scan `template` for locale placeholders.
///
/// Returns the placeholders in order of first appearance; repeated
/// occurrences of identical text collapse into one value.
pub fn parse_placeholders(template: &str) -> DomainResult<Vec<LocalePlaceholder>> {
    let mut placeholders: Vec<LocalePlaceholder> = Vec::new();

    for captures in placeholder_regex().captures_iter(template) {
        let text = &captures[0];
        if placeholders.iter().any(|p| p.text == text) {
            continue;
        }
        let args = captures.get(1).map(|m| m.as_str());
        placeholders.push(parse_one(text, args)?);
    }

    Ok(placeholders)
}

fn parse_one(text: &str, args: Option<&str>) -> DomainResult<LocalePlaceholder> {
    let syntax = |reason: String| DomainError::PlaceholderSyntax {
        placeholder: text.to_string(),
        reason,
    };

    let args = args.map(str::trim).filter(|a| !a.is_empty()).ok_or_else(|| {
        syntax(format!(
            "missing required arguments '{SEPARATOR_KEY}' and '{REGION_CASE_KEY}'"
        ))
    })?;

    let mut separator = None;
    let mut region_case = None;

    for piece in args.split(',').map(str::trim) {
        let (key, value) = piece
            .split_once('=')
            .map(|(k, v)| (k.trim(), v.trim()))
            .ok_or_else(|| syntax(format!("argument '{piece}' is not a key=value pair")))?;

        match key {
            SEPARATOR_KEY => {
                if separator.replace(value.parse::<Separator>().map_err(&syntax)?).is_some() {
                    return Err(syntax(format!("argument '{SEPARATOR_KEY}' given twice")));
                }
            }
            REGION_CASE_KEY => {
                if region_case
                    .replace(value.parse::<RegionCase>().map_err(&syntax)?)
                    .is_some()
                {
                    return Err(syntax(format!("argument '{REGION_CASE_KEY}' given twice")));
                }
            }
            other => return Err(syntax(format!("unknown argument '{other}'"))),
        }
    }

    let separator = separator
        .ok_or_else(|| syntax(format!("missing required argument '{SEPARATOR_KEY}'")))?;
    let region_case = region_case
        .ok_or_else(|| syntax(format!("missing required argument '{REGION_CASE_KEY}'")))?;

    Ok(LocalePlaceholder::new(text, separator, region_case))
}

/// Substitute `locale` into every occurrence of every placeholder.
pub fn render_template(template: &str, placeholders: &[LocalePlaceholder], locale: &Locale) -> String {
    placeholders
        .iter()
        .fold(template.to_string(), |rendered, placeholder| {
            rendered.replace(placeholder.text(), &placeholder.render(locale))
        })
}
