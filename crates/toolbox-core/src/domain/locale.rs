//! Locale value object.
//!
//! A locale is a language code with an optional region. The canonical form
//! keeps the language lower-case and the region upper-case (`en`, `en-US`),
//! which is also the language tag format the Tolgee API expects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::domain::error::DomainError;

/// Language plus optional region.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale {
    language: String,
    region: Option<String>,
}

impl Locale {
    /// Build a locale from its parts, normalising letter case.
    ///
    /// The language must be 2 or 3 ASCII letters, the region exactly 2.
    pub fn new(language: &str, region: Option<&str>) -> Result<Self, DomainError> {
        let display = match region {
            Some(region) => format!("{language}-{region}"),
            None => language.to_string(),
        };

        if !(2..=3).contains(&language.len()) || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(DomainError::InvalidLocale(display));
        }
        if let Some(region) = region {
            if region.len() != 2 || !region.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(DomainError::InvalidLocale(display));
            }
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            region: region.map(str::to_ascii_uppercase),
        })
    }

    /// Language-only locale, e.g. `en`.
    pub fn language_only(language: &str) -> Result<Self, DomainError> {
        Self::new(language, None)
    }

    /// Parse a tag such as `en`, `en-US` or `en_us`.
    pub fn parse(tag: &str) -> Result<Self, DomainError> {
        let mut parts = tag.trim().split(['-', '_']);
        let language = parts.next().unwrap_or_default();
        let region = parts.next();
        if parts.next().is_some() {
            return Err(DomainError::InvalidLocale(tag.to_string()));
        }
        Self::new(language, region).map_err(|_| DomainError::InvalidLocale(tag.to_string()))
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// `en` or `en-US`.
    pub fn to_language_tag(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.region {
            Some(region) => write!(f, "{}-{}", self.language, region),
            None => f.write_str(&self.language),
        }
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let tag = String::deserialize(deserializer)?;
        Self::parse(&tag).map_err(serde::de::Error::custom)
    }
}
