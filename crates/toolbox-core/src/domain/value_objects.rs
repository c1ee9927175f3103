//! Domain value objects: placeholder options and message format types.
//!
//! # Design
//!
//! These are pure `Copy` value types compared by value.
//! This file's only job is to define the types, their string
//! representations, and their `FromStr` parsers.
//!
//! # Adding New Variants
//!
//! 1. Add the enum variant here
//! 2. Add it to `ALL` and give it an `as_str` arm; `FromStr` searches `ALL`
//! 3. The Tolgee client serialises through `as_str`

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── Separator ────────────────────────────────────────────────────────────────

/// Character placed between language and region in a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Separator {
    Underscore,
    Dash,
}

impl Separator {
    pub const fn as_char(&self) -> char {
        match self {
            Self::Underscore => '_',
            Self::Dash => '-',
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underscore => "underscore",
            Self::Dash => "dash",
        }
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Separator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "underscore" => Ok(Self::Underscore),
            "dash" => Ok(Self::Dash),
            other => Err(format!(
                "invalid 'separator' value '{other}' (expected underscore or dash)"
            )),
        }
    }
}

// ── RegionCase ───────────────────────────────────────────────────────────────

/// Letter case of the region code as it physically appears in a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionCase {
    Lower,
    Upper,
}

impl RegionCase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Upper => "upper",
        }
    }

    pub fn apply(&self, region: &str) -> String {
        match self {
            Self::Lower => region.to_ascii_lowercase(),
            Self::Upper => region.to_ascii_uppercase(),
        }
    }

    /// Regex character class matching one region letter in this case.
    pub(crate) const fn char_class(&self) -> &'static str {
        match self {
            Self::Lower => "[a-z]",
            Self::Upper => "[A-Z]",
        }
    }
}

impl fmt::Display for RegionCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegionCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lower" => Ok(Self::Lower),
            "upper" => Ok(Self::Upper),
            other => Err(format!(
                "invalid 'region_case' value '{other}' (expected lower or upper)"
            )),
        }
    }
}

// ── ImportFormat ─────────────────────────────────────────────────────────────

/// Format of a local source file uploaded to Tolgee (push).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ImportFormat {
    JsonIcu,
    JsonJava,
    JsonPhp,
    JsonRuby,
    JsonC,
    PoPhp,
    PoC,
    PoJava,
    PoIcu,
    PoRuby,
    Strings,
    Stringsdict,
    AppleXliff,
    PropertiesIcu,
    PropertiesJava,
    PropertiesUnknown,
    AndroidXml,
    FlutterArb,
    YamlRuby,
    YamlJava,
    YamlIcu,
    YamlPhp,
    YamlUnknown,
    XliffIcu,
    XliffJava,
    XliffPhp,
    XliffRuby,
}

impl ImportFormat {
    pub const ALL: [ImportFormat; 27] = [
        Self::JsonIcu,
        Self::JsonJava,
        Self::JsonPhp,
        Self::JsonRuby,
        Self::JsonC,
        Self::PoPhp,
        Self::PoC,
        Self::PoJava,
        Self::PoIcu,
        Self::PoRuby,
        Self::Strings,
        Self::Stringsdict,
        Self::AppleXliff,
        Self::PropertiesIcu,
        Self::PropertiesJava,
        Self::PropertiesUnknown,
        Self::AndroidXml,
        Self::FlutterArb,
        Self::YamlRuby,
        Self::YamlJava,
        Self::YamlIcu,
        Self::YamlPhp,
        Self::YamlUnknown,
        Self::XliffIcu,
        Self::XliffJava,
        Self::XliffPhp,
        Self::XliffRuby,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::JsonIcu => "JSON_ICU",
            Self::JsonJava => "JSON_JAVA",
            Self::JsonPhp => "JSON_PHP",
            Self::JsonRuby => "JSON_RUBY",
            Self::JsonC => "JSON_C",
            Self::PoPhp => "PO_PHP",
            Self::PoC => "PO_C",
            Self::PoJava => "PO_JAVA",
            Self::PoIcu => "PO_ICU",
            Self::PoRuby => "PO_RUBY",
            Self::Strings => "STRINGS",
            Self::Stringsdict => "STRINGSDICT",
            Self::AppleXliff => "APPLE_XLIFF",
            Self::PropertiesIcu => "PROPERTIES_ICU",
            Self::PropertiesJava => "PROPERTIES_JAVA",
            Self::PropertiesUnknown => "PROPERTIES_UNKNOWN",
            Self::AndroidXml => "ANDROID_XML",
            Self::FlutterArb => "FLUTTER_ARB",
            Self::YamlRuby => "YAML_RUBY",
            Self::YamlJava => "YAML_JAVA",
            Self::YamlIcu => "YAML_ICU",
            Self::YamlPhp => "YAML_PHP",
            Self::YamlUnknown => "YAML_UNKNOWN",
            Self::XliffIcu => "XLIFF_ICU",
            Self::XliffJava => "XLIFF_JAVA",
            Self::XliffPhp => "XLIFF_PHP",
            Self::XliffRuby => "XLIFF_RUBY",
        }
    }

    /// Whether Tolgee should convert the file's placeholders to ICU on import.
    pub fn is_icu(&self) -> bool {
        self.as_str().ends_with("_ICU")
    }
}

impl fmt::Display for ImportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownFormat {
                kind: "import",
                value: s.to_string(),
            })
    }
}

// ── ExportFormat ─────────────────────────────────────────────────────────────

/// Format Tolgee renders a target file in (pull).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExportFormat {
    Json,
    Po,
    AppleStringsStringsdict,
    AppleXliff,
    AndroidXml,
    FlutterArb,
    PropertiesIcu,
    PropertiesJava,
    Xliff,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 9] = [
        Self::Json,
        Self::Po,
        Self::AppleStringsStringsdict,
        Self::AppleXliff,
        Self::AndroidXml,
        Self::FlutterArb,
        Self::PropertiesIcu,
        Self::PropertiesJava,
        Self::Xliff,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Po => "PO",
            Self::AppleStringsStringsdict => "APPLE_STRINGS_STRINGSDICT",
            Self::AppleXliff => "APPLE_XLIFF",
            Self::AndroidXml => "ANDROID_XML",
            Self::FlutterArb => "FLUTTER_ARB",
            Self::PropertiesIcu => "PROPERTIES_ICU",
            Self::PropertiesJava => "PROPERTIES_JAVA",
            Self::Xliff => "XLIFF",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::UnknownFormat {
                kind: "export",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn separator_values_are_case_insensitive() {
        assert_eq!("UNDERSCORE".parse::<Separator>(), Ok(Separator::Underscore));
        assert_eq!("Dash".parse::<Separator>(), Ok(Separator::Dash));
        assert!("slash".parse::<Separator>().is_err());
    }

    #[test]
    fn region_case_applies_to_region() {
        assert_eq!(RegionCase::Upper.apply("us"), "US");
        assert_eq!(RegionCase::Lower.apply("US"), "us");
        assert!("title".parse::<RegionCase>().is_err());
    }

    #[test]
    fn import_format_parses_screaming_names() {
        assert_eq!(
            "properties_java".parse::<ImportFormat>().unwrap(),
            ImportFormat::PropertiesJava
        );
        assert_eq!(
            "STRINGSDICT".parse::<ImportFormat>().unwrap(),
            ImportFormat::Stringsdict
        );
        assert!(matches!(
            "PROPERTIES".parse::<ImportFormat>(),
            Err(DomainError::UnknownFormat { kind: "import", .. })
        ));
    }

    #[test]
    fn import_format_icu_detection() {
        assert!(ImportFormat::JsonIcu.is_icu());
        assert!(ImportFormat::XliffIcu.is_icu());
        assert!(!ImportFormat::PropertiesJava.is_icu());
    }

    #[test]
    fn export_format_names_parse_back() {
        for format in ExportFormat::ALL {
            assert_eq!(format.to_string().parse::<ExportFormat>().unwrap(), format);
        }
        assert_eq!(
            "apple_strings_stringsdict".parse::<ExportFormat>().unwrap(),
            ExportFormat::AppleStringsStringsdict
        );
    }
}
