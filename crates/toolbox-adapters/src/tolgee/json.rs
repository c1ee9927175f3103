//! Wire types of the Tolgee REST API.
//!
//! Only the fields the client reads or writes are modelled. Collection
//! responses are HAL documents whose `_embedded` object is left out entirely
//! when the collection is empty.

use serde::{Deserialize, Serialize};

// ── Responses ─────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub(crate) struct Collection<T> {
    #[serde(rename = "_embedded")]
    pub embedded: Option<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguagesEmbedded<T> {
    #[serde(default = "Vec::new")]
    pub languages: Vec<T>,
}

impl<T> Default for LanguagesEmbedded<T> {
    fn default() -> Self {
        Self {
            languages: Vec::new(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct NamespacesEmbedded {
    #[serde(default)]
    pub namespaces: Vec<NamespaceJson>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguageJson {
    pub id: u64,
    pub tag: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct NamespaceJson {
    pub id: Option<u64>,
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ImportAddFilesJson {
    pub result: Option<Collection<LanguagesEmbedded<ImportLanguageJson>>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImportLanguageJson {
    pub id: u64,
    pub import_file_name: String,
    pub import_file_id: u64,
}

// ── Requests ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub(crate) struct SelectNamespaceJson<'a> {
    pub namespace: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ExportJson<'a> {
    pub languages: Vec<String>,
    pub format: &'a str,
    pub zip: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter_namespace: Option<Vec<&'a str>>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum ForceMode {
    Override,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SingleStepParamsJson<'a> {
    pub force_mode: ForceMode,
    pub override_key_descriptions: bool,
    pub convert_placeholders_to_icu: bool,
    pub file_mappings: Vec<FileMappingJson<'a>>,
    pub tag_new_keys: Vec<String>,
    pub remove_other_keys: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FileMappingJson<'a> {
    pub file_name: &'a str,
    pub namespace: Option<&'a str>,
    pub language_tag: String,
    pub format: &'a str,
}
