//! Records returned by the Tolgee server.

use crate::domain::locale::Locale;

/// A language configured in the Tolgee project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLanguage {
    pub id: u64,
    pub locale: Locale,
}

/// A namespace in use in the Tolgee project. The default namespace has no
/// id and no name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Namespace {
    pub id: Option<u64>,
    pub name: Option<String>,
}

impl Namespace {
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }
}

/// One language entry of a pending (two-step) import.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLanguage {
    pub id: u64,
    pub import_file_name: String,
    pub import_file_id: u64,
}
