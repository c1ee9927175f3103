use std::fmt;
use std::path::PathBuf;

use crate::domain::{locale::Locale, value_objects::ImportFormat};

/// A source file found on disk, with its resolved locale.
///
/// Ordered by path so discovery results are stable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageFile {
    pub path: PathBuf,
    pub locale: Locale,
    pub format: ImportFormat,
}

impl MessageFile {
    pub fn new(path: impl Into<PathBuf>, locale: Locale, format: ImportFormat) -> Self {
        Self {
            path: path.into(),
            locale,
            format,
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl fmt::Display for MessageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}, {}]", self.path.display(), self.locale, self.format)
    }
}
