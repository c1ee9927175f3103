//! File discovery - finds the source message files of a project on disk.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, instrument, trace};

use crate::{
    application::ports::Filesystem,
    domain::{MessageFile, SourceFile},
    error::ToolboxResult,
};

/// Directory depth bound for discovery walks.
pub const DISCOVERY_MAX_DEPTH: usize = 200;

/// Matches the files below a project root against its source entries.
pub struct FileDiscovery<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> FileDiscovery<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Every file below `root` that belongs to one of `sources`.
    ///
    /// Files matching no entry are skipped. An entry matching nothing is not
    /// an error; the caller decides what an empty result means.
    pub fn find_files(
        &self,
        root: &Path,
        sources: &[SourceFile],
    ) -> ToolboxResult<BTreeSet<MessageFile>> {
        Ok(self
            .find_matches(root, sources)?
            .into_iter()
            .map(|(_, file)| file)
            .collect())
    }

    /// Like [`FileDiscovery::find_files`], but pairs each file with the entry
    /// it matched. A file matching several entries appears once per entry.
    #[instrument(skip_all, fields(root = %root.display(), entries = sources.len()))]
    pub fn find_matches<'s>(
        &self,
        root: &Path,
        sources: &'s [SourceFile],
    ) -> ToolboxResult<Vec<(&'s SourceFile, MessageFile)>> {
        let candidates = self.filesystem.walk_files(root, DISCOVERY_MAX_DEPTH)?;
        let mut found = Vec::new();

        for source in sources {
            let pattern = source.files.pattern()?;

            for path in &candidates {
                let relative = path.strip_prefix(root).unwrap_or(path);
                if !pattern.is_match(relative) {
                    continue;
                }
                let locale = source.resolve_locale(&pattern, relative)?;
                trace!(path = %path.display(), %locale, "matched message file");
                found.push((source, MessageFile::new(path.clone(), locale, source.format)));
            }
        }

        debug!(found = found.len(), "discovery finished");
        Ok(found)
    }
}
