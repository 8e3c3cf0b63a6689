//! Populates a trie from word-list files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use super::{collect_files, split_entries};
use crate::config::wordlist::WordListConfig;
use crate::data_structures::LanaiTrie;
use crate::error::LanaiResult;

/// Summary of a load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Files read
    pub files: usize,

    /// Entries inserted, duplicates included
    pub entries: usize,

    /// Entries that were not already stored
    pub new_keys: usize,
}

impl LoadReport {
    fn merge(&mut self, other: LoadReport) {
        self.files += other.files;
        self.entries += other.entries;
        self.new_keys += other.new_keys;
    }
}

/// Reads word-list files and inserts their entries into a [`LanaiTrie`].
#[derive(Debug, Clone, Default)]
pub struct WordListLoader {
    config: WordListConfig,
}

impl WordListLoader {
    /// Creates a loader with the given configuration.
    pub fn new(config: WordListConfig) -> Self {
        Self { config }
    }

    /// Loads every source in `sources`. Each source is a file or a directory
    /// searched for files.
    pub fn load_sources<P: AsRef<Path>>(
        &self,
        trie: &mut LanaiTrie,
        sources: &[P],
    ) -> LanaiResult<LoadReport> {
        let mut report = LoadReport::default();
        for source in sources {
            report.merge(self.load_source(trie, source.as_ref())?);
        }
        Ok(report)
    }

    /// Loads a single file, or every file below a directory.
    pub fn load_source(&self, trie: &mut LanaiTrie, source: &Path) -> LanaiResult<LoadReport> {
        let files: Vec<PathBuf> = collect_files(source)?;
        if files.is_empty() {
            warn!(source = %source.display(), "Word-list source contains no files");
        }

        let mut report = LoadReport::default();
        for file in &files {
            let reader = BufReader::new(File::open(file)?);
            let file_report = self.load_reader(trie, reader)?;
            debug!(
                file = %file.display(),
                entries = file_report.entries,
                "Loaded word-list file"
            );
            report.merge(LoadReport {
                files: 1,
                ..file_report
            });
        }

        info!(
            source = %source.display(),
            files = report.files,
            entries = report.entries,
            new_keys = report.new_keys,
            "Loaded word-list source"
        );
        Ok(report)
    }

    /// Loads entries from any buffered reader. The report's `files` is zero.
    pub fn load_reader<R: BufRead>(
        &self,
        trie: &mut LanaiTrie,
        mut reader: R,
    ) -> LanaiResult<LoadReport> {
        let delimiters = self.config.delimiters.as_bytes();
        let mut report = LoadReport::default();
        let mut line = Vec::new();

        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            if self.config.skip_comments && line.first() == Some(&b'#') {
                continue;
            }
            for entry in split_entries(&line, delimiters) {
                report.entries += 1;
                if trie.insert(entry) {
                    report.new_keys += 1;
                }
            }
        }

        Ok(report)
    }
}
