//! Word-list collaborator for the Lanai Trie.
//!
//! Word lists are plain files holding one or more entries per line, separated
//! by delimiter characters (`&`, `;` and `,` by default). This module splits
//! lines into entries, discovers files under a directory, and populates a
//! [`LanaiTrie`](crate::data_structures::LanaiTrie) from them.
//!
//! Splitting works on raw bytes so entries reach the trie unchanged, even when
//! a file is not valid UTF-8.

mod loader;

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

pub use loader::{LoadReport, WordListLoader};

/// Delimiters used when none are configured.
pub const DEFAULT_DELIMITERS: &str = "&;,";

/// Whitespace trimmed from both ends of every entry.
const TRIMMED: &[u8] = b" \t\r\n";

/// Splits `line` on any byte in `delimiters`, trims surrounding whitespace from
/// each piece, and drops pieces that end up empty.
///
/// # Example
///
/// ```
/// use lanai_lib::wordlist::split_entries;
///
/// let entries = split_entries(b" Kendrick Lamar & SZA;; Drake ,", b"&;,");
/// assert_eq!(entries, vec![&b"Kendrick Lamar"[..], &b"SZA"[..], &b"Drake"[..]]);
/// ```
pub fn split_entries<'a>(line: &'a [u8], delimiters: &[u8]) -> Vec<&'a [u8]> {
    line.split(|b| delimiters.contains(b))
        .map(trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

fn trim(mut entry: &[u8]) -> &[u8] {
    while let [first, rest @ ..] = entry {
        if !TRIMMED.contains(first) {
            break;
        }
        entry = rest;
    }
    while let [rest @ .., last] = entry {
        if !TRIMMED.contains(last) {
            break;
        }
        entry = rest;
    }
    entry
}

/// Finds every regular file at or below `root`, sorted by path.
///
/// Symbolic links below the root are not followed, so a link back to an
/// ancestor cannot loop the walk. A missing root yields no files; a root that
/// is itself a regular file yields just that file.
pub fn collect_files(root: &Path) -> io::Result<Vec<PathBuf>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry?;
        if entry.file_type().is_file() {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use test_case::test_case;

    #[test_case("alpha", &["alpha"]; "single entry")]
    #[test_case("a&b;c,d", &["a", "b", "c", "d"]; "every default delimiter")]
    #[test_case("  padded \t,\r\n", &["padded"]; "surrounding whitespace")]
    #[test_case(",,; &", &[]; "only delimiters")]
    #[test_case("", &[]; "empty line")]
    #[test_case("in ner", &["in ner"]; "inner whitespace kept")]
    fn test_split_entries(line: &str, expected: &[&str]) {
        let expected: Vec<&[u8]> = expected.iter().map(|e| e.as_bytes()).collect();
        assert_eq!(split_entries(line.as_bytes(), DEFAULT_DELIMITERS.as_bytes()), expected);
    }

    #[test]
    fn test_split_entries_custom_delimiters_and_binary() {
        let line: [u8; 6] = [0x00, b'|', 0xFF, b' ', b'|', b'x'];
        let expected: Vec<&[u8]> = vec![&[0x00u8][..], &[0xFFu8][..], &b"x"[..]];
        assert_eq!(split_entries(&line, b"|"), expected);
    }

    #[test]
    fn test_collect_files_walks_nested_directories() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a").join("b");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("top.txt"), "x").unwrap();
        fs::write(nested.join("deep.txt"), "y").unwrap();

        let files = collect_files(dir.path()).unwrap();
        assert_eq!(files, vec![nested.join("deep.txt"), dir.path().join("top.txt")]);
    }

    #[test]
    fn test_collect_files_single_file_and_missing_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("words.txt");
        fs::write(&file, "x").unwrap();

        assert_eq!(collect_files(&file).unwrap(), vec![file.clone()]);
        assert!(collect_files(&dir.path().join("missing")).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_collect_files_ignores_symlink_cycles() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("w.txt"), "x").unwrap();
        std::os::unix::fs::symlink(dir.path(), sub.join("loop")).unwrap();
        std::os::unix::fs::symlink(dir.path(), sub.join("loop2")).unwrap();

        assert_eq!(collect_files(dir.path()).unwrap(), vec![sub.join("w.txt")]);
    }
}
