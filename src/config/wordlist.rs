//! Word-list configuration module.
//!
//! This module defines how word-list files are split into trie entries.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use crate::wordlist::DEFAULT_DELIMITERS;
use serde::{Deserialize, Serialize};

/// Word-list loading configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WordListConfig {
    /// Characters that separate entries within a line
    pub delimiters: String,

    /// Whether lines starting with `#` are skipped. Off by default: `#1 Crush`
    /// is an entry, not a comment.
    pub skip_comments: bool,
}

impl Default for WordListConfig {
    fn default() -> Self {
        Self {
            delimiters: DEFAULT_DELIMITERS.to_string(),
            skip_comments: false,
        }
    }
}

impl Validate for WordListConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.delimiters.is_empty() {
            return Err(ConfigError::ValueOutOfRange {
                key: "wordlist.delimiters".to_string(),
                message: "at least one delimiter is required".to_string(),
            });
        }

        if !self.delimiters.is_ascii() {
            return Err(ConfigError::ValueOutOfRange {
                key: "wordlist.delimiters".to_string(),
                message: "delimiters must be ASCII characters".to_string(),
            });
        }

        if self.delimiters.chars().any(char::is_whitespace) {
            return Err(ConfigError::ValueOutOfRange {
                key: "wordlist.delimiters".to_string(),
                message: "whitespace is trimmed from entries and cannot delimit them".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiters_are_valid() {
        assert!(WordListConfig::default().validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_and_whitespace_delimiters() {
        let mut config = WordListConfig::default();
        config.delimiters = String::new();
        assert!(config.validate().is_err());

        config.delimiters = ", ".to_string();
        assert!(config.validate().is_err());

        config.delimiters = "·".to_string();
        assert!(config.validate().is_err());
    }
}
