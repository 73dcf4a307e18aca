// File: src/config.rs
use crate::error::Result;
use crate::orthography::Orthography;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_DICTIONARY_PATH: &str = "data/conjdict.sample.json";
pub const DEFAULT_LANGUAGE: &str = "ENGL";
/// Longest text the orthography converter accepts.
pub const DEFAULT_MAX_INPUT_CHARS: usize = 40;

/// Where the engine's data lives and how requests default. Every field may
/// be left out of the JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub dictionary_path: PathBuf,
    /// Locale file; the compiled-in English and French are used without one.
    pub localization_path: Option<PathBuf>,
    /// Compiled dictionary cache, read before `dictionary_path`.
    pub snapshot_path: Option<PathBuf>,
    pub language: String,
    pub orthography: Orthography,
    pub max_input_chars: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            localization_path: None,
            snapshot_path: None,
            language: DEFAULT_LANGUAGE.to_string(),
            orthography: Orthography::FrancisSmith,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl EngineConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
