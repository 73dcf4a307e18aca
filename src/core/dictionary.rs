// File: src/core/dictionary.rs
//
// The affix dictionary: every paradigm cell of every conjugation, keyed by
// `{class}.{tense code}[.neg].{namespace}`. Suffix strings are parsed into
// `Suffix` once at load time; lookups only concatenate.

use crate::core::types::{Form, Suffix};
use crate::error::{ConjugatorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::info;

/// One entry as it appears in the dictionary JSON file.
#[derive(Debug, Deserialize)]
struct RawEntry {
    title: String,
    forms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffixDictionary {
    entries: HashMap<String, Vec<Suffix>>,
}

impl AffixDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses the `[{"title": .., "forms": [..]}, ..]` dictionary format. A
    /// title that appears twice keeps its last list.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Vec<RawEntry> = serde_json::from_str(json)?;
        let mut dictionary = Self::new();
        for entry in raw {
            dictionary.insert(entry.title, entry.forms.iter().map(|f| Suffix::parse(f)).collect());
        }
        Ok(dictionary)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let dictionary = Self::from_json(&json)?;
        info!(path = %path.display(), entries = dictionary.len(), "loaded affix dictionary");
        Ok(dictionary)
    }

    pub fn insert(&mut self, key: impl Into<String>, suffixes: Vec<Suffix>) {
        self.entries.insert(key.into(), suffixes);
    }

    pub fn entry(&self, key: &str) -> Option<&[Suffix]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Attaches `stem` to every suffix under `key`. Absent cells and object
    /// breaks pass through as markers. A missing or empty entry is
    /// `FormNotFound`.
    pub fn lookup(&self, stem: &str, key: &str) -> Result<Vec<Form>> {
        let suffixes = match self.entry(key) {
            Some(suffixes) if !suffixes.is_empty() => suffixes,
            _ => return Err(ConjugatorError::FormNotFound(key.to_string())),
        };

        Ok(suffixes
            .iter()
            .map(|suffix| match suffix {
                Suffix::Absent => Form::Absent,
                Suffix::ObjectBreak => Form::ObjectBreak,
                Suffix::Plain(s) => Form::Word(format!("{stem}{s}")),
                Suffix::Alternatives(a, b) => {
                    Form::Alternatives(vec![format!("{stem}{a}"), format!("{stem}{b}")])
                }
            })
            .collect())
    }
}

/// Builds a dictionary key, e.g. `key(1, "pres", true, "std")` gives
/// `1.pres.neg.std`.
pub fn key(class: u8, code: &str, negative: bool, namespace: &str) -> String {
    if negative {
        format!("{class}.{code}.neg.{namespace}")
    } else {
        format!("{class}.{code}.{namespace}")
    }
}
