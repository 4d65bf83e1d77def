//! Synonym dictionary mapping each word to the other members of its group.
//!
//! A group line such as `jog run sprint` produces three entries:
//!
//! - `jog` → `[run, sprint]`
//! - `run` → `[jog, sprint]`
//! - `sprint` → `[jog, run]`
//!
//! A word is never stored as its own synonym, but it is always the first of
//! its own [`candidates`](SynonymDictionary::candidates).
//!
//! When a word shows up in more than one group, the later group replaces the
//! earlier entry for that word only (last group wins). The other members of
//! the earlier group keep pointing at it, so synonymy is not guaranteed to be
//! symmetric across groups. [`SynonymDictionary::from_synonym_groups_strict`]
//! rejects such input instead.

use std::fs;
use std::path::Path;
use std::str::FromStr;

use ahash::{AHashMap, AHashSet};
use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::word::WordAnalyzer;
use crate::error::{Result, SynOverlapError};

/// On-disk layout of a synonym file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SynonymFormat {
    /// One group per line, words separated by whitespace.
    #[default]
    Lines,
    /// A JSON array of string arrays: `[["jog", "run"], ["big", "large"]]`.
    Json,
}

impl FromStr for SynonymFormat {
    type Err = SynOverlapError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "lines" | "txt" | "text" => Ok(SynonymFormat::Lines),
            "json" => Ok(SynonymFormat::Json),
            other => Err(SynOverlapError::configuration(format!(
                "unknown synonym format '{other}'"
            ))),
        }
    }
}

/// Immutable word → synonyms index.
#[derive(Debug, Clone)]
pub struct SynonymDictionary {
    entries: AHashMap<String, Vec<String>>,
    /// Largest candidate list (word plus its synonyms) of any entry.
    max_candidates: usize,
}

impl Default for SynonymDictionary {
    fn default() -> Self {
        Self {
            entries: AHashMap::new(),
            max_candidates: 1,
        }
    }
}

impl SynonymDictionary {
    /// Create an empty dictionary. Every word is only equivalent to itself.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dictionary from synonym groups, later groups overwriting
    /// earlier entries for repeated words.
    pub fn from_synonym_groups<I, G, S>(groups: I) -> Result<Self>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(groups, false)
    }

    /// Build a dictionary, failing with a configuration error when a word
    /// belongs to more than one group.
    pub fn from_synonym_groups_strict<I, G, S>(groups: I) -> Result<Self>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::build(groups, true)
    }

    fn build<I, G, S>(groups: I, strict: bool) -> Result<Self>
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: AHashMap<String, Vec<String>> = AHashMap::new();
        let mut owner: AHashMap<String, usize> = AHashMap::new();

        for (line, group) in groups.into_iter().enumerate() {
            let group: Vec<String> = group.into_iter().map(Into::into).collect();
            if group.is_empty() {
                continue;
            }

            for term in &group {
                if let Some(&previous) = owner.get(term)
                    && previous != line
                {
                    if strict {
                        return Err(SynOverlapError::configuration(format!(
                            "word '{}' appears in synonym groups {} and {}",
                            term,
                            previous + 1,
                            line + 1
                        )));
                    }
                    log::warn!(
                        "synonym group {} overrides group {} for '{}'",
                        line + 1,
                        previous + 1,
                        term
                    );
                }
                owner.insert(term.clone(), line);

                let mut seen = AHashSet::new();
                let synonyms: Vec<String> = group
                    .iter()
                    .filter(|other| *other != term && seen.insert(other.as_str()))
                    .cloned()
                    .collect();
                entries.insert(term.clone(), synonyms);
            }
        }

        let max_candidates = entries
            .values()
            .map(|synonyms| synonyms.len() + 1)
            .max()
            .unwrap_or(1);

        log::debug!(
            "built synonym dictionary with {} words, largest class {}",
            entries.len(),
            max_candidates
        );

        Ok(Self {
            entries,
            max_candidates,
        })
    }

    /// Parse the line format: one group per line, normalized the same way
    /// documents are.
    pub fn parse_lines(content: &str, strict: bool) -> Result<Self> {
        let analyzer = WordAnalyzer::new();
        let groups = content
            .lines()
            .map(|line| analyzer.words(line))
            .collect::<Result<Vec<_>>>()?;
        Self::build(groups, strict)
    }

    /// Parse the JSON format: an array of string arrays.
    ///
    /// Each term must normalize to exactly one word, since documents are
    /// compared word by word. Terms that normalize to nothing are dropped.
    pub fn parse_json(content: &str, strict: bool) -> Result<Self> {
        let raw_groups: Vec<Vec<String>> = serde_json::from_str(content).map_err(|e| {
            SynOverlapError::parse(format!("Failed to parse synonym dictionary JSON: {e}"))
        })?;

        let analyzer = WordAnalyzer::new();
        let mut groups = Vec::with_capacity(raw_groups.len());
        for (index, raw_group) in raw_groups.iter().enumerate() {
            let mut group = Vec::with_capacity(raw_group.len());
            for term in raw_group {
                let mut words = analyzer.words(term)?;
                match words.len() {
                    0 => log::debug!("dropping empty term {term:?} in synonym group {}", index + 1),
                    1 => group.extend(words.pop()),
                    _ => {
                        return Err(SynOverlapError::parse(format!(
                            "synonym group {} contains multi-word term {term:?}",
                            index + 1
                        )));
                    }
                }
            }
            groups.push(group);
        }
        Self::build(groups, strict)
    }

    /// Load a synonym dictionary from a file.
    pub fn load_from_file<P: AsRef<Path>>(
        path: P,
        format: SynonymFormat,
        strict: bool,
    ) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            SynOverlapError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to read synonym dictionary file '{}': {}",
                    path.display(),
                    e
                ),
            ))
        })?;

        match format {
            SynonymFormat::Lines => Self::parse_lines(&content, strict),
            SynonymFormat::Json => Self::parse_json(&content, strict),
        }
    }

    /// The declared synonyms of `word`, excluding the word itself. Empty when
    /// the word has no entry.
    pub fn synonyms_of(&self, word: &str) -> &[String] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The equivalence class of `word`: the word first, then its synonyms,
    /// without duplicates.
    pub fn candidates<'a>(&'a self, word: &'a str) -> Vec<&'a str> {
        let synonyms = self.synonyms_of(word);
        let mut candidates = Vec::with_capacity(synonyms.len() + 1);
        candidates.push(word);
        for synonym in synonyms {
            if !candidates.contains(&synonym.as_str()) {
                candidates.push(synonym.as_str());
            }
        }
        candidates
    }

    /// Whether `word` has an entry.
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Number of words with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no synonyms are declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Size of the largest equivalence class. Together with the tuple size
    /// this bounds expansion: at most `max_group_size ^ N` variants per tuple.
    pub fn max_group_size(&self) -> usize {
        self.max_candidates
    }
}
