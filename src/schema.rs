//! Reference model shared by the extractor and the rewriter
//!
//! Entries are keyed by their original reference number and iterate in
//! first-citation order.

use serde::Serialize;
use std::collections::HashMap;

/// A single reference cited in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceEntry {
    /// Original reference number, kept as written (e.g. "05")
    pub number: String,
    /// Anchor from the first `[[N](#anchor)]` marker
    pub anchor: String,
    /// Trailing text of the matching `id="..." />` line (None if never defined)
    pub definition: Option<String>,
}

/// Insertion-ordered map from reference number to entry
#[derive(Debug, Clone, Default)]
pub struct ReferenceMap {
    entries: Vec<ReferenceEntry>,
    index: HashMap<String, usize>,
}

impl ReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a citation marker. The first anchor seen for a number wins.
    ///
    /// Returns true if this is the first citation of `number`.
    pub fn insert_citation(&mut self, number: &str, anchor: &str) -> bool {
        if self.index.contains_key(number) {
            return false;
        }

        self.index.insert(number.to_string(), self.entries.len());
        self.entries.push(ReferenceEntry {
            number: number.to_string(),
            anchor: anchor.to_string(),
            definition: None,
        });
        true
    }

    /// Attach definition text to a cited number, replacing any earlier text.
    ///
    /// Returns false (and leaves the map untouched) if `number` was never cited.
    pub fn set_definition(&mut self, number: &str, text: &str) -> bool {
        match self.index.get(number) {
            Some(&idx) => {
                self.entries[idx].definition = Some(text.to_string());
                true
            }
            None => false,
        }
    }

    pub fn get(&self, number: &str) -> Option<&ReferenceEntry> {
        self.index.get(number).map(|&idx| &self.entries[idx])
    }

    pub fn contains(&self, number: &str) -> bool {
        self.index.contains_key(number)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReferenceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A definition line whose number is never cited in the text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrphanDefinition {
    pub number: String,
    pub text: String,
}

/// Result of scanning a document
#[derive(Debug, Clone, Default)]
pub struct Extraction {
    pub references: ReferenceMap,
    pub orphans: Vec<OrphanDefinition>,
}

/// New number given to one entry during rewriting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignment {
    pub original: String,
    pub anchor: String,
    pub new_number: usize,
    pub defined: bool,
}

/// Summary printed with --json (compact)
#[derive(Debug, Serialize)]
pub struct RenumberReport {
    pub input: String,
    pub output: String,
    pub total: usize,
    pub renumbered: usize,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub undefined: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreferenced: Vec<String>,
    pub assignments: Vec<Assignment>,
    pub dry_run: bool,
    pub timestamp: String,
}
