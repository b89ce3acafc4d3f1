//! Reference extraction from markdown content
//!
//! Two line-oriented passes: citation markers establish which references
//! exist and their order, definition lines supply their text.

use crate::schema::{Extraction, OrphanDefinition, ReferenceMap};
use anyhow::{Context, Result};
use regex::Regex;
use std::path::Path;

/// `[[N](#anchor)]`
const CITATION_PATTERN: &str = r"\[\[(\d+)\]\(#(.*?)\)\]";

/// `N ... id="anchor" />text`
const DEFINITION_PATTERN: &str = r#"(\d+).*id=".*"\s*/>(.*)"#;

/// Scan markdown content for citations and their definitions
pub fn scan_references(content: &str) -> Result<Extraction> {
    let citation_re = Regex::new(CITATION_PATTERN)?;
    let definition_re = Regex::new(DEFINITION_PATTERN)?;

    let mut references = ReferenceMap::new();
    for line in content.lines() {
        for cap in citation_re.captures_iter(line) {
            references.insert_citation(&cap[1], &cap[2]);
        }
    }

    let mut orphans = Vec::new();
    for line in content.lines() {
        for cap in definition_re.captures_iter(line) {
            let (number, text) = (&cap[1], &cap[2]);
            if !references.set_definition(number, text) {
                orphans.push(OrphanDefinition {
                    number: number.to_string(),
                    text: text.to_string(),
                });
            }
        }
    }

    Ok(Extraction {
        references,
        orphans,
    })
}

/// Extract references from a markdown file, warning about orphan definitions
pub fn extract_references(path: &Path) -> Result<Extraction> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let extraction = scan_references(&content)?;
    for orphan in &extraction.orphans {
        eprintln!(
            "Warning: Reference {} ({}) not referenced in text",
            orphan.number, orphan.text
        );
    }

    Ok(extraction)
}
