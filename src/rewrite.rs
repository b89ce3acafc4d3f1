//! Reference rewriting
//!
//! Walks the references in first-citation order and substitutes new
//! sequential numbers into citation markers and definition lines.
//! The counter only advances for references that have a definition, so a
//! citation-only reference shares its number with the next defined one.

use crate::schema::{Assignment, ReferenceEntry, ReferenceMap};
use anyhow::{Context, Result};
use regex::{Captures, NoExpand, Regex};
use std::path::Path;

/// Rewritten document plus the number each entry received
#[derive(Debug, Clone)]
pub struct Renumbered {
    pub body: String,
    pub assignments: Vec<Assignment>,
}

/// Renumber every reference in `body`
pub fn renumber_text(body: &str, references: &ReferenceMap) -> Result<Renumbered> {
    let (body, _, assignments) = references.iter().try_fold(
        (body.to_string(), 1usize, Vec::with_capacity(references.len())),
        |(body, next_number, mut assignments), entry| -> Result<_> {
            let body = replace_citations(&body, entry, next_number)?;

            let (body, advance) = match &entry.definition {
                Some(text) => (replace_definition(&body, entry, text, next_number)?, 1),
                None => (body, 0),
            };

            assignments.push(Assignment {
                original: entry.number.clone(),
                anchor: entry.anchor.clone(),
                new_number: next_number,
                defined: entry.definition.is_some(),
            });

            Ok((body, next_number + advance, assignments))
        },
    )?;

    Ok(Renumbered { body, assignments })
}

/// Read `input` and renumber it in memory
pub fn renumber_file(input: &Path, references: &ReferenceMap) -> Result<Renumbered> {
    let body = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read {}", input.display()))?;
    renumber_text(&body, references)
}

/// Renumber `input` and write the result to `output`, overwriting it
pub fn rewrite_references(
    input: &Path,
    output: &Path,
    references: &ReferenceMap,
) -> Result<Vec<Assignment>> {
    let renumbered = renumber_file(input, references)?;
    std::fs::write(output, &renumbered.body)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    Ok(renumbered.assignments)
}

fn replace_citations(body: &str, entry: &ReferenceEntry, new_number: usize) -> Result<String> {
    let re = Regex::new(&format!(
        r"\[\[{}\]\(#{}\)\]",
        regex::escape(&entry.number),
        regex::escape(&entry.anchor)
    ))?;
    let marker = format!("[[{}](#{})]", new_number, entry.anchor);

    Ok(re.replace_all(body, NoExpand(&marker)).into_owned())
}

fn replace_definition(
    body: &str,
    entry: &ReferenceEntry,
    text: &str,
    new_number: usize,
) -> Result<String> {
    // The number must be a whole digit run on its line
    let re = Regex::new(&format!(
        r#"(?m)(^|[^\d\n]){}(?:[^\d\n].*)?id="{}"\s*/>{}"#,
        regex::escape(&entry.number),
        regex::escape(&entry.anchor),
        regex::escape(text)
    ))?;
    let definition = format!(r#"{}. <div id="{}" />{}"#, new_number, entry.anchor, text);

    Ok(re
        .replace_all(body, |caps: &Captures| format!("{}{}", &caps[1], definition))
        .into_owned())
}
