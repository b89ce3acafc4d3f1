//! renumber-refs: Sequential renumbering of markdown footnote references
//!
//! - extract: citation markers and definition lines
//! - rewrite: substitution of new numbers
//! - renumber: the CLI command

pub mod error;
pub mod extract;
pub mod renumber;
pub mod rewrite;
pub mod schema;

pub use error::InputFileError;
pub use extract::{extract_references, scan_references};
pub use rewrite::{renumber_file, renumber_text, rewrite_references, Renumbered};
pub use schema::{
    Assignment, Extraction, OrphanDefinition, ReferenceEntry, ReferenceMap, RenumberReport,
};
