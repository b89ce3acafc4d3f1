//! renumber command: Renumber references in a markdown file
//!
//! Extracts citations and definitions, then rewrites them sequentially
//! in order of first citation. Silent on success unless --json is given.

use crate::error::InputFileError;
use crate::extract::extract_references;
use crate::rewrite::{renumber_file, rewrite_references};
use crate::schema::RenumberReport;
use anyhow::Result;
use chrono::Utc;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args)]
pub struct RenumberArgs {
    /// Path to the input .md file
    #[arg(value_name = "INPUT_FILE", value_parser = parse_input_file)]
    pub input_file: PathBuf,

    /// Path to the output .md file
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    /// Dry run - don't write the output file
    #[arg(long)]
    pub dry_run: bool,

    /// Print a JSON summary of the renumbering to stdout
    #[arg(long)]
    pub json: bool,
}

/// Accept an existing path ending in `.md` or `.MD`
pub fn parse_input_file(arg: &str) -> std::result::Result<PathBuf, InputFileError> {
    if !Path::new(arg).exists() {
        return Err(InputFileError::NotFound(arg.to_string()));
    }
    if !(arg.ends_with(".md") || arg.ends_with(".MD")) {
        return Err(InputFileError::NotMarkdown(arg.to_string()));
    }
    Ok(PathBuf::from(arg))
}

pub fn run_renumber(args: RenumberArgs) -> Result<()> {
    let extraction = extract_references(&args.input_file)?;

    let assignments = if args.dry_run {
        let renumbered = renumber_file(&args.input_file, &extraction.references)?;
        eprintln!("Dry run - {} not written", args.output_file.display());
        renumbered.assignments
    } else {
        rewrite_references(&args.input_file, &args.output_file, &extraction.references)?
    };

    if args.json {
        let report = RenumberReport {
            input: args.input_file.display().to_string(),
            output: args.output_file.display().to_string(),
            total: extraction.references.len(),
            renumbered: assignments.iter().filter(|a| a.defined).count(),
            undefined: assignments
                .iter()
                .filter(|a| !a.defined)
                .map(|a| a.original.clone())
                .collect(),
            unreferenced: extraction
                .orphans
                .iter()
                .map(|o| o.number.clone())
                .collect(),
            assignments,
            dry_run: args.dry_run,
            timestamp: Utc::now().to_rfc3339(),
        };
        println!("{}", serde_json::to_string(&report)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_parse_input_file() {
        let dir = tempdir().unwrap();
        let lower = dir.path().join("doc.md");
        let upper = dir.path().join("DOC.MD");
        let mixed = dir.path().join("doc.Md");
        let text = dir.path().join("doc.txt");
        for path in [&lower, &upper, &mixed, &text] {
            fs::write(path, "").unwrap();
        }

        assert!(parse_input_file(lower.to_str().unwrap()).is_ok());
        assert!(parse_input_file(upper.to_str().unwrap()).is_ok());
        assert_eq!(
            parse_input_file(mixed.to_str().unwrap()),
            Err(InputFileError::NotMarkdown(mixed.display().to_string()))
        );
        assert_eq!(
            parse_input_file(text.to_str().unwrap()),
            Err(InputFileError::NotMarkdown(text.display().to_string()))
        );
    }

    #[test]
    fn test_parse_input_file_missing() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing.md");
        assert_eq!(
            parse_input_file(missing.to_str().unwrap()),
            Err(InputFileError::NotFound(missing.display().to_string()))
        );
    }

    #[test]
    fn test_run_renumber_dry_run() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("in.md");
        let output = dir.path().join("out.md");
        fs::write(&input, "[[3](#c)]\n3. <div id=\"c\" />C\n").unwrap();

        run_renumber(RenumberArgs {
            input_file: input.clone(),
            output_file: output.clone(),
            dry_run: true,
            json: false,
        })
        .unwrap();
        assert!(!output.exists());

        run_renumber(RenumberArgs {
            input_file: input,
            output_file: output.clone(),
            dry_run: false,
            json: false,
        })
        .unwrap();
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "[[1](#c)]\n1. <div id=\"c\" />C\n"
        );
    }
}
