//! renumber-refs CLI
//!
//! Renumbers `[[N](#anchor)]` references in a markdown file sequentially,
//! in order of first citation.

use anyhow::Result;
use clap::Parser;
use renumber_refs::renumber::{run_renumber, RenumberArgs};

#[derive(Parser)]
#[command(name = "renumber-refs")]
#[command(author = "RoyalBit Inc.")]
#[command(version)]
#[command(about = "Renumber footnote-style references in a markdown file")]
#[command(long_about = "Rewrites [[N](#anchor)] citation markers and their\n<div id=\"anchor\" /> definition lines so references are numbered 1, 2, 3, ...\nin order of first citation.")]
struct Cli {
    #[command(flatten)]
    args: RenumberArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run_renumber(cli.args)
}
