//! MenuHub data transformer CLI
//!
//! Converts a menu spreadsheet into a SQL script updating item attributes,
//! pairing recommendations, spice-level filter tags and their media rows.
//! The tool only generates SQL text; it never touches a database.

mod input;
mod pipeline;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use colored::*;

use pipeline::{MissingColumns, UuidGenerator};

#[derive(Parser, Debug)]
#[command(name = "menuhub-cli", version, about = "Generate MenuHub SQL update scripts from a menu spreadsheet")]
struct Args {
    /// Menu spreadsheet to convert (.xlsx, .xls or .csv, first row = headers)
    input: PathBuf,

    /// Location ID embedded in generated filter-tag rows
    #[arg(long)]
    location_id: String,

    /// Where to write the SQL script
    #[arg(short, long, default_value = pipeline::OUTPUT_FILE_NAME)]
    output: PathBuf,

    /// Disable colored status output
    #[arg(long)]
    no_color: bool,
}

fn main() {
    env_logger::init();
    if let Err(err) = run(Args::parse()) {
        eprintln!("{}", error_message(&err).red());
        std::process::exit(1);
    }
}

/// Render a run failure, calling out bad spreadsheet headers as a
/// configuration problem rather than an I/O one.
fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<MissingColumns>() {
        Some(missing) => format!("Configuration Error: {}", missing),
        None => format!("Error: {:#}", err),
    }
}

fn run(args: Args) -> Result<()> {
    if args.no_color {
        colored::control::set_override(false);
    }

    if args.location_id.is_empty() {
        bail!("Location ID must not be empty: it is required for creating filter tags");
    }
    if !args.input.exists() {
        bail!("Input file does not exist: {}", args.input.display());
    }

    println!("Reading {}...", args.input.display().to_string().cyan());
    let table = input::read_table(&args.input)?;

    println!("Generating SQL queries...");
    let mut ids = UuidGenerator;
    let sql = pipeline::generate_sql(&table, &args.location_id, &mut ids)?;

    fs::write(&args.output, &sql)
        .with_context(|| format!("Failed to write output to: {}", args.output.display()))?;

    println!(
        "{} {}",
        "SQL queries written to".bright_green(),
        args.output.display().to_string().bright_green().bold()
    );
    Ok(())
}
