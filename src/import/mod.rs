// src/import/mod.rs
pub mod clean;
pub mod read;
pub mod school;
pub mod types;
pub mod write;

use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
    time::Instant,
};
use tracing::{debug, info, warn};

use crate::clock::{Clock, SystemClock};

pub use clean::strip_outer_quotes;
pub use read::read_tsv_rows;
pub use school::map_school_type;
pub use types::{Prompt, RawRow};
pub use write::write_json_array;

pub const DEFAULT_SOURCE: &str = "raw_data.tsv";
pub const DEFAULT_DESTINATION: &str = "data/prompts.json";

/// Where the importer reads from and writes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportPaths {
    pub source: PathBuf,
    pub destination: PathBuf,
}

impl Default for ImportPaths {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            destination: PathBuf::from(DEFAULT_DESTINATION),
        }
    }
}

/// Result of a completed import pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportOutcome {
    /// Output written with this many records.
    Success(usize),
    /// Source file does not exist; nothing was written.
    SourceMissing,
}

/// Build the output record for one row, stamping it with `clock`.
pub fn to_prompt(row: &RawRow, clock: &impl Clock) -> Prompt {
    Prompt {
        id: row.get("id").to_string(),
        title: row.get("title").to_string(),
        school_type: map_school_type(row.get("school")),
        subject: row.get("subject").to_string(),
        content: strip_outer_quotes(row.get("prompt")).to_string(),
        description: row.get("description").to_string(),
        created_at: clock.timestamp(),
    }
}

/// Convert `paths.source` into a JSON array at `paths.destination`.
///
/// A missing source is reported as [`ImportOutcome::SourceMissing`]; any other
/// I/O or parse failure is returned as an error.
#[tracing::instrument(level = "info", skip(paths, clock), fields(source = %paths.source.display()))]
pub fn import_with(paths: &ImportPaths, clock: &impl Clock) -> Result<ImportOutcome> {
    let start = Instant::now();

    let file = match File::open(&paths.source) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!("source file not found");
            return Ok(ImportOutcome::SourceMissing);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("opening {}", paths.source.display()));
        }
    };

    let source_name = display_name(&paths.source);
    let rows = read_tsv_rows(BufReader::new(file), &source_name)?;
    info!(rows = rows.len(), "parsed source");

    let prompts: Vec<Prompt> = rows
        .iter()
        .map(|row| {
            let prompt = to_prompt(row, clock);
            debug!(id = %prompt.id, school_type = %prompt.school_type, "converted row");
            prompt
        })
        .collect();

    write_json_array(&paths.destination, &prompts)?;
    info!(
        count = prompts.len(),
        destination = %paths.destination.display(),
        elapsed = ?start.elapsed(),
        "wrote prompts"
    );

    Ok(ImportOutcome::Success(prompts.len()))
}

/// Console line for an outcome of importing from `source`.
pub fn report(outcome: ImportOutcome, source: &Path) -> String {
    match outcome {
        ImportOutcome::Success(n) => format!("Successfully imported {} prompts.", n),
        ImportOutcome::SourceMissing => format!("{} not found.", display_name(source)),
    }
}

/// Run the import with the default paths and wall-clock time, printing the
/// outcome to stdout.
pub fn import_data() -> Result<()> {
    let paths = ImportPaths::default();
    let outcome = import_with(&paths, &SystemClock)?;
    println!("{}", report(outcome, &paths.source));
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
