//! `folio-api parse`: read one resume from disk and write the parsed record
//! as JSON next to it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::{info, warn};

use crate::pipeline::parse_resume;
use crate::reader::read_resume;

#[derive(Parser)]
#[command(name = "folio-api")]
#[command(about = "Resume parsing service and command-line parser")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP service (default)
    Serve,
    /// Parse a resume file and write the result as JSON
    Parse {
        /// Resume to parse (.pdf, .docx, or plain text)
        input: PathBuf,

        /// Output path (defaults to <input stem>_parsed.json beside the input)
        output: Option<PathBuf>,
    },
}

/// `<stem>_parsed.json` in the input's directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}_parsed.json"))
}

pub fn run_parse(input: &Path, output: Option<&Path>) -> Result<PathBuf> {
    if !input.exists() {
        bail!("'{}' not found", input.display());
    }

    let doc = match read_resume(input) {
        Ok(doc) if doc.has_text() => doc,
        Ok(_) => bail!("no text extracted from the resume"),
        Err(e) => {
            warn!(path = %input.display(), "Failed to read resume: {e}");
            bail!("no text extracted from the resume");
        }
    };

    let parsed = parse_resume(&doc);

    let output = output.map_or_else(|| default_output_path(input), Path::to_path_buf);
    let file = File::create(&output)
        .with_context(|| format!("failed to create '{}'", output.display()))?;
    let mut writer = BufWriter::new(file);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(b"    "));
    parsed
        .serialize(&mut serializer)
        .context("failed to serialize parsed resume")?;
    writer.flush()?;

    info!(output = %output.display(), "Parsed resume saved");
    Ok(output)
}
