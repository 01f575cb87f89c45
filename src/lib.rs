//! Streaming FASTA rewriter.
//!
//! # Overview
//! fastaswap reads a FASTA file, joins each record's sequence lines into one sequence, replaces
//! every occurrence of a literal needle sequence with a replacement sequence, and writes each
//! record back out with its sequence wrapped to a fixed line width.
//!
//! By default the eGFP coding sequence ([`EGFP_SEQUENCE`]) is swapped for the mCherry coding
//! sequence ([`MCHERRY_SEQUENCE`]) and sequences are wrapped to 80 columns.
//!
//! ## Records
//! Given this input:
//! ```text
//! >seq1
//! ATGG
//! TGAG
//! >seq2
//! CCCC
//! ```
//! a needle of `ATGGTGAG`, a replacement of `XX` and a width of 3 produce:
//! ```text
//! >seq1
//! XX
//! >seq2
//! CCC
//! C
//! ```
//!
//! Parsing is permissive. Lines are trimmed of surrounding whitespace, blank lines are skipped,
//! and lines that appear before the first header are ignored. Nothing about the sequence
//! alphabet is checked.
//!
//! ## Graph API
//! Processing is a linear [`Graph`] of ops: [`InputFastaOp`] groups lines into records,
//! [`SubstituteOp`] rewrites sequences, [`ProgressOp`] reports progress, and
//! [`OutputFastaOp`] wraps and writes records. [`process_fasta`] and [`process_reader`] build
//! and run that graph.

pub mod config;
pub mod errors;
pub mod graph;
mod parse_utils;
mod record;
mod substitution;
mod wrap;

use std::io::{BufRead, Write};
use std::path::Path;

pub use crate::config::*;
pub use crate::errors::{Error, Result};
pub use crate::graph::*;
pub use crate::parse_utils::{display_header, HEADER_DISPLAY_LEN};
pub use crate::record::*;
pub use crate::substitution::*;
pub use crate::wrap::*;

/// Rewrite the FASTA file at `input` into `output`.
///
/// Returns the number of records written.
pub fn process_fasta(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &Config,
) -> Result<usize> {
    let input = input.as_ref();
    let output = output.as_ref();

    if !input.exists() {
        return Err(Error::InputNotFound {
            file: input.display().to_string(),
        });
    }

    log::info!("Starting to process {}...", input.display());

    let mut graph = Graph::new();
    graph
        .add(InputFastaOp::from_file(input)?)
        .add(SubstituteOp::new(config.substitution()?))
        .add(ProgressOp::new())
        .add(DbgOp::new())
        .add(OutputFastaOp::from_file(output, config.width)?);
    let count = graph.run()?;

    log::info!(
        "Successfully processed {count} sequences from {} -> {}",
        input.display(),
        output.display()
    );
    Ok(count)
}

/// Rewrite FASTA records from `reader` into `writer`.
///
/// Returns the number of records written.
pub fn process_reader(
    reader: impl BufRead,
    writer: impl Write,
    config: &Config,
) -> Result<usize> {
    let mut graph = Graph::new();
    graph
        .add(InputFastaOp::from_reader(reader))
        .add(SubstituteOp::new(config.substitution()?))
        .add(ProgressOp::new())
        .add(OutputFastaOp::from_writer(writer, config.width));
    graph.run()
}
