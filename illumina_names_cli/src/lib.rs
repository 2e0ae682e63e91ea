// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.
//! Command-line access to the Illumina filename collectors.

pub mod config;
pub mod logging;

use crate::config::Parameters;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use illumina_names::{
    collect_field, collect_field_with, register_all, FieldSelector, IlluminaFilename, Registry,
};
use log::warn;
use std::io::{Read, Write};
use std::path::PathBuf;

/// Pull sample names, barcodes, lanes, reads and set numbers out of Illumina
/// FASTQ filenames
#[derive(Parser, Debug)]
#[clap(name = "illumina_fields", version)]
pub struct Cli {
    /// TOML parameters file [default: illumina_fields.toml next to the executable]
    #[clap(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log more; repeat for more detail
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Print the components of one filename as JSON
    Parse {
        /// e.g. sample_ACGT_L001_R1_001.fastq.gz
        filename: String,
    },

    /// Print the distinct values of one component, in order of first occurrence
    Collect {
        /// sample-name, barcode-sequence, lane, read-number or set-number
        field: FieldSelector,

        /// Filenames. Read a whitespace-separated list from stdin when omitted
        filenames: Vec<String>,
    },

    /// Call a host function, e.g. `illumina_lane`, with a list of arguments
    Call {
        /// Name of the host function; see `functions`
        function: String,

        /// Arguments passed through unchanged. The functions take exactly
        /// one: a whitespace-separated list of filenames
        #[clap(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// List the host functions and the component each one collects
    Functions,
}

/// Run one command, writing its result to `out`. Absent values print nothing.
pub fn run(
    command: Command,
    parameters: &Parameters,
    mut input: impl Read,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Parse { filename } => {
            let name = IlluminaFilename::parse(&filename)
                .with_context(|| format!("{filename} is not an Illumina FASTQ filename"))?;
            writeln!(out, "{}", serde_json::to_string_pretty(&name)?)?;
        }
        Command::Collect { field, filenames } => {
            let filenames = if filenames.is_empty() {
                let mut s = String::new();
                input
                    .read_to_string(&mut s)
                    .context("failed to read filenames from stdin")?;
                s
            } else {
                filenames.join(" ")
            };
            let values = if parameters.report_rejected {
                collect_field_with(&filenames, field, |token, err| {
                    warn!("skipping {token}: {err}");
                })
            } else {
                collect_field(&filenames, field)
            };
            if let Some(values) = values {
                writeln!(out, "{values}")?;
            }
        }
        Command::Call { function, args } => {
            let registry = host_registry()?;
            let function = registry
                .get(&function)
                .with_context(|| format!("unknown function {function:?}"))?;
            let args: Vec<&str> = args.iter().map(String::as_str).collect();
            let values = if parameters.report_rejected {
                function.invoke_with(&args, |token, err| {
                    warn!("{}: skipping {token}: {err}", function.name);
                })
            } else {
                function.invoke(&args)
            };
            if let Some(values) = values {
                writeln!(out, "{values}")?;
            }
        }
        Command::Functions => {
            let registry = host_registry()?;
            for name in registry.names() {
                if let Some(function) = registry.get(name) {
                    writeln!(out, "{name}\t{}", function.field)?;
                }
            }
        }
    }
    Ok(())
}

fn host_registry() -> Result<Registry> {
    let mut registry = Registry::new();
    register_all(&mut registry)?;
    Ok(registry)
}
