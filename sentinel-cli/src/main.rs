//! Sentinel CLI
//!
//! Forensic triage of diagnostic output: scan for signal tags, extract
//! `[VOID_DETECTED]` blocks, and print one escalation verdict per block.

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use sentinel_pipeline::{Pipeline, PipelineConfig, PipelineResult};

/// Two-block sample fed through the pipeline by the `demo` subcommand
const SAMPLE_OUTPUT: &str = "\
[VOID_DETECTED]: INCIDENT_TICKET | Incident record for March 15 purge
[VOID_DETECTED]: BACKUP_LOG | Post-incident snapshot confirming restore
";

#[derive(Parser)]
#[command(name = "sentinel")]
#[command(author, version, about = "Forensic signal triage for diagnostic output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbosity level (0-3)
    #[arg(short, long, default_value = "0")]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan diagnostic output from a file, or stdin when no file is given
    Scan {
        /// Input file
        file: Option<PathBuf>,

        /// Emit the result as JSON instead of the text summary
        #[arg(long)]
        json: bool,

        /// Reject input larger than this many bytes
        #[arg(long)]
        max_input_bytes: Option<usize>,
    },

    /// Run the embedded two-block demonstration sample
    Demo {
        /// Emit the result as JSON instead of the text summary
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging; stdout carries only the summary or JSON
    let log_level = match cli.verbose {
        0 => Level::ERROR,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match cli.command {
        Commands::Scan {
            file,
            json,
            max_input_bytes,
        } => {
            let text = match file {
                Some(path) => fs::read_to_string(&path)?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf)?;
                    buf
                }
            };

            let pipeline = Pipeline::new(PipelineConfig { max_input_bytes });
            let result = pipeline.process(&text)?;
            print_result(&result, json)?;
        }
        Commands::Demo { json } => {
            let result = Pipeline::default().process(SAMPLE_OUTPUT)?;
            print_result(&result, json)?;
        }
    }

    Ok(())
}

fn print_result(result: &PipelineResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
        return Ok(());
    }

    println!("Signals found: {}", result.signals_found);
    for pair in &result.escalations {
        println!("  {}: {}", pair.escalation.action, pair.escalation.result);
    }

    Ok(())
}
