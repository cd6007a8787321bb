use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use fileinfo::{FileMetadataReader, FileReport, ReportOptions};

#[derive(Parser)]
#[command(version, about = "Show version information of a .exe or .dll file")]
struct Args {
    /// Path to the .exe or .dll to show file info for
    #[arg(short, long)]
    path: PathBuf,

    /// Extra version string to print, e.g. LegalCopyright (repeatable)
    #[arg(short, long = "field", value_name = "KEY")]
    fields: Vec<String>,

    /// Print every version string of the file
    #[arg(long)]
    all: bool,

    /// Skip computing the SHA-256 of the file
    #[arg(long)]
    no_hash: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

fn run(args: Args) -> anyhow::Result<()> {
    let reader = FileMetadataReader::open(&args.path)
        .with_context(|| format!("failed to read file info of {}", args.path.display()))?;

    let options = ReportOptions {
        fields: args.fields,
        all_strings: args.all,
        hash: !args.no_hash,
    };
    let report = FileReport::collect(&reader, &options)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &report)?;
        writeln!(out)?;
    } else {
        report.write_text(&mut out)?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
