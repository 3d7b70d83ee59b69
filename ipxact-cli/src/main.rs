use std::{path, process::ExitCode};

use anyhow::Context;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use ipxact::MemoryLibrary;
use log::info;

#[derive(Parser)]
#[command(version, about, long_about = None, author = clap::crate_authors!(), subcommand_required = true)]
struct Cli {
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read and validate IP-XACT documents
    ///
    /// Exits with an error code if any of the documents is invalid.
    Check {
        /// IP-XACT documents to check
        #[arg(required = true)]
        files: Vec<path::PathBuf>,
        /// Directory of IP-XACT documents used to resolve references, e.g. extended bus
        /// definitions. Searched recursively.
        #[arg(long = "library", action = clap::ArgAction::Append)]
        libraries: Vec<path::PathBuf>,
        /// Print the found errors as JSON
        #[arg(long, action = clap::ArgAction::SetTrue)]
        json: bool,
    },
    /// Read an IP-XACT document and write it back in canonical form
    Fmt {
        file: path::PathBuf,
        /// Write into this file instead of standard output
        #[arg(short, long)]
        output: Option<path::PathBuf>,
    },
    /// List the IP-XACT documents found in a directory
    Ls { dir: path::PathBuf },
}

/// Errors found in one checked document
struct Report {
    path: path::PathBuf,
    vlnv: String,
    errors: Vec<String>,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    match cli.command {
        Command::Check {
            files,
            libraries,
            json,
        } => check(&files, &libraries, json),
        Command::Fmt { file, output } => {
            fmt(&file, output.as_deref())?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Ls { dir } => {
            ls(&dir)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn check(
    files: &[path::PathBuf],
    libraries: &[path::PathBuf],
    json: bool,
) -> anyhow::Result<ExitCode> {
    let mut library = MemoryLibrary::new();
    for dir in libraries {
        let count = library
            .load_dir(dir)
            .with_context(|| format!("could not load library {}", dir.display()))?;
        info!("Loaded {count} document(s) from {}", dir.display());
    }

    let documents = files
        .iter()
        .map(|path| {
            ipxact::read_document(path)
                .with_context(|| format!("could not read {}", path.display()))
                .map(|document| (path, document))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    // The checked documents may refer to each other
    for (_, document) in &documents {
        library.insert(document.clone());
    }

    let reports = documents
        .iter()
        .map(|(path, document)| Report {
            path: path.to_path_buf(),
            vlnv: document.vlnv().to_string(),
            errors: ipxact::find_errors(document, &library),
        })
        .collect::<Vec<_>>();

    if json {
        println!("{}", reports_to_json(&reports).pretty(4));
    } else {
        for report in &reports {
            if report.errors.is_empty() {
                println!("{}: ok", report.path.display());
            }
            for error in &report.errors {
                println!("{}: {error}", report.path.display());
            }
        }
    }

    if reports.iter().any(|report| !report.errors.is_empty()) {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn reports_to_json(reports: &[Report]) -> json::JsonValue {
    json::JsonValue::Array(
        reports
            .iter()
            .map(|report| {
                let mut object = json::JsonValue::new_object();
                object["file"] = report.path.display().to_string().into();
                object["vlnv"] = report.vlnv.clone().into();
                object["errors"] = report.errors.clone().into();
                object
            })
            .collect(),
    )
}

fn fmt(file: &path::Path, output: Option<&path::Path>) -> anyhow::Result<()> {
    let document = ipxact::read_document(file)
        .with_context(|| format!("could not read {}", file.display()))?;
    match output {
        Some(output) => ipxact::save_document(&document, output)
            .with_context(|| format!("could not write {}", output.display()))?,
        None => print!("{}", ipxact::write_document(&document)?),
    }
    Ok(())
}

fn ls(dir: &path::Path) -> anyhow::Result<()> {
    let mut library = MemoryLibrary::new();
    library
        .load_dir(dir)
        .with_context(|| format!("could not read documents from {}", dir.display()))?;
    if library.is_empty() {
        println!("ipxact: no documents found in {}", dir.display());
        return Ok(());
    }

    let documents = library.documents();
    let vlnvs = documents
        .iter()
        .map(|document| document.vlnv().to_string())
        .collect::<Vec<_>>();
    let longest = vlnvs.iter().map(String::len).max().unwrap_or(0);
    for (vlnv, document) in vlnvs.iter().zip(&documents) {
        println!("{vlnv: <longest$} {}", document.kind.tag());
    }
    Ok(())
}
