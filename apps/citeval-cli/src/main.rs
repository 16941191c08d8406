//! citeval - Citation validation analysis
//!
//! Reads the JSON report of a batch citation-validation run, writes an
//! analysis document and prints a summary for the operator.

use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use citeval_core::{analyze_report, load_report, render_summary, write_analysis, AnalysisConfig};
use clap::{Args, Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Command-line arguments for citeval
#[derive(Parser, Debug)]
#[command(name = "citeval")]
#[command(about = "Analyze citation validation results")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Running without a subcommand analyzes a report
    #[command(flatten)]
    analyze: AnalyzeArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a validation report
    Analyze(AnalyzeArgs),
    /// Convert a GROBID TEI document into BibTeX entries
    TeiToBib(TeiArgs),
}

#[derive(Args, Debug)]
struct AnalyzeArgs {
    /// Input JSON file with validation results
    #[arg(long, default_value = "citation_validation_results.json")]
    input: PathBuf,

    /// Output JSON file for analysis results
    #[arg(long, default_value = "validation_analysis.json")]
    output: PathBuf,
}

#[derive(Args, Debug)]
struct TeiArgs {
    /// TEI XML file produced by GROBID
    input: PathBuf,

    /// BibTeX file to write
    #[arg(long, default_value = "output.bib")]
    output: PathBuf,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Some(Command::Analyze(args)) => run_analysis(&args),
        Some(Command::TeiToBib(args)) => run_tei_to_bib(&args),
        None => run_analysis(&cli.analyze),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run_analysis(args: &AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let report = load_report(&args.input)?;
    info!("Analyzing {} validation results", report.record_count());

    let analysis = analyze_report(report, &AnalysisConfig::default());
    write_analysis(&args.output, &analysis)?;

    println!("{}", render_summary(&analysis, &args.output));
    Ok(())
}

fn run_tei_to_bib(args: &TeiArgs) -> Result<(), Box<dyn Error>> {
    info!("Converting TEI bibliography from: {}", args.input.display());
    let written = citeval_tei::convert_file(&args.input, &args.output)?;
    info!("Wrote {} entries to: {}", written, args.output.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_subcommand() {
        let cli = Cli::try_parse_from(["citeval"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.analyze.input, PathBuf::from("citation_validation_results.json"));
        assert_eq!(cli.analyze.output, PathBuf::from("validation_analysis.json"));
    }

    #[test]
    fn test_top_level_paths() {
        let cli = Cli::try_parse_from(["citeval", "--input", "in.json", "--output", "out.json"]).unwrap();
        assert_eq!(cli.analyze.input, PathBuf::from("in.json"));
        assert_eq!(cli.analyze.output, PathBuf::from("out.json"));
    }

    #[test]
    fn test_tei_subcommand() {
        let cli = Cli::try_parse_from(["citeval", "tei-to-bib", "paper.tei.xml"]).unwrap();
        match cli.command {
            Some(Command::TeiToBib(args)) => {
                assert_eq!(args.input, PathBuf::from("paper.tei.xml"));
                assert_eq!(args.output, PathBuf::from("output.bib"));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
