use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use amlpath_catalog::catalog;
use amlpath_model::{MarkerCategory, PatientRecord};
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "amlpath",
    version,
    about = "Pediatric AML risk stratification and treatment pathway tool (GMCAII protocol)",
    long_about = "amlpath evaluates a pediatric AML patient record against the GMCAII\n\
        protocol rules: initial and MRD-adjusted risk stratification, induction\n\
        and consolidation regimen selection, and targeted-inhibitor advisories.\n\n\
        The tool is an advisory reference aid, not a source of truth.\n\n\
        EXAMPLES:\n\
        \n  amlpath report patient.json            Print the pathway report as text\n\
        \n  amlpath json patient.json              Emit the report as JSON\n\
        \n  echo '{\"wbc\": 150}' | amlpath report  Read the record from stdin\n\
        \n  amlpath markers                        List the genetic-marker catalog"
)]
struct Cli {
    /// Increase verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Evaluate a patient record and print the pathway report as text
    Report(ReportArgs),

    /// Evaluate a patient record and emit the pathway report as JSON
    #[command(about = "Emit the pathway report as JSON for shell/UI integration")]
    Json(ReportArgs),

    /// List the protocol's genetic-marker catalog grouped by category
    Markers,
}

#[derive(Debug, Args, Clone)]
struct ReportArgs {
    /// Patient record JSON file (reads from stdin if not provided)
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(level)
        .try_init();
}

fn read_record_from_input(input: &Option<PathBuf>) -> Result<PatientRecord, String> {
    let source = if let Some(path) = input {
        fs::read_to_string(path).map_err(|e| format!("failed to read '{}': {e}", path.display()))?
    } else {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read from stdin: {e}"))?;
        buf
    };
    serde_json::from_str(&source).map_err(|e| format!("invalid patient record: {e}"))
}

fn run_report(args: &ReportArgs, mode: OutputMode) -> i32 {
    let record = match read_record_from_input(&args.input) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return 2;
        }
    };
    let report = match amlpath::evaluate(&record) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("error: {e}");
            return 1;
        }
    };
    match mode {
        OutputMode::Text => print!("{}", report.render_text()),
        OutputMode::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: failed to serialize report: {e}");
                return 1;
            }
        },
    }
    0
}

fn run_markers() -> i32 {
    for category in [
        MarkerCategory::FusionGene,
        MarkerCategory::GeneMutation,
        MarkerCategory::KaryotypeAbnormality,
    ] {
        println!("{category}:");
        for m in catalog().in_category(category) {
            println!("  {:<18} {} [{}]", m.id, m.label, m.default_risk);
        }
    }
    0
}

fn run_cli() -> i32 {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Report(args) => run_report(args, OutputMode::Text),
        Command::Json(args) => run_report(args, OutputMode::Json),
        Command::Markers => run_markers(),
    }
}

fn main() {
    std::process::exit(run_cli());
}
