//! Command line front end: estimate a square root digit by digit and report
//! how the estimate was reached.

use anyhow::{Context, Result};
use clap::Parser;
use digit_sqrt::logging;
use digit_sqrt::prelude::*;
use std::fs;
use std::path::PathBuf;

const DIAGRAM_RULE: &str = "#----------------------------";

#[derive(Parser, Debug)]
#[command(
    name = "digit-sqrt",
    version,
    about = "Digit-by-digit square root with a long-division trace"
)]
struct Cli {
    /// Number to estimate the square root of, as <digits>.<digits>
    target: String,

    /// Number of loops to continue after consuming all data
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_EXTRA_LOOPS,
        allow_negative_numbers = true
    )]
    loops: i64,

    /// Write the long-division diagram to this file
    #[arg(short = 'x', long, value_name = "PATH")]
    html: Option<PathBuf>,

    /// Print the long-division diagram
    #[arg(short, long)]
    ascii: bool,

    /// Print the result, report and iteration trace as JSON
    #[arg(short, long)]
    json: bool,

    /// Log every iteration to stderr
    #[arg(short, long)]
    debug: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);

    let numeral = Numeral::parse(&cli.target)?;
    let groups = GroupSequence::from_numeral(&numeral)?;

    let engine = DigitRootEngine::new(EngineConfig::new(cli.loops));
    let result = engine.compute_with(&groups, &LoggingTraceHandler)?;
    tracing::info!(result = %result.result_string(), digits = result.digits().len(), "estimate complete");

    let report = ErrorReport::from_result(&numeral.to_decimal()?, &result)
        .context("compute error report")?;
    let target = numeral.to_string();
    let diagram = LongDivisionDiagram::new(&result, target.as_str());

    if cli.json {
        let document = serde_json::json!({
            "target": target,
            "groups": groups.groups(),
            "result": result.result_string(),
            "report": report,
            "iterations": result.iterations(),
        });
        println!("{}", serde_json::to_string_pretty(&document)?);
    } else {
        print!("{}", report);
    }

    if cli.ascii {
        println!("{}", DIAGRAM_RULE);
        print!("{}", diagram);
    }

    if let Some(path) = &cli.html {
        fs::write(path, diagram.to_string())
            .with_context(|| format!("write diagram to {}", path.display()))?;
        tracing::info!(path = %path.display(), "diagram written");
    }

    Ok(())
}
