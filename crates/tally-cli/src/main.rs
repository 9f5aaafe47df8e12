//! `tally` - evaluate arithmetic from the command line or interactively.

mod render;
mod repl;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

/// Evaluate arithmetic expressions (+ - * /, unary minus, parentheses).
#[derive(Parser, Debug)]
#[command(name = "tally", version, about)]
struct Cli {
    /// Expression to evaluate; words are joined with spaces.
    /// Starts an interactive session when omitted.
    #[arg(allow_hyphen_values = true)]
    expression: Vec<String>,

    /// Print the JSON body an HTTP `/api/calculate` call would return
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.expression.is_empty() {
        repl::run(cli.json)?;
        return Ok(ExitCode::SUCCESS);
    }

    let input = cli.expression.join(" ");
    log::debug!("evaluating {:?}", input);

    if cli.json {
        let response = tally::api::handle_calculate(&render::request_body(&input));
        println!("{}", response.to_json_string());
        return Ok(if response.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        });
    }

    match tally::compute(&input) {
        Ok(value) => {
            println!("{}", render::value(value));
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{}", render::error(&input, &err));
            Ok(ExitCode::FAILURE)
        }
    }
}
