//! tkr — fetch a single stock or cryptocurrency quote and print it, either
//! as the raw upstream JSON or as a fixed launcher-workflow XML item.
//!
//! The whole program is one linear pass: load `~/.tkr.toml`, classify the
//! symbol against the configured crypto list, substitute it into the
//! matching URL template, perform one blocking GET, and render the body.
//! The first failure aborts with exit status 1.

mod cli;
mod error;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use log::debug;

use tkr_core::http_client::HttpClient;
use tkr_core::launcher;
use tkr_core::{Config, QuoteResponse, ReqwestHttpClient, Symbol};

use crate::cli::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(error) => {
            // Help and version requests are not failures; bad arguments
            // print usage and exit 1 without touching config or network.
            let requested_info = matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            );
            let _ = error.print();
            return if requested_info {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let config = Config::load()?;
    let symbol = Symbol::new(&cli.symbol);
    let kind = config.classify(&symbol);
    debug!("classified {symbol} as {kind:?}");

    let url = tkr_core::resolve_url(&config, &symbol, kind);
    let response = ReqwestHttpClient::new().get(&url)?;

    if !cli.launcher {
        println!("{}", response.body);
        return Ok(());
    }

    let quote = QuoteResponse::decode(kind, &response.body)?;
    println!("{}", launcher::fragment(&quote));
    Ok(())
}
