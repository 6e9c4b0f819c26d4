//! CLI argument definitions for tkr.
//!
//! One positional symbol, one flag. Anything else is an argument error
//! rendered by clap with the usage line.
//!
//! ```bash
//! # Raw upstream JSON
//! tkr AAPL
//!
//! # Launcher workflow item
//! tkr -a btc
//! ```

use clap::Parser;

/// Fetch a stock or crypto quote
#[derive(Debug, Parser)]
#[command(name = "tkr", version, about = "Fetch a stock or crypto quote")]
pub struct Cli {
    /// Format the output as a launcher workflow item instead of printing
    /// the raw upstream response.
    #[arg(short = 'a', long = "launcher")]
    pub launcher: bool,

    /// Ticker symbol to look up (e.g. AAPL, or BTC when configured as crypto).
    pub symbol: String,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use clap::Parser;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_symbol_and_flag() {
        let cli = Cli::try_parse_from(["tkr", "-a", "aapl"]).expect("args should parse");
        assert!(cli.launcher);
        assert_eq!(cli.symbol, "aapl");
    }

    #[test]
    fn defaults_to_raw_mode() {
        let cli = Cli::try_parse_from(["tkr", "AAPL"]).expect("args should parse");
        assert!(!cli.launcher);
    }

    #[test]
    fn rejects_missing_symbol() {
        assert!(Cli::try_parse_from(["tkr"]).is_err());
        assert!(Cli::try_parse_from(["tkr", "-a"]).is_err());
    }

    #[test]
    fn rejects_extra_positionals() {
        assert!(Cli::try_parse_from(["tkr", "AAPL", "MSFT"]).is_err());
    }
}
