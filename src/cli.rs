use std::ffi::OsString;

use clap::{Arg, ArgAction, ArgMatches, Command};

use crate::declare::Currency;

const ABOUT: &str = "By default, all currencies are fetched. Use flags to filter.";

/// Parsed command line: the currencies to print, in declared order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cli {
    pub targets: Vec<Currency>,
}

impl Cli {
    /// Parses the process arguments; prints help or an error and exits when clap says so.
    pub fn parse() -> Self {
        let matches = command().get_matches_from(normalize_args(std::env::args_os()));
        Cli::from_matches(&matches)
    }

    pub fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let matches = command().try_get_matches_from(normalize_args(args))?;
        Ok(Cli::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Cli {
            targets: select_targets(|currency| matches.get_flag(currency.flag())),
        }
    }
}

/// One boolean flag per currency, generated from `Currency::iterator`.
pub fn command() -> Command {
    let usage = Currency::iterator()
        .map(|c| format!("[-{}]", c.flag()))
        .collect::<Vec<_>>()
        .join(" ");

    Currency::iterator().fold(
        Command::new("toman")
            .about(ABOUT)
            .override_usage(format!("toman {}", usage)),
        |cmd, currency| {
            cmd.arg(
                Arg::new(currency.flag())
                    .long(currency.flag())
                    .help(currency.description())
                    .action(ArgAction::SetTrue),
            )
        },
    )
}

/// Flagged currencies in declared order, or every currency when none is flagged.
pub fn select_targets<F>(is_set: F) -> Vec<Currency>
where
    F: Fn(Currency) -> bool,
{
    let flagged: Vec<Currency> = Currency::iterator().filter(|c| is_set(*c)).collect();
    if flagged.is_empty() {
        Currency::iterator().collect()
    } else {
        flagged
    }
}

/// Rewrites the Go-style currency flags (`-usd`, `-usd=true`, `-usd=false`) to
/// the long form clap expects (`--usd`), or drops them when set to false.
///
/// A flag given more than once takes its last value. Anything else, including
/// unknown single-dash words, is passed through for clap to accept or reject.
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut normalized: Vec<OsString> = args.next().into_iter().collect();
    let mut selected: Vec<Currency> = Vec::new();

    for arg in args {
        match currency_flag(&arg) {
            Some((currency, true)) => {
                if !selected.contains(&currency) {
                    selected.push(currency);
                }
            }
            Some((currency, false)) => selected.retain(|c| *c != currency),
            None => normalized.push(arg),
        }
    }

    normalized.extend(
        selected
            .iter()
            .map(|c| OsString::from(format!("--{}", c.flag()))),
    );
    normalized
}

/// Reads `-name`, `--name`, `-name=<bool>` or `--name=<bool>` for a currency flag.
///
/// Returns `None` for anything else, including a value that is not a boolean.
fn currency_flag(arg: &OsString) -> Option<(Currency, bool)> {
    let s = arg.to_str()?;
    let body = s.strip_prefix("--").or_else(|| s.strip_prefix('-'))?;
    let (name, value) = match body.split_once('=') {
        Some((name, value)) => (name, Some(value)),
        None => (body, None),
    };

    let currency = Currency::iterator().find(|c| c.flag() == name)?;
    match value {
        None => Some((currency, true)),
        Some(value) => parse_bool(value).map(|set| (currency, set)),
    }
}

/// Boolean spellings accepted after `=`, the same set Go's flag package takes.
fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "true" | "TRUE" | "True" => Some(true),
        "0" | "f" | "F" | "false" | "FALSE" | "False" => Some(false),
        _ => None,
    }
}
