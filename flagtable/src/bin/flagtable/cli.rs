//! Command-line surface of the `flagtable` inspector.

use clap::{Parser, ValueEnum};

/// Resolve dash flags the way `flagtable` does and print the results.
#[derive(Debug, Parser)]
#[command(
    name = "flagtable",
    about = "Show how dash flags resolve through the argument table",
    version
)]
pub struct CommandLine {
    /// Boolean lookups, optionally with a default (`rare` or `rare=1`).
    #[arg(
        long = "bool",
        value_name = "NAME[=DEFAULT]",
        value_parser = parse_query,
        allow_hyphen_values = true
    )]
    pub bools: Vec<Query>,
    /// String lookups, optionally with a default.
    #[arg(
        long = "string",
        value_name = "NAME[=DEFAULT]",
        value_parser = parse_query,
        allow_hyphen_values = true
    )]
    pub strings: Vec<Query>,
    /// Integer lookups, optionally with a default.
    #[arg(
        long = "int",
        value_name = "NAME[=DEFAULT]",
        value_parser = parse_query,
        allow_hyphen_values = true
    )]
    pub ints: Vec<Query>,
    /// Print every key in the resolved table.
    #[arg(long)]
    pub dump: bool,
    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
    /// Flags to resolve, given after `--`.
    #[arg(last = true, allow_hyphen_values = true, value_name = "FLAGS")]
    pub flags: Vec<String>,
}

/// Output rendering selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `name = value` line per entry.
    Text,
    /// A single JSON object.
    Json,
}

/// A lookup requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Flag name as typed, dashes optional.
    pub name: String,
    /// Default used when the flag is absent.
    pub default: Option<String>,
}

fn parse_query(raw: &str) -> Result<Query, String> {
    let (name, default) = raw
        .split_once('=')
        .map_or((raw, None), |(name, value)| (name, Some(value.to_owned())));
    if flagtable::canonical_key(name).is_empty() {
        return Err(format!("query '{raw}' has no flag name"));
    }
    Ok(Query {
        name: name.to_owned(),
        default,
    })
}
