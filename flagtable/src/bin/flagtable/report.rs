//! Evaluation of queries and rendering of the results.

use std::collections::BTreeMap;
use std::io::{self, Write};

use flagtable::ArgTable;
use serde::Serialize;
use thiserror::Error;

use crate::cli::{CommandLine, Format, Query};

/// Failures raised while evaluating a command line.
#[derive(Debug, Error)]
pub enum ReportError {
    /// A query default did not fit the lookup type.
    #[error("default for '{name}' is not {expected}: '{value}'")]
    InvalidDefault {
        /// Flag name as given.
        name: String,
        /// Offending default.
        value: String,
        /// Description of the accepted form.
        expected: &'static str,
    },
    /// Writing the report failed.
    #[error("failed to write report: {0}")]
    Io(#[from] io::Error),
    /// Serializing the JSON report failed.
    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Resolved value of a single query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Resolved {
    /// Result of `--bool`.
    Bool(bool),
    /// Result of `--string`.
    Text(String),
    /// Result of `--int`.
    Int(i64),
}

/// One answered query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    /// Flag name as given.
    pub flag: String,
    /// Resolved value.
    pub value: Resolved,
}

/// Everything the inspector prints.
#[derive(Debug, Default, Serialize)]
pub struct Report {
    /// Answers in the order bool, string, int queries were given.
    pub answers: Vec<Answer>,
    /// Sorted table contents when `--dump` was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<BTreeMap<String, String>>,
}

/// Resolve the queries of `cli` against `table`.
pub fn evaluate(cli: &CommandLine, table: &ArgTable) -> Result<Report, ReportError> {
    let mut answers = Vec::new();
    for query in &cli.bools {
        let default = bool_default(query)?;
        answers.push(answer(query, Resolved::Bool(table.get_bool_or(&query.name, default))));
    }
    for query in &cli.strings {
        let default = query.default.as_deref().unwrap_or_default();
        answers.push(answer(query, Resolved::Text(table.get_string(&query.name, default))));
    }
    for query in &cli.ints {
        let default = int_default(query)?;
        answers.push(answer(query, Resolved::Int(table.get_int(&query.name, default))));
    }
    let dump = cli.dump.then(|| {
        table
            .iter()
            .map(|(k, v)| (k.to_owned(), v.to_owned()))
            .collect()
    });
    Ok(Report {
        answers,
        table: dump,
    })
}

fn answer(query: &Query, value: Resolved) -> Answer {
    Answer {
        flag: query.name.clone(),
        value,
    }
}

fn invalid_default(query: &Query, raw: &str, expected: &'static str) -> ReportError {
    ReportError::InvalidDefault {
        name: query.name.clone(),
        value: raw.to_owned(),
        expected,
    }
}

fn bool_default(query: &Query) -> Result<bool, ReportError> {
    query.default.as_deref().map_or(Ok(false), |raw| match raw {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => Err(invalid_default(query, raw, "a boolean (0, 1, true, false)")),
    })
}

fn int_default(query: &Query) -> Result<i64, ReportError> {
    query.default.as_deref().map_or(Ok(0), |raw| {
        raw.parse()
            .map_err(|_| invalid_default(query, raw, "an integer"))
    })
}

/// Write `report` to `out` in the requested format.
pub fn write_report<W: Write>(
    out: &mut W,
    report: &Report,
    format: Format,
) -> Result<(), ReportError> {
    match format {
        Format::Json => {
            serde_json::to_writer(&mut *out, report)?;
            writeln!(out)?;
        }
        Format::Text => {
            for Answer { flag, value } in &report.answers {
                match value {
                    Resolved::Bool(v) => writeln!(out, "{flag} = {v}")?,
                    Resolved::Text(v) => writeln!(out, "{flag} = {v:?}")?,
                    Resolved::Int(v) => writeln!(out, "{flag} = {v}")?,
                }
            }
            for (key, value) in report.table.iter().flatten() {
                writeln!(out, "-{key}={value}")?;
            }
        }
    }
    Ok(())
}
