//! Process-wide argument table.
//!
//! Start-up code calls [`parse_parameters`] once; any caller can then use
//! the free accessors without threading an [`ArgTable`] through. A
//! re-parse builds the new table first and swaps it in with a single
//! write, so readers see either the old table or the new one.
//!
//! Code that can take a table explicitly should prefer [`ArgTable`]
//! directly.

use std::sync::{Arc, LazyLock};

use parking_lot::RwLock;
use tracing::debug;

use crate::table::ArgTable;

static TABLE: LazyLock<RwLock<Arc<ArgTable>>> = LazyLock::new(RwLock::default);

/// Parse a full argument vector (program name first) and install it.
pub fn parse_parameters<I, S>(args: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    install(ArgTable::parse(args));
}

/// Install `table` as the process-wide table.
pub fn install(table: impl Into<Arc<ArgTable>>) {
    drop(replace(table));
}

/// Replace the process-wide table, returning the previous one.
#[must_use = "use `install` when the previous table is not needed"]
pub fn replace(table: impl Into<Arc<ArgTable>>) -> Arc<ArgTable> {
    let next = table.into();
    debug!(flags = next.len(), "installing process-wide argument table");
    std::mem::replace(&mut *TABLE.write(), next)
}

/// Snapshot of the installed table.
#[must_use]
pub fn current() -> Arc<ArgTable> {
    Arc::clone(&TABLE.read())
}

/// [`ArgTable::get_bool`] against the process-wide table.
#[must_use]
pub fn get_bool_arg(name: &str) -> bool {
    TABLE.read().get_bool(name)
}

/// [`ArgTable::get_bool_or`] against the process-wide table.
#[must_use]
pub fn get_bool_arg_or(name: &str, default: bool) -> bool {
    TABLE.read().get_bool_or(name, default)
}

/// [`ArgTable::get_string`] against the process-wide table.
#[must_use]
pub fn get_arg(name: &str, default: &str) -> String {
    TABLE.read().get_string(name, default)
}

/// [`ArgTable::get_int`] against the process-wide table.
#[must_use]
pub fn get_int_arg(name: &str, default: i64) -> i64 {
    TABLE.read().get_int(name, default)
}
