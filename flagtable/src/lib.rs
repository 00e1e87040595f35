//! Lenient dash-flag argument table with typed lookups.
//!
//! [`ArgTable`] turns a process argument vector such as
//! `prog -rare --threads=4 -nolisten` into a mapping from flag name to
//! value. The typed accessors never fail: an absent flag yields the
//! caller's default and a present flag is coerced from its stored string.
//!
//! ```
//! use flagtable::ArgTable;
//!
//! let table = ArgTable::parse(["prog", "-rare", "--threads=4", "-nolisten"]);
//! assert!(table.get_bool("-rare"));
//! assert!(!table.get_bool_or("-listen", true));
//! assert_eq!(table.get_int("-threads", 1), 4);
//! assert_eq!(table.get_string("-missing", "fallback"), "fallback");
//! ```
//!
//! The [`global`] module keeps one table for the whole process, and
//! [`ArgsProvider`] feeds a table into `figment`.

mod accessors;
mod error;
pub mod global;
mod provider;
mod table;
mod token;

pub use accessors::{ArgValue, is_truthy};
pub use error::{ArgsError, ArgsResult};
pub use provider::ArgsProvider;
pub use table::ArgTable;
pub use token::{FlagToken, NEGATION_PREFIX, canonical_key};
