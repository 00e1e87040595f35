//! Figment provider exposing a parsed argument table.
//!
//! This lets callers merge dash flags over other configuration sources and
//! extract a typed struct, rather than querying keys one at a time.

use std::sync::Arc;

use figment::{
    Figment, Metadata, Profile, Provider,
    error::Error,
    value::{Dict, Map, Value},
};
use serde::de::DeserializeOwned;

use crate::accessors::is_truthy;
use crate::global;
use crate::table::ArgTable;

/// [`Provider`] backed by an [`ArgTable`].
///
/// Keys have dashes replaced with underscores so `-log-level` feeds a
/// `log_level` field. When two spellings collapse onto one key, the one
/// that sorts last wins, so `-data_dir` beats `-data-dir`.
///
/// A flag given without `=` is emitted as `true`. Entries the table wrote
/// itself (negations and soft-set booleans) are emitted as booleans. Other
/// values use figment's scalar inference and fall back to strings, so
/// `-listen=1` arrives as a number; [`ArgsProvider::extract`] reads such
/// values into `bool` fields.
///
/// # Examples
///
/// ```
/// use figment::Figment;
/// use flagtable::{ArgTable, ArgsProvider};
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Settings {
///     threads: u16,
///     verbose: bool,
/// }
///
/// let table = ArgTable::from_flags(["-threads=4", "--verbose"]);
/// let settings: Settings = Figment::from(ArgsProvider::from(table))
///     .extract()
///     .expect("extract settings");
/// assert_eq!(settings.threads, 4);
/// assert!(settings.verbose);
/// ```
#[derive(Debug, Clone)]
pub struct ArgsProvider {
    table: Arc<ArgTable>,
    profile: Profile,
}

impl ArgsProvider {
    /// Wrap a shared table, emitting into the default profile.
    #[must_use]
    pub const fn new(table: Arc<ArgTable>) -> Self {
        Self {
            table,
            profile: Profile::Default,
        }
    }

    /// Provider over a snapshot of the process-wide table.
    #[must_use]
    pub fn from_current() -> Self {
        Self::new(global::current())
    }

    /// Emit values into `profile` instead of the default profile.
    #[must_use]
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = profile;
        self
    }

    /// Extract `T` from this provider alone.
    ///
    /// Uses figment's lossy extraction: `0`/`1` fill `bool` fields and
    /// numeric strings fill integer fields.
    ///
    /// # Errors
    ///
    /// Returns the [`figment::Error`] raised when the flags do not fit `T`.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is returned unchanged to the caller"
    )]
    pub fn extract<T: DeserializeOwned>(self) -> Result<T, Error> {
        Figment::from(self).extract_lossy()
    }

    fn config_key(name: &str) -> String {
        name.replace('-', "_")
    }

    fn config_value(&self, name: &str, raw: &str) -> Value {
        let synthesised = self.table.get_all(name).is_empty();
        if raw.is_empty() || (synthesised && matches!(raw, "0" | "1")) {
            return Value::from(is_truthy(raw));
        }
        raw.parse().unwrap_or_else(|_| Value::from(raw.to_owned()))
    }
}

impl From<ArgTable> for ArgsProvider {
    fn from(table: ArgTable) -> Self {
        Self::new(Arc::new(table))
    }
}

impl Provider for ArgsProvider {
    fn metadata(&self) -> Metadata {
        Metadata::named("command-line arguments")
    }

    fn profile(&self) -> Option<Profile> {
        Some(self.profile.clone())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        let mut entries: Vec<(&str, &str)> = self.table.iter().collect();
        entries.sort_unstable_by_key(|&(name, _)| name);
        let dict: Dict = entries
            .into_iter()
            .map(|(name, raw)| (Self::config_key(name), self.config_value(name, raw)))
            .collect();
        Ok(self.profile.collect(dict))
    }
}
