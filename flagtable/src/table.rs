//! Construction of the argument table from raw process arguments.
//!
//! Tokens are scanned left to right and the last direct occurrence of a
//! name wins. A `-noname` token records a negated entry for `name` which
//! only takes effect when `name` never appears directly.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::ffi::OsString;

use tracing::{debug, trace};

use crate::accessors::is_truthy;
use crate::error::{ArgsError, ArgsResult};
use crate::token::{FlagToken, canonical_key};

const TRUE_VALUE: &str = "1";
const FALSE_VALUE: &str = "0";

/// Mapping from canonical flag name to its final stored value.
///
/// # Examples
///
/// ```
/// use flagtable::ArgTable;
///
/// let table = ArgTable::parse(["prog", "-rare", "--threads=4"]);
/// assert!(table.get_bool("-rare"));
/// assert_eq!(table.get_int("-threads", 1), 4);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgTable {
    values: HashMap<String, String>,
    occurrences: HashMap<String, Vec<String>>,
}

impl ArgTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from a full argument vector, discarding the program
    /// name in the first position.
    #[must_use]
    pub fn parse<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_flags(args.into_iter().skip(1))
    }

    /// Build a table from flag tokens alone, with no program name.
    #[must_use]
    pub fn from_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut table = Self::new();
        let mut negated: HashMap<String, &'static str> = HashMap::new();
        for raw in flags {
            let raw_str = raw.as_ref();
            let Some(token) = FlagToken::parse(raw_str) else {
                trace!(token = raw_str, "ignoring non-flag argument");
                continue;
            };
            if let Some(target) = token.negated_target() {
                let inverted = if is_truthy(token.stored_value()) {
                    FALSE_VALUE
                } else {
                    TRUE_VALUE
                };
                negated.insert(target.to_owned(), inverted);
            }
            table.record(token.name(), token.stored_value());
        }
        for (target, inverted) in negated {
            if table.values.contains_key(&target) {
                trace!(flag = %target, "direct occurrence overrides negation");
                continue;
            }
            trace!(flag = %target, value = inverted, "applying negated flag");
            table.values.insert(target, inverted.to_owned());
        }
        debug!(flags = table.len(), "built argument table");
        table
    }

    /// Build a table from OS arguments, discarding the program name.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::NonUnicode`] when any argument, the program
    /// name included, is not valid UTF-8.
    pub fn try_from_os_args<I>(args: I) -> ArgsResult<Self>
    where
        I: IntoIterator<Item = OsString>,
    {
        let decoded = args
            .into_iter()
            .enumerate()
            .map(|(index, arg)| {
                arg.into_string().map_err(|raw| ArgsError::NonUnicode {
                    index,
                    lossy: raw.to_string_lossy().into_owned(),
                })
            })
            .collect::<ArgsResult<Vec<_>>>()?;
        Ok(Self::parse(decoded))
    }

    /// Build a table from the arguments of the running process.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::NonUnicode`] when a process argument is not
    /// valid UTF-8.
    pub fn from_env() -> ArgsResult<Self> {
        Self::try_from_os_args(std::env::args_os())
    }

    fn record(&mut self, name: &str, value: &str) {
        self.values.insert(name.to_owned(), value.to_owned());
        self.occurrences
            .entry(name.to_owned())
            .or_default()
            .push(value.to_owned());
    }

    /// Whether `name` (with or without leading dashes) is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(canonical_key(name))
    }

    /// Stored value for `name`, if present.
    #[must_use]
    pub fn raw(&self, name: &str) -> Option<&str> {
        self.values.get(canonical_key(name)).map(String::as_str)
    }

    /// Every value supplied by direct occurrences of `name`, in order.
    ///
    /// Values synthesised by negation are not included.
    #[must_use]
    pub fn get_all(&self, name: &str) -> &[String] {
        self.occurrences
            .get(canonical_key(name))
            .map_or(&[], Vec::as_slice)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the table holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over the canonical keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Set `name` to `value` unless it is already present.
    ///
    /// Returns `true` when the table changed.
    pub fn soft_set(&mut self, name: &str, value: &str) -> bool {
        match self.values.entry(canonical_key(name).to_owned()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                debug!(flag = slot.key().as_str(), value, "soft-set flag");
                slot.insert(value.to_owned());
                true
            }
        }
    }

    /// Set `name` to `"1"` or `"0"` unless it is already present.
    ///
    /// Returns `true` when the table changed.
    pub fn soft_set_bool(&mut self, name: &str, value: bool) -> bool {
        self.soft_set(name, if value { TRUE_VALUE } else { FALSE_VALUE })
    }
}

#[cfg(test)]
mod tests {
    use super::ArgTable;
    use rstest::rstest;
    use std::ffi::OsString;

    #[test]
    fn discards_program_name() {
        let table = ArgTable::parse(["-rare"]);
        assert!(table.is_empty());
    }

    #[test]
    fn last_direct_occurrence_wins() {
        let table = ArgTable::from_flags(["-rare=1", "--rare=2", "-rare=3"]);
        assert_eq!(table.raw("-rare"), Some("3"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn skips_positional_arguments_without_stopping() {
        let table = ArgTable::from_flags(["-a", "file.txt", "-b=2"]);
        assert!(table.contains("-a"));
        assert_eq!(table.raw("b"), Some("2"));
        assert_eq!(table.len(), 2);
    }

    #[rstest]
    #[case::bare(&["-norare"], "0")]
    #[case::truthy(&["-norare=1"], "0")]
    #[case::falsy(&["-norare=0"], "1")]
    #[case::other(&["-norare=yes"], "1")]
    #[case::last_negation(&["-norare=0", "-norare"], "0")]
    fn negation_writes_inverted_value(#[case] flags: &[&str], #[case] expected: &str) {
        let table = ArgTable::from_flags(flags);
        assert_eq!(table.raw("-rare"), Some(expected));
    }

    #[rstest]
    #[case(&["-rare", "-norare"], "")]
    #[case(&["-norare", "-rare"], "")]
    #[case(&["-rare=0", "-norare=0"], "0")]
    fn direct_occurrence_beats_negation(#[case] flags: &[&str], #[case] expected: &str) {
        let table = ArgTable::from_flags(flags);
        assert_eq!(table.raw("-rare"), Some(expected));
    }

    #[test]
    fn negated_flag_keeps_its_own_entry() {
        let table = ArgTable::from_flags(["-norare=0"]);
        assert_eq!(table.raw("-norare"), Some("0"));
    }

    #[test]
    fn records_every_direct_occurrence() {
        let table = ArgTable::from_flags(["-peer=a", "-peer", "-peer=c", "-nopeer"]);
        assert_eq!(table.get_all("-peer"), ["a", "", "c"]);
        assert!(table.get_all("-missing").is_empty());
    }

    #[test]
    fn soft_set_preserves_existing_values() {
        let mut table = ArgTable::from_flags(["-listen=0"]);
        assert!(!table.soft_set_bool("-listen", true));
        assert!(table.soft_set("-port", "8333"));
        assert!(!table.soft_set("-port", "18333"));
        assert_eq!(table.raw("-listen"), Some("0"));
        assert_eq!(table.raw("-port"), Some("8333"));
    }

    #[test]
    fn rebuild_does_not_accumulate() {
        let first = ArgTable::from_flags(["-a"]);
        let second = ArgTable::from_flags(["-b"]);
        assert!(first.contains("-a"));
        assert!(!second.contains("-a"));
    }

    #[test]
    fn reads_process_arguments() {
        let expected = std::env::args().skip(1).filter(|arg| arg.starts_with('-')).count();
        let table = ArgTable::from_env();
        assert!(table.is_ok(), "test harness arguments are UTF-8: {table:?}");
        assert!(table.is_ok_and(|t| t.len() <= expected));
    }

    #[cfg(unix)]
    #[test]
    fn rejects_non_unicode_arguments() {
        use std::os::unix::ffi::OsStringExt;

        let args = vec![
            OsString::from("prog"),
            OsString::from("-ok"),
            OsString::from_vec(vec![b'-', 0xff]),
        ];
        let err = ArgTable::try_from_os_args(args).err();
        assert!(
            matches!(err, Some(super::ArgsError::NonUnicode { index: 2, .. })),
            "unexpected outcome: {err:?}"
        );
    }

    #[test]
    fn accepts_unicode_os_arguments() {
        let args = ["prog", "-naïve=ü"].map(OsString::from);
        let table = ArgTable::try_from_os_args(args);
        let value = table.ok().and_then(|t| t.raw("-naïve").map(str::to_owned));
        assert_eq!(value.as_deref(), Some("ü"));
    }
}
