//! Typed lookups over an [`ArgTable`].
//!
//! Every lenient accessor degrades to a fallback instead of failing: an
//! absent key yields the caller's default, and a present key is coerced
//! from its stored string.

use crate::error::{ArgsError, ArgsResult};
use crate::table::ArgTable;
use crate::token::canonical_key;

/// Whether a stored value counts as "on": the empty string or `"1"`.
#[must_use]
pub fn is_truthy(raw: &str) -> bool {
    matches!(raw, "" | "1")
}

/// Conversion from a stored flag value into a typed result.
///
/// Implementations decide how a present value is coerced; absent keys are
/// handled by [`ArgTable::get_arg`] before the conversion is consulted.
pub trait ArgValue: Sized {
    /// Convert the stored string of a present flag.
    fn from_stored(raw: &str) -> Self;
}

impl ArgValue for String {
    fn from_stored(raw: &str) -> Self {
        raw.to_owned()
    }
}

impl ArgValue for bool {
    fn from_stored(raw: &str) -> Self {
        is_truthy(raw)
    }
}

macro_rules! lenient_integer {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl ArgValue for $ty {
                fn from_stored(raw: &str) -> Self {
                    raw.parse().unwrap_or_default()
                }
            }
        )+
    };
}

lenient_integer!(i32, i64, u32, u64);

impl ArgTable {
    /// Look up `name` and coerce it, returning `default` when absent.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagtable::ArgTable;
    ///
    /// let table = ArgTable::from_flags(["-rare=11", "-bar=NaN"]);
    /// assert_eq!(table.get_arg("-rare", 0_i64), 11);
    /// assert_eq!(table.get_arg("-bar", 5_u32), 0);
    /// assert_eq!(table.get_arg("-missing", String::from("x")), "x");
    /// ```
    #[must_use]
    pub fn get_arg<T: ArgValue>(&self, name: &str, default: T) -> T {
        self.raw(name).map_or(default, T::from_stored)
    }

    /// Boolean lookup defaulting to `false`.
    #[must_use]
    pub fn get_bool(&self, name: &str) -> bool {
        self.get_bool_or(name, false)
    }

    /// Boolean lookup with an explicit default for absent keys.
    ///
    /// A present flag is `true` only when stored as `""` or `"1"`.
    #[must_use]
    pub fn get_bool_or(&self, name: &str, default: bool) -> bool {
        self.get_arg(name, default)
    }

    /// String lookup.
    ///
    /// A flag given without `=` yields `""`, never `default`.
    #[must_use]
    pub fn get_string(&self, name: &str, default: &str) -> String {
        self.raw(name).unwrap_or(default).to_owned()
    }

    /// Integer lookup.
    ///
    /// Present values that do not parse, including the empty value of a
    /// bare flag, yield `0` rather than `default`.
    #[must_use]
    pub fn get_int(&self, name: &str, default: i64) -> i64 {
        self.get_arg(name, default)
    }

    /// Strict integer lookup.
    ///
    /// Absent keys give `Ok(None)` and a bare flag gives `Ok(Some(0))`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError::InvalidInteger`] when the stored value is
    /// neither empty nor a valid integer.
    pub fn try_get_int(&self, name: &str) -> ArgsResult<Option<i64>> {
        let Some(raw) = self.raw(name) else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(Some(0));
        }
        raw.parse()
            .map(Some)
            .map_err(|_| ArgsError::InvalidInteger {
                name: canonical_key(name).to_owned(),
                value: raw.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::is_truthy;
    use crate::error::ArgsError;
    use crate::table::ArgTable;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("1", true)]
    #[case("0", false)]
    #[case("2", false)]
    #[case("true", false)]
    fn coerces_truthiness(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(is_truthy(raw), expected);
    }

    #[rstest]
    #[case(false)]
    #[case(true)]
    fn absent_bool_uses_default(#[case] default: bool) {
        let table = ArgTable::from_flags(["-rare"]);
        assert_eq!(table.get_bool_or("-fo", default), default);
        assert_eq!(table.get_bool_or("-rareo", default), default);
        assert!(!table.get_bool("-fo"));
    }

    #[rstest]
    #[case::empty_table(&[])]
    #[case::other_flags(&["-bar=12", "-rareo"])]
    fn absent_keys_return_defaults(#[case] flags: &[&str]) {
        let table = ArgTable::from_flags(flags);
        assert_eq!(table.get_int("-rare", 11), 11);
        assert_eq!(table.get_int("-rare", 0), 0);
        assert_eq!(table.get_string("-rare", "eleven"), "eleven");
        assert_eq!(table.get_string("-rare", ""), "");
        assert_eq!(table.get_arg("-rare", 7_u32), 7);
    }

    #[test]
    fn accessors_accept_any_dash_form() {
        let table = ArgTable::from_flags(["--rare=verbose"]);
        assert_eq!(table.get_string("-rare", ""), "verbose");
        assert_eq!(table.get_string("--rare", ""), "verbose");
        assert_eq!(table.get_string("rare", ""), "verbose");
    }

    #[rstest]
    #[case::bare("-rare", Some(0))]
    #[case::number("-rare=-42", Some(-42))]
    fn strict_integer_accepts_numbers(#[case] flag: &str, #[case] expected: Option<i64>) {
        let table = ArgTable::from_flags([flag]);
        assert_eq!(table.try_get_int("-rare"), Ok(expected));
        assert_eq!(table.try_get_int("-missing"), Ok(None));
    }

    #[test]
    fn strict_integer_rejects_garbage() {
        let table = ArgTable::from_flags(["-rare=NaN"]);
        assert_eq!(
            table.try_get_int("-rare"),
            Err(ArgsError::InvalidInteger {
                name: "rare".to_owned(),
                value: "NaN".to_owned(),
            })
        );
        assert_eq!(table.get_int("-rare", 1), 0);
    }

    #[test]
    fn narrow_integers_fall_back_to_zero_on_overflow() {
        let table = ArgTable::from_flags(["-big=5000000000"]);
        assert_eq!(table.get_arg("-big", 7_i32), 0);
        assert_eq!(table.get_arg("-big", 7_i64), 5_000_000_000);
    }
}
