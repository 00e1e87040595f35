//! Recognition of a single dash-prefixed flag token.

/// Prefix that marks a negated flag such as `-nodebug`.
pub const NEGATION_PREFIX: &str = "no";

/// One recognised flag occurrence borrowed from a raw argument.
///
/// # Examples
///
/// ```
/// use flagtable::FlagToken;
///
/// let token = FlagToken::parse("--rare=verbose").expect("flag token");
/// assert_eq!(token.name(), "rare");
/// assert_eq!(token.value(), Some("verbose"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagToken<'a> {
    name: &'a str,
    value: Option<&'a str>,
}

impl<'a> FlagToken<'a> {
    /// Recognise `raw` as `-name`, `--name`, `-name=value` or `--name=value`.
    ///
    /// Returns `None` for anything else: tokens without a leading dash, a
    /// bare `-` or `--`, three or more leading dashes, and empty names.
    #[must_use]
    pub fn parse(raw: &'a str) -> Option<Self> {
        let rest = strip_dashes(raw)?;
        if rest.starts_with('-') {
            return None;
        }
        let (name, value) = rest
            .split_once('=')
            .map_or((rest, None), |(name, value)| (name, Some(value)));
        if name.is_empty() {
            return None;
        }
        Some(Self { name, value })
    }

    /// Canonical flag name with the dashes removed.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }

    /// Value after the first `=`, or `None` for presence-only tokens.
    #[must_use]
    pub const fn value(&self) -> Option<&'a str> {
        self.value
    }

    /// Value as recorded in the table: presence-only tokens store `""`.
    #[must_use]
    pub fn stored_value(&self) -> &'a str {
        self.value.unwrap_or_default()
    }

    /// Name this token negates when it carries the `no` prefix.
    ///
    /// `-no` on its own negates nothing.
    #[must_use]
    pub fn negated_target(&self) -> Option<&'a str> {
        self.name
            .strip_prefix(NEGATION_PREFIX)
            .filter(|target| !target.is_empty())
    }
}

/// Map an accessor name such as `-rare` or `--rare` to its table key.
///
/// Names without leading dashes are returned unchanged.
#[must_use]
pub fn canonical_key(name: &str) -> &str {
    strip_dashes(name).unwrap_or(name)
}

fn strip_dashes(raw: &str) -> Option<&str> {
    raw.strip_prefix("--").or_else(|| raw.strip_prefix('-'))
}
