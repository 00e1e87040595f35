//! Builders for synthetic argument vectors.

/// Program name inserted ahead of every synthetic argument vector.
pub const PROGRAM: &str = "testflagtable";

/// Split `line` on whitespace and prepend [`PROGRAM`].
///
/// Runs of whitespace collapse, so an empty line yields only the program
/// name.
///
/// # Examples
///
/// ```
/// use test_helpers::argv;
///
/// assert_eq!(argv::from_line("-rare  -bar=1"), ["testflagtable", "-rare", "-bar=1"]);
/// assert_eq!(argv::from_line(""), ["testflagtable"]);
/// ```
#[must_use]
pub fn from_line(line: &str) -> Vec<String> {
    std::iter::once(PROGRAM)
        .chain(line.split_whitespace())
        .map(str::to_owned)
        .collect()
}
