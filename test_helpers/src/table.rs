//! Guards for tests that mutate the process-wide argument table.
//!
//! Each guard holds a global re-entrant mutex for its lifetime and puts
//! the previously installed table back when dropped, so tests in one
//! binary cannot observe each other's arguments.
//!
//! # Examples
//!
//! ```
//! use test_helpers::table;
//!
//! let _guard = table::reset_args("-rare=11");
//! assert_eq!(flagtable::global::get_int_arg("-rare", 0), 11);
//! ```

use std::sync::{Arc, LazyLock};

use flagtable::{ArgTable, global};
use parking_lot::{ReentrantMutex, ReentrantMutexGuard};

use crate::argv;

static TABLE_MUTEX: LazyLock<ReentrantMutex<()>> = LazyLock::new(ReentrantMutex::default);

/// RAII guard restoring the prior process-wide table on drop.
#[must_use = "dropping restores the prior argument table"]
pub struct ArgsGuard {
    previous: Option<Arc<ArgTable>>,
    _lock: ReentrantMutexGuard<'static, ()>,
}

/// Parse `line` as whitespace-separated flags and install the result.
///
/// A dummy program name is prepended, mirroring a real argument vector.
pub fn reset_args(line: &str) -> ArgsGuard {
    let lock = TABLE_MUTEX.lock();
    let previous = global::replace(ArgTable::parse(argv::from_line(line)));
    ArgsGuard {
        previous: Some(previous),
        _lock: lock,
    }
}

impl ArgsGuard {
    /// Re-parse `line` while keeping the original table for restoration.
    pub fn reset(&self, line: &str) {
        global::parse_parameters(argv::from_line(line));
    }
}

impl Drop for ArgsGuard {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            global::install(previous);
        }
    }
}
