//! Programmer-error checks.
//!
//! Out-of-range indices and inverting a singular matrix are caller bugs, not recoverable
//! errors. When checks are active (debug builds, or the `strict-checks` feature) a failed
//! check logs the violation and panics. Otherwise it's a no-op, and the caller gets whatever
//! the unchecked path produces: the last component for a bad index, Inf/NaN for a singular
//! inverse.

use std::panic::Location;

/// Whether contract checks are compiled in.
pub const fn checks_enabled() -> bool {
    cfg!(any(debug_assertions, feature = "strict-checks"))
}

/// Assert `condition`. On failure, log `message` with the caller's location, then panic.
#[track_caller]
#[inline]
pub(crate) fn check(condition: bool, message: &str) {
    if checks_enabled() && !condition {
        fail(message, Location::caller());
    }
}

#[cold]
#[inline(never)]
fn fail(message: &str, location: &Location) -> ! {
    log::error!(
        "{}({}): ASSERTION FAILED: {}",
        location.file(),
        location.line(),
        message
    );
    panic!("assertion failed: {message}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passing_check_is_silent() {
        check(true, "never fires");
    }

    #[test]
    #[cfg(any(debug_assertions, feature = "strict-checks"))]
    #[should_panic(expected = "assertion failed: determinant != 0")]
    fn failing_check_panics_with_message() {
        let _ = env_logger::builder().is_test(true).try_init();
        check(false, "determinant != 0");
    }

    #[test]
    fn checks_follow_build_mode() {
        assert_eq!(
            checks_enabled(),
            cfg!(debug_assertions) || cfg!(feature = "strict-checks")
        );
    }
}
