//! Stderr tracing for schedule recomputes and LP solves.
//!
//! Each engine config carries a `verbosity: u8`; a message is printed when
//! that value reaches the message's level. At 0 every macro reduces to one
//! integer comparison.
//!
//! | level | constant            | what the engines print                          |
//! |-------|---------------------|-------------------------------------------------|
//! | 0     | `VERBOSITY_SILENT`  | nothing                                         |
//! | 1     | `VERBOSITY_CHANGES` | makespan and critical path, graph edits, optimum |
//! | 2     | `VERBOSITY_CHECKS`  | refused precedence edges, parallel line pairs    |
//! | 3     | `VERBOSITY_DEBUG`   | ES/EF/LS/LF per activity, each LP candidate      |

pub const VERBOSITY_SILENT: u8 = 0;
pub const VERBOSITY_CHANGES: u8 = 1;
pub const VERBOSITY_CHECKS: u8 = 2;
pub const VERBOSITY_DEBUG: u8 = 3;

/// Whether a configured verbosity prints messages of `level`.
#[inline]
pub fn enabled(verbosity: u8, level: u8) -> bool {
    level != VERBOSITY_SILENT && verbosity >= level
}

/// Outcome of a recompute or solve, and accepted edits.
#[macro_export]
macro_rules! log_changes {
    ($verbosity:expr, $($arg:tt)*) => {
        if $crate::logging::enabled($verbosity, $crate::logging::VERBOSITY_CHANGES) {
            eprintln!($($arg)*);
        }
    };
}

/// Requests the engines turned down or candidates they skipped.
#[macro_export]
macro_rules! log_checks {
    ($verbosity:expr, $($arg:tt)*) => {
        if $crate::logging::enabled($verbosity, $crate::logging::VERBOSITY_CHECKS) {
            eprintln!($($arg)*);
        }
    };
}

/// Per-activity and per-vertex detail.
#[macro_export]
macro_rules! log_debug {
    ($verbosity:expr, $($arg:tt)*) => {
        if $crate::logging::enabled($verbosity, $crate::logging::VERBOSITY_DEBUG) {
            eprintln!($($arg)*);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_thresholds() {
        assert!(!enabled(VERBOSITY_SILENT, VERBOSITY_CHANGES));
        assert!(enabled(VERBOSITY_CHANGES, VERBOSITY_CHANGES));
        assert!(!enabled(VERBOSITY_CHANGES, VERBOSITY_CHECKS));
        assert!(enabled(VERBOSITY_DEBUG, VERBOSITY_CHECKS));
        assert!(enabled(u8::MAX, VERBOSITY_DEBUG));
    }

    #[test]
    fn test_silent_level_never_prints() {
        for verbosity in [VERBOSITY_SILENT, VERBOSITY_DEBUG, u8::MAX] {
            assert!(!enabled(verbosity, VERBOSITY_SILENT));
        }
    }

    #[test]
    fn test_macros_accept_format_args() {
        let verbosity = VERBOSITY_SILENT;
        log_changes!(verbosity, "makespan {} via [{}]", 11.0, "A, C, D");
        log_checks!(verbosity, "refused {} -> {}", "D", "A");
        log_debug!(verbosity, "candidate ({}, {})", 20.0, 10.0);
    }
}
