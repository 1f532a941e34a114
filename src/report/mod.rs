//! Module for reporting the race verdict.
//!
//! Stdout receives exactly one line: the winning host, or the
//! `NO_AVAILABLE_SERVER` sentinel. With `--quiet` the sentinel is suppressed
//! so that scripts can rely on the exit status alone: 0 for a winner, 1 for
//! no active server.
mod functions;

pub use functions::*;
