//! Module for probing one candidate host.
//!
//! A probe performs a single bounded-time HTTP(S) request and classifies the
//! outcome:
//! - [ProbeOutcome::Matched]: the response body matched the success pattern,
//!   this candidate is the active server.
//! - [ProbeOutcome::ReachableNoMatch]: the candidate responded but the pattern
//!   is absent, so it is a standby.
//! - [ProbeOutcome::Unreachable]: connection, DNS, TLS or timeout failure.
//!
//! The HTTP status code is deliberately not checked, only the body content:
//! status endpoints of some services answer non-200 on followers while still
//! serving a useful body.
//!
//! A probe never fails past its boundary: every error becomes
//! [ProbeOutcome::Unreachable], and retrying is not a probe concern.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
