//! Module for resolving the candidate host list.
//!
//! The hosts to probe come from two sources that are merged in order:
//! - the comma separated `--hosts` option, or the `FIND_ACTIVE_HOSTS`
//!   environment variable when the option is absent.
//! - any number of free-form extra host arguments.
//!
//! Every host may carry a `:<port>` suffix to override the default port for
//! that host alone. Duplicates are removed preserving first-seen order; the
//! order carries no priority, all candidates are probed with equal standing.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
