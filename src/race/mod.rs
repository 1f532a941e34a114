//! Module for racing the candidate probes.
//!
//! All candidates are dispatched onto a bounded worker pool and race against
//! each other: the first probe whose outcome is a match decides the verdict,
//! and the race returns immediately without waiting for slower probes.
//!
//! Cancellation is by detaching: a stop flag makes workers that have not
//! started yet return without probing, while in-flight requests run to
//! completion in the background and their late results are discarded. The
//! process never waits for stragglers, minimizing the latency to the first
//! answer is the whole point.
//!
//! A correctly operating cluster has at most one active server. Should two
//! probes match concurrently anyway (a transient split-brain), the one whose
//! result arrives first wins; which one that is may differ between runs, and
//! resolving the split-brain is not this tool's job.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
