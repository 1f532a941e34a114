use regex::Regex;
use std::{sync::Arc, time::Duration};

use crate::hosts::Candidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Http,
    Https,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::Http => "http",
            Protocol::Https => "https",
        }
    }
}

/// The run-wide probe configuration.
///
/// Constructed once before the race starts and shared read-only across the
/// workers via [Arc], it is never mutated during the race.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub default_port: u16,
    pub protocol: Protocol,
    pub url_path: String,
    /// The success pattern: the content signature in a probe response that
    /// indicates the probed instance is the active one.
    pub regex: Regex,
    pub accept_invalid_certs: bool,
    pub request_timeout: Duration,
    pub run_timeout: Duration,
    pub parallel: usize,
    pub quiet: bool,
}

/// The classified result of probing one candidate.
#[derive(Debug, Clone)]
pub enum ProbeOutcome {
    Matched { candidate: Candidate, latency: Duration },
    ReachableNoMatch { candidate: Candidate },
    Unreachable { candidate: Candidate },
}

impl ProbeOutcome {
    pub fn candidate(&self) -> &Candidate {
        match self {
            ProbeOutcome::Matched { candidate, .. } => candidate,
            ProbeOutcome::ReachableNoMatch { candidate } => candidate,
            ProbeOutcome::Unreachable { candidate } => candidate,
        }
    }
}

/// The capability the race engine needs from a probe implementation.
///
/// The engine races candidates against any [Prober]; [super::HttpProber] is
/// the production implementation, tests use scripted ones.
pub trait Prober: Send + Sync {
    fn probe(&self, candidate: &Candidate) -> ProbeOutcome;
}

/// Probes a candidate over HTTP(S) with the blocking reqwest client.
///
/// The client is built once and shared by all workers, so connection settings
/// (timeout, TLS verification) are applied uniformly.
pub struct HttpProber {
    pub(super) client: reqwest::blocking::Client,
    pub(super) config: Arc<ProbeConfig>,
}
