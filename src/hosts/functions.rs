//! The functions.
//!
use itertools::Itertools;
use log::*;

use crate::ConfigError;
use crate::hosts::Candidate;

/// Merge the comma separated host list and the extra host arguments into an
/// ordered, deduplicated list of candidates.
///
/// Deduplication happens twice: on the exact token before port-splitting, and
/// on the resolved `(host, port)` pair after, so `host1` and `host1:80` with
/// default port 80 end up as one candidate.
pub fn resolve_candidates(
    host_list: &str,
    extra_hosts: &[String],
    default_port: u16,
) -> Result<Vec<Candidate>, ConfigError>
{
    let tokens: Vec<&str> = host_list.split(',')
        .map(|host| host.trim())
        .chain(extra_hosts.iter().map(|host| host.trim()))
        .filter(|host| !host.is_empty())
        .unique()
        .collect();

    if tokens.is_empty() {
        return Err(ConfigError::NoHosts);
    }

    let candidates: Vec<Candidate> = tokens.iter()
        .map(|token| split_host_port(token, default_port))
        .collect::<Result<Vec<Candidate>, ConfigError>>()?
        .into_iter()
        .unique()
        .collect();

    info!("resolved {} candidate(s): {}", candidates.len(), candidates.iter().map(|candidate| candidate.address()).join(","));

    Ok(candidates)
}

/// Split an optional `:<port>` suffix off a host token.
///
/// A host without a suffix inherits the default port. The suffix must be a
/// number in the range 1-65535, and at most one colon is allowed.
pub fn split_host_port(
    token: &str,
    default_port: u16,
) -> Result<Candidate, ConfigError>
{
    if !token.contains(':') {
        return Ok(Candidate::new(token, default_port));
    }
    let parts: Vec<&str> = token.split(':').collect();
    if parts.len() != 2 {
        return Err(ConfigError::InvalidHost(token.to_string()));
    }
    let port = parts[1].parse::<u16>()
        .ok()
        .filter(|port| *port > 0)
        .ok_or_else(|| ConfigError::InvalidPort(token.to_string()))?;
    Ok(Candidate::new(parts[0], port))
}
