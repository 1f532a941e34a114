//! The functions.
//!
use std::env;
use log::*;
use regex::Regex;

use crate::ConfigError;
use crate::probe::Protocol;
use crate::{DEFAULT_PORT, DEFAULT_HTTPS_PORT, DEFAULT_PARALLEL, DEFAULT_REQUEST_TIMEOUT, DEFAULT_RUN_TIMEOUT};

/// The comma separated host list: `--hosts`, or `FIND_ACTIVE_HOSTS`.
///
/// An empty result is not an error here: extra host arguments may still
/// provide candidates, emptiness is judged after the merge.
pub fn set_hosts(
    option: &Option<String>,
) -> String
{
    match option {
        Some(hosts) => {
            info!("hosts argument set: using: {}", hosts);
            hosts.to_string()
        }
        None => {
            match env::var("FIND_ACTIVE_HOSTS") {
                Ok(set_var) => {
                    info!("hosts not set: set via environment: FIND_ACTIVE_HOSTS: {}", set_var);
                    set_var
                }
                Err(_e) => {
                    info!("hosts not set, and not set via environment");
                    String::new()
                }
            }
        }
    }
}

/// The default port: `--port`, `FIND_ACTIVE_PORT`, or 80 (443 with `--https`).
pub fn set_port(
    option: &Option<String>,
    protocol: Protocol,
) -> Result<u16, ConfigError>
{
    let port_string = match option {
        Some(port) => {
            info!("port argument set: using: {}", port);
            port.to_string()
        }
        None => {
            match env::var("FIND_ACTIVE_PORT") {
                Ok(set_var) => {
                    info!("port not set: set via environment: FIND_ACTIVE_PORT: {}", set_var);
                    set_var
                }
                Err(_e) => {
                    // with https the default port moves along to 443,
                    // an explicitly set port is never rewritten.
                    let default = match protocol {
                        Protocol::Http => DEFAULT_PORT,
                        Protocol::Https => DEFAULT_HTTPS_PORT,
                    };
                    info!("port not set, and not set via environment: using default: {}", default);
                    default.to_string()
                }
            }
        }
    };
    port_string.parse::<u16>()
        .ok()
        .filter(|port| *port > 0)
        .ok_or(ConfigError::InvalidPort(port_string))
}

/// The success pattern: `--regex`, or `.*` so that any responding host counts.
pub fn set_regex(
    option: &Option<String>,
) -> Result<Regex, ConfigError>
{
    match option {
        Some(regex) => Ok(Regex::new(regex.as_str())?),
        None => Ok(Regex::new(".*")?),
    }
}

/// The worker pool size: `--parallel`, `FIND_ACTIVE_PARALLEL`, or 2.
///
/// The default is deliberately small: probes are fast, the pool bounds the
/// concurrent connection fan-out rather than maximizing throughput.
pub fn set_parallel(
    option: &Option<String>,
) -> Result<usize, ConfigError>
{
    let parallel_string = match option {
        Some(parallel) => {
            info!("parallel argument set: using: {}", parallel);
            parallel.to_string()
        }
        None => {
            match env::var("FIND_ACTIVE_PARALLEL") {
                Ok(set_var) => {
                    info!("parallel not set: set via environment: FIND_ACTIVE_PARALLEL: {}", set_var);
                    set_var
                }
                Err(_e) => {
                    info!("parallel not set, and not set via environment: using default: {}", DEFAULT_PARALLEL);
                    DEFAULT_PARALLEL.to_string()
                }
            }
        }
    };
    parse_positive(&parallel_string, "parallel")
        .map(|parallel| parallel as usize)
}

/// The per-probe timeout in seconds: `--request-timeout`, `REQUEST_TIMEOUT`, or 2.
pub fn set_request_timeout(
    option: &Option<String>,
) -> Result<u64, ConfigError>
{
    let timeout_string = match option {
        Some(timeout) => {
            info!("request timeout argument set: using: {}", timeout);
            timeout.to_string()
        }
        None => {
            match env::var("REQUEST_TIMEOUT") {
                Ok(set_var) => {
                    info!("request timeout not set: set via environment: REQUEST_TIMEOUT: {}", set_var);
                    set_var
                }
                Err(_e) => DEFAULT_REQUEST_TIMEOUT.to_string(),
            }
        }
    };
    parse_positive(&timeout_string, "request timeout")
}

/// The run-level deadline in seconds: `--run-timeout`, or 60.
///
/// This bounds the total race duration even when every candidate has to time
/// out individually before NO_AVAILABLE_SERVER can be concluded.
pub fn set_run_timeout(
    option: &Option<String>,
) -> Result<u64, ConfigError>
{
    let timeout_string = match option {
        Some(timeout) => {
            info!("run timeout argument set: using: {}", timeout);
            timeout.to_string()
        }
        None => DEFAULT_RUN_TIMEOUT.to_string(),
    };
    parse_positive(&timeout_string, "run timeout")
}

fn parse_positive(
    value: &str,
    name: &'static str,
) -> Result<u64, ConfigError>
{
    value.parse::<u64>()
        .ok()
        .filter(|number| *number > 0)
        .ok_or(ConfigError::InvalidNumber { name, value: value.to_string() })
}
