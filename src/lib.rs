//! find_active_server: return the currently active master from a list of candidate hosts.
//!
//! A clustered service with active/standby masters (HBase, Hadoop namenodes,
//! SolrCloud and the likes) exposes which instance is active on an HTTP(S)
//! status endpoint. This utility probes all candidate hosts in parallel and
//! prints the first one whose response body matches the success pattern,
//! which keeps the delay to roughly a single probe regardless of how many
//! candidates are given.
//!
//! The hosts can be a comma separated list (`--hosts server1,server2` or the
//! `FIND_ACTIVE_HOSTS` environment variable), mixed with free-form extra host
//! arguments, which is useful when piping a host list through xargs. Hosts may
//! carry an optional `:<port>` suffix to individually override `--port`.
//!
//! If no candidate matches, `NO_AVAILABLE_SERVER` is printed and the exit
//! status is 1; `--quiet` suppresses the message but keeps the exit status.
use clap::Parser;
use std::sync::Arc;
use anyhow::Result;
use thiserror::Error;

pub mod hosts;
pub mod probe;
pub mod race;
pub mod report;
pub mod utility;

/// The port used for hosts without a `:<port>` suffix when `--port` is not set.
pub const DEFAULT_PORT: &str = "80";
/// The port the default port is rewritten to when `--https` is set.
pub const DEFAULT_HTTPS_PORT: &str = "443";
/// The number of parallel probe workers.
pub const DEFAULT_PARALLEL: &str = "2";
/// The timeout in seconds for one individual probe.
pub const DEFAULT_REQUEST_TIMEOUT: &str = "2";
/// The overall deadline in seconds for the whole run.
pub const DEFAULT_RUN_TIMEOUT: &str = "60";

#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Opts {
    /// Comma separated list of hosts to probe ($FIND_ACTIVE_HOSTS)
    #[arg(short = 'H', long, value_name = "host,host:port,..")]
    pub hosts: Option<String>,
    /// Extra free-form host arguments, merged after --hosts
    #[arg(value_name = "HOST")]
    pub extra_hosts: Vec<String>,
    /// Port to probe on hosts without a :port suffix ($FIND_ACTIVE_PORT)
    #[arg(short, long)]
    pub port: Option<String>,
    /// Probe over https instead of http (rewrites default port 80 to 443)
    #[arg(short = 's', long)]
    pub https: bool,
    /// URL path to fetch on every host
    #[arg(short, long, default_value = "/")]
    pub url_path: String,
    /// Regex the response body must match for a host to count as active.
    /// Without it any host that responds counts as active.
    #[arg(short, long)]
    pub regex: Option<String>,
    /// Do not verify TLS certificates (self-signed certificates)
    #[arg(long)]
    pub accept_invalid_certs: bool,
    /// Timeout in seconds for each individual probe ($REQUEST_TIMEOUT)
    #[arg(short = 'T', long)]
    pub request_timeout: Option<String>,
    /// Overall deadline in seconds for the whole run
    #[arg(long)]
    pub run_timeout: Option<String>,
    /// Number of parallel probe workers ($FIND_ACTIVE_PARALLEL)
    #[arg(long)]
    pub parallel: Option<String>,
    /// Print nothing instead of NO_AVAILABLE_SERVER (convenience for scripting)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Errors in the options or host list. These abort before any network
/// activity and map to exit status 4, distinct from "no active server".
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no hosts specified")]
    NoHosts,
    #[error("error in host definition, not a valid port number: '{0}'")]
    InvalidPort(String),
    #[error("error in host definition, contains more than one colon: '{0}'")]
    InvalidHost(String),
    #[error("invalid regex: {0}")]
    InvalidRegex(#[from] regex::Error),
    #[error("invalid number for {name}: '{value}'")]
    InvalidNumber { name: &'static str, value: String },
}

/// Resolve the options, run the race and report the verdict.
///
/// Returns the process exit status: 0 for a winner, 1 for no active server.
/// Configuration errors are returned as `Err` and map to exit status 4 in main.
pub fn run(options: &Opts) -> Result<i32> {
    let host_list = utility::set_hosts(&options.hosts);
    let config = Arc::new(probe::ProbeConfig::from_opts(options)?);
    let candidates = hosts::resolve_candidates(&host_list, &options.extra_hosts, config.default_port)?;

    let prober = Arc::new(probe::HttpProber::new(config.clone())?);
    let result = race::run_race(&candidates, prober, config.parallel, config.run_timeout);

    Ok(report::report(&result, config.default_port, config.quiet))
}
