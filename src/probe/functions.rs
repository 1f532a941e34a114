//! The impls and functions.
//!
use std::{sync::Arc, time::{Duration, Instant}};
use log::*;
use anyhow::Result;

use crate::{Opts, ConfigError, utility};
use crate::hosts::Candidate;
use crate::probe::{ProbeConfig, ProbeOutcome, Prober, HttpProber, Protocol};

impl ProbeConfig {
    /// Resolve the options into the immutable run-wide configuration.
    ///
    /// All validation happens here, before any network activity.
    pub fn from_opts(options: &Opts) -> Result<ProbeConfig, ConfigError> {
        let protocol = if options.https { Protocol::Https } else { Protocol::Http };
        let default_port = utility::set_port(&options.port, protocol)?;
        let regex = utility::set_regex(&options.regex)?;
        let parallel = utility::set_parallel(&options.parallel)?;
        let request_timeout = utility::set_request_timeout(&options.request_timeout)?;
        let run_timeout = utility::set_run_timeout(&options.run_timeout)?;

        Ok(ProbeConfig {
            default_port,
            protocol,
            url_path: options.url_path.clone(),
            regex,
            accept_invalid_certs: options.accept_invalid_certs,
            request_timeout: Duration::from_secs(request_timeout),
            run_timeout: Duration::from_secs(run_timeout),
            parallel,
            quiet: options.quiet,
        })
    }
}

impl HttpProber {
    pub fn new(config: Arc<ProbeConfig>) -> Result<HttpProber> {
        let client = reqwest::blocking::Client::builder()
            // the timeout covers connect, TLS handshake and body read.
            .timeout(config.request_timeout)
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()?;
        Ok(HttpProber { client, config })
    }
    fn build_url(&self, candidate: &Candidate) -> String {
        format!("{}://{}/{}",
            self.config.protocol.as_str(),
            candidate.address(),
            self.config.url_path.trim_start_matches('/')
        )
    }
    fn classify(&self, candidate: &Candidate, body: &str, latency: Duration) -> ProbeOutcome {
        if self.config.regex.is_match(body) {
            info!("{} - regex matched response body", candidate.address());
            ProbeOutcome::Matched { candidate: candidate.clone(), latency }
        } else {
            info!("{} - regex did not match response body", candidate.address());
            ProbeOutcome::ReachableNoMatch { candidate: candidate.clone() }
        }
    }
}

impl Prober for HttpProber {
    fn probe(&self, candidate: &Candidate) -> ProbeOutcome {
        let url = self.build_url(candidate);
        info!("GET {}", url);
        let timer = Instant::now();
        let response = match self.client.get(&url).send() {
            Ok(response) => response,
            Err(error) => {
                info!("{} - returned error: {}", url, error);
                return ProbeOutcome::Unreachable { candidate: candidate.clone() };
            }
        };
        // the status code is logged but not gated on, only the body counts.
        debug!("{} - response: {}", url, response.status());
        match response.text() {
            Ok(body) => self.classify(candidate, &body, timer.elapsed()),
            Err(error) => {
                info!("{} - error reading response body: {}", url, error);
                ProbeOutcome::Unreachable { candidate: candidate.clone() }
            }
        }
    }
}
