//! The impls and functions.
//!
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{channel, RecvTimeoutError};
use std::time::{Duration, Instant};
use log::*;

use crate::hosts::Candidate;
use crate::probe::{Prober, ProbeOutcome};
use crate::race::RaceResult;

/// Race all candidates against each other on a pool of `parallel` workers.
///
/// Candidates are queued in list order, but the order carries no priority:
/// the first [ProbeOutcome::Matched] to arrive wins, everything else is
/// discarded. When the channel drains without a match, or the run deadline
/// expires, the verdict is [RaceResult::NoneFound].
pub fn run_race(
    candidates: &[Candidate],
    prober: Arc<dyn Prober>,
    parallel: usize,
    run_timeout: Duration,
) -> RaceResult
{
    info!("begin race: {} candidate(s), {} worker(s)", candidates.len(), parallel);
    let timer = Instant::now();

    let pool = rayon::ThreadPoolBuilder::new().num_threads(parallel).build().unwrap();
    let stop = Arc::new(AtomicBool::new(false));
    let (tx, rx) = channel();
    for candidate in candidates {
        let candidate = candidate.clone();
        let prober = prober.clone();
        let stop = stop.clone();
        let tx = tx.clone();
        pool.spawn(move || {
            if stop.load(Ordering::Relaxed) {
                debug!("{} - winner already declared, skipping probe", candidate.address());
                return;
            }
            let outcome = prober.probe(&candidate);
            // a send failure means the coordinator is gone because a winner
            // was declared, the outcome of this straggler is irrelevant.
            let _ = tx.send(outcome);
        });
    }
    // the workers hold their own senders, dropping this one lets the channel
    // disconnect once the last worker is done.
    drop(tx);

    let deadline = Instant::now() + run_timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            warn!("race deadline expired after {:?}", timer.elapsed());
            break;
        }
        match rx.recv_timeout(remaining) {
            Ok(ProbeOutcome::Matched { candidate, latency }) => {
                info!("end race: winner {} after {:?} (probe latency {:?})", candidate.address(), timer.elapsed(), latency);
                stop.store(true, Ordering::Relaxed);
                return RaceResult::Winner(candidate);
            }
            Ok(outcome) => {
                debug!("{} - discarding outcome: {:?}", outcome.candidate().address(), outcome);
            }
            Err(RecvTimeoutError::Timeout) => {
                warn!("race deadline expired after {:?}", timer.elapsed());
                break;
            }
            Err(RecvTimeoutError::Disconnected) => {
                // every candidate reported, none matched.
                break;
            }
        }
    }

    info!("end race: no active server after {:?}", timer.elapsed());
    RaceResult::NoneFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    /// A prober scripted per host: an optional delay, then a fixed outcome.
    struct ScriptedProber {
        scripts: Vec<(String, Duration, bool)>,
    }

    impl ScriptedProber {
        fn new(scripts: &[(&str, u64, bool)]) -> Arc<Self> {
            Arc::new(ScriptedProber {
                scripts: scripts.iter()
                    .map(|(host, delay_ms, matched)| (host.to_string(), Duration::from_millis(*delay_ms), *matched))
                    .collect(),
            })
        }
    }

    impl Prober for ScriptedProber {
        fn probe(&self, candidate: &Candidate) -> ProbeOutcome {
            match self.scripts.iter().find(|(host, _, _)| *host == candidate.host) {
                Some((_, delay, matched)) => {
                    sleep(*delay);
                    if *matched {
                        ProbeOutcome::Matched { candidate: candidate.clone(), latency: *delay }
                    } else {
                        ProbeOutcome::ReachableNoMatch { candidate: candidate.clone() }
                    }
                }
                None => ProbeOutcome::Unreachable { candidate: candidate.clone() },
            }
        }
    }

    fn candidates(hosts: &[&str]) -> Vec<Candidate> {
        hosts.iter().map(|host| Candidate::new(host, 80)).collect()
    }

    #[test]
    fn unit_race_single_matching_candidate_wins() {
        let prober = ScriptedProber::new(&[
            ("host1", 0, false),
            ("host2", 0, true),
        ]);
        let result = run_race(&candidates(&["host1", "host2", "host3"]), prober, 2, Duration::from_secs(60));
        assert_eq!(result, RaceResult::Winner(Candidate::new("host2", 80)));
    }

    #[test]
    fn unit_race_winner_is_found_regardless_of_pool_size_and_order() {
        for parallel in [1, 2, 8] {
            for hosts in [["host2", "host1", "host3"], ["host3", "host2", "host1"]] {
                let prober = ScriptedProber::new(&[("host2", 0, true)]);
                let result = run_race(&candidates(&hosts), prober, parallel, Duration::from_secs(60));
                assert_eq!(result, RaceResult::Winner(Candidate::new("host2", 80)), "parallel: {}", parallel);
            }
        }
    }

    #[test]
    fn unit_race_no_match_is_none_found() {
        // a mix of standby and unreachable candidates, none active.
        let prober = ScriptedProber::new(&[
            ("host1", 0, false),
            ("host3", 0, false),
        ]);
        let result = run_race(&candidates(&["host1", "host2", "host3"]), prober, 2, Duration::from_secs(60));
        assert_eq!(result, RaceResult::NoneFound);
    }

    #[test]
    fn unit_race_does_not_wait_for_slow_losers() {
        // one candidate matches immediately, the others would take 5 seconds.
        let prober = ScriptedProber::new(&[
            ("host1", 5000, false),
            ("host2", 10, true),
            ("host3", 5000, false),
            ("host4", 5000, false),
        ]);
        let timer = Instant::now();
        let result = run_race(&candidates(&["host1", "host2", "host3", "host4"]), prober, 4, Duration::from_secs(60));
        assert_eq!(result, RaceResult::Winner(Candidate::new("host2", 80)));
        assert!(timer.elapsed() < Duration::from_secs(1), "race took {:?}", timer.elapsed());
    }

    #[test]
    fn unit_race_deadline_bounds_the_run() {
        let prober = ScriptedProber::new(&[
            ("host1", 5000, false),
            ("host2", 5000, false),
        ]);
        let timer = Instant::now();
        let result = run_race(&candidates(&["host1", "host2"]), prober, 2, Duration::from_millis(100));
        assert_eq!(result, RaceResult::NoneFound);
        assert!(timer.elapsed() < Duration::from_secs(1), "race took {:?}", timer.elapsed());
    }

    #[test]
    fn unit_race_concurrent_matches_yield_exactly_one_winner() {
        // both match at the same time: the first arrival wins, the other
        // is discarded without error. Which one wins is accepted to vary.
        let prober = ScriptedProber::new(&[
            ("host1", 0, true),
            ("host2", 0, true),
        ]);
        let result = run_race(&candidates(&["host1", "host2"]), prober, 2, Duration::from_secs(60));
        match result {
            RaceResult::Winner(candidate) => assert!(candidate.host == "host1" || candidate.host == "host2"),
            RaceResult::NoneFound => panic!("expected a winner"),
        }
    }

    #[test]
    fn unit_race_empty_candidate_list_is_none_found() {
        // the resolver rejects an empty list before the race, but the race
        // itself must terminate on one as well.
        let prober = ScriptedProber::new(&[]);
        let result = run_race(&[], prober, 2, Duration::from_secs(60));
        assert_eq!(result, RaceResult::NoneFound);
    }
}
