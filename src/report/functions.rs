//! The functions.
//!
use crate::hosts::Candidate;
use crate::race::RaceResult;

/// The sentinel printed when no candidate matched.
pub const NO_AVAILABLE_SERVER: &str = "NO_AVAILABLE_SERVER";

/// Print the verdict and return the process exit status.
pub fn report(
    result: &RaceResult,
    default_port: u16,
    quiet: bool,
) -> i32
{
    match result {
        RaceResult::Winner(candidate) => {
            println!("{}", format_winner(candidate, default_port));
            0
        }
        RaceResult::NoneFound => {
            if !quiet {
                println!("{}", NO_AVAILABLE_SERVER);
            }
            1
        }
    }
}

/// The winning host, with the `:port` suffix only when the port deviates
/// from the run-wide default. Callers passed a plain host list get a plain
/// host back, a per-host override stays visible.
pub fn format_winner(
    candidate: &Candidate,
    default_port: u16,
) -> String
{
    if candidate.port == default_port {
        candidate.host.to_string()
    } else {
        candidate.address()
    }
}
