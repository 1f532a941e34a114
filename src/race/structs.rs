use crate::hosts::Candidate;

/// The final verdict of one race. Exactly one is produced per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RaceResult {
    /// The first candidate whose response matched the success pattern.
    Winner(Candidate),
    /// No candidate matched within the allotted time.
    NoneFound,
}
