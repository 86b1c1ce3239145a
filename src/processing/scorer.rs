//! Resume score: matched skills as a percentage of all job description tokens

use crate::processing::keywords::TokenSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Percentage in `[0, 100]`, rounded to two decimal places.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResumeScore(f64);

impl ResumeScore {
    pub const ZERO: ResumeScore = ResumeScore(0.0);

    /// The denominator is the raw job token count, not the number of job
    /// skills, so every non-skill word in the posting dilutes the score.
    pub fn from_counts(matched: usize, job_tokens: usize) -> Self {
        if job_tokens == 0 {
            return Self::ZERO;
        }
        let percentage = matched as f64 / job_tokens as f64 * 100.0;
        Self(round_to_hundredths(percentage).min(100.0))
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Always shows a fractional part, so a perfect match reads `100.0`.
impl fmt::Display for ResumeScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

pub fn calculate_resume_score(matched: &BTreeSet<String>, job_tokens: &TokenSet) -> ResumeScore {
    ResumeScore::from_counts(matched.len(), job_tokens.len())
}

/// Exact ties go to the even neighbour: 3.125 becomes 3.12, 15.625 becomes 15.62.
fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}
