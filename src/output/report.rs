//! Report structures handed to the formatters

use crate::processing::analyzer::AnalysisOutcome;
use crate::processing::scorer::ResumeScore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const NO_MATCHED_SKILLS: &str = "No matching skills found.";
pub const NO_MISSING_SKILLS: &str = "No missing skills found.";

/// Everything shown to the user after one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub score: ResumeScore,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    /// AI advice, or the API error text when the request was rejected
    pub suggestions: String,
    pub statistics: ReportStatistics,
    pub metadata: ReportMetadata,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportStatistics {
    pub resume_token_count: usize,
    pub job_token_count: usize,
    pub processing_time_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub matcher_version: String,
    pub model: String,
    pub resume_file: String,
    pub job_source: String,
}

impl AnalysisReport {
    pub fn new(outcome: AnalysisOutcome, model: &str, job_source: &str) -> Self {
        Self {
            score: outcome.score,
            matched_skills: outcome.skills.matched.into_iter().collect(),
            missing_skills: outcome.skills.missing.into_iter().collect(),
            suggestions: outcome.suggestions,
            statistics: ReportStatistics {
                resume_token_count: outcome.resume_token_count,
                job_token_count: outcome.job_token_count,
                processing_time_ms: outcome.processing_time_ms,
            },
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                matcher_version: env!("CARGO_PKG_VERSION").to_string(),
                model: model.to_string(),
                resume_file: outcome.resume_name,
                job_source: job_source.to_string(),
            },
        }
    }

    pub fn matched_summary(&self) -> String {
        join_or(&self.matched_skills, NO_MATCHED_SKILLS)
    }

    pub fn missing_summary(&self) -> String {
        join_or(&self.missing_skills, NO_MISSING_SKILLS)
    }

    pub fn score_band(&self) -> ScoreBand {
        ScoreBand::from_score(self.score)
    }
}

fn join_or(skills: &[String], empty: &str) -> String {
    if skills.is_empty() {
        empty.to_string()
    } else {
        skills.join(", ")
    }
}

/// Coarse label for a score, used for badges and colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Strong,
    Fair,
    Weak,
}

impl ScoreBand {
    pub fn from_score(score: ResumeScore) -> Self {
        match score.value() {
            v if v >= 60.0 => ScoreBand::Strong,
            v if v >= 30.0 => ScoreBand::Fair,
            _ => ScoreBand::Weak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "STRONG",
            ScoreBand::Fair => "FAIR",
            ScoreBand::Weak => "WEAK",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            ScoreBand::Strong => "score-strong",
            ScoreBand::Fair => "score-fair",
            ScoreBand::Weak => "score-weak",
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::processing::skill_matcher::MatchResult;

    pub(crate) fn sample_report(suggestions: &str) -> AnalysisReport {
        let skills = MatchResult {
            matched: ["python", "sql"].iter().map(|s| s.to_string()).collect(),
            missing: ["docker"].iter().map(|s| s.to_string()).collect(),
        };
        let outcome = AnalysisOutcome {
            resume_name: "resume.pdf".to_string(),
            score: ResumeScore::from_counts(2, 7),
            skills,
            suggestions: suggestions.to_string(),
            resume_token_count: 5,
            job_token_count: 7,
            processing_time_ms: 12,
        };
        AnalysisReport::new(outcome, "mistral-tiny", "job.txt")
    }

    #[test]
    fn test_summaries() {
        let report = sample_report("Add Docker.");
        assert_eq!(report.matched_summary(), "python, sql");
        assert_eq!(report.missing_summary(), "docker");

        let mut empty = report.clone();
        empty.matched_skills.clear();
        empty.missing_skills.clear();
        assert_eq!(empty.matched_summary(), NO_MATCHED_SKILLS);
        assert_eq!(empty.missing_summary(), NO_MISSING_SKILLS);
    }

    #[test]
    fn test_score_bands() {
        assert_eq!(ScoreBand::from_score(ResumeScore::from_counts(1, 1)), ScoreBand::Strong);
        assert_eq!(ScoreBand::from_score(ResumeScore::from_counts(2, 7)), ScoreBand::Weak);
        assert_eq!(ScoreBand::from_score(ResumeScore::from_counts(1, 2)), ScoreBand::Fair);
        assert_eq!(ScoreBand::from_score(ResumeScore::ZERO), ScoreBand::Weak);
    }
}
