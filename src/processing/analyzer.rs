//! Analysis pipeline: extract, tokenize, match, score, then ask for suggestions

use crate::error::{Result, ResumeMatcherError};
use crate::input::text_extractor::RawDocument;
use crate::llm::client::SuggestionProvider;
use crate::processing::keywords::KeywordTokenizer;
use crate::processing::scorer::{calculate_resume_score, ResumeScore};
use crate::processing::skill_matcher::{MatchResult, SkillMatcher};
use crate::processing::vocabulary::SkillVocabulary;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::time::Instant;

pub const MISSING_INPUT_PROMPT: &str =
    "Please provide a resume and a job description before running the analysis.";

/// What the caller collected before triggering an analysis.
#[derive(Debug, Clone)]
pub struct AnalysisInput {
    pub resume: Option<RawDocument>,
    pub job_description: String,
}

impl AnalysisInput {
    pub fn new(resume: Option<RawDocument>, job_description: impl Into<String>) -> Self {
        Self {
            resume,
            job_description: job_description.into(),
        }
    }

    /// Both inputs must be present; nothing runs otherwise.
    pub fn validate(&self) -> Result<&RawDocument> {
        match &self.resume {
            Some(resume) if !self.job_description.is_empty() => Ok(resume),
            _ => Err(ResumeMatcherError::MissingInput(MISSING_INPUT_PROMPT.to_string())),
        }
    }
}

/// Local half of an analysis: everything except the remote suggestions.
#[derive(Debug, Clone)]
pub struct SkillEvaluation {
    pub resume_name: String,
    pub resume_text: String,
    pub job_description: String,
    pub resume_token_count: usize,
    pub job_token_count: usize,
    pub skills: MatchResult,
    pub score: ResumeScore,
}

impl SkillEvaluation {
    pub fn into_outcome(self, suggestions: String, start: Instant) -> AnalysisOutcome {
        AnalysisOutcome {
            resume_name: self.resume_name,
            score: self.score,
            skills: self.skills,
            suggestions,
            resume_token_count: self.resume_token_count,
            job_token_count: self.job_token_count,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

/// Complete result of one analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub resume_name: String,
    pub score: ResumeScore,
    pub skills: MatchResult,
    pub suggestions: String,
    pub resume_token_count: usize,
    pub job_token_count: usize,
    pub processing_time_ms: u64,
}

pub struct AnalysisEngine<P> {
    tokenizer: KeywordTokenizer,
    matcher: SkillMatcher,
    provider: P,
}

impl<P: SuggestionProvider> AnalysisEngine<P> {
    pub fn new(vocabulary: SkillVocabulary, provider: P) -> Result<Self> {
        Ok(Self {
            tokenizer: KeywordTokenizer::new()?,
            matcher: SkillMatcher::new(vocabulary),
            provider,
        })
    }

    /// Extract the resume text, then tokenize, match and score.
    pub fn evaluate(&self, input: &AnalysisInput) -> Result<SkillEvaluation> {
        let resume = input.validate()?;

        info!("Extracting text from {} ({})", resume.name, resume.format);
        let resume_text = resume.extract_text()?;
        debug!("Extracted {} characters", resume_text.len());

        Ok(self.evaluate_text(&resume.name, resume_text, &input.job_description))
    }

    /// Tokenize, match and score already extracted text.
    pub fn evaluate_text(
        &self,
        resume_name: &str,
        resume_text: String,
        job_description: &str,
    ) -> SkillEvaluation {
        let resume_tokens = self.tokenizer.tokenize(&resume_text);
        let job_tokens = self.tokenizer.tokenize(job_description);

        let skills = self.matcher.match_skills(&resume_tokens, &job_tokens);
        let score = calculate_resume_score(&skills.matched, &job_tokens);
        info!(
            "Score {}%: {} matched, {} missing, {} job tokens",
            score,
            skills.matched.len(),
            skills.missing.len(),
            job_tokens.len()
        );

        SkillEvaluation {
            resume_name: resume_name.to_string(),
            resume_text,
            job_description: job_description.to_string(),
            resume_token_count: resume_tokens.len(),
            job_token_count: job_tokens.len(),
            skills,
            score,
        }
    }

    /// Request suggestions for an evaluation. API error statuses come back
    /// as suggestion text; transport failures are errors.
    pub async fn suggest(&self, evaluation: &SkillEvaluation) -> Result<String> {
        self.provider
            .suggest(&evaluation.resume_text, &evaluation.job_description)
            .await
    }

    /// Run the whole pipeline in order.
    pub async fn analyze(&self, input: &AnalysisInput) -> Result<AnalysisOutcome> {
        let start = Instant::now();
        let evaluation = self.evaluate(input)?;
        let suggestions = self.suggest(&evaluation).await?;
        Ok(evaluation.into_outcome(suggestions, start))
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        self.matcher.vocabulary()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::file_detector::DocumentFormat;
    use crate::llm::client::suggestion_from_response;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CannedProvider {
        status: u16,
        body: String,
        calls: AtomicUsize,
    }

    impl CannedProvider {
        fn new(status: u16, body: &str) -> Self {
            Self {
                status,
                body: body.to_string(),
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl SuggestionProvider for CannedProvider {
        async fn suggest(&self, _resume_text: &str, _job_description: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            suggestion_from_response(self.status, &self.body)
        }

        fn model_name(&self) -> &str {
            "canned"
        }
    }

    fn engine(status: u16, body: &str) -> AnalysisEngine<CannedProvider> {
        AnalysisEngine::new(SkillVocabulary::default(), CannedProvider::new(status, body)).unwrap()
    }

    fn docx_input(text: &str, job: &str) -> AnalysisInput {
        use docx_rs::{Docx, Paragraph, Run};
        let mut buffer = std::io::Cursor::new(Vec::new());
        Docx::new()
            .add_paragraph(Paragraph::new().add_run(Run::new().add_text(text)))
            .build()
            .pack(&mut buffer)
            .unwrap();
        let resume = RawDocument::new("resume.docx", DocumentFormat::Docx, buffer.into_inner());
        AnalysisInput::new(Some(resume), job)
    }

    const OK_BODY: &str = r#"{"choices":[{"message":{"role":"assistant","content":"Add Docker."}}]}"#;

    #[tokio::test]
    async fn test_scenario_python_sql_docker() {
        let engine = engine(200, OK_BODY);
        let input = docx_input(
            "I know Python and SQL",
            "Looking for Python, SQL, and Docker experience",
        );

        let outcome = engine.analyze(&input).await.unwrap();
        let matched: Vec<&str> = outcome.skills.matched.iter().map(String::as_str).collect();
        let missing: Vec<&str> = outcome.skills.missing.iter().map(String::as_str).collect();
        assert_eq!(matched, vec!["python", "sql"]);
        assert_eq!(missing, vec!["docker"]);
        // looking, for, python, sql, and, docker, experience
        assert_eq!(outcome.job_token_count, 7);
        assert_eq!(outcome.score, ResumeScore::from_counts(2, 7));
        assert_eq!(outcome.suggestions, "Add Docker.");
    }

    #[tokio::test]
    async fn test_api_failure_does_not_affect_score() {
        let input = docx_input("Python SQL", "Python SQL Docker");
        let healthy = engine(200, OK_BODY).analyze(&input).await.unwrap();
        let failing = engine(500, "server busy").analyze(&input).await.unwrap();

        assert!(failing.suggestions.contains("500"));
        assert!(failing.suggestions.contains("server busy"));
        assert_eq!(failing.score, healthy.score);
        assert_eq!(failing.skills, healthy.skills);
    }

    #[tokio::test]
    async fn test_missing_inputs_short_circuit() {
        let engine = engine(200, OK_BODY);

        let no_resume = AnalysisInput::new(None, "Python");
        let err = engine.analyze(&no_resume).await.unwrap_err();
        assert!(err.is_missing_input());

        let no_job = docx_input("Python", "");
        let err = engine.analyze(&no_job).await.unwrap_err();
        assert!(err.is_missing_input());

        assert_eq!(engine.provider().calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_extraction_failure_aborts_without_suggestions() {
        let engine = engine(200, OK_BODY);
        let resume = RawDocument::new("resume.pdf", DocumentFormat::Pdf, b"garbage".to_vec());
        let input = AnalysisInput::new(Some(resume), "Python");

        let err = engine.analyze(&input).await.unwrap_err();
        assert!(matches!(err, ResumeMatcherError::PdfExtraction(_)));
        assert_eq!(engine.provider().calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_job_without_tokens_scores_zero() {
        let engine = engine(200, OK_BODY);
        let evaluation = engine.evaluate_text("resume", "Python SQL Docker".to_string(), "!!! ???");
        assert_eq!(evaluation.job_token_count, 0);
        assert_eq!(evaluation.score, ResumeScore::ZERO);
        assert!(evaluation.skills.missing.is_empty());
        assert!(evaluation.skills.matched.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_runs_are_identical() {
        let engine = engine(200, OK_BODY);
        let input = docx_input(
            "Backend engineer: Python, Django, Docker, Kubernetes, Git",
            "We want Python, Flask, Docker, GraphQL and Git skills",
        );

        let first = engine.analyze(&input).await.unwrap();
        let second = engine.analyze(&input).await.unwrap();
        assert_eq!(first.score, second.score);
        assert_eq!(first.skills, second.skills);
    }
}
