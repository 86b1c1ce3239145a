//! Keyword matching and scoring module

pub mod keywords;
pub mod vocabulary;
pub mod skill_matcher;
pub mod scorer;
pub mod analyzer;

pub use analyzer::{AnalysisEngine, AnalysisInput, AnalysisOutcome, SkillEvaluation};
pub use keywords::{KeywordTokenizer, TokenSet};
pub use scorer::ResumeScore;
pub use skill_matcher::{MatchResult, SkillMatcher};
pub use vocabulary::SkillVocabulary;
