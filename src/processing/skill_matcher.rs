//! Skill matching between resume and job description token sets

use crate::processing::keywords::TokenSet;
use crate::processing::vocabulary::SkillVocabulary;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Matched and missing skills, both subsets of the vocabulary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: BTreeSet<String>,
    pub missing: BTreeSet<String>,
}

/// `matched = resume ∩ job ∩ vocabulary`, `missing = (job − resume) ∩ vocabulary`.
pub fn match_skills(resume: &TokenSet, job: &TokenSet, vocabulary: &SkillVocabulary) -> MatchResult {
    let matched = resume
        .intersection(job)
        .filter(|token| vocabulary.contains(token))
        .cloned()
        .collect();

    let missing = job
        .difference(resume)
        .filter(|token| vocabulary.contains(token))
        .cloned()
        .collect();

    MatchResult { matched, missing }
}

/// Skill matcher bound to one vocabulary.
pub struct SkillMatcher {
    vocabulary: SkillVocabulary,
}

impl SkillMatcher {
    pub fn new(vocabulary: SkillVocabulary) -> Self {
        Self { vocabulary }
    }

    pub fn match_skills(&self, resume: &TokenSet, job: &TokenSet) -> MatchResult {
        match_skills(resume, job, &self.vocabulary)
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new(SkillVocabulary::default())
    }
}
