//! Technical skills vocabulary used to filter keyword matches

use std::collections::HashSet;

/// Built-in allow-list of technical skills.
///
/// Entries containing a space or punctuation ("machine learning", "c++",
/// "ci/cd") can never equal a single token, so they are never reported.
pub const TECHNICAL_SKILLS: &[&str] = &[
    "html", "css", "javascript", "reactjs", "nodejs", "angular", "vuejs", "git", "github",
    "restful", "apis", "backend", "frontend", "python", "java", "c++", "sql", "mongodb",
    "expressjs", "typescript", "flutter", "django", "flask", "devops", "docker", "kubernetes",
    "machine learning", "tensorflow", "pytorch", "data structures", "algorithms",
    "unit testing", "debugging", "oop", "firebase", "graphql", "ci/cd", "scalability",
];

/// Immutable set of lowercase skill strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    skills: HashSet<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(TECHNICAL_SKILLS.iter().copied())
    }
}

impl SkillVocabulary {
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            skills: skills
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Built-in vocabulary extended with user-configured skills.
    pub fn with_additional<I, S>(additional: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut vocabulary = Self::default();
        vocabulary.skills.extend(
            additional
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty()),
        );
        vocabulary
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.skills.contains(skill)
    }

    pub fn len(&self) -> usize {
        self.skills.len()
    }

    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills in alphabetical order.
    pub fn sorted(&self) -> Vec<&str> {
        let mut skills: Vec<&str> = self.skills.iter().map(String::as_str).collect();
        skills.sort_unstable();
        skills
    }

    pub fn as_set(&self) -> &HashSet<String> {
        &self.skills
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_vocabulary() {
        let vocabulary = SkillVocabulary::default();
        assert_eq!(vocabulary.len(), TECHNICAL_SKILLS.len());
        assert!(vocabulary.contains("python"));
        assert!(vocabulary.contains("machine learning"));
        assert!(!vocabulary.contains("rust"));
    }

    #[test]
    fn test_additional_skills_are_normalized() {
        let vocabulary = SkillVocabulary::with_additional(["  Rust ", "", "PYTHON"]);
        assert!(vocabulary.contains("rust"));
        assert_eq!(vocabulary.len(), TECHNICAL_SKILLS.len() + 1);
    }

    #[test]
    fn test_sorted_listing() {
        let vocabulary = SkillVocabulary::new(["sql", "docker", "css"]);
        assert_eq!(vocabulary.sorted(), vec!["css", "docker", "sql"]);
    }
}
