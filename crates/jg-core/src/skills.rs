use std::collections::HashSet;
use std::sync::LazyLock;

/// Built-in keyword vocabulary, in scan order.
///
/// NOTE: keep in sync with the SKILL_KEYWORDS list in the frontend advisor.
static DEFAULT_TERMS: &[&str] = &[
    "react",
    "reactjs",
    "typescript",
    "javascript",
    "node",
    "node.js",
    "next.js",
    "nextjs",
    "tailwind",
    "redux",
    "html",
    "css",
    "rest",
    "api",
    "graphql",
    "aws",
    "docker",
    "jest",
    "testing",
    "python",
    "java",
];

static DEFAULT_VOCABULARY: LazyLock<SkillVocabulary> =
    LazyLock::new(|| SkillVocabulary::new(DEFAULT_TERMS.iter().map(|t| t.to_string())));

/// Ordered keyword list driving `extract_skills`. Iteration order is part of
/// the contract: extraction output follows it, so snapshots stay stable.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillVocabulary {
    terms: Vec<String>,
}

impl SkillVocabulary {
    /// Builds a vocabulary from arbitrary terms: lower-cases, trims, drops
    /// empties and duplicates while preserving first-seen order.
    pub fn new(terms: impl IntoIterator<Item = String>) -> Self {
        let mut seen = HashSet::new();
        let terms = terms
            .into_iter()
            .map(|t| normalize_skill_token(&t))
            .filter(|t| !t.is_empty() && seen.insert(t.clone()))
            .collect();
        Self { terms }
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        DEFAULT_VOCABULARY.clone()
    }
}

/// Scans free text for vocabulary terms. Case-folded substring match, not
/// word-boundary aware ("java" fires inside "javascript"); callers relying on
/// stricter tokenization should swap this implementation, not its call sites.
/// Output is deduplicated and ordered by vocabulary position.
pub fn extract_skills(text: &str, vocabulary: &SkillVocabulary) -> Vec<String> {
    if text.is_empty() || vocabulary.is_empty() {
        return Vec::new();
    }

    let folded = text.to_lowercase();
    vocabulary
        .terms()
        .iter()
        .filter(|term| folded.contains(term.as_str()))
        .cloned()
        .collect()
}

/// Canonical token form used everywhere skills are compared.
pub fn normalize_skill_token(skill: &str) -> String {
    skill.to_lowercase().trim().to_string()
}

/// Lower-cases a skill list, dropping empties and duplicates while preserving
/// first-seen order.
pub fn normalize_skill_list<S: AsRef<str>>(skills: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    skills
        .iter()
        .map(|s| normalize_skill_token(s.as_ref()))
        .filter(|s| !s.is_empty() && seen.insert(s.clone()))
        .collect()
}

/// Display form for a normalized skill token ("react" → "React.js",
/// "machine learning" → "Machine Learning").
pub fn display_skill(skill: &str) -> String {
    match skill {
        "react" | "reactjs" => return "React.js".to_string(),
        "next" | "nextjs" | "next.js" => return "Next.js".to_string(),
        "node" | "node.js" => return "Node.js".to_string(),
        _ => {}
    }

    skill
        .split(|c: char| c.is_whitespace() || c == '_' || c == '/')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
