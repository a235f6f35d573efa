//! Static keyword dictionaries and category weights

use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Technical skills, highest scoring weight.
pub const TECH_SKILLS: &[&str] = &[
    "python", "java", "c++", "c#", "javascript", "typescript", "react", "angular", "vue", "node",
    "express", "fastapi", "django", "flask", "spring", "ruby", "rails", "php", "laravel", "go",
    "rust", "swift", "kotlin", "aws", "azure", "gcp", "docker", "kubernetes", "terraform",
    "ansible", "jenkins", "git", "sql", "mysql", "postgresql", "mongodb", "redis", "oracle",
    "graphql", "rest", "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "matlab",
    "hadoop", "spark", "tableau", "powerbi", "selenium", "cicd", "linux", "bash", "shell", "html",
    "css", "sass", "less", "webpack", "babel", "firebase", "heroku", "netlify",
];

/// Soft skills, lowest non-default weight.
pub const SOFT_SKILLS: &[&str] = &[
    "leadership", "communication", "teamwork", "management", "problem-solving",
    "critical thinking", "adaptability", "creativity", "collaboration", "ownership",
    "stakeholder management", "presentation", "mentoring", "decision making", "time management",
    "organization", "conflict resolution", "empathy", "negotiation", "active listening",
    "initiative", "attention to detail", "multitasking", "work ethic", "flexibility",
    "strategic planning", "customer service", "interpersonal skills",
];

/// Tools and platforms, mid weight.
pub const TOOLS: &[&str] = &[
    "git", "jira", "figma", "excel", "confluence", "slack", "trello", "notion",
    "microsoft office", "google workspace", "zoom", "teams", "asana", "monday.com", "tableau",
    "powerbi", "outlook", "visio", "draw.io", "github", "gitlab", "bitbucket", "postman",
    "swagger", "docker", "jenkins", "vscode", "pycharm", "intellij", "eclipse",
    "android studio", "xcode",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillCategory {
    Technical,
    Tool,
    Soft,
    Other,
}

impl SkillCategory {
    /// Fixed scoring weight per category.
    pub fn weight(&self) -> f64 {
        match self {
            SkillCategory::Technical => 3.0,
            SkillCategory::Tool => 2.0,
            SkillCategory::Soft => 1.0,
            SkillCategory::Other => 0.5,
        }
    }

    /// The weight a token would carry if it were a technical skill; every
    /// job token counts at this weight toward the maximum achievable score.
    pub fn max_weight() -> f64 {
        SkillCategory::Technical.weight()
    }
}

/// Immutable category table built once at process start. Holds membership
/// sets for token classification and multi-pattern scanners for "does the
/// resume mention ANY skill of this category" substring sweeps.
pub struct KeywordTable {
    tech: HashSet<&'static str>,
    tools: HashSet<&'static str>,
    soft: HashSet<&'static str>,
    tech_scanner: AhoCorasick,
    soft_scanner: AhoCorasick,
}

impl KeywordTable {
    pub fn new() -> crate::error::Result<Self> {
        let tech_scanner = AhoCorasick::new(TECH_SKILLS).map_err(|e| {
            crate::error::ResumeAnalyzerError::Scoring(format!(
                "Failed to build technical skill scanner: {}",
                e
            ))
        })?;
        let soft_scanner = AhoCorasick::new(SOFT_SKILLS).map_err(|e| {
            crate::error::ResumeAnalyzerError::Scoring(format!(
                "Failed to build soft skill scanner: {}",
                e
            ))
        })?;

        Ok(Self {
            tech: TECH_SKILLS.iter().copied().collect(),
            tools: TOOLS.iter().copied().collect(),
            soft: SOFT_SKILLS.iter().copied().collect(),
            tech_scanner,
            soft_scanner,
        })
    }

    /// Classify a lowercased token. Entries living in more than one list
    /// ("git", "docker", "jenkins", "tableau", "powerbi") resolve in check
    /// order: technical, then tools, then soft.
    pub fn classify(&self, token: &str) -> SkillCategory {
        if self.tech.contains(token) {
            SkillCategory::Technical
        } else if self.tools.contains(token) {
            SkillCategory::Tool
        } else if self.soft.contains(token) {
            SkillCategory::Soft
        } else {
            SkillCategory::Other
        }
    }

    /// True when any technical skill occurs as a substring of the
    /// (pre-lowercased) text.
    pub fn mentions_any_technical(&self, lowercased_text: &str) -> bool {
        self.tech_scanner.is_match(lowercased_text)
    }

    /// True when any soft skill occurs as a substring of the
    /// (pre-lowercased) text.
    pub fn mentions_any_soft(&self, lowercased_text: &str) -> bool {
        self.soft_scanner.is_match(lowercased_text)
    }
}
