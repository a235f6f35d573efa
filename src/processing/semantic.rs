//! Semantic similarity scorer
//!
//! Alternate scoring path: one overall similarity score between the full
//! texts, a fixed-list skill breakdown, a years-of-experience extractor, and
//! a set-difference missing-keyword list. Independent of the weighted
//! lexical scorer; the two are never combined.

use crate::error::Result;
use crate::processing::similarity::SimilarityScorer;
use crate::processing::text_processor::TextProcessor;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Fixed hard-skill checklist for the breakdown, independent of the job
/// description.
pub const HARD_SKILLS: &[&str] = &[
    "python", "java", "javascript", "react", "node", "fastapi", "django", "flask", "sql",
    "mongodb", "postgres", "aws", "azure", "gcp", "docker", "kubernetes", "git", "ci/cd", "linux",
    "rest", "graphql", "pandas", "numpy", "tensorflow", "pytorch",
];

/// Fixed soft-skill checklist for the breakdown.
pub const SOFT_SKILLS: &[&str] = &[
    "communication", "leadership", "teamwork", "problem solving", "time management",
    "adaptability", "creativity", "critical thinking", "collaboration", "ownership",
    "stakeholder management", "presentation", "mentoring", "decision making",
];

const MAX_MISSING_KEYWORDS: usize = 20;
const MAX_SUGGESTIONS: usize = 8;

pub struct SemanticScorer {
    similarity: Arc<dyn SimilarityScorer>,
    hard_skills: Vec<(String, Regex)>,
    soft_skills: Vec<(String, Regex)>,
    years_regex: Regex,
    normalize_regex: Regex,
    processor: TextProcessor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemanticReport {
    /// Similarity of the two texts as an integer percentage.
    pub ats_score: u32,
    /// One entry per fixed-list skill, hard skills first.
    pub skills_breakdown: Vec<SkillBreakdownEntry>,
    pub hard_skills_pct: u32,
    pub soft_skills_pct: u32,
    pub years_experience: u32,
    /// Job-description tokens absent from the resume, sorted, capped at 20.
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillBreakdownEntry {
    pub name: String,
    /// Binary: 100 when the skill is present, 0 otherwise.
    #[serde(rename = "match")]
    pub match_pct: u32,
    pub category: String,
}

impl SemanticScorer {
    pub fn new(similarity: Arc<dyn SimilarityScorer>) -> Self {
        let years_regex =
            Regex::new(r"(?i)(\d+)\+?\s*(years|yrs)").expect("Invalid years regex");
        let normalize_regex = Regex::new(r"[^a-z0-9+.# ]").expect("Invalid normalize regex");

        Self {
            similarity,
            hard_skills: Self::compile_skill_patterns(HARD_SKILLS),
            soft_skills: Self::compile_skill_patterns(SOFT_SKILLS),
            years_regex,
            normalize_regex,
            processor: TextProcessor::new(),
        }
    }

    /// Name of the active similarity strategy, for logs and the health check.
    pub fn similarity_name(&self) -> &'static str {
        self.similarity.name()
    }

    pub fn analyze(&self, resume_text: &str, job_description: &str) -> Result<SemanticReport> {
        let similarity = self.similarity.score(resume_text, job_description)?;
        let ats_score = (similarity * 100.0).round().clamp(0.0, 100.0) as u32;

        let normalized_resume = self.normalize(resume_text);
        let hard_found = Self::find_skills(&self.hard_skills, &normalized_resume);
        let soft_found = Self::find_skills(&self.soft_skills, &normalized_resume);

        let hard_skills_pct = Self::coverage_pct(&hard_found);
        let soft_skills_pct = Self::coverage_pct(&soft_found);

        let skills_breakdown = Self::breakdown(&hard_found, "Hard")
            .chain(Self::breakdown(&soft_found, "Soft"))
            .collect();

        let years_experience = self.extract_years(resume_text);
        let missing_keywords = self.missing_keywords(resume_text, job_description);

        let suggestions = self.collect_suggestions(
            ats_score,
            hard_skills_pct,
            soft_skills_pct,
            missing_keywords.len(),
            years_experience,
        );

        Ok(SemanticReport {
            ats_score,
            skills_breakdown,
            hard_skills_pct,
            soft_skills_pct,
            years_experience,
            missing_keywords,
            suggestions,
        })
    }

    fn compile_skill_patterns(skills: &[&str]) -> Vec<(String, Regex)> {
        skills
            .iter()
            .map(|skill| {
                let pattern = format!(r"\b{}\b", regex::escape(&skill.to_lowercase()));
                let regex = Regex::new(&pattern).expect("Invalid skill pattern");
                (skill.to_string(), regex)
            })
            .collect()
    }

    /// Lowercase and map every character outside `a-z0-9+.# ` to a space,
    /// padded so word-boundary patterns behave at the edges.
    fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        format!(" {} ", self.normalize_regex.replace_all(&lowered, " "))
    }

    fn find_skills(patterns: &[(String, Regex)], normalized_text: &str) -> Vec<(String, bool)> {
        patterns
            .iter()
            .map(|(name, regex)| (name.clone(), regex.is_match(normalized_text)))
            .collect()
    }

    fn coverage_pct(found: &[(String, bool)]) -> u32 {
        let present = found.iter().filter(|(_, hit)| *hit).count();
        (100 * present / found.len().max(1)) as u32
    }

    fn breakdown<'a>(
        found: &'a [(String, bool)],
        category: &'a str,
    ) -> impl Iterator<Item = SkillBreakdownEntry> + 'a {
        found.iter().map(move |(name, hit)| SkillBreakdownEntry {
            name: name.clone(),
            match_pct: if *hit { 100 } else { 0 },
            category: category.to_string(),
        })
    }

    /// Largest integer preceding "years"/"yrs" anywhere in the text, 0 when
    /// absent.
    fn extract_years(&self, text: &str) -> u32 {
        self.years_regex
            .captures_iter(text)
            .filter_map(|cap| cap[1].parse::<u32>().ok())
            .max()
            .unwrap_or(0)
    }

    fn missing_keywords(&self, resume_text: &str, job_description: &str) -> Vec<String> {
        let job_tokens = self.processor.alpha_token_set(job_description);
        let resume_tokens = self.processor.alpha_token_set(resume_text);

        let mut missing: Vec<String> = job_tokens.difference(&resume_tokens).cloned().collect();
        missing.sort();
        missing.truncate(MAX_MISSING_KEYWORDS);
        missing
    }

    fn collect_suggestions(
        &self,
        ats_score: u32,
        hard_pct: u32,
        soft_pct: u32,
        missing_count: usize,
        years: u32,
    ) -> Vec<String> {
        let mut suggestions = Vec::new();
        if ats_score < 70 {
            suggestions
                .push("Tailor your summary to echo role-specific keywords from the JD.".to_string());
        }
        if hard_pct < 40 {
            suggestions.push(
                "Add a 'Core Technical Skills' section with the most relevant tools/tech."
                    .to_string(),
            );
        }
        if soft_pct < 40 {
            suggestions.push(
                "Highlight collaboration and stakeholder examples to show soft skills.".to_string(),
            );
        }
        if missing_count > 0 {
            suggestions.push(
                "Weave missing keywords into bullets where they're true and measurable."
                    .to_string(),
            );
        }
        if years == 0 {
            suggestions
                .push("Quantify experience (e.g., 'Led 3-person team for 2 years on X').".to_string());
        }
        suggestions.truncate(MAX_SUGGESTIONS);
        suggestions
    }
}
