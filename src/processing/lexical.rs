//! Weighted lexical keyword scorer
//!
//! Tokenizes the job description, classifies each unique token into a skill
//! category, checks substring presence in the resume, and accumulates a
//! weighted score against the maximum achievable score.

use crate::error::Result;
use crate::processing::keywords::{KeywordTable, SkillCategory};
use crate::processing::text_processor::TextProcessor;
use serde::{Deserialize, Serialize};

/// Suggestions are capped to the first N missing keywords.
const MAX_SUGGESTIONS: usize = 8;
/// More missing keywords than this flags a weakness.
const MISSING_KEYWORD_THRESHOLD: usize = 5;
/// Scores below this flag a weakly tailored resume.
const WEAK_SCORE_THRESHOLD: f64 = 50.0;

pub struct LexicalScorer {
    keywords: KeywordTable,
    processor: TextProcessor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchReport {
    /// Weighted match percentage, clamped to 100.
    pub score: f64,
    /// Weighted value of the missing keywords as a percentage of the
    /// maximum achievable score. Not clamped, and not the complement of
    /// `score`: the max treats every token at the technical weight.
    #[serde(rename = "totalImpact")]
    pub total_impact: f64,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

impl LexicalScorer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            keywords: KeywordTable::new()?,
            processor: TextProcessor::new(),
        })
    }

    pub fn analyze(&self, resume_text: &str, job_description: &str) -> MatchReport {
        let resume = resume_text.to_lowercase();
        let job_tokens = self.processor.unique_word_tokens(job_description);

        let mut matched = Vec::new();
        let mut missing = Vec::new();
        let mut raw_score = 0.0;
        let mut potential_gain = 0.0;

        for token in &job_tokens {
            let weight = self.keywords.classify(token).weight();
            if resume.contains(token.as_str()) {
                raw_score += weight;
                matched.push(token.clone());
            } else {
                potential_gain += weight;
                missing.push(token.clone());
            }
        }

        // Every token counts at the technical weight toward the ceiling;
        // floor at 1 so empty job descriptions never divide by zero.
        let max_score = if job_tokens.is_empty() {
            1.0
        } else {
            job_tokens.len() as f64 * SkillCategory::max_weight()
        };

        let score = if job_tokens.is_empty() {
            0.0
        } else {
            round2(raw_score / max_score * 100.0).min(100.0)
        };
        let total_impact = if job_tokens.is_empty() {
            0.0
        } else {
            round2(potential_gain / max_score * 100.0)
        };

        let strengths = self.collect_strengths(&resume);
        let weaknesses = self.collect_weaknesses(&resume, missing.len(), score);
        let suggestions = self.collect_suggestions(&missing);

        MatchReport {
            score,
            total_impact,
            matched_keywords: matched,
            missing_keywords: missing,
            strengths,
            weaknesses,
            suggestions,
        }
    }

    fn collect_strengths(&self, resume: &str) -> Vec<String> {
        let mut strengths = Vec::new();
        if self.keywords.mentions_any_technical(resume) {
            strengths.push("Good technical skills coverage".to_string());
        }
        if self.keywords.mentions_any_soft(resume) {
            strengths.push("Strong soft skills".to_string());
        }
        if resume.contains("experience") {
            strengths.push("Experience section present".to_string());
        }
        if strengths.is_empty() {
            strengths.push("No strong points detected".to_string());
        }
        strengths
    }

    fn collect_weaknesses(&self, resume: &str, missing_count: usize, score: f64) -> Vec<String> {
        let mut weaknesses = Vec::new();
        if missing_count > MISSING_KEYWORD_THRESHOLD {
            weaknesses.push("Missing many critical keywords".to_string());
        }
        if score < WEAK_SCORE_THRESHOLD {
            weaknesses.push("Resume is weakly tailored for this job".to_string());
        }
        if !resume.contains("education") {
            weaknesses.push("Education details missing".to_string());
        }
        if weaknesses.is_empty() {
            weaknesses.push("No major weaknesses found".to_string());
        }
        weaknesses
    }

    fn collect_suggestions(&self, missing: &[String]) -> Vec<String> {
        missing
            .iter()
            .take(MAX_SUGGESTIONS)
            .map(|kw| match self.keywords.classify(kw) {
                SkillCategory::Technical => {
                    format!("Highlight your {} projects in Skills or Experience.", kw)
                }
                SkillCategory::Tool => {
                    format!("Add {} to your Tools & Technologies section.", kw)
                }
                SkillCategory::Soft => {
                    format!("Showcase {} in your Experience or Cover Letter.", kw)
                }
                SkillCategory::Other => {
                    format!("Include '{}' naturally in your resume where relevant.", kw)
                }
            })
            .collect()
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
