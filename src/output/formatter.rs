//! Console and JSON formatters for analysis reports

use crate::error::Result;
use crate::processing::analyzer::AnalysisReport;
use crate::processing::lexical::MatchReport;
use crate::processing::semantic::SemanticReport;
use colored::Colorize;

pub struct ConsoleFormatter {
    use_colors: bool,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    pub fn format(&self, report: &AnalysisReport) -> String {
        match report {
            AnalysisReport::Lexical(r) => self.format_lexical(r),
            AnalysisReport::Semantic(r) => self.format_semantic(r),
        }
    }

    fn format_lexical(&self, report: &MatchReport) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "ATS Score: {}   Potential gain: {:.2}%\n\n",
            self.score_badge(report.score),
            report.total_impact
        ));
        out.push_str(&format!(
            "Matched keywords ({}): {}\n",
            report.matched_keywords.len(),
            report.matched_keywords.join(", ")
        ));
        out.push_str(&format!(
            "Missing keywords ({}): {}\n\n",
            report.missing_keywords.len(),
            report.missing_keywords.join(", ")
        ));
        Self::push_section(&mut out, "Strengths", &report.strengths);
        Self::push_section(&mut out, "Weaknesses", &report.weaknesses);
        Self::push_section(&mut out, "Suggestions", &report.suggestions);
        out
    }

    fn format_semantic(&self, report: &SemanticReport) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "ATS Score: {}\n",
            self.score_badge(report.ats_score as f64)
        ));
        out.push_str(&format!(
            "Hard skills: {}%   Soft skills: {}%   Years of experience: {}\n\n",
            report.hard_skills_pct, report.soft_skills_pct, report.years_experience
        ));

        let present: Vec<&str> = report
            .skills_breakdown
            .iter()
            .filter(|e| e.match_pct == 100)
            .map(|e| e.name.as_str())
            .collect();
        out.push_str(&format!("Skills found: {}\n", present.join(", ")));
        out.push_str(&format!(
            "Missing keywords ({}): {}\n\n",
            report.missing_keywords.len(),
            report.missing_keywords.join(", ")
        ));
        Self::push_section(&mut out, "Suggestions", &report.suggestions);
        out
    }

    fn push_section(out: &mut String, title: &str, items: &[String]) {
        if items.is_empty() {
            return;
        }
        out.push_str(&format!("{}:\n", title));
        for item in items {
            out.push_str(&format!("  - {}\n", item));
        }
        out.push('\n');
    }

    fn score_badge(&self, score: f64) -> String {
        let text = format!("{:.2}%", score);
        if !self.use_colors {
            return text;
        }
        let colored = if score >= 80.0 {
            text.green()
        } else if score >= 60.0 {
            text.cyan()
        } else if score >= 40.0 {
            text.yellow()
        } else {
            text.red()
        };
        colored.to_string()
    }
}

pub fn to_pretty_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::processing::analyzer::AnalysisEngine;

    #[test]
    fn test_console_format_lists_keywords() {
        let engine = AnalysisEngine::from_config(&Config::default()).unwrap();
        let report = engine
            .analyze("python developer", "python kubernetes")
            .unwrap();

        let text = ConsoleFormatter::new(false).format(&report);
        assert!(text.contains("ATS Score"));
        assert!(text.contains("python"));
        assert!(text.contains("kubernetes"));
        assert!(text.contains("Suggestions:"));
    }

    #[test]
    fn test_json_format_is_the_wire_shape() {
        let engine = AnalysisEngine::from_config(&Config::default()).unwrap();
        let report = engine.analyze("python", "python").unwrap();
        let json = to_pretty_json(&report).unwrap();
        assert!(json.contains("\"totalImpact\""));
        assert!(json.contains("\"matched_keywords\""));
    }
}
