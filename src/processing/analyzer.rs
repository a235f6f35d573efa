//! Analysis engine wiring the configured scorer
//!
//! Holds the weighted lexical scorer and, when selected, the semantic scorer
//! with its similarity strategy. Built once at process start; requests share
//! it read-only.

use crate::config::{Config, EngineKind, SimilarityStrategy};
use crate::error::Result;
use crate::processing::lexical::{LexicalScorer, MatchReport};
use crate::processing::semantic::{SemanticReport, SemanticScorer};
use crate::processing::similarity::{EmbeddingSimilarity, SimilarityScorer};
use crate::processing::tfidf::TfIdfSimilarity;
use serde::Serialize;
use std::sync::Arc;

pub struct AnalysisEngine {
    kind: EngineKind,
    lexical: LexicalScorer,
    semantic: Option<SemanticScorer>,
}

/// The report of whichever scorer the engine ran. Untagged so the HTTP
/// response is exactly the scorer's own shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum AnalysisReport {
    Lexical(MatchReport),
    Semantic(SemanticReport),
}

impl AnalysisEngine {
    pub fn from_config(config: &Config) -> Result<Self> {
        let lexical = LexicalScorer::new()?;

        let semantic = match config.analysis.engine {
            EngineKind::Lexical => None,
            EngineKind::Semantic => {
                let similarity: Arc<dyn SimilarityScorer> = match config.analysis.similarity {
                    SimilarityStrategy::Embedding => {
                        Arc::new(EmbeddingSimilarity::load(&config.analysis.embedding_model)?)
                    }
                    SimilarityStrategy::TfIdf => Arc::new(TfIdfSimilarity::new()),
                };
                log::info!("Semantic scorer active, similarity strategy: {}", similarity.name());
                Some(SemanticScorer::new(similarity))
            }
        };

        if semantic.is_none() {
            log::info!("Weighted lexical scorer active");
        }

        Ok(Self {
            kind: config.analysis.engine,
            lexical,
            semantic,
        })
    }

    /// Build an engine around an externally constructed similarity scorer.
    /// Lets tests substitute a stub for the loaded model.
    pub fn with_similarity(similarity: Arc<dyn SimilarityScorer>) -> Result<Self> {
        Ok(Self {
            kind: EngineKind::Semantic,
            lexical: LexicalScorer::new()?,
            semantic: Some(SemanticScorer::new(similarity)),
        })
    }

    pub fn analyze(&self, resume_text: &str, job_description: &str) -> Result<AnalysisReport> {
        match (&self.kind, &self.semantic) {
            (EngineKind::Semantic, Some(semantic)) => Ok(AnalysisReport::Semantic(
                semantic.analyze(resume_text, job_description)?,
            )),
            _ => Ok(AnalysisReport::Lexical(
                self.lexical.analyze(resume_text, job_description),
            )),
        }
    }

    pub fn engine_name(&self) -> &'static str {
        match self.kind {
            EngineKind::Lexical => "lexical",
            EngineKind::Semantic => "semantic",
        }
    }

    /// Active similarity strategy name, when the semantic scorer is selected.
    pub fn similarity_name(&self) -> Option<&'static str> {
        self.semantic.as_ref().map(|s| s.similarity_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_runs_the_lexical_scorer() {
        let engine = AnalysisEngine::from_config(&Config::default()).unwrap();
        assert_eq!(engine.engine_name(), "lexical");
        assert!(engine.similarity_name().is_none());

        let report = engine.analyze("python developer", "python rust").unwrap();
        match report {
            AnalysisReport::Lexical(r) => {
                assert!(r.matched_keywords.contains(&"python".to_string()));
            }
            AnalysisReport::Semantic(_) => panic!("expected lexical report"),
        }
    }

    #[test]
    fn test_semantic_engine_with_tfidf_strategy() {
        let mut config = Config::default();
        config.analysis.engine = EngineKind::Semantic;
        config.analysis.similarity = SimilarityStrategy::TfIdf;

        let engine = AnalysisEngine::from_config(&config).unwrap();
        assert_eq!(engine.engine_name(), "semantic");
        assert_eq!(engine.similarity_name(), Some("tfidf"));

        let report = engine
            .analyze("rust engineer with tokio", "rust engineer wanted")
            .unwrap();
        match report {
            AnalysisReport::Semantic(r) => assert!(r.ats_score > 0),
            AnalysisReport::Lexical(_) => panic!("expected semantic report"),
        }
    }

    #[test]
    fn test_engine_accepts_an_injected_similarity_scorer() {
        struct StubSimilarity;

        impl SimilarityScorer for StubSimilarity {
            fn name(&self) -> &'static str {
                "stub"
            }

            fn score(&self, _a: &str, _b: &str) -> Result<f32> {
                Ok(0.42)
            }
        }

        let engine = AnalysisEngine::with_similarity(Arc::new(StubSimilarity)).unwrap();
        assert_eq!(engine.similarity_name(), Some("stub"));

        let report = engine.analyze("resume", "job").unwrap();
        match report {
            AnalysisReport::Semantic(r) => assert_eq!(r.ats_score, 42),
            AnalysisReport::Lexical(_) => panic!("expected semantic report"),
        }
    }

    #[test]
    fn test_report_serialization_shapes_differ() {
        let engine = AnalysisEngine::from_config(&Config::default()).unwrap();
        let report = engine.analyze("python", "python").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("score").is_some());
        assert!(json.get("totalImpact").is_some());
        assert!(json.get("ats_score").is_none());

        let mut config = Config::default();
        config.analysis.engine = EngineKind::Semantic;
        let engine = AnalysisEngine::from_config(&config).unwrap();
        let report = engine.analyze("python", "python").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("ats_score").is_some());
        assert!(json.get("skills_breakdown").is_some());
    }
}
