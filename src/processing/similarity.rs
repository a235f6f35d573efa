//! Similarity strategies for the semantic scorer
//!
//! The strategy is chosen explicitly by configuration at startup and held
//! behind a trait object, so tests can substitute a stub and the HTTP layer
//! can report which one is active.

use crate::error::{Result, ResumeAnalyzerError};
use model2vec_rs::model::StaticModel;

/// Scores the similarity of two free-form texts. Implementations must be
/// safe to call concurrently from multiple requests.
pub trait SimilarityScorer: Send + Sync {
    /// Strategy name surfaced in logs and the health check.
    fn name(&self) -> &'static str;

    /// Similarity of the two texts, nominally in [0, 1]. Embedding cosine
    /// can dip slightly below zero; callers clamp when converting to a
    /// percentage.
    fn score(&self, text_a: &str, text_b: &str) -> Result<f32>;
}

/// Cosine similarity between two vectors of equal dimension. Zero vectors
/// score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(ResumeAnalyzerError::Scoring(format!(
            "Vector dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return Ok(0.0);
    }
    Ok(dot / (norm_a * norm_b))
}

/// Sentence-embedding similarity backed by a Model2Vec static model. The
/// model is loaded once at construction and shared read-only across
/// requests; `StaticModel::encode` takes `&self` and is reentrant.
pub struct EmbeddingSimilarity {
    model: StaticModel,
}

impl EmbeddingSimilarity {
    /// Load the model from a local directory or a HuggingFace repo id.
    pub fn load(model_path: &str) -> Result<Self> {
        log::info!("Loading Model2Vec embedding model: {}", model_path);
        let model = StaticModel::from_pretrained(
            model_path,
            None,       // token
            Some(true), // normalize embeddings
            None,       // subfolder
        )
        .map_err(|e| {
            ResumeAnalyzerError::Embedding(format!(
                "Failed to load embedding model '{}': {}",
                model_path, e
            ))
        })?;
        Ok(Self { model })
    }
}

impl SimilarityScorer for EmbeddingSimilarity {
    fn name(&self) -> &'static str {
        "embedding"
    }

    fn score(&self, text_a: &str, text_b: &str) -> Result<f32> {
        let embedding_a = self.model.encode_single(text_a);
        let embedding_b = self.model.encode_single(text_b);
        cosine_similarity(&embedding_a, &embedding_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_of_identical_vectors() {
        let v = vec![0.5, 0.2, 0.8];
        let sim = cosine_similarity(&v, &v).unwrap();
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_of_orthogonal_vectors() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap();
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn test_cosine_of_zero_vector_is_zero() {
        let sim = cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).unwrap();
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_cosine_rejects_mismatched_dimensions() {
        assert!(cosine_similarity(&[1.0], &[1.0, 2.0]).is_err());
    }
}
