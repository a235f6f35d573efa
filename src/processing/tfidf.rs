//! TF-IDF cosine similarity over a two-document corpus
//!
//! Fallback similarity strategy fitted fresh per request over exactly the
//! resume and the job description: raw term counts, smoothed inverse
//! document frequency, L2-normalized vectors.

use crate::error::Result;
use crate::processing::similarity::{cosine_similarity, SimilarityScorer};
use crate::processing::text_processor::TextProcessor;
use std::collections::HashMap;

/// Vocabulary cap, by total term frequency.
const MAX_FEATURES: usize = 8000;

pub struct TfIdfSimilarity {
    processor: TextProcessor,
    max_features: usize,
}

impl Default for TfIdfSimilarity {
    fn default() -> Self {
        Self::new()
    }
}

impl TfIdfSimilarity {
    pub fn new() -> Self {
        Self {
            processor: TextProcessor::new(),
            max_features: MAX_FEATURES,
        }
    }

    fn term_counts(&self, text: &str) -> HashMap<String, usize> {
        let mut counts = HashMap::new();
        for token in self.processor.filtered_tokens(text) {
            *counts.entry(token).or_insert(0) += 1;
        }
        counts
    }

    /// Vocabulary over both documents, capped to `max_features` terms by
    /// total frequency (ties broken alphabetically for determinism).
    fn vocabulary(
        &self,
        counts_a: &HashMap<String, usize>,
        counts_b: &HashMap<String, usize>,
    ) -> Vec<String> {
        let mut totals: HashMap<&str, usize> = HashMap::new();
        for (term, count) in counts_a.iter().chain(counts_b.iter()) {
            *totals.entry(term.as_str()).or_insert(0) += count;
        }

        let mut terms: Vec<(&str, usize)> = totals.into_iter().collect();
        terms.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        terms.truncate(self.max_features);
        terms.into_iter().map(|(term, _)| term.to_string()).collect()
    }

    /// Smoothed idf over the two-document corpus:
    /// ln((1 + n) / (1 + df)) + 1 with n = 2.
    fn idf(df: usize) -> f32 {
        ((1.0 + 2.0) / (1.0 + df as f32)).ln() + 1.0
    }

    fn vectorize(vocab: &[String], counts: &HashMap<String, usize>, idfs: &[f32]) -> Vec<f32> {
        let mut vector: Vec<f32> = vocab
            .iter()
            .zip(idfs.iter())
            .map(|(term, idf)| *counts.get(term).unwrap_or(&0) as f32 * idf)
            .collect();

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }
        vector
    }
}

impl SimilarityScorer for TfIdfSimilarity {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn score(&self, text_a: &str, text_b: &str) -> Result<f32> {
        let counts_a = self.term_counts(text_a);
        let counts_b = self.term_counts(text_b);

        let vocab = self.vocabulary(&counts_a, &counts_b);
        if vocab.is_empty() {
            return Ok(0.0);
        }

        let idfs: Vec<f32> = vocab
            .iter()
            .map(|term| {
                let df = counts_a.contains_key(term) as usize + counts_b.contains_key(term) as usize;
                Self::idf(df)
            })
            .collect();

        let vector_a = Self::vectorize(&vocab, &counts_a, &idfs);
        let vector_b = Self::vectorize(&vocab, &counts_b, &idfs);
        cosine_similarity(&vector_a, &vector_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents_score_one() {
        let tfidf = TfIdfSimilarity::new();
        let text = "rust engineer building distributed storage systems";
        let sim = tfidf.score(text, text).unwrap();
        assert!((sim - 1.0).abs() < 1e-5, "sim = {}", sim);
    }

    #[test]
    fn test_disjoint_documents_score_zero() {
        let tfidf = TfIdfSimilarity::new();
        let sim = tfidf
            .score("rust kubernetes docker", "gardening pottery watercolor")
            .unwrap();
        assert!(sim.abs() < 1e-6, "sim = {}", sim);
    }

    #[test]
    fn test_partial_overlap_scores_in_between() {
        let tfidf = TfIdfSimilarity::new();
        let sim = tfidf
            .score(
                "python developer with aws experience",
                "python developer wanted for gardening team",
            )
            .unwrap();
        assert!(sim > 0.0 && sim < 1.0, "sim = {}", sim);
    }

    #[test]
    fn test_empty_documents_score_zero() {
        let tfidf = TfIdfSimilarity::new();
        assert_eq!(tfidf.score("", "").unwrap(), 0.0);
        assert_eq!(tfidf.score("rust", "").unwrap(), 0.0);
    }

    #[test]
    fn test_symmetry() {
        let tfidf = TfIdfSimilarity::new();
        let a = "senior rust engineer, async networking";
        let b = "we need rust and tokio experience";
        let ab = tfidf.score(a, b).unwrap();
        let ba = tfidf.score(b, a).unwrap();
        assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn test_stop_words_do_not_inflate_similarity() {
        let tfidf = TfIdfSimilarity::new();
        // Overlap only in stop words.
        let sim = tfidf
            .score("the and of with rust", "the and of with pottery")
            .unwrap();
        assert!(sim.abs() < 1e-6, "sim = {}", sim);
    }
}
