//! Tokenization shared by the scorers

use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

pub struct TextProcessor {
    stop_words: HashSet<String>,
    word_regex: Regex,
    alpha_regex: Regex,
}

impl Default for TextProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextProcessor {
    pub fn new() -> Self {
        let word_regex = Regex::new(r"\b\w+\b").expect("Invalid word regex");
        let alpha_regex = Regex::new(r"[a-zA-Z#+]+").expect("Invalid alpha regex");

        Self {
            stop_words: Self::create_stop_words(),
            word_regex,
            alpha_regex,
        }
    }

    /// Lowercased word tokens in document order. This is the job-description
    /// tokenizer of the lexical scorer; stop words are NOT filtered here.
    pub fn word_tokens(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.word_regex
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Unique word tokens, deduplicated in first-occurrence order so match
    /// lists and suggestions come out deterministic.
    pub fn unique_word_tokens(&self, text: &str) -> Vec<String> {
        let mut seen = HashSet::new();
        self.word_tokens(text)
            .into_iter()
            .filter(|t| seen.insert(t.clone()))
            .collect()
    }

    /// Set of alphabetic tokens (letters plus `#` and `+`), lowercased.
    /// Used for the semantic scorer's missing-keyword set difference.
    pub fn alpha_token_set(&self, text: &str) -> HashSet<String> {
        let lowered = text.to_lowercase();
        self.alpha_regex
            .find_iter(&lowered)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Lowercased word tokens with stop words and single characters removed.
    /// Feeds the TF-IDF vectorizer.
    pub fn filtered_tokens(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .map(|w| w.to_lowercase())
            .filter(|w| w.len() > 1 && !self.stop_words.contains(w))
            .collect()
    }

    /// Common English stop words, in the spirit of scikit-learn's built-in
    /// english list.
    fn create_stop_words() -> HashSet<String> {
        let stop_words = [
            "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any",
            "are", "as", "at", "be", "because", "been", "before", "being", "below", "between",
            "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down", "during",
            "each", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her",
            "here", "hers", "him", "his", "how", "if", "in", "into", "is", "it", "its", "itself",
            "just", "me", "more", "most", "my", "no", "nor", "not", "now", "of", "off", "on",
            "once", "only", "or", "other", "our", "ours", "out", "over", "own", "same", "she",
            "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
            "then", "there", "these", "they", "this", "those", "through", "to", "too", "under",
            "until", "up", "very", "was", "we", "were", "what", "when", "where", "which", "while",
            "who", "whom", "why", "will", "with", "would", "you", "your", "yours",
        ];
        stop_words.iter().map(|&s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_tokens_lowercase_and_split() {
        let processor = TextProcessor::new();
        let tokens = processor.word_tokens("Python, AWS and Docker!");
        assert_eq!(tokens, vec!["python", "aws", "and", "docker"]);
    }

    #[test]
    fn test_word_tokens_split_symbols() {
        let processor = TextProcessor::new();
        // The plain word tokenizer cannot produce symbol-bearing keywords.
        let tokens = processor.word_tokens("c++ and node.js");
        assert_eq!(tokens, vec!["c", "and", "node", "js"]);
    }

    #[test]
    fn test_unique_word_tokens_keep_first_occurrence_order() {
        let processor = TextProcessor::new();
        let tokens = processor.unique_word_tokens("python aws python docker aws");
        assert_eq!(tokens, vec!["python", "aws", "docker"]);
    }

    #[test]
    fn test_alpha_token_set_keeps_hash_and_plus() {
        let processor = TextProcessor::new();
        let tokens = processor.alpha_token_set("C# and C++ in 2024");
        assert!(tokens.contains("c#"));
        assert!(tokens.contains("c++"));
        assert!(!tokens.iter().any(|t| t.chars().any(|c| c.is_numeric())));
    }

    #[test]
    fn test_filtered_tokens_drop_stop_words() {
        let processor = TextProcessor::new();
        let tokens = processor.filtered_tokens("The engineer is working with Rust");
        assert!(tokens.contains(&"engineer".to_string()));
        assert!(tokens.contains(&"rust".to_string()));
        assert!(!tokens.contains(&"the".to_string()));
        assert!(!tokens.contains(&"is".to_string()));
    }
}
