//! Configuration management for the resume analyzer

use crate::error::{Result, ResumeAnalyzerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Which scorer the service runs: the weighted lexical scorer or the
    /// semantic-similarity scorer. Both stay available; the selection is an
    /// explicit startup decision, never inferred at request time.
    pub engine: EngineKind,
    /// Similarity strategy for the semantic scorer. Choosing `Embedding`
    /// with an unloadable model is a startup error, not a silent fallback
    /// to TF-IDF.
    pub similarity: SimilarityStrategy,
    /// Local directory or HuggingFace repo id of the Model2Vec embedding
    /// model. Only consulted when `similarity = "embedding"`.
    pub embedding_model: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    Lexical,
    Semantic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityStrategy {
    Embedding,
    TfIdf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8000,
            },
            analysis: AnalysisConfig {
                engine: EngineKind::Lexical,
                similarity: SimilarityStrategy::TfIdf,
                embedding_model: "minishlab/M2V_base_output".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from the given path, or from the default location.
    /// A missing file yields the defaults and writes them out so the user
    /// has something to edit.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content).map_err(|e| {
                ResumeAnalyzerError::Configuration(format!(
                    "Failed to parse {}: {}",
                    config_path.display(),
                    e
                ))
            })?;
            Ok(config)
        } else if path.is_some() {
            Err(ResumeAnalyzerError::Configuration(format!(
                "Config file not found: {}",
                config_path.display()
            )))
        } else {
            let config = Self::default();
            config.save(&config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| {
            ResumeAnalyzerError::Configuration(format!("Failed to serialize config: {}", e))
        })?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("resume-analyzer")
            .join("config.toml")
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.analysis.engine, EngineKind::Lexical);
        assert_eq!(config.analysis.similarity, SimilarityStrategy::TfIdf);
    }

    #[test]
    fn test_roundtrip_through_toml() {
        let config = Config::default();
        let serialized = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.server.host, config.server.host);
        assert_eq!(parsed.analysis.engine, config.analysis.engine);
    }

    #[test]
    fn test_engine_kind_parses_lowercase() {
        let config: Config = toml::from_str(
            r#"
            [server]
            host = "127.0.0.1"
            port = 9000

            [analysis]
            engine = "semantic"
            similarity = "embedding"
            embedding_model = "minishlab/M2V_base_output"
            "#,
        )
        .unwrap();
        assert_eq!(config.analysis.engine, EngineKind::Semantic);
        assert_eq!(config.analysis.similarity, SimilarityStrategy::Embedding);
    }
}
