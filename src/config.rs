//! Configuration management for HireFlow

use crate::error::{HireFlowError, Result};
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    pub scoring: ScoringConfig,
    pub interview: InterviewConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub candidates_path: PathBuf,
    pub jobs_path: PathBuf,
    pub enable_caching: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub skill_weight: f64,
    pub experience_weight: f64,
    /// Minimum score (0-100) for a candidate to count as a match for a job
    pub match_threshold: u32,
    pub top_n: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewConfig {
    pub questions: Vec<String>,
    pub sensor_interval_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub detailed: bool,
    pub color_output: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    Console,
    Json,
    Markdown,
    Html,
}

pub const DEFAULT_QUESTIONS: [&str; 5] = [
    "Tell me about yourself.",
    "Why do you want to work for this company?",
    "Describe a challenge you overcame at work.",
    "What are your greatest strengths and weaknesses?",
    "Where do you see yourself in 5 years?",
];

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            skill_weight: 0.7,
            experience_weight: 0.3,
            match_threshold: 50,
            top_n: 5,
        }
    }
}

impl Default for InterviewConfig {
    fn default() -> Self {
        Self {
            questions: DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect(),
            sensor_interval_ms: 3000,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: DataConfig {
                candidates_path: PathBuf::from("data").join("candidates.json"),
                jobs_path: PathBuf::from("data").join("jobs.json"),
                enable_caching: true,
            },
            scoring: ScoringConfig::default(),
            interview: InterviewConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Console,
                detailed: false,
                color_output: true,
            },
        }
    }
}

impl Config {
    /// Load from the default location, writing defaults on first run
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            Self::load_file(&config_path)
        } else {
            let config = Self::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    /// Load from an explicit path when given, otherwise from the default location
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(HireFlowError::Configuration(format!(
                        "Config file does not exist: {}",
                        path.display()
                    )));
                }
                Self::load_file(path)
            }
            None => Self::load(),
        }
    }

    fn load_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| HireFlowError::Configuration(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| HireFlowError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("hireflow")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;
        // NaN slips past every comparison below
        if !scoring.skill_weight.is_finite() || !scoring.experience_weight.is_finite() {
            return Err(HireFlowError::Configuration(
                "Scoring weights must be finite numbers".to_string(),
            ));
        }
        if scoring.skill_weight < 0.0 || scoring.experience_weight < 0.0 {
            return Err(HireFlowError::Configuration(
                "Scoring weights must not be negative".to_string(),
            ));
        }
        if ((scoring.skill_weight + scoring.experience_weight) - 1.0).abs() > 1e-6 {
            return Err(HireFlowError::Configuration(format!(
                "Scoring weights must sum to 1.0 (got {:.3})",
                scoring.skill_weight + scoring.experience_weight
            )));
        }
        if scoring.match_threshold > 100 {
            return Err(HireFlowError::Configuration(format!(
                "Match threshold must be within 0-100 (got {})",
                scoring.match_threshold
            )));
        }
        if self.interview.questions.is_empty() {
            return Err(HireFlowError::Configuration(
                "Interview needs at least one question".to_string(),
            ));
        }
        if self.interview.sensor_interval_ms == 0 {
            return Err(HireFlowError::Configuration(
                "Sensor interval must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Set a single value addressed by a dotted key, e.g. `scoring.match_threshold`
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "data.candidates_path" => self.data.candidates_path = PathBuf::from(value),
            "data.jobs_path" => self.data.jobs_path = PathBuf::from(value),
            "data.enable_caching" => {
                self.data.enable_caching = value
                    .parse()
                    .with_context(|| format!("'{}' is not a boolean", value))?
            }
            "scoring.skill_weight" => {
                self.scoring.skill_weight = value
                    .parse()
                    .with_context(|| format!("'{}' is not a number", value))?
            }
            "scoring.experience_weight" => {
                self.scoring.experience_weight = value
                    .parse()
                    .with_context(|| format!("'{}' is not a number", value))?
            }
            "scoring.match_threshold" => {
                self.scoring.match_threshold = value
                    .parse()
                    .with_context(|| format!("'{}' is not a whole number", value))?
            }
            "scoring.top_n" => {
                self.scoring.top_n = value
                    .parse()
                    .with_context(|| format!("'{}' is not a whole number", value))?
            }
            "interview.sensor_interval_ms" => {
                self.interview.sensor_interval_ms = value
                    .parse()
                    .with_context(|| format!("'{}' is not a whole number", value))?
            }
            "output.format" => {
                self.output.format =
                    crate::cli::parse_output_format(value).map_err(HireFlowError::InvalidInput)?
            }
            "output.detailed" => {
                self.output.detailed = value
                    .parse()
                    .with_context(|| format!("'{}' is not a boolean", value))?
            }
            "output.color_output" => {
                self.output.color_output = value
                    .parse()
                    .with_context(|| format!("'{}' is not a boolean", value))?
            }
            _ => {
                return Err(HireFlowError::Configuration(format!(
                    "Unknown configuration key: {}",
                    key
                )))
            }
        }
        self.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.interview.questions.len(), 5);
        assert_eq!(config.scoring.match_threshold, 50);
    }

    #[test]
    fn test_roundtrip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.scoring.match_threshold = 65;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(Some(&path)).unwrap();
        assert_eq!(loaded.scoring.match_threshold, 65);
        assert_eq!(loaded.output.format, OutputFormat::Console);
    }

    #[test]
    fn test_missing_explicit_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = Config::load_from(Some(&dir.path().join("absent.toml")));
        assert!(matches!(result, Err(HireFlowError::Configuration(_))));
    }

    #[test]
    fn test_set_value() {
        let mut config = Config::default();
        config.set_value("scoring.match_threshold", "70").unwrap();
        config.set_value("output.format", "md").unwrap();
        assert_eq!(config.scoring.match_threshold, 70);
        assert_eq!(config.output.format, OutputFormat::Markdown);

        assert!(config.set_value("scoring.top_n", "many").is_err());
        assert!(config.set_value("nope.key", "1").is_err());
    }

    #[test]
    fn test_unbalanced_weights_rejected() {
        let mut config = Config::default();
        assert!(config.set_value("scoring.skill_weight", "0.9").is_err());

        config.scoring.skill_weight = 0.5;
        config.scoring.experience_weight = 0.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_non_finite_weights_rejected() {
        let mut config = Config::default();
        assert!(config.set_value("scoring.skill_weight", "NaN").is_err());
        assert!(config.set_value("scoring.experience_weight", "inf").is_err());

        config.scoring.skill_weight = f64::NAN;
        config.scoring.experience_weight = f64::NAN;
        assert!(matches!(config.validate(), Err(HireFlowError::Configuration(_))));
    }
}
