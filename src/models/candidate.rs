//! Candidate profiles

use crate::models::lenient;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// Three-level cheating risk derived from average voice and posture scores
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheatingRisk {
    Low,
    Medium,
    High,
}

impl fmt::Display for CheatingRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheatingRisk::Low => "Low",
            CheatingRisk::Medium => "Medium",
            CheatingRisk::High => "High",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub role: String,

    /// Years of experience
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub experience: f64,

    #[serde(default, deserialize_with = "lenient::strings_or_empty")]
    pub skills: Vec<String>,

    #[serde(default, deserialize_with = "lenient::text_or_empty")]
    pub resume_url: String,

    /// Base matching score (resume + job), 0-100
    #[serde(default, deserialize_with = "lenient::optional", skip_serializing_if = "Option::is_none")]
    pub match_score: Option<u32>,

    // Filled in after an interview
    #[serde(default, deserialize_with = "lenient::optional", skip_serializing_if = "Option::is_none")]
    pub voice_confidence: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional", skip_serializing_if = "Option::is_none")]
    pub posture_score: Option<u32>,
    #[serde(default, deserialize_with = "lenient::optional", skip_serializing_if = "Option::is_none")]
    pub cheating_risk: Option<CheatingRisk>,
    #[serde(default, deserialize_with = "lenient::optional", skip_serializing_if = "Option::is_none")]
    pub ai_summary: Option<String>,
    #[serde(default, deserialize_with = "lenient::optional", skip_serializing_if = "Option::is_none")]
    pub total_score: Option<u32>,
}

impl Candidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            role: String::new(),
            experience: 0.0,
            skills: Vec::new(),
            resume_url: String::new(),
            match_score: None,
            voice_confidence: None,
            posture_score: None,
            cheating_risk: None,
            ai_summary: None,
            total_score: None,
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_experience(mut self, years: f64) -> Self {
        self.experience = years;
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    pub fn with_match_score(mut self, score: u32) -> Self {
        self.match_score = Some(score);
        self
    }

    /// Match score with absent values treated as zero
    pub fn score_or_zero(&self) -> u32 {
        self.match_score.unwrap_or(0)
    }

    /// Skills in first-seen order with duplicates removed
    pub fn distinct_skills(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.skills
            .iter()
            .map(String::as_str)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    pub fn has_interview(&self) -> bool {
        self.total_score.is_some()
    }
}
