//! Job postings

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills_required: Vec<String>,
    #[serde(default)]
    pub experience_required: f64,

    // Computed metrics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_match_score: Option<u32>,
    /// Number of candidates at or above the match threshold
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_count: Option<usize>,
}

impl Job {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            location: String::new(),
            skills_required: Vec::new(),
            experience_required: 0.0,
            avg_match_score: None,
            match_count: None,
        }
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skills_required = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_experience(mut self, years: f64) -> Self {
        self.experience_required = years;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn requires(&self, skill: &str) -> bool {
        self.skills_required.iter().any(|s| s == skill)
    }

    pub fn has_metrics(&self) -> bool {
        self.avg_match_score.is_some()
    }
}
