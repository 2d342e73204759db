//! Interview result records

use crate::models::CheatingRisk;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Professional,
    Friendly,
    Neutral,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Professional, Tone::Friendly, Tone::Neutral];

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Human-friendly label for an averaged posture score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostureLabel {
    Excellent,
    Good,
    Average,
}

impl PostureLabel {
    pub fn from_score(score: u32) -> Self {
        if score > 85 {
            PostureLabel::Excellent
        } else if score > 70 {
            PostureLabel::Good
        } else {
            PostureLabel::Average
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewQuestionResult {
    /// 1-based
    pub question_id: usize,
    pub question_text: String,
    pub transcript: String,
    pub matched_keywords: Vec<String>,
    pub voice_confidence: u32,
    pub posture_score: u32,
    pub overall_score: u32,
}

/// Final interview outcome combining posture, voice, per-question analysis and summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewResult {
    pub candidate_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_role: Option<String>,
    pub total_score: u32,
    pub cheating_risk: CheatingRisk,
    pub summary: String,
    pub questions: Vec<InterviewQuestionResult>,
    pub tone: Tone,
    pub voice_confidence: u32,
    pub posture_score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posture: Option<PostureLabel>,
}

impl InterviewResult {
    /// Replace the averaged voice and posture with the latest live readings, when present
    pub fn with_live_readings(mut self, voice: Option<u32>, posture: Option<u32>) -> Self {
        if let Some(voice) = voice {
            self.voice_confidence = voice;
        }
        if let Some(posture) = posture {
            self.posture_score = posture;
        }
        self
    }
}

/// Rounded arithmetic mean; zero for an empty slice
pub(crate) fn rounded_mean(values: impl Iterator<Item = u32>, count: usize) -> u32 {
    if count == 0 {
        return 0;
    }
    let sum: u64 = values.map(u64::from).sum();
    (sum as f64 / count as f64).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_posture_label_boundaries() {
        assert_eq!(PostureLabel::from_score(86), PostureLabel::Excellent);
        assert_eq!(PostureLabel::from_score(85), PostureLabel::Good);
        assert_eq!(PostureLabel::from_score(71), PostureLabel::Good);
        assert_eq!(PostureLabel::from_score(70), PostureLabel::Average);
    }

    #[test]
    fn test_rounded_mean() {
        assert_eq!(rounded_mean([70u32, 71].into_iter(), 2), 71);
        assert_eq!(rounded_mean([80u32, 90, 91].into_iter(), 3), 87);
        assert_eq!(rounded_mean(std::iter::empty(), 0), 0);
    }
}
