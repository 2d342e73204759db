//! Report structures for the dashboard and interview views

use crate::interview::risk::{classify_card_risk, ReportCard};
use crate::interview::session::SessionOutcome;
use crate::interview::types::{InterviewQuestionResult, InterviewResult, PostureLabel, Tone};
use crate::models::{Candidate, Job};
use crate::processing::ranking::DashboardMetrics;
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: SystemTime,
    pub tool_version: String,
    /// Where the candidate and job data came from
    pub data_source: String,
}

impl ReportMetadata {
    pub fn new(data_source: impl Into<String>) -> Self {
        Self {
            generated_at: SystemTime::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            data_source: data_source.into(),
        }
    }

    pub fn generated_at_display(&self) -> String {
        chrono::DateTime::<chrono::Utc>::from(self.generated_at)
            .format("%Y-%m-%d %H:%M:%S UTC")
            .to_string()
    }
}

/// Everything the dashboard view shows
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub metadata: ReportMetadata,
    pub metrics: DashboardMetrics,
    /// Jobs that at least one displayed candidate applied for
    pub applied_jobs: Vec<Job>,
    /// All jobs with their computed metrics
    pub jobs: Vec<Job>,
    /// Candidates, highest match score first
    pub candidates: Vec<Candidate>,
}

/// Outcome of one interview, from either the one-shot generator or a session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterviewReport {
    pub metadata: ReportMetadata,
    pub candidate: Candidate,
    pub questions: Vec<InterviewQuestionResult>,
    pub card: ReportCard,
    pub total_score: u32,
    pub tone: Tone,
    pub posture_label: Option<PostureLabel>,
    pub summary: String,
}

impl InterviewReport {
    pub fn from_result(metadata: ReportMetadata, candidate: &Candidate, result: InterviewResult) -> Self {
        let card = ReportCard::compute(
            Some(result.posture_score),
            Some(result.voice_confidence),
            Some(result.cheating_risk),
        );

        let mut candidate = candidate.clone();
        candidate.voice_confidence = Some(result.voice_confidence);
        candidate.posture_score = Some(result.posture_score);
        candidate.cheating_risk = Some(result.cheating_risk);
        candidate.ai_summary = Some(result.summary.clone());
        candidate.total_score = Some(result.total_score);

        Self {
            metadata,
            candidate,
            questions: result.questions,
            card,
            total_score: result.total_score,
            tone: result.tone,
            posture_label: result.posture,
            summary: result.summary,
        }
    }

    pub fn from_session(
        metadata: ReportMetadata,
        outcome: SessionOutcome,
        responses: &[InterviewQuestionResult],
    ) -> Self {
        // the card rates the answers; the candidate keeps the sensor-based risk
        let overall_scores: Vec<u32> = responses.iter().map(|r| r.overall_score).collect();
        let card = ReportCard::compute(
            Some(outcome.posture_score),
            Some(outcome.voice_confidence),
            Some(classify_card_risk(&overall_scores)),
        );

        Self {
            metadata,
            questions: responses.to_vec(),
            card,
            total_score: outcome.total_score,
            tone: outcome.tone,
            posture_label: Some(PostureLabel::from_score(outcome.posture_score)),
            summary: outcome.summary,
            candidate: outcome.candidate,
        }
    }
}
