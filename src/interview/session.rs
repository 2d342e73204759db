//! Step-by-step interview session
//!
//! Each answer is scored from the live sensor readings when available, falling back to
//! random draws. Completing the last question yields the candidate with interview fields
//! filled in.

use crate::error::{HireFlowError, Result};
use crate::interview::risk::classify_session_risk;
use crate::interview::simulator::{generate_candidate_answer, pick_random};
use crate::interview::types::{rounded_mean, InterviewQuestionResult, Tone};
use crate::models::{Candidate, CheatingRisk};
use log::{debug, info};
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    NotStarted,
    /// Waiting for the answer to the question at this index
    Asking(usize),
    Completed,
}

/// Latest sensor values at the moment a question is answered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LiveReadings {
    pub voice_confidence: Option<u32>,
    pub posture_score: Option<u32>,
    pub tone: Option<Tone>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionOutcome {
    pub candidate: Candidate,
    pub voice_confidence: u32,
    pub posture_score: u32,
    pub total_score: u32,
    pub cheating_risk: CheatingRisk,
    pub tone: Tone,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionProgress {
    /// Moved on to the question at this index
    Next(usize),
    Completed(Box<SessionOutcome>),
}

pub struct InterviewSession {
    candidate: Candidate,
    questions: Vec<String>,
    state: SessionState,
    responses: Vec<InterviewQuestionResult>,
    summary: Option<String>,
}

impl InterviewSession {
    pub fn new(candidate: Candidate, questions: Vec<String>) -> Self {
        Self {
            candidate,
            questions,
            state: SessionState::NotStarted,
            responses: Vec::new(),
            summary: None,
        }
    }

    pub fn start(&mut self) -> Result<()> {
        match self.state {
            SessionState::NotStarted if !self.questions.is_empty() => {
                info!("Starting interview for {}", self.candidate.name);
                self.state = SessionState::Asking(0);
                Ok(())
            }
            SessionState::NotStarted => Err(HireFlowError::InterviewState(
                "Interview has no questions".to_string(),
            )),
            _ => Err(HireFlowError::InterviewState(
                "Interview already started".to_string(),
            )),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn candidate(&self) -> &Candidate {
        &self.candidate
    }

    pub fn current_question(&self) -> Option<&str> {
        match self.state {
            SessionState::Asking(index) => self.questions.get(index).map(String::as_str),
            _ => None,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn responses(&self) -> &[InterviewQuestionResult] {
        &self.responses
    }

    pub fn summary(&self) -> Option<&str> {
        self.summary.as_deref()
    }

    /// Average posture over the answers so far
    pub fn running_posture(&self) -> Option<u32> {
        if self.responses.is_empty() {
            return None;
        }
        Some(rounded_mean(
            self.responses.iter().map(|r| r.posture_score),
            self.responses.len(),
        ))
    }

    /// Average voice confidence over the answers so far
    pub fn running_voice(&self) -> Option<u32> {
        if self.responses.is_empty() {
            return None;
        }
        Some(rounded_mean(
            self.responses.iter().map(|r| r.voice_confidence),
            self.responses.len(),
        ))
    }

    /// Score the current question and advance
    pub fn answer<R: Rng + ?Sized>(&mut self, live: LiveReadings, rng: &mut R) -> Result<SessionProgress> {
        let index = match self.state {
            SessionState::Asking(index) => index,
            SessionState::NotStarted => {
                return Err(HireFlowError::InterviewState(
                    "Interview has not started".to_string(),
                ))
            }
            SessionState::Completed => {
                return Err(HireFlowError::InterviewState(
                    "Interview is already complete".to_string(),
                ))
            }
        };

        let question = self.questions[index].clone();
        let voice_confidence = live
            .voice_confidence
            .unwrap_or_else(|| rng.gen_range(70..=90));
        let posture_score = live.posture_score.unwrap_or_else(|| rng.gen_range(65..=95));

        let keyword_count: usize = rng.gen_range(1..=3);
        let matched_keywords = if self.candidate.skills.is_empty() {
            vec!["skill".to_string()]
        } else {
            pick_random(&self.candidate.skills, keyword_count, rng)
        };
        let transcript = generate_candidate_answer(&self.candidate.name, &question, rng);

        let overall_score = (voice_confidence as f64 * 0.4
            + posture_score as f64 * 0.35
            + matched_keywords.len() as f64 * 5.0)
            .round() as u32;

        debug!(
            "Question {}: voice {}, posture {}, overall {}",
            index + 1,
            voice_confidence,
            posture_score,
            overall_score
        );

        self.responses.push(InterviewQuestionResult {
            question_id: index + 1,
            question_text: question,
            transcript,
            matched_keywords,
            voice_confidence,
            posture_score,
            overall_score,
        });

        if index + 1 < self.questions.len() {
            self.state = SessionState::Asking(index + 1);
            return Ok(SessionProgress::Next(index + 1));
        }

        self.state = SessionState::Completed;
        Ok(SessionProgress::Completed(Box::new(self.complete(live.tone))))
    }

    fn complete(&mut self, live_tone: Option<Tone>) -> SessionOutcome {
        let count = self.questions.len();
        let voice_confidence = rounded_mean(self.responses.iter().map(|r| r.voice_confidence), count);
        let posture_score = rounded_mean(self.responses.iter().map(|r| r.posture_score), count);
        let total_score = rounded_mean(self.responses.iter().map(|r| r.overall_score), count);

        let cheating_risk = classify_session_risk(voice_confidence, posture_score);
        let tone = live_tone.unwrap_or(Tone::Neutral);

        let skills: Vec<&str> = self.candidate.distinct_skills().into_iter().take(3).collect();
        let summary = format!(
            "AI Interview Summary for {name}:\n\
             - Avg Voice Confidence: {voice_confidence}%\n\
             - Avg Posture Score: {posture_score}%\n\
             - Keywords matched: {skills}\n\
             - Tone detected: {tone}\n\
             - Cheating Risk: {cheating_risk}\n\
             Overall, {name} scored {total_score}% on the interview.",
            name = self.candidate.name,
            skills = skills.join(", "),
        );

        info!(
            "Interview for {} complete: score {}, risk {}",
            self.candidate.name, total_score, cheating_risk
        );

        self.summary = Some(summary.clone());

        let mut candidate = self.candidate.clone();
        candidate.posture_score = Some(posture_score);
        candidate.voice_confidence = Some(voice_confidence);
        candidate.cheating_risk = Some(cheating_risk);
        candidate.ai_summary = Some(summary.clone());
        candidate.total_score = Some(total_score);

        SessionOutcome {
            candidate,
            voice_confidence,
            posture_score,
            total_score,
            cheating_risk,
            tone,
            summary,
        }
    }
}
