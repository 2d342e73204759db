//! Cheating-risk classification and the interview report card

use crate::models::CheatingRisk;
use serde::{Deserialize, Serialize};

/// Thresholds used when a whole interview is generated in one pass
pub fn classify_summary_risk(avg_voice: u32, avg_posture: u32) -> CheatingRisk {
    if avg_voice < 70 || avg_posture < 70 {
        CheatingRisk::High
    } else if avg_voice < 80 {
        CheatingRisk::Medium
    } else {
        CheatingRisk::Low
    }
}

/// Thresholds used by the step-by-step session and the report card
pub fn classify_session_risk(avg_voice: u32, avg_posture: u32) -> CheatingRisk {
    if avg_voice < 70 || avg_posture < 65 {
        CheatingRisk::High
    } else if avg_voice < 80 || avg_posture < 75 {
        CheatingRisk::Medium
    } else {
        CheatingRisk::Low
    }
}

/// Risk shown on the report card once a session finishes: only the mean answer score counts
pub fn classify_card_risk(overall_scores: &[u32]) -> CheatingRisk {
    if overall_scores.is_empty() {
        return CheatingRisk::Low;
    }
    let sum: u64 = overall_scores.iter().map(|&s| u64::from(s)).sum();
    let mean = sum as f64 / overall_scores.len() as f64;
    if mean > 60.0 {
        CheatingRisk::Low
    } else {
        CheatingRisk::Medium
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportCard {
    pub cheating_risk: CheatingRisk,
    pub posture_score: Option<u32>,
    pub voice_confidence: Option<u32>,
    pub overall_score: Option<u32>,
}

impl ReportCard {
    /// An explicit risk wins; otherwise it is derived once both readings exist, and is Low before that.
    pub fn compute(
        posture_score: Option<u32>,
        voice_confidence: Option<u32>,
        incoming_risk: Option<CheatingRisk>,
    ) -> Self {
        let derived = match (posture_score, voice_confidence) {
            (Some(posture), Some(voice)) => Some((posture, voice)),
            _ => None,
        };

        let cheating_risk = incoming_risk.unwrap_or_else(|| {
            derived
                .map(|(posture, voice)| classify_session_risk(voice, posture))
                .unwrap_or(CheatingRisk::Low)
        });

        let overall_score = derived.map(|(posture, voice)| {
            (posture as f64 * 0.35 + voice as f64 * 0.35 + 30.0).round() as u32
        });

        Self {
            cheating_risk,
            posture_score,
            voice_confidence,
            overall_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_risk_boundaries() {
        assert_eq!(classify_summary_risk(69, 90), CheatingRisk::High);
        assert_eq!(classify_summary_risk(90, 69), CheatingRisk::High);
        assert_eq!(classify_summary_risk(79, 70), CheatingRisk::Medium);
        assert_eq!(classify_summary_risk(80, 70), CheatingRisk::Low);
    }

    #[test]
    fn test_card_risk_uses_unrounded_mean() {
        assert_eq!(classify_card_risk(&[]), CheatingRisk::Low);
        assert_eq!(classify_card_risk(&[60]), CheatingRisk::Medium);
        assert_eq!(classify_card_risk(&[61]), CheatingRisk::Low);
        assert_eq!(classify_card_risk(&[60, 61]), CheatingRisk::Low);
        assert_eq!(classify_card_risk(&[40, 95, 45]), CheatingRisk::Medium);
    }

    #[test]
    fn test_session_risk_boundaries() {
        assert_eq!(classify_session_risk(70, 64), CheatingRisk::High);
        assert_eq!(classify_session_risk(70, 65), CheatingRisk::Medium);
        assert_eq!(classify_session_risk(85, 74), CheatingRisk::Medium);
        assert_eq!(classify_session_risk(80, 75), CheatingRisk::Low);
    }

    #[test]
    fn test_report_card_with_both_readings() {
        let card = ReportCard::compute(Some(80), Some(100), None);
        assert_eq!(card.cheating_risk, CheatingRisk::Low);
        assert_eq!(card.overall_score, Some(93));

        let shaky = ReportCard::compute(Some(60), Some(100), None);
        assert_eq!(shaky.cheating_risk, CheatingRisk::High);
    }

    #[test]
    fn test_report_card_incoming_risk_wins() {
        let card = ReportCard::compute(Some(95), Some(95), Some(CheatingRisk::High));
        assert_eq!(card.cheating_risk, CheatingRisk::High);
    }

    #[test]
    fn test_report_card_partial_readings() {
        let card = ReportCard::compute(Some(50), None, None);
        assert_eq!(card.cheating_risk, CheatingRisk::Low);
        assert_eq!(card.overall_score, None);
    }
}
