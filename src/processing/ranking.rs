//! Candidate ranking and dashboard metrics

use crate::models::Candidate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_candidates: usize,
    pub avg_match_score: u32,
    pub top_candidate: Option<TopCandidate>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopCandidate {
    pub id: String,
    pub name: String,
    pub match_score: u32,
    pub pool_percentage: u32,
}

/// All candidates, highest match score first; equal scores keep their order
pub fn sort_by_match<'a, I>(candidates: I) -> Vec<&'a Candidate>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut ranked: Vec<&Candidate> = candidates.into_iter().collect();
    ranked.sort_by(|a, b| b.score_or_zero().cmp(&a.score_or_zero()));
    ranked
}

pub fn rank_candidates<'a, I>(candidates: I, top_n: usize) -> Vec<&'a Candidate>
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut ranked = sort_by_match(candidates);
    ranked.truncate(top_n);
    ranked
}

pub fn dashboard_metrics<'a, I>(candidates: I) -> DashboardMetrics
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let candidates: Vec<&Candidate> = candidates.into_iter().collect();
    let total_candidates = candidates.len();

    let avg_match_score = if total_candidates > 0 {
        let sum: u64 = candidates.iter().map(|c| c.score_or_zero() as u64).sum();
        (sum / total_candidates as u64) as u32
    } else {
        0
    };

    // first candidate with the strictly greatest score
    let top = candidates.iter().copied().fold(None::<&Candidate>, |best, c| match best {
        Some(b) if c.score_or_zero() <= b.score_or_zero() => Some(b),
        _ => Some(c),
    });

    let top_candidate = top.map(|c| TopCandidate {
        id: c.id.clone(),
        name: c.name.clone(),
        match_score: c.score_or_zero(),
        pool_percentage: ((c.score_or_zero() as f64 / 100.0) * 100.0).round() as u32,
    });

    DashboardMetrics {
        total_candidates,
        avg_match_score,
        top_candidate,
    }
}
