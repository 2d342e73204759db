//! Candidate-to-job match scoring: weighted skill overlap plus experience proximity

use crate::config::ScoringConfig;
use crate::models::{Candidate, Job};
use log::debug;
use serde::{Deserialize, Serialize};

/// Weights applied to the skill and experience components
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub skill: f64,
    pub experience: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            skill: 0.7,
            experience: 0.3,
        }
    }
}

impl From<&ScoringConfig> for MatchWeights {
    fn from(config: &ScoringConfig) -> Self {
        Self {
            skill: config.skill_weight,
            experience: config.experience_weight,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchBreakdown {
    pub job_id: String,
    pub job_title: String,
    pub skill_match: f64,
    pub experience_match: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub score: u32,
}

/// Share of the job's required skills the candidate has; zero when the job lists none
pub fn skill_match(candidate: &Candidate, job: &Job) -> f64 {
    if job.skills_required.is_empty() {
        return 0.0;
    }
    let matched = candidate
        .distinct_skills()
        .into_iter()
        .filter(|s| job.requires(s))
        .count();
    matched as f64 / job.skills_required.len() as f64
}

/// 1.0 when the candidate meets the requirement, falling linearly to 0 at zero experience
pub fn experience_match(candidate_years: f64, required_years: f64) -> f64 {
    if required_years <= 0.0 {
        return 1.0;
    }
    let diff = (required_years - candidate_years).max(0.0);
    (1.0 - diff / required_years).max(0.0)
}

pub fn match_score(candidate: &Candidate, job: &Job, weights: &MatchWeights) -> u32 {
    let skill = skill_match(candidate, job);
    let experience = experience_match(candidate.experience, job.experience_required);
    to_percent(skill * weights.skill + experience * weights.experience)
}

pub fn match_breakdown(candidate: &Candidate, job: &Job, weights: &MatchWeights) -> MatchBreakdown {
    let skills = candidate.distinct_skills();
    let matched_skills: Vec<String> = skills
        .iter()
        .filter(|s| job.requires(s))
        .map(|s| s.to_string())
        .collect();
    let missing_skills: Vec<String> = job
        .skills_required
        .iter()
        .filter(|req| !skills.contains(&req.as_str()))
        .cloned()
        .collect();

    MatchBreakdown {
        job_id: job.id.clone(),
        job_title: job.title.clone(),
        skill_match: skill_match(candidate, job),
        experience_match: experience_match(candidate.experience, job.experience_required),
        matched_skills,
        missing_skills,
        score: match_score(candidate, job, weights),
    }
}

/// Fill in `avg_match_score` and `match_count` for each job against the whole pool.
/// With no candidates the jobs are returned without metrics.
pub fn compute_job_metrics(
    jobs: &[Job],
    candidates: &[Candidate],
    weights: &MatchWeights,
    threshold: u32,
) -> Vec<Job> {
    if candidates.is_empty() {
        return jobs.to_vec();
    }

    jobs.iter()
        .map(|job| {
            let scores: Vec<u32> = candidates
                .iter()
                .map(|c| match_score(c, job, weights))
                .collect();

            let total: u32 = scores.iter().sum();
            let avg = (total as f64 / scores.len() as f64).round() as u32;
            let match_count = scores.iter().filter(|&&s| s >= threshold).count();

            debug!(
                "Job {} ({}): avg {} across {} candidates, {} matches",
                job.id,
                job.title,
                avg,
                scores.len(),
                match_count
            );

            Job {
                avg_match_score: Some(avg),
                match_count: Some(match_count),
                ..job.clone()
            }
        })
        .collect()
}

/// Job with the strictly highest skill overlap; earliest wins ties, none without overlap
pub fn best_job_for<'a>(candidate: &Candidate, jobs: &'a [Job]) -> Option<&'a Job> {
    let mut best: Option<&Job> = None;
    let mut best_score = 0.0;

    for job in jobs {
        let score = skill_match(candidate, job);
        if score > best_score {
            best_score = score;
            best = Some(job);
        }
    }

    best
}

fn to_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u32
}
