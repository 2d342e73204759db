//! In-memory dashboard state
//!
//! Base candidates come from fixtures; uploads and finished interviews are kept as local
//! additions on top of them and are lost when the dashboard is dropped.

use crate::config::Config;
use crate::error::Result;
use crate::input::FixtureLoader;
use crate::models::{Candidate, Job};
use crate::processing::extraction::{extract_candidate, RosterEntry};
use crate::processing::matching::{compute_job_metrics, MatchWeights};
use crate::processing::ranking::{dashboard_metrics, DashboardMetrics};
use log::{debug, info};
use std::collections::HashSet;

pub struct Dashboard {
    base: Vec<Candidate>,
    local_adds: Vec<Candidate>,
    jobs: Vec<Job>,
    weights: MatchWeights,
    interview_candidate: Option<Candidate>,
    last_clicked: Option<String>,
}

impl Dashboard {
    /// Job metrics are computed against the base candidates
    pub fn new(base: Vec<Candidate>, jobs: Vec<Job>, weights: MatchWeights, threshold: u32) -> Self {
        let jobs = compute_job_metrics(&jobs, &base, &weights, threshold);
        Self {
            base,
            local_adds: Vec::new(),
            jobs,
            weights,
            interview_candidate: None,
            last_clicked: None,
        }
    }

    /// Load fixtures named by the configuration; unreadable files leave empty collections
    pub async fn load(config: &Config) -> Self {
        let mut loader = FixtureLoader::new().with_cache(config.data.enable_caching);
        let candidates = loader.candidates_or_empty(&config.data.candidates_path).await;
        let jobs = loader.jobs_or_empty(&config.data.jobs_path).await;
        Self::new(
            candidates,
            jobs,
            MatchWeights::from(&config.scoring),
            config.scoring.match_threshold,
        )
    }

    /// Base candidates followed by local additions
    pub fn candidates(&self) -> impl Iterator<Item = &Candidate> {
        self.base.iter().chain(self.local_adds.iter())
    }

    pub fn local_additions(&self) -> &[Candidate] {
        &self.local_adds
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn find_candidate(&self, id: &str) -> Option<&Candidate> {
        self.candidates().find(|c| c.id == id)
    }

    pub fn find_job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn metrics(&self) -> DashboardMetrics {
        dashboard_metrics(self.candidates())
    }

    /// Resolve an uploaded file to a roster candidate and add it locally
    pub fn upload_resume(&mut self, file_name: &str, file_url: &str, roster: &[RosterEntry]) -> Result<&Candidate> {
        let candidate = extract_candidate(file_name, file_url, &self.jobs, roster, &self.weights)?;
        Ok(self.add_candidate(candidate))
    }

    pub fn add_candidate(&mut self, candidate: Candidate) -> &Candidate {
        info!("Adding candidate {} ({})", candidate.name, candidate.id);
        self.local_adds.push(candidate);
        &self.local_adds[self.local_adds.len() - 1]
    }

    /// Open the interview for a candidate. Clicking the same candidate twice in a row is ignored.
    pub fn select_candidate(&mut self, id: &str) -> Option<&Candidate> {
        if self.last_clicked.as_deref() == Some(id) {
            debug!("Ignoring repeated selection of {}", id);
            return None;
        }

        self.last_clicked = Some(id.to_string());
        self.interview_candidate = self.find_candidate(id).cloned();
        self.interview_candidate.as_ref()
    }

    pub fn interview_candidate(&self) -> Option<&Candidate> {
        self.interview_candidate.as_ref()
    }

    /// Store the interviewed candidate, replacing an earlier local copy, and close the interview
    pub fn complete_interview(&mut self, updated: Candidate) {
        match self.local_adds.iter_mut().find(|c| c.id == updated.id) {
            Some(existing) => *existing = updated,
            None => self.local_adds.push(updated),
        }
        self.interview_candidate = None;
    }

    /// Unique jobs whose title matches a displayed candidate's role, in first-seen order
    pub fn applied_jobs(&self) -> Vec<&Job> {
        let mut seen = HashSet::new();
        let mut applied = Vec::new();

        for candidate in self.candidates() {
            if let Some(job) = self.jobs.iter().find(|j| j.title == candidate.role) {
                if seen.insert(job.id.as_str()) {
                    applied.push(job);
                }
            }
        }

        applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::extraction::default_roster;

    fn dashboard() -> Dashboard {
        let base = vec![
            Candidate::new("1", "Priya Sharma")
                .with_role("Frontend Developer")
                .with_skills(["React", "TypeScript"])
                .with_experience(3.0)
                .with_match_score(80),
            Candidate::new("2", "Amit Patel")
                .with_role("Backend Engineer")
                .with_skills(["Python", "Django"])
                .with_experience(5.0)
                .with_match_score(70),
            Candidate::new("3", "Sneha Reddy")
                .with_role("Frontend Developer")
                .with_skills(["React"])
                .with_experience(2.0),
        ];
        let jobs = vec![
            Job::new("j1", "Frontend Developer").with_skills(["React", "TypeScript"]).with_experience(2.0),
            Job::new("j2", "Backend Engineer").with_skills(["Python", "Django"]).with_experience(4.0),
            Job::new("j3", "Designer").with_skills(["Figma"]),
        ];
        Dashboard::new(base, jobs, MatchWeights::default(), 50)
    }

    #[test]
    fn test_jobs_get_metrics() {
        let dashboard = dashboard();
        assert!(dashboard.jobs().iter().all(|j| j.has_metrics()));
        assert_eq!(dashboard.find_job("j3").and_then(|j| j.match_count), Some(0));
    }

    #[test]
    fn test_applied_jobs_are_unique() {
        let dashboard = dashboard();
        let ids: Vec<&str> = dashboard.applied_jobs().iter().map(|j| j.id.as_str()).collect();
        assert_eq!(ids, vec!["j1", "j2"]);
    }

    #[test]
    fn test_upload_appends_local_candidate() {
        let mut dashboard = dashboard();
        let added = dashboard
            .upload_resume("Sneha_Reddy.pdf", "file:///sneha.pdf", &default_roster())
            .unwrap()
            .clone();

        assert_eq!(added.name, "Sneha Reddy");
        assert_eq!(added.role, "Frontend Developer");
        assert_eq!(dashboard.candidates().count(), 4);
        assert_eq!(dashboard.metrics().total_candidates, 4);
    }

    #[test]
    fn test_select_same_candidate_twice_is_ignored() {
        let mut dashboard = dashboard();
        assert_eq!(dashboard.select_candidate("2").map(|c| c.name.as_str()), Some("Amit Patel"));
        assert!(dashboard.select_candidate("2").is_none());
        // still open from the first click
        assert!(dashboard.interview_candidate().is_some());

        assert!(dashboard.select_candidate("missing").is_none());
        assert!(dashboard.interview_candidate().is_none());
    }

    #[test]
    fn test_complete_interview_upserts() {
        let mut dashboard = dashboard();
        dashboard.select_candidate("1");

        let mut updated = dashboard.find_candidate("1").cloned().unwrap();
        updated.total_score = Some(84);
        dashboard.complete_interview(updated.clone());

        assert_eq!(dashboard.local_additions().len(), 1);
        assert!(dashboard.interview_candidate().is_none());

        updated.total_score = Some(90);
        dashboard.complete_interview(updated);
        assert_eq!(dashboard.local_additions().len(), 1);
        assert_eq!(dashboard.local_additions()[0].total_score, Some(90));
    }
}
