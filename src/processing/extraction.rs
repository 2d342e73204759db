//! Map uploaded resume files onto candidate records
//!
//! There is no document parsing here: the file name is compared against a roster of
//! known candidates and the closest name wins. The chosen profile is then paired with
//! the job whose required skills it covers best.

use crate::error::{HireFlowError, Result};
use crate::models::{Candidate, Job};
use crate::processing::matching::{best_job_for, match_score, MatchWeights};
use crate::processing::similarity::string_similarity;
use log::{debug, info};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub skills: Vec<String>,
    pub experience: f64,
    pub location: String,
    pub email: String,
}

impl RosterEntry {
    fn new(id: &str, name: &str, skills: &[&str], experience: f64, location: &str, email: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience,
            location: location.to_string(),
            email: email.to_string(),
        }
    }
}

/// Built-in roster used to resolve uploads
pub fn default_roster() -> Vec<RosterEntry> {
    vec![
        RosterEntry::new(
            "1",
            "Priya Sharma",
            &["React", "Node.js", "MongoDB", "TypeScript"],
            3.0,
            "Bangalore",
            "priya.sharma@example.com",
        ),
        RosterEntry::new(
            "2",
            "Amit Patel",
            &["Python", "Django", "PostgreSQL", "Docker"],
            5.0,
            "Mumbai",
            "amit.patel@example.com",
        ),
        RosterEntry::new(
            "3",
            "Sneha Reddy",
            &["React", "Next.js", "GraphQL", "Sass"],
            2.0,
            "Hyderabad",
            "sneha.reddy@example.com",
        ),
        RosterEntry::new(
            "4",
            "Rohit Verma",
            &["JavaScript", "Node.js", "Express", "PostgreSQL"],
            4.0,
            "Pune",
            "rohit.verma@example.com",
        ),
        RosterEntry::new(
            "5",
            "Ananya Gupta",
            &["React", "TypeScript", "TailwindCSS", "Redux"],
            3.0,
            "Delhi",
            "ananya.gupta@example.com",
        ),
    ]
}

fn extension_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\.[^/.]+$").expect("extension pattern is valid"))
}

/// File name without its final extension, trimmed
pub fn file_stem(file_name: &str) -> String {
    extension_pattern().replace(file_name, "").trim().to_string()
}

/// Roster entry whose name is closest to the file stem; the first entry when nothing is similar
pub fn closest_roster_entry<'a>(file_name: &str, roster: &'a [RosterEntry]) -> Result<&'a RosterEntry> {
    let stem = file_stem(file_name);
    let mut best = roster
        .first()
        .ok_or_else(|| HireFlowError::InvalidInput("Candidate roster is empty".to_string()))?;
    let mut best_score = 0.0;

    for entry in roster {
        let score = string_similarity(&stem, &entry.name);
        if score > best_score {
            best_score = score;
            best = entry;
        }
    }

    debug!("Resolved '{}' to {} (similarity {:.2})", stem, best.name, best_score);
    Ok(best)
}

pub fn extract_candidate(
    file_name: &str,
    file_url: &str,
    jobs: &[Job],
    roster: &[RosterEntry],
    weights: &MatchWeights,
) -> Result<Candidate> {
    let entry = closest_roster_entry(file_name, roster)?;

    let mut candidate = Candidate::new(new_candidate_id(), entry.name.clone())
        .with_skills(entry.skills.iter().cloned())
        .with_experience(entry.experience);
    candidate.email = entry.email.clone();
    candidate.resume_url = file_url.to_string();

    match best_job_for(&candidate, jobs) {
        Some(job) => {
            candidate.match_score = Some(match_score(&candidate, job, weights));
            candidate.role = job.title.clone();
        }
        None => candidate.role = "Unknown".to_string(),
    }

    info!(
        "Extracted {} from '{}' (role: {}, match: {:?})",
        candidate.name, file_name, candidate.role, candidate.match_score
    );
    Ok(candidate)
}

/// Candidate built straight from the file name, without consulting the roster
pub fn placeholder_candidate<R: Rng + ?Sized>(file_name: &str, file_url: &str, rng: &mut R) -> Candidate {
    let stem = file_stem(file_name);
    let mut candidate = Candidate::new(chrono::Utc::now().timestamp_millis().to_string(), stem.clone())
        .with_role("Unknown")
        .with_experience(rng.gen_range(1..=5) as f64)
        .with_skills(["Skill1", "Skill2"]);
    candidate.email = format!("{}@example.com", stem);
    candidate.resume_url = file_url.to_string();
    candidate
}

fn new_candidate_id() -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let nonce: f64 = rand::thread_rng().gen();
    format!("{}-{}", millis, nonce)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn jobs() -> Vec<Job> {
        vec![
            Job::new("j1", "Backend Engineer")
                .with_skills(["Python", "Django", "PostgreSQL"])
                .with_experience(4.0),
            Job::new("j2", "Frontend Developer")
                .with_skills(["React", "TypeScript"])
                .with_experience(3.0),
        ]
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem("Amit Patel.pdf"), "Amit Patel");
        assert_eq!(file_stem(" resume.final.docx"), "resume.final");
        assert_eq!(file_stem("noext"), "noext");
    }

    #[test]
    fn test_extract_matches_closest_name_and_job() {
        let candidate = extract_candidate(
            "amit_patel.pdf",
            "file:///tmp/amit_patel.pdf",
            &jobs(),
            &default_roster(),
            &MatchWeights::default(),
        )
        .unwrap();

        assert_eq!(candidate.name, "Amit Patel");
        assert_eq!(candidate.email, "amit.patel@example.com");
        assert_eq!(candidate.role, "Backend Engineer");
        // full skill overlap and enough experience
        assert_eq!(candidate.match_score, Some(100));
        assert_eq!(candidate.resume_url, "file:///tmp/amit_patel.pdf");
        assert!(candidate.id.contains('-'));
    }

    #[test]
    fn test_extract_without_matching_job() {
        let candidate = extract_candidate(
            "Rohit Verma.docx",
            "",
            &[Job::new("j3", "Designer").with_skills(["Figma"])],
            &default_roster(),
            &MatchWeights::default(),
        )
        .unwrap();

        assert_eq!(candidate.name, "Rohit Verma");
        assert_eq!(candidate.role, "Unknown");
        assert_eq!(candidate.match_score, None);
    }

    #[test]
    fn test_unrecognizable_name_falls_back_to_first_entry() {
        let roster = default_roster();
        let entry = closest_roster_entry("$$$$$$$$$$$$$$$$.pdf", &roster).unwrap();
        assert_eq!(entry.name, "Priya Sharma");
    }

    #[test]
    fn test_empty_roster_is_error() {
        let result = extract_candidate("x.pdf", "", &jobs(), &[], &MatchWeights::default());
        assert!(matches!(result, Err(HireFlowError::InvalidInput(_))));
    }

    #[test]
    fn test_placeholder_candidate() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidate = placeholder_candidate("jane_doe.pdf", "blob:1", &mut rng);

        assert_eq!(candidate.name, "jane_doe");
        assert_eq!(candidate.email, "jane_doe@example.com");
        assert_eq!(candidate.role, "Unknown");
        assert!((1.0..=5.0).contains(&candidate.experience));
        assert_eq!(candidate.skills, vec!["Skill1", "Skill2"]);
    }
}
