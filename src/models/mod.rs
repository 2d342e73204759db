//! Core records shared across the dashboard: candidates and job postings

pub mod candidate;
pub mod job;
pub(crate) mod lenient;

pub use candidate::{Candidate, CheatingRisk};
pub use job::Job;
