//! Simulated AI interview: sensors, scoring and risk classification

pub mod risk;
pub mod sensors;
pub mod session;
pub mod simulator;
pub mod types;

pub use risk::ReportCard;
pub use session::{InterviewSession, LiveReadings, SessionProgress};
pub use types::{InterviewQuestionResult, InterviewResult, Tone};
