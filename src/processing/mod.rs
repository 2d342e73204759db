//! Matching and scoring module

pub mod extraction;
pub mod matching;
pub mod ranking;
pub mod similarity;

pub use matching::{match_score, MatchWeights};
