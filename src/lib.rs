//! HireFlow library: candidate/job matching, resume upload resolution and simulated interviews

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod input;
pub mod interview;
pub mod models;
pub mod output;
pub mod processing;

pub use config::Config;
pub use dashboard::Dashboard;
pub use error::{HireFlowError, Result};
