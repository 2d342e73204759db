//! CLI interface for HireFlow

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hireflow")]
#[command(about = "Recruiter dashboard: candidate matching and simulated AI interviews")]
#[command(long_about = "Match candidates to job postings by skill overlap and experience, map uploaded resumes onto candidate records, and run simulated AI interviews with cheating-risk scoring")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the dashboard: metrics, applied positions and candidates
    Dashboard {
        /// Resume files to upload before rendering (PDF, DOC, DOCX)
        #[arg(short, long)]
        upload: Vec<PathBuf>,

        /// Include job breakdown and interview summaries
        #[arg(short, long)]
        detailed: bool,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// List job postings with computed match metrics
    Jobs,

    /// Show the match breakdown for a candidate
    Match {
        /// Candidate id
        #[arg(short, long)]
        candidate: String,

        /// Job id (all jobs when omitted)
        #[arg(short, long)]
        job: Option<String>,
    },

    /// Rank candidates by match score
    Rank {
        /// Number of candidates to show
        #[arg(short, long)]
        top: Option<usize>,
    },

    /// Map uploaded resume files onto candidate records
    Upload {
        /// Resume files (PDF, DOC, DOCX)
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Create placeholder candidates instead of matching the roster
        #[arg(short, long)]
        quick: bool,
    },

    /// Run a simulated AI interview for a candidate
    Interview {
        /// Candidate id
        #[arg(short, long)]
        candidate: String,

        /// Step through questions with live sensor readings
        #[arg(long)]
        session: bool,

        /// Seed for reproducible results
        #[arg(long)]
        seed: Option<u64>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "scoring.match_threshold")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(parse_output_format("md").unwrap(), OutputFormat::Markdown);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_validate_file_extension() {
        let allowed = ["pdf", "doc", "docx"];
        assert!(validate_file_extension(Path::new("cv.PDF"), &allowed).is_ok());
        assert!(validate_file_extension(Path::new("cv.txt"), &allowed).is_err());
        assert!(validate_file_extension(Path::new("cv"), &allowed).is_err());
    }

    #[test]
    fn test_cli_parses_interview() {
        let cli = Cli::try_parse_from([
            "hireflow", "interview", "--candidate", "3", "--seed", "42", "--session",
        ])
        .unwrap();
        match cli.command {
            Commands::Interview { candidate, seed, session, .. } => {
                assert_eq!(candidate, "3");
                assert_eq!(seed, Some(42));
                assert!(session);
            }
            _ => panic!("expected interview command"),
        }
    }
}
