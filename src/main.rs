//! HireFlow: recruiter dashboard with candidate matching and simulated AI interviews

use clap::Parser;
use colored::Colorize;
use hireflow::cli::{self, Cli, Commands, ConfigAction};
use hireflow::config::{Config, OutputFormat};
use hireflow::dashboard::Dashboard;
use hireflow::error::{HireFlowError, Result};
use hireflow::input::file_detector::resume_source;
use hireflow::interview::sensors::SensorFeed;
use hireflow::interview::simulator::generate_monitored_interview;
use hireflow::interview::{InterviewSession, LiveReadings, SessionProgress};
use hireflow::models::Candidate;
use hireflow::output::formatter::{resolve_save_path, save_report_to_file};
use hireflow::output::{DashboardReport, InterviewReport, ReportGenerator, ReportMetadata};
use hireflow::processing::extraction::{default_roster, placeholder_candidate};
use hireflow::processing::matching::{match_breakdown, MatchWeights};
use hireflow::processing::ranking::{rank_candidates, sort_by_match};
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::process;
use std::time::Duration;

#[tokio::main]
async fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load_from(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if !config.output.color_output {
        colored::control::set_override(false);
    }

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);

    if let Err(e) = run_command(cli.command, config, config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config, config_path: PathBuf) -> Result<()> {
    match command {
        Commands::Dashboard {
            upload,
            detailed,
            output,
            save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let mut dashboard = Dashboard::load(&config).await;

            let roster = default_roster();
            for path in &upload {
                let (file_name, url) = resume_source(path)?;
                let added = dashboard.upload_resume(&file_name, &url, &roster)?;
                info!("Uploaded {} as {}", file_name, added.name);
            }

            let report = DashboardReport {
                metadata: ReportMetadata::new(config.data.candidates_path.display().to_string()),
                metrics: dashboard.metrics(),
                applied_jobs: dashboard.applied_jobs().into_iter().cloned().collect(),
                jobs: dashboard.jobs().to_vec(),
                candidates: sort_by_match(dashboard.candidates()).into_iter().cloned().collect(),
            };

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                detailed || config.output.detailed,
                true,
                true,
            );
            let content = generator.dashboard(&report, &format)?;
            emit(&content, save, &format, "dashboard")?;
        }

        Commands::Jobs => {
            let dashboard = Dashboard::load(&config).await;
            if dashboard.jobs().is_empty() {
                println!("No job postings found in {}", config.data.jobs_path.display());
                return Ok(());
            }

            println!("{}", "💼 Job Postings".bold());
            for job in dashboard.jobs() {
                let avg = job
                    .avg_match_score
                    .map(|s| format!("{}%", s))
                    .unwrap_or_else(|| "--".to_string());
                let count = job
                    .match_count
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "--".to_string());
                println!(
                    "  [{}] {} ({}) | {} yrs | avg match: {} | matches: {}",
                    job.id,
                    job.title.bold(),
                    if job.location.is_empty() { "-" } else { job.location.as_str() },
                    job.experience_required,
                    avg.cyan(),
                    count
                );
                println!("      skills: {}", job.skills_required.join(", "));
            }
        }

        Commands::Match { candidate, job } => {
            let dashboard = Dashboard::load(&config).await;
            let candidate = dashboard
                .find_candidate(&candidate)
                .ok_or_else(|| HireFlowError::NotFound(format!("Candidate '{}'", candidate)))?;

            let jobs = match job {
                Some(id) => vec![dashboard
                    .find_job(&id)
                    .ok_or_else(|| HireFlowError::NotFound(format!("Job '{}'", id)))?],
                None => dashboard.jobs().iter().collect(),
            };

            let weights = MatchWeights::from(&config.scoring);
            println!(
                "🎯 Match breakdown for {} ({} yrs, skills: {})",
                candidate.name.bold(),
                candidate.experience,
                candidate.skills.join(", ")
            );
            for job in jobs {
                let breakdown = match_breakdown(candidate, job, &weights);
                let score = format!("{}%", breakdown.score);
                let score = if breakdown.score >= config.scoring.match_threshold {
                    score.green()
                } else {
                    score.red()
                };
                println!("\n  {} [{}]: {}", breakdown.job_title.bold(), breakdown.job_id, score);
                println!(
                    "    skills: {:.0}% | experience: {:.0}%",
                    breakdown.skill_match * 100.0,
                    breakdown.experience_match * 100.0
                );
                if !breakdown.matched_skills.is_empty() {
                    println!("    ✅ matched: {}", breakdown.matched_skills.join(", "));
                }
                if !breakdown.missing_skills.is_empty() {
                    println!("    ❌ missing: {}", breakdown.missing_skills.join(", "));
                }
            }
        }

        Commands::Rank { top } => {
            let dashboard = Dashboard::load(&config).await;
            let top = top.unwrap_or(config.scoring.top_n);

            println!("🏆 Top {} candidates by match score", top);
            for (i, candidate) in rank_candidates(dashboard.candidates(), top).iter().enumerate() {
                println!(
                    "  {}. {} - {} | {}",
                    i + 1,
                    candidate.name.bold(),
                    if candidate.role.is_empty() { "Unknown" } else { candidate.role.as_str() },
                    candidate
                        .match_score
                        .map(|s| format!("{}%", s))
                        .unwrap_or_else(|| "--".to_string())
                );
            }
        }

        Commands::Upload { files, quick } => {
            let mut dashboard = Dashboard::load(&config).await;
            let roster = default_roster();
            let mut rng = StdRng::from_entropy();

            for path in &files {
                let (file_name, url) = resume_source(path)?;
                let added = if quick {
                    dashboard.add_candidate(placeholder_candidate(&file_name, &url, &mut rng))
                } else {
                    dashboard.upload_resume(&file_name, &url, &roster)?
                };
                print_uploaded(&file_name, added);
            }

            println!(
                "\n📊 {} candidates on the dashboard ({} added in this run)",
                dashboard.metrics().total_candidates,
                dashboard.local_additions().len()
            );
        }

        Commands::Interview {
            candidate,
            session,
            seed,
            output,
            save,
        } => {
            let format = resolve_format(output.as_deref(), &config)?;
            let mut dashboard = Dashboard::load(&config).await;
            let selected = dashboard
                .select_candidate(&candidate)
                .cloned()
                .ok_or_else(|| HireFlowError::NotFound(format!("Candidate '{}'", candidate)))?;

            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let metadata = ReportMetadata::new(config.data.candidates_path.display().to_string());

            println!("🎤 Starting AI interview for {}", selected.name.bold());
            let report = if session {
                run_session(selected, &config, &mut rng, metadata).await?
            } else {
                let interval = Duration::from_millis(config.interview.sensor_interval_ms);
                let mut feed = SensorFeed::spawn_with_rng(interval, StdRng::seed_from_u64(rng.gen()));
                let result =
                    generate_monitored_interview(&selected, &config.interview.questions, &mut feed, &mut rng).await;
                feed.stop();
                InterviewReport::from_result(metadata, &selected, result)
            };

            dashboard.complete_interview(report.candidate.clone());

            let generator = ReportGenerator::with_options(
                config.output.color_output,
                config.output.detailed,
                true,
                true,
            );
            let content = generator.interview(&report, &format)?;
            emit(&content, save, &format, &report.candidate.name)?;
        }

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration ({})\n", config_path.display());
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| HireFlowError::Configuration(e.to_string()))?;
                println!("{}", content);
            }

            Some(ConfigAction::Path) => {
                println!("{}", config_path.display());
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                Config::default().save_to(&config_path)?;
                println!("✅ Configuration reset successfully!");
            }

            Some(ConfigAction::Set { key, value }) => {
                config.set_value(&key, &value)?;
                config.save_to(&config_path)?;
                println!("✅ {} = {}", key, value);
            }
        },
    }

    Ok(())
}

/// Step through the questions, scoring each answer from the latest sensor readings
async fn run_session(
    candidate: Candidate,
    config: &Config,
    rng: &mut StdRng,
    metadata: ReportMetadata,
) -> Result<InterviewReport> {
    let mut session = InterviewSession::new(candidate, config.interview.questions.clone());
    session.start()?;

    let interval = Duration::from_millis(config.interview.sensor_interval_ms);
    let mut feed = SensorFeed::spawn_with_rng(interval, StdRng::seed_from_u64(rng.gen()));

    let progress = ProgressBar::new(session.question_count() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .map_err(|e| HireFlowError::OutputFormatting(e.to_string()))?
            .progress_chars("=>-"),
    );

    loop {
        let question = session.current_question().unwrap_or_default().to_string();
        progress.set_message(question);

        let live = if feed.changed().await {
            feed.live_readings()
        } else {
            warn!("Sensor feed stopped; using fallback readings");
            LiveReadings::default()
        };

        progress.inc(1);
        if let SessionProgress::Completed(outcome) = session.answer(live, rng)? {
            progress.finish_with_message("Interview complete");
            feed.stop();
            return Ok(InterviewReport::from_session(metadata, *outcome, session.responses()));
        }
    }
}

fn resolve_format(flag: Option<&str>, config: &Config) -> Result<OutputFormat> {
    match flag {
        Some(value) => cli::parse_output_format(value).map_err(HireFlowError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn print_uploaded(file_name: &str, candidate: &Candidate) {
    println!(
        "📄 {} → {} [{}] {} ({})",
        file_name,
        candidate.name.bold(),
        candidate.id,
        candidate.role,
        candidate
            .match_score
            .map(|s| format!("{}% match", s))
            .unwrap_or_else(|| "no match score".to_string())
    );
}

/// Print the content, or write it to `save` (a directory gets a generated file name)
fn emit(content: &str, save: Option<PathBuf>, format: &OutputFormat, subject: &str) -> Result<()> {
    match save {
        Some(path) => {
            let path = resolve_save_path(path, format, subject);
            save_report_to_file(content, &path)?;
            println!("💾 Report saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}
