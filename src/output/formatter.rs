//! Output formatters for dashboard and interview reports

use crate::config::OutputFormat;
use crate::error::{HireFlowError, Result};
use crate::models::{Candidate, CheatingRisk, Job};
use crate::output::report::*;
use askama::Template;
use colored::{Color, Colorize};
use std::path::{Path, PathBuf};
use unicode_segmentation::UnicodeSegmentation;

/// Trait for formatting reports
pub trait OutputFormatter {
    fn format_dashboard(&self, report: &DashboardReport) -> Result<String>;
    fn format_interview(&self, report: &InterviewReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

const STYLES: &str = r#"
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #1f2937; max-width: 960px; margin: 0 auto; padding: 20px; background: #0f172a; }
        .container { background: white; padding: 30px; border-radius: 8px; }
        .metrics { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 15px; }
        .metric-card { background: #f8fafc; padding: 15px; border-radius: 6px; border-left: 4px solid #7c3aed; }
        table { width: 100%; border-collapse: collapse; margin: 15px 0; }
        th, td { text-align: left; padding: 8px; border-bottom: 1px solid #e5e7eb; }
        .risk-low { color: #38bdf8; }
        .risk-medium { color: #fbbf24; }
        .risk-high { color: #f87171; }
        .summary { background: #f8fafc; padding: 15px; border-radius: 6px; white-space: pre-line; }
        .metadata { font-size: 0.9em; color: #6b7280; margin-top: 30px; }
"#;

struct JobRow {
    title: String,
    location: String,
    skills: String,
    experience: String,
    avg_match: String,
    match_count: String,
}

struct CandidateRow {
    name: String,
    role: String,
    experience: String,
    skills: String,
    match_score: String,
    risk: String,
    risk_class: String,
}

struct QuestionRow {
    id: usize,
    question: String,
    voice: u32,
    posture: u32,
    overall: u32,
    keywords: String,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>HireFlow Dashboard</title>
    {% if include_styles %}<style>{{ styles|safe }}</style>{% endif %}
</head>
<body>
    <div class="container">
        <h1>HireFlow Dashboard</h1>
        <div class="metrics">
            <div class="metric-card"><h3>Total Candidates</h3><p>{{ total_candidates }}</p></div>
            <div class="metric-card"><h3>Average Match Score</h3><p>{{ avg_match_score }}%</p></div>
            {% if has_top_candidate %}
            <div class="metric-card"><h3>Top Candidate</h3><p>{{ top_candidate }}</p></div>
            {% endif %}
        </div>

        {% if !applied_jobs.is_empty() %}
        <h2>Applied for Positions</h2>
        <ul>
        {% for job in applied_jobs %}
            <li>{{ job.title }} ({{ job.location }}) - avg match {{ job.avg_match }}, {{ job.match_count }} matches</li>
        {% endfor %}
        </ul>
        {% endif %}

        <h2>Jobs</h2>
        <table>
            <tr><th>Title</th><th>Location</th><th>Skills</th><th>Experience</th><th>Avg Match</th><th>Matches</th></tr>
            {% for job in jobs %}
            <tr><td>{{ job.title }}</td><td>{{ job.location }}</td><td>{{ job.skills }}</td><td>{{ job.experience }}</td><td>{{ job.avg_match }}</td><td>{{ job.match_count }}</td></tr>
            {% endfor %}
        </table>

        <h2>Candidates</h2>
        <table>
            <tr><th>Name</th><th>Role</th><th>Experience</th><th>Skills</th><th>Match</th><th>Risk</th></tr>
            {% for c in candidates %}
            <tr><td>{{ c.name }}</td><td>{{ c.role }}</td><td>{{ c.experience }}</td><td>{{ c.skills }}</td><td>{{ c.match_score }}</td><td class="{{ c.risk_class }}">{{ c.risk }}</td></tr>
            {% endfor %}
        </table>

        <div class="metadata">Generated: {{ generated_at }} | Source: {{ data_source }} | HireFlow v{{ tool_version }}</div>
    </div>
</body>
</html>"#, ext = "html")]
struct DashboardHtml {
    include_styles: bool,
    styles: &'static str,
    total_candidates: usize,
    avg_match_score: u32,
    has_top_candidate: bool,
    top_candidate: String,
    applied_jobs: Vec<JobRow>,
    jobs: Vec<JobRow>,
    candidates: Vec<CandidateRow>,
    generated_at: String,
    data_source: String,
    tool_version: String,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>AI Interview - {{ name }}</title>
    {% if include_styles %}<style>{{ styles|safe }}</style>{% endif %}
</head>
<body>
    <div class="container">
        <h1>AI Interview - {{ name }}</h1>
        <div class="metrics">
            <div class="metric-card"><h3>Cheating Risk</h3><p class="{{ risk_class }}">{{ risk }}</p></div>
            <div class="metric-card"><h3>Posture Score</h3><p>{{ posture }}</p></div>
            <div class="metric-card"><h3>Voice Confidence</h3><p>{{ voice }}</p></div>
            <div class="metric-card"><h3>Overall Score</h3><p>{{ overall }}</p></div>
            <div class="metric-card"><h3>Interview Score</h3><p>{{ total_score }}%</p></div>
        </div>

        <h2>Questions</h2>
        <table>
            <tr><th>#</th><th>Question</th><th>Voice</th><th>Posture</th><th>Score</th><th>Keywords</th></tr>
            {% for q in questions %}
            <tr><td>{{ q.id }}</td><td>{{ q.question }}</td><td>{{ q.voice }}%</td><td>{{ q.posture }}%</td><td>{{ q.overall }}%</td><td>{{ q.keywords }}</td></tr>
            {% endfor %}
        </table>

        <h2>Summary</h2>
        <div class="summary">{{ summary }}</div>

        <div class="metadata">Generated: {{ generated_at }} | HireFlow v{{ tool_version }}</div>
    </div>
</body>
</html>"#, ext = "html")]
struct InterviewHtml {
    include_styles: bool,
    styles: &'static str,
    name: String,
    risk: String,
    risk_class: String,
    posture: String,
    voice: String,
    overall: String,
    total_score: u32,
    questions: Vec<QuestionRow>,
    summary: String,
    generated_at: String,
    tool_version: String,
}

fn optional_percent(value: Option<u32>) -> String {
    value.map(format_percent).unwrap_or_else(|| "--".to_string())
}

fn years(value: f64) -> String {
    format!("{} yrs", value)
}

fn risk_class(risk: Option<CheatingRisk>) -> String {
    let class = match risk {
        Some(CheatingRisk::Low) => "risk-low",
        Some(CheatingRisk::Medium) => "risk-medium",
        Some(CheatingRisk::High) => "risk-high",
        None => "",
    };
    class.to_string()
}

impl JobRow {
    fn from_job(job: &Job) -> Self {
        Self {
            title: job.title.clone(),
            location: job.location.clone(),
            skills: job.skills_required.join(", "),
            experience: years(job.experience_required),
            avg_match: optional_percent(job.avg_match_score),
            match_count: job
                .match_count
                .map(|c| c.to_string())
                .unwrap_or_else(|| "--".to_string()),
        }
    }
}

impl CandidateRow {
    fn from_candidate(candidate: &Candidate) -> Self {
        Self {
            name: candidate.name.clone(),
            role: candidate.role.clone(),
            experience: years(candidate.experience),
            skills: candidate.skills.join(", "),
            match_score: optional_percent(candidate.match_score),
            risk: candidate
                .cheating_risk
                .map(|r| r.to_string())
                .unwrap_or_else(|| "--".to_string()),
            risk_class: risk_class(candidate.cheating_risk),
        }
    }
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "▒",
        };

        let color = match level {
            1 => Color::Magenta,
            2 => Color::Blue,
            _ => Color::Cyan,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_score_badge(&self, score: u32) -> String {
        let (badge, color) = match score {
            90..=100 => ("EXCELLENT", Color::Green),
            75..=89 => ("STRONG", Color::BrightGreen),
            50..=74 => ("MATCH", Color::Yellow),
            _ => ("WEAK", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }

    fn format_risk(&self, risk: CheatingRisk) -> String {
        let color = match risk {
            CheatingRisk::Low => Color::BrightBlue,
            CheatingRisk::Medium => Color::Yellow,
            CheatingRisk::High => Color::Red,
        };
        let icon = if matches!(risk, CheatingRisk::High) { "⚠️ " } else { "✅ " };
        let text = risk.to_string();

        if self.use_colors {
            format!("{}{}", icon, text.color(color).bold())
        } else {
            format!("[{}]", text)
        }
    }

    fn format_candidate_line(&self, index: usize, candidate: &Candidate) -> String {
        let score = candidate
            .match_score
            .map(|s| format!("{}% {}", s, self.format_score_badge(s)))
            .unwrap_or_else(|| "--".to_string());
        let mut line = format!(
            "  {}. {} - {} ({}) | match: {}",
            index + 1,
            self.colorize(&candidate.name, Color::White),
            if candidate.role.is_empty() { "Unknown".to_string() } else { capitalize(&candidate.role) },
            years(candidate.experience),
            score
        );
        if let Some(risk) = candidate.cheating_risk {
            line.push_str(&format!(" | risk: {}", self.format_risk(risk)));
        }
        line.push('\n');

        if self.detailed {
            line.push_str(&format!("     skills: {}\n", candidate.skills.join(", ")));
            if candidate.has_interview() {
                line.push_str(&format!(
                    "     interview score: {}\n",
                    optional_percent(candidate.total_score)
                ));
            }
        }
        line
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_dashboard(&self, report: &DashboardReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("📊 HIREFLOW DASHBOARD", 1));
        output.push_str(&format!("Generated: {} | Source: {}\n", report.metadata.generated_at_display(), report.metadata.data_source));

        output.push_str(&self.format_header("Metrics", 2));
        output.push_str(&format!("👥 Total Candidates: {}\n", report.metrics.total_candidates));
        output.push_str(&format!("🎯 Average Match Score: {}\n", format_percent(report.metrics.avg_match_score)));
        if let Some(top) = &report.metrics.top_candidate {
            output.push_str(&format!(
                "🏆 Top Candidate: {} - {}% match ({}% of pool)\n",
                self.colorize(&top.name, Color::Green),
                top.match_score,
                top.pool_percentage
            ));
        }

        if !report.applied_jobs.is_empty() {
            output.push_str(&self.format_header("Applied for Positions", 2));
            for job in &report.applied_jobs {
                output.push_str(&format!(
                    "  • {} ({}) | avg match: {} | matches: {}\n",
                    job.title,
                    if job.location.is_empty() { "-" } else { job.location.as_str() },
                    optional_percent(job.avg_match_score),
                    job.match_count.map(|c| c.to_string()).unwrap_or_else(|| "--".to_string())
                ));
            }
        }

        if self.detailed {
            output.push_str(&self.format_header("All Jobs", 3));
            for job in &report.jobs {
                output.push_str(&format!(
                    "  • [{}] {} | needs {} | skills: {} | avg: {}\n",
                    job.id,
                    job.title,
                    years(job.experience_required),
                    job.skills_required.join(", "),
                    optional_percent(job.avg_match_score)
                ));
            }
        }

        output.push_str(&self.format_header("Candidates", 2));
        if report.candidates.is_empty() {
            output.push_str("  No candidates loaded\n");
        }
        for (i, candidate) in report.candidates.iter().enumerate() {
            output.push_str(&self.format_candidate_line(i, candidate));
        }

        Ok(output)
    }

    fn format_interview(&self, report: &InterviewReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header(&format!("🎤 AI Interview - {}", report.candidate.name), 1));
        output.push_str(&format!("Generated: {}\n", report.metadata.generated_at_display()));

        if self.detailed || !report.questions.is_empty() {
            output.push_str(&self.format_header("Questions", 2));
            for q in &report.questions {
                output.push_str(&format!(
                    "  Q{}. {}\n     voice: {}% | posture: {}% | score: {}%",
                    q.question_id, q.question_text, q.voice_confidence, q.posture_score, q.overall_score
                ));
                if !q.matched_keywords.is_empty() {
                    output.push_str(&format!(" | keywords: {}", q.matched_keywords.join(", ")));
                }
                output.push('\n');
                if self.detailed {
                    output.push_str(&format!("     {}\n", self.colorize(&truncate(&q.transcript, 120), Color::BrightBlack)));
                }
            }
        }

        output.push_str(&self.format_header("Report Card", 2));
        output.push_str(&format!("Cheating Risk: {}\n", self.format_risk(report.card.cheating_risk)));
        output.push_str(&format!("Posture Score: {}", optional_percent(report.card.posture_score)));
        if let Some(label) = report.posture_label {
            output.push_str(&format!(" ({:?})", label));
        }
        output.push('\n');
        output.push_str(&format!("Voice Confidence: {}\n", optional_percent(report.card.voice_confidence)));
        output.push_str(&format!("Overall Score: {}\n", optional_percent(report.card.overall_score)));
        output.push_str(&format!(
            "Interview Score: {}% {}\n",
            report.total_score,
            self.format_score_badge(report.total_score)
        ));
        output.push_str(&format!("Tone: {}\n", report.tone));

        output.push_str(&self.format_header("Summary", 3));
        output.push_str(&report.summary);
        output.push('\n');

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: serde::Serialize>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_dashboard(&self, report: &DashboardReport) -> Result<String> {
        self.to_json(report)
    }

    fn format_interview(&self, report: &InterviewReport) -> Result<String> {
        self.to_json(report)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn risk_badge(risk: Option<CheatingRisk>) -> &'static str {
        match risk {
            Some(CheatingRisk::Low) => "🟢 Low",
            Some(CheatingRisk::Medium) => "🟡 Medium",
            Some(CheatingRisk::High) => "🔴 High",
            None => "-",
        }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_dashboard(&self, report: &DashboardReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# 📊 HireFlow Dashboard\n\n");
        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Source:** `{}`\n\n",
                report.metadata.generated_at_display(),
                report.metadata.data_source
            ));
        }

        output.push_str("## Metrics\n\n");
        output.push_str(&format!("- **Total Candidates:** {}\n", report.metrics.total_candidates));
        output.push_str(&format!("- **Average Match Score:** {}%\n", report.metrics.avg_match_score));
        if let Some(top) = &report.metrics.top_candidate {
            output.push_str(&format!(
                "- **Top Candidate:** {} ({}% match)\n",
                top.name, top.match_score
            ));
        }
        output.push('\n');

        if !report.applied_jobs.is_empty() {
            output.push_str("## Applied for Positions\n\n");
            for job in &report.applied_jobs {
                output.push_str(&format!("- {} ({})\n", job.title, optional_percent(job.avg_match_score)));
            }
            output.push('\n');
        }

        output.push_str("## Jobs\n\n");
        output.push_str("| Title | Location | Skills | Experience | Avg Match | Matches |\n");
        output.push_str("|---|---|---|---|---|---|\n");
        for job in &report.jobs {
            let row = JobRow::from_job(job);
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                row.title, row.location, row.skills, row.experience, row.avg_match, row.match_count
            ));
        }
        output.push('\n');

        output.push_str("## Candidates\n\n");
        output.push_str("| # | Name | Role | Experience | Match | Risk |\n");
        output.push_str("|---|---|---|---|---|---|\n");
        for (i, candidate) in report.candidates.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                i + 1,
                candidate.name,
                candidate.role,
                years(candidate.experience),
                optional_percent(candidate.match_score),
                Self::risk_badge(candidate.cheating_risk)
            ));
        }

        Ok(output)
    }

    fn format_interview(&self, report: &InterviewReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# 🎤 AI Interview - {}\n\n", report.candidate.name));
        if self.include_metadata {
            output.push_str(&format!("**Generated:** {}\n\n", report.metadata.generated_at_display()));
        }

        output.push_str("## Report Card\n\n");
        output.push_str(&format!("- **Cheating Risk:** {}\n", Self::risk_badge(Some(report.card.cheating_risk))));
        output.push_str(&format!("- **Posture Score:** {}\n", optional_percent(report.card.posture_score)));
        output.push_str(&format!("- **Voice Confidence:** {}\n", optional_percent(report.card.voice_confidence)));
        output.push_str(&format!("- **Overall Score:** {}\n", optional_percent(report.card.overall_score)));
        output.push_str(&format!("- **Interview Score:** {}%\n", report.total_score));
        output.push_str(&format!("- **Tone:** {}\n\n", report.tone));

        output.push_str("## Questions\n\n");
        output.push_str("| # | Question | Voice | Posture | Score | Keywords |\n");
        output.push_str("|---|---|---|---|---|---|\n");
        for q in &report.questions {
            output.push_str(&format!(
                "| {} | {} | {}% | {}% | {}% | {} |\n",
                q.question_id,
                q.question_text,
                q.voice_confidence,
                q.posture_score,
                q.overall_score,
                q.matched_keywords.join(", ")
            ));
        }

        output.push_str("\n## Summary\n\n```\n");
        output.push_str(&report.summary);
        output.push_str("\n```\n");

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_dashboard(&self, report: &DashboardReport) -> Result<String> {
        let top = report.metrics.top_candidate.as_ref();
        let template = DashboardHtml {
            include_styles: self.include_styles,
            styles: STYLES,
            total_candidates: report.metrics.total_candidates,
            avg_match_score: report.metrics.avg_match_score,
            has_top_candidate: top.is_some(),
            top_candidate: top
                .map(|t| format!("{} ({}% match)", t.name, t.match_score))
                .unwrap_or_default(),
            applied_jobs: report.applied_jobs.iter().map(JobRow::from_job).collect(),
            jobs: report.jobs.iter().map(JobRow::from_job).collect(),
            candidates: report.candidates.iter().map(CandidateRow::from_candidate).collect(),
            generated_at: report.metadata.generated_at_display(),
            data_source: report.metadata.data_source.clone(),
            tool_version: report.metadata.tool_version.clone(),
        };

        template
            .render()
            .map_err(|e| HireFlowError::OutputFormatting(format!("HTML template error: {}", e)))
    }

    fn format_interview(&self, report: &InterviewReport) -> Result<String> {
        let template = InterviewHtml {
            include_styles: self.include_styles,
            styles: STYLES,
            name: report.candidate.name.clone(),
            risk: report.card.cheating_risk.to_string(),
            risk_class: risk_class(Some(report.card.cheating_risk)),
            posture: optional_percent(report.card.posture_score),
            voice: optional_percent(report.card.voice_confidence),
            overall: optional_percent(report.card.overall_score),
            total_score: report.total_score,
            questions: report
                .questions
                .iter()
                .map(|q| QuestionRow {
                    id: q.question_id,
                    question: q.question_text.clone(),
                    voice: q.voice_confidence,
                    posture: q.posture_score,
                    overall: q.overall_score,
                    keywords: q.matched_keywords.join(", "),
                })
                .collect(),
            summary: report.summary.clone(),
            generated_at: report.metadata.generated_at_display(),
            tool_version: report.metadata.tool_version.clone(),
        };

        template
            .render()
            .map_err(|e| HireFlowError::OutputFormatting(format!("HTML template error: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    fn formatter(&self, format: &OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        }
    }

    pub fn dashboard(&self, report: &DashboardReport, format: &OutputFormat) -> Result<String> {
        self.formatter(format).format_dashboard(report)
    }

    pub fn interview(&self, report: &InterviewReport, format: &OutputFormat) -> Result<String> {
        self.formatter(format).format_interview(report)
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Capitalizes the first letter of a string
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn format_percent(value: u32) -> String {
    format!("{}%", value)
}

/// Truncates text to `length` graphemes, marking the cut with an ellipsis
pub fn truncate(text: &str, length: usize) -> String {
    let graphemes: Vec<&str> = text.graphemes(true).collect();
    if graphemes.len() > length {
        format!("{}…", graphemes[..length].concat())
    } else {
        text.to_string()
    }
}

// Utility functions for saving reports
pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

/// Where `--save` writes: a directory gets a generated file name, anything else is used as given
pub fn resolve_save_path(path: PathBuf, format: &OutputFormat, subject: &str) -> PathBuf {
    if path.is_dir() {
        path.join(suggest_filename(format, subject, true))
    } else {
        path
    }
}

pub fn suggest_filename(format: &OutputFormat, subject: &str, timestamp: bool) -> String {
    let base_name: String = subject
        .chars()
        .map(|c| if c.is_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };

    format!("{}_report{}.{}", base_name, timestamp_suffix, extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interview::risk::ReportCard;
    use crate::interview::types::{InterviewQuestionResult, Tone};
    use crate::processing::ranking::dashboard_metrics;

    fn dashboard_report() -> DashboardReport {
        let mut flagged = Candidate::new("2", "Amit Patel").with_role("Backend Engineer").with_match_score(64);
        flagged.cheating_risk = Some(CheatingRisk::High);
        let candidates = vec![
            Candidate::new("1", "Priya Sharma").with_role("Frontend Developer").with_match_score(88),
            flagged,
        ];
        let mut job = Job::new("j1", "Frontend Developer").with_skills(["React"]).with_location("Remote");
        job.avg_match_score = Some(76);
        job.match_count = Some(2);

        DashboardReport {
            metadata: ReportMetadata::new("fixtures"),
            metrics: dashboard_metrics(&candidates),
            applied_jobs: vec![job.clone()],
            jobs: vec![job],
            candidates,
        }
    }

    fn interview_report() -> InterviewReport {
        InterviewReport {
            metadata: ReportMetadata::new("fixtures"),
            candidate: Candidate::new("1", "Priya Sharma"),
            questions: vec![InterviewQuestionResult {
                question_id: 1,
                question_text: "Tell me about yourself.".to_string(),
                transcript: "Priya Sharma says: hello".to_string(),
                matched_keywords: vec!["React".to_string()],
                voice_confidence: 82,
                posture_score: 78,
                overall_score: 65,
            }],
            card: ReportCard::compute(Some(78), Some(82), None),
            total_score: 65,
            tone: Tone::Professional,
            posture_label: None,
            summary: "AI Interview Summary for Priya Sharma".to_string(),
        }
    }

    #[test]
    fn test_console_dashboard_without_colors() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_dashboard(&dashboard_report()).unwrap();

        assert!(output.contains("Total Candidates: 2"));
        assert!(output.contains("Average Match Score: 76%"));
        assert!(output.contains("Top Candidate: Priya Sharma - 88% match"));
        assert!(output.contains("[High]"));
        assert!(output.contains("Applied for Positions"));
    }

    #[test]
    fn test_console_interview() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_interview(&interview_report()).unwrap();

        assert!(output.contains("Cheating Risk: [Low]"));
        assert!(output.contains("Overall Score: 86%"));
        assert!(output.contains("Q1. Tell me about yourself."));
    }

    #[test]
    fn test_json_dashboard_parses_back() {
        let output = JsonFormatter::new(false).format_dashboard(&dashboard_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["metrics"]["total_candidates"], 2);
        assert_eq!(value["candidates"][0]["matchScore"], 88);
    }

    #[test]
    fn test_markdown_interview() {
        let output = MarkdownFormatter::new(false).format_interview(&interview_report()).unwrap();
        assert!(output.starts_with("# 🎤 AI Interview - Priya Sharma"));
        assert!(output.contains("| 1 | Tell me about yourself. | 82% | 78% | 65% | React |"));
        assert!(!output.contains("**Generated:**"));
    }

    #[test]
    fn test_html_escapes_and_renders() {
        let mut report = dashboard_report();
        report.candidates[0].name = "<b>Priya</b>".to_string();
        let output = HtmlFormatter::new(false).format_dashboard(&report).unwrap();

        assert!(output.contains("HireFlow Dashboard"));
        assert!(!output.contains("<b>Priya"));
        assert!(output.contains("risk-high"));
        assert!(!output.contains("<style>"));
    }

    #[test]
    fn test_generator_dispatch() {
        let generator = ReportGenerator::with_options(false, false, true, true);
        let md = generator.interview(&interview_report(), &OutputFormat::Markdown).unwrap();
        assert!(md.contains("## Report Card"));
        let html = generator.interview(&interview_report(), &OutputFormat::Html).unwrap();
        assert!(html.contains("<style>"));
    }

    #[test]
    fn test_text_helpers() {
        assert_eq!(capitalize("hireflow"), "Hireflow");
        assert_eq!(capitalize(""), "");
        assert_eq!(format_percent(42), "42%");
        assert_eq!(truncate("abcdef", 3), "abc…");
        assert_eq!(truncate("abc", 3), "abc");
    }

    #[test]
    fn test_suggest_filename() {
        assert_eq!(
            suggest_filename(&OutputFormat::Json, "Priya Sharma", false),
            "priya_sharma_report.json"
        );
        assert!(suggest_filename(&OutputFormat::Html, "x", true).ends_with(".html"));
    }

    #[test]
    fn test_save_report_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("out.md");
        save_report_to_file("# report", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# report");
    }

    #[test]
    fn test_resolve_save_path() {
        let dir = tempfile::tempdir().unwrap();

        let inside = resolve_save_path(dir.path().to_path_buf(), &OutputFormat::Markdown, "Amit Patel");
        assert_eq!(inside.parent(), Some(dir.path()));
        let name = inside.file_name().and_then(|n| n.to_str()).unwrap();
        assert!(name.starts_with("amit_patel_report_"));
        assert!(name.ends_with(".md"));

        let explicit = dir.path().join("custom.html");
        assert_eq!(
            resolve_save_path(explicit.clone(), &OutputFormat::Markdown, "Amit Patel"),
            explicit
        );
    }
}
