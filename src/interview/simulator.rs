//! One-shot interview generator
//!
//! Produces a complete result for every question at once from random draws. The
//! step-by-step flow lives in [`crate::interview::session`].

use crate::interview::risk::classify_summary_risk;
use crate::interview::sensors::SensorFeed;
use crate::interview::types::{rounded_mean, InterviewQuestionResult, InterviewResult, PostureLabel, Tone};
use crate::models::Candidate;
use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

/// Random sample of `count` items, without touching the source slice
pub fn pick_random<T: Clone, R: Rng + ?Sized>(items: &[T], count: usize, rng: &mut R) -> Vec<T> {
    items.choose_multiple(rng, count).cloned().collect()
}

pub fn generate_interview<R: Rng + ?Sized>(
    candidate: &Candidate,
    questions: &[String],
    rng: &mut R,
) -> InterviewResult {
    let question_results: Vec<InterviewQuestionResult> = questions
        .iter()
        .enumerate()
        .map(|(index, question)| {
            let voice_confidence: u32 = rng.gen_range(70..=100);
            let posture_score: u32 = rng.gen_range(65..=95);
            let keyword_count: usize = rng.gen_range(1..=3);
            let matched_keywords = pick_random(&candidate.skills, keyword_count, rng);
            let transcript = format!(
                "Mock response by {} about \"{}\".",
                candidate.name,
                matched_keywords.join(", ")
            );

            let overall_score = (voice_confidence as f64 * 0.4
                + posture_score as f64 * 0.3
                + matched_keywords.len() as f64 * 10.0)
                .round() as u32;

            InterviewQuestionResult {
                question_id: index + 1,
                question_text: question.clone(),
                transcript,
                matched_keywords,
                voice_confidence,
                posture_score,
                overall_score,
            }
        })
        .collect();

    let count = question_results.len();
    let avg_voice = rounded_mean(question_results.iter().map(|q| q.voice_confidence), count);
    let avg_posture = rounded_mean(question_results.iter().map(|q| q.posture_score), count);
    let avg_overall = rounded_mean(question_results.iter().map(|q| q.overall_score), count);

    let cheating_risk = classify_summary_risk(avg_voice, avg_posture);
    let tone = Tone::random(rng);

    let top_skills: Vec<&str> = candidate.skills.iter().take(3).map(String::as_str).collect();
    let summary = format!(
        "AI Interview Summary for {name}:\n\
         - Avg Voice Confidence: {avg_voice}%\n\
         - Avg Posture Score: {avg_posture}%\n\
         - Keywords matched: {skills}\n\
         - Tone detected: {tone}\n\
         - Cheating Risk: {cheating_risk}\n\
         Overall, {name} shows alignment with the {role} role, scoring {avg_overall}% on average.",
        name = candidate.name,
        skills = top_skills.join(", "),
        role = candidate.role,
    );

    debug!(
        "Generated interview for {}: total {}, risk {}",
        candidate.name, avg_overall, cheating_risk
    );

    InterviewResult {
        candidate_id: candidate.id.clone(),
        job_role: Some(candidate.role.clone()),
        total_score: avg_overall,
        cheating_risk,
        summary,
        questions: question_results,
        tone,
        voice_confidence: avg_voice,
        posture_score: avg_posture,
        posture: Some(PostureLabel::from_score(avg_posture)),
    }
}

/// One-shot interview whose voice and posture averages are replaced by the feed's next
/// reading. The risk stays as generated. If the feed has stopped, the result is left alone.
pub async fn generate_monitored_interview<R: Rng + ?Sized>(
    candidate: &Candidate,
    questions: &[String],
    feed: &mut SensorFeed,
    rng: &mut R,
) -> InterviewResult {
    let result = generate_interview(candidate, questions, rng);
    if !feed.changed().await {
        debug!("Sensor feed stopped before a reading arrived; keeping generated averages");
        return result;
    }
    let live = feed.live_readings();
    result.with_live_readings(live.voice_confidence, live.posture_score)
}

/// Templated answer text for a question
pub fn generate_candidate_answer<R: Rng + ?Sized>(candidate_name: &str, question: &str, rng: &mut R) -> String {
    let topic = question.to_lowercase();
    let responses = [
        format!("I have worked extensively on {} in my previous projects.", topic),
        format!(
            "During my experience, I faced challenges related to {} and overcame them.",
            topic
        ),
        format!(
            "I am confident in my skills related to {} and have successfully implemented them.",
            topic
        ),
    ];
    let index = rng.gen_range(0..responses.len());
    format!("{} says: {}", candidate_name, responses[index])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_QUESTIONS;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    fn questions() -> Vec<String> {
        DEFAULT_QUESTIONS.iter().map(|q| q.to_string()).collect()
    }

    fn candidate() -> Candidate {
        Candidate::new("c1", "Sneha Reddy")
            .with_role("Frontend Developer")
            .with_skills(["React", "Next.js", "GraphQL", "Sass"])
    }

    #[test]
    fn test_generated_values_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = generate_interview(&candidate(), &questions(), &mut rng);

        assert_eq!(result.questions.len(), 5);
        for (i, q) in result.questions.iter().enumerate() {
            assert_eq!(q.question_id, i + 1);
            assert!((70..=100).contains(&q.voice_confidence));
            assert!((65..=95).contains(&q.posture_score));
            assert!((1..=3).contains(&q.matched_keywords.len()));
            assert!(q.transcript.starts_with("Mock response by Sneha Reddy"));
        }
        assert!((70..=100).contains(&result.voice_confidence));
        assert_eq!(result.job_role.as_deref(), Some("Frontend Developer"));
    }

    #[test]
    fn test_aggregates_are_consistent() {
        let mut rng = StdRng::seed_from_u64(21);
        let result = generate_interview(&candidate(), &questions(), &mut rng);

        let sum: u32 = result.questions.iter().map(|q| q.overall_score).sum();
        assert_eq!(result.total_score, (sum as f64 / 5.0).round() as u32);
        assert_eq!(
            result.cheating_risk,
            classify_summary_risk(result.voice_confidence, result.posture_score)
        );
        assert_eq!(result.posture, Some(PostureLabel::from_score(result.posture_score)));
        assert!(result.summary.contains("Keywords matched: React, Next.js, GraphQL"));
        assert!(result.summary.contains("Frontend Developer role"));
    }

    #[test]
    fn test_same_seed_same_result() {
        let a = generate_interview(&candidate(), &questions(), &mut StdRng::seed_from_u64(4));
        let b = generate_interview(&candidate(), &questions(), &mut StdRng::seed_from_u64(4));
        assert_eq!(a, b);
    }

    #[test]
    fn test_candidate_without_skills() {
        let mut rng = StdRng::seed_from_u64(2);
        let bare = Candidate::new("c2", "Nobody");
        let result = generate_interview(&bare, &questions(), &mut rng);
        assert!(result.questions.iter().all(|q| q.matched_keywords.is_empty()));
        assert!(result.questions[0].transcript.ends_with("about \"\"."));
        assert!(result.summary.contains("Keywords matched: \n"));
    }

    #[test]
    fn test_live_readings_override_averages() {
        let mut rng = StdRng::seed_from_u64(8);
        let result = generate_interview(&candidate(), &questions(), &mut rng)
            .with_live_readings(Some(61), None);
        assert_eq!(result.voice_confidence, 61);
    }

    #[tokio::test]
    async fn test_monitored_interview_takes_sensor_readings() {
        let mut feed = SensorFeed::spawn_with_rng(Duration::from_millis(10), StdRng::seed_from_u64(6));
        let mut rng = StdRng::seed_from_u64(8);
        let result = generate_monitored_interview(&candidate(), &questions(), &mut feed, &mut rng).await;

        let unmonitored = generate_interview(&candidate(), &questions(), &mut StdRng::seed_from_u64(8));
        assert_eq!(result.voice_confidence, feed.voice().confidence);
        assert_eq!(result.posture_score, feed.posture().score);
        assert!([90, 75, 60, 45].contains(&result.posture_score));
        assert_eq!(result.cheating_risk, unmonitored.cheating_risk);
        assert_eq!(result.questions, unmonitored.questions);
    }

    #[tokio::test]
    async fn test_stopped_feed_keeps_generated_averages() {
        let mut feed = SensorFeed::spawn_with_rng(Duration::from_millis(10), StdRng::seed_from_u64(6));
        feed.stop();

        let result =
            generate_monitored_interview(&candidate(), &questions(), &mut feed, &mut StdRng::seed_from_u64(8)).await;
        let unmonitored = generate_interview(&candidate(), &questions(), &mut StdRng::seed_from_u64(8));
        assert_eq!(result, unmonitored);
    }

    #[test]
    fn test_candidate_answer() {
        let mut rng = StdRng::seed_from_u64(1);
        let answer = generate_candidate_answer("Amit", "Tell me about yourself.", &mut rng);
        assert!(answer.starts_with("Amit says: "));
        assert!(answer.contains("tell me about yourself."));
    }
}
