//! Simulated posture and voice sensors
//!
//! Readings are random draws, refreshed on a timer by [`SensorFeed`] and published through
//! watch channels so consumers always see the latest value.

use crate::interview::session::LiveReadings;
use crate::interview::types::Tone;
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostureStability {
    Excellent,
    Good,
    Average,
    Poor,
}

impl PostureStability {
    pub const ALL: [PostureStability; 4] = [
        PostureStability::Excellent,
        PostureStability::Good,
        PostureStability::Average,
        PostureStability::Poor,
    ];

    pub fn score(&self) -> u32 {
        match self {
            PostureStability::Excellent => 90,
            PostureStability::Good => 75,
            PostureStability::Average => 60,
            PostureStability::Poor => 45,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostureReading {
    pub score: u32,
    pub stability: PostureStability,
    pub movement_detected: bool,
}

impl Default for PostureReading {
    fn default() -> Self {
        Self {
            score: 75,
            stability: PostureStability::Good,
            movement_detected: false,
        }
    }
}

impl PostureReading {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let stability = PostureStability::ALL[rng.gen_range(0..PostureStability::ALL.len())];
        Self {
            score: stability.score(),
            stability,
            // rare movement flag
            movement_detected: rng.gen::<f64>() > 0.9,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceReading {
    pub confidence: u32,
    pub tone: Tone,
}

impl Default for VoiceReading {
    fn default() -> Self {
        Self {
            confidence: 75,
            tone: Tone::Neutral,
        }
    }
}

impl VoiceReading {
    pub fn sample<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            confidence: rng.gen_range(60..=100),
            tone: Tone::random(rng),
        }
    }
}

/// Background task that re-randomizes both sensors on a fixed interval.
/// Dropping the feed stops the timer.
pub struct SensorFeed {
    posture_rx: watch::Receiver<PostureReading>,
    voice_rx: watch::Receiver<VoiceReading>,
    task: JoinHandle<()>,
}

impl SensorFeed {
    /// Must be called from within a tokio runtime
    pub fn spawn(interval: Duration) -> Self {
        Self::spawn_with_rng(interval, StdRng::from_entropy())
    }

    pub fn spawn_with_rng(interval: Duration, mut rng: StdRng) -> Self {
        let (posture_tx, posture_rx) = watch::channel(PostureReading::default());
        let (voice_tx, voice_rx) = watch::channel(VoiceReading::default());

        let task = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // the first tick completes immediately; keep the initial readings for one period
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let posture = PostureReading::sample(&mut rng);
                let voice = VoiceReading::sample(&mut rng);
                debug!(
                    "Sensor update: posture {} ({:?}), voice {} ({})",
                    posture.score, posture.stability, voice.confidence, voice.tone
                );
                if posture_tx.send(posture).is_err() || voice_tx.send(voice).is_err() {
                    break;
                }
            }
        });

        Self {
            posture_rx,
            voice_rx,
            task,
        }
    }

    pub fn posture(&self) -> PostureReading {
        *self.posture_rx.borrow()
    }

    pub fn voice(&self) -> VoiceReading {
        *self.voice_rx.borrow()
    }

    /// Both sensors as readings for the answer being scored
    pub fn live_readings(&self) -> LiveReadings {
        let voice = self.voice();
        LiveReadings {
            voice_confidence: Some(voice.confidence),
            posture_score: Some(self.posture().score),
            tone: Some(voice.tone),
        }
    }

    /// Independent handle on the voice channel; it sees the channel close when the feed goes away
    pub fn voice_updates(&self) -> watch::Receiver<VoiceReading> {
        self.voice_rx.clone()
    }

    /// Wait for the next voice update; false once the feed has stopped
    pub async fn changed(&mut self) -> bool {
        self.voice_rx.changed().await.is_ok()
    }

    pub fn stop(&self) {
        self.task.abort();
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }
}

impl Drop for SensorFeed {
    fn drop(&mut self) {
        self.task.abort();
    }
}
