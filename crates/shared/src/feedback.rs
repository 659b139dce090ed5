//! Simulated real-time technique feedback.
//!
//! While recording, every tick draws a fresh set of sensor-like readings and
//! occasionally raises an alert. Nothing here touches a clock; the caller
//! decides when a tick happens.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::FeedbackConfig;

/// Foot placement readings below this are flagged on the posture figure.
pub const FOOT_PLACEMENT_WARN: u32 = 70;
/// Wrist position readings below this are flagged on the posture figure.
pub const WRIST_POSITION_WARN: u32 = 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackSample {
    /// km/h
    pub bowling_speed: u32,
    pub foot_placement: u32,
    pub body_alignment: u32,
    pub wrist_position: u32,
}

impl FeedbackSample {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        FeedbackSample {
            bowling_speed: rng.gen_range(120..140),
            foot_placement: rng.gen_range(60..100),
            body_alignment: rng.gen_range(70..100),
            wrist_position: rng.gen_range(50..100),
        }
    }

    pub fn foot_needs_work(&self) -> bool {
        self.foot_placement < FOOT_PLACEMENT_WARN
    }

    pub fn wrist_needs_work(&self) -> bool {
        self.wrist_position < WRIST_POSITION_WARN
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Warning,
    Info,
    Success,
}

impl AlertKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            AlertKind::Warning => "alert-warning",
            AlertKind::Info => "alert-info",
            AlertKind::Success => "alert-success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u64,
    pub message: String,
    pub kind: AlertKind,
}

static ALERT_TEMPLATES: [(&str, AlertKind); 3] = [
    ("Foot placement needs adjustment", AlertKind::Warning),
    ("Great wrist position!", AlertKind::Success),
    ("Watch your follow-through", AlertKind::Info),
];

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedbackSession {
    recording: bool,
    elapsed_secs: u64,
    sample: FeedbackSample,
    /// Newest first.
    alerts: Vec<Alert>,
    next_alert_id: u64,
}

impl FeedbackSession {
    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn sample(&self) -> FeedbackSample {
        self.sample
    }

    pub fn alerts(&self) -> &[Alert] {
        &self.alerts
    }

    /// Start or stop recording. Starting clears the timer and alerts;
    /// stopping keeps the last readings on screen.
    ///
    /// Returns whether the session is now recording, so the caller can
    /// start a fresh ticker or cancel the running one.
    pub fn toggle_recording(&mut self) -> bool {
        if !self.recording {
            self.elapsed_secs = 0;
            self.alerts.clear();
        }
        self.recording = !self.recording;
        info!(recording = self.recording, "feedback recording toggled");
        self.recording
    }

    /// Text shown in place of the alert list while it is empty.
    pub fn alerts_placeholder(&self) -> Option<&'static str> {
        if !self.alerts.is_empty() {
            None
        } else if self.recording {
            Some("Monitoring your technique...")
        } else {
            Some("Start recording to see feedback")
        }
    }

    /// Advance the simulation by one second. Does nothing when stopped.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, config: &FeedbackConfig) {
        if !self.recording {
            return;
        }
        self.sample = FeedbackSample::random(rng);
        self.elapsed_secs += 1;

        if rng.gen_bool(config.alert_chance.clamp(0.0, 1.0)) {
            if let Some(&(message, kind)) = ALERT_TEMPLATES.choose(rng) {
                self.push_alert(message, kind, config.max_alerts);
            }
        }
    }

    fn push_alert(&mut self, message: &str, kind: AlertKind, max_alerts: usize) {
        self.next_alert_id += 1;
        self.alerts.insert(
            0,
            Alert {
                id: self.next_alert_id,
                message: message.to_string(),
                kind,
            },
        );
        self.alerts.truncate(max_alerts);
    }
}

/// `MM:SS` display of the recording timer.
pub fn format_elapsed(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}
