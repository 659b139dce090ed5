use serde::{Deserialize, Serialize};

/// Tunables for the dashboard. Everything has a default; the frontend
/// provides one instance to the component tree through context.
///
/// The field margin is not here: markers always rest inside
/// [`crate::field::FIELD_MIN_PERCENT`]..=[`crate::field::FIELD_MAX_PERCENT`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DashboardConfig {
    pub feedback: FeedbackConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedbackConfig {
    /// Milliseconds between simulated sensor readings.
    pub tick_interval_ms: u32,
    /// Probability (0-1) that a reading also raises an alert.
    pub alert_chance: f64,
    /// Newest alerts kept on screen.
    pub max_alerts: usize,
}

impl Default for FeedbackConfig {
    fn default() -> Self {
        FeedbackConfig {
            tick_interval_ms: 1000,
            alert_chance: 0.2,
            max_alerts: 5,
        }
    }
}
