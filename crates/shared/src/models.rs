use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerRole {
    Batsman,
    Bowler,
    #[serde(rename = "All-rounder")]
    AllRounder,
}

impl PlayerRole {
    pub const ALL: [PlayerRole; 3] = [PlayerRole::Batsman, PlayerRole::Bowler, PlayerRole::AllRounder];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerRole::Batsman => "Batsman",
            PlayerRole::Bowler => "Bowler",
            PlayerRole::AllRounder => "All-rounder",
        }
    }
}

impl std::fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlayerRole {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Batsman" => Ok(PlayerRole::Batsman),
            "Bowler" => Ok(PlayerRole::Bowler),
            "All-rounder" => Ok(PlayerRole::AllRounder),
            other => Err(Error::invalid("player role", other)),
        }
    }
}

/// One point of a month-by-month score series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformancePoint {
    pub date: String,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub batting_accuracy: f64,
    pub bowling_speed: f64,
    pub fielding_efficiency: f64,
    pub recent_performance: Vec<PerformancePoint>,
}

impl Default for PlayerStats {
    fn default() -> Self {
        PlayerStats {
            batting_accuracy: 0.0,
            bowling_speed: 0.0,
            fielding_efficiency: 0.0,
            recent_performance: ["Jan", "Feb", "Mar", "Apr"]
                .iter()
                .map(|m| PerformancePoint {
                    date: m.to_string(),
                    score: 0.0,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub role: PlayerRole,
    pub stats: PlayerStats,
    pub rank: u32,
}

impl PlayerProfile {
    /// Two-letter initials shown when no avatar image is available.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn badge_class(&self) -> &'static str {
        match self {
            Priority::High => "badge-high",
            Priority::Medium => "badge-medium",
            Priority::Low => "badge-low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub tutorial_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub target: String,
    /// Percent complete, 0-100.
    pub progress: f64,
    pub deadline: String,
}

/// A labelled 0-100 value, used by the radar chart and progress bars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillScore {
    pub subject: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StrengthsAndWeaknesses {
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parse_roundtrips_display() {
        for role in PlayerRole::ALL {
            assert_eq!(role.to_string().parse::<PlayerRole>().unwrap(), role);
        }
    }

    #[test]
    fn test_role_parse_unknown() {
        let err = "Umpire".parse::<PlayerRole>().unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_role_serializes_with_hyphen() {
        let json = serde_json::to_string(&PlayerRole::AllRounder).unwrap();
        assert_eq!(json, r#""All-rounder""#);
    }

    #[test]
    fn test_default_stats_have_four_empty_months() {
        let stats = PlayerStats::default();
        assert_eq!(stats.recent_performance.len(), 4);
        assert!(stats.recent_performance.iter().all(|p| p.score == 0.0));
        assert_eq!(stats.batting_accuracy, 0.0);
    }

    #[test]
    fn test_initials() {
        let p = PlayerProfile {
            id: "1".to_string(),
            name: "Ravindra Jadeja".to_string(),
            avatar: String::new(),
            role: PlayerRole::AllRounder,
            stats: PlayerStats::default(),
            rank: 2,
        };
        assert_eq!(p.initials(), "RJ");
    }

    #[test]
    fn test_recommendation_deserializes_camel_case() {
        let json = r##"{"id":"1","title":"Footwork drills","description":"d","priority":"low","tutorialUrl":"#"}"##;
        let rec: Recommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.priority, Priority::Low);
        assert_eq!(rec.tutorial_url.as_deref(), Some("#"));
    }
}
