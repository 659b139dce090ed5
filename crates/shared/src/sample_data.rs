//! Hard-coded data shown throughout the dashboard.

use crate::models::{
    Goal, PerformancePoint, PlayerProfile, PlayerRole, PlayerStats, Priority, Recommendation,
    SkillScore, StrengthsAndWeaknesses,
};

fn series(points: &[(&str, f64)]) -> Vec<PerformancePoint> {
    points
        .iter()
        .map(|&(date, score)| PerformancePoint {
            date: date.to_string(),
            score,
        })
        .collect()
}

fn avatar(hex: &str, initials: &str) -> String {
    format!("https://placehold.co/200x200/{hex}/FFFFFF/png?text={initials}")
}

pub fn player_stats() -> PlayerStats {
    PlayerStats {
        batting_accuracy: 78.0,
        bowling_speed: 135.0,
        fielding_efficiency: 82.0,
        recent_performance: series(&[
            ("Jan", 45.0),
            ("Feb", 52.0),
            ("Mar", 38.0),
            ("Apr", 65.0),
            ("May", 72.0),
        ]),
    }
}

/// The signed-in player.
pub fn profile() -> PlayerProfile {
    PlayerProfile {
        id: "1".to_string(),
        name: "Virat Kohli".to_string(),
        avatar: avatar("3B82F6", "VK"),
        role: PlayerRole::Batsman,
        stats: player_stats(),
        rank: 3,
    }
}

pub fn players() -> Vec<PlayerProfile> {
    vec![
        profile(),
        PlayerProfile {
            id: "2".to_string(),
            name: "Jasprit Bumrah".to_string(),
            avatar: avatar("10B981", "JB"),
            role: PlayerRole::Bowler,
            stats: PlayerStats {
                batting_accuracy: 35.0,
                bowling_speed: 145.0,
                fielding_efficiency: 75.0,
                recent_performance: series(&[
                    ("Jan", 2.0),
                    ("Feb", 5.0),
                    ("Mar", 0.0),
                    ("Apr", 8.0),
                    ("May", 12.0),
                ]),
            },
            rank: 1,
        },
        PlayerProfile {
            id: "3".to_string(),
            name: "Ravindra Jadeja".to_string(),
            avatar: avatar("EC4899", "RJ"),
            role: PlayerRole::AllRounder,
            stats: PlayerStats {
                batting_accuracy: 65.0,
                bowling_speed: 125.0,
                fielding_efficiency: 95.0,
                recent_performance: series(&[
                    ("Jan", 35.0),
                    ("Feb", 42.0),
                    ("Mar", 28.0),
                    ("Apr", 55.0),
                    ("May", 48.0),
                ]),
            },
            rank: 2,
        },
        PlayerProfile {
            id: "4".to_string(),
            name: "Rohit Sharma".to_string(),
            avatar: avatar("8B5CF6", "RS"),
            role: PlayerRole::Batsman,
            stats: PlayerStats {
                batting_accuracy: 82.0,
                bowling_speed: 110.0,
                fielding_efficiency: 78.0,
                recent_performance: series(&[
                    ("Jan", 55.0),
                    ("Feb", 72.0),
                    ("Mar", 48.0),
                    ("Apr", 85.0),
                    ("May", 62.0),
                ]),
            },
            rank: 4,
        },
    ]
}

pub fn recommendations() -> Vec<Recommendation> {
    let rec = |id: &str, title: &str, description: &str, priority| Recommendation {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        priority,
        tutorial_url: Some("#".to_string()),
    };
    vec![
        rec(
            "1",
            "Improve your backlift",
            "Work on raising your bat higher for better cover drives. This will help you generate more power and control in your shots.",
            Priority::High,
        ),
        rec(
            "2",
            "Increase wrist rotation",
            "Practice wrist exercises to enhance spin bowling technique. Focus on the snap at the point of release.",
            Priority::Medium,
        ),
        rec(
            "3",
            "Footwork drills",
            "Improve your positioning against fast bowlers with these specialized drills.",
            Priority::Low,
        ),
    ]
}

pub fn goals() -> Vec<Goal> {
    let goal = |id: &str, title: &str, target: &str, progress, deadline: &str| Goal {
        id: id.to_string(),
        title: title.to_string(),
        target: target.to_string(),
        progress,
        deadline: deadline.to_string(),
    };
    vec![
        goal("1", "Improve batting average", "From 35 to 45", 60.0, "2023-12-31"),
        goal("2", "Increase bowling speed", "From 130 to 140 km/h", 40.0, "2023-11-15"),
        goal("3", "Perfect cover drive", "100 practice shots daily", 75.0, "2023-10-30"),
    ]
}

/// Scores plotted on the skills radar.
pub fn radar_scores() -> Vec<SkillScore> {
    [
        ("Timing", 85.0),
        ("Footwork", 70.0),
        ("Balance", 80.0),
        ("Power", 90.0),
        ("Placement", 75.0),
    ]
    .iter()
    .map(|&(subject, value)| SkillScore {
        subject: subject.to_string(),
        value,
    })
    .collect()
}

/// Opponent weaknesses shown beside the strategy planner.
pub fn opponent_weaknesses() -> Vec<SkillScore> {
    [("Outside Edge", 75.0), ("Short Ball", 60.0), ("Spin", 40.0)]
        .iter()
        .map(|&(subject, value)| SkillScore {
            subject: subject.to_string(),
            value,
        })
        .collect()
}

/// Metric placeholders in the video analysis panel.
pub const VIDEO_METRICS: [&str; 3] = ["Bat Angle", "Foot Position", "Body Balance"];

/// Buttons in the dashboard's quick-actions card.
pub const QUICK_ACTIONS: [&str; 3] = ["Video Analysis", "Performance Review", "Training Schedule"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Discipline {
    #[default]
    Batting,
    Bowling,
    Fielding,
}

impl Discipline {
    pub const ALL: [Discipline; 3] = [Discipline::Batting, Discipline::Bowling, Discipline::Fielding];

    pub fn as_str(&self) -> &'static str {
        match self {
            Discipline::Batting => "batting",
            Discipline::Bowling => "bowling",
            Discipline::Fielding => "fielding",
        }
    }

    pub fn strengths_and_weaknesses(&self) -> StrengthsAndWeaknesses {
        let (strengths, weaknesses): (&[&str], &[&str]) = match self {
            Discipline::Batting => (
                &["Cover drive execution", "Pull shot timing"],
                &["Playing against spin", "Footwork on bouncy pitches"],
            ),
            Discipline::Bowling => (
                &["Yorker accuracy", "Swing control"],
                &["Slower ball variations", "Length consistency"],
            ),
            Discipline::Fielding => (
                &["Ground fielding", "Direct hits"],
                &["High catches", "Throwing accuracy"],
            ),
        };
        StrengthsAndWeaknesses {
            strengths: strengths.iter().map(|s| s.to_string()).collect(),
            weaknesses: weaknesses.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_player_ids_and_ranks_unique() {
        let players = players();
        let ids: HashSet<&str> = players.iter().map(|p| p.id.as_str()).collect();
        let ranks: HashSet<u32> = players.iter().map(|p| p.rank).collect();
        assert_eq!(ids.len(), players.len());
        assert_eq!(ranks.len(), players.len());
    }

    #[test]
    fn test_profile_is_first_player() {
        assert_eq!(players()[0], profile());
    }

    #[test]
    fn test_every_discipline_has_two_of_each() {
        for d in Discipline::ALL {
            let sw = d.strengths_and_weaknesses();
            assert_eq!(sw.strengths.len(), 2);
            assert_eq!(sw.weaknesses.len(), 2);
        }
    }

    #[test]
    fn test_recommendations_cover_all_priorities() {
        let recs = recommendations();
        assert_eq!(recs.len(), 3);
        assert_eq!(recs[0].priority, Priority::High);
        assert_eq!(recs[2].priority, Priority::Low);
    }
}
