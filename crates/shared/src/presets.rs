//! Built-in field settings for the strategy planner.
//!
//! Each preset places exactly eleven fielders. Coordinates are percentages
//! of the field rectangle, `(0, 0)` top-left, bowler's end at the top.
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

pub const FIELDERS_PER_SIDE: usize = 11;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKey {
    Attacking,
    Defensive,
    #[default]
    Balanced,
}

impl StrategyKey {
    /// Button order in the planner header.
    pub const ALL: [StrategyKey; 3] = [
        StrategyKey::Attacking,
        StrategyKey::Balanced,
        StrategyKey::Defensive,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyKey::Attacking => "attacking",
            StrategyKey::Defensive => "defensive",
            StrategyKey::Balanced => "balanced",
        }
    }

    pub fn preset(&self) -> &'static StrategyPreset {
        match self {
            StrategyKey::Attacking => &ATTACKING,
            StrategyKey::Defensive => &DEFENSIVE,
            StrategyKey::Balanced => &BALANCED,
        }
    }
}

impl fmt::Display for StrategyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attacking" => Ok(StrategyKey::Attacking),
            "defensive" => Ok(StrategyKey::Defensive),
            "balanced" => Ok(StrategyKey::Balanced),
            other => Err(Error::invalid("strategy preset", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerTemplate {
    pub id: &'static str,
    pub label: &'static str,
    pub role: &'static str,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, PartialEq)]
pub struct StrategyPreset {
    pub key: StrategyKey,
    pub name: &'static str,
    pub description: &'static str,
    /// Short blurb for the preset cards under the field.
    pub summary: &'static str,
    pub color: &'static str,
    pub positions: [MarkerTemplate; FIELDERS_PER_SIDE],
    pub bowling_tips: &'static [&'static str],
}

const fn m(id: &'static str, label: &'static str, role: &'static str, x: f64, y: f64) -> MarkerTemplate {
    MarkerTemplate { id, label, role, x, y }
}

pub static ATTACKING: StrategyPreset = StrategyPreset {
    key: StrategyKey::Attacking,
    name: "Aggressive Field",
    description: "Designed to take wickets with close catchers and attacking positions",
    summary: "Aggressive field with close catchers",
    color: "#EC4899",
    positions: [
        m("1", "WK", "Wicket Keeper", 50.0, 85.0),
        m("2", "SL", "Slip", 25.0, 70.0),
        m("3", "P", "Bowler", 50.0, 15.0),
        m("4", "FS", "First Slip", 20.0, 40.0),
        m("5", "SS", "Second Slip", 80.0, 40.0),
        m("6", "G", "Gully", 35.0, 30.0),
        m("7", "C", "Cover", 50.0, 35.0),
        m("8", "M", "Mid-off", 65.0, 30.0),
        m("9", "E", "Extra Cover", 80.0, 60.0),
        m("10", "L", "Leg Slip", 20.0, 60.0),
        m("11", "S", "Short Leg", 35.0, 50.0),
    ],
    bowling_tips: &[
        "Bowl fuller lengths to induce drives",
        "Use yorkers as surprise deliveries",
        "Vary pace to create catching opportunities",
        "Target the stumps more frequently",
    ],
};

pub static DEFENSIVE: StrategyPreset = StrategyPreset {
    key: StrategyKey::Defensive,
    name: "Defensive Field",
    description: "Focused on containing runs with spread field and boundary protection",
    summary: "Spread field to contain runs",
    color: "#10B981",
    positions: [
        m("1", "WK", "Wicket Keeper", 50.0, 85.0),
        m("2", "SL", "Slip", 30.0, 70.0),
        m("3", "P", "Bowler", 50.0, 15.0),
        m("4", "DP", "Deep Point", 15.0, 25.0),
        m("5", "DM", "Deep Mid-wicket", 85.0, 25.0),
        m("6", "LO", "Long-on", 15.0, 60.0),
        m("7", "LF", "Long-off", 85.0, 60.0),
        m("8", "TS", "Third Man", 50.0, 40.0),
        m("9", "FG", "Fine Leg", 30.0, 40.0),
        m("10", "MS", "Mid-on", 70.0, 40.0),
        m("11", "C", "Cover", 50.0, 60.0),
    ],
    bowling_tips: &[
        "Bowl to your field settings",
        "Target areas outside off stump",
        "Use slower balls to induce mistimed shots",
        "Bowl back of a length to restrict scoring",
    ],
};

pub static BALANCED: StrategyPreset = StrategyPreset {
    key: StrategyKey::Balanced,
    name: "Balanced Field",
    description: "Versatile setup that can adapt to both attacking and defensive needs",
    summary: "Versatile field for all situations",
    color: "#3B82F6",
    positions: [
        m("1", "WK", "Wicket Keeper", 50.0, 85.0),
        m("2", "SL", "Slip", 30.0, 70.0),
        m("3", "P", "Bowler", 50.0, 15.0),
        m("4", "FS", "First Slip", 20.0, 40.0),
        m("5", "SS", "Second Slip", 80.0, 40.0),
        m("6", "M", "Mid-off", 50.0, 50.0),
        m("7", "C", "Cover", 50.0, 35.0),
        m("8", "E", "Extra Cover", 70.0, 60.0),
        m("9", "G", "Gully", 30.0, 30.0),
        m("10", "L", "Leg Slip", 20.0, 60.0),
        m("11", "S", "Short Leg", 80.0, 60.0),
    ],
    bowling_tips: &[
        "Mix up your lengths and lines",
        "Use the crease wisely to change angles",
        "Bowl to the batter's weaknesses",
        "Communicate with your captain about field changes",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_keys() {
        assert_eq!("attacking".parse::<StrategyKey>().unwrap(), StrategyKey::Attacking);
        assert_eq!("defensive".parse::<StrategyKey>().unwrap(), StrategyKey::Defensive);
        assert_eq!("balanced".parse::<StrategyKey>().unwrap(), StrategyKey::Balanced);
    }

    #[test]
    fn test_parse_unknown_key_is_invalid_argument() {
        let err = "ultra-attacking".parse::<StrategyKey>().unwrap_err();
        assert_eq!(err, Error::invalid("strategy preset", "ultra-attacking"));
    }

    #[test]
    fn test_preset_lookup_matches_key() {
        for key in StrategyKey::ALL {
            assert_eq!(key.preset().key, key);
            assert_eq!(key.preset().bowling_tips.len(), 4);
        }
    }

    #[test]
    fn test_default_is_balanced() {
        assert_eq!(StrategyKey::default(), StrategyKey::Balanced);
    }
}
