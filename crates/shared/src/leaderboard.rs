use std::str::FromStr;

use crate::error::Error;
use crate::models::PlayerProfile;

/// Players highlighted as cards above the table.
pub const PODIUM_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillFilter {
    #[default]
    All,
    Batting,
    Bowling,
    Fielding,
}

impl SkillFilter {
    pub const ALL: [SkillFilter; 4] = [
        SkillFilter::All,
        SkillFilter::Batting,
        SkillFilter::Bowling,
        SkillFilter::Fielding,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            SkillFilter::All => "all",
            SkillFilter::Batting => "batting",
            SkillFilter::Bowling => "bowling",
            SkillFilter::Fielding => "fielding",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SkillFilter::All => "All Skills",
            SkillFilter::Batting => "Batting",
            SkillFilter::Bowling => "Bowling",
            SkillFilter::Fielding => "Fielding",
        }
    }
}

impl FromStr for SkillFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SkillFilter::ALL
            .into_iter()
            .find(|f| f.value() == s)
            .ok_or_else(|| Error::invalid("skill filter", s))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    #[default]
    Rank,
    Name,
}

impl SortBy {
    pub fn value(&self) -> &'static str {
        match self {
            SortBy::Rank => "rank",
            SortBy::Name => "name",
        }
    }
}

impl FromStr for SortBy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rank" => Ok(SortBy::Rank),
            "name" => Ok(SortBy::Name),
            other => Err(Error::invalid("sort order", other)),
        }
    }
}

/// A sorted copy of `players`; the input is left untouched.
pub fn sorted_players(players: &[PlayerProfile], sort: SortBy) -> Vec<PlayerProfile> {
    let mut out = players.to_vec();
    match sort {
        SortBy::Rank => out.sort_by_key(|p| p.rank),
        SortBy::Name => out.sort_by_cached_key(|p| p.name.to_lowercase()),
    }
    out
}

/// Split a sorted list into the podium cards and the remaining table rows.
pub fn podium_split(sorted: &[PlayerProfile]) -> (&[PlayerProfile], &[PlayerProfile]) {
    sorted.split_at(sorted.len().min(PODIUM_SIZE))
}

/// The one stat shown per player for the active filter.
pub fn stat_label(player: &PlayerProfile, filter: SkillFilter) -> String {
    let stats = &player.stats;
    match filter {
        SkillFilter::All | SkillFilter::Batting => format!("Batting: {}%", stats.batting_accuracy),
        SkillFilter::Bowling => format!("Bowling: {} km/h", stats.bowling_speed),
        SkillFilter::Fielding => format!("Fielding: {}%", stats.fielding_efficiency),
    }
}

/// CSS modifier for podium position 0, 1, 2 (gold, silver, bronze).
pub fn podium_class(index: usize) -> &'static str {
    match index {
        0 => "podium-gold",
        1 => "podium-silver",
        _ => "podium-bronze",
    }
}
