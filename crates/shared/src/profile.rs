use std::str::FromStr;

use tracing::info;

use crate::error::{Error, Result};
use crate::models::{PlayerProfile, PlayerRole};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProfileTab {
    #[default]
    Overview,
    History,
    Goals,
}

impl ProfileTab {
    pub const ALL: [ProfileTab; 3] = [ProfileTab::Overview, ProfileTab::History, ProfileTab::Goals];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileTab::Overview => "overview",
            ProfileTab::History => "history",
            ProfileTab::Goals => "goals",
        }
    }
}

impl FromStr for ProfileTab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ProfileTab::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::invalid("profile tab", s))
    }
}

/// Saved profile plus an editable draft.
///
/// Edits only touch the draft; `save` copies it over the saved profile and
/// leaves edit mode. Leaving edit mode any other way throws the draft away.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileEditor {
    saved: PlayerProfile,
    draft: PlayerProfile,
    editing: bool,
}

impl ProfileEditor {
    pub fn new(profile: PlayerProfile) -> Self {
        ProfileEditor {
            draft: profile.clone(),
            saved: profile,
            editing: false,
        }
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.saved
    }

    pub fn draft(&self) -> &PlayerProfile {
        &self.draft
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Enter edit mode with a draft copied from the saved profile.
    pub fn begin_edit(&mut self) {
        self.draft = self.saved.clone();
        self.editing = true;
    }

    pub fn toggle_edit(&mut self) {
        self.draft = self.saved.clone();
        self.editing = !self.editing;
    }

    pub fn set_name(&mut self, name: &str) {
        self.draft.name = name.to_string();
    }

    pub fn set_role(&mut self, role: &str) -> Result<()> {
        self.draft.role = role.parse::<PlayerRole>()?;
        Ok(())
    }

    pub fn save(&mut self) {
        info!(name = %self.draft.name, role = %self.draft.role, "profile saved");
        self.saved = self.draft.clone();
        self.editing = false;
    }
}

/// Pretty JSON for the "copy profile" button.
pub fn to_json(profile: &PlayerProfile) -> Result<String> {
    serde_json::to_string_pretty(profile).map_err(|e| Error::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample_data;

    #[test]
    fn test_save_commits_draft() {
        let mut editor = ProfileEditor::new(sample_data::profile());
        editor.toggle_edit();
        assert!(editor.is_editing());
        editor.set_name("V. Kohli");
        editor.set_role("All-rounder").unwrap();
        // not visible until saved
        assert_eq!(editor.profile().name, "Virat Kohli");
        editor.save();
        assert!(!editor.is_editing());
        assert_eq!(editor.profile().name, "V. Kohli");
        assert_eq!(editor.profile().role, PlayerRole::AllRounder);
    }

    #[test]
    fn test_begin_edit_is_idempotent() {
        let mut editor = ProfileEditor::new(sample_data::profile());
        editor.begin_edit();
        editor.set_name("Draft");
        editor.begin_edit();
        assert!(editor.is_editing());
        assert_eq!(editor.draft().name, "Virat Kohli");
    }

    #[test]
    fn test_toggle_off_discards_draft() {
        let mut editor = ProfileEditor::new(sample_data::profile());
        editor.toggle_edit();
        editor.set_name("Someone Else");
        editor.toggle_edit();
        assert_eq!(editor.profile().name, "Virat Kohli");
        assert_eq!(editor.draft().name, "Virat Kohli");
    }

    #[test]
    fn test_set_role_rejects_unknown() {
        let mut editor = ProfileEditor::new(sample_data::profile());
        editor.toggle_edit();
        let err = editor.set_role("Coach").unwrap_err();
        assert_eq!(err, Error::invalid("player role", "Coach"));
        assert_eq!(editor.draft().role, PlayerRole::Batsman);
    }

    #[test]
    fn test_tab_parse() {
        assert_eq!("goals".parse::<ProfileTab>().unwrap(), ProfileTab::Goals);
        assert!("settings".parse::<ProfileTab>().is_err());
    }

    #[test]
    fn test_to_json_roundtrip() {
        let profile = sample_data::profile();
        let json = to_json(&profile).unwrap();
        assert!(json.contains("\"battingAccuracy\": 78.0"));
        let back: PlayerProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
