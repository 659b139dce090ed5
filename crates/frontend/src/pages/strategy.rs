use cricket_shared::field::{FieldAction, FieldPlan};
use cricket_shared::presets::StrategyKey;
use dioxus::prelude::*;

use crate::components::card::Card;
use crate::components::field_view::FieldView;
use crate::components::help_overlay::HelpOverlay;
use crate::components::realtime_feedback::RealTimeFeedback;
use crate::components::strategy_panel::{PresetCards, StrategyPanel};

/// Keyboard shortcut to planner action.
fn shortcut_action(key: &Key) -> Option<FieldAction> {
    match key {
        Key::Escape => Some(FieldAction::ClearSelection),
        Key::Character(c) => match c.as_str() {
            "1" => Some(FieldAction::SelectPreset(StrategyKey::Attacking)),
            "2" => Some(FieldAction::SelectPreset(StrategyKey::Balanced)),
            "3" => Some(FieldAction::SelectPreset(StrategyKey::Defensive)),
            _ => None,
        },
        _ => None,
    }
}

#[component]
pub fn StrategyPage() -> Element {
    let mut plan = use_signal(FieldPlan::default);
    let mut show_help = use_signal(|| false);

    rsx! {
        div {
            class: "page strategy-page",
            tabindex: "0",
            onkeydown: move |evt: Event<KeyboardData>| {
                let key = evt.key();
                if key == Key::Character("?".to_string()) {
                    let v = *show_help.read();
                    show_help.set(!v);
                    return;
                }
                if let Some(action) = shortcut_action(&key) {
                    plan.write().apply(action);
                }
            },

            div { class: "row-between",
                h2 { "Field Strategy" }
                button {
                    class: "secondary",
                    title: "Keyboard shortcuts",
                    onclick: move |_| show_help.set(true),
                    "?"
                }
            }

            div { class: "grid-strategy",
                Card { delay: 0.1,
                    FieldView { plan }
                }
                Card { delay: 0.2,
                    StrategyPanel { plan }
                }
            }

            PresetCards { plan }

            RealTimeFeedback {}

            HelpOverlay { show: show_help }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_keys_pick_presets() {
        assert_eq!(
            shortcut_action(&Key::Character("1".to_string())),
            Some(FieldAction::SelectPreset(StrategyKey::Attacking))
        );
        assert_eq!(
            shortcut_action(&Key::Character("3".to_string())),
            Some(FieldAction::SelectPreset(StrategyKey::Defensive))
        );
    }

    #[test]
    fn test_escape_clears_and_others_ignored() {
        assert_eq!(shortcut_action(&Key::Escape), Some(FieldAction::ClearSelection));
        assert_eq!(shortcut_action(&Key::Character("x".to_string())), None);
        assert_eq!(shortcut_action(&Key::Enter), None);
    }
}
