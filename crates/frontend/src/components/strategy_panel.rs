use cricket_shared::field::{format_position, FieldAction, FieldPlan};
use cricket_shared::presets::StrategyKey;
use cricket_shared::sample_data;
use dioxus::prelude::*;

use crate::components::card::ProgressBar;

/// Preset description, tips, selection details and opponent notes.
#[component]
pub fn StrategyPanel(plan: Signal<FieldPlan>) -> Element {
    let mut show_tips = use_signal(|| false);
    let weaknesses = use_hook(sample_data::opponent_weaknesses);

    let current = plan.read();
    let preset = current.preset();
    let selected = current.selected_position().cloned();
    drop(current);

    rsx! {
        div { class: "stack",
            div { class: "panel-block",
                h3 { "{preset.name}" }
                p { class: "muted", "{preset.description}" }
                button {
                    class: "secondary",
                    onclick: move |_| {
                        let v = *show_tips.read();
                        show_tips.set(!v);
                    },
                    if *show_tips.read() { "Hide Bowling Tips" } else { "Show Bowling Tips" }
                }
                if *show_tips.read() {
                    ul { class: "tips fade-in",
                        for tip in preset.bowling_tips.iter() {
                            li { key: "{tip}", "{tip}" }
                        }
                    }
                }
            }

            if let Some(pos) = selected {
                div { class: "panel-block selected-card slide-in",
                    h4 { "Selected Position" }
                    p { strong { "{pos.label}" } " ({pos.role})" }
                    p { class: "mono", "{format_position(pos.x, pos.y)}" }
                    button {
                        class: "secondary",
                        onclick: move |_| plan.write().apply(FieldAction::ClearSelection),
                        "Clear selection"
                    }
                }
            }

            div { class: "panel-block",
                h4 { "Opponent Weaknesses" }
                for w in weaknesses {
                    div { key: "{w.subject}", class: "weakness-row",
                        div { class: "row-between",
                            span { "{w.subject}" }
                            span { class: "muted", "{w.value}%" }
                        }
                        ProgressBar { percent: w.value, color: "bar-red".to_string() }
                    }
                }
            }
        }
    }
}

/// One card per preset; the active one is highlighted.
#[component]
pub fn PresetCards(plan: Signal<FieldPlan>) -> Element {
    let active = plan.read().strategy();

    rsx! {
        div { class: "grid-3",
            for key in StrategyKey::ALL {
                div {
                    key: "{key}",
                    class: if key == active { "preset-card active" } else { "preset-card" },
                    style: "border-color: {key.preset().color};",
                    onclick: move |_| plan.write().apply(FieldAction::SelectPreset(key)),
                    h4 { style: "color: {key.preset().color};", "{key.preset().name}" }
                    p { class: "muted", "{key.preset().summary}" }
                }
            }
        }
    }
}
