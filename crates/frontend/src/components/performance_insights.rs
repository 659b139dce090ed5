use cricket_shared::models::PlayerStats;
use cricket_shared::sample_data::{self, Discipline};
use dioxus::prelude::*;

use crate::components::card::Card;
use crate::components::charts::{BarChart, RadarChart};

#[component]
pub fn PerformanceInsights(stats: PlayerStats) -> Element {
    let mut active = use_signal(Discipline::default);
    let radar = use_hook(sample_data::radar_scores);

    let current = *active.read();
    let sw = current.strengths_and_weaknesses();

    rsx! {
        Card {
            div { class: "tabs",
                for d in Discipline::ALL {
                    button {
                        key: "{d.as_str()}",
                        class: if d == current { "tab active" } else { "tab" },
                        onclick: move |_| active.set(d),
                        "{d.as_str()}"
                    }
                }
            }

            div { class: "grid-2",
                div {
                    h4 { "Skill Profile" }
                    RadarChart { scores: radar.clone(), size: 300.0 }
                }
                div { class: "stack",
                    div {
                        h4 { "Strengths" }
                        ul { class: "list-good",
                            for s in sw.strengths {
                                li { key: "{s}", "{s}" }
                            }
                        }
                    }
                    div {
                        h4 { "Areas to Improve" }
                        ul { class: "list-bad",
                            for w in sw.weaknesses {
                                li { key: "{w}", "{w}" }
                            }
                        }
                    }
                }
            }

            h4 { "Performance Trend" }
            BarChart { points: stats.recent_performance.clone(), height: 220.0 }
        }
    }
}
