use cricket_shared::models::PlayerStats;
use cricket_shared::sample_data::QUICK_ACTIONS;
use dioxus::prelude::*;

use crate::components::card::Card;
use crate::components::charts::{LineChart, RadialGauge};
use crate::Route;

#[component]
pub fn Dashboard(stats: PlayerStats) -> Element {
    let nav = use_navigator();

    // Quick actions jump to the matching section
    let targets = [Route::VideoPage {}, Route::PerformancePage {}, Route::ProfilePage {}];

    rsx! {
        div { class: "grid-3",
            Card { delay: 0.1,
                h3 { "Batting Performance" }
                LineChart { points: stats.recent_performance.clone(), height: 200.0 }
            }

            Card { delay: 0.2,
                h3 { "Batting Accuracy" }
                RadialGauge { percent: stats.batting_accuracy }
            }

            Card { delay: 0.3,
                h3 { "Quick Actions" }
                div { class: "stack",
                    for (i, (action, route)) in QUICK_ACTIONS.iter().zip(targets).enumerate() {
                        button {
                            key: "{action}",
                            class: "primary slide-in",
                            style: "animation-delay: {i as f64 * 0.1}s;",
                            onclick: move |_| {
                                nav.push(route.clone());
                            },
                            "{action}"
                        }
                    }
                }
            }
        }
    }
}
