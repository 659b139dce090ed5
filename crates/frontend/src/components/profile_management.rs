use cricket_shared::models::{Goal, PlayerRole};
use cricket_shared::profile::{self, ProfileEditor, ProfileTab};
use cricket_shared::sample_data;
use dioxus::prelude::*;
use tracing::{debug, warn};

use crate::components::card::{Card, ProgressBar};
use crate::components::charts::LineChart;

fn copy_to_clipboard(text: String) {
    wasm_bindgen_futures::spawn_local(async move {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = wasm_bindgen_futures::JsFuture::from(clipboard.write_text(&text)).await;
        }
    });
}

#[component]
fn GoalsList(goals: Vec<Goal>) -> Element {
    rsx! {
        div { class: "stack",
            for goal in goals {
                div { key: "{goal.id}", class: "goal",
                    div { class: "row-between",
                        strong { "{goal.title}" }
                        span { class: "muted", "by {goal.deadline}" }
                    }
                    p { class: "muted", "{goal.target}" }
                    ProgressBar { percent: goal.progress, color: "bar-green".to_string() }
                    span { class: "muted small", "{goal.progress}% complete" }
                }
            }
        }
    }
}

#[component]
pub fn ProfileManagement() -> Element {
    let mut editor = use_signal(|| ProfileEditor::new(sample_data::profile()));
    let mut tab = use_signal(ProfileTab::default);
    let goals = use_hook(sample_data::goals);

    let ed = editor.read();
    let editing = ed.is_editing();
    let saved = ed.profile().clone();
    let draft = ed.draft().clone();
    drop(ed);

    let current_tab = *tab.read();

    rsx! {
        Card {
            div { class: "profile-head",
                if saved.avatar.is_empty() {
                    div { class: "avatar avatar-lg avatar-fallback", "{saved.initials()}" }
                } else {
                    img { class: "avatar avatar-lg", src: "{saved.avatar}", alt: "{saved.name}" }
                }

                if editing {
                    div { class: "stack",
                        input {
                            r#type: "text",
                            value: "{draft.name}",
                            oninput: move |evt: Event<FormData>| editor.write().set_name(&evt.value()),
                        }
                        select {
                            value: "{draft.role}",
                            onchange: move |evt: Event<FormData>| {
                                if let Err(e) = editor.write().set_role(&evt.value()) {
                                    debug!(%e, "role change rejected");
                                }
                            },
                            for role in PlayerRole::ALL {
                                option { key: "{role}", value: "{role}", "{role}" }
                            }
                        }
                    }
                } else {
                    div {
                        h2 { "{saved.name}" }
                        p { class: "muted", "{saved.role} \u{b7} Rank #{saved.rank}" }
                    }
                }

                div { class: "row",
                    if editing {
                        button { class: "primary", onclick: move |_| editor.write().save(), "Save" }
                        button { class: "secondary", onclick: move |_| editor.write().toggle_edit(), "Cancel" }
                    } else {
                        button { class: "secondary", onclick: move |_| editor.write().begin_edit(), "Edit Profile" }
                        button {
                            class: "secondary",
                            onclick: {
                                let saved = saved.clone();
                                move |_| match profile::to_json(&saved) {
                                    Ok(json) => copy_to_clipboard(json),
                                    Err(e) => warn!(%e, "profile export failed"),
                                }
                            },
                            "Copy JSON"
                        }
                    }
                }
            }

            div { class: "tabs",
                for t in ProfileTab::ALL {
                    button {
                        key: "{t.as_str()}",
                        class: if t == current_tab { "tab active" } else { "tab" },
                        onclick: move |_| tab.set(t),
                        "{t.as_str()}"
                    }
                }
            }

            {
                match current_tab {
                    ProfileTab::Overview => rsx! {
                        div { class: "grid-3",
                            div { class: "stat-tile",
                                span { class: "muted", "Batting Accuracy" }
                                strong { "{saved.stats.batting_accuracy}%" }
                            }
                            div { class: "stat-tile",
                                span { class: "muted", "Bowling Speed" }
                                strong { "{saved.stats.bowling_speed} km/h" }
                            }
                            div { class: "stat-tile",
                                span { class: "muted", "Fielding Efficiency" }
                                strong { "{saved.stats.fielding_efficiency}%" }
                            }
                        }
                    },
                    ProfileTab::History => rsx! {
                        LineChart { points: saved.stats.recent_performance.clone(), height: 240.0 }
                    },
                    ProfileTab::Goals => rsx! {
                        GoalsList { goals: goals.clone() }
                    },
                }
            }
        }
    }
}
