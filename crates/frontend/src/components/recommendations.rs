use cricket_shared::models::Recommendation;
use dioxus::prelude::*;

use crate::components::card::Card;

/// Coaching recommendations; at most one is expanded at a time.
#[component]
pub fn Recommendations(items: Vec<Recommendation>) -> Element {
    let mut expanded = use_signal(|| None::<String>);

    rsx! {
        Card { delay: 0.1,
            h3 { "Recommendations" }
            div { class: "stack",
                for rec in items {
                    div { key: "{rec.id}", class: "recommendation",
                        button {
                            class: "recommendation-head",
                            onclick: {
                                let id = rec.id.clone();
                                move |_| {
                                    let open = expanded.read().as_deref() == Some(id.as_str());
                                    expanded.set(if open { None } else { Some(id.clone()) });
                                }
                            },
                            span { "{rec.title}" }
                            span { class: "badge {rec.priority.badge_class()}", "{rec.priority}" }
                        }
                        if expanded.read().as_deref() == Some(rec.id.as_str()) {
                            div { class: "recommendation-body fade-in",
                                p { "{rec.description}" }
                                if let Some(url) = rec.tutorial_url.clone() {
                                    a { href: "{url}", target: "_blank", rel: "noopener", "Watch tutorial" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
