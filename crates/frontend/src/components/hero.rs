use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Hero() -> Element {
    let nav = use_navigator();

    rsx! {
        div { class: "hero",
            div { class: "hero-overlay" }
            div { class: "hero-body rise-in",
                h1 { "Sports Optimizer" }
                p {
                    "Unlock your cricket potential with AI-driven insights, personalized coaching, and real-time performance feedback."
                }
                button {
                    class: "hero-cta",
                    onclick: move |_| {
                        nav.push(Route::DashboardPage {});
                    },
                    "Start Your Journey"
                }
            }
            div { class: "hero-ball float-spin", "\u{1f3cf}" }
            div { class: "hero-ball hero-ball-alt float-spin-reverse", "\u{1f3c6}" }
        }
    }
}
