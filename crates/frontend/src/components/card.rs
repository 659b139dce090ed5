use dioxus::prelude::*;

/// Panel with the fade-in entrance used by every dashboard section.
/// `delay` staggers sibling cards (seconds).
#[component]
pub fn Card(#[props(default)] delay: f64, #[props(default)] class: String, children: Element) -> Element {
    rsx! {
        div {
            class: "card fade-in {class}",
            style: "animation-delay: {delay}s;",
            {children}
        }
    }
}

/// Thin horizontal bar filled to `percent`.
#[component]
pub fn ProgressBar(percent: f64, #[props(default = "bar-blue".to_string())] color: String) -> Element {
    let width = percent.clamp(0.0, 100.0);
    rsx! {
        div { class: "progress-track",
            div { class: "progress-fill {color}", style: "width: {width}%;" }
        }
    }
}
