use cricket_shared::sample_data::VIDEO_METRICS;
use dioxus::prelude::*;

use crate::components::card::{Card, ProgressBar};

/// Upload placeholder. Nothing is uploaded; the drop zone only reacts to
/// drag hover.
#[component]
pub fn VideoAnalysis() -> Element {
    let mut drag_active = use_signal(|| false);

    rsx! {
        Card {
            div { class: "stack",
                div {
                    class: if *drag_active.read() { "dropzone active" } else { "dropzone" },
                    ondragenter: move |_| drag_active.set(true),
                    ondragleave: move |_| drag_active.set(false),
                    // without this the browser opens the file instead of firing drop
                    ondragover: move |evt: Event<DragData>| evt.prevent_default(),
                    ondrop: move |evt: Event<DragData>| {
                        evt.prevent_default();
                        drag_active.set(false);
                    },
                    input {
                        r#type: "file",
                        accept: "video/*",
                        id: "video-upload",
                        class: "hidden",
                    }
                    label { r#for: "video-upload", class: "dropzone-label",
                        div { class: "upload-icon", "\u{2b06}" }
                        span { "Drop your video here or click to upload" }
                    }
                }

                div { class: "video-player", "No video selected" }

                div { class: "grid-3",
                    for (i, metric) in VIDEO_METRICS.iter().enumerate() {
                        div {
                            key: "{metric}",
                            class: "metric-tile slide-in",
                            style: "animation-delay: {i as f64 * 0.1}s;",
                            h4 { "{metric}" }
                            ProgressBar { percent: 0.0 }
                        }
                    }
                }
            }
        }
    }
}
