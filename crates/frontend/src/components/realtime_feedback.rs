use cricket_shared::config::DashboardConfig;
use cricket_shared::feedback::{format_elapsed, FeedbackSession};
use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::components::card::{Card, ProgressBar};

/// Live technique readings. The ticker task only exists while recording:
/// it is spawned on every start and cancelled on stop.
#[component]
pub fn RealTimeFeedback() -> Element {
    let config = use_context::<DashboardConfig>();
    let mut session = use_signal(FeedbackSession::default);
    let mut ticker = use_signal(|| None::<Task>);

    let toggle = move |_: Event<MouseData>| {
        if let Some(task) = ticker.take() {
            task.cancel();
        }
        if !session.write().toggle_recording() {
            return;
        }
        let cfg = config.feedback.clone();
        let task = spawn(async move {
            loop {
                TimeoutFuture::new(cfg.tick_interval_ms).await;
                session.write().tick(&mut rand::thread_rng(), &cfg);
            }
        });
        ticker.set(Some(task));
    };

    let s = session.read();
    let recording = s.is_recording();
    let sample = s.sample();
    let alerts = s.alerts().to_vec();
    let elapsed = format_elapsed(s.elapsed_secs());
    let placeholder = s.alerts_placeholder();
    drop(s);

    let metrics = [
        ("Bowling Speed", format!("{} km/h", sample.bowling_speed), f64::from(sample.bowling_speed) / 1.5, "bar-blue"),
        ("Foot Placement", format!("{}%", sample.foot_placement), f64::from(sample.foot_placement), "bar-green"),
        ("Body Alignment", format!("{}%", sample.body_alignment), f64::from(sample.body_alignment), "bar-purple"),
        ("Wrist Position", format!("{}%", sample.wrist_position), f64::from(sample.wrist_position), "bar-orange"),
    ];

    rsx! {
        Card { delay: 0.3,
            div { class: "row-between",
                h3 { "Real-time Feedback" }
                div { class: "row",
                    if recording {
                        span { class: "rec-dot pulse" }
                        span { class: "mono", "{elapsed}" }
                    }
                    button {
                        class: if recording { "danger" } else { "primary" },
                        onclick: toggle,
                        if recording { "Stop Recording" } else { "Start Recording" }
                    }
                }
            }

            div { class: "grid-2",
                div { class: "stack",
                    for (name, text, percent, color) in metrics {
                        div { key: "{name}",
                            div { class: "row-between",
                                span { "{name}" }
                                span { class: "muted", "{text}" }
                            }
                            ProgressBar { percent, color: color.to_string() }
                        }
                    }
                }

                div { class: "posture",
                    svg { view_box: "0 0 100 160", class: "posture-figure",
                        circle { cx: "50", cy: "20", r: "10", class: "figure-part" }
                        line { x1: "50", y1: "30", x2: "50", y2: "90", class: "figure-part" }
                        line { x1: "50", y1: "45", x2: "25", y2: "70", class: "figure-part" }
                        line { x1: "50", y1: "45", x2: "75", y2: "70", class: "figure-part" }
                        line { x1: "50", y1: "90", x2: "30", y2: "140", class: "figure-part" }
                        line { x1: "50", y1: "90", x2: "70", y2: "140", class: "figure-part" }
                        if recording && sample.foot_needs_work() {
                            circle { cx: "50", cy: "140", r: "14", class: "problem-area pulse" }
                        }
                        if recording && sample.wrist_needs_work() {
                            circle { cx: "75", cy: "70", r: "8", class: "problem-area pulse" }
                        }
                    }
                }
            }

            div { class: "stack alerts",
                if let Some(text) = placeholder {
                    p { class: "muted alerts-empty", "{text}" }
                }
                for alert in alerts {
                    div { key: "{alert.id}", class: "alert {alert.kind.css_class()} slide-in",
                        "{alert.message}"
                    }
                }
            }
        }
    }
}
