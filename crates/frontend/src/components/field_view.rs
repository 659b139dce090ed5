use cricket_shared::field::{FieldAction, FieldPlan};
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;
use tracing::debug;

use crate::coords;

pub const FIELD_SURFACE_ID: &str = "cricket-field-surface";

/// Movement below this (pixels) between press and release is a click.
const DRAG_THRESHOLD: f64 = 3.0;

/// Touch is less precise than a mouse.
const TOUCH_DRAG_THRESHOLD: f64 = 8.0;

/// Boundary rope, 30-yard circle, pitch and creases in a 100x100 box.
const FIELD_MARKINGS: &str = concat!(
    r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100" preserveAspectRatio="none" "#,
    r#"style="position:absolute;top:0;left:0;width:100%;height:100%;pointer-events:none;">"#,
    r#"<ellipse cx="50" cy="50" rx="48" ry="48" fill="none" stroke="rgba(255,255,255,0.6)" stroke-width="0.6"/>"#,
    r#"<ellipse cx="50" cy="50" rx="28" ry="28" fill="none" stroke="rgba(255,255,255,0.35)" stroke-width="0.4" stroke-dasharray="1.5 1.5"/>"#,
    r#"<rect x="47" y="38" width="6" height="24" fill="rgba(222,196,140,0.85)"/>"#,
    r#"<line x1="45.5" y1="41" x2="54.5" y2="41" stroke="white" stroke-width="0.3"/>"#,
    r#"<line x1="45.5" y1="59" x2="54.5" y2="59" stroke="white" stroke-width="0.3"/>"#,
    r#"</svg>"#
);

/// A marker press that has not been released yet.
#[derive(Debug, Clone, PartialEq)]
struct DragState {
    marker_id: String,
    start: (f64, f64),
    last: (f64, f64),
    moved: bool,
    /// Live field position while the pointer is moving.
    preview: Option<(f64, f64)>,
}

impl DragState {
    fn new(marker_id: String, client: (f64, f64)) -> Self {
        DragState {
            marker_id,
            start: client,
            last: client,
            moved: false,
            preview: None,
        }
    }
}

/// Release handling shared by mouse and touch. A press that never moved
/// past the threshold selects the marker; anything else drops it where the
/// pointer was last seen.
fn finish_drag(mut plan: Signal<FieldPlan>, drag: DragState) {
    if !drag.moved {
        plan.write().apply(FieldAction::SelectMarker(drag.marker_id));
        return;
    }
    let Some(rect) = coords::element_rect(FIELD_SURFACE_ID) else {
        debug!(marker_id = %drag.marker_id, "field surface not mounted, drop ignored");
        return;
    };
    plan.write().apply(FieldAction::EndDrag {
        marker_id: drag.marker_id,
        pointer_x: drag.last.0,
        pointer_y: drag.last.1,
        rect,
    });
}

/// Green field with one draggable marker per fielder.
#[component]
pub fn FieldView(plan: Signal<FieldPlan>) -> Element {
    let mut drag = use_signal(|| None::<DragState>);

    let mut track_move = move |client: (f64, f64), threshold: f64| {
        let mut guard = drag.write();
        let Some(state) = guard.as_mut() else { return };
        state.last = client;
        if !state.moved && coords::point_distance(state.start, client) > threshold {
            state.moved = true;
        }
        if state.moved {
            state.preview = coords::client_to_field_percent(client.0, client.1, FIELD_SURFACE_ID);
        }
    };

    let current = drag.read().clone();
    let dragging_id = current.as_ref().filter(|d| d.moved).map(|d| d.marker_id.clone());
    let preview = current.as_ref().and_then(|d| d.preview);

    let plan_read = plan.read();
    let markers: Vec<(String, String, String, String, f64, f64, bool)> = plan_read
        .positions()
        .iter()
        .map(|p| {
            let (x, y) = match (&dragging_id, preview) {
                (Some(id), Some(pv)) if *id == p.id => pv,
                _ => (p.x, p.y),
            };
            (
                p.id.clone(),
                p.label.clone(),
                p.role.clone(),
                p.color.clone(),
                x,
                y,
                plan_read.is_selected(&p.id),
            )
        })
        .collect();
    drop(plan_read);

    let container_class = if dragging_id.is_some() {
        "field-surface dragging"
    } else {
        "field-surface"
    };

    rsx! {
        div {
            id: FIELD_SURFACE_ID,
            class: "{container_class}",

            onmousemove: move |evt: Event<MouseData>| {
                let client = evt.client_coordinates();
                track_move((client.x, client.y), DRAG_THRESHOLD);
            },

            onmouseup: move |evt: Event<MouseData>| {
                let Some(mut state) = drag.take() else { return };
                let client = evt.client_coordinates();
                state.last = (client.x, client.y);
                finish_drag(plan, state);
            },

            // Leaving the field commits the drag at the last seen point,
            // which the clamp pins to the nearest edge.
            onmouseleave: move |_| {
                if let Some(state) = drag.take() {
                    finish_drag(plan, state);
                }
            },

            ontouchmove: move |evt: Event<TouchData>| {
                evt.prevent_default();
                let touches = evt.data().touches();
                if let Some(t) = touches.first() {
                    let c = t.client_coordinates();
                    track_move((c.x, c.y), TOUCH_DRAG_THRESHOLD);
                }
            },

            ontouchend: move |evt: Event<TouchData>| {
                evt.prevent_default();
                if !evt.data().touches().is_empty() {
                    return;
                }
                if let Some(state) = drag.take() {
                    finish_drag(plan, state);
                }
            },

            ontouchcancel: move |_evt: Event<TouchData>| {
                drag.set(None);
            },

            div { dangerous_inner_html: FIELD_MARKINGS }

            for (id, label, role, color, x, y, selected) in markers {
                div {
                    key: "{id}",
                    class: if selected { "field-marker selected" } else { "field-marker" },
                    style: "left: {x}%; top: {y}%; background: {color};",
                    title: "{label} ({role})",

                    onmousedown: {
                        let id = id.clone();
                        move |evt: Event<MouseData>| {
                            if evt.trigger_button() != Some(MouseButton::Primary) {
                                return;
                            }
                            evt.prevent_default();
                            let client = evt.client_coordinates();
                            drag.set(Some(DragState::new(id.clone(), (client.x, client.y))));
                        }
                    },

                    ontouchstart: {
                        let id = id.clone();
                        move |evt: Event<TouchData>| {
                            evt.prevent_default();
                            let touches = evt.data().touches();
                            if touches.len() != 1 {
                                return;
                            }
                            let c = touches[0].client_coordinates();
                            drag.set(Some(DragState::new(id.clone(), (c.x, c.y))));
                        }
                    },

                    span { class: "marker-dot", "{id}" }
                    span { class: "marker-label", "{label}" }
                }
            }
        }
    }
}
