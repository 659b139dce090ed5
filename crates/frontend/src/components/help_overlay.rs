use dioxus::prelude::*;

#[component]
pub fn HelpOverlay(show: Signal<bool>) -> Element {
    if !*show.read() {
        return rsx! {};
    }

    rsx! {
        div {
            class: "help-overlay",
            onclick: move |_| show.set(false),
            div {
                class: "help-content",
                onclick: move |evt: Event<MouseData>| evt.stop_propagation(),
                h3 { "Strategy Planner" }
                table { class: "shortcut-table",
                    tbody {
                        tr { td { "Drag marker" } td { "Move a fielder" } }
                        tr { td { "Click marker" } td { "Select a fielder" } }
                        tr { td { kbd { "1" } } td { "Attacking field" } }
                        tr { td { kbd { "2" } } td { "Balanced field" } }
                        tr { td { kbd { "3" } } td { "Defensive field" } }
                        tr { td { kbd { "Esc" } } td { "Clear selection" } }
                        tr { td { kbd { "?" } } td { "Toggle this help" } }
                    }
                }
                button {
                    class: "secondary",
                    onclick: move |_| show.set(false),
                    "Close"
                }
            }
        }
    }
}
