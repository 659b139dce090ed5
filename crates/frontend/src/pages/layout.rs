use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Layout() -> Element {
    let current = use_route::<Route>();

    rsx! {
        div { class: "app",
            nav { class: "topnav",
                div { class: "brand", "Sports Optimizer" }
                div { class: "nav-links",
                    for (route, label) in Route::nav_items() {
                        Link {
                            class: if route == current { "nav-link active".to_string() } else { "nav-link".to_string() },
                            to: route.clone(),
                            "{label}"
                        }
                    }
                }
            }

            main { class: "content",
                Outlet::<Route> {}
            }

            footer { class: "footer",
                div { class: "brand", "Sports Optimizer" }
                div { class: "copyright", "\u{00a9} 2023 Sports Optimizer. All rights reserved." }
            }
        }
    }
}
