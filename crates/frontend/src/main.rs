mod components;
mod coords;
mod pages;

use cricket_shared::config::DashboardConfig;
use dioxus::prelude::*;

use pages::layout::Layout;
use pages::sections::{DashboardPage, HomePage, PerformancePage, ProfilePage, VideoPage};
use pages::strategy::StrategyPage;

#[derive(Routable, Clone, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/")]
        HomePage {},
        #[route("/dashboard")]
        DashboardPage {},
        #[route("/video")]
        VideoPage {},
        #[route("/performance")]
        PerformancePage {},
        #[route("/strategy")]
        StrategyPage {},
        #[route("/profile")]
        ProfilePage {},
}

impl Route {
    /// Tabs in the navigation bar, in display order.
    pub fn nav_items() -> [(Route, &'static str); 6] {
        [
            (Route::HomePage {}, "Home"),
            (Route::DashboardPage {}, "Dashboard"),
            (Route::VideoPage {}, "Video Analysis"),
            (Route::PerformancePage {}, "Performance"),
            (Route::StrategyPage {}, "Strategy"),
            (Route::ProfilePage {}, "Profile"),
        ]
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    use_context_provider(DashboardConfig::default);

    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        document::Title { "Sports Optimizer" }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
