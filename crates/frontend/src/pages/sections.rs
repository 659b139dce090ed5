use cricket_shared::sample_data;
use dioxus::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::hero::Hero;
use crate::components::leaderboard::Leaderboard;
use crate::components::performance_insights::PerformanceInsights;
use crate::components::profile_management::ProfileManagement;
use crate::components::recommendations::Recommendations;
use crate::components::video_analysis::VideoAnalysis;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        Hero {}
    }
}

#[component]
pub fn DashboardPage() -> Element {
    let stats = use_hook(sample_data::player_stats);
    rsx! {
        div { class: "page",
            h2 { "Performance Dashboard" }
            Dashboard { stats }
        }
    }
}

#[component]
pub fn VideoPage() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Video Analysis" }
            VideoAnalysis {}
        }
    }
}

#[component]
pub fn PerformancePage() -> Element {
    let stats = use_hook(sample_data::player_stats);
    let recommendations = use_hook(sample_data::recommendations);
    let players = use_hook(sample_data::players);

    rsx! {
        div { class: "page",
            h2 { "Performance Insights" }
            PerformanceInsights { stats }
            div { class: "grid-2",
                Recommendations { items: recommendations }
                Leaderboard { players }
            }
        }
    }
}

#[component]
pub fn ProfilePage() -> Element {
    rsx! {
        div { class: "page",
            h2 { "Player Profile" }
            ProfileManagement {}
        }
    }
}
