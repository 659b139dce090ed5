use cricket_shared::leaderboard::{self, SkillFilter, SortBy};
use cricket_shared::models::PlayerProfile;
use dioxus::prelude::*;
use tracing::debug;

use crate::components::card::Card;

#[component]
fn Avatar(player: PlayerProfile) -> Element {
    rsx! {
        if player.avatar.is_empty() {
            div { class: "avatar avatar-fallback", "{player.initials()}" }
        } else {
            img { class: "avatar", src: "{player.avatar}", alt: "{player.name}" }
        }
    }
}

#[component]
pub fn Leaderboard(players: Vec<PlayerProfile>) -> Element {
    let mut filter = use_signal(SkillFilter::default);
    let mut sort_by = use_signal(SortBy::default);

    let filter_now = *filter.read();
    let sorted = leaderboard::sorted_players(&players, *sort_by.read());
    let (podium, rest) = leaderboard::podium_split(&sorted);
    let podium = podium.to_vec();
    let rest = rest.to_vec();

    rsx! {
        Card { delay: 0.2,
            div { class: "row-between",
                h3 { "Leaderboard" }
                div { class: "row",
                    select {
                        value: "{filter_now.value()}",
                        onchange: move |evt: Event<FormData>| {
                            match evt.value().parse::<SkillFilter>() {
                                Ok(f) => filter.set(f),
                                Err(e) => debug!(%e, "ignoring filter change"),
                            }
                        },
                        for f in SkillFilter::ALL {
                            option { key: "{f.value()}", value: "{f.value()}", "{f.label()}" }
                        }
                    }
                    select {
                        value: "{sort_by.read().value()}",
                        onchange: move |evt: Event<FormData>| {
                            match evt.value().parse::<SortBy>() {
                                Ok(s) => sort_by.set(s),
                                Err(e) => debug!(%e, "ignoring sort change"),
                            }
                        },
                        option { value: "rank", "By Rank" }
                        option { value: "name", "By Name" }
                    }
                }
            }

            if sorted.is_empty() {
                div { class: "empty-state", "No players to rank yet." }
            } else {
                div { class: "grid-3 podium",
                    for (i, player) in podium.into_iter().enumerate() {
                        div {
                            key: "{player.id}",
                            class: "podium-card {leaderboard::podium_class(i)} pop-in",
                            style: "animation-delay: {i as f64 * 0.1}s;",
                            div { class: "podium-rank", "#{player.rank}" }
                            Avatar { player: player.clone() }
                            h4 { "{player.name}" }
                            p { class: "muted", "{player.role}" }
                            p { "{leaderboard::stat_label(&player, filter_now)}" }
                        }
                    }
                }

                if !rest.is_empty() {
                    table { class: "leaderboard-table",
                        thead {
                            tr {
                                th { "Rank" }
                                th { "Player" }
                                th { "Role" }
                                th { "Stat" }
                            }
                        }
                        tbody {
                            for player in rest {
                                tr { key: "{player.id}",
                                    td { "#{player.rank}" }
                                    td { class: "row",
                                        Avatar { player: player.clone() }
                                        span { "{player.name}" }
                                    }
                                    td { "{player.role}" }
                                    td { "{leaderboard::stat_label(&player, filter_now)}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
