//! Team Page

use fugo_content::CancelToken;
use fugo_content::identity::{RosterEntry, roster};
use leptos::prelude::*;

use crate::api;
use crate::components::{PageHero, SkeletonCard, TeamTile};
use crate::config::WebConfig;

#[component]
pub fn TeamPage() -> impl IntoView {
    let config = expect_context::<WebConfig>();
    let (entries, set_entries) = signal(Vec::<RosterEntry>::new());
    let (loading, set_loading) = signal(true);

    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    leptos::task::spawn_local(async move {
        let outcome = api::load_team(&config, api::TEAM_PAGE_SIZE, &token).await;
        if outcome.is_cancelled() {
            return;
        }
        set_entries.set(roster(outcome.into_items()));
        set_loading.set(false);
    });

    view! {
        <div class="team">
            <PageHero
                title="Meet Our"
                accent="Team"
                subtitle="The people behind every campaign, shoot and launch."
            />

            <div class="team-grid">
                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        (0..api::TEAM_PAGE_SIZE).map(|_| view! { <SkeletonCard kind="team-skeleton" /> }).collect_view()
                    }
                >
                    {move || {
                        entries
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, entry)| view! { <TeamTile entry=entry index=index /> })
                            .collect_view()
                    }}
                </Show>
            </div>
        </div>
    }
}
