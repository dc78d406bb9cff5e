//! Portfolio Page

use fugo_content::{CancelToken, CategoryFilter, PortfolioItem, filter_items};
use leptos::prelude::*;

use crate::api;
use crate::components::{PageHero, PortfolioCard, SkeletonCard};
use crate::config::WebConfig;

const SKELETON_COUNT: usize = 6;

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let config = expect_context::<WebConfig>();
    let (items, set_items) = signal(Vec::<PortfolioItem>::new());
    let (loading, set_loading) = signal(true);
    let (filter, set_filter) = signal(CategoryFilter::default());

    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    leptos::task::spawn_local(async move {
        let outcome = api::load_portfolio(&config, &token).await;
        if outcome.is_cancelled() {
            return;
        }
        set_items.set(outcome.into_items());
        set_loading.set(false);
    });

    let visible = Memo::new(move |_| items.with(|all| filter_items(all, filter.get())));

    view! {
        <div class="portfolio">
            <PageHero
                title="Our"
                accent="Portfolio"
                subtitle="A selection of work across branding, campaigns, digital and production."
            />

            <div class="filter-bar">
                {CategoryFilter::options()
                    .into_iter()
                    .map(|option| {
                        view! {
                            <button
                                class=move || {
                                    if filter.get() == option { "filter active" } else { "filter" }
                                }
                                on:click=move |_| set_filter.set(option)
                            >
                                {option.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="portfolio-grid">
                <Show
                    when=move || !loading.get()
                    fallback=|| (0..SKELETON_COUNT).map(|_| view! { <SkeletonCard /> }).collect_view()
                >
                    <For
                        each=move || visible.get().into_iter().enumerate()
                        key=|(index, item)| format!("{index}-{}", item.title)
                        children=move |(_, item)| view! { <PortfolioCard item=item /> }
                    />
                </Show>
            </div>
        </div>
    }
}
