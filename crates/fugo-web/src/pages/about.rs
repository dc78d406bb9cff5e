//! About Page

use fugo_content::copy::{
    AboutTab, CULTURE, CULTURE_CLOSING, HISTORY, LEADERSHIP, OFFICE_PLACEHOLDER, OFFICES, VALUES,
};
use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    let (active, set_active) = signal(AboutTab::default());
    let (menu_open, set_menu_open) = signal(false);

    let select = move |tab: AboutTab| {
        set_active.set(tab);
        set_menu_open.set(false);
    };

    view! {
        <div class="about">
            <aside class="about-sidebar">
                <button
                    class="menu-toggle"
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || active.get().label()}
                </button>
                <ul class=move || if menu_open.get() { "tab-list open" } else { "tab-list" }>
                    {AboutTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <li>
                                    <button
                                        class=move || if active.get() == tab { "tab active" } else { "tab" }
                                        on:click=move |_| select(tab)
                                    >
                                        {tab.label()}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </aside>

            <section class="about-content">
                <h1>{move || active.get().label()}</h1>
                {move || match active.get() {
                    AboutTab::History => view! { <History /> }.into_any(),
                    AboutTab::Team => view! { <Leadership /> }.into_any(),
                    AboutTab::Culture => view! { <Culture /> }.into_any(),
                }}
            </section>
        </div>
    }
}

#[component]
fn History() -> impl IntoView {
    view! {
        <div class="history fade-in">
            {HISTORY.iter().map(|paragraph| view! { <p>{*paragraph}</p> }).collect_view()}
            <h3>"Our Offices"</h3>
            <div class="office-grid">
                {OFFICES
                    .iter()
                    .map(|office| {
                        view! {
                            <figure class="office">
                                <img src=OFFICE_PLACEHOLDER alt=*office loading="lazy" />
                                <figcaption>{*office}</figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Leadership() -> impl IntoView {
    view! {
        <div class="leadership-grid fade-in">
            {LEADERSHIP
                .iter()
                .map(|leader| {
                    view! {
                        <div class="card leader">
                            <img src=leader.image alt=leader.name loading="lazy" />
                            <h3>{leader.name}</h3>
                            <p class="accent">{leader.title}</p>
                            <p>{leader.description}</p>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Culture() -> impl IntoView {
    view! {
        <div class="culture fade-in">
            <p>{CULTURE}</p>
            <h3>"Our Values"</h3>
            <ul class="values">
                {VALUES.iter().map(|value| view! { <li>{*value}</li> }).collect_view()}
            </ul>
            <p>{CULTURE_CLOSING}</p>
        </div>
    }
}
