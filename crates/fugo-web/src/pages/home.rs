//! Home Page

use fugo_content::copy::{ABOUT_BLURB, HERO_TITLES, SERVICES, TESTIMONIALS};
use fugo_content::{CancelToken, TeamMember};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::api;
use crate::components::{ServiceCard, SkeletonCard, TestimonialCard};
use crate::config::WebConfig;

const HERO_IMAGES: [&str; 2] = [
    "https://images.pexels.com/photos/3183197/pexels-photo-3183197.jpeg",
    "https://images.pexels.com/photos/2678468/pexels-photo-2678468.jpeg",
];

#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<WebConfig>();
    let (members, set_members) = signal(Vec::<TeamMember>::new());
    let (loading, set_loading) = signal(true);

    let token = CancelToken::new();
    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    let loader_config = config.clone();
    leptos::task::spawn_local(async move {
        let outcome = api::load_team(&loader_config, api::HOME_TEAM_SIZE, &token).await;
        if outcome.is_cancelled() {
            return;
        }
        set_members.set(outcome.into_items());
        set_loading.set(false);
    });

    let avatars = move || {
        members
            .get()
            .into_iter()
            .enumerate()
            .map(|(index, member)| {
                view! {
                    <img
                        class="avatar fade-in"
                        src=config.image_src(&member.picture_url)
                        alt=format!("Team Member {}", index + 1)
                        loading="lazy"
                    />
                }
            })
            .collect_view()
    };

    view! {
        <div class="home">
            <section class="hero-split">
                {HERO_TITLES
                    .iter()
                    .zip(HERO_IMAGES)
                    .map(|(title, image)| {
                        view! {
                            <div class="hero-half" style=format!("background-image: url({image})")>
                                <div class="hero-shade"></div>
                                <div class="hero-text">
                                    <h2>"WE ARE"</h2>
                                    <h1>{*title}</h1>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>

            <section class="about-preview">
                <div class="fade-in">
                    <h2>"About Us"</h2>
                    <p>{ABOUT_BLURB}</p>
                    <A href="/about">"Learn More"</A>
                </div>
                <img src="/img/fugo2.png" alt="About Us" loading="lazy" />
            </section>

            <section id="services" class="services">
                <h2 class="fade-in-up">"Our Services"</h2>
                <div class="service-grid">
                    {SERVICES
                        .into_iter()
                        .enumerate()
                        .map(|(index, service)| view! { <ServiceCard service=service index=index /> })
                        .collect_view()}
                </div>
            </section>

            <section class="team-preview">
                <h2>"With a talented " <A href="/team">"Team"</A></h2>
                <div class="avatar-grid">
                    <Show
                        when=move || loading.get()
                        fallback=avatars
                    >
                        {(0..api::HOME_TEAM_SIZE)
                            .map(|_| view! { <SkeletonCard kind="avatar" /> })
                            .collect_view()}
                    </Show>
                </div>
            </section>

            <section id="testimonials" class="testimonials">
                <h2>"What Our Clients Say"</h2>
                <div class="testimonial-grid">
                    {TESTIMONIALS
                        .into_iter()
                        .enumerate()
                        .map(|(index, testimonial)| {
                            view! { <TestimonialCard testimonial=testimonial index=index /> }
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
