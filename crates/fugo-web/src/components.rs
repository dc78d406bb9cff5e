//! UI Components

use chrono::Datelike;
use fugo_content::PortfolioItem;
use fugo_content::copy::{COMPANY_NAME, Service, Testimonial};
use fugo_content::identity::RosterEntry;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::WebConfig;

/// Top navigation with a collapsible menu on small screens
#[component]
pub fn Navbar() -> impl IntoView {
    let (open, set_open) = signal(false);
    let close = move |_: leptos::ev::MouseEvent| set_open.set(false);

    view! {
        <nav class="navbar">
            <span class="brand">
                <A href="/">"FUGO CREATIVE"</A>
            </span>
            <button
                class="menu-toggle"
                aria-label="Toggle navigation menu"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "☰"
            </button>
            <ul class=move || if open.get() { "nav-links open" } else { "nav-links" }>
                <li class="dropdown">
                    <span>"Company"</span>
                    <ul class="submenu">
                        <li on:click=close><A href="/about">"About"</A></li>
                        <li on:click=close><A href="/team">"Meet the Team"</A></li>
                    </ul>
                </li>
                <li on:click=close><A href="/portfolio">"Portfolio"</A></li>
                <li on:click=close><a href="/#services">"Service"</a></li>
                <li on:click=close><a href="/#testimonials">"Client"</a></li>
            </ul>
        </nav>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let year = chrono::Utc::now().year();

    view! {
        <footer class="footer">
            <p>{format!("© {year} {COMPANY_NAME}. All rights reserved.")}</p>
        </footer>
    }
}

/// Full-width banner used at the top of inner pages
#[component]
pub fn PageHero(title: &'static str, accent: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <header class="page-hero">
            <h1 class="fade-in-up">{title} " " <span class="accent">{accent}</span></h1>
            <p class="fade-in-up delayed">{subtitle}</p>
        </header>
    }
}

#[component]
pub fn ServiceCard(service: Service, index: usize) -> impl IntoView {
    view! {
        <div class="card service-card fade-in-up" style=format!("animation-delay: {}ms", index * 100)>
            <h3>{service.title()}</h3>
            <p>{service.description}</p>
        </div>
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial, index: usize) -> impl IntoView {
    view! {
        <blockquote class="card testimonial fade-in-up" style=format!("animation-delay: {}ms", index * 200)>
            <p class="quote">"\u{201c}" {testimonial.quote} "\u{201d}"</p>
            <footer>{format!("- {}, {}", testimonial.author, testimonial.role)}</footer>
        </blockquote>
    }
}

#[component]
pub fn PortfolioCard(item: PortfolioItem) -> impl IntoView {
    let config = expect_context::<WebConfig>();
    let src = config.image_src(&item.image_url);

    view! {
        <article class="portfolio-card fade-in-up">
            <div class="portfolio-image">
                <img src=src alt=item.title.clone() loading="lazy" />
            </div>
            <div class="portfolio-body">
                <span class="badge">{item.service_category}</span>
                <h3>{item.title}</h3>
                <p class="line-clamp">{item.description}</p>
            </div>
        </article>
    }
}

/// Grey placeholder shown while a fetch is in flight
#[component]
pub fn SkeletonCard(#[prop(default = "skeleton")] kind: &'static str) -> impl IntoView {
    view! { <div class=format!("{kind} pulse")></div> }
}

/// Team photo with an overlay of name, role and contact details
#[component]
pub fn TeamTile(entry: RosterEntry, index: usize) -> impl IntoView {
    let config = expect_context::<WebConfig>();
    let name = entry.member.full_name();
    let src = config.image_src(&entry.member.picture_url);

    view! {
        <div class="team-tile fade-in-up" style=format!("animation-delay: {}ms", index * 100)>
            <img src=src alt=name.clone() class="grayscale" />
            <div class="team-overlay">
                <h3>{name}</h3>
                <p class="accent">{entry.role}</p>
                <p class="contact">{entry.contact_email}</p>
                <p class="contact">{entry.contact_phone}</p>
            </div>
        </div>
    }
}
