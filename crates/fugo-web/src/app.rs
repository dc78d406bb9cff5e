//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::components::{Footer, Navbar};
use crate::config::WebConfig;
use crate::pages::{AboutPage, HomePage, PortfolioPage, TeamPage};

/// Root application component
#[component]
pub fn App(config: WebConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <Navbar />
            <main class="app">
                <Routes fallback=|| view! { <p class="not-found">"Page not found"</p> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/portfolio") view=PortfolioPage />
                    <Route path=path!("/team") view=TeamPage />
                </Routes>
            </main>
            <Footer />
        </Router>
    }
}
