//! Root application component and HTML shell.
//!
//! DESIGN
//! ======
//! The app keeps the original single-page behavior: one URL, with the
//! visible page chosen by the in-memory `AppMode` signal. The router
//! therefore carries a single root route, and `MainPage` matches on the
//! mode — a closed sum type, so a dashboard can never render without a
//! user behind it.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use enrollment::{AppMode, StaticPage};

use crate::pages::dashboard::DashboardPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::pricing::PricingPage;
use crate::pages::signup::SignupPage;
use crate::pages::videos::VideosPage;
use crate::state::catalog::CatalogState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the mode and catalog signals and sets up the single-route
/// router.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let mode = RwSignal::new(AppMode::default());
    let catalog = RwSignal::new(CatalogState::default());

    provide_context(mode);
    provide_context(catalog);

    // Refresh the catalog from the server when running in the browser.
    // The built-in sample catalog remains in place if the fetch fails.
    #[cfg(feature = "hydrate")]
    {
        catalog.update(CatalogState::begin_refresh);
        leptos::task::spawn_local(async move {
            let fetched = crate::net::api::fetch_sessions().await;
            catalog.update(|s| s.finish_refresh(fetched));
        });
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/lean-quran.css"/>
        <Title text="Lean Quran"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=MainPage/>
            </Routes>
        </Router>
    }
}

/// Picks the visible page from the application mode.
#[component]
pub fn MainPage() -> impl IntoView {
    let mode = expect_context::<RwSignal<AppMode>>();

    move || match mode.get() {
        AppMode::Browsing(StaticPage::Home) => view! { <HomePage/> }.into_any(),
        AppMode::Browsing(StaticPage::SalatVideos) => view! { <VideosPage/> }.into_any(),
        AppMode::Browsing(StaticPage::Pricing) => view! { <PricingPage/> }.into_any(),
        AppMode::SigningIn => view! { <LoginPage/> }.into_any(),
        AppMode::Enrolling(_) => view! { <SignupPage/> }.into_any(),
        AppMode::Dashboard(_) => view! { <DashboardPage/> }.into_any(),
    }
}
