//! Free Salat videos page with the premium upsell.

use leptos::prelude::*;

use enrollment::AppMode;

use crate::components::nav_bar::NavBar;
use crate::components::video_card::{VideoCard, free_videos};

/// Grid of the free instructional videos. Completely free tier; the only
/// action besides watching is the upgrade funnel.
#[component]
pub fn VideosPage() -> impl IntoView {
    let mode = expect_context::<RwSignal<AppMode>>();

    view! {
        <div class="page page--videos">
            <NavBar/>

            <header class="videos__header">
                <h1 class="videos__title">"Free Salat Videos 🕌"</h1>
                <p class="videos__subtitle">
                    "Learn the proper way to perform your daily prayers — completely free."
                </p>
            </header>

            <div class="videos__grid">
                {free_videos()
                    .into_iter()
                    .map(|video| view! { <VideoCard video=video/> })
                    .collect_view()}
            </div>

            <section class="videos__upsell">
                <h2 class="videos__upsell-title">"Want More? Upgrade to Premium! ✨"</h2>
                <p class="videos__upsell-text">
                    "Get access to live Quran reading sessions, personalized feedback, \
                     and hundreds of recitation videos."
                </p>
                <button
                    class="videos__upsell-cta"
                    on:click=move |_| mode.update(AppMode::start_enrollment)
                >
                    "Upgrade to Premium — $19/month"
                </button>
            </section>
        </div>
    }
}
