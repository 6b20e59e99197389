//! Landing page: hero, age groups, features, and the premium teaser.

use leptos::prelude::*;

use enrollment::{AppMode, StaticPage};

use crate::components::nav_bar::NavBar;

/// Marketing landing page. Every call to action funnels into the signup
/// wizard or the free videos.
#[component]
pub fn HomePage() -> impl IntoView {
    let mode = expect_context::<RwSignal<AppMode>>();

    view! {
        <div class="page page--home">
            <NavBar/>

            <header class="hero">
                <h1 class="hero__title">
                    "Learn Quran with " <span class="hero__accent">"Joy & Purpose"</span>
                </h1>
                <p class="hero__subtitle">
                    "Interactive Quran learning for children and adults — from first \
                     letters to advanced recitation and Hifz memorization."
                </p>
                <div class="hero__actions">
                    <button
                        class="hero__cta"
                        on:click=move |_| mode.update(AppMode::start_enrollment)
                    >
                        "Start Learning Today"
                    </button>
                    <button
                        class="hero__secondary"
                        on:click=move |_| mode.update(|m| m.browse(StaticPage::SalatVideos))
                    >
                        "Watch Free Salat Videos"
                    </button>
                </div>
            </header>

            <section class="age-groups">
                <h2 class="section__title">"Perfect for Every Age Group"</h2>
                <div class="age-groups__grid">
                    <div class="age-card age-card--children">
                        <h3 class="age-card__title">"Children & Youth"</h3>
                        <p class="age-card__subtitle">"Ages 6–17"</p>
                        <p class="age-card__text">
                            "Playful lessons, small groups, and teachers who keep \
                             young learners engaged."
                        </p>
                    </div>
                    <div class="age-card age-card--adults">
                        <h3 class="age-card__title">"Adults"</h3>
                        <p class="age-card__subtitle">"Ages 18+"</p>
                        <p class="age-card__text">
                            "Flexible evening and weekend sessions that fit around \
                             work and family."
                        </p>
                    </div>
                </div>
            </section>

            <section class="features">
                <h2 class="section__title">"Why Lean Quran"</h2>
                <div class="features__grid">
                    <div class="feature">
                        <h3 class="feature__title">"Live Sessions"</h3>
                        <p class="feature__text">"Small-group classes with real teachers, every week."</p>
                    </div>
                    <div class="feature">
                        <h3 class="feature__title">"Three Tracks"</h3>
                        <p class="feature__text">"Beginner, advanced recitation, and a full Hifz program."</p>
                    </div>
                    <div class="feature">
                        <h3 class="feature__title">"Tajweed Focus"</h3>
                        <p class="feature__text">"Pronunciation feedback built into every class."</p>
                    </div>
                </div>
            </section>

            <section class="premium-teaser">
                <h2 class="section__title">"Ready for more than free videos?"</h2>
                <p class="premium-teaser__text">
                    "Premium unlocks live classes, personalized feedback, and the \
                     full recitation library."
                </p>
                <button
                    class="premium-teaser__cta"
                    on:click=move |_| mode.update(|m| m.browse(StaticPage::Pricing))
                >
                    "See Pricing"
                </button>
            </section>
        </div>
    }
}
