//! Top navigation bar shared by the public pages.
//!
//! DESIGN
//! ======
//! Navigation mutates the shared `AppMode` signal directly — there are no
//! URLs to push, the whole app is one route.

use leptos::prelude::*;

use enrollment::{AppMode, StaticPage};

/// Brand mark plus the standard public navigation actions.
#[component]
pub fn NavBar() -> impl IntoView {
    let mode = expect_context::<RwSignal<AppMode>>();

    view! {
        <nav class="nav-bar">
            <button class="nav-bar__brand" on:click=move |_| mode.update(AppMode::go_home)>
                <span class="nav-bar__logo">"📖"</span>
                <span class="nav-bar__title">"Lean Quran"</span>
            </button>
            <div class="nav-bar__links">
                <button
                    class="nav-bar__link"
                    on:click=move |_| mode.update(|m| m.browse(StaticPage::SalatVideos))
                >
                    "Free Salat Videos"
                </button>
                <button
                    class="nav-bar__link"
                    on:click=move |_| mode.update(|m| m.browse(StaticPage::Pricing))
                >
                    "Pricing"
                </button>
                <button class="nav-bar__link" on:click=move |_| mode.update(AppMode::sign_in)>
                    "Login"
                </button>
                <button
                    class="nav-bar__cta"
                    on:click=move |_| mode.update(AppMode::start_enrollment)
                >
                    "Get Started"
                </button>
            </div>
        </nav>
    }
}
