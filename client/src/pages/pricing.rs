//! Pricing page: free tier vs premium subscription.

use leptos::prelude::*;

use enrollment::{AppMode, StaticPage};

use crate::components::nav_bar::NavBar;
use crate::components::plan_card::{PlanCard, plans};

/// Two-tier pricing page. The free tier routes to the videos, the premium
/// tier into the signup wizard.
#[component]
pub fn PricingPage() -> impl IntoView {
    let mode = expect_context::<RwSignal<AppMode>>();

    let on_free = Callback::new(move |()| mode.update(|m| m.browse(StaticPage::SalatVideos)));
    let on_premium = Callback::new(move |()| mode.update(AppMode::start_enrollment));

    view! {
        <div class="page page--pricing">
            <NavBar/>

            <header class="pricing__header">
                <h1 class="pricing__title">"Simple Pricing"</h1>
                <p class="pricing__subtitle">"Start free. Upgrade when you want live teachers."</p>
            </header>

            <div class="pricing__grid">
                {plans()
                    .into_iter()
                    .map(|plan| {
                        let highlighted = plan.highlighted;
                        let on_select = if highlighted { on_premium } else { on_free };
                        let cta = if highlighted { "Start Premium" } else { "Watch Free Videos" };
                        view! { <PlanCard plan=plan on_select=on_select cta=cta/> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
