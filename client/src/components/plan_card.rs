//! Pricing plan card.

#[cfg(test)]
#[path = "plan_card_test.rs"]
mod plan_card_test;

use leptos::prelude::*;

/// One pricing tier. Static marketing data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub tagline: &'static str,
    pub features: Vec<&'static str>,
    pub highlighted: bool,
}

/// The two tiers from the original site: free videos vs the paid classes.
#[must_use]
pub fn plans() -> Vec<Plan> {
    vec![
        Plan {
            name: "Free",
            price: "$0",
            tagline: "Learn the daily prayers at your own pace",
            features: vec![
                "All Salat instruction videos",
                "Step-by-step prayer guides",
                "No account required",
            ],
            highlighted: false,
        },
        Plan {
            name: "Premium",
            price: "$19/month",
            tagline: "Live classes with real teachers",
            features: vec![
                "Live Quran reading sessions",
                "Personalized feedback",
                "Hundreds of recitation videos",
                "Direct teacher feedback",
            ],
            highlighted: true,
        },
    ]
}

/// A pricing card; the call-to-action fires `on_select`.
#[component]
pub fn PlanCard(plan: Plan, on_select: Callback<()>, cta: &'static str) -> impl IntoView {
    view! {
        <div class="plan-card" class:plan-card--highlighted=plan.highlighted>
            <h3 class="plan-card__name">{plan.name}</h3>
            <p class="plan-card__price">{plan.price}</p>
            <p class="plan-card__tagline">{plan.tagline}</p>
            <ul class="plan-card__features">
                {plan
                    .features
                    .iter()
                    .map(|f| view! { <li class="plan-card__feature">{*f}</li> })
                    .collect_view()}
            </ul>
            <button class="plan-card__cta" on:click=move |_| on_select.run(())>
                {cta}
            </button>
        </div>
    }
}
