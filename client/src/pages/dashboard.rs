//! Dashboard page shown after login or a completed enrollment.
//!
//! DESIGN
//! ======
//! The dashboard branches only on `payment_status`: paid accounts see
//! their weekly schedule and the mock live-session panel, unpaid accounts
//! see the upgrade prompt. Everything rendered here is static — there is
//! no real payment or video system behind it.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;

use enrollment::{AppMode, PaymentStatus, User};

use crate::components::session_card::SessionCard;
use crate::state::catalog::CatalogState;

/// Post-auth landing screen. `MainPage` only routes here with a user in
/// hand, so the unauthenticated case cannot occur.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let mode = expect_context::<RwSignal<AppMode>>();
    let catalog = expect_context::<RwSignal<CatalogState>>();

    let user = Memo::new(move |_| mode.get().user().cloned());

    // Session toggling is a signup-flow affordance; on the dashboard the
    // cards are display-only.
    let noop_toggle = Callback::new(|_id: String| ());

    view! {
        <div class="page page--dashboard">
            <nav class="dashboard__nav">
                <span class="dashboard__brand">"Lean Quran"</span>
                <button class="dashboard__signout" on:click=move |_| mode.update(AppMode::sign_out)>
                    "Sign Out"
                </button>
            </nav>

            {move || {
                user.get().map(|user| {
                    let heading = greeting(&user);
                    let plan = plan_label(user.payment_status);
                    let schedule: Vec<_> =
                        user.sessions(&catalog.get().sessions).into_iter().cloned().collect();
                    let paid = user.payment_status == PaymentStatus::Paid;
                    let next = schedule.first().map(|s| s.name.clone()).unwrap_or_default();
                    view! {
                        <header class="dashboard__header">
                            <h1 class="dashboard__greeting">{heading}</h1>
                            <span class="dashboard__plan">{plan}</span>
                        </header>

                        <Show
                            when=move || paid
                            fallback=|| {
                                view! {
                                    <section class="dashboard__upgrade">
                                        <h2 class="dashboard__upgrade-title">
                                            "Finish setting up your subscription"
                                        </h2>
                                        <p class="dashboard__upgrade-text">
                                            "Your sessions are reserved. Complete your premium \
                                             subscription to join live classes."
                                        </p>
                                        <button class="dashboard__upgrade-cta">
                                            "Complete Payment — $19/month"
                                        </button>
                                    </section>
                                }
                            }
                        >
                            <section class="dashboard__live">
                                <h2 class="dashboard__live-title">"Next Live Session"</h2>
                                <p class="dashboard__live-name">{next.clone()}</p>
                                <button class="dashboard__live-join">"Join Live Session"</button>
                            </section>
                        </Show>

                        <section class="dashboard__schedule">
                            <h2 class="dashboard__schedule-title">"Your Weekly Schedule"</h2>
                            <div class="dashboard__sessions">
                                {schedule
                                    .iter()
                                    .map(|session| {
                                        view! {
                                            <SessionCard
                                                session=session.clone()
                                                selected=true
                                                on_toggle=noop_toggle
                                            />
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </section>
                    }
                })
            }}
        </div>
    }
}

/// "Assalamu alaikum, {name}!"
fn greeting(user: &User) -> String {
    format!("Assalamu alaikum, {}!", user.name)
}

fn plan_label(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Paid => "Premium",
        PaymentStatus::Unpaid => "Payment pending",
    }
}
