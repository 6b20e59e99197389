//! Selectable card for one catalog session in the signup wizard.

#[cfg(test)]
#[path = "session_card_test.rs"]
mod session_card_test;

use chrono::NaiveTime;
use leptos::prelude::*;

use enrollment::Session;

/// A clickable session card. Toggles its id through `on_toggle`.
#[component]
pub fn SessionCard(
    session: Session,
    selected: bool,
    on_toggle: Callback<String>,
    /// Show the session's own age/level tags (used on the fallback list
    /// where sessions outside the learner's selection are shown).
    #[prop(optional)]
    show_tags: bool,
) -> impl IntoView {
    let id = session.id.clone();
    let schedule = format_schedule(&session);
    let spots = spots_label(session.spots_left);
    let tags = format!(
        "{} · {}",
        serde_variant_label(&session.age_group),
        serde_variant_label(&session.level)
    );

    view! {
        <div
            class="session-card"
            class:session-card--selected=selected
            on:click=move |_| on_toggle.run(id.clone())
        >
            <div class="session-card__body">
                <h4 class="session-card__name">{session.name.clone()}</h4>
                <p class="session-card__schedule">{schedule}</p>
                <Show when=move || show_tags>
                    <p class="session-card__tags">{tags.clone()}</p>
                </Show>
                <p class="session-card__description">{session.description.clone()}</p>
            </div>
            <div class="session-card__spots">
                <span class="session-card__spots-label">"Spots left"</span>
                <span class="session-card__spots-count">{spots}</span>
            </div>
        </div>
    }
}

/// "Monday · 14:00–15:00 GMT"
fn format_schedule(session: &Session) -> String {
    format!(
        "{} · {}–{} GMT",
        session.day.label(),
        format_time(session.start),
        format_time(session.end)
    )
}

fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn spots_label(spots_left: u32) -> String {
    spots_left.to_string()
}

/// Lowercase wire name of a unit enum variant ("child", "hifz", ...).
fn serde_variant_label<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .map(|v| v.as_str().unwrap_or_default().to_owned())
        .unwrap_or_default()
}
