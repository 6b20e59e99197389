//! Signup wizard: age group → learning level → sessions + account.
//!
//! SYSTEM CONTEXT
//! ==============
//! This page is a thin shell over the `enrollment` flow state machine.
//! Every click dispatches an `EnrollmentEvent` through the mode signal;
//! the machine enforces step preconditions and the downstream-clearing
//! rule, and a successful submit swaps the whole app to the dashboard.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use enrollment::catalog::filter_sessions;
use enrollment::{
    AccountField, AppMode, EnrollmentEvent, EnrollmentState, Session, Step, ValidationIssue,
};

use crate::components::session_card::SessionCard;
use crate::state::catalog::CatalogState;

/// The enrollment wizard page.
#[component]
pub fn SignupPage() -> impl IntoView {
    let mode = expect_context::<RwSignal<AppMode>>();

    // Issues from the most recent rejected submit; cleared on any other
    // state change.
    let issues = RwSignal::new(Vec::<ValidationIssue>::new());

    let dispatch = Callback::new(move |event: EnrollmentEvent| {
        mode.update(|m| {
            if let enrollment::FlowAction::Rejected(list) = m.dispatch(event) {
                issues.set(list);
            } else {
                issues.set(Vec::new());
            }
        });
    });

    let flow = Memo::new(move |_| match mode.get() {
        AppMode::Enrolling(state) => state,
        _ => EnrollmentState::new(),
    });

    view! {
        <div class="page page--signup">
            <header class="signup__header">
                <h2 class="signup__title">"Join Lean Quran"</h2>
                <p class="signup__subtitle">"Start your personalized Quran learning journey"</p>
            </header>

            <div class="signup__card">
                <h3 class="signup__step-title">{move || step_title(flow.get().step)}</h3>
                {move || match flow.get().step {
                    Step::AgeGroup => view! { <AgeGroupStep dispatch=dispatch/> }.into_any(),
                    Step::Level => view! { <LevelStep dispatch=dispatch/> }.into_any(),
                    Step::SessionAndAccount => {
                        view! { <SessionAccountStep flow=flow dispatch=dispatch issues=issues/> }
                            .into_any()
                    }
                    Step::Submitted => {
                        view! { <p class="signup__done">"Account created — welcome!"</p> }
                            .into_any()
                    }
                }}
            </div>

            <div class="signup__footer">
                <p>
                    "Already have an account? "
                    <button class="signup__link" on:click=move |_| mode.update(AppMode::sign_in)>
                        "Sign in here"
                    </button>
                </p>
                <button class="signup__back-home" on:click=move |_| mode.update(AppMode::go_home)>
                    "← Back to home"
                </button>
            </div>
        </div>
    }
}

/// Step 1: child or adult.
#[component]
fn AgeGroupStep(dispatch: Callback<EnrollmentEvent>) -> impl IntoView {
    use enrollment::AgeGroup;

    view! {
        <div class="signup__choices signup__choices--age">
            <button
                class="choice-card choice-card--children"
                on:click=move |_| {
                    dispatch.run(EnrollmentEvent::SelectAgeGroup { age_group: AgeGroup::Child })
                }
            >
                <h4 class="choice-card__title">"Children & Youth"</h4>
                <p class="choice-card__subtitle">"Ages 6–17"</p>
            </button>
            <button
                class="choice-card choice-card--adults"
                on:click=move |_| {
                    dispatch.run(EnrollmentEvent::SelectAgeGroup { age_group: AgeGroup::Adult })
                }
            >
                <h4 class="choice-card__title">"Adults"</h4>
                <p class="choice-card__subtitle">"Ages 18+"</p>
            </button>
        </div>
    }
}

/// Step 2: beginner, advanced, or hifz.
#[component]
fn LevelStep(dispatch: Callback<EnrollmentEvent>) -> impl IntoView {
    use enrollment::LearningLevel;

    let level_button = move |level: LearningLevel, title: &'static str, text: &'static str| {
        view! {
            <button
                class="choice-card"
                on:click=move |_| dispatch.run(EnrollmentEvent::SelectLevel { level })
            >
                <h4 class="choice-card__title">{title}</h4>
                <p class="choice-card__subtitle">{text}</p>
            </button>
        }
    };

    view! {
        <div class="signup__choices signup__choices--level">
            {level_button(LearningLevel::Beginner, "Beginner", "Starting with Quran basics")}
            {level_button(LearningLevel::Advanced, "Advanced", "Recitation and tajweed refinement")}
            {level_button(LearningLevel::Hifz, "Hifz", "Memorization program")}
        </div>
        <button
            class="signup__back"
            on:click=move |_| dispatch.run(EnrollmentEvent::BackToAgeGroup)
        >
            "← Back to age selection"
        </button>
    }
}

/// Step 3: pick sessions and fill in account details.
#[component]
fn SessionAccountStep(
    flow: Memo<EnrollmentState>,
    dispatch: Callback<EnrollmentEvent>,
    issues: RwSignal<Vec<ValidationIssue>>,
) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let listing = Memo::new(move |_| wizard_sessions(&catalog.get().sessions, &flow.get()));

    let on_toggle =
        Callback::new(move |id: String| dispatch.run(EnrollmentEvent::ToggleSession { id }));

    let account_input = move |field: AccountField,
                              label: &'static str,
                              input_type: &'static str,
                              placeholder: &'static str| {
        view! {
            <label class="account-form__label">{label}</label>
            <input
                class="account-form__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || account_value(&flow.get(), field)
                on:input=move |ev| {
                    dispatch.run(EnrollmentEvent::EditAccount {
                        field,
                        value: event_target_value(&ev),
                    })
                }
            />
        }
    };

    view! {
        <p class="signup__hint">
            "Choose the sessions that fit your schedule. Times shown in GMT."
        </p>

        <Show when=move || listing.get().fallback>
            <p class="signup__fallback-note">
                "No sessions match that age group and level yet — here is the full \
                 schedule instead."
            </p>
        </Show>

        <div class="signup__sessions">
            {move || {
                let listing = listing.get();
                let selected_ids = flow.get().draft.selected_session_ids.clone();
                listing
                    .sessions
                    .into_iter()
                    .map(|session| {
                        let selected = selected_ids.contains(&session.id);
                        view! {
                            <SessionCard
                                session=session
                                selected=selected
                                on_toggle=on_toggle
                                show_tags=listing.fallback
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>

        <div class="account-form">
            <h4 class="account-form__title">"Account Details"</h4>
            <div class="account-form__grid">
                {account_input(AccountField::Name, "Full Name", "text", "Enter your full name")}
                {account_input(AccountField::Email, "Email", "email", "your@email.com")}
                {account_input(AccountField::Password, "Password", "password", "••••••••")}
                {account_input(AccountField::DateOfBirth, "Date of Birth", "date", "")}
                {account_input(AccountField::Country, "Country", "text", "Country")}
                {account_input(AccountField::CountryCode, "Country Code", "text", "+44")}
                {account_input(AccountField::PhoneNumber, "Phone Number", "tel", "Phone number")}
            </div>
        </div>

        <Show when=move || !issues.get().is_empty()>
            <ul class="signup__issues">
                {move || {
                    issues
                        .get()
                        .into_iter()
                        .map(|issue| view! { <li class="signup__issue">{issue.to_string()}</li> })
                        .collect_view()
                }}
            </ul>
        </Show>

        <div class="signup__actions">
            <button
                class="signup__back"
                on:click=move |_| dispatch.run(EnrollmentEvent::BackToLevel)
            >
                "← Back to level selection"
            </button>
            <button
                class="signup__submit"
                disabled=move || !flow.get().can_submit()
                on:click=move |_| dispatch.run(EnrollmentEvent::Submit)
            >
                "Create Account & Subscribe"
            </button>
        </div>
    }
}

/// Heading for the current wizard step.
fn step_title(step: Step) -> &'static str {
    match step {
        Step::AgeGroup => "Select Your Age Group",
        Step::Level => "Choose Your Learning Level",
        Step::SessionAndAccount => "Select Your Sessions",
        Step::Submitted => "All Set",
    }
}

/// Sessions shown in the wizard plus whether the full-catalog fallback
/// kicked in (no session matched the learner's age group and level).
#[derive(Clone, Debug, PartialEq, Eq)]
struct SessionListing {
    sessions: Vec<Session>,
    fallback: bool,
}

fn wizard_sessions(catalog: &[Session], state: &EnrollmentState) -> SessionListing {
    let (Some(age_group), Some(level)) = (state.draft.age_group, state.draft.learning_level)
    else {
        return SessionListing { sessions: Vec::new(), fallback: false };
    };
    let strict = filter_sessions(catalog, Some(age_group), Some(level));
    if strict.is_empty() {
        SessionListing { sessions: catalog.to_vec(), fallback: true }
    } else {
        SessionListing { sessions: strict.into_iter().cloned().collect(), fallback: false }
    }
}

/// Current value of one account field, for input binding.
fn account_value(state: &EnrollmentState, field: AccountField) -> String {
    let account = &state.draft.account;
    match field {
        AccountField::Name => account.name.clone(),
        AccountField::Email => account.email.clone(),
        AccountField::Password => account.password.clone(),
        AccountField::DateOfBirth => account.date_of_birth.clone(),
        AccountField::Country => account.country.clone(),
        AccountField::CountryCode => account.country_code.clone(),
        AccountField::PhoneNumber => account.phone_number.clone(),
    }
}
