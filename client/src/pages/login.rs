//! Login page.
//!
//! The sign-in path is a stub carried over from the original product demo:
//! any email/password pair succeeds and fabricates a paid account. Only
//! presence of both fields is checked.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use enrollment::AppMode;
use enrollment::user::login_stub;

/// Email + password form. Both fields required, nothing else verified.
#[component]
pub fn LoginPage() -> impl IntoView {
    let mode = expect_context::<RwSignal<AppMode>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_login_input(&email.get(), &password.get()) {
            Ok((email_value, password_value)) => {
                let user = login_stub(&email_value, &password_value);
                mode.update(|m| m.complete_login(user));
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="page page--login">
            <div class="login-card">
                <h2 class="login-card__title">"Welcome Back"</h2>
                <p class="login-card__subtitle">"Continue your Quran learning journey"</p>
                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">"Email"</label>
                    <input
                        class="login-form__input"
                        type="email"
                        placeholder="your@email.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <label class="login-form__label">"Password"</label>
                    <input
                        class="login-form__input"
                        type="password"
                        placeholder="••••••••"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-form__submit" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-card__message">{move || info.get()}</p>
                </Show>
                <div class="login-card__footer">
                    <p>
                        "Don't have an account? "
                        <button
                            class="login-card__link"
                            on:click=move |_| mode.update(AppMode::start_enrollment)
                        >
                            "Sign up here"
                        </button>
                    </p>
                    <button
                        class="login-card__back"
                        on:click=move |_| mode.update(AppMode::go_home)
                    >
                        "← Back to home"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Trim both fields and require each to be non-empty.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    let password = password.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}
