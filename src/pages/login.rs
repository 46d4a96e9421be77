//! Login Page
//!
//! Accepts an access token, persists it and waits for the session to resolve
//! before moving on to the dashboard.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::config::use_config;
use crate::context::use_session;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let config = use_config();
    let navigate = use_navigate();
    let (token, set_token) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitted, set_submitted) = signal(false);

    // Leave as soon as an identity is available
    let default_route = config.default_route.clone();
    Effect::new(move |_| {
        if session.state.with(|s| s.is_authenticated()) {
            navigate(&default_route, Default::default());
        }
    });

    // A submitted token that resolved to nobody was rejected
    Effect::new(move |_| {
        let rejected = session.state.with(|s| !s.is_loading() && !s.is_authenticated());
        if submitted.get() && rejected {
            set_error.set(Some("That token was not accepted.".to_string()));
            set_submitted.set(false);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        match session.sign_in(&token.get()) {
            Ok(()) => set_submitted.set(true),
            Err(e) => set_error.set(Some(e)),
        }
    };

    view! {
        <div class="login-page">
            <form class="login-form" on:submit=on_submit>
                <h1>"Clinic Dashboard"</h1>
                <label>
                    "Access token"
                    <input
                        type="password"
                        autocomplete="off"
                        prop:value=move || token.get()
                        on:input=move |ev| set_token.set(event_target_value(&ev))
                    />
                </label>
                <button type="submit" disabled=move || session.state.with(|s| s.is_loading())>
                    "Sign in"
                </button>
                {move || error.get().map(|msg| view! { <p class="login-error">{msg}</p> })}
            </form>
        </div>
    }
}
