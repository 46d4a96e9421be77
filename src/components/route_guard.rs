//! Route Guard Components
//!
//! Wrap protected pages. The decision comes from `dashboard_core::guard` and
//! is re-evaluated whenever the session changes; redirects go through the
//! router. These guards only shape the UI, the API still checks the token.

use dashboard_core::{evaluate, GuardDecision, GuardVariant};
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::context::use_session;

/// Renders children for any signed-in doctor, otherwise redirects to /login
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardVariant::Authenticated, children)
}

/// Renders children for admins only, otherwise redirects to /dashboard
#[component]
pub fn AdminRoute(children: ChildrenFn) -> impl IntoView {
    guarded(GuardVariant::AdminOnly, children)
}

fn guarded(variant: GuardVariant, children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let decision = Memo::new(move |_| session.state.with(|s| evaluate(variant, s)));

    move || match decision.get() {
        GuardDecision::Checking => view! {
            <div class="route-guard-checking">
                <span class="spinner"></span>
                "Checking session..."
            </div>
        }
        .into_any(),
        GuardDecision::Redirect(target) => {
            tracing::debug!(?variant, to = target.path(), "guard redirect");
            view! { <Redirect path=target.path() /> }.into_any()
        }
        GuardDecision::Render => children().into_any(),
    }
}
