//! Doctor Badge Component
//!
//! Header chip showing the signed-in doctor, with sign-out.

use dashboard_core::LoadState;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::use_session;
use crate::resources::DoctorResource;
use crate::store::{store_clear, use_dashboard_store};

#[component]
pub fn DoctorBadge(doctor: DoctorResource) -> impl IntoView {
    let session = use_session();
    let store = use_dashboard_store();
    let navigate = use_navigate();

    let sign_out = move |_| {
        session.sign_out();
        store_clear(&store);
        navigate("/login", Default::default());
    };

    view! {
        <div class="doctor-badge">
            {move || match doctor.load_state() {
                LoadState::Pending => {
                    view! { <span class="doctor-name loading">"Loading profile..."</span> }.into_any()
                }
                LoadState::Errored(error) => view! {
                    <span class="doctor-name error" title=error>"Profile unavailable"</span>
                    <button class="retry-btn" on:click=move |_| doctor.refetch()>"Retry"</button>
                }
                .into_any(),
                LoadState::Ready(d) => {
                    view! { <span class="doctor-name">{d.display_name()}</span> }.into_any()
                }
            }}
            <button class="sign-out-btn" on:click=sign_out>"Sign out"</button>
        </div>
    }
}
