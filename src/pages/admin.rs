//! Admin Page
//!
//! Admin-only view of the signed-in profile with a manual refresh.

use dashboard_core::LoadState;
use leptos::prelude::*;

use crate::resources::DoctorResource;

#[component]
pub fn AdminPage() -> impl IntoView {
    let doctor = expect_context::<DoctorResource>();

    view! {
        <section class="admin-page">
            <h2>"Administration"</h2>
            <div class="admin-profile">
                {move || match doctor.load_state() {
                    LoadState::Errored(error) => view! { <p class="error">{error}</p> }.into_any(),
                    LoadState::Ready(d) => view! {
                        <dl>
                            <dt>"Name"</dt>
                            <dd>{d.display_name()}</dd>
                            <dt>"Email"</dt>
                            <dd>{d.email.unwrap_or_default()}</dd>
                            <dt>"Specialty"</dt>
                            <dd>{d.specialty.unwrap_or_default()}</dd>
                        </dl>
                    }
                    .into_any(),
                    LoadState::Pending => view! { <p class="loading">"Loading profile..."</p> }.into_any(),
                }}
            </div>
            <button
                class="refresh-btn"
                disabled=move || doctor.is_loading()
                on:click=move |_| doctor.refetch()
            >
                "Refresh profile"
            </button>
        </section>
    }
}
