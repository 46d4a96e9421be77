//! Patient List Page
//!
//! Default dashboard route: the signed-in doctor's patients.

use dashboard_core::LoadState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::api;
use crate::config::use_config;
use crate::store::{use_dashboard_store, DashboardStateStoreFields};

#[component]
pub fn PatientListPage() -> impl IntoView {
    let config = use_config();
    let store = use_dashboard_store();
    let (status, set_status) = signal(LoadState::<()>::Pending);

    // Load once per visit to the page
    Effect::new(move |_| {
        let config = config.clone();
        spawn_local(async move {
            match api::list_patients(&config).await {
                Ok(loaded) => {
                    tracing::debug!("Loaded {} patients", loaded.len());
                    *store.patients().write() = loaded;
                    set_status.set(LoadState::Ready(()));
                }
                Err(e) => set_status.set(LoadState::Errored(e.to_string())),
            }
        });
    });

    view! {
        <section class="patient-list">
            <h2>"Patients"</h2>
            {move || match status.get() {
                LoadState::Pending => view! { <p class="loading">"Loading patients..."</p> }.into_any(),
                LoadState::Errored(msg) => view! { <p class="error">{msg}</p> }.into_any(),
                LoadState::Ready(()) => view! {
                    <ul>
                        <For
                            each=move || store.patients().get()
                            key=|p| p.id.clone()
                            children=move |p| {
                                let last = p
                                    .last_visit_date
                                    .map(|d| d.format("%Y-%m-%d").to_string())
                                    .unwrap_or_else(|| "no visits".to_string());
                                view! {
                                    <li class="patient-row">
                                        <A href=format!("/patients/{}", p.id)>{p.name.clone()}</A>
                                        <span class="patient-last-visit">{last}</span>
                                    </li>
                                }
                            }
                        />
                    </ul>
                }
                .into_any(),
            }}
        </section>
    }
}
