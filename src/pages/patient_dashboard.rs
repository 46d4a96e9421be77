//! Patient Dashboard
//!
//! Owns the patient's visit history, the active tab and the shared visit
//! selection, and renders the sub-view for the active tab.

use dashboard_core::{DashboardTab, LoadState, Patient, SequenceNavigator, VisitRecord};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_params_map, use_query_map};

use crate::api;
use crate::components::{
    DashboardTabs, DietEditorPanel, VisitMetrics, VisitNavigator, VisitNotes, VisitSelector,
};
use crate::config::use_config;
use crate::markdown::notes_preview;
use crate::resources::DoctorResource;
use crate::store::{
    store_open_tab_id, store_reset_patient_view, store_select_tab, use_dashboard_store,
    DashboardStateStoreFields,
};

#[component]
pub fn PatientDashboard() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let config = use_config();
    let store = use_dashboard_store();
    let doctor = expect_context::<DoctorResource>();

    let (patient, set_patient) = signal(LoadState::<Patient>::Pending);
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    // Only the newest request may land when the route switches patients
    let request_generation = StoredValue::new(0u64);

    let patient_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    // New patient: forget the previous one's visit selection
    Effect::new(move |_| {
        patient_id.track();
        store_reset_patient_view(&store);
    });

    // `?tab=history` deep links pick the initial tab
    Effect::new(move |_| {
        if let Some(id) = query.read().get("tab") {
            store_open_tab_id(&store, &id);
        }
    });

    // Load patient when the id or trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let id = patient_id.get();
        request_generation.update_value(|g| *g += 1);
        let generation = request_generation.get_value();
        set_patient.set(LoadState::Pending);
        tracing::debug!(patient = %id, trigger, "loading patient");

        let config = config.clone();
        spawn_local(async move {
            let result = api::fetch_patient(&config, &id).await;
            if request_generation.get_value() != generation {
                tracing::debug!(patient = %id, "stale patient response dropped");
                return;
            }
            set_patient.set(LoadState::from_result(result));
        });
    });

    let active_tab = Signal::derive(move || store.tab().get().active());
    let on_tab_change = Callback::new(move |tab: DashboardTab| {
        if store_select_tab(&store, tab) {
            tracing::debug!(tab = tab.id(), "tab changed");
        }
    });

    view! {
        <section class="patient-dashboard">
            <header class="patient-dashboard-header">
                {move || {
                    doctor
                        .doctor()
                        .map(|d| view! { <span class="reviewer">"Reviewing as " {d.display_name()}</span> })
                }}
                <button class="reload-btn" on:click=move |_| set_reload_trigger.update(|v| *v += 1)>
                    "Reload"
                </button>
            </header>
            {move || match patient.get() {
                LoadState::Pending => view! { <p class="loading">"Loading patient..."</p> }.into_any(),
                LoadState::Errored(msg) => view! {
                    <div class="error">
                        <p>{msg}</p>
                        <button on:click=move |_| set_reload_trigger.update(|v| *v += 1)>"Try again"</button>
                    </div>
                }
                .into_any(),
                LoadState::Ready(p) => view! {
                    <PatientView patient=p active_tab=active_tab on_tab_change=on_tab_change />
                }
                .into_any(),
            }}
        </section>
    }
}

#[component]
fn PatientView(
    patient: Patient,
    active_tab: Signal<DashboardTab>,
    on_tab_change: Callback<DashboardTab>,
) -> impl IntoView {
    let store = use_dashboard_store();
    let name = patient.name.clone();
    let patient = RwSignal::new(patient);
    let visits = Signal::derive(move || patient.with(|p| p.visits.as_slice().to_vec()));

    // Shared selection; defaults to the latest visit
    let selected_index = Signal::derive(move || {
        let len = visits.with(|v| v.len());
        let requested = store.selected_visit().get().unwrap_or(len.saturating_sub(1));
        SequenceNavigator::starting_at(len, requested)
            .current_index()
            .unwrap_or_default()
    });
    let selected_visit =
        Signal::derive(move || visits.with(|v| v.get(selected_index.get()).cloned()));
    let selected_trend = Signal::derive(move || {
        patient.with(|p| p.visits.calorie_trend(selected_index.get()))
    });
    let on_select = Callback::new(move |index: usize| store.selected_visit().set(Some(index)));

    // Overview stepper owns its position and starts on the latest visit
    let latest_index = move || visits.with_untracked(|v| v.len().checked_sub(1));
    let overview_index = RwSignal::new(latest_index());
    let overview_visit = Signal::derive(move || {
        let index = overview_index.get()?;
        visits.with(|v| v.get(index).cloned())
    });
    let overview_trend = Signal::derive(move || {
        let index = overview_index.get()?;
        patient.with(|p| p.visits.calorie_trend(index))
    });
    let on_overview_move = Callback::new(move |index: usize| overview_index.set(Some(index)));
    let on_overview_change = Callback::new(move |visit: VisitRecord| {
        tracing::debug!(visit = %visit.id, date = %visit.date_label(), "overview visit changed");
    });

    let visit_id = Signal::derive(move || selected_visit.get().map(|v| v.id).unwrap_or_default());
    let on_diet_complete = Callback::new(move |_: ()| {
        on_tab_change.run(DashboardTab::Overview);
    });

    view! {
        <h2 class="patient-name">{name}</h2>
        <DashboardTabs active=active_tab on_tab_change=on_tab_change />
        <div class="dashboard-tab-content">
            {move || match active_tab.get() {
                DashboardTab::Overview => {
                    // The stepper is rebuilt on the latest visit; keep the card in step
                    overview_index.set(latest_index());
                    view! {
                        <VisitNavigator
                            visits=visits
                            on_visit_change=on_overview_change
                            on_position_change=on_overview_move
                        />
                        <VisitMetrics visit=overview_visit calorie_trend=overview_trend />
                    }
                    .into_any()
                }
                DashboardTab::History => view! {
                    <VisitSelector
                        visits=visits
                        current_index=selected_index
                        on_visit_change=on_select
                    />
                    <VisitMetrics visit=selected_visit calorie_trend=selected_trend />
                    <VisitNotes visit=selected_visit />
                }
                .into_any(),
                DashboardTab::Editor => view! {
                    <DietEditorPanel
                        patient=patient
                        visit_id=visit_id
                        on_complete=on_diet_complete
                    />
                }
                .into_any(),
                DashboardTab::Training => view! { <TrainingLog visits=visits /> }.into_any(),
            }}
        </div>
    }
}

/// Intake per visit, oldest first
#[component]
fn TrainingLog(visits: Signal<Vec<VisitRecord>>) -> impl IntoView {
    view! {
        <Show
            when=move || visits.with(|v| !v.is_empty())
            fallback=|| view! { <p class="empty">"No visits recorded yet."</p> }
        >
            <table class="training-log">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Calories"</th>
                        <th>"Weight"</th>
                        <th>"Notes"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        visits
                            .get()
                            .into_iter()
                            .map(|v| {
                                let notes = v.notes.as_deref().map(notes_preview).unwrap_or_default().to_string();
                                view! {
                                    <tr>
                                        <td>{v.date_label()}</td>
                                        <td>{format!("{:.0}", v.calorie_intake)}</td>
                                        <td>{v.weight_kg.map(|w| format!("{:.1}", w)).unwrap_or_default()}</td>
                                        <td>{notes}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </Show>
    }
}
