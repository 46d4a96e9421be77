//! Dashboard Tabs Component
//!
//! Tab bar for switching between the patient views.

use dashboard_core::DashboardTab;
use leptos::prelude::*;

#[component]
pub fn DashboardTabs(
    #[prop(into)] active: Signal<DashboardTab>,
    #[prop(into)] on_tab_change: Callback<DashboardTab>,
) -> impl IntoView {
    view! {
        <div class="dashboard-tab-bar">
            {DashboardTab::ALL
                .into_iter()
                .map(|tab| {
                    let is_active = move || active.get() == tab;
                    view! {
                        <button
                            class=move || if is_active() { "dashboard-tab active" } else { "dashboard-tab" }
                            data-tab=tab.id()
                            on:click=move |_| on_tab_change.run(tab)
                        >
                            {tab.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
