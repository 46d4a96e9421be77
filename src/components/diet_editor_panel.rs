//! Diet Editor Panel
//!
//! Feeds the diet-plan form from the patient's `latest_visit` entry, which is
//! independent of whatever visit the navigator is showing.

use dashboard_core::{DietEditorInput, Patient};
use leptos::prelude::*;

#[component]
pub fn DietEditorPanel(
    #[prop(into)] patient: Signal<Patient>,
    /// Visit the plan is attached to; empty when none
    #[prop(optional, into)]
    visit_id: Option<Signal<String>>,
    /// Invoked by the form once an assignment completes; passed through untouched
    #[prop(optional, into)]
    on_complete: Option<Callback<()>>,
) -> impl IntoView {
    let input = Memo::new(move |_| {
        let visit_id = visit_id.map(|id| id.get());
        patient.with(|p| DietEditorInput::from_patient(p, visit_id.as_deref()))
    });

    view! {
        <section class="diet-editor-panel">
            <h3>"Diet Plan"</h3>
            <DietPlanForm input=input on_complete=on_complete />
        </section>
    }
}

/// Plan form: starts from the latest recorded intake
#[component]
fn DietPlanForm(
    #[prop(into)] input: Signal<DietEditorInput>,
    on_complete: Option<Callback<()>>,
) -> impl IntoView {
    let (target, set_target) = signal(String::new());

    // Re-seed the target whenever the baseline changes
    Effect::new(move |_| {
        let baseline = input.with(|i| i.calorie_intake);
        set_target.set(baseline.map(|kcal| format!("{:.0}", kcal)).unwrap_or_default());
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Ok(kcal) = target.get().trim().parse::<f64>() else {
            tracing::warn!("diet plan target is not a number");
            return;
        };
        input.with_untracked(|i| {
            tracing::info!(patient = %i.patient_id, visit = %i.visit_id, kcal, "diet plan assigned");
        });
        if let Some(callback) = on_complete {
            callback.run(());
        }
    };

    view! {
        <form class="diet-plan-form" on:submit=submit>
            <p class="diet-baseline">
                "Latest intake: "
                {move || {
                    input
                        .with(|i| i.calorie_intake)
                        .map(|kcal| format!("{:.0} kcal", kcal))
                        .unwrap_or_else(|| "no recent visit".to_string())
                }}
            </p>
            <label>
                "Daily target (kcal)"
                <input
                    type="number"
                    min="0"
                    prop:value=move || target.get()
                    on:input=move |ev| set_target.set(event_target_value(&ev))
                />
            </label>
            <button type="submit">"Assign plan"</button>
        </form>
    }
}
