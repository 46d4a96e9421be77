//! Visit Navigator Component
//!
//! Prev/next stepper that owns its position. Starts on the most recent visit
//! and reports the newly shown visit to the parent.

use dashboard_core::{SequenceNavigator, Transition, VisitRecord};
use leptos::prelude::*;

/// Stepper over a patient's visits. Renders nothing for an empty history.
#[component]
pub fn VisitNavigator(
    #[prop(into)] visits: Signal<Vec<VisitRecord>>,
    #[prop(optional, into)] on_visit_change: Option<Callback<VisitRecord>>,
    /// Position after each move, for callers that need more than the record
    #[prop(optional, into)]
    on_position_change: Option<Callback<usize>>,
) -> impl IntoView {
    let nav = RwSignal::new(SequenceNavigator::starting_at_latest(
        visits.with_untracked(|v| v.len()),
    ));

    // History is replaced wholesale on reload; keep the position in range.
    Effect::new(move |_| {
        let len = visits.with(|v| v.len());
        nav.update(|n| n.resize(len));
    });

    let step = move |transition: fn(&mut SequenceNavigator) -> Transition| {
        let moved = nav.try_update(transition).and_then(|t| t.moved_to());
        let Some(index) = moved else { return };
        if let Some(callback) = on_position_change {
            callback.run(index);
        }
        if let (Some(callback), Some(visit)) =
            (on_visit_change, visits.with_untracked(|v| v.get(index).cloned()))
        {
            callback.run(visit);
        }
    };

    let current = move || visits.with(|v| nav.with(|n| n.current(v).cloned()));

    view! {
        <Show when=move || nav.with(|n| !n.is_empty())>
            <div class="visit-navigator">
                <button
                    class="visit-nav-btn prev"
                    disabled=move || !nav.with(|n| n.has_previous())
                    on:click=move |_| step(SequenceNavigator::go_previous)
                >
                    "‹"
                </button>
                <div class="visit-nav-label">
                    <span class="visit-nav-position">
                        {move || nav.with(|n| n.position_label()).unwrap_or_default()}
                    </span>
                    <span class="visit-nav-date">
                        {move || current().map(|v| v.date_label()).unwrap_or_default()}
                    </span>
                </div>
                <button
                    class="visit-nav-btn next"
                    disabled=move || !nav.with(|n| n.has_next())
                    on:click=move |_| step(SequenceNavigator::go_next)
                >
                    "›"
                </button>
            </div>
        </Show>
    }
}
