//! Visit Selector Component
//!
//! Controlled variant of the visit stepper: the parent owns the index and
//! receives the new index on every move.

use dashboard_core::{SequenceNavigator, Transition, VisitRecord};
use leptos::prelude::*;

#[component]
pub fn VisitSelector(
    #[prop(into)] visits: Signal<Vec<VisitRecord>>,
    #[prop(into)] current_index: Signal<usize>,
    #[prop(into)] on_visit_change: Callback<usize>,
) -> impl IntoView {
    let nav = Memo::new(move |_| {
        SequenceNavigator::starting_at(visits.with(|v| v.len()), current_index.get())
    });

    let step = move |transition: fn(&mut SequenceNavigator) -> Transition| {
        let mut next = nav.get_untracked();
        if let Some(index) = transition(&mut next).moved_to() {
            on_visit_change.run(index);
        }
    };

    let jump = move |index: usize| {
        let mut next = nav.get_untracked();
        if let Some(index) = next.go_to(index).moved_to() {
            on_visit_change.run(index);
        }
    };

    view! {
        <Show when=move || !nav.get().is_empty()>
            <div class="visit-selector">
                <button
                    class="visit-nav-btn prev"
                    disabled=move || !nav.get().has_previous()
                    on:click=move |_| step(SequenceNavigator::go_previous)
                >
                    "‹"
                </button>
                <select
                    class="visit-select"
                    on:change=move |ev| {
                        if let Ok(index) = event_target_value(&ev).parse::<usize>() {
                            jump(index);
                        }
                    }
                >
                    {move || {
                        visits
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, visit)| {
                                view! {
                                    <option
                                        value=i.to_string()
                                        prop:selected=move || is_selected(&nav.get(), i)
                                    >
                                        {visit.date_label()}
                                    </option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
                <span class="visit-nav-position">
                    {move || nav.get().position_label().unwrap_or_default()}
                </span>
                <button
                    class="visit-nav-btn next"
                    disabled=move || !nav.get().has_next()
                    on:click=move |_| step(SequenceNavigator::go_next)
                >
                    "›"
                </button>
            </div>
        </Show>
    }
}

/// The option for `index` is the one the navigator points at
fn is_selected(nav: &SequenceNavigator, index: usize) -> bool {
    nav.current_index() == Some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_visit_option_selected() {
        let nav = SequenceNavigator::starting_at(3, 2);
        let selected: Vec<_> = (0..3).filter(|&i| is_selected(&nav, i)).collect();
        assert_eq!(selected, vec![2]);
        assert_eq!(nav.position_label().as_deref(), Some("Visit 3 / 3"));
    }

    #[test]
    fn test_out_of_range_index_selects_clamped_option() {
        let nav = SequenceNavigator::starting_at(3, 9);
        assert!(is_selected(&nav, 2));
        assert!(!is_selected(&nav, 0));
        assert!(!is_selected(&SequenceNavigator::starting_at(0, 0), 0));
    }
}
