//! Visit Details
//!
//! Read-only cards for a single visit.

use dashboard_core::VisitRecord;
use leptos::prelude::*;

use crate::markdown::render_notes;

/// Metrics card for one visit, with the calorie change since the previous one
#[component]
pub fn VisitMetrics(
    #[prop(into)] visit: Signal<Option<VisitRecord>>,
    #[prop(into)] calorie_trend: Signal<Option<f64>>,
) -> impl IntoView {
    view! {
        {move || {
            visit
                .get()
                .map(|v| {
                    view! {
                        <div class="visit-metrics">
                            <div class="metric">
                                <span class="metric-label">"Date"</span>
                                <span class="metric-value">{v.date_label()}</span>
                            </div>
                            <div class="metric">
                                <span class="metric-label">"Calories"</span>
                                <span class="metric-value">{format!("{:.0} kcal", v.calorie_intake)}</span>
                                <span class="metric-trend">{move || trend_text(calorie_trend.get())}</span>
                            </div>
                            <div class="metric">
                                <span class="metric-label">"Weight"</span>
                                <span class="metric-value">
                                    {v.weight_kg.map(|w| format!("{:.1} kg", w)).unwrap_or_else(|| "—".to_string())}
                                </span>
                            </div>
                            <div class="metric">
                                <span class="metric-label">"Blood pressure"</span>
                                <span class="metric-value">{v.blood_pressure.clone().unwrap_or_else(|| "—".to_string())}</span>
                            </div>
                        </div>
                    }
                })
        }}
    }
}

/// Rendered Markdown notes of one visit
#[component]
pub fn VisitNotes(#[prop(into)] visit: Signal<Option<VisitRecord>>) -> impl IntoView {
    let html = move || {
        visit
            .get()
            .and_then(|v| v.notes)
            .map(|notes| render_notes(&notes))
            .unwrap_or_default()
    };

    view! {
        <Show
            when=move || visit.with(|v| v.as_ref().is_some_and(|v| v.notes.is_some()))
            fallback=|| view! { <p class="visit-notes empty">"No notes for this visit."</p> }
        >
            <div class="visit-notes" inner_html=html></div>
        </Show>
    }
}

fn trend_text(delta: Option<f64>) -> String {
    match delta {
        Some(d) if d > 0.0 => format!("▲ {:.0}", d),
        Some(d) if d < 0.0 => format!("▼ {:.0}", d.abs()),
        Some(_) => "±0".to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trend_text() {
        assert_eq!(trend_text(Some(150.0)), "▲ 150");
        assert_eq!(trend_text(Some(-250.0)), "▼ 250");
        assert_eq!(trend_text(Some(0.0)), "±0");
        assert_eq!(trend_text(None), "");
    }
}
