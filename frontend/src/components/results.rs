//! Result panel for the most recent successful analysis.

use leptos::*;

use crate::types::ResultPanel;

/// DOM id of the results section, scrolled to after a result renders.
pub const RESULTS_SECTION_ID: &str = "results";

#[component]
pub fn ResultsSection(result: RwSignal<Option<ResultPanel>>) -> impl IntoView {
    view! {
        <section
            id=RESULTS_SECTION_ID
            class=move || {
                if result.with(Option::is_some) { "results-section py-5" } else { "results-section py-5 d-none" }
            }
        >
            <div class="container">
                <h2 class="text-center mb-4">"Analysis Results"</h2>
                <div id="resultContent">
                    // A new panel replaces the old one entirely
                    {move || result.get().map(|panel| view! { <ResultCard panel=panel/> })}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ResultCard(panel: ResultPanel) -> impl IntoView {
    let color = panel.tier.color();
    let confidence = panel.confidence_text();

    view! {
        <div class="result-item fadeInUp">
            <div class="row align-items-center">
                <div class="col-md-8">
                    <h4 class=format!("text-{} mb-3", color)>
                        <i class=format!("fas fa-{} me-2", panel.tier.icon())></i>
                        {panel.label.clone()}
                    </h4>
                    <p class="mb-2"><strong>"File: "</strong>{panel.filename.clone()}</p>
                    <p class="mb-2"><strong>"Type: "</strong>{panel.file_type.clone()}</p>
                    <p class="mb-3"><strong>"Confidence: "</strong>{confidence.clone()}</p>
                    <div class="confidence-bar">
                        <div class="confidence-fill" style=panel.fill_style()></div>
                    </div>
                </div>
                <div class="col-md-4 text-center">
                    <div class="result-badge">
                        <i class=format!("fas fa-{} fa-4x text-primary mb-3", panel.file_icon.name())></i>
                        <h5 class=format!("text-{}", color)>{confidence}</h5>
                        <small class="text-muted">"Confidence Score"</small>
                    </div>
                </div>
            </div>
            <div class="alert alert-info mt-4" role="alert">
                <i class="fas fa-info-circle me-2"></i>
                {panel.message.clone()}
            </div>
        </div>
    }
}
