//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="py-4 text-center">
            <div>
                "Deepfake Detector prototype • Powered by "
                <span class="rust-badge">"🦀 Rust + Leptos"</span>
            </div>
            <small class="text-muted">"Results are placeholders while the detection model is in development."</small>
        </footer>
    }
}
