//! Hero section component

use leptos::*;
use web_sys::MouseEvent;

use super::header::follow_anchor;
use crate::effects::parallax_transform;

#[component]
pub fn Hero(scroll_y: ReadSignal<f64>) -> impl IntoView {
    view! {
        <section class="hero-section" id="home" style=move || parallax_transform(scroll_y.get())>
            <div class="container text-center">
                <h1 class="display-4 fw-bold">"Deepfake Detector"</h1>
                <p class="lead">
                    "Upload an image, video or audio file and find out how likely it is to be synthetic."
                </p>
                <a
                    href="#upload"
                    class="btn btn-primary btn-lg mt-3"
                    on:click=|ev: MouseEvent| follow_anchor(&ev, "#upload")
                >
                    <i class="fas fa-search me-2"></i>
                    "Analyze a File"
                </a>
            </div>
        </section>
    }
}
