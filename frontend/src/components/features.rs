//! Feature cards with a hover lift.

use leptos::*;

use crate::effects::card_transform;

#[component]
fn FeatureCard(icon: &'static str, title: &'static str, text: &'static str) -> impl IntoView {
    let (hovered, set_hovered) = create_signal(false);

    view! {
        <div class="col-md-4 mb-4">
            <div
                class="card h-100 text-center"
                style=move || card_transform(hovered.get())
                on:mouseenter=move |_| set_hovered.set(true)
                on:mouseleave=move |_| set_hovered.set(false)
            >
                <div class="card-body">
                    <i class=format!("fas fa-{} fa-3x text-primary mb-3", icon)></i>
                    <h5 class="card-title">{title}</h5>
                    <p class="card-text text-muted">{text}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    view! {
        <section class="features-section py-5" id="features">
            <div class="container">
                <div class="row">
                    <FeatureCard
                        icon="image"
                        title="Images"
                        text="PNG, JPEG and GIF stills checked for manipulated faces."
                    />
                    <FeatureCard
                        icon="video"
                        title="Videos"
                        text="MP4, AVI and MOV clips up to 50MB."
                    />
                    <FeatureCard
                        icon="headphones"
                        title="Audio"
                        text="MP3, WAV, OGG and M4A recordings screened for cloned voices."
                    />
                </div>
            </div>
        </section>
    }
}
