//! Fixed-position error banner.

use leptos::*;

#[component]
pub fn ErrorAlert(
    /// Current banner text; `None` hides the banner
    message: ReadSignal<Option<String>>,
    /// Close button pressed
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Show
            when=move || message.with(Option::is_some)
            fallback=|| view! { }
        >
            <div
                id="errorAlert"
                class="alert alert-danger alert-dismissible fade show position-fixed"
                style="top: 80px; right: 20px; z-index: 1050; max-width: 400px;"
                role="alert"
            >
                <i class="fas fa-exclamation-triangle me-2"></i>
                <strong>"Error: "</strong>
                {move || message.get().unwrap_or_default()}
                <button
                    type="button"
                    class="btn-close"
                    aria-label="Close"
                    on:click=move |_| on_close.call(())
                ></button>
            </div>
        </Show>
    }
}
