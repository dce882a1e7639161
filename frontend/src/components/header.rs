use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::effects::{anchor_scroll_top, anchor_target, navbar_style};

/// Window scroll offset as a signal, listening for the component's lifetime.
pub fn track_window_scroll() -> ReadSignal<f64> {
    let (scroll_y, set_scroll_y) = create_signal(0.0);

    let handle = window_event_listener(ev::scroll, move |_| {
        set_scroll_y.set(window().scroll_y().unwrap_or(0.0));
    });
    on_cleanup(move || handle.remove());

    scroll_y
}

/// Click handler body for `href="#id"` links: smooth scroll instead of a jump.
pub(crate) fn follow_anchor(ev: &MouseEvent, href: &str) {
    ev.prevent_default();
    if let Some(id) = anchor_target(href) {
        scroll_to_section(id);
    }
}

/// Smooth-scroll to a section, leaving room for the fixed navbar.
fn scroll_to_section(id: &str) {
    let Some(section) = document()
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(f64::from(section.offset_top())));
    options.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&options);
}

#[component]
fn NavLink(href: &'static str, label: &'static str) -> impl IntoView {
    view! {
        <li class="nav-item">
            <a class="nav-link" href=href on:click=move |ev: MouseEvent| follow_anchor(&ev, href)>
                {label}
            </a>
        </li>
    }
}

#[component]
pub fn Header(scroll_y: ReadSignal<f64>) -> impl IntoView {
    view! {
        <nav
            class="navbar navbar-expand-lg navbar-dark fixed-top"
            style=move || navbar_style(scroll_y.get()).css()
        >
            <div class="container">
                <a class="navbar-brand" href="#" on:click=|ev: MouseEvent| follow_anchor(&ev, "#")>
                    <i class="fas fa-shield-alt me-2"></i>
                    "Deepfake Detector"
                </a>
                <ul class="navbar-nav ms-auto">
                    <NavLink href="#home" label="Home"/>
                    <NavLink href="#upload" label="Analyze"/>
                    <NavLink href="#features" label="Features"/>
                </ul>
            </div>
        </nav>
    }
}
