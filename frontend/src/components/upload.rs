//! Upload form: file picker, analyze button, spinner and error banner.
//!
//! The component only wires DOM events to [`UploadController`]; the
//! workflow itself lives in the controller.

use std::rc::Rc;

use leptos::*;
use web_sys::{Event, HtmlInputElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::banner::{BannerListener, BrowserTimers, ErrorBanner};
use crate::components::{ErrorAlert, RESULTS_SECTION_ID};
use crate::controller::{UploadController, UploadView};
use crate::services::HttpUploadClient;
use crate::types::{ResultPanel, SubmitControl};

/// [`UploadView`] backed by Leptos signals.
#[derive(Clone)]
pub struct SignalView {
    submit: RwSignal<SubmitControl>,
    loading: RwSignal<bool>,
    result: RwSignal<Option<ResultPanel>>,
    file_input: NodeRef<html::Input>,
    banner: Rc<ErrorBanner<BrowserTimers>>,
}

impl UploadView for SignalView {
    fn set_submit(&self, control: SubmitControl) {
        self.submit.set(control);
    }

    fn set_loading(&self, visible: bool) {
        self.loading.set(visible);
    }

    fn show_result(&self, panel: ResultPanel) {
        self.result.set(Some(panel));
        // Wait for the panel to be in the DOM before scrolling to it
        request_animation_frame(scroll_results_into_view);
    }

    fn hide_result(&self) {
        self.result.set(None);
    }

    fn clear_file_input(&self) {
        if let Some(input) = self.file_input.get_untracked() {
            input.set_value("");
        }
    }

    fn show_error(&self, message: &str) {
        self.banner.show(message);
    }
}

fn scroll_results_into_view() {
    let Some(section) = document().get_element_by_id(RESULTS_SECTION_ID) else {
        log::error!("Results elements not found");
        return;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    section.scroll_into_view_with_scroll_into_view_options(&options);
}

type PageController = UploadController<SignalView, HttpUploadClient>;

#[component]
pub fn UploadSection(
    /// Result panel content, shared with `ResultsSection`
    result: RwSignal<Option<ResultPanel>>,
) -> impl IntoView {
    let submit = create_rw_signal(SubmitControl::default());
    let loading = create_rw_signal(false);
    let (error_message, set_error_message) = create_signal(None::<String>);
    let file_input = create_node_ref::<html::Input>();

    let listener: BannerListener = Rc::new(move |message: Option<&str>| {
        set_error_message.set(message.map(str::to_string));
    });
    let banner = Rc::new(ErrorBanner::new(BrowserTimers, listener));

    let controller: Rc<PageController> = Rc::new(UploadController::new(
        SignalView {
            submit,
            loading,
            result,
            file_input,
            banner: banner.clone(),
        },
        HttpUploadClient::default(),
    ));

    let on_file_change = {
        let controller = controller.clone();
        move |ev: Event| {
            let input: HtmlInputElement = event_target(&ev);
            let file = input.files().and_then(|files| files.get(0));
            controller.on_file_selected(file);
        }
    };

    let on_submit = {
        let controller = controller.clone();
        move |ev: ev::SubmitEvent| {
            ev.prevent_default();
            let controller = controller.clone();
            spawn_local(async move {
                let outcome = controller.on_submit().await;
                log::debug!("Submit finished: {:?}", outcome);
            });
        }
    };

    let close_banner = Callback::new(move |_: ()| banner.dismiss());

    view! {
        <section class="upload-section py-5" id="upload">
            <div class="container">
                <div class="row justify-content-center">
                    <div class="col-lg-8">
                        <div class="card upload-card">
                            <div class="card-body p-5">
                                <h2 class="text-center mb-4">
                                    <i class="fas fa-cloud-upload-alt me-2"></i>
                                    "Upload a File"
                                </h2>
                                <form id="uploadForm" on:submit=on_submit>
                                    <div class="mb-4">
                                        <input
                                            type="file"
                                            id="fileInput"
                                            class="form-control form-control-lg"
                                            accept="image/*,video/*,audio/*"
                                            node_ref=file_input
                                            on:change=on_file_change
                                        />
                                        <div class="form-text">
                                            "Images (PNG, JPG, GIF), videos (MP4, AVI, MOV) and audio (MP3, WAV, OGG, M4A). Maximum 50MB."
                                        </div>
                                    </div>
                                    <button
                                        type="submit"
                                        id="analyzeBtn"
                                        class="btn btn-primary btn-lg w-100"
                                        disabled=move || !submit.with(|s| s.enabled)
                                    >
                                        <i class=move || {
                                            if loading.get() { "fas fa-spinner fa-spin me-2" } else { "fas fa-search me-2" }
                                        }></i>
                                        {move || submit.with(|s| s.label.clone())}
                                    </button>
                                </form>
                                <div
                                    id="loadingSpinner"
                                    class=move || if loading.get() { "text-center mt-4" } else { "text-center mt-4 d-none" }
                                >
                                    <div class="spinner-border text-primary" role="status"></div>
                                    <p class="mt-3 text-muted">"Analyzing your file..."</p>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <ErrorAlert message=error_message on_close=close_banner/>
        </section>
    }
}
