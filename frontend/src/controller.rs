//! Upload workflow: file selection, submission, result or error display.
//!
//! The controller knows nothing about the DOM. It talks to the page through
//! [`UploadView`] and to the server through [`UploadClient`], so the same
//! logic drives the Leptos components and the tests below.
//!
//! ```text
//!  on_file_selected ──▶ validate ──▶ submit control enabled
//!                            └──────▶ input cleared + error banner
//!
//!  on_submit ──▶ Idle? ──▶ InFlight ──▶ POST /upload ──▶ result panel
//!                                                  └───▶ error banner
//!                          (always) ◀── Idle, spinner hidden, button reset
//! ```

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use crate::config::{MISSING_FILE_MESSAGE, NETWORK_ERROR_MESSAGE};
use crate::types::{
    AppResult, FileMeta, ResultPanel, SelectedFile, SubmitControl, UploadResponse, UploadState,
};
use crate::validation::{format_file_size, validate_file};

// =============================================================================
// Seams
// =============================================================================

/// The page elements the workflow drives.
pub trait UploadView {
    fn set_submit(&self, control: SubmitControl);
    fn set_loading(&self, visible: bool);
    /// Replace the result panel content and reveal it.
    fn show_result(&self, panel: ResultPanel);
    fn hide_result(&self);
    fn clear_file_input(&self);
    fn show_error(&self, message: &str);
}

/// What came back from the upload endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct ServerReply {
    /// HTTP status was 2xx
    pub http_ok: bool,
    pub body: UploadResponse,
}

/// Sends one file to the upload endpoint.
///
/// `Err` means the request did not produce a usable reply.
#[async_trait(?Send)]
pub trait UploadClient {
    type File: FileMeta + Clone;

    async fn upload(&self, file: &Self::File) -> AppResult<ServerReply>;
}

// =============================================================================
// Controller
// =============================================================================

/// How a submit attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another upload was already running.
    Ignored,
    /// Nothing selected; no request made.
    MissingFile,
    /// Result panel rendered.
    Rendered,
    /// Server answered with an error.
    Rejected(String),
    /// Request failed or the reply was unreadable.
    TransportFailed,
}

pub struct UploadController<V, C: UploadClient> {
    view: V,
    client: C,
    state: Cell<UploadState>,
    selected: RefCell<Option<C::File>>,
}

impl<V: UploadView, C: UploadClient> UploadController<V, C> {
    pub fn new(view: V, client: C) -> Self {
        Self {
            view,
            client,
            state: Cell::new(UploadState::Idle),
            selected: RefCell::new(None),
        }
    }

    pub fn state(&self) -> UploadState {
        self.state.get()
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn has_selection(&self) -> bool {
        self.selected.borrow().is_some()
    }

    /// The file input changed. `None` means the selection was cleared.
    pub fn on_file_selected(&self, file: Option<C::File>) {
        // While uploading, the button belongs to the in-flight request.
        let idle = self.state.get() == UploadState::Idle;

        let Some(file) = file else {
            self.selected.replace(None);
            if idle {
                self.view.set_submit(SubmitControl::idle(false));
            }
            return;
        };

        let meta = SelectedFile::of(&file);
        match validate_file(&meta) {
            Ok(()) => {
                log::info!(
                    "File selected: {} Size: {} Type: {}",
                    meta.name,
                    format_file_size(meta.size),
                    meta.mime_type
                );
                self.selected.replace(Some(file));
                if idle {
                    self.view.set_submit(SubmitControl::ready(&meta.name));
                }
            }
            Err(rejection) => {
                log::warn!("Rejected {}: {:?}", meta.name, rejection);
                self.selected.replace(None);
                self.view.clear_file_input();
                if idle {
                    self.view.set_submit(SubmitControl::idle(false));
                }
                self.view.show_error(&rejection.to_string());
            }
        }
    }

    /// The form was submitted.
    pub async fn on_submit(&self) -> SubmitOutcome {
        if self.state.get() == UploadState::InFlight {
            log::debug!("Upload already in progress");
            return SubmitOutcome::Ignored;
        }

        let file = self.selected.borrow().clone();
        let Some(file) = file else {
            self.view.show_error(MISSING_FILE_MESSAGE);
            return SubmitOutcome::MissingFile;
        };

        // Set before the first await; cleared when the guard drops.
        let _in_flight = InFlight::begin(&self.view, &self.state);

        log::info!("Uploading file: {}", file.name());
        match self.client.upload(&file).await {
            Ok(reply) => match reply.body.into_outcome(reply.http_ok) {
                Ok(result) => {
                    log::info!("Analysis complete: {:?}", result);
                    self.view.show_result(ResultPanel::from(&result));
                    SubmitOutcome::Rendered
                }
                Err(message) => {
                    log::error!("Upload error: {}", message);
                    self.view.show_error(&message);
                    SubmitOutcome::Rejected(message)
                }
            },
            Err(e) => {
                log::error!("Network error: {}", e);
                self.view.show_error(NETWORK_ERROR_MESSAGE);
                SubmitOutcome::TransportFailed
            }
        }
    }
}

/// Holds the controller in `InFlight` and restores the idle UI on drop,
/// whichever way `on_submit` is left.
struct InFlight<'a, V: UploadView> {
    view: &'a V,
    state: &'a Cell<UploadState>,
}

impl<'a, V: UploadView> InFlight<'a, V> {
    fn begin(view: &'a V, state: &'a Cell<UploadState>) -> Self {
        state.set(UploadState::InFlight);
        view.set_loading(true);
        view.set_submit(SubmitControl::analyzing());
        view.hide_result();
        Self { view, state }
    }
}

impl<V: UploadView> Drop for InFlight<'_, V> {
    fn drop(&mut self) {
        self.view.set_loading(false);
        self.view.set_submit(SubmitControl::idle(true));
        self.state.set(UploadState::Idle);
    }
}
