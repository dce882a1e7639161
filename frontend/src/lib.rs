//! Deepfake Detector - Frontend Rust/Leptos Application
//!
//! A WebAssembly page for uploading an image, video or audio file and
//! displaying the deepfake likelihood returned by the backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navbar, anchor links)                               │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, parallax)                                  │
//! │  ├── UploadSection ──▶ UploadController ──▶ POST /upload     │
//! │  ├── ResultsSection (when a result is rendered)              │
//! │  └── Features                                                │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Common types (SelectedFile, UploadResponse, ResultPanel, etc.)
//! - [`validation`] - Client-side size and MIME checks
//! - [`controller`] - Toolkit-independent upload workflow
//! - [`banner`] - Single-slot auto-dismissing error banner
//! - [`effects`] - Scroll and hover styling
//! - [`components`] - UI components (Header, Upload, Results, etc.)
//! - [`services`] - Backend communication (upload)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod banner;
pub mod components;
pub mod config;
pub mod controller;
pub mod effects;
pub mod services;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Files
    FileMeta, SelectedFile,
    // State
    SubmitControl, UploadState,
    // API
    AnalysisResult, UploadResponse,
    // Display
    FileIcon, ResultPanel, SeverityTier,
    // Errors
    AppError, AppResult,
};

// Workflow
pub use banner::{BrowserTimers, ErrorBanner, TimerFactory};
pub use controller::{ServerReply, SubmitOutcome, UploadClient, UploadController, UploadView};
pub use validation::{format_file_size, validate_file, FileRejection};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Set up logging and mount the page. Called from `main.rs`.
pub fn mount() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 Deepfake Detector initialized");

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Deepfake Detector"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    let scroll_y = track_window_scroll();
    // At most one rendered result at a time
    let result = create_rw_signal(None::<ResultPanel>);

    view! {
        <Header scroll_y=scroll_y/>
        <Hero scroll_y=scroll_y/>
        <UploadSection result=result/>
        <ResultsSection result=result/>
        <Features/>
        <Footer/>
    }
}
