//! UI Components for the Deepfake Detector page.
//!
//! # Layout Components
//! - [`Header`] - Navbar with scroll styling and anchor links
//! - [`Hero`] - Title banner with parallax
//! - [`Features`] - Supported media cards
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`UploadSection`] - File picker and analyze button
//! - [`ResultsSection`] - Classification result panel
//! - [`ErrorAlert`] - Auto-dismissing error banner

mod error_alert;
mod features;
mod footer;
mod header;
mod hero;
mod results;
mod upload;

pub use error_alert::*;
pub use features::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use results::*;
pub use upload::*;
