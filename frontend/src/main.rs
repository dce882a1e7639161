//! Entry point for the WASM application

pub fn main() {
    detector_frontend::mount();
}
