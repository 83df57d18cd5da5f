//! # Analog Clock
//!
//! A decorative analog clock face rendered with egui, showing hour, minute,
//! and second hands that retarget on a fixed tick and sweep between
//! positions with an animated transition.
//!
//! ## Features
//! - Pure clock-angle computation with an injectable time source
//! - Smooth hand sweep: each coarser hand carries the finer hand's progress
//! - Configurable tick period (1 s or 0.5 s) and hand layout convention
//! - Primary hand color with an optional second-hand override
//! - Shortest-arc transitions so the midnight wrap never unwinds backwards

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod angles;
mod animation;
mod constants;
mod types;
mod ui;

// Re-export public types and functions
pub use angles::*;
pub use animation::*;
pub use types::*;
pub use ui::ClockApp;

/// Runs the clock application with default settings.
///
/// This function initializes the egui application window and starts the
/// main event loop.
///
/// # Returns
///
/// Returns `Ok(())` if the application runs successfully, or an
/// `eframe::Error` if initialization fails.
///
/// # Example
///
/// ```no_run
/// use analog_clock::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    log::info!("starting analog clock");
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size(eframe::egui::vec2(480.0, 520.0)),
        ..Default::default()
    };
    eframe::run_native(
        "Analog Clock",
        options,
        Box::new(|_cc| Ok(Box::new(ClockApp::default()))),
    )
}
