//! Shared application-wide constants.
//! Centralizes tweakable values used across angle computation and rendering.

use egui::Color32;

// Hand geometry
/// Width of the hour hand in screen pixels.
pub const HOUR_HAND_WIDTH: f32 = 8.0;
/// Width of the minute hand in screen pixels.
pub const MINUTE_HAND_WIDTH: f32 = 6.0;
/// Width of the second hand in screen pixels.
pub const SECOND_HAND_WIDTH: f32 = 4.0;

/// Hour hand length as a fraction of the dial radius.
pub const HOUR_HAND_LENGTH: f32 = 0.7;
/// Minute hand length as a fraction of the dial radius.
pub const MINUTE_HAND_LENGTH: f32 = 0.8;
/// Second hand length as a fraction of the dial radius.
pub const SECOND_HAND_LENGTH: f32 = 0.9;

// Dial
/// Diameter of the dial face relative to the boundary circle. The visible
/// boundary ring is the sliver left between the two circles.
pub const FACE_INSET: f32 = 0.95;
/// Padding (in screen pixels) between the boundary circle and the canvas edge.
pub const DIAL_PADDING: f32 = 16.0;
/// Fill color of the dial face.
pub const FACE_COLOR: Color32 = Color32::WHITE;
/// Default color for the hands and the boundary ring.
pub const DEFAULT_HAND_COLOR: Color32 = Color32::from_rgb(200, 40, 40);
