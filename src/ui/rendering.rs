//! Drawing the dial and hands.
//!
//! The face is two stacked circles: the boundary circle in the primary
//! color and the dial face inset to 95% of it, leaving the boundary visible
//! as a thin ring. Hands are rounded-capped bars rotated about the dial
//! center, drawn second, then minute, then hour on top.

use super::state::ClockApp;
use crate::angles::HandAngles;
use crate::constants;
use crate::types::{Hand, HandPivot};
use eframe::egui;

impl ClockApp {
    /// Renders the full clock face into the given rectangle.
    ///
    /// The dial is the largest circle that fits the rectangle with a small
    /// padding; the hands are scaled off the dial radius.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `rect` - The screen-space rectangle of the canvas area
    /// * `angles` - The hand angles to display
    pub fn draw_clock(&self, painter: &egui::Painter, rect: egui::Rect, angles: &HandAngles) {
        let center = rect.center();
        let radius = (rect.width().min(rect.height()) / 2.0 - constants::DIAL_PADDING).max(0.0);
        if radius <= 0.0 {
            // Canvas too small to show anything
            return;
        }

        // Boundary circle with the dial face inset on top of it
        painter.circle_filled(center, radius, self.config.style.primary);
        painter.circle_filled(center, radius * constants::FACE_INSET, constants::FACE_COLOR);

        // Hands, back to front
        for hand in Hand::ALL {
            self.draw_hand(painter, center, radius, hand, angles.get(hand));
        }
    }

    /// Draws one hand at the given rotation.
    ///
    /// Angle zero points at 12 o'clock and positive angles run clockwise.
    /// The hand body is a thick line with filled circles at both ends,
    /// matching a rounded rectangle whose corner radius is half its width.
    ///
    /// # Arguments
    ///
    /// * `painter` - The egui painter for drawing operations
    /// * `center` - The dial center in screen space
    /// * `radius` - The dial radius in screen pixels
    /// * `hand` - Which hand to draw; selects width, length, and color
    /// * `angle` - The hand's rotation in radians
    pub fn draw_hand(
        &self,
        painter: &egui::Painter,
        center: egui::Pos2,
        radius: f32,
        hand: Hand,
        angle: f32,
    ) {
        let length = radius * hand.length_multiplier();
        // Screen y grows downward, so 12 o'clock is -y
        let direction = egui::vec2(angle.sin(), -angle.cos());

        let (tail, tip) = match self.config.pivot {
            HandPivot::Offset => (center, center + direction * length),
            HandPivot::Centered => (
                center - direction * (length / 2.0),
                center + direction * (length / 2.0),
            ),
        };

        let color = self.config.style.hand_color(hand);
        let width = hand.width();
        painter.line_segment([tail, tip], egui::Stroke::new(width, color));
        // Rounded caps
        painter.circle_filled(tail, width / 2.0, color);
        painter.circle_filled(tip, width / 2.0, color);
    }
}
