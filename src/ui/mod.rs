//! User interface and tick scheduling for the analog clock.
//!
//! This module contains the `eframe::App` implementation: the per-frame
//! update that fires ticks on the configured period, the toolbar for live
//! configuration, and the canvas hosting the clock face.
//!
//! # Module Organization
//!
//! - `state` - Application state and the main ClockApp struct
//! - `rendering` - Drawing the dial and hands
//! - `tests` - Headless egui frame tests

mod rendering;
mod state;

pub use state::ClockApp;

use crate::animation::{Easing, Tween};
use crate::types::{Hand, HandPivot, TickPeriod};
use crate::{angles, animation};
use eframe::egui;
use std::time::{Duration, Instant};

impl eframe::App for ClockApp {
    /// Main update function called by egui for each frame.
    ///
    /// Fires a tick when the configured period has elapsed, then lays out
    /// the toolbar and the clock canvas. A repaint is always requested so
    /// the in-flight hand transitions keep playing.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context
    /// * `frame` - The eframe frame
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        if self.tick_due(now) {
            self.apply_tick(now);
        }

        // Top toolbar occupies full width above the clock canvas
        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        // Central canvas area (below the toolbar)
        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_canvas(ui, now);
        });

        // Repaint every frame while transitions are in flight; once the
        // hands are parked, sleep until the next tick is due.
        ctx.request_repaint_after(self.repaint_delay(now));
    }
}

impl ClockApp {
    /// Returns whether a full tick period has elapsed since the last tick.
    ///
    /// Always true before the first tick so the hands take up a real
    /// position on the first frame.
    pub fn tick_due(&self, now: Instant) -> bool {
        match self.last_tick {
            None => true,
            Some(started) => now.duration_since(started) >= self.config.tick_period.duration(),
        }
    }

    /// Fires one tick: samples the clock, recomputes target angles, and
    /// restarts each hand's transition toward them.
    ///
    /// Each transition starts from the angle the hand is currently showing
    /// and travels the shortest arc to the new target over one tick period,
    /// so the midnight wrap is a small step across the 0/2π boundary rather
    /// than a backwards full turn. Fire-and-forget: nothing is queued and a
    /// tick is never revisited.
    ///
    /// # Arguments
    ///
    /// * `now` - The instant this tick fires, used as the transition start
    pub fn apply_tick(&mut self, now: Instant) {
        let target = self.computer.current_angles();
        let period = self.config.tick_period.duration();

        let elapsed = self.elapsed_in_tick(now);
        let first_tick = self.last_tick.is_none();
        for hand in Hand::ALL {
            let tween = &mut self.tweens[hand as usize];
            let goal = target.get(hand);
            if first_tick {
                // No previous reading to animate from; take up position
                *tween = Tween::fixed(goal);
                continue;
            }
            let current = angles::normalize_angle(tween.sample(elapsed));
            let travel = animation::shortest_arc(current, goal);
            *tween = Tween::new(current, current + travel, period, self.config.easing);
        }
        self.last_tick = Some(now);
        log::debug!(
            "tick: hour {:.3} rad, minute {:.3} rad, second {:.3} rad",
            target.hour,
            target.minute,
            target.second
        );
    }

    /// How long the frame loop may sleep before the next visual change.
    ///
    /// Zero while any hand transition is in flight, so the sweep renders
    /// at full frame rate; otherwise the time remaining until the next
    /// tick fires, so an idle clock does not busy-loop.
    ///
    /// # Arguments
    ///
    /// * `now` - The instant the current frame is being rendered
    pub fn repaint_delay(&self, now: Instant) -> Duration {
        let elapsed = self.elapsed_in_tick(now);
        let animating = Hand::ALL
            .iter()
            .any(|hand| !self.tweens[*hand as usize].is_complete(elapsed));
        if animating {
            Duration::ZERO
        } else {
            self.config
                .tick_period
                .duration()
                .saturating_sub(elapsed)
        }
    }

    /// Time elapsed inside the current tick, zero before the first tick.
    fn elapsed_in_tick(&self, now: Instant) -> Duration {
        self.last_tick
            .map(|started| now.duration_since(started))
            .unwrap_or(Duration::ZERO)
    }

    /// The angles the hands are showing at this instant, mid-transition.
    ///
    /// # Arguments
    ///
    /// * `now` - The instant being rendered
    ///
    /// # Returns
    ///
    /// One normalized angle per hand, sampled from the in-flight tweens.
    pub fn displayed_angles(&self, now: Instant) -> angles::HandAngles {
        let elapsed = self.elapsed_in_tick(now);
        let sample =
            |hand: Hand| angles::normalize_angle(self.tweens[hand as usize].sample(elapsed));
        angles::HandAngles {
            hour: sample(Hand::Hour),
            minute: sample(Hand::Minute),
            second: sample(Hand::Second),
        }
    }

    /// Draws the toolbar: tick period, hand layout, easing, and colors.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            egui::ComboBox::from_id_source("tick_period_combo")
                .selected_text(self.config.tick_period.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut self.config.tick_period,
                        TickPeriod::OneSecond,
                        TickPeriod::OneSecond.label(),
                    );
                    ui.selectable_value(
                        &mut self.config.tick_period,
                        TickPeriod::HalfSecond,
                        TickPeriod::HalfSecond.label(),
                    );
                });

            egui::ComboBox::from_id_source("hand_pivot_combo")
                .selected_text(self.config.pivot.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut self.config.pivot,
                        HandPivot::Offset,
                        HandPivot::Offset.label(),
                    );
                    ui.selectable_value(
                        &mut self.config.pivot,
                        HandPivot::Centered,
                        HandPivot::Centered.label(),
                    );
                });

            egui::ComboBox::from_id_source("easing_combo")
                .selected_text(self.config.easing.label())
                .show_ui(ui, |ui| {
                    ui.selectable_value(
                        &mut self.config.easing,
                        Easing::EaseInOut,
                        Easing::EaseInOut.label(),
                    );
                    ui.selectable_value(
                        &mut self.config.easing,
                        Easing::Linear,
                        Easing::Linear.label(),
                    );
                });

            ui.separator();

            ui.label("Color:");
            ui.color_edit_button_srgba(&mut self.config.style.primary);

            let mut override_second = self.config.style.second_hand.is_some();
            if ui
                .checkbox(&mut override_second, "Second hand")
                .changed()
            {
                self.config.style.second_hand =
                    override_second.then_some(self.config.style.primary);
            }
            if let Some(color) = self.config.style.second_hand.as_mut() {
                ui.color_edit_button_srgba(color);
            }

            ui.separator();

            // Digital readout of the sampled time
            ui.label(self.computer.current_time().format("%H:%M:%S").to_string());
        });
    }

    /// Draws the clock canvas filling the remaining space.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI context
    /// * `now` - The instant being rendered, for sampling the transitions
    fn draw_canvas(&mut self, ui: &mut egui::Ui, now: Instant) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
        let angles = self.displayed_angles(now);
        self.draw_clock(&painter, response.rect, &angles);
    }
}
