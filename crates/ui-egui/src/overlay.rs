//! Transient status overlay
//!
//! Bottom-anchored toast that holds for a short time and then fades out.
//! Used for the expected "no track is playing" idle case; hard failures
//! go through the modal error dialog instead.

use crate::theme;
use std::time::{Duration, Instant};

/// Fully visible time before the fade starts.
const HOLD: Duration = Duration::from_millis(1500);
/// Linear fade-out duration.
const FADE: Duration = Duration::from_millis(500);
const PEAK_ALPHA: f32 = 0.98;

pub struct TransientOverlay {
    text: String,
    shown_at: Instant,
}

impl TransientOverlay {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            shown_at: Instant::now(),
        }
    }

    /// Opacity at `elapsed` since the overlay appeared, or `None` once
    /// fully faded.
    fn alpha_at(elapsed: Duration) -> Option<f32> {
        if elapsed < HOLD {
            return Some(PEAK_ALPHA);
        }
        let fading = elapsed - HOLD;
        if fading >= FADE {
            return None;
        }
        Some(PEAK_ALPHA * (1.0 - fading.as_secs_f32() / FADE.as_secs_f32()))
    }

    /// Draw the overlay. Returns false once it has expired.
    pub fn show(&self, ctx: &egui::Context) -> bool {
        let Some(alpha) = Self::alpha_at(self.shown_at.elapsed()) else {
            return false;
        };

        egui::Area::new(egui::Id::new("transient_overlay"))
            .anchor(egui::Align2::CENTER_BOTTOM, egui::vec2(0.0, -8.0))
            .order(egui::Order::Foreground)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::none()
                    .fill(theme::OVERLAY_BG.gamma_multiply(alpha))
                    .stroke(egui::Stroke::new(
                        1.0,
                        theme::OVERLAY_FG.gamma_multiply(alpha * 0.4),
                    ))
                    .rounding(4.0)
                    .inner_margin(egui::Margin::symmetric(12.0, 6.0))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&self.text)
                                .strong()
                                .color(theme::OVERLAY_FG.gamma_multiply(alpha)),
                        );
                    });
            });

        // Keep animating even without input events
        ctx.request_repaint();
        true
    }
}
