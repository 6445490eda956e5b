use crate::clipboard::SystemClipboard;
use crate::overlay::TransientOverlay;
use anyhow::Result;
use std::time::Duration;
use tokio::runtime::Handle;
use trackshare_core::{
    share_current_track, AppConfig, NowPlayingSource, SearchProvider, ShareOutcome,
};
use trackshare_media_session::create_now_playing_source;
use trackshare_search::YoutubeSearch;

/// Main application state: one Share button, a transient overlay for
/// the idle case, and a modal dialog for hard failures.
pub struct TrackShareApp {
    runtime: Handle,
    source: Box<dyn NowPlayingSource>,
    search: Box<dyn SearchProvider>,
    clipboard: SystemClipboard,

    /// UI state
    overlay: Option<TransientOverlay>,
    error_message: Option<String>,
}

impl TrackShareApp {
    pub fn new(config: AppConfig, runtime: Handle) -> Result<Self> {
        let source = create_now_playing_source(config.preferred_app.clone());
        let search = YoutubeSearch::new(
            Duration::from_secs(config.search_timeout_secs),
            &config.user_agent,
        )?;

        Ok(Self {
            runtime,
            source,
            search: Box::new(search),
            clipboard: SystemClipboard,
            overlay: None,
            error_message: None,
        })
    }

    /// Run one share action to completion. Blocks the UI thread for at
    /// most the media-session and search timeouts; no cancellation once
    /// started.
    fn share(&mut self) {
        let outcome = self.runtime.block_on(share_current_track(
            self.source.as_ref(),
            self.search.as_ref(),
            &mut self.clipboard,
        ));

        match outcome {
            Ok(ShareOutcome::Copied(url)) => {
                // Silent success: the clipboard write is the deliverable
                tracing::info!("shared {url}");
            }
            Ok(ShareOutcome::NothingPlaying) => {
                self.overlay = Some(TransientOverlay::new("no track is playing"));
            }
            Err(e) => {
                tracing::error!("share failed: {e}");
                self.error_message = Some(e.to_string());
            }
        }
    }

    /// Blocking error dialog over a dimmed backdrop, dismissed with OK.
    fn show_error_modal(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_message.clone() else {
            return;
        };

        let screen = ctx.screen_rect();
        egui::Area::new(egui::Id::new("error_backdrop"))
            .order(egui::Order::Middle)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                ui.painter()
                    .rect_filled(screen, 0.0, egui::Color32::from_black_alpha(166));
                // Swallow clicks aimed at the button underneath
                ui.allocate_rect(screen, egui::Sense::click());
            });

        let mut dismissed = false;
        egui::Window::new("TrackShare")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                ui.label(&message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed {
            self.error_message = None;
        }
    }
}

impl eframe::App for TrackShareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let has_error = self.error_message.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!has_error, |ui| {
                ui.centered_and_justified(|ui| {
                    let button =
                        egui::Button::new(egui::RichText::new("Share").size(36.0).strong());
                    if ui.add_sized([220.0, 110.0], button).clicked() {
                        self.share();
                    }
                });
            });
        });

        if let Some(overlay) = &self.overlay {
            if !overlay.show(ctx) {
                self.overlay = None;
            }
        }

        self.show_error_modal(ctx);
    }
}
