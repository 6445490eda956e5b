//! Dark theme for the TrackShare window

use egui::{Color32, Visuals};

pub const WINDOW_BG: Color32 = Color32::from_rgb(0x0f, 0x11, 0x15);
pub const TEXT: Color32 = Color32::from_rgb(0xe6, 0xe6, 0xe6);
pub const BUTTON_BG: Color32 = Color32::from_rgb(0x1f, 0x29, 0x37);
pub const BUTTON_BG_HOVERED: Color32 = Color32::from_rgb(0x27, 0x32, 0x44);
pub const BUTTON_BG_PRESSED: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);
pub const OVERLAY_BG: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);
pub const OVERLAY_FG: Color32 = TEXT;

pub fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.panel_fill = WINDOW_BG;
    visuals.window_fill = WINDOW_BG;
    visuals.override_text_color = Some(TEXT);

    visuals.widgets.inactive.bg_fill = BUTTON_BG;
    visuals.widgets.inactive.weak_bg_fill = BUTTON_BG;
    visuals.widgets.hovered.bg_fill = BUTTON_BG_HOVERED;
    visuals.widgets.hovered.weak_bg_fill = BUTTON_BG_HOVERED;
    visuals.widgets.active.bg_fill = BUTTON_BG_PRESSED;
    visuals.widgets.active.weak_bg_fill = BUTTON_BG_PRESSED;

    visuals
}
