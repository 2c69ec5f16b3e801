// src/gui/components/notice.rs
//
// Informational boxes shown in place of a listing.

use eframe::egui::{self, Color32, Margin, RichText, Stroke};

const WARN_FILL: Color32 = Color32::from_rgb(0xFE, 0xFC, 0xE8);
const WARN_EDGE: Color32 = Color32::from_rgb(0xFD, 0xE6, 0x8A);
const WARN_TEXT: Color32 = Color32::from_rgb(0x85, 0x4D, 0x0E);

/// Source missing or unreadable.
pub fn unavailable(ui: &mut egui::Ui, text: &str, hint: Option<&str>) {
    egui::Frame::group(ui.style())
        .fill(WARN_FILL)
        .stroke(Stroke::new(1.0, WARN_EDGE))
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(text).color(WARN_TEXT));
            if let Some(hint) = hint {
                ui.label(RichText::new(hint).small().monospace().color(WARN_TEXT));
            }
        });
}

/// Source read fine but holds nothing.
pub fn empty(ui: &mut egui::Ui, text: &str) {
    egui::Frame::group(ui.style())
        .inner_margin(Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(text);
        });
}
