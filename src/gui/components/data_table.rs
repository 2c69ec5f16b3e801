// src/gui/components/data_table.rs
//
// Draws the live table for a Catalog. Purely a view: reads the filtered
// row indices and renders the requested columns. Falls back to the
// unavailable / empty notices when there is nothing to list.

use eframe::egui::{self, RichText};
use egui_extras::{Column, TableBuilder};

use crate::data::Catalog;
use crate::model::{FieldKey, Record};

use super::notice;

const ROW_H: f32 = 22.0;
const LONG_CELL: usize = 40;

/// Default cell: display text, truncated, full text on hover when long.
pub fn plain_cell<R: Record>(ui: &mut egui::Ui, record: &R, field: R::Field) {
    let text = record.display(field);
    let resp = ui.add(egui::Label::new(&*text).truncate());
    if text.chars().count() > LONG_CELL {
        resp.on_hover_text(&*text);
    }
}

pub fn draw<R, F>(ui: &mut egui::Ui, cat: &Catalog<R>, columns: &[(R::Field, f32)], cell: F)
where
    R: Record,
    F: Fn(&mut egui::Ui, &R, R::Field),
{
    if let Some(text) = cat.notice() {
        let hint = format!("Expected file: {}", cat.path().display());
        notice::unavailable(ui, text, Some(&hint));
        return;
    }
    if cat.records().is_empty() {
        notice::empty(ui, &format!("No {} found.", R::NOUN));
        return;
    }
    if cat.view().is_empty() {
        notice::empty(ui, "No matches for the current filters.");
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt(("table_hscroll", R::NOUN))
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .id_salt(("table_state", R::NOUN))
                .striped(true)
                .resizable(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(avail_h);
            for &(_, width) in columns {
                table = table.column(Column::initial(width).at_least(40.0).clip(true));
            }

            let view = cat.view();
            let records = cat.records();

            table
                .header(24.0, |mut header| {
                    for &(field, _) in columns {
                        header.col(|ui| {
                            ui.add(egui::Label::new(RichText::new(field.label()).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(ROW_H, view.len(), |mut row| {
                        let Some(record) = view.get(records, row.index()) else { return };
                        for &(field, _) in columns {
                            row.col(|ui| cell(ui, record, field));
                        }
                    });
                });
        });
}
