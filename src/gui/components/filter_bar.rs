// src/gui/components/filter_bar.rs
//
// Free-text inputs and facet dropdowns for a Catalog, plus the
// "Showing N of M" line. Any edit re-runs the filter synchronously.

use eframe::egui;

use crate::data::Catalog;
use crate::model::{FieldKey, Record};

/// One input in the filter grid.
#[derive(Clone, Copy, Debug)]
pub enum FilterControl<F> {
    /// Free-text substring search on `field`.
    Text { field: F, hint: &'static str },
    /// Dropdown over the column's distinct values; `all` is the empty choice.
    Facet { field: F, all: &'static str },
}

pub fn draw<R: Record>(
    ui: &mut egui::Ui,
    cat: &mut Catalog<R>,
    controls: &[FilterControl<R::Field>],
) {
    let mut changed = false;

    egui::Grid::new(("filters", R::NOUN))
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui| {
            for &control in controls {
                match control {
                    FilterControl::Text { field, hint } => {
                        ui.label(field.label());
                        let text = cat.filters_mut().text_mut(field);
                        changed |= ui
                            .add(egui::TextEdit::singleline(text).hint_text(hint).desired_width(280.0))
                            .changed();
                    }
                    FilterControl::Facet { field, all } => {
                        ui.label(field.label());
                        let current = s!(cat.filters().get(field));
                        let mut picked = current.clone();
                        let shown = if current.is_empty() { all } else { current.as_str() };

                        egui::ComboBox::from_id_salt((R::NOUN, field.name()))
                            .selected_text(shown)
                            .width(280.0)
                            .show_ui(ui, |ui| {
                                ui.selectable_value(&mut picked, s!(), all);
                                for option in cat.facet(field) {
                                    ui.selectable_value(&mut picked, option.clone(), option.as_str());
                                }
                            });

                        if picked != current {
                            cat.filters_mut().set(field, picked);
                            changed = true;
                        }
                    }
                }
                ui.end_row();
            }
        });

    if changed {
        cat.refilter();
        logd!("UI: {} filters → {}", R::NOUN, cat.summary());
    }

    ui.horizontal(|ui| {
        ui.label(cat.summary());
        if !cat.filters().is_inactive() && ui.small_button("Clear filters").clicked() {
            cat.clear_filters();
            logd!("UI: {} filters cleared", R::NOUN);
        }
    });
}
