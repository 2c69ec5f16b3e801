// src/gui/components/action_bar.rs
//
// Reload / Copy / Clear buttons and the status line.
// Copy takes exactly what the current page shows (filtered rows, all columns).

use eframe::egui;

use crate::config::options::ExportFormat;
use crate::csv::to_export_string;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        if ui.button("Reload data").clicked() {
            app.reload_all();
        }

        if ui.button("Clear filters").clicked() {
            let page = app.current_page();
            page.clear_filters(app);
            app.status("Filters cleared");
        }

        ui.separator();

        let export = &mut app.state.options.export;
        ui.label("Copy as:");
        ui.selectable_value(&mut export.format, ExportFormat::Csv, "CSV");
        ui.selectable_value(&mut export.format, ExportFormat::Tsv, "TSV");
        ui.checkbox(&mut export.include_headers, "Headers");

        if ui.button("Copy").clicked() {
            copy(ui.ctx(), app);
        }

        ui.separator();
        ui.label(format!("Status: {}", app.status));
    });
}

fn copy(ctx: &egui::Context, app: &mut App) {
    let page = app.current_page();
    let (headers, rows) = page.export_rows(app);

    if rows.is_empty() {
        app.status("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let export = &app.state.options.export;
    let headers = export.include_headers.then_some(headers.as_slice());
    let txt = to_export_string(headers, &rows, export.format.delim());
    logf!(
        "Copy: page={:?}, rows={}, format={:?}",
        page.kind(),
        rows.len(),
        export.format
    );

    ctx.copy_text(txt);
    app.status(format!("Copied {} row(s) to clipboard", rows.len()));
}
