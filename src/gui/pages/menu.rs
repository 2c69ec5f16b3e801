// src/gui/pages/menu.rs
use eframe::egui;

use crate::config::consts::{ MEAL_PRICE, MENU_SCRAPER_CMD };
use crate::config::options::PageKind;
use crate::gui::app::App;
use crate::gui::components::notice;

use super::Page;

pub struct MenuPage;
pub static PAGE: MenuPage = MenuPage;

impl Page for MenuPage {
    fn title(&self) -> &'static str { "Lunch Menu" }
    fn kind(&self) -> PageKind { PageKind::Menu }

    fn draw_body(&self, ui: &mut egui::Ui, app: &mut App) {
        ui.heading("Weekly Hot Lunch Menu");
        ui.weak(MEAL_PRICE);
        ui.add_space(8.0);

        if let Some(text) = app.menu.notice() {
            let hint = format!("Run: {MENU_SCRAPER_CMD}");
            notice::unavailable(ui, text, Some(&hint));
            return;
        }
        if app.menu.items().is_empty() {
            notice::empty(ui, "No menu items found.");
            return;
        }

        egui::ScrollArea::vertical()
            .id_salt("menu_scroll")
            .show(ui, |ui| {
                for item in app.menu.items() {
                    egui::Frame::group(ui.style())
                        .inner_margin(egui::Margin::same(10))
                        .show(ui, |ui| {
                            ui.set_width(ui.available_width());
                            ui.horizontal(|ui| {
                                ui.strong(item.day.as_str());
                                ui.weak(item.date.as_str());
                            });
                            ui.label(item.menu.as_str());
                        });
                    ui.add_space(6.0);
                }
            });
    }

    fn export_rows(&self, app: &App) -> (Vec<String>, Vec<Vec<String>>) {
        app.menu.export_rows()
    }
}
