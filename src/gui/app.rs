// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        options::PageKind::{ self, * },
        state::AppState,
    },
    data::{ Catalog, MenuBoard },
    model::{ Course, Teacher },
};

use super::{
    components,
    pages::Page,
    router,
};

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Iggy Wiki",
        options,
        Box::new(move |_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // one listing per data source; records are read-only between reloads
    pub teachers: Catalog<Teacher>,
    pub courses: Catalog<Course>,
    pub menu: MenuBoard,

    pub status: String,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let data = &state.options.data;
        let teachers = Catalog::load(data.path_for(Teachers));
        let courses = Catalog::load(data.path_for(Courses));
        let menu = MenuBoard::load(data.path_for(Menu));

        logf!(
            "Init: data dir={}, teachers={}, courses={}, menu items={}",
            data.dir().display(),
            teachers.records().len(),
            courses.records().len(),
            menu.items().len()
        );

        let mut app = Self {
            state,
            teachers,
            courses,
            menu,
            status: s!("Idle"),
        };
        app.status = app.load_summary();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages.get(self.current_index()).copied().unwrap_or(pages[0])
    }

    #[inline]
    pub fn status<T: Into<String>>(&mut self, msg: T) {
        self.status = msg.into();
    }

    /// Re-read every source from the configured data dir. Filters are kept.
    pub fn reload_all(&mut self) {
        let data = &self.state.options.data;
        self.teachers.set_path(data.path_for(Teachers));
        self.courses.set_path(data.path_for(Courses));
        self.menu.set_path(data.path_for(Menu));

        self.teachers.reload();
        self.courses.reload();
        self.menu.reload();

        logf!("Reload: data dir={}", data.dir().display());
        self.status = self.load_summary();
    }

    fn load_summary(&self) -> String {
        let unavailable = [
            self.teachers.notice(),
            self.courses.notice(),
            self.menu.notice(),
        ]
        .iter()
        .filter(|n| n.is_some())
        .count();

        if unavailable == 0 {
            s!("Loaded local data")
        } else {
            format!("Loaded with {unavailable} source(s) unavailable")
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav").show(ctx, |ui| {
            ui.add_space(4.0);
            components::tabs::draw(ui, self);
            ui.separator();
            components::action_bar::draw(ui, self);
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let page = self.current_page();
            page.draw_controls(ui, self);
            ui.separator();
            page.draw_body(ui, self);
        });
    }
}
