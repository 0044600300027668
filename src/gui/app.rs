// src/gui/app.rs
use std::error::Error;

use eframe::egui;

use crate::{
    config::{
        self,
        credentials::Credentials,
        options::AppOptions,
        state::AppState,
    },
    data::{ReportState, ReportTable},
    error::MissingVar,
    status::{self, StatusCount},
};

use super::components::{action_bar, data_table, settings_panel, status_chart};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Tower Online/Offline Report",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BannerKind {
    Info,
    Success,
    Error,
}

/// One-line outcome of the last action.
#[derive(Clone, Debug)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // read once at startup; Err names the missing variable and every refresh fails with it
    pub credentials: Result<Credentials, MissingVar>,

    // last good fetch (table + time, replaced together)
    pub report: ReportState,

    // derived for the current category; rebuilt on refresh and on selection change
    pub filtered: Option<ReportTable>,
    pub counts: Option<Vec<StatusCount>>,

    // output dir text field UX (we map this <-> ExportOptions)
    pub out_dir_text: String,
    pub out_dir_dirty: bool,

    // status line follows refresh phases; banner holds the last outcome
    pub status: String,
    pub banner: Option<Banner>,
}

impl App {
    pub fn new(mut state: AppState) -> Self {
        // .env before either reader
        config::load_env();
        state.options = AppOptions::from_env();

        let credentials = Credentials::from_env();
        match &credentials {
            Ok(c) => logf!("Init: credentials for {}", c.username()),
            Err(e) => loge!("Init: {}", e),
        }

        logf!(
            "Init: login={} report={}",
            state.options.portal.login_url,
            state.options.portal.report_url
        );

        let out_dir_text = state.options.export.out_dir().to_string_lossy().into_owned();

        Self {
            state,
            credentials,
            report: ReportState::new(),
            filtered: None,
            counts: None,
            out_dir_text,
            out_dir_dirty: false,
            status: s!("Idle"),
            banner: Some(Banner {
                kind: BannerKind::Info,
                text: s!("No data yet. Click “Fetch data from web” first."),
            }),
        }
    }

    pub fn set_banner(&mut self, kind: BannerKind, text: impl Into<String>) {
        self.banner = Some(Banner { kind, text: text.into() });
    }

    /// Recompute the filtered view and counts from the cached table.
    pub fn rebuild_view(&mut self) {
        let category = self.state.gui.category;
        match self.report.table() {
            Some(table) => {
                self.filtered = Some(status::filter_by_status(table, category.status()));
                self.counts = status::status_counts(table);
            }
            None => {
                self.filtered = None;
                self.counts = None;
            }
        }
    }

    /// Push a typed output dir into the options before it's used.
    pub fn apply_out_dir(&mut self) {
        if self.out_dir_dirty {
            self.state.options.export.set_out_dir(&self.out_dir_text);
            logf!("Export: Out dir set → {}", self.state.options.export.out_dir().display());
            self.out_dir_dirty = false;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("settings")
            .resizable(false)
            .show(ctx, |ui| {
                settings_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("main_scroll")
                .show(ui, |ui| {
                    ui.heading("📊 Tower Online / Offline Report");
                    ui.label("Data is pulled straight from the report portal with an automatic login.");
                    ui.add_space(6.0);

                    action_bar::draw(ui, self);

                    ui.separator();

                    draw_report(ui, self);
                });
        });
    }
}

fn draw_report(ui: &mut egui::Ui, app: &App) {
    let Some(snap) = app.report.snapshot() else {
        return;
    };
    let height = app.state.gui.table_height;
    let category = app.state.gui.category;

    ui.heading("📄 Towers (all)");
    data_table::draw(ui, "table_all", &snap.table, height);

    ui.add_space(8.0);
    ui.heading(format!("🔍 {}", category.view_title()));
    if let Some(filtered) = &app.filtered {
        data_table::draw(ui, "table_filtered", filtered, height);
    }

    ui.add_space(8.0);
    ui.heading("📈 Sites per status");
    match &app.counts {
        Some(counts) => status_chart::draw(ui, counts),
        None => {
            ui.label("No 'Status' column in the report, so there is nothing to chart.");
        }
    }
}
