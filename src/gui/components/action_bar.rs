// src/gui/components/action_bar.rs
//
// Refresh button, export row, status line and outcome banner.
// Clicks dispatch to gui::actions; nothing here touches the network or disk.

use eframe::egui::{self, Color32, RichText};
use crate::{
    config::options::Category,
    core::clock,
    gui::{actions, app::{App, BannerKind}},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    // --- Refresh ---
    ui.horizontal(|ui| {
        let red = Color32::from_rgb(220, 30, 30);
        let black = Color32::BLACK;

        let button_refresh = ui.add(
            egui::Button::new(
                RichText::new("🔄 Fetch data from web")
                .color(black)
                .strong())
            .fill(red));

        if button_refresh.clicked() {
            actions::refresh(app);
        }

        ui.label(format!("Status: {}", app.status));
    });

    draw_banner(ui, app);

    if let Some(at) = app.report.fetched_at() {
        if let Ok(when) = clock::banner_stamp(at) {
            ui.label(RichText::new(format!("Last refresh: {when}")).weak());
        }
    }

    // --- Export (only once there is something to export) ---
    if app.report.snapshot().is_none() {
        return;
    }

    ui.add_space(6.0);
    ui.label(RichText::new("💾 Export / Download").strong());

    ui.horizontal(|ui| {
        ui.label("Output folder:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_dir_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_dir_dirty = true;
            logd!("UI: out_dir_text changed (dirty=true) → {}", app.out_dir_text);
        }
    });

    ui.horizontal(|ui| {
        if ui.button(Category::All.export_label()).clicked() {
            actions::export(app, Category::All);
        }

        // Second button follows the selected category
        let category = app.state.gui.category;
        if ui.button(category.export_label()).clicked() {
            actions::export(app, category);
        }
    });
}

fn draw_banner(ui: &mut egui::Ui, app: &App) {
    let Some(banner) = &app.banner else { return };
    let color = match banner.kind {
        BannerKind::Info => ui.visuals().text_color(),
        BannerKind::Success => Color32::from_rgb(0x3C, 0xB3, 0x71),
        BannerKind::Error => Color32::from_rgb(0xDC, 0x61, 0x49),
    };
    ui.label(RichText::new(&banner.text).color(color));
}
