// src/gui/components/settings_panel.rs
//
// Left panel: category selector. Changing it only rebuilds the filtered view;
// it never triggers a fetch.

use eframe::egui::{self, Color32, RichText};
use crate::{config::options::Category, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Settings");
    ui.separator();

    ui.label("Data category:");
    let before = app.state.gui.category;
    for cat in Category::ALL {
        ui.radio_value(&mut app.state.gui.category, cat, cat.label());
    }
    if app.state.gui.category != before {
        logf!("UI: Category → {:?}", app.state.gui.category);
        app.rebuild_view();
    }

    if let Err(problem) = &app.credentials {
        ui.add_space(12.0);
        ui.label(RichText::new(problem.to_string()).color(Color32::from_rgb(0xF0, 0xD2, 0x3C)));
    }
}
