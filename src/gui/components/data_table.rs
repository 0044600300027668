// src/gui/components/data_table.rs
//
// Draws one ReportTable. Purely a view.

use eframe::egui::{self, Color32, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::config::consts::{STATUS_COLUMN, STATUS_OFFLINE, STATUS_ONLINE};
use crate::data::ReportTable;

pub fn draw(ui: &mut egui::Ui, id_salt: &str, table: &ReportTable, max_height: f32) {
    let cols = table.column_count();
    if cols == 0 {
        ui.label("(empty table)");
        return;
    }
    let status_ci = table.column_index(STATUS_COLUMN);

    egui::ScrollArea::horizontal()
        .id_salt((id_salt, "hscroll"))
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .id_salt(id_salt)
                .striped(true)
                .resizable(true)
                .min_scrolled_height(0.0)
                .max_scroll_height(max_height)
                .columns(Column::auto().at_least(60.0).clip(true), cols)
                .header(24.0, |mut header| {
                    for name in table.columns() {
                        header.col(|ui| {
                            ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                            ui.label(RichText::new(name).strong());
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, table.row_count(), |mut row| {
                        let Some(data) = table.rows().get(row.index()) else { return };
                        for (ci, cell) in data.iter().enumerate() {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                let mut rt = RichText::new(cell);
                                if Some(ci) == status_ci {
                                    if let Some(c) = status_color(cell) {
                                        rt = rt.color(c);
                                    }
                                }
                                ui.label(rt);
                            });
                        }
                    });
                });
        });
}

/// Green/red for the two known values; others keep the default text color.
pub fn status_color(status: &str) -> Option<Color32> {
    match status {
        STATUS_ONLINE => Some(Color32::from_rgb(0x3C, 0xB3, 0x71)),
        STATUS_OFFLINE => Some(Color32::from_rgb(0xDC, 0x61, 0x49)),
        _ => None,
    }
}
