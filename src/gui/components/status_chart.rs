// src/gui/components/status_chart.rs
//
// Counts grid + a painter-drawn bar chart, one bar per status value.

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use super::data_table::status_color;
use crate::status::StatusCount;

const CHART_H: f32 = 220.0;
const LABEL_H: f32 = 18.0;
const BAR_GAP: f32 = 12.0;

pub fn draw(ui: &mut egui::Ui, counts: &[StatusCount]) {
    egui::Grid::new("status_counts")
        .striped(true)
        .num_columns(2)
        .show(ui, |ui| {
            ui.strong("Status");
            ui.strong("Sites");
            ui.end_row();
            for c in counts {
                ui.label(&c.status);
                ui.label(c.count.to_string());
                ui.end_row();
            }
        });

    ui.add_space(8.0);

    if counts.is_empty() {
        ui.label("No rows to chart.");
        return;
    }

    let width = ui.available_width().max(120.0);
    let (rect, _) = ui.allocate_exact_size(Vec2::new(width, CHART_H), Sense::hover());
    let painter = ui.painter_at(rect);

    let text = ui.visuals().text_color();
    let fallback = ui.visuals().selection.bg_fill;
    let max = counts.iter().map(|c| c.count).max().unwrap_or(1).max(1) as f32;

    // value labels above bars, status labels below the baseline
    let plot_top = rect.top() + LABEL_H;
    let baseline = rect.bottom() - LABEL_H;
    let plot_h = (baseline - plot_top).max(1.0);
    let slot_w = rect.width() / counts.len() as f32;
    let bar_w = (slot_w - BAR_GAP).max(4.0);

    painter.line_segment(
        [Pos2::new(rect.left(), baseline), Pos2::new(rect.right(), baseline)],
        Stroke::new(1.0, text),
    );

    for (i, c) in counts.iter().enumerate() {
        let x0 = rect.left() + i as f32 * slot_w + (slot_w - bar_w) * 0.5;
        let h = plot_h * c.count as f32 / max;
        let bar = Rect::from_min_max(Pos2::new(x0, baseline - h), Pos2::new(x0 + bar_w, baseline));
        painter.rect_filled(bar, 2.0, status_color(&c.status).unwrap_or(fallback));

        let cx = bar.center().x;
        painter.text(Pos2::new(cx, bar.top() - 2.0), Align2::CENTER_BOTTOM,
            c.count.to_string(), FontId::proportional(12.0), text);
        painter.text(Pos2::new(cx, baseline + 2.0), Align2::CENTER_TOP,
            &c.status, FontId::proportional(12.0), text);
    }
}
