// src/gui/components/charts.rs
//
// Two small charts drawn straight on the painter:
// - stacked bars per business type (HIGH over NORMAL)
// - leads per day; when every lead shares one day, leads per type instead

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::{
    data::{breakdown_by_type, leads_per_day, TypeBreakdown},
    gui::app::App,
};

const CHART_H: f32 = 180.0;
const HIGH_COLOR: Color32 = Color32::from_rgb(0xDC, 0x61, 0x49);
const NORMAL_COLOR: Color32 = Color32::from_rgb(0x4C, 0xAF, 0x50);
const LINE_COLOR: Color32 = Color32::from_rgb(0x64, 0xB4, 0xFF);

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let leads = app.selected();
    let by_type = breakdown_by_type(&leads);
    let per_day = leads_per_day(&leads);

    let half = (ui.available_width() - ui.spacing().item_spacing.x) / 2.0;
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.strong("Leads by type and priority");
            stacked_bars(ui, half, &by_type);
        });
        ui.vertical(|ui| {
            if per_day.len() > 1 {
                ui.strong("Leads per day");
                let points: Vec<(String, usize)> = per_day
                    .iter()
                    .map(|(d, n)| (d.format("%d/%m").to_string(), *n))
                    .collect();
                line(ui, half, &points);
            } else {
                ui.strong("Leads per type");
                let bars: Vec<(String, usize)> = by_type
                    .iter()
                    .map(|t| (t.business_type.clone(), t.total()))
                    .collect();
                simple_bars(ui, half, &bars);
            }
        });
    });
}

fn canvas(ui: &mut egui::Ui, width: f32) -> (Rect, egui::Painter) {
    let (resp, painter) = ui.allocate_painter(Vec2::new(width.max(120.0), CHART_H), Sense::hover());
    let frame = resp.rect;
    painter.rect_stroke(frame, 2.0, ui.visuals().widgets.noninteractive.bg_stroke, egui::StrokeKind::Inside);
    // room for labels underneath and counts on top
    let plot = Rect::from_min_max(frame.min + Vec2::new(8.0, 16.0), frame.max - Vec2::new(8.0, 20.0));
    (plot, painter)
}

fn empty(painter: &egui::Painter, plot: Rect, ui: &egui::Ui) {
    painter.text(plot.center(), Align2::CENTER_CENTER, "No data", FontId::proportional(12.0), ui.visuals().weak_text_color());
}

fn stacked_bars(ui: &mut egui::Ui, width: f32, rows: &[TypeBreakdown]) {
    let (plot, painter) = canvas(ui, width);
    let max = rows.iter().map(TypeBreakdown::total).max().unwrap_or(0);
    if max == 0 {
        return empty(&painter, plot, ui);
    }

    let text = ui.visuals().text_color();
    let slot = plot.width() / rows.len() as f32;
    let bar_w = (slot * 0.6).min(60.0);
    let scale = plot.height() / max as f32;

    for (i, row) in rows.iter().enumerate() {
        let cx = plot.left() + slot * (i as f32 + 0.5);
        let x0 = cx - bar_w / 2.0;
        let x1 = cx + bar_w / 2.0;

        let normal_top = plot.bottom() - row.normal as f32 * scale;
        let high_top = normal_top - row.high as f32 * scale;
        painter.rect_filled(Rect::from_min_max(Pos2::new(x0, normal_top), Pos2::new(x1, plot.bottom())), 0.0, NORMAL_COLOR);
        painter.rect_filled(Rect::from_min_max(Pos2::new(x0, high_top), Pos2::new(x1, normal_top)), 0.0, HIGH_COLOR);

        painter.text(Pos2::new(cx, high_top - 2.0), Align2::CENTER_BOTTOM, row.total().to_string(), FontId::proportional(11.0), text);
        painter.text(Pos2::new(cx, plot.bottom() + 3.0), Align2::CENTER_TOP, short(&row.business_type), FontId::proportional(10.0), text);
    }
}

fn simple_bars(ui: &mut egui::Ui, width: f32, bars: &[(String, usize)]) {
    let (plot, painter) = canvas(ui, width);
    let max = bars.iter().map(|(_, n)| *n).max().unwrap_or(0);
    if max == 0 {
        return empty(&painter, plot, ui);
    }

    let text = ui.visuals().text_color();
    let slot = plot.width() / bars.len() as f32;
    let bar_w = (slot * 0.6).min(60.0);
    let scale = plot.height() / max as f32;

    for (i, (label, n)) in bars.iter().enumerate() {
        let cx = plot.left() + slot * (i as f32 + 0.5);
        let top = plot.bottom() - *n as f32 * scale;
        painter.rect_filled(
            Rect::from_min_max(Pos2::new(cx - bar_w / 2.0, top), Pos2::new(cx + bar_w / 2.0, plot.bottom())),
            0.0,
            LINE_COLOR,
        );
        painter.text(Pos2::new(cx, top - 2.0), Align2::CENTER_BOTTOM, n.to_string(), FontId::proportional(11.0), text);
        painter.text(Pos2::new(cx, plot.bottom() + 3.0), Align2::CENTER_TOP, short(label), FontId::proportional(10.0), text);
    }
}

fn line(ui: &mut egui::Ui, width: f32, points: &[(String, usize)]) {
    let (plot, painter) = canvas(ui, width);
    let max = points.iter().map(|(_, n)| *n).max().unwrap_or(0);
    if max == 0 || points.len() < 2 {
        return empty(&painter, plot, ui);
    }

    let text = ui.visuals().text_color();
    let step = plot.width() / (points.len() - 1) as f32;
    let scale = plot.height() / max as f32;
    let pos: Vec<Pos2> = points
        .iter()
        .enumerate()
        .map(|(i, (_, n))| Pos2::new(plot.left() + step * i as f32, plot.bottom() - *n as f32 * scale))
        .collect();

    for pair in pos.windows(2) {
        painter.line_segment([pair[0], pair[1]], Stroke::new(2.0, LINE_COLOR));
    }
    // label every point when they fit, else roughly eight of them
    let every = (points.len() / 8).max(1);
    for (i, (p, (label, n))) in pos.iter().zip(points).enumerate() {
        painter.circle_filled(*p, 3.0, LINE_COLOR);
        if i % every == 0 || i + 1 == points.len() {
            painter.text(*p - Vec2::new(0.0, 4.0), Align2::CENTER_BOTTOM, n.to_string(), FontId::proportional(10.0), text);
            painter.text(Pos2::new(p.x, plot.bottom() + 3.0), Align2::CENTER_TOP, label, FontId::proportional(10.0), text);
        }
    }
}

fn short(label: &str) -> String {
    let mut out: String = label.chars().take(14).collect();
    if label.chars().count() > 14 {
        out.push('…');
    }
    out
}
