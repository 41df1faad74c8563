// src/gui/components/data_table.rs
//
// Draws the filtered leads. Purely a view: resolves `app.view` row indices
// against the canonical leads and shows the columns picked in the sidebar.

use eframe::egui::{self, Align, Color32, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::{config::consts::COLUMNS, gui::app::App};

/// Rating column is centered; everything else reads left to right.
const RATING_COL: usize = 3;
const HIGH_TINT: Color32 = Color32::from_rgba_premultiplied(0x40, 0x10, 0x08, 0x40);

fn initial_width(ci: usize) -> f32 {
    match ci {
        0 => 220.0, // Nombre
        1 => 260.0, // Dirección
        3 => 80.0,  // Calificación
        4 => 200.0, // Sitio Web
        6 => 120.0, // Prioridad
        7 => 140.0, // Fecha
        _ => 130.0,
    }
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let cols: Vec<usize> = app
        .state
        .gui
        .visible_columns
        .iter()
        .copied()
        .filter(|&c| c < COLUMNS.len())
        .collect();

    ui.horizontal(|ui| {
        ui.strong("Leads");
        ui.label(format!("{} of {}", app.view.len(), app.data.leads.len()));
    });

    if cols.is_empty() {
        ui.label("No columns selected");
        return;
    }

    // Ensure scroll bars allocate space (not floating over content)
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
    }

    let leads = &app.data.leads;
    let row_ix = &app.view.row_ix;

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("leads_table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .min_scrolled_height(0.0)
                // column set changes → fresh widths
                .id_salt(("leads_table", &cols));
            for &ci in &cols {
                table = table.column(Column::initial(initial_width(ci)).at_least(40.0).clip(true));
            }

            table
                .header(24.0, |mut header| {
                    for &ci in &cols {
                        header.col(|ui| {
                            ui.add(egui::Label::new(RichText::new(COLUMNS[ci]).strong()).selectable(false));
                        });
                    }
                })
                .body(|body| {
                    body.rows(20.0, row_ix.len(), |mut row| {
                        let Some(lead) = row_ix.get(row.index()).and_then(|&i| leads.get(i)) else {
                            return;
                        };
                        let high = lead.is_high_priority();
                        for &ci in &cols {
                            row.col(|ui| {
                                if high {
                                    ui.painter().rect_filled(ui.max_rect(), 0.0, HIGH_TINT);
                                }
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                let mut rt = RichText::new(lead.cell(ci));
                                if ci == 6 && high {
                                    rt = rt.strong().color(Color32::from_rgb(0xDC, 0x61, 0x49));
                                }
                                if ci == RATING_COL {
                                    ui.centered_and_justified(|ui| { ui.label(rt); });
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(rt); });
                                }
                            });
                        }
                    });
                });
        });
}
