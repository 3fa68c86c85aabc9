// Notifications view - activity rows; opening the view clears the badge

use crate::state::NotificationsState;
use crate::style;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

pub fn show(ui: &mut egui::Ui, notifications: &mut NotificationsState) {
    ui.heading("Notifications");
    ui.add_space(style::CARD_SPACING);

    egui::ScrollArea::vertical()
        .id_salt("notifications_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(style::AVATAR_MEDIUM + 8.0))
                .column(Column::remainder().clip(true))
                .column(Column::auto().at_least(60.0))
                .body(|body| {
                    body.rows(style::ROW_HEIGHT, notifications.items.len(), |mut row| {
                        let item = &notifications.items[row.index()];
                        row.col(|ui| {
                            style::avatar(ui, &item.actor, style::AVATAR_SMALL);
                        });
                        row.col(|ui| {
                            let mut text = egui::text::LayoutJob::default();
                            let strong = egui::TextFormat {
                                color: ui.visuals().strong_text_color(),
                                ..Default::default()
                            };
                            let plain = egui::TextFormat {
                                color: ui.visuals().text_color(),
                                ..Default::default()
                            };
                            text.append(&item.actor, 0.0, strong);
                            text.append(&format!(" {}", item.action), 0.0, plain);
                            ui.label(text);
                            if !item.read {
                                ui.label(egui::RichText::new("●").color(style::ACCENT).small());
                            }
                        });
                        row.col(|ui| {
                            ui.label(egui::RichText::new(&item.age).weak().small());
                        });
                    });
                });
        });

    // Seen once rendered; the nav badge clears on the next frame.
    notifications.mark_all_read();
}
