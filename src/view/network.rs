// My Network view - connection cards with a connect toggle

use crate::model::Connection;
use crate::state::NetworkState;
use crate::style;
use eframe::egui;

pub fn show(ui: &mut egui::Ui, network: &mut NetworkState) {
    ui.heading("My Network");
    ui.add_space(style::CARD_SPACING);

    let mut toggles = Vec::new();
    egui::ScrollArea::vertical()
        .id_salt("network_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for pair in network.connections.chunks(2) {
                ui.columns(2, |columns| {
                    for (column, connection) in columns.iter_mut().zip(pair) {
                        connection_card(column, connection, &mut toggles);
                    }
                });
                ui.add_space(style::CARD_SPACING);
            }
        });

    for id in toggles {
        network.toggle_connection(id);
    }
}

fn connection_card(ui: &mut egui::Ui, connection: &Connection, toggles: &mut Vec<u64>) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            style::avatar(ui, &connection.name, style::AVATAR_MEDIUM);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&connection.name).strong());
                ui.label(egui::RichText::new(&connection.headline).weak().small());
            });
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let label = if connection.connected {
                    egui::RichText::new("✔ Connected")
                } else {
                    egui::RichText::new("+ Connect").color(style::ACCENT)
                };
                if ui.button(label).clicked() {
                    toggles.push(connection.id);
                }
            });
        });
    });
}
