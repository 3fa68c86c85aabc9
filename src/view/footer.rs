// Footer strip

use chrono::{Datelike, Local};
use eframe::egui;

const SECTIONS: [&str; 5] = [
    "About",
    "Community",
    "Privacy & Terms",
    "Sales Solutions",
    "Help Center",
];

pub fn show(ui: &mut egui::Ui) {
    ui.horizontal(|ui| {
        for section in SECTIONS {
            ui.label(egui::RichText::new(section).weak().small());
            ui.add_space(8.0);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("© {} worknet. All rights reserved.", Local::now().year()))
                    .weak()
                    .small(),
            );
        });
    });
}
