// Right panel - the signed-in user's profile card

use crate::model::Account;
use crate::style;
use eframe::egui;

pub fn show(ui: &mut egui::Ui, account: &Account) {
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        style::avatar(ui, &account.name, style::AVATAR_LARGE);
        ui.add_space(4.0);
        ui.label(egui::RichText::new(&account.name).strong().size(18.0));
        ui.label(egui::RichText::new(&account.headline).weak());
    });

    ui.add_space(8.0);
    section(ui, "About", |ui| {
        ui.label(
            egui::RichText::new(
                "Passionate about creating innovative solutions and learning new technologies.",
            )
            .small(),
        );
    });
    section(ui, "Experience", |ui| {
        ui.label(egui::RichText::new("Senior Developer at Tech Co.").strong().small());
        ui.label(egui::RichText::new("2018 - Present").weak().small());
    });
    section(ui, "Education", |ui| {
        ui.label(egui::RichText::new("BS in Computer Science").strong().small());
        ui.label(
            egui::RichText::new("University of Technology, 2014-2018")
                .weak()
                .small(),
        );
    });
}

fn section(ui: &mut egui::Ui, title: &str, body: impl FnOnce(&mut egui::Ui)) {
    ui.add_space(6.0);
    ui.label(egui::RichText::new(title).strong());
    body(ui);
}
