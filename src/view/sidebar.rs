// Left sidebar - profile summary, stats, nav links

use crate::model::Account;
use crate::nav::{Link, LocationStore};
use crate::style;
use eframe::egui;

pub fn show(
    ui: &mut egui::Ui,
    nav: &LocationStore,
    account: &Account,
    connected_count: usize,
) {
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        style::avatar(ui, &account.name, style::AVATAR_LARGE);
        ui.add_space(4.0);
        ui.label(egui::RichText::new(&account.name).strong().size(16.0));
        ui.label(egui::RichText::new(&account.headline).weak());
    });

    ui.separator();
    stat_line(ui, "Who viewed your profile", 47);
    stat_line(ui, "Views of your post", 124);
    stat_line(ui, "Connections", connected_count);

    ui.separator();
    sidebar_link(ui, nav, "/", "Home");
    sidebar_link(ui, nav, "/mynetwork", "My Network");
    sidebar_link(ui, nav, "/jobs", "Jobs");
    sidebar_link(ui, nav, "/messaging", "Messaging");
    sidebar_link(ui, nav, "/notifications", "Notifications");

    ui.separator();
    ui.label(egui::RichText::new("Access exclusive tools & insights").weak());
    ui.label(egui::RichText::new("Try Premium for free").color(style::ACCENT));
}

fn stat_line(ui: &mut egui::Ui, label: &str, value: usize) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(label).weak().small());
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(value.to_string())
                    .color(style::ACCENT)
                    .strong(),
            );
        });
    });
}

fn sidebar_link(ui: &mut egui::Ui, nav: &LocationStore, target: &str, label: &str) {
    let is_active = nav.current() == target;
    let text = if is_active {
        egui::RichText::new(label).color(style::ACCENT).strong()
    } else {
        egui::RichText::new(label)
    };
    Link::new(target, text).show(ui, nav);
    ui.add_space(2.0);
}
