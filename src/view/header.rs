// Top bar - brand, search, nav links, session controls

use crate::nav::{Link, LocationStore};
use crate::state::SessionState;
use crate::style;
use eframe::egui;

pub struct HeaderContext<'a> {
    pub nav: &'a LocationStore,
    pub session: &'a mut SessionState,
    pub search_query: &'a mut String,
    pub unread_notifications: usize,
}

pub fn show(ui: &mut egui::Ui, ctx: &mut HeaderContext) {
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        Link::new(
            "/",
            egui::RichText::new("worknet")
                .color(style::ACCENT)
                .size(22.0)
                .strong(),
        )
        .show(ui, ctx.nav);

        ui.add_space(12.0);
        ui.add(
            egui::TextEdit::singleline(ctx.search_query)
                .hint_text("Search")
                .desired_width(200.0),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let name = ctx
                .session
                .account
                .as_ref()
                .map(|a| a.name.clone())
                .unwrap_or_default();

            if ui.button("Log out").clicked() {
                log::info!("{} signed out", name);
                ctx.session.sign_out();
                ctx.nav.navigate("/login");
            }
            ui.label(egui::RichText::new(&name).strong());
            style::avatar(ui, &name, style::AVATAR_SMALL);

            ui.add_space(16.0);
            nav_item(ui, ctx.nav, "/notifications", "Notifications", ctx.unread_notifications);
            nav_item(ui, ctx.nav, "/messaging", "Messaging", 0);
            nav_item(ui, ctx.nav, "/jobs", "Jobs", 0);
            nav_item(ui, ctx.nav, "/mynetwork", "My Network", 0);
            nav_item(ui, ctx.nav, "/", "Home", 0);
        });
    });
    ui.add_space(6.0);
}

fn nav_item(ui: &mut egui::Ui, nav: &LocationStore, target: &str, label: &str, badge: usize) {
    let is_active = nav.current() == target;
    let text = if is_active {
        egui::RichText::new(label).color(style::ACCENT).strong()
    } else {
        egui::RichText::new(label)
    };
    if badge > 0 {
        ui.label(
            egui::RichText::new(format!(" {} ", badge))
                .small()
                .color(egui::Color32::WHITE)
                .background_color(style::BADGE),
        );
    }
    Link::new(target, text).show(ui, nav);
    ui.add_space(8.0);
}
