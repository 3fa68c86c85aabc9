use eframe::egui;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn from_mode(mode: &str) -> Self {
        match mode {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn apply(self, ctx: &egui::Context) {
        match self {
            Theme::Light => ctx.set_visuals(egui::Visuals::light()),
            Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        }
    }
}

// --- Colors ---
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(10, 102, 194);
pub const BADGE: egui::Color32 = egui::Color32::from_rgb(204, 37, 41);

// Avatar background palette, picked per name
const AVATAR_COLORS: [egui::Color32; 5] = [
    egui::Color32::from_rgb(10, 102, 194),
    egui::Color32::from_rgb(119, 70, 158),
    egui::Color32::from_rgb(28, 135, 84),
    egui::Color32::from_rgb(183, 88, 22),
    egui::Color32::from_rgb(140, 46, 80),
];

// --- Sizing ---
pub const AVATAR_LARGE: f32 = 96.0;
pub const AVATAR_MEDIUM: f32 = 48.0;
pub const AVATAR_SMALL: f32 = 32.0;
pub const SIDEBAR_WIDTH: f32 = 240.0;
pub const PROFILE_WIDTH: f32 = 280.0;
pub const CONVERSATION_LIST_WIDTH: f32 = 260.0;
pub const ROW_HEIGHT: f32 = 44.0;
pub const CARD_SPACING: f32 = 8.0;
pub const COMPOSER_ROWS: usize = 3;
pub const AUTH_FORM_WIDTH: f32 = 320.0;

// --- Helper functions ---

/// Round initials avatar, colored by name.
pub fn avatar(ui: &mut egui::Ui, name: &str, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::Vec2::splat(size), egui::Sense::hover());
    if ui.is_rect_visible(rect) {
        let fill = avatar_color(name);
        ui.painter().circle_filled(rect.center(), size / 2.0, fill);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            crate::model::initials(name),
            egui::FontId::proportional(size * 0.38),
            egui::Color32::WHITE,
        );
    }
    response
}

fn avatar_color(name: &str) -> egui::Color32 {
    let sum: usize = name.bytes().map(|b| b as usize).sum();
    AVATAR_COLORS[sum % AVATAR_COLORS.len()]
}

pub fn truncated_label(ui: &mut egui::Ui, text: impl Into<egui::WidgetText>) -> egui::Response {
    ui.add(egui::Label::new(text).truncate())
}

pub fn truncated_label_with_sense(
    ui: &mut egui::Ui,
    text: impl Into<egui::WidgetText>,
    sense: egui::Sense,
) -> egui::Response {
    ui.add(egui::Label::new(text).truncate().sense(sense))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_mode_parsing_defaults_to_light() {
        assert_eq!(Theme::from_mode("dark"), Theme::Dark);
        assert_eq!(Theme::from_mode("light"), Theme::Light);
        assert_eq!(Theme::from_mode("mauve"), Theme::Light);
    }

    #[test]
    fn avatar_color_is_stable_per_name() {
        assert_eq!(avatar_color("Alice Johnson"), avatar_color("Alice Johnson"));
    }
}
