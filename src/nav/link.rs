// Link - a clickable label that navigates instead of doing anything else

use super::location::LocationStore;
use eframe::egui;

/// Navigation trigger wrapping an egui clickable label.
///
/// A primary click calls `navigate(target)` on the injected store; every
/// activation produces exactly one change notification, rapid clicks one
/// each in order. Styling is passed through untouched.
pub struct Link {
    target: String,
    text: egui::WidgetText,
}

impl Link {
    pub fn new(target: impl Into<String>, text: impl Into<egui::WidgetText>) -> Self {
        Self {
            target: target.into(),
            text: text.into(),
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn show(self, ui: &mut egui::Ui, store: &LocationStore) -> egui::Response {
        let response = ui
            .add(egui::Label::new(self.text).sense(egui::Sense::click()))
            .on_hover_cursor(egui::CursorIcon::PointingHand);
        if response.clicked() {
            store.navigate(self.target);
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_carries_its_target() {
        let link = Link::new("/jobs", "Jobs");
        assert_eq!(link.target(), "/jobs");
    }
}
