// Jobs view - listing cards with an apply button

use crate::state::JobsState;
use crate::style;
use eframe::egui;

pub fn show(ui: &mut egui::Ui, jobs: &mut JobsState) {
    ui.heading("Jobs");
    ui.add_space(style::CARD_SPACING);

    let mut applications = Vec::new();
    egui::ScrollArea::vertical()
        .id_salt("jobs_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for job in &jobs.jobs {
                ui.group(|ui| {
                    ui.label(egui::RichText::new(&job.title).strong().size(16.0));
                    ui.label(&job.company);
                    ui.label(egui::RichText::new(&job.location).weak());
                    ui.label(egui::RichText::new(&job.salary).weak());
                    ui.add_space(4.0);
                    if job.applied {
                        ui.add_enabled(false, egui::Button::new("✔ Applied"));
                    } else if ui
                        .button(egui::RichText::new("Apply").color(style::ACCENT))
                        .clicked()
                    {
                        applications.push(job.id);
                    }
                });
                ui.add_space(style::CARD_SPACING);
            }
        });

    for id in applications {
        jobs.apply(id);
    }
}
