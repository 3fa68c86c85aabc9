// Messaging view - conversation list next to the open thread

use crate::model::Conversation;
use crate::state::MessagingState;
use crate::style;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

pub fn show(ui: &mut egui::Ui, messaging: &mut MessagingState) {
    let mut select = None;
    let mut send = false;

    ui.horizontal_top(|ui| {
        ui.vertical(|ui| {
            ui.set_width(style::CONVERSATION_LIST_WIDTH);
            ui.heading("Messages");
            ui.separator();
            conversation_list(ui, messaging, &mut select);
        });

        ui.separator();

        ui.vertical(|ui| {
            let MessagingState {
                conversations,
                selected,
                draft,
            } = messaging;
            let open = selected.and_then(|id| conversations.iter().find(|c| c.id == id));
            match open {
                Some(conversation) => send = thread_pane(ui, conversation, draft),
                None => {
                    ui.add_space(24.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new("Select a conversation to start messaging").weak(),
                        );
                    });
                }
            }
        });
    });

    if let Some(id) = select {
        messaging.select(id);
    }
    if send {
        messaging.send_draft();
    }
}

fn conversation_list(ui: &mut egui::Ui, messaging: &MessagingState, select: &mut Option<u64>) {
    egui::ScrollArea::vertical()
        .id_salt("conversation_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(false)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .column(Column::auto().at_least(style::AVATAR_SMALL + 8.0))
                .column(Column::remainder().clip(true))
                .body(|body| {
                    body.rows(style::ROW_HEIGHT, messaging.conversations.len(), |mut row| {
                        let conversation = &messaging.conversations[row.index()];
                        let is_selected = messaging.selected == Some(conversation.id);
                        row.set_selected(is_selected);

                        row.col(|ui| {
                            style::avatar(ui, &conversation.peer, style::AVATAR_SMALL);
                        });
                        row.col(|ui| {
                            ui.vertical(|ui| {
                                let response = style::truncated_label_with_sense(
                                    ui,
                                    egui::RichText::new(&conversation.peer).strong(),
                                    egui::Sense::click(),
                                );
                                style::truncated_label(
                                    ui,
                                    egui::RichText::new(conversation.preview()).weak().small(),
                                );
                                if response.clicked() {
                                    *select = Some(conversation.id);
                                }
                            });
                        });
                    });
                });
        });
}

/// Renders the open thread; returns true when the draft should be sent.
fn thread_pane(ui: &mut egui::Ui, conversation: &Conversation, draft: &mut String) -> bool {
    ui.horizontal(|ui| {
        style::avatar(ui, &conversation.peer, style::AVATAR_SMALL);
        ui.label(egui::RichText::new(&conversation.peer).strong().size(16.0));
    });
    ui.separator();

    let input_height = 40.0;
    egui::ScrollArea::vertical()
        .id_salt("thread_scroll")
        .auto_shrink([false, false])
        .max_height(ui.available_height() - input_height)
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in &conversation.transcript {
                let layout = if message.outgoing {
                    egui::Layout::right_to_left(egui::Align::Min)
                } else {
                    egui::Layout::left_to_right(egui::Align::Min)
                };
                ui.with_layout(layout, |ui| {
                    let fill = if message.outgoing {
                        style::ACCENT.gamma_multiply(0.18)
                    } else {
                        ui.visuals().faint_bg_color
                    };
                    egui::Frame::group(ui.style()).fill(fill).show(ui, |ui| {
                        ui.set_max_width(ui.available_width() * 0.7);
                        ui.label(&message.body);
                    });
                });
                ui.add_space(4.0);
            }
        });

    let mut send = false;
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(draft)
                .hint_text("Type a message...")
                .desired_width(ui.available_width() - 64.0),
        );
        let entered = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Send").clicked() || entered {
            send = true;
        }
    });
    send
}
