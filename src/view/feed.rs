// Feed view - composer plus post cards

use crate::model::{Account, MediaKind, Post};
use crate::state::FeedState;
use crate::style;
use eframe::egui;
use std::collections::{HashMap, HashSet};

// Post interactions touch the post list itself, so they are collected
// during the render pass and applied afterwards.
enum CardAction {
    Like(u64),
    SubmitComment(u64),
    Share(u64),
}

pub fn show(ui: &mut egui::Ui, feed: &mut FeedState, account: &Account) {
    egui::ScrollArea::vertical()
        .id_salt("feed_scroll")
        .auto_shrink([false, false])
        .show(ui, |ui| {
            composer(ui, feed, account);
            ui.add_space(style::CARD_SPACING);

            if feed.loading {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.spinner();
                    ui.label(egui::RichText::new("Loading your feed...").weak());
                });
                return;
            }

            let mut actions = Vec::new();
            {
                let FeedState {
                    posts,
                    comment_drafts,
                    open_comments,
                    ..
                } = feed;
                for post in posts.iter() {
                    post_card(ui, post, comment_drafts, open_comments, &mut actions);
                    ui.add_space(style::CARD_SPACING);
                }
            }
            for action in actions {
                match action {
                    CardAction::Like(id) => feed.toggle_like(id),
                    CardAction::SubmitComment(id) => {
                        feed.submit_comment(id);
                    }
                    CardAction::Share(id) => feed.share(id),
                }
            }
        });
}

fn composer(ui: &mut egui::Ui, feed: &mut FeedState, account: &Account) {
    ui.group(|ui| {
        ui.horizontal_top(|ui| {
            style::avatar(ui, &account.name, style::AVATAR_SMALL);
            ui.add(
                egui::TextEdit::multiline(&mut feed.composer)
                    .hint_text("What's on your mind?")
                    .desired_rows(style::COMPOSER_ROWS)
                    .desired_width(ui.available_width()),
            );
        });

        if let Some(media) = feed.attachment.clone() {
            ui.horizontal(|ui| {
                let icon = match media.kind {
                    MediaKind::Image => "🖼",
                    MediaKind::Video => "🎬",
                };
                ui.label(format!("{} {}", icon, media.label));
                if ui.small_button("✖").clicked() {
                    feed.clear_attachment();
                }
            });
        }

        ui.horizontal(|ui| {
            if ui.button("🖼 Photo").clicked() {
                feed.attach(MediaKind::Image);
            }
            if ui.button("🎬 Video").clicked() {
                feed.attach(MediaKind::Video);
            }
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .button(egui::RichText::new("Post").color(style::ACCENT).strong())
                    .clicked()
                {
                    feed.submit_post(&account.name);
                }
            });
        });
    });
}

fn post_card(
    ui: &mut egui::Ui,
    post: &Post,
    comment_drafts: &mut HashMap<u64, String>,
    open_comments: &mut HashSet<u64>,
    actions: &mut Vec<CardAction>,
) {
    ui.group(|ui| {
        ui.horizontal(|ui| {
            style::avatar(ui, &post.author, style::AVATAR_MEDIUM);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&post.author).strong().size(15.0));
                ui.label(egui::RichText::new(format!("Posted {}", post.age_label())).weak().small());
            });
        });

        if !post.body.is_empty() {
            ui.label(&post.body);
        }
        if let Some(media) = &post.media {
            let icon = match media.kind {
                MediaKind::Image => "🖼",
                MediaKind::Video => "🎬",
            };
            ui.group(|ui| {
                ui.label(egui::RichText::new(format!("{} {}", icon, media.label)).weak());
            });
        }

        ui.separator();
        ui.horizontal(|ui| {
            let like_text = if post.liked_by_me {
                egui::RichText::new(format!("👍 Like ({})", post.likes)).color(style::ACCENT)
            } else {
                egui::RichText::new(format!("👍 Like ({})", post.likes))
            };
            if ui.button(like_text).clicked() {
                actions.push(CardAction::Like(post.id));
            }
            if ui.button(format!("💬 Comment ({})", post.comments)).clicked() {
                if !open_comments.remove(&post.id) {
                    open_comments.insert(post.id);
                }
            }
            if ui.button(format!("↗ Share ({})", post.shares)).clicked() {
                actions.push(CardAction::Share(post.id));
            }
        });

        if open_comments.contains(&post.id) {
            let draft = comment_drafts.entry(post.id).or_default();
            ui.horizontal(|ui| {
                let response = ui.add(
                    egui::TextEdit::singleline(draft)
                        .hint_text("Write a comment...")
                        .desired_width(ui.available_width() - 64.0),
                );
                let entered =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button("Send").clicked() || entered {
                    actions.push(CardAction::SubmitComment(post.id));
                }
            });
        }
    });
}
