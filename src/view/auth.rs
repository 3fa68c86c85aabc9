// Login and sign-up forms, shown while no session is open

use crate::api::ApiCommand;
use crate::state::{AuthScreen, SessionState};
use crate::style;
use eframe::egui;
use std::sync::mpsc::Sender;

pub fn show(ui: &mut egui::Ui, session: &mut SessionState, api_tx: &Sender<ApiCommand>) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() * 0.15);
        ui.heading(
            egui::RichText::new("worknet")
                .color(style::ACCENT)
                .size(34.0)
                .strong(),
        );
        ui.add_space(4.0);
        ui.label(egui::RichText::new("Stay connected with your professional world").weak());
        ui.add_space(24.0);

        match session.screen {
            AuthScreen::Login => login_form(ui, session, api_tx),
            AuthScreen::SignUp => signup_form(ui, session, api_tx),
        }
    });
}

fn login_form(ui: &mut egui::Ui, session: &mut SessionState, api_tx: &Sender<ApiCommand>) {
    let mut submit = false;

    form_error(ui, session);
    form_field(ui, &mut session.email, "Email", false, session.pending);
    submit |= form_field(ui, &mut session.password, "Password", true, session.pending);
    ui.add_space(12.0);

    if session.pending {
        ui.spinner();
        ui.label(egui::RichText::new("Signing in...").weak());
    } else {
        let button = egui::Button::new("Sign in").min_size(egui::vec2(style::AUTH_FORM_WIDTH, 32.0));
        submit |= ui.add(button).clicked();

        ui.add_space(16.0);
        ui.label(egui::RichText::new("New to worknet?").weak());
        if ui.link("Join now").clicked() {
            session.switch_screen(AuthScreen::SignUp);
        }
    }

    if submit && !session.pending {
        session.begin_request();
        let _ = api_tx.send(ApiCommand::LogIn {
            email: session.email.clone(),
            password: session.password.clone(),
        });
    }
}

fn signup_form(ui: &mut egui::Ui, session: &mut SessionState, api_tx: &Sender<ApiCommand>) {
    let mut submit = false;

    form_error(ui, session);
    form_field(ui, &mut session.name, "Full name", false, session.pending);
    form_field(ui, &mut session.email, "Email", false, session.pending);
    form_field(ui, &mut session.password, "Password", true, session.pending);
    submit |= form_field(ui, &mut session.confirm, "Confirm password", true, session.pending);
    ui.add_space(12.0);

    if session.pending {
        ui.spinner();
        ui.label(egui::RichText::new("Creating your account...").weak());
    } else {
        let button = egui::Button::new("Join now").min_size(egui::vec2(style::AUTH_FORM_WIDTH, 32.0));
        submit |= ui.add(button).clicked();

        ui.add_space(16.0);
        ui.label(egui::RichText::new("Already on worknet?").weak());
        if ui.link("Sign in").clicked() {
            session.switch_screen(AuthScreen::Login);
        }
    }

    if submit && !session.pending {
        // Confirm mismatch never leaves the client
        if session.password != session.confirm {
            session.error = Some("Passwords do not match.".to_string());
            return;
        }
        session.begin_request();
        let _ = api_tx.send(ApiCommand::SignUp {
            name: session.name.clone(),
            email: session.email.clone(),
            password: session.password.clone(),
        });
    }
}

fn form_error(ui: &mut egui::Ui, session: &SessionState) {
    if let Some(error) = &session.error {
        ui.colored_label(style::BADGE, error);
        ui.add_space(8.0);
    }
}

/// Render one input. Returns true when Enter was pressed in it.
fn form_field(
    ui: &mut egui::Ui,
    buffer: &mut String,
    hint: &str,
    password: bool,
    disabled: bool,
) -> bool {
    let edit = egui::TextEdit::singleline(buffer)
        .hint_text(hint)
        .password(password)
        .desired_width(style::AUTH_FORM_WIDTH);
    let response = ui.add_enabled(!disabled, edit);
    ui.add_space(8.0);
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
