//! Keyboard input handling for the TUI.
//!
//! This module handles all keyboard events and translates them into
//! application state changes.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{can_add_email_char, can_add_password_char, App, LoginFocus, Screen};
use crate::storage::SessionStore;

/// Handle keyboard input. Returns true if the app should quit.
pub async fn handle_input<S: SessionStore>(app: &mut App<S>, key: KeyEvent) -> Result<bool> {
    match app.screen {
        Screen::Login => handle_login_input(app, key).await,
        Screen::Welcome => handle_welcome_input(app, key).await,
    }
}

async fn handle_login_input<S: SessionStore>(app: &mut App<S>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Esc => {
            // Quit from the login screen
            return Ok(true);
        }
        KeyCode::Down | KeyCode::Tab => {
            // Validate the field being left, then move to the next one
            app.blur_current_field();
            app.focus = app.focus.next();
        }
        KeyCode::Up | KeyCode::BackTab => {
            app.blur_current_field();
            app.focus = app.focus.prev();
        }
        KeyCode::Enter => {
            match app.focus {
                LoginFocus::Email => {
                    app.blur_current_field();
                    app.focus = LoginFocus::Password;
                }
                LoginFocus::Password => {
                    app.blur_current_field();
                    app.focus = LoginFocus::Button;
                }
                LoginFocus::Button => {
                    // Validation or a failed save keeps us on this screen
                    // with the errors set; nothing else to do here
                    app.submit().await;
                }
            }
        }
        KeyCode::Backspace => match app.focus {
            LoginFocus::Email => {
                app.email.pop();
            }
            LoginFocus::Password => {
                app.password.pop();
            }
            LoginFocus::Button => {}
        },
        KeyCode::Char(c) => match app.focus {
            LoginFocus::Email => {
                if can_add_email_char(app.email.len(), c) {
                    app.email.push(c);
                }
            }
            LoginFocus::Password => {
                if can_add_password_char(app.password.len(), c) {
                    app.password.push(c);
                }
            }
            LoginFocus::Button => {}
        },
        _ => {}
    }
    Ok(false)
}

async fn handle_welcome_input<S: SessionStore>(app: &mut App<S>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
            return Ok(true);
        }
        KeyCode::Enter | KeyCode::Char('l') | KeyCode::Char('L') => {
            // Back on the login screen afterwards, unless the clear failed
            app.logout().await;
        }
        _ => {}
    }
    Ok(false)
}
