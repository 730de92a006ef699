//! Application state management for Formlogin.
//!
//! This module contains the `App` struct that owns the login form state,
//! the current screen, and the session manager. Screens form a two-node
//! stack: `Login` ⇄ `Welcome`. All session logic lives in the manager;
//! the app only calls its operations and reacts to the results.

use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::session::SessionManager;
use crate::storage::SessionStore;
use crate::validate::{validate_email, validate_password};

// ============================================================================
// Constants
// ============================================================================

/// Maximum length for email input.
/// 50 chars covers practically all addresses people type by hand.
const MAX_EMAIL_LENGTH: usize = 50;

/// Maximum length for password input.
/// 128 chars accommodates password managers and passphrases.
const MAX_PASSWORD_LENGTH: usize = 128;

// ============================================================================
// Screens and focus
// ============================================================================

/// Which screen is currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Welcome,
}

/// Login form focus state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginFocus {
    Email,
    Password,
    Button,
}

impl LoginFocus {
    pub fn next(self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Button,
            LoginFocus::Button => LoginFocus::Email,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Button,
            LoginFocus::Password => LoginFocus::Email,
            LoginFocus::Button => LoginFocus::Password,
        }
    }
}

// ============================================================================
// App
// ============================================================================

pub struct App<S> {
    pub manager: SessionManager<S>,
    pub config: Config,

    pub screen: Screen,

    // Login form state
    pub email: String,
    pub password: String,
    pub focus: LoginFocus,
    pub email_error: Option<String>,
    pub password_error: Option<String>,

    /// Storage failure surfaced to the user on either screen
    pub storage_error: Option<String>,

    /// Token shown on the welcome screen, loaded on entry
    pub token: Option<String>,
}

impl<S: SessionStore> App<S> {
    pub fn new(store: S, config: Config) -> Self {
        // Prefill the email field: env var wins, then last saved email
        let email = std::env::var("FORMLOGIN_EMAIL")
            .ok()
            .or_else(|| config.last_email.clone())
            .unwrap_or_default();

        let focus = if email.is_empty() {
            LoginFocus::Email
        } else {
            LoginFocus::Password
        };

        Self {
            manager: SessionManager::new(store),
            config,
            screen: Screen::Login,
            email,
            password: String::new(),
            focus,
            email_error: None,
            password_error: None,
            storage_error: None,
            token: None,
        }
    }

    /// Validate the field that is losing focus, mirroring on-blur
    /// validation in the form.
    pub fn blur_current_field(&mut self) {
        match self.focus {
            LoginFocus::Email => self.email_error = validate_email(&self.email),
            LoginFocus::Password => self.password_error = validate_password(&self.password),
            LoginFocus::Button => {}
        }
    }

    /// Submit the login form.
    ///
    /// A token is only issued once both fields validate, and the user only
    /// reaches the welcome screen once the token has actually been
    /// persisted. A failed save keeps them on the login form with an error.
    pub async fn submit(&mut self) {
        self.email_error = validate_email(&self.email);
        self.password_error = validate_password(&self.password);
        if self.email_error.is_some() || self.password_error.is_some() {
            debug!("login rejected by validation");
            return;
        }

        let token = self.manager.issue();
        match self.manager.save(&token).await {
            Ok(()) => {
                info!("session saved");
                self.config.last_email = Some(self.email.clone());
                self.password.clear();
                self.storage_error = None;
                self.enter_welcome().await;
            }
            Err(e) => {
                error!(error = %e, "failed to persist session");
                self.storage_error = Some(format!("Could not save session: {}", e));
            }
        }
    }

    /// Navigate to the welcome screen, loading the stored token for display.
    async fn enter_welcome(&mut self) {
        match self.manager.load().await {
            Ok(token) => {
                self.token = token;
            }
            Err(e) => {
                warn!(error = %e, "failed to load session for display");
                self.token = None;
                self.storage_error = Some(format!("Could not load session: {}", e));
            }
        }
        self.screen = Screen::Welcome;
    }

    /// Clear the session and return to the login screen.
    ///
    /// If the store refuses the clear, the session still exists, so the
    /// user stays on the welcome screen and sees the error.
    pub async fn logout(&mut self) {
        match self.manager.clear().await {
            Ok(()) => {
                info!("session cleared");
                self.token = None;
                self.storage_error = None;
                self.screen = Screen::Login;
                self.focus = if self.email.is_empty() {
                    LoginFocus::Email
                } else {
                    LoginFocus::Password
                };
            }
            Err(e) => {
                error!(error = %e, "failed to clear session");
                self.storage_error = Some(format!("Could not clear session: {}", e));
            }
        }
    }
}

// ============================================================================
// Input helpers
// ============================================================================

/// Check if a character is valid for text input fields
fn is_valid_input_char(c: char) -> bool {
    !c.is_control()
}

/// Check if an email character should be accepted
pub fn can_add_email_char(current_len: usize, c: char) -> bool {
    current_len < MAX_EMAIL_LENGTH && is_valid_input_char(c)
}

/// Check if a password character should be accepted
pub fn can_add_password_char(current_len: usize, c: char) -> bool {
    current_len < MAX_PASSWORD_LENGTH && is_valid_input_char(c)
}

// ============================================================================
// Tests
// ============================================================================
