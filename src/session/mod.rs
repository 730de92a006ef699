//! Session management for the device login session.
//!
//! This module provides `SessionManager`, which owns the lifecycle of the
//! single session token: issuing a fresh opaque token, persisting it to the
//! injected store, reading it back, and clearing it on logout.
//!
//! Tokens have no expiry; a token is valid until explicitly cleared.

pub mod manager;

pub use manager::SessionManager;
