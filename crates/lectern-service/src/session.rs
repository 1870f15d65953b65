//! Per-user navigation sessions.
//!
//! Each user carries a current folder position (as path segments) and a
//! one-shot input state: after an action that expects free text, the next
//! text message is consumed as that input and the state snaps back to
//! [`SessionState::Idle`].

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use lectern_core::types::path;

/// What the next free-text message from a user means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No pending input; free text is ignored.
    #[default]
    Idle,
    /// The next message names a folder to create.
    AwaitingFolderName,
    /// The next message is a search query.
    AwaitingSearch,
    /// The next message is broadcast to all known users.
    AwaitingBroadcast,
}

/// A pending text input resolved against the session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextCommand {
    CreateFolder(String),
    Search(String),
    Broadcast(String),
}

/// One user's position and pending input.
#[derive(Debug, Clone, Default)]
pub struct Session {
    segments: Vec<String>,
    state: SessionState,
}

impl Session {
    /// A fresh session at the root folder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The canonical path of the current folder.
    pub fn current_path(&self) -> String {
        path::segments_to_path(&self.segments)
    }

    /// Whether the session sits at the root folder.
    pub fn at_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Descend into a subfolder of the current position.
    pub fn enter(&mut self, name: impl Into<String>) {
        self.segments.push(name.into());
    }

    /// Move to the parent folder. Returns `false` when already at root.
    pub fn up(&mut self) -> bool {
        self.segments.pop().is_some()
    }

    /// Jump back to the root folder.
    pub fn reset_to_root(&mut self) {
        self.segments.clear();
    }

    /// Arm the session to consume the next text message.
    pub fn expect(&mut self, state: SessionState) {
        self.state = state;
    }

    /// The currently armed input state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Resolve an incoming text message against the armed state.
    ///
    /// The state always snaps back to idle, even when the text is blank.
    pub fn on_text(&mut self, text: &str) -> Option<TextCommand> {
        let state = std::mem::take(&mut self.state);
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        match state {
            SessionState::Idle => None,
            SessionState::AwaitingFolderName => Some(TextCommand::CreateFolder(text.to_string())),
            SessionState::AwaitingSearch => Some(TextCommand::Search(text.to_string())),
            SessionState::AwaitingBroadcast => Some(TextCommand::Broadcast(text.to_string())),
        }
    }

    /// Human-readable trail for the current position, e.g. `Root › A › B`.
    pub fn breadcrumbs(&self) -> String {
        let mut trail = String::from(path::ROOT_NAME);
        for segment in &self.segments {
            trail.push_str(" › ");
            trail.push_str(segment);
        }
        trail
    }
}

/// Shared map of sessions keyed by user ID.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: Mutex<HashMap<i64, Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` against the user's session, creating it at root if absent.
    pub fn with_session<R>(&self, user_id: i64, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut sessions = self
            .sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(sessions.entry(user_id).or_default())
    }

    /// Drop a user's session entirely.
    pub fn remove(&self, user_id: i64) {
        self.sessions
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&user_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_tracks_canonical_path() {
        let mut session = Session::new();
        assert_eq!(session.current_path(), "/");
        assert!(session.at_root());

        session.enter("Lectures");
        session.enter("2024");
        assert_eq!(session.current_path(), "/Lectures/2024");
        assert_eq!(session.breadcrumbs(), "Root › Lectures › 2024");

        assert!(session.up());
        assert_eq!(session.current_path(), "/Lectures");

        session.reset_to_root();
        assert!(session.at_root());
        assert!(!session.up());
    }

    #[test]
    fn test_text_input_consumed_once() {
        let mut session = Session::new();
        assert_eq!(session.on_text("hello"), None);

        session.expect(SessionState::AwaitingFolderName);
        assert_eq!(
            session.on_text("  Slides  "),
            Some(TextCommand::CreateFolder("Slides".to_string()))
        );
        // State snapped back to idle; the next message is plain text again.
        assert_eq!(session.on_text("Slides"), None);
    }

    #[test]
    fn test_blank_input_clears_armed_state() {
        let mut session = Session::new();
        session.expect(SessionState::AwaitingSearch);
        assert_eq!(session.on_text("   "), None);
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_registry_keeps_sessions_per_user() {
        let registry = SessionRegistry::new();
        registry.with_session(1, |s| s.enter("A"));
        registry.with_session(2, |s| s.enter("B"));

        assert_eq!(registry.with_session(1, |s| s.current_path()), "/A");
        assert_eq!(registry.with_session(2, |s| s.current_path()), "/B");

        registry.remove(1);
        assert_eq!(registry.with_session(1, |s| s.current_path()), "/");
    }
}
