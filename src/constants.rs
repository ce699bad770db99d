// src/constants.rs
//
// Application-wide constants extracted from magic numbers throughout the codebase.
// Each constant is documented with its purpose and usage context.

/// Quiet period in milliseconds after the last edit before a save fires.
///
/// Every keystroke cancels the pending save and restarts this window, so a
/// burst of edits produces exactly one persisted update with the final text.
///
/// Used in: `client/session.rs`
pub const DEBOUNCE_WINDOW_MS: u64 = 800;

/// Title assigned when a note is created without one.
///
/// Used in: `application/note_creator.rs`
pub const DEFAULT_TITLE: &str = "Untitled Note";

/// Maximum characters of note content shown in list previews.
///
/// Content beyond this length is truncated with an ellipsis.
///
/// Used in: `ports/list_view.rs`
pub const PREVIEW_MAX_CHARS: usize = 60;

/// Default address the HTTP server binds to.
///
/// Used in: `infrastructure/config.rs`, `cli/args.rs`
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default on-disk location of the note store, relative to the working
/// directory.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_DATA_FILE: &str = "data/notes.json";
