//! Narrow an editor selection to the matches of an interactively typed regex.
//!
//! The user invokes [`Command::SelectByRegex`]; the controller captures the
//! view's selection and opens a prompt. Each keystroke rescans the captured
//! regions and previews the matches as a highlight. Submitting commits the
//! matches as the new selection (or keeps the original when nothing matched),
//! and cancelling puts the original selection back.
//!
//! The editor side is abstracted behind [`SelectHost`]; [`memory::MemoryHost`]
//! is a complete in-memory implementation.

/// User-facing commands.
pub mod commands;
/// TOML configuration.
pub mod config;
/// Session state machine.
pub mod controller;
/// Error types.
pub mod error;
/// Submitted pattern history.
pub mod history;
/// Editor capabilities.
pub mod host;
/// In-memory host.
pub mod memory;
/// The region scan algorithm.
pub mod scan;
/// Per-view session state.
pub mod session;

pub use commands::Command;
pub use config::Config;
pub use controller::{Outcome, PromptEvent, SelectByRegex, SessionState};
pub use error::{ConfigError, SearchError, SelectError};
pub use history::{HistoryMode, HistoryRing, LastPattern, PatternHistory};
pub use host::{DocumentSearch, DrawStyle, HighlightStyle, PromptRequest, Scope, SelectHost};
pub use session::Session;
