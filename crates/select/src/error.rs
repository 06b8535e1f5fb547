//! Error types for regex selection.

use std::path::PathBuf;

use regsel_primitives::ViewId;
use thiserror::Error;

/// Errors reported by a host's search primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
	/// The pattern could not be compiled by the host's regex dialect.
	#[error("invalid pattern `{pattern}`: {message}")]
	InvalidPattern {
		/// The pattern as typed.
		pattern: String,
		/// The host's description of the problem.
		message: String,
	},

	/// The host has no document for the view.
	#[error("no document for {0}")]
	UnknownView(ViewId),
}

/// Errors surfaced by the selection controller.
///
/// Neither variant closes the prompt: the session stays open so the user can
/// keep editing the pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
	/// The host search primitive failed.
	#[error(transparent)]
	Search(#[from] SearchError),

	/// A prompt-only command ran while no prompt was open on the view.
	#[error("no select-by-regex prompt is open on {0}")]
	NoSession(ViewId),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Result type for controller operations.
pub type Result<T, E = SelectError> = std::result::Result<T, E>;
