//! User configuration for select-by-regex.
//!
//! Configuration is TOML; every field is optional.
//!
//! ```toml
//! [history]
//! mode = "ring"        # or "last"
//!
//! [highlight]
//! tag = "select_by_regex"
//! draw = "outline"     # "outline" | "fill" | "underline"
//!
//! [prompt]
//! title = "Regex:"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::history::HistoryMode;
use crate::host::DrawStyle;


/// Default tag of the preview highlight set.
pub const DEFAULT_HIGHLIGHT_TAG: &str = "select_by_regex";
/// Default label of the pattern prompt.
pub const DEFAULT_PROMPT_TITLE: &str = "Regex:";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub history: HistoryConfig,
	pub highlight: HighlightConfig,
	pub prompt: PromptConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HistoryConfig {
	pub mode: HistoryMode,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HighlightConfig {
	/// Name of the highlight set drawn during preview.
	pub tag: String,
	pub draw: DrawStyle,
}

impl Default for HighlightConfig {
	fn default() -> Self {
		Self {
			tag: DEFAULT_HIGHLIGHT_TAG.to_string(),
			draw: DrawStyle::default(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PromptConfig {
	pub title: String,
}

impl Default for PromptConfig {
	fn default() -> Self {
		Self {
			title: DEFAULT_PROMPT_TITLE.to_string(),
		}
	}
}

impl Config {
	/// Parses configuration from TOML text.
	pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(content)?)
	}

	/// Reads and parses a configuration file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::from_toml_str(&content)
	}
}
