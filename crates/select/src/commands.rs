//! User-facing commands and their registration metadata.

use regsel_primitives::ViewId;

use crate::controller::{Outcome, SelectByRegex};
use crate::error::Result;
use crate::host::SelectHost;

/// The commands an editor binds for this feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
	/// Open the pattern prompt over the current selection.
	SelectByRegex,
	/// Replace the prompt text with a history entry. Only valid while the prompt has focus.
	CycleHistory { backwards: bool },
}

impl Command {
	/// Every command, for registration.
	pub const ALL: [Command; 3] = [
		Command::SelectByRegex,
		Command::CycleHistory { backwards: false },
		Command::CycleHistory { backwards: true },
	];

	/// Name the editor registers the command under.
	pub fn name(&self) -> &'static str {
		match self {
			Self::SelectByRegex => "select_by_regex",
			Self::CycleHistory { .. } => "select_by_regex_history",
		}
	}

	pub fn description(&self) -> &'static str {
		match self {
			Self::SelectByRegex => "Split the current line (or selection) by a prompted regular expression",
			Self::CycleHistory { backwards: false } => "Recall the next select-by-regex pattern",
			Self::CycleHistory { backwards: true } => "Recall the previous select-by-regex pattern",
		}
	}

	/// Whether the command only makes sense while the prompt has focus.
	pub fn requires_prompt(&self) -> bool {
		matches!(self, Self::CycleHistory { .. })
	}

	/// Resolves a registered name plus its `backwards` argument.
	pub fn from_name(name: &str, backwards: bool) -> Option<Self> {
		match name {
			"select_by_regex" => Some(Self::SelectByRegex),
			"select_by_regex_history" => Some(Self::CycleHistory { backwards }),
			_ => None,
		}
	}
}

impl SelectByRegex {
	/// Runs a command against `view`.
	pub fn run(&mut self, host: &mut dyn SelectHost, view: ViewId, command: Command) -> Result<Outcome> {
		match command {
			Command::SelectByRegex => Ok(self.begin(host, view)),
			Command::CycleHistory { backwards } => Ok(self
				.cycle_history(host, view, backwards)?
				.map_or(Outcome::Ignored, Outcome::Recalled)),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn names_resolve_back() {
		for command in Command::ALL {
			let backwards = matches!(command, Command::CycleHistory { backwards: true });
			assert_eq!(Command::from_name(command.name(), backwards), Some(command));
		}
		assert_eq!(Command::from_name("select_all", false), None);
	}

	#[test]
	fn only_history_needs_prompt() {
		assert!(!Command::SelectByRegex.requires_prompt());
		assert!(Command::CycleHistory { backwards: true }.requires_prompt());
	}
}
