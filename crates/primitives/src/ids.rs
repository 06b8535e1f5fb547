/// Identifies one editor view (a buffer shown in a window).
///
/// Selections and prompt sessions are tracked per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ViewId(pub u64);

impl ViewId {
	/// The view used when a host only ever shows one buffer.
	pub const SCRATCH: ViewId = ViewId(0);
}

impl std::fmt::Display for ViewId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "view#{}", self.0)
	}
}
