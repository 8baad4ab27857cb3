use crate::{ContentProvider, Section};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	/// Showing the defaults; the override hasn't been attempted yet
	DefaultShown,
	OverrideShown,
	/// The override was attempted, but there was none (or it was broken), so the defaults stay
	FellBack
}

/// The content one section is showing, plus whether it has had its single chance at being
/// overridden yet.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionSlot<S: Section> {
	content: S,
	phase: Phase
}

impl<S: Section> SectionSlot<S> {
	#[must_use]
	pub fn new() -> Self {
		Self { content: S::defaults(), phase: Phase::DefaultShown }
	}

	pub fn content(&self) -> &S {
		&self.content
	}

	pub fn phase(&self) -> Phase {
		self.phase
	}

	pub fn is_resolved(&self) -> bool {
		self.phase != Phase::DefaultShown
	}

	/// Tries to apply this section's override, and returns whether the content changed. Only the
	/// first call does anything; every later one returns `false` without looking at `provider`.
	pub fn activate(&mut self, provider: &ContentProvider) -> bool {
		if self.is_resolved() {
			return false;
		}

		match provider.override_for::<S>() {
			Ok(Some(content)) => {
				let changed = content != self.content;
				self.content = content;
				self.phase = Phase::OverrideShown;
				changed
			},
			Ok(None) => {
				self.phase = Phase::FellBack;
				false
			},
			Err(err) => {
				tracing::warn!(section = S::KEY, "Error parsing saved content: {err}");
				self.phase = Phase::FellBack;
				false
			}
		}
	}
}

impl<S: Section> Default for SectionSlot<S> {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{FooterContent, HeroContent, OverrideDocument, OverridePolicy};
	use pretty_assertions::assert_eq;

	fn provider(raw: &str) -> ContentProvider {
		ContentProvider::from_document(OverrideDocument::parse(raw).unwrap(), OverridePolicy::Replace)
	}

	#[test]
	fn starts_with_defaults() {
		let slot = SectionSlot::<FooterContent>::new();
		assert_eq!(slot.phase(), Phase::DefaultShown);
		assert_eq!(slot.content(), &FooterContent::defaults());
		assert!(!slot.is_resolved());
	}

	#[test]
	fn override_is_applied_once() {
		let mut slot = SectionSlot::<FooterContent>::new();
		let first = provider(r#"{"footer": {"tagline": "first", "copyright": "1"}}"#);
		let second = provider(r#"{"footer": {"tagline": "second", "copyright": "2"}}"#);

		assert!(slot.activate(&first));
		assert_eq!(slot.phase(), Phase::OverrideShown);

		assert!(!slot.activate(&second));
		assert_eq!(slot.content().tagline, "first");
		assert_eq!(slot.phase(), Phase::OverrideShown);
	}

	#[test]
	fn absent_override_falls_back_for_good() {
		let mut slot = SectionSlot::<HeroContent>::new();
		assert!(!slot.activate(&ContentProvider::empty()));
		assert_eq!(slot.phase(), Phase::FellBack);

		// a later activation with content available must not change what's shown
		assert!(!slot.activate(&provider(r#"{"hero": {"brand": "Other"}}"#)));
		assert_eq!(slot.content(), &HeroContent::defaults());
	}

	#[test]
	fn invalid_override_falls_back() {
		let mut slot = SectionSlot::<FooterContent>::new();
		assert!(!slot.activate(&provider(r#"{"footer": {"tagline": ["not", "text"]}}"#)));
		assert_eq!(slot.phase(), Phase::FellBack);
		assert_eq!(slot.content(), &FooterContent::defaults());
	}

	#[test]
	fn override_equal_to_defaults_reports_no_change() {
		let mut slot = SectionSlot::<FooterContent>::new();
		let defaults = FooterContent::defaults();
		let raw = serde_json::json!({ "footer": defaults }).to_string();

		assert!(!slot.activate(&provider(&raw)));
		assert_eq!(slot.phase(), Phase::OverrideShown);
	}
}
