use std::collections::HashMap;
use crate::{ContentConfig, OverrideDocument, OverrideReadFailure, Section, StoreError};

/// A single-read view of wherever editable content is kept. The browser's `localStorage` is the
/// one that matters in production.
pub trait OverrideStore {
	fn read(&self, key: &str) -> Result<Option<String>, StoreError>;
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore(HashMap<String, String>);

impl MemoryStore {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.0.insert(key.into(), value.into());
	}
}

impl OverrideStore for MemoryStore {
	fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
		Ok(self.0.get(key).cloned())
	}
}

/// Reads the raw override document, trying the primary key first and then each fallback in order.
/// Returns `Ok(None)` if none of them hold anything. An empty value counts as nothing.
pub fn read_raw<St: OverrideStore>(store: &St, config: &ContentConfig) -> Result<Option<String>, StoreError> {
	for key in config.keys() {
		if let Some(raw) = store.read(key)?.filter(|raw| !raw.is_empty()) {
			tracing::debug!(key, "found stored content");
			return Ok(Some(raw));
		}
	}

	Ok(None)
}

/// Attempt to load the stored override for `S`. `Ok(None)` means nothing is stored for it and the
/// defaults should stand.
pub fn load_override<S: Section, St: OverrideStore>(
	store: &St,
	config: &ContentConfig
) -> Result<Option<S>, OverrideReadFailure> {
	let Some(raw) = read_raw(store, config)? else {
		return Ok(None);
	};

	OverrideDocument::parse(&raw)?.section_with(config.policy)
}

/// Like [`load_override`] but never fails: any problem is logged and the defaults are returned.
#[must_use]
pub fn resolve<S: Section, St: OverrideStore>(store: &St, config: &ContentConfig) -> S {
	match load_override(store, config) {
		Ok(Some(content)) => content,
		Ok(None) => S::defaults(),
		Err(err) => {
			tracing::warn!(section = S::KEY, "Error parsing saved content: {err}");
			S::defaults()
		}
	}
}
