use serde::{Deserialize, Serialize};

/// The storage slot that every section's override lives in
pub const CONTENT_STORAGE_KEY: &str = "GovLink-content";

// An earlier revision of the features section read its override from here
const LEGACY_STORAGE_KEY: &str = "skitbit-content";

/// What to do with a section override that parsed correctly
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OverridePolicy {
	/// The stored object replaces the built-in content entirely; omitted fields render empty.
	#[default]
	Replace,
	/// Fields that are omitted, null, or empty in the stored object keep their built-in value.
	Merge
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct ContentConfig {
	pub storage_key: String,
	/// Checked in order, but only if nothing is stored under `storage_key`
	pub fallback_keys: Vec<String>,
	pub policy: OverridePolicy
}

impl Default for ContentConfig {
	fn default() -> Self {
		Self {
			storage_key: CONTENT_STORAGE_KEY.into(),
			fallback_keys: vec![LEGACY_STORAGE_KEY.into()],
			policy: OverridePolicy::default()
		}
	}
}

impl ContentConfig {
	#[must_use]
	pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
		self.storage_key = key.into();
		self
	}

	#[must_use]
	pub fn with_policy(mut self, policy: OverridePolicy) -> Self {
		self.policy = policy;
		self
	}

	#[must_use]
	pub fn without_fallbacks(mut self) -> Self {
		self.fallback_keys.clear();
		self
	}

	/// The primary key followed by every fallback, in the order they're read
	pub fn keys(&self) -> impl Iterator<Item = &str> {
		std::iter::once(self.storage_key.as_str())
			.chain(self.fallback_keys.iter().map(String::as_str))
	}
}
