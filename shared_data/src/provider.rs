use crate::{
	store::read_raw,
	ContentConfig,
	OverrideDocument,
	OverridePolicy,
	OverrideReadFailure,
	OverrideStore,
	Section
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProviderStatus {
	/// Nothing was stored, so every section shows its defaults
	Empty,
	Loaded,
	/// Something was stored but couldn't be read or parsed; every section shows its defaults
	Failed
}

/// The override document, read and parsed once when the page boots and then handed to each
/// section that wants it.
#[derive(Clone, Debug, PartialEq)]
pub struct ContentProvider {
	document: Option<OverrideDocument>,
	policy: OverridePolicy,
	status: ProviderStatus
}

impl ContentProvider {
	/// A provider with no overrides at all
	#[must_use]
	pub fn empty() -> Self {
		Self {
			document: None,
			policy: OverridePolicy::default(),
			status: ProviderStatus::Empty
		}
	}

	/// Reads the store exactly once. Failures are logged, not returned; they leave the provider
	/// with nothing to override.
	#[must_use]
	pub fn load<St: OverrideStore>(store: &St, config: &ContentConfig) -> Self {
		let loaded = read_raw(store, config)
			.map_err(OverrideReadFailure::from)
			.and_then(|raw| raw.map(|r| OverrideDocument::parse(&r)).transpose());

		let (document, status) = match loaded {
			Ok(None) => (None, ProviderStatus::Empty),
			Ok(Some(doc)) => {
				let sections = doc.section_names().collect::<Vec<_>>();
				tracing::debug!(?sections, "loaded stored content");
				(Some(doc), ProviderStatus::Loaded)
			},
			Err(err) => {
				tracing::warn!("Error parsing saved content: {err}");
				(None, ProviderStatus::Failed)
			}
		};

		Self { document, policy: config.policy, status }
	}

	#[must_use]
	pub fn from_document(document: OverrideDocument, policy: OverridePolicy) -> Self {
		Self { document: Some(document), policy, status: ProviderStatus::Loaded }
	}

	#[must_use]
	pub fn status(&self) -> ProviderStatus {
		self.status
	}

	pub fn override_for<S: Section>(&self) -> Result<Option<S>, OverrideReadFailure> {
		match &self.document {
			None => Ok(None),
			Some(doc) => doc.section_with(self.policy)
		}
	}

	#[must_use]
	pub fn content_for<S: Section>(&self) -> S {
		match self.override_for() {
			Ok(Some(content)) => content,
			Ok(None) => S::defaults(),
			Err(err) => {
				tracing::warn!(section = S::KEY, "Error parsing saved content: {err}");
				S::defaults()
			}
		}
	}
}

impl Default for ContentProvider {
	fn default() -> Self {
		Self::empty()
	}
}
