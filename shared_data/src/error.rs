/// The store itself couldn't be read. In the browser this happens when there is no window or
/// `localStorage` access is denied (e.g. some private browsing modes).
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
	#[error("no storage is available in this environment")]
	NoStorage,
	#[error("reading key {key:?} failed: {reason}")]
	Read { key: String, reason: String }
}

/// Every way an attempt to load an override can go wrong. A missing value is not one of them;
/// that's reported as `Ok(None)` by the readers.
#[derive(thiserror::Error, Debug)]
pub enum OverrideReadFailure {
	#[error("override store unavailable: {0}")]
	Unavailable(#[from] StoreError),
	#[error("stored content is not valid JSON: {0}")]
	Malformed(#[from] serde_json::Error),
	#[error("stored content is valid JSON but not an object keyed by section")]
	NotAnObject,
	#[error("override for section {section:?} is invalid: {source}")]
	InvalidSection {
		section: &'static str,
		#[source]
		source: serde_json::Error
	}
}
