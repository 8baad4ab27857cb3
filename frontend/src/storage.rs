use gloo_console::log;
use shared_data::{OverrideStore, StoreError};
use wasm_bindgen::JsValue;
use web_sys::Storage;

/// The page's `localStorage`, or nothing if the browser won't give it to us
pub struct BrowserStore(Option<Storage>);

impl BrowserStore {
	pub fn local() -> Self {
		let Some(window) = web_sys::window() else {
			log!("No window to get localStorage from");
			return Self(None);
		};

		// Err means access was denied, Ok(None) means there's no storage at all. Either way, we
		// can't read any overrides
		match window.local_storage() {
			Ok(storage) => Self(storage),
			Err(e) => {
				log!("Couldn't access localStorage: ", e);
				Self(None)
			}
		}
	}
}

impl OverrideStore for BrowserStore {
	fn read(&self, key: &str) -> Result<Option<String>, StoreError> {
		let storage = self.0.as_ref().ok_or(StoreError::NoStorage)?;

		storage.get_item(key)
			.map_err(|e| StoreError::Read { key: key.to_string(), reason: js_reason(&e) })
	}
}

fn js_reason(e: &JsValue) -> String {
	e.as_string().unwrap_or_else(|| format!("{e:?}"))
}

#[cfg(all(test, target_family = "wasm"))]
mod tests {
	use super::*;
	use shared_data::{ContentConfig, ContentProvider, FooterContent, ProviderStatus, CONTENT_STORAGE_KEY};
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	fn set_stored(value: Option<&str>) {
		let storage = web_sys::window().unwrap().local_storage().unwrap().unwrap();
		match value {
			Some(v) => storage.set_item(CONTENT_STORAGE_KEY, v).unwrap(),
			None => storage.remove_item(CONTENT_STORAGE_KEY).unwrap()
		}
	}

	#[wasm_bindgen_test]
	fn reads_what_was_stored() {
		set_stored(Some(r#"{"footer":{"tagline":"Test tagline","copyright":"© Test"}}"#));

		let provider = ContentProvider::load(&BrowserStore::local(), &ContentConfig::default().without_fallbacks());
		assert_eq!(provider.status(), ProviderStatus::Loaded);
		assert_eq!(provider.content_for::<FooterContent>(), FooterContent {
			tagline: "Test tagline".into(),
			copyright: "© Test".into()
		});

		set_stored(None);
	}

	#[wasm_bindgen_test]
	fn missing_key_reads_none() {
		set_stored(None);
		assert_eq!(BrowserStore::local().read(CONTENT_STORAGE_KEY), Ok(None));
	}

	#[wasm_bindgen_test]
	fn no_storage_is_an_error() {
		assert_eq!(BrowserStore(None).read(CONTENT_STORAGE_KEY), Err(StoreError::NoStorage));
	}
}
