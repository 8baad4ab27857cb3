use serde::{Deserialize, Deserializer, Serialize, de::DeserializeOwned};

/// One independently-rendered area of the landing page with its own built-in text and its own
/// entry in the override document.
pub trait Section: Serialize + DeserializeOwned + Clone + PartialEq {
	/// The name this section's object is stored under in the override document
	const KEY: &'static str;

	/// The compiled-in content shown until (and unless) an override replaces it
	#[must_use]
	fn defaults() -> Self;
}

// Every field is individually defaulted to the empty string instead of the struct defaulting to
// `Section::defaults()`: a stored override replaces the whole record, so a field that the editor
// left out (or set to null) shows up blank rather than silently falling back.
fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
	Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FooterContent {
	#[serde(default, deserialize_with = "text_or_empty")]
	pub tagline: String,
	#[serde(default, deserialize_with = "text_or_empty")]
	pub copyright: String
}

impl Section for FooterContent {
	const KEY: &'static str = "footer";

	fn defaults() -> Self {
		Self {
			tagline: "All your government services in one place, powered by AI. Simplifying bureaucracy for you.".into(),
			copyright: "© 2025 — GovLink".into()
		}
	}
}

#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq, Eq)]
pub struct FeaturesContent {
	#[serde(default, deserialize_with = "text_or_empty")]
	pub title: String,
	#[serde(default, deserialize_with = "text_or_empty")]
	pub subtitle: String
}

impl Section for FeaturesContent {
	const KEY: &'static str = "features";

	fn defaults() -> Self {
		Self {
			title: "What makes us the best service for you.".into(),
			subtitle: "Discover our unique approach to 3D animation".into()
		}
	}
}

/// The hero headline is rendered as `headline`, then `emphasis_lead`, a highlighted `emphasis`
/// and `emphasis_tail` on the second line.
#[derive(serde::Deserialize, serde::Serialize, Clone, Debug, PartialEq, Eq)]
pub struct HeroContent {
	#[serde(default, deserialize_with = "text_or_empty")]
	pub brand: String,
	#[serde(default, deserialize_with = "text_or_empty")]
	pub headline: String,
	#[serde(default, deserialize_with = "text_or_empty")]
	pub emphasis_lead: String,
	#[serde(default, deserialize_with = "text_or_empty")]
	pub emphasis: String,
	#[serde(default, deserialize_with = "text_or_empty")]
	pub emphasis_tail: String,
	#[serde(default, deserialize_with = "text_or_empty")]
	pub call_to_action: String
}

impl Section for HeroContent {
	const KEY: &'static str = "hero";

	fn defaults() -> Self {
		Self {
			brand: "GovLink".into(),
			headline: "GOVERNMENT SERVICES".into(),
			emphasis_lead: "MADE".into(),
			emphasis: "SIMPLE".into(),
			emphasis_tail: "WITH AI".into(),
			call_to_action: "Try It Now On".into()
		}
	}
}
