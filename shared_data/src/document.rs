use serde_json::{Map, Value};
use crate::{OverrideReadFailure, OverridePolicy, Section};

/// The parsed contents of the override store: one JSON object, keyed by section name, e.g.
/// `{"footer": {"tagline": "...", "copyright": "..."}}`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverrideDocument(Map<String, Value>);

impl OverrideDocument {
	pub fn parse(raw: &str) -> Result<Self, OverrideReadFailure> {
		match serde_json::from_str::<Value>(raw)? {
			Value::Object(map) => Ok(Self(map)),
			_ => Err(OverrideReadFailure::NotAnObject)
		}
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn section_names(&self) -> impl Iterator<Item = &str> {
		self.0.keys().map(String::as_str)
	}

	/// The stored object for `S`, verbatim. Missing and `null` entries both mean "no override".
	pub fn section<S: Section>(&self) -> Result<Option<S>, OverrideReadFailure> {
		let Some(obj) = self.section_object::<S>()? else {
			return Ok(None);
		};

		serde_json::from_value(Value::Object(obj.clone()))
			.map(Some)
			.map_err(invalid::<S>)
	}

	/// The stored object for `S` laid over `S::defaults()`, so that fields which are omitted,
	/// `null` or empty keep their built-in text.
	pub fn merged<S: Section>(&self) -> Result<Option<S>, OverrideReadFailure> {
		let Some(obj) = self.section_object::<S>()? else {
			return Ok(None);
		};

		let Value::Object(mut base) = serde_json::to_value(S::defaults()).map_err(invalid::<S>)? else {
			return Err(invalid::<S>(custom("defaults did not serialize to an object")));
		};

		for (field, value) in obj {
			let blank = match value {
				Value::Null => true,
				Value::String(s) => s.is_empty(),
				_ => false
			};

			if !blank {
				base.insert(field.clone(), value.clone());
			}
		}

		serde_json::from_value(Value::Object(base))
			.map(Some)
			.map_err(invalid::<S>)
	}

	pub fn section_with<S: Section>(&self, policy: OverridePolicy) -> Result<Option<S>, OverrideReadFailure> {
		match policy {
			OverridePolicy::Replace => self.section(),
			OverridePolicy::Merge => self.merged()
		}
	}

	fn section_object<S: Section>(&self) -> Result<Option<&Map<String, Value>>, OverrideReadFailure> {
		match self.0.get(S::KEY) {
			None | Some(Value::Null) => Ok(None),
			Some(Value::Object(obj)) => Ok(Some(obj)),
			// serde would happily build a struct out of an array, so this has to be checked up front
			Some(_) => Err(invalid::<S>(custom("expected an object of text fields")))
		}
	}
}

fn invalid<S: Section>(source: serde_json::Error) -> OverrideReadFailure {
	OverrideReadFailure::InvalidSection { section: S::KEY, source }
}

fn custom(msg: &str) -> serde_json::Error {
	<serde_json::Error as serde::de::Error>::custom(msg)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{FeaturesContent, FooterContent, HeroContent};
	use pretty_assertions::assert_eq;

	#[test]
	fn parse_rejects_truncated_json() {
		let res = OverrideDocument::parse(r#"{"footer": {"tagline": "cut of"#);
		assert!(matches!(res, Err(OverrideReadFailure::Malformed(_))));
	}

	#[test]
	fn parse_rejects_non_object_top_level() {
		for raw in ["[]", "\"footer\"", "12", "null", "true"] {
			assert!(matches!(OverrideDocument::parse(raw), Err(OverrideReadFailure::NotAnObject)), "{raw}");
		}
	}

	#[test]
	fn missing_and_null_sections_are_absent() {
		let doc = OverrideDocument::parse(r#"{"footer": null}"#).unwrap();
		assert_eq!(doc.section::<FooterContent>().unwrap(), None);
		assert_eq!(doc.section::<FeaturesContent>().unwrap(), None);
		assert_eq!(doc.merged::<HeroContent>().unwrap(), None);
	}

	#[test]
	fn complete_section_replaces() {
		let doc = OverrideDocument::parse(r#"{"features": {"title": "New title", "subtitle": "New sub"}}"#).unwrap();
		assert_eq!(
			doc.section::<FeaturesContent>().unwrap(),
			Some(FeaturesContent { title: "New title".into(), subtitle: "New sub".into() })
		);
	}

	#[test]
	fn partial_section_replaces_wholesale() {
		let doc = OverrideDocument::parse(r#"{"footer": {"tagline": "Only tagline"}}"#).unwrap();
		assert_eq!(
			doc.section::<FooterContent>().unwrap(),
			Some(FooterContent { tagline: "Only tagline".into(), copyright: String::new() })
		);
	}

	#[test]
	fn null_field_is_blank_under_replace_and_default_under_merge() {
		let doc = OverrideDocument::parse(r#"{"footer": {"tagline": null, "copyright": "© Test"}}"#).unwrap();
		assert_eq!(
			doc.section::<FooterContent>().unwrap(),
			Some(FooterContent { tagline: String::new(), copyright: "© Test".into() })
		);
		assert_eq!(
			doc.merged::<FooterContent>().unwrap(),
			Some(FooterContent { copyright: "© Test".into(), ..FooterContent::defaults() })
		);
	}

	#[test]
	fn partial_section_merges_over_defaults() {
		let doc = OverrideDocument::parse(r#"{"footer": {"tagline": "Only tagline", "copyright": ""}}"#).unwrap();
		assert_eq!(
			doc.merged::<FooterContent>().unwrap(),
			Some(FooterContent { tagline: "Only tagline".into(), ..FooterContent::defaults() })
		);
	}

	#[test]
	fn merge_keeps_defaults_for_null_fields() {
		let doc = OverrideDocument::parse(r#"{"hero": {"emphasis": "EASY", "brand": null}}"#).unwrap();
		let hero = doc.section_with::<HeroContent>(OverridePolicy::Merge).unwrap().unwrap();
		assert_eq!(hero, HeroContent { emphasis: "EASY".into(), ..HeroContent::defaults() });
	}

	#[test]
	fn non_object_section_is_invalid() {
		let doc = OverrideDocument::parse(r#"{"footer": ["a", "b"], "features": "text"}"#).unwrap();
		assert!(matches!(
			doc.section::<FooterContent>(),
			Err(OverrideReadFailure::InvalidSection { section: "footer", .. })
		));
		assert!(matches!(
			doc.merged::<FeaturesContent>(),
			Err(OverrideReadFailure::InvalidSection { section: "features", .. })
		));
	}

	#[test]
	fn wrongly_typed_field_is_invalid_under_both_policies() {
		let doc = OverrideDocument::parse(r#"{"footer": {"tagline": 5}}"#).unwrap();
		assert!(doc.section::<FooterContent>().is_err());
		assert!(doc.merged::<FooterContent>().is_err());
	}

	#[test]
	fn lists_section_names() {
		let doc = OverrideDocument::parse(r#"{"footer": {}, "hero": {}}"#).unwrap();
		assert!(!doc.is_empty());
		let mut names = doc.section_names().collect::<Vec<_>>();
		names.sort_unstable();
		assert_eq!(names, vec!["footer", "hero"]);
	}
}
