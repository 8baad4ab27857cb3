use yew::prelude::*;
use shared_data::{
	layout::{FeatureCard, FEATURE_CARDS},
	FeaturesContent
};
use crate::{
	icons::{feature_path, Icon},
	section::{use_section, SectionProps}
};

fn feature_card(card: &FeatureCard) -> Html {
	html! {
		<div class={ classes!("liquid-glass", card.desktop_only.then_some("desktop-only")) }>
			<div class="feature-icon">
				<Icon path={ feature_path(card.icon) } size={ 196 } />
			</div>
			<div class="feature-header">
				<p class="eyebrow muted">{ card.eyebrow }</p>
				<h3>{ card.title }</h3>
			</div>
		</div>
	}
}

#[function_component(Features)]
pub fn features(props: &SectionProps) -> Html {
	let slot = use_section::<FeaturesContent>(props.content.clone());
	let content = slot.content();

	html! {
		<section id="features" class="container">
			<h2>{ &content.title }</h2>
			<div id="feature-grid">
				{ FEATURE_CARDS.iter().map(feature_card).collect::<Html>() }
			</div>
		</section>
	}
}

#[cfg(all(test, target_family = "wasm"))]
mod tests {
	use super::*;
	use crate::test_support::{mount, provider};
	use shared_data::Section;
	use wasm_bindgen_test::*;

	wasm_bindgen_test_configure!(run_in_browser);

	#[wasm_bindgen_test]
	async fn shows_stored_title_but_not_subtitle() {
		let root = mount::<Features>(provider(r#"{"features":{"title":"Stored title","subtitle":"Stored subtitle"}}"#)).await;
		let html = root.inner_html();

		assert!(html.contains("Stored title"));
		assert!(!html.contains("Stored subtitle"));
		assert!(!html.contains(&FeaturesContent::defaults().subtitle));
	}
}
