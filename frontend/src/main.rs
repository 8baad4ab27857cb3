use std::rc::Rc;
use gloo_console::log;
use yew::prelude::*;
use shared_data::{ContentConfig, ContentProvider, LANDING_STYLE};
use features::Features;
use footer::Footer;
use hero::Hero;
use section::SectionProps;
use storage::BrowserStore;
use style::SharedStyle;

mod features;
mod footer;
mod hero;
mod icons;
mod section;
mod storage;
mod style;
#[cfg(all(test, target_family = "wasm"))]
mod test_support;

#[function_component(Landing)]
pub fn landing(props: &SectionProps) -> Html {
	html! {
		<>
			<SharedStyle page={ LANDING_STYLE } />
			<Hero content={ props.content.clone() } />
			<Features content={ props.content.clone() } />
			<Footer content={ props.content.clone() } />
		</>
	}
}

fn main() {
	console_error_panic_hook::set_once();

	let level = if cfg!(debug_assertions) { ::log::Level::Debug } else { ::log::Level::Warn };
	if let Err(e) = console_log::init_with_level(level) {
		log!(format!("Couldn't set up console logging: {e}"));
	}

	// Everything editable on the page comes out of this one read; the sections only ever see the
	// already-parsed result
	let content = Rc::new(ContentProvider::load(&BrowserStore::local(), &ContentConfig::default()));

	yew::Renderer::<Landing>::with_props(SectionProps { content }).render();
}
