use std::{rc::Rc, time::Duration};
use shared_data::{ContentProvider, OverrideDocument, OverridePolicy};
use web_sys::Element;
use yew::BaseComponent;
use crate::section::SectionProps;

pub fn provider(raw: &str) -> Rc<ContentProvider> {
	Rc::new(ContentProvider::from_document(OverrideDocument::parse(raw).unwrap(), OverridePolicy::Replace))
}

/// Renders `C` into a fresh element and waits long enough for its effects (and the re-render they
/// trigger) to run
pub async fn mount<C>(content: Rc<ContentProvider>) -> Element
where
	C: BaseComponent<Properties = SectionProps>
{
	let document = web_sys::window().unwrap().document().unwrap();
	let root = document.create_element("div").unwrap();
	document.body().unwrap().append_child(&root).unwrap();

	// the handle doesn't unmount on drop, so the component stays live for the assertions
	_ = yew::Renderer::<C>::with_root_and_props(root.clone(), SectionProps { content }).render();
	yew::platform::time::sleep(Duration::from_millis(50)).await;

	root
}
