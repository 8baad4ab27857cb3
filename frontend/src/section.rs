use std::rc::Rc;
use shared_data::{ContentProvider, Section, SectionSlot};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
	pub content: Rc<ContentProvider>
}

/// Holds one section's content, starting from its defaults. After the first render, the section
/// gets its one chance to pick up an override from `provider`; re-renders after that (including
/// the one this triggers) leave it alone.
#[hook]
pub fn use_section<S: Section + 'static>(provider: Rc<ContentProvider>) -> UseStateHandle<SectionSlot<S>> {
	let slot = use_state(SectionSlot::<S>::new);

	{
		let slot = slot.clone();
		use_effect(move || {
			if !slot.is_resolved() {
				let mut next = (*slot).clone();
				next.activate(&provider);
				slot.set(next);
			}

			|| ()
		});
	}

	slot
}
