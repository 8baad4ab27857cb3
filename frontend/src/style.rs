use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StyleProps {
	/// Rules for one page, applied after the shared ones
	#[prop_or_default]
	pub page: &'static str
}

#[function_component(SharedStyle)]
pub fn shared_style(props: &StyleProps) -> Html {
	html! {
		<>
			<style>{ shared_data::BASE_STYLE }</style>
			if !props.page.is_empty() {
				<style>{ props.page }</style>
			}
		</>
	}
}
