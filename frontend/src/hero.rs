use yew::prelude::*;
use shared_data::{
	layout::{HERO_CHAT_LINKS, HERO_PHONE_IMAGE, LOGO_PATH},
	HeroContent
};
use crate::{
	icons::{Icon, MESSAGE_SQUARE, SEND},
	section::{use_section, SectionProps}
};

#[function_component(Hero)]
pub fn hero(props: &SectionProps) -> Html {
	let slot = use_section::<HeroContent>(props.content.clone());
	let content = slot.content();

	let chat_buttons = HERO_CHAT_LINKS.iter()
		.zip([MESSAGE_SQUARE, SEND])
		.map(|(link, icon)| html! {
			<a class={ link.class } href={ link.href } target="_blank" rel="noopener noreferrer">
				<Icon path={ icon } />
				<span>{ link.label }</span>
			</a>
		})
		.collect::<Html>();

	html! {
		<section id="home">
			<div class="container">
				<div id="hero-row">
					<div id="hero-copy">
						<div class="brand">
							<img src={ LOGO_PATH } alt="govlink logo" width="32" height="32" />
							<p>{ &content.brand }</p>
						</div>
						<h1 id="hero-headline">
							<span>{ &content.headline }</span>
							<span>
								{ &content.emphasis_lead }{ " " }
								<span class="highlight">{ &content.emphasis }</span>
								{ " " }{ &content.emphasis_tail }
							</span>
						</h1>
						<div id="try-now">
							<p><strong>{ &content.call_to_action }</strong></p>
							{ chat_buttons }
						</div>
					</div>
					<div class="phone">
						<img src={ HERO_PHONE_IMAGE } alt="placeholder" />
						<span class="phone-tag"></span>
					</div>
				</div>
			</div>
		</section>
	}
}
