use yew::prelude::*;
use shared_data::{
	layout::{
		nav_anchor,
		ImageSide,
		ShowcaseCard,
		BRAND_NAME,
		FOOTER_NAV,
		LEGAL_LINKS,
		LOGO_PATH,
		SHOWCASE_CARDS,
		SOCIAL_LINKS
	},
	FooterContent
};
use crate::{
	icons::{social_path, Icon},
	section::{use_section, SectionProps}
};

fn showcase_card(card: &ShowcaseCard) -> Html {
	let mockup = html! {
		<div class="phone liquid-glass">
			<img src={ card.image } alt="placeholder" />
		</div>
	};

	let side_class = match card.image_side {
		ImageSide::Left => "image-left",
		ImageSide::Right => "image-right",
	};

	let copy = html! {
		<div class="showcase-copy">
			<p class="eyebrow">{ card.eyebrow }</p>
			<h3>{ card.heading }</h3>
			<p class="muted">{ card.body }</p>
		</div>
	};

	html! {
		<div class={ classes!("showcase-card", "liquid-glass", side_class) }>
			{
				match card.image_side {
					ImageSide::Left => html! { <>{ mockup }{ copy }</> },
					ImageSide::Right => html! { <>{ copy }{ mockup }</> },
				}
			}
		</div>
	}
}

#[function_component(Footer)]
pub fn footer(props: &SectionProps) -> Html {
	let slot = use_section::<FooterContent>(props.content.clone());

	let content = slot.content();

	html! {
		<section id="showcase">
			<div class="container">
				{ SHOWCASE_CARDS.iter().map(showcase_card).collect::<Html>() }
			</div>
			<footer>
				<div class="container">
					<div id="footer-grid">
						<div id="footer-brand">
							<span class="brand">
								<img src={ LOGO_PATH } alt="GovLink logo" width="24" height="24" />
								<span>{ BRAND_NAME }</span>
							</span>
							<p class="muted">{ &content.tagline }</p>
						</div>
						<div>
							<h5>{ "Navigation" }</h5>
							<ul>
							{
								FOOTER_NAV.iter().map(|item| html! {
									<li key={ *item }>
										<a href={ nav_anchor(item) }>{ *item }</a>
									</li>
								}).collect::<Html>()
							}
							</ul>
						</div>
						<div>
							<h5>{ "Social media" }</h5>
							<ul>
							{
								SOCIAL_LINKS.iter().map(|link| html! {
									<li key={ link.label }>
										<Icon path={ social_path(link.icon) } size={ 16 } class={ classes!("muted") } />
										<a href={ link.href } aria-label={ link.aria_label }>{ link.label }</a>
									</li>
								}).collect::<Html>()
							}
							</ul>
						</div>
					</div>
					<div id="bottom-bar">
						<p>{ &content.copyright }</p>
						<span>
						{
							LEGAL_LINKS.iter().map(|(label, href)| html! {
								<a href={ *href }>{ *label }</a>
							}).collect::<Html>()
						}
						</span>
					</div>
				</div>
			</footer>
		</section>
	}
}
