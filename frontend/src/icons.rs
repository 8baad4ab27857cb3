use shared_data::layout::{FeatureIcon, SocialIcon};
use yew::prelude::*;

// Path data from Feather (https://feathericons.com), drawn with a stroke rather than a fill
const ZAP: &str = "M13 2 3 14h9l-1 8 10-12h-9l1-8z";
const CROSS: &str = "M18 6 6 18M6 6l12 12";
const GLOBE: &str = "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20zM2 12h20M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z";
const TWITTER: &str = "M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z";
const YOUTUBE: &str = "M22.54 6.42a2.78 2.78 0 0 0-1.94-2C18.88 4 12 4 12 4s-6.88 0-8.6.46a2.78 2.78 0 0 0-1.94 2A29 29 0 0 0 1 11.75a29 29 0 0 0 .46 5.33A2.78 2.78 0 0 0 3.4 19c1.72.46 8.6.46 8.6.46s6.88 0 8.6-.46a2.78 2.78 0 0 0 1.94-2 29 29 0 0 0 .46-5.25 29 29 0 0 0-.46-5.33zM9.75 15.02l5.75-3.27-5.75-3.27v6.54z";
const INSTAGRAM: &str = "M7 2h10a5 5 0 0 1 5 5v10a5 5 0 0 1-5 5H7a5 5 0 0 1-5-5V7a5 5 0 0 1 5-5zM16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37zM17.5 6.5h.01";
const MESSAGE_CIRCLE: &str = "M21 11.5a8.38 8.38 0 0 1-.9 3.8 8.5 8.5 0 0 1-7.6 4.7 8.38 8.38 0 0 1-3.8-.9L3 21l1.9-5.7a8.38 8.38 0 0 1-.9-3.8 8.5 8.5 0 0 1 4.7-7.6 8.38 8.38 0 0 1 3.8-.9h.5a8.48 8.48 0 0 1 8 8v.5z";
pub const SEND: &str = "M22 2 11 13M22 2l-7 20-4-9-9-4 20-7z";
pub const MESSAGE_SQUARE: &str = "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z";

#[derive(Properties, PartialEq)]
pub struct IconProps {
	pub path: &'static str,
	#[prop_or(20)]
	pub size: u32,
	#[prop_or_default]
	pub class: Classes
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
	let size = props.size.to_string();

	html! {
		<svg
			xmlns="http://www.w3.org/2000/svg"
			width={ size.clone() }
			height={ size }
			viewBox="0 0 24 24"
			fill="none"
			stroke="currentColor"
			stroke-width="2"
			stroke-linecap="round"
			stroke-linejoin="round"
			class={ props.class.clone() }
			aria-hidden="true"
		>
			<path d={ props.path } />
		</svg>
	}
}

pub fn social_path(icon: SocialIcon) -> &'static str {
	match icon {
		SocialIcon::Twitter => TWITTER,
		SocialIcon::Youtube => YOUTUBE,
		SocialIcon::Instagram => INSTAGRAM,
		SocialIcon::Threads => MESSAGE_CIRCLE
	}
}

pub fn feature_path(icon: FeatureIcon) -> &'static str {
	match icon {
		FeatureIcon::Lightning => ZAP,
		FeatureIcon::Cross => CROSS,
		FeatureIcon::Language => GLOBE
	}
}
