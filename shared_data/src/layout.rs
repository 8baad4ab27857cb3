// The fixed, non-editable pieces of the landing page. The renderers project these together with
// each section's (possibly overridden) text.

pub const BRAND_NAME: &str = "GovLink";
pub const LOGO_PATH: &str = "/icons/govlink-logo.png";

pub const FOOTER_NAV: [&str; 3] = ["Home", "Features", "Try Now"];

/// The in-page anchor a navigation label links to, e.g. `"Try Now"` -> `"#try-now"`
#[must_use]
pub fn nav_anchor(label: &str) -> String {
	let slug = label.split_whitespace()
		.map(str::to_lowercase)
		.collect::<Vec<_>>()
		.join("-");

	format!("#{slug}")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialIcon {
	Twitter,
	Youtube,
	Instagram,
	Threads
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
	pub label: &'static str,
	pub aria_label: &'static str,
	pub href: &'static str,
	pub icon: SocialIcon
}

pub const SOCIAL_LINKS: [SocialLink; 4] = [
	SocialLink { label: "X/Twitter", aria_label: "Follow GovLink on Twitter", href: "#", icon: SocialIcon::Twitter },
	SocialLink { label: "YouTube", aria_label: "Subscribe to GovLink on YouTube", href: "#", icon: SocialIcon::Youtube },
	SocialLink { label: "Instagram", aria_label: "Follow GovLink on Instagram", href: "#", icon: SocialIcon::Instagram },
	SocialLink { label: "Threads", aria_label: "Follow GovLink on Threads", href: "#", icon: SocialIcon::Threads },
];

/// (label, href)
pub const LEGAL_LINKS: [(&str, &str); 2] = [
	("Revision Policy", "/revisions"),
	("Terms & Conditions", "/t&c"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSide {
	Left,
	Right
}

/// One of the phone-mockup cards above the footer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ShowcaseCard {
	pub eyebrow: &'static str,
	pub heading: &'static str,
	pub body: &'static str,
	pub image: &'static str,
	pub image_side: ImageSide
}

pub const SHOWCASE_CARDS: [ShowcaseCard; 3] = [
	ShowcaseCard {
		eyebrow: "TAX INVOICES",
		heading: "Access your tax invoices instantly",
		body: "View all your tax invoices and check compliance status. Our AI will guide you to the \
			official tax portal when needed for detailed records or corrections.",
		image: "/images/discord-light-2.jpg",
		image_side: ImageSide::Left
	},
	ShowcaseCard {
		eyebrow: "COURT SUMMONS CHECK",
		heading: "Check for any pending court summons or legal notices",
		body: "Stay informed about any court summons, legal notices, or pending cases. Our AI will \
			provide direct links to the official court systems when action is required.",
		image: "/images/discord-light-3.jpg",
		image_side: ImageSide::Right
	},
	ShowcaseCard {
		eyebrow: "LICENSE EXPIRY ALERTS",
		heading: "Track all your license expiration dates in one place",
		body: "Monitor driving licenses, professional licenses, permits, and certifications. Get \
			timely reminders and direct links to official renewal portals when it's time to renew.",
		image: "/images/discord-light-4.jpg",
		image_side: ImageSide::Left
	},
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureIcon {
	Lightning,
	Cross,
	Language
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureCard {
	pub eyebrow: &'static str,
	pub title: &'static str,
	pub icon: FeatureIcon,
	/// Hidden on narrow screens
	pub desktop_only: bool
}

pub const FEATURE_CARDS: [FeatureCard; 3] = [
	FeatureCard {
		eyebrow: "INSTANT UPDATES",
		title: "Get instant updates on your status without the wait.",
		icon: FeatureIcon::Lightning,
		desktop_only: true
	},
	FeatureCard {
		eyebrow: "NO MORE BOOKMARKS",
		title: "Our AI Assistant will guide you to the right government service portal.",
		icon: FeatureIcon::Cross,
		desktop_only: true
	},
	FeatureCard {
		eyebrow: "AI-POWERED SIMPLICITY",
		title: "Ask in plain language and get clear answers.",
		icon: FeatureIcon::Language,
		desktop_only: false
	},
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChatLink {
	pub label: &'static str,
	pub href: &'static str,
	/// CSS class that carries the platform's brand colour
	pub class: &'static str
}

pub const HERO_CHAT_LINKS: [ChatLink; 2] = [
	ChatLink {
		label: "Discord",
		href: "https://discord.com/oauth2/authorize?client_id=1418806394634633254",
		class: "chat-button discord"
	},
	ChatLink {
		label: "Telegram",
		href: "https://t.me/MyGovLinkBot",
		class: "chat-button telegram"
	},
];

pub const HERO_PHONE_IMAGE: &str = "/images/discord-light.png";

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn nav_anchors() {
		assert_eq!(
			FOOTER_NAV.map(nav_anchor),
			["#home".to_string(), "#features".into(), "#try-now".into()]
		);
		assert_eq!(nav_anchor("  Spaced   Out "), "#spaced-out");
	}

	#[test]
	fn showcase_cards_alternate_sides() {
		let sides = SHOWCASE_CARDS.map(|c| c.image_side);
		assert_eq!(sides, [ImageSide::Left, ImageSide::Right, ImageSide::Left]);
	}

	#[test]
	fn exactly_one_feature_card_shows_on_mobile() {
		assert_eq!(FEATURE_CARDS.iter().filter(|c| !c.desktop_only).count(), 1);
	}

	#[test]
	fn external_links_are_https() {
		assert!(HERO_CHAT_LINKS.iter().all(|l| l.href.starts_with("https://")));
	}
}
