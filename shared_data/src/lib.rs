mod config;
mod content;
mod document;
mod error;
mod provider;
mod slot;
mod store;
pub mod layout;

pub use config::{ContentConfig, OverridePolicy, CONTENT_STORAGE_KEY};
pub use content::{FeaturesContent, FooterContent, HeroContent, Section};
pub use document::OverrideDocument;
pub use error::{OverrideReadFailure, StoreError};
pub use provider::{ContentProvider, ProviderStatus};
pub use slot::{Phase, SectionSlot};
pub use store::{load_override, read_raw, resolve, MemoryStore, OverrideStore};

pub static BASE_STYLE: &str = r#"
* {
	--page-background: #05070a;
	--main-text: #ffffff;
	--secondary-text: #a3a3a3;
	--muted-text: #737373;
	--accent: #67e8f9;
	--glass-background: rgba(255, 255, 255, 0.05);
	--glass-border: rgba(255, 255, 255, 0.1);
	--discord: #5865f2;
	--discord-hover: #4752c4;
	--telegram: #0088cc;
	--telegram-hover: #006699;
	box-sizing: border-box;
	font-family: Inter, system-ui, sans-serif;
}
body {
	background-color: var(--page-background);
	color: var(--main-text);
	margin: 0;
}
a {
	color: inherit;
	text-decoration: none;
}
a:hover {
	color: var(--accent);
}
.container {
	max-width: 1200px;
	margin: 0 auto;
	padding: 0 16px;
}
.liquid-glass {
	background-color: var(--glass-background);
	border: 1px solid var(--glass-border);
	backdrop-filter: blur(24px);
	border-radius: 24px;
}
.eyebrow {
	font-size: 11px;
	letter-spacing: 0.2em;
	color: var(--accent);
	margin: 0 0 8px 0;
}
.muted {
	color: var(--secondary-text);
}
"#;

pub static LANDING_STYLE: &str = r"
#home {
	margin-top: 80px;
}
#hero-row {
	display: flex;
	align-items: center;
	justify-content: center;
	gap: 64px;
	padding: 56px 0;
}
#footer-brand > .brand {
	justify-content: flex-start;
}
#hero-copy {
	flex: 1;
	max-width: 70%;
	text-align: right;
}
.brand {
	display: flex;
	justify-content: flex-end;
	align-items: center;
	gap: 8px;
	text-transform: uppercase;
	letter-spacing: 0.25em;
	color: var(--accent);
}
#hero-headline {
	font-size: 56px;
	font-weight: 800;
}
#hero-headline > span {
	display: block;
}
.highlight {
	color: var(--accent);
	text-shadow: 0 0 20px rgba(132, 204, 22, 0.35);
}
.chat-button {
	display: inline-flex;
	gap: 6px;
	border-radius: 999px;
	padding: 8px 24px;
	font-weight: 700;
}
.chat-button.discord {
	background-color: var(--discord);
}
.chat-button.discord:hover {
	background-color: var(--discord-hover);
}
.chat-button.telegram {
	background-color: var(--telegram);
}
.chat-button.telegram:hover {
	background-color: var(--telegram-hover);
}
.phone {
	position: relative;
	width: 256px;
	aspect-ratio: 9 / 19;
	overflow: hidden;
	border-radius: 28px;
	background-color: black;
}
.phone > img {
	position: absolute;
	width: 100%;
	height: 100%;
	object-fit: cover;
}
.phone-tag {
	position: relative;
	margin: 12px;
	display: inline-block;
	padding: 2px 8px;
	border-radius: 999px;
	background-color: rgba(0, 0, 0, 0.4);
	font-size: 10px;
	text-transform: uppercase;
	color: var(--accent);
}
#features {
	margin-top: 128px;
	padding: 64px 16px;
}
#features > h2 {
	text-align: center;
	font-size: 48px;
	font-weight: 800;
}
#feature-grid, .showcase-card {
	display: grid;
	grid-template-columns: repeat(3, 1fr);
	gap: 24px;
}
.showcase-card {
	grid-template-columns: 1fr 1fr;
	align-items: center;
	padding: 40px;
	margin: 32px 0;
}
.showcase-card.image-right > .showcase-copy {
	text-align: right;
}
.feature-icon {
	display: flex;
	justify-content: center;
	margin-top: 64px;
	font-size: 160px;
}
@media (max-width: 768px) {
	.desktop-only {
		display: none;
	}
	#feature-grid, .showcase-card {
		grid-template-columns: 1fr;
	}
}
footer {
	border-top: 1px solid var(--glass-border);
	padding: 40px 0 80px 0;
}
#footer-grid {
	display: grid;
	grid-template-columns: 1.2fr 1fr 1fr;
	gap: 32px;
}
#footer-grid h5 {
	text-transform: uppercase;
	letter-spacing: 0.2em;
	color: var(--secondary-text);
}
#footer-grid ul {
	list-style: none;
	padding: 0;
}
#bottom-bar {
	margin-top: 32px;
	padding-top: 24px;
	border-top: 1px solid var(--glass-border);
	display: flex;
	justify-content: space-between;
	font-size: 12px;
	color: var(--muted-text);
}
";
