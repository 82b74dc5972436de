use crate::core::format::current_year;
use crate::core::preferences::use_preferences;
use crate::core::sections::SiteSection;
use crate::i18n;
use crate::locale_controls::{ControlsLayout, LanguageCurrencyControls};
use crate::newsletter::Newsletter;
use crate::t;
use dioxus::prelude::*;
use once_cell::sync::OnceCell;

const FOOTER_CSS: Asset = asset!("/assets/styling/footer.css");
const FOOTER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/footer.css"
));

/// Platforms register one builder per footer target so the shared footer can
/// render their typed router `Link`s without knowing each platform's `Route` enum.
///
/// Each function receives the localized label and must return a link that
/// already *contains* it:
/// ```ignore
/// fn link_listings(label: &str) -> Element {
///     rsx!(Link { class: "footer__link", to: Route::Listings {}, "{label}" })
/// }
/// ```
///
/// Without a registration the footer falls back to plain anchors on
/// [`SiteSection::path`].
pub struct FooterLinks {
    pub listings: fn(label: &str) -> Element,
    pub vip_access: fn(label: &str) -> Element,
    pub bitcoin: fn(label: &str) -> Element,
    pub contact: fn(label: &str) -> Element,
    pub policy: fn(label: &str) -> Element,
}

impl FooterLinks {
    fn render(&self, section: SiteSection, label: &str) -> Element {
        let build = match section {
            SiteSection::Listings => self.listings,
            SiteSection::VipAccess => self.vip_access,
            SiteSection::Bitcoin => self.bitcoin,
            SiteSection::Contact => self.contact,
            SiteSection::Policy => self.policy,
        };
        build(label)
    }
}

static FOOTER_LINKS: OnceCell<FooterLinks> = OnceCell::new();

/// First registration wins.
pub fn register_footer_links(links: FooterLinks) {
    if FOOTER_LINKS.set(links).is_err() {
        tracing::debug!("footer links already registered");
    }
}

fn section_link(section: SiteSection, label: String) -> Element {
    match FOOTER_LINKS.get() {
        Some(links) => links.render(section, &label),
        None => rsx! {
            a { class: "footer__link", href: section.path(), "{label}" }
        },
    }
}

#[component]
pub fn Footer(#[props(default)] controls: ControlsLayout) -> Element {
    i18n::init();

    // Reading the shared language subscribes the footer to language changes.
    let prefs = use_preferences();
    let lang_marker = prefs.language();
    let year = current_year();

    #[cfg(debug_assertions)]
    tracing::debug!(lang = %lang_marker, "Footer render");

    rsx! {
        document::Link { rel: "stylesheet", href: FOOTER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{FOOTER_CSS_INLINE}" }
        }

        footer { id: "site-footer", class: "footer",
            div { style: "display:none", "{lang_marker}" }
            div { class: "footer__inner",
                div { class: "footer__brand",
                    span { class: "footer__brand-mark", {t!("brand-name")} }
                    p { class: "footer__tagline", {t!("finding-you-perfect")} }
                }

                nav { class: "footer__column", aria_label: t!("quick-links"),
                    h4 { class: "footer__heading", {t!("quick-links")} }
                    ul { class: "footer__links",
                        li { {section_link(SiteSection::Listings, t!("footer-listings"))} }
                        li { {section_link(SiteSection::VipAccess, t!("footer-vip-access"))} }
                        li { {section_link(SiteSection::Bitcoin, t!("footer-bitcoin"))} }
                        li { {section_link(SiteSection::Contact, t!("footer-contact"))} }
                    }
                }

                nav { class: "footer__column", aria_label: t!("legal"),
                    h4 { class: "footer__heading", {t!("legal")} }
                    ul { class: "footer__links",
                        li { {section_link(SiteSection::Policy, t!("footer-privacy"))} }
                        li { {section_link(SiteSection::Policy, t!("footer-terms"))} }
                        li { {section_link(SiteSection::Policy, t!("footer-cookies"))} }
                    }
                }

                div { class: "footer__column footer__column--newsletter",
                    Newsletter {}
                }
            }

            div { class: "footer__bottom",
                p { class: "footer__copyright", {t!("footer-copyright", year = year)} }
                LanguageCurrencyControls { layout: controls }
            }
        }
    }
}
