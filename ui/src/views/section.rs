use dioxus::prelude::*;

use crate::core::preferences::use_preferences;
use crate::core::sections::SiteSection;
use crate::t;

/// Landing page for one of the footer's static targets.
#[component]
pub fn SectionPage(section: SiteSection) -> Element {
    let lang_marker = use_preferences().language();

    let (title, body) = match section {
        SiteSection::Listings => (t!("section-listings-title"), t!("section-listings-body")),
        SiteSection::VipAccess => (t!("section-vip-access-title"), t!("section-vip-access-body")),
        SiteSection::Bitcoin => (t!("section-bitcoin-title"), t!("section-bitcoin-body")),
        SiteSection::Contact => (t!("section-contact-title"), t!("section-contact-body")),
        SiteSection::Policy => (t!("section-policy-title"), t!("section-policy-body")),
    };

    rsx! {
        div { style: "display:none", "{lang_marker}" }
        section { class: "page page-section",
            h1 { "{title}" }
            p { "{body}" }
        }
    }
}
